use std::path::Path;

/// Extensions recognized as markdown. Checked case-insensitively everywhere.
pub const MARKDOWN_EXTENSIONS: &[&str] = &["md", "markdown", "mdown", "mkd", "mkdn"];

/// A named extension filter for file dialogs.
pub struct FileFilter {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
}

/// The filter used by every open/save dialog in the app.
pub fn markdown_filter() -> FileFilter {
    FileFilter {
        name: "Markdown",
        extensions: MARKDOWN_EXTENSIONS,
    }
}

/// Check if a path has a recognized markdown extension.
pub fn is_markdown_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            MARKDOWN_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}
