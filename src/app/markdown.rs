use std::path::Path;

use pulldown_cmark::{Options, Parser, html};
use regex_lite::Regex;

/// Render markdown text to raw HTML.
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(text, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

/// Strip the obvious XSS vectors out of rendered HTML: script and iframe
/// elements and inline `on*` event handler attributes.
pub fn sanitize_html(html: &str) -> String {
    const PATTERNS: &[&str] = &[
        r"(?is)<script\b.*?</script>",
        r"(?is)<iframe\b.*?</iframe>",
        r#"(?i)\son\w+\s*=\s*"[^"]*""#,
        r"(?i)\son\w+\s*=\s*'[^']*'",
    ];

    let mut out = html.to_string();
    for pattern in PATTERNS {
        if let Ok(re) = Regex::new(pattern) {
            out = re.replace_all(&out, "").into_owned();
        }
    }
    out
}

/// Markdown to sanitized, display-ready HTML.
pub fn render_preview(text: &str) -> String {
    sanitize_html(&render_markdown(text))
}

/// Extract a title from markdown content: the first `#` heading, falling
/// back to the first line, then "Untitled".
pub fn extract_title(content: &str) -> String {
    for line in content.lines() {
        if let Some(rest) = line.strip_prefix("# ") {
            let title = rest.trim();
            if !title.is_empty() {
                return title.to_string();
            }
        }
    }

    content
        .lines()
        .next()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .unwrap_or("Untitled")
        .to_string()
}

/// Count words in markdown content, ignoring punctuation-only tokens.
pub fn count_words(content: &str) -> usize {
    let stripped: String = content
        .chars()
        .map(|c| match c {
            '#' | '*' | '_' | '~' | '`' | '>' | '[' | ']' | '(' | ')' => ' ',
            other => other,
        })
        .collect();
    stripped.split_whitespace().count()
}

pub fn count_characters(content: &str) -> usize {
    content.chars().count()
}

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}
