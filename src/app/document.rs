use std::path::PathBuf;
use std::time::SystemTime;

use super::markdown::extract_filename;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(pub u64);

/// One open file buffer. The in-memory `content` is the source of truth for
/// unsaved edits; `last_modified` is display bookkeeping only and plays no
/// part in conflict handling.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: DocumentId,
    /// Absolute path on disk, or `None` for a buffer that was never saved.
    pub path: Option<PathBuf>,
    pub name: String,
    pub content: String,
    /// True iff `content` differs from the last loaded/persisted snapshot.
    /// Tracked per document so background tabs keep their own state.
    pub dirty: bool,
    pub last_modified: Option<SystemTime>,
}

impl Document {
    pub fn from_file(
        id: DocumentId,
        path: PathBuf,
        content: String,
        last_modified: Option<SystemTime>,
    ) -> Self {
        let name = extract_filename(&path.to_string_lossy());
        Self {
            id,
            path: Some(path),
            name,
            content,
            dirty: false,
            last_modified,
        }
    }

    pub fn untitled(id: DocumentId, counter: u32) -> Self {
        let name = if counter == 1 {
            "Untitled".to_string()
        } else {
            format!("Untitled {}", counter)
        };
        Self {
            id,
            path: None,
            name,
            content: String::new(),
            dirty: false,
            last_modified: None,
        }
    }

    /// Buffer created from externally supplied content (e.g. a drag-dropped
    /// snippet) with no backing path. Non-empty content starts dirty since
    /// nothing on disk holds it.
    pub fn imported(id: DocumentId, name: String, content: String) -> Self {
        let dirty = !content.is_empty();
        Self {
            id,
            path: None,
            name,
            content,
            dirty,
            last_modified: None,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_file_derives_name_and_starts_clean() {
        let doc = Document::from_file(
            DocumentId(1),
            PathBuf::from("/notes/todo.md"),
            "# Todo".to_string(),
            None,
        );
        assert_eq!(doc.name, "todo.md");
        assert_eq!(doc.content, "# Todo");
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_untitled_naming() {
        assert_eq!(Document::untitled(DocumentId(1), 1).name, "Untitled");
        assert_eq!(Document::untitled(DocumentId(2), 2).name, "Untitled 2");
    }

    #[test]
    fn test_imported_content_starts_dirty() {
        let doc = Document::imported(DocumentId(1), "dropped.md".to_string(), "body".to_string());
        assert!(doc.is_dirty());
        assert!(doc.path.is_none());

        let empty = Document::imported(DocumentId(2), "empty.md".to_string(), String::new());
        assert!(!empty.is_dirty());
    }

    #[test]
    fn test_mark_clean() {
        let mut doc = Document::imported(DocumentId(1), "a.md".to_string(), "x".to_string());
        assert!(doc.is_dirty());
        doc.mark_clean();
        assert!(!doc.is_dirty());
    }
}
