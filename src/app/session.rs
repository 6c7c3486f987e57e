use std::path::Path;
use std::time::SystemTime;

use super::document::{Document, DocumentId};
use super::error::SessionError;
use super::file_filters::{is_markdown_path, markdown_filter};
use super::fs_access::FileAccess;
use super::recent::RecentFiles;
use super::settings::ViewMode;
use super::watch::WatchRegistry;
use crate::ui::file_dialogs::DialogService;

/// Owns the set of open documents and the active pointer, and orchestrates
/// open/save/reload/close against the file access layer, the watch registry,
/// and the recent-files list.
///
/// All methods mutate through `&mut self`; the manager is meant to live on a
/// single event loop that also drains the watcher channel, so there is no
/// locking in here.
pub struct SessionManager<F: FileAccess> {
    documents: Vec<Document>,
    active_id: Option<DocumentId>,
    next_id: u64,
    untitled_counter: u32,
    view_mode: ViewMode,
    fs: F,
    watches: WatchRegistry,
    recent: RecentFiles,
}

impl<F: FileAccess> SessionManager<F> {
    pub fn new(fs: F, watches: WatchRegistry, recent: RecentFiles) -> Self {
        Self {
            documents: Vec::new(),
            active_id: None,
            next_id: 1,
            untitled_counter: 0,
            view_mode: ViewMode::default(),
            fs,
            watches,
            recent,
        }
    }

    fn next_document_id(&mut self) -> DocumentId {
        let id = DocumentId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Prompt for a markdown file and open it. `Ok(None)` means the dialog
    /// was cancelled.
    pub fn open(
        &mut self,
        dialogs: &dyn DialogService,
    ) -> Result<Option<DocumentId>, SessionError> {
        match dialogs.choose_open_path(&markdown_filter()) {
            Some(path) => self.open_by_path(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Open a file by path, deduplicating against already-open documents.
    ///
    /// If a document with this exact path is already open it is re-activated
    /// and marked clean; the fresh read is discarded so unsaved local edits
    /// are never clobbered by re-opening. A stale on-disk read dropped this
    /// way is picked up later through the watcher.
    pub fn open_by_path(&mut self, path: &Path) -> Result<DocumentId, SessionError> {
        if !is_markdown_path(path) {
            return Err(SessionError::InvalidFileType(path.to_path_buf()));
        }

        let file = self.fs.read(path).map_err(|source| SessionError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let id = match self.find_by_path(path) {
            Some(existing) => {
                self.active_id = Some(existing);
                if let Some(doc) = self.doc_by_id_mut(existing) {
                    doc.mark_clean();
                }
                existing
            }
            None => {
                let id = self.next_document_id();
                let doc =
                    Document::from_file(id, path.to_path_buf(), file.content, file.last_modified);
                self.documents.push(doc);
                self.active_id = Some(id);
                id
            }
        };

        // Best-effort side effects; neither may fail the open.
        if let Err(err) = self.recent.add(path, &file.name) {
            log::warn!("failed to record recent file {}: {}", path.display(), err);
        }
        if let Err(err) = self.watches.watch(path) {
            log::warn!("failed to watch {}: {}", path.display(), err);
        }

        Ok(id)
    }

    /// Create an empty unsaved buffer and make it active.
    pub fn new_untitled(&mut self) -> DocumentId {
        self.untitled_counter += 1;
        let id = self.next_document_id();
        let doc = Document::untitled(id, self.untitled_counter);
        self.documents.push(doc);
        self.active_id = Some(id);
        id
    }

    /// Add externally supplied content (e.g. a drag-dropped snippet) as a
    /// new unsaved buffer and make it active.
    pub fn import_content(&mut self, name: &str, content: String) -> DocumentId {
        let id = self.next_document_id();
        let doc = Document::imported(id, name.to_string(), content);
        self.documents.push(doc);
        self.active_id = Some(id);
        id
    }

    /// Replace the active document's content. Called on every keystroke:
    /// no I/O, no scanning.
    pub fn set_content(&mut self, text: String) {
        if let Some(doc) = self.active_doc_mut() {
            doc.content = text;
            doc.dirty = true;
        }
    }

    /// Write the active document back to its path.
    pub fn save(&mut self) -> Result<(), SessionError> {
        let Some(idx) = self.active_index() else {
            return Err(SessionError::NoTarget);
        };
        let Some(path) = self.documents[idx].path.clone() else {
            return Err(SessionError::NoTarget);
        };

        self.fs
            .write(&path, &self.documents[idx].content)
            .map_err(|source| SessionError::Write {
                path: path.clone(),
                source,
            })?;

        let doc = &mut self.documents[idx];
        doc.dirty = false;
        doc.last_modified = Some(SystemTime::now());
        Ok(())
    }

    /// Prompt for a destination and save the active document there.
    /// `Ok(None)` means the dialog was cancelled.
    pub fn save_as(
        &mut self,
        dialogs: &dyn DialogService,
    ) -> Result<Option<DocumentId>, SessionError> {
        let Some(doc) = self.active_doc() else {
            return Err(SessionError::NoTarget);
        };
        let default_name = if doc.path.is_some() {
            doc.name.clone()
        } else {
            "untitled.md".to_string()
        };

        match dialogs.choose_save_path(&markdown_filter(), &default_name) {
            Some(path) => self.save_as_path(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Write the active document to `path` and replace its identity: the old
    /// entry is removed and a fresh document (new id, new path/name) takes
    /// its place in the display order.
    ///
    /// A path owned by a *different* open document is rejected outright so
    /// two documents can never share a path, even transiently.
    pub fn save_as_path(&mut self, path: &Path) -> Result<DocumentId, SessionError> {
        let Some(idx) = self.active_index() else {
            return Err(SessionError::NoTarget);
        };
        let old_id = self.documents[idx].id;

        if let Some(other) = self.find_by_path(path)
            && other != old_id
        {
            return Err(SessionError::TargetAlreadyOpen(path.to_path_buf()));
        }

        self.fs
            .write(path, &self.documents[idx].content)
            .map_err(|source| SessionError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        let new_id = self.next_document_id();
        let old = self.documents.remove(idx);
        let doc = Document::from_file(
            new_id,
            path.to_path_buf(),
            old.content,
            Some(SystemTime::now()),
        );
        self.documents.insert(idx, doc);
        self.active_id = Some(new_id);

        // The old path no longer backs any document; stop listening for it.
        if let Some(old_path) = old.path
            && old_path.as_path() != path
            && self.find_by_path(&old_path).is_none()
        {
            self.watches.unwatch(&old_path);
        }

        let name = self.documents[idx].name.clone();
        if let Err(err) = self.recent.add(path, &name) {
            log::warn!("failed to record recent file {}: {}", path.display(), err);
        }
        if let Err(err) = self.watches.watch(path) {
            log::warn!("failed to watch {}: {}", path.display(), err);
        }

        Ok(new_id)
    }

    /// Re-read the active document from disk, overwriting its content in
    /// place. On failure the document is untouched.
    pub fn reload(&mut self) -> Result<(), SessionError> {
        let Some(idx) = self.active_index() else {
            return Err(SessionError::NoTarget);
        };
        let Some(path) = self.documents[idx].path.clone() else {
            return Err(SessionError::NoTarget);
        };

        let file = self.fs.read(&path).map_err(|source| SessionError::Read {
            path: path.clone(),
            source,
        })?;

        let doc = &mut self.documents[idx];
        doc.content = file.content;
        doc.dirty = false;
        doc.last_modified = file.last_modified;
        Ok(())
    }

    /// Remove a document. If it was active, the first remaining document in
    /// display order becomes active (or none).
    pub fn close(&mut self, id: DocumentId) {
        let Some(idx) = self.documents.iter().position(|d| d.id == id) else {
            return;
        };
        let doc = self.documents.remove(idx);

        if let Some(path) = doc.path
            && self.find_by_path(&path).is_none()
        {
            self.watches.unwatch(&path);
        }

        if self.active_id == Some(id) {
            self.active_id = self.documents.first().map(|d| d.id);
        }
    }

    /// Switch the active document. Unknown ids are ignored.
    pub fn switch_active(&mut self, id: DocumentId) {
        if self.documents.iter().any(|d| d.id == id) {
            self.active_id = Some(id);
        }
    }

    /// React to an external change notification for `path`.
    ///
    /// Auto-reload happens only when the affected document is the active one
    /// and has no unsaved edits; in every other case the event is dropped.
    /// Background documents keep possibly-stale content rather than risking
    /// a silent discard of invisible unsaved work.
    pub fn handle_external_change(&mut self, path: &Path) {
        let Some(id) = self.find_by_path(path) else {
            return;
        };
        if self.active_id != Some(id) {
            return;
        }
        if self.doc_by_id(id).is_some_and(|d| d.is_dirty()) {
            log::debug!(
                "ignoring external change to {}: unsaved edits",
                path.display()
            );
            return;
        }

        if let Err(err) = self.reload() {
            log::warn!("auto-reload failed: {}", err);
        }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn count(&self) -> usize {
        self.documents.len()
    }

    pub fn active_id(&self) -> Option<DocumentId> {
        self.active_id
    }

    pub fn active_doc(&self) -> Option<&Document> {
        let active_id = self.active_id?;
        self.documents.iter().find(|d| d.id == active_id)
    }

    pub fn active_doc_mut(&mut self) -> Option<&mut Document> {
        let active_id = self.active_id?;
        self.documents.iter_mut().find(|d| d.id == active_id)
    }

    fn active_index(&self) -> Option<usize> {
        let active_id = self.active_id?;
        self.documents.iter().position(|d| d.id == active_id)
    }

    /// True iff the active document has unsaved edits.
    pub fn is_modified(&self) -> bool {
        self.active_doc().is_some_and(Document::is_dirty)
    }

    /// Find a document by file path
    pub fn find_by_path(&self, path: &Path) -> Option<DocumentId> {
        self.documents
            .iter()
            .find(|d| d.path.as_deref() == Some(path))
            .map(|d| d.id)
    }

    pub fn doc_by_id(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == id)
    }

    pub fn doc_by_id_mut(&mut self, id: DocumentId) -> Option<&mut Document> {
        self.documents.iter_mut().find(|d| d.id == id)
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn watches(&self) -> &WatchRegistry {
        &self.watches
    }

    /// Drop every watch subscription (app shutdown).
    pub fn unwatch_all(&mut self) {
        self.watches.unwatch_all();
    }
}
