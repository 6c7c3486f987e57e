use std::path::PathBuf;

/// Events delivered to the session's event loop.
///
/// The watcher callback thread only ever converts filesystem notifications
/// into these and pushes them onto an mpsc channel; all session mutation
/// happens on the draining side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The file at this path was modified outside the editor.
    FileChanged(PathBuf),
}
