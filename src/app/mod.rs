//! Application core.
//!
//! # Structure
//!
//! - `document` / `session` - the open-document model and its orchestrator
//! - `watch` - one-subscription-per-path file watching
//! - `fs_access` - the filesystem seam the session talks through
//! - `recent`, `settings` - small persisted state (JSON under user dirs)
//! - `markdown` - pure text transforms (render, sanitize, counters)

pub mod document;
pub mod error;
pub mod file_filters;
pub mod fs_access;
pub mod markdown;
pub mod messages;
pub mod recent;
pub mod session;
pub mod settings;
pub mod watch;

// Re-exports for convenient external access
pub use document::{Document, DocumentId};
pub use error::{AppError, SessionError};
pub use fs_access::{FileAccess, NativeFiles};
pub use messages::AppEvent;
pub use recent::RecentFiles;
pub use session::SessionManager;
pub use settings::{UiSettings, ViewMode};
pub use watch::{NotifyBackend, NullBackend, WatchBackend, WatchRegistry};
