use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};

use super::messages::AppEvent;

/// The OS-notification side of file watching. Kept behind a trait so the
/// registry's dedup/lifecycle logic is testable without touching the OS.
pub trait WatchBackend {
    fn watch(&mut self, path: &Path) -> io::Result<()>;
    fn unwatch(&mut self, path: &Path) -> io::Result<()>;
}

/// Maintains at most one active subscription per path.
///
/// The registry does no content interpretation; its whole job is making
/// `watch` idempotent and releasing the underlying listener on teardown so
/// repeated open/close cycles on the same path cannot accumulate duplicate
/// callbacks.
pub struct WatchRegistry {
    backend: Box<dyn WatchBackend>,
    watched: BTreeSet<PathBuf>,
}

impl WatchRegistry {
    pub fn new(backend: Box<dyn WatchBackend>) -> Self {
        Self {
            backend,
            watched: BTreeSet::new(),
        }
    }

    /// Subscribe to external changes for `path`. Returns without touching
    /// the backend if a subscription already exists.
    pub fn watch(&mut self, path: &Path) -> io::Result<()> {
        if self.watched.contains(path) {
            return Ok(());
        }
        self.backend.watch(path)?;
        self.watched.insert(path.to_path_buf());
        Ok(())
    }

    pub fn unwatch(&mut self, path: &Path) {
        if self.watched.remove(path)
            && let Err(err) = self.backend.unwatch(path)
        {
            log::warn!("failed to release watch on {}: {}", path.display(), err);
        }
    }

    pub fn unwatch_all(&mut self) {
        let paths: Vec<PathBuf> = self.watched.iter().cloned().collect();
        for path in paths {
            self.unwatch(&path);
        }
    }

    pub fn is_watching(&self, path: &Path) -> bool {
        self.watched.contains(path)
    }

    pub fn count(&self) -> usize {
        self.watched.len()
    }
}

/// notify-backed watcher. Change events are forwarded as
/// [`AppEvent::FileChanged`] on the channel handed in at construction.
pub struct NotifyBackend {
    watcher: RecommendedWatcher,
}

impl NotifyBackend {
    pub fn new(events: Sender<AppEvent>) -> io::Result<Self> {
        let watcher = notify::recommended_watcher(
            move |res: Result<notify::Event, notify::Error>| match res {
                Ok(event) => {
                    let relevant = matches!(
                        event.kind,
                        notify::EventKind::Modify(_)
                            | notify::EventKind::Create(_)
                            | notify::EventKind::Remove(_)
                    );
                    if relevant {
                        for path in event.paths {
                            // A closed receiver just means the app is
                            // shutting down.
                            let _ = events.send(AppEvent::FileChanged(path));
                        }
                    }
                }
                Err(err) => log::error!("file watcher error: {}", err),
            },
        )
        .map_err(io::Error::other)?;

        Ok(Self { watcher })
    }
}

impl WatchBackend for NotifyBackend {
    fn watch(&mut self, path: &Path) -> io::Result<()> {
        self.watcher
            .watch(path, RecursiveMode::NonRecursive)
            .map_err(io::Error::other)
    }

    fn unwatch(&mut self, path: &Path) -> io::Result<()> {
        self.watcher.unwatch(path).map_err(io::Error::other)
    }
}

/// No-op backend, used when the OS watcher cannot be started. The registry
/// still tracks paths so the rest of the app behaves uniformly.
pub struct NullBackend;

impl WatchBackend for NullBackend {
    fn watch(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }

    fn unwatch(&mut self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}
