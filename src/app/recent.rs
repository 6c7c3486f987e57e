use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::error::Result;

pub const MAX_RECENT_FILES: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentFile {
    pub path: PathBuf,
    pub name: String,
    pub last_opened: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct RecentFilesData {
    files: Vec<RecentFile>,
}

/// Bounded, persisted list of recently opened files.
///
/// The session registers every successful open/save-as here as a best-effort
/// side effect; it never reads the list back. An ephemeral instance (no
/// store path) keeps the list in memory only.
pub struct RecentFiles {
    files: Vec<RecentFile>,
    store: Option<PathBuf>,
}

impl RecentFiles {
    /// Load the list from the default store, or start empty if it's missing
    /// or unparsable.
    pub fn load() -> Self {
        Self::load_from(Self::default_store_path())
    }

    pub fn load_from(store: PathBuf) -> Self {
        let files = fs::read_to_string(&store)
            .ok()
            .and_then(|contents| serde_json::from_str::<RecentFilesData>(&contents).ok())
            .map(|data| data.files)
            .unwrap_or_default();

        Self {
            files,
            store: Some(store),
        }
    }

    /// List held in memory only; nothing is written to disk.
    pub fn ephemeral() -> Self {
        Self {
            files: Vec::new(),
            store: None,
        }
    }

    /// Record a file at the top of the list. An existing entry for the same
    /// path is moved to the top rather than duplicated.
    pub fn add(&mut self, path: &Path, name: &str) -> Result<()> {
        self.files.retain(|f| f.path != path);
        self.files.insert(
            0,
            RecentFile {
                path: path.to_path_buf(),
                name: name.to_string(),
                last_opened: SystemTime::now()
                    .duration_since(UNIX_EPOCH)
                    .unwrap_or_default()
                    .as_secs(),
            },
        );
        self.files.truncate(MAX_RECENT_FILES);
        self.save()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.files.clear();
        self.save()
    }

    pub fn files(&self) -> &[RecentFile] {
        &self.files
    }

    fn save(&self) -> Result<()> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        if let Some(parent) = store.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = RecentFilesData {
            files: self.files.clone(),
        };
        let json = serde_json::to_string_pretty(&data)?;
        fs::write(store, json)?;
        Ok(())
    }

    /// data_dir/markpad/recent_files.json (cross-platform)
    fn default_store_path() -> PathBuf {
        let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("markpad");
        path.push("recent_files.json");
        path
    }
}
