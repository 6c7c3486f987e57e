use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::markdown::extract_filename;

/// Result of reading a file.
#[derive(Debug, Clone)]
pub struct ReadFile {
    pub content: String,
    pub name: String,
    pub last_modified: Option<SystemTime>,
}

/// Entry in a directory listing.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_directory: bool,
    pub size: Option<u64>,
    pub last_modified: Option<SystemTime>,
}

/// The session's only view of the filesystem. The session maps these
/// `io::Error`s into its own error taxonomy; implementations stay dumb.
pub trait FileAccess {
    fn read(&self, path: &Path) -> io::Result<ReadFile>;
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
    fn exists(&self, path: &Path) -> bool;
    fn list(&self, path: &Path) -> io::Result<Vec<FileEntry>>;
}

/// `std::fs`-backed implementation used by the real app.
pub struct NativeFiles;

impl FileAccess for NativeFiles {
    fn read(&self, path: &Path) -> io::Result<ReadFile> {
        let content = fs::read_to_string(path)?;
        let last_modified = fs::metadata(path).and_then(|m| m.modified()).ok();
        Ok(ReadFile {
            content,
            name: extract_filename(&path.to_string_lossy()),
            last_modified,
        })
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn list(&self, path: &Path) -> io::Result<Vec<FileEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let meta = entry.metadata().ok();
            entries.push(FileEntry {
                path: entry.path(),
                name: entry.file_name().to_string_lossy().to_string(),
                is_directory: meta.as_ref().is_some_and(|m| m.is_dir()),
                size: meta.as_ref().map(|m| m.len()),
                last_modified: meta.and_then(|m| m.modified().ok()),
            });
        }
        Ok(entries)
    }
}
