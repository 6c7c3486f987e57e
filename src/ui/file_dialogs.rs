use std::path::PathBuf;

use crate::app::file_filters::FileFilter;

/// Native file dialogs as the session sees them. Cancellation is `None`,
/// never an error. Test code scripts answers instead of opening a window.
pub trait DialogService {
    fn choose_open_path(&self, filter: &FileFilter) -> Option<PathBuf>;
    fn choose_save_path(&self, filter: &FileFilter, default_name: &str) -> Option<PathBuf>;
}

/// rfd-backed dialogs used by the real app.
pub struct NativeDialogs;

impl DialogService for NativeDialogs {
    fn choose_open_path(&self, filter: &FileFilter) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter(filter.name, filter.extensions)
            .pick_file()
    }

    fn choose_save_path(&self, filter: &FileFilter, default_name: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter(filter.name, filter.extensions)
            .set_file_name(default_name)
            .save_file()
    }
}
