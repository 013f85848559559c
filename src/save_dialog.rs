//! Native save dialog as an export destination.

use std::path::PathBuf;

use polaroid_core::{PolaroidResult, SaveTarget};
use rfd::FileDialog;

/// Asks where to save, prefilled with the export file name.
///
/// Blocks until the dialog closes; call it off the UI thread.
pub struct DialogSaveTarget {
    start_dir: Option<PathBuf>,
}

impl DialogSaveTarget {
    pub fn new(start_dir: Option<PathBuf>) -> Self {
        Self { start_dir }
    }
}

impl SaveTarget for DialogSaveTarget {
    fn save(&self, file_name: &str, bytes: &[u8]) -> PolaroidResult<Option<PathBuf>> {
        let mut dialog = FileDialog::new()
            .add_filter("PNG image", &["png"])
            .set_title("Save Polaroid")
            .set_file_name(file_name);
        if let Some(dir) = &self.start_dir {
            dialog = dialog.set_directory(dir);
        }

        let Some(path) = dialog.save_file() else {
            return Ok(None);
        };
        std::fs::write(&path, bytes)?;
        Ok(Some(path))
    }
}
