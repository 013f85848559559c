//! Card export.
//!
//! The exporter receives the preview explicitly: `None` means no preview is
//! mounted, which is a silent no-op rather than an error. Otherwise the card
//! is rasterized to PNG and handed to a [`SaveTarget`] under the configured
//! file name.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};

use crate::config::OUTPUT_FILE_NAME;
use crate::editor::CardSnapshot;
use crate::error::{PolaroidError, PolaroidResult};
use crate::render::CardRenderer;

/// What an export call ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No preview was available; nothing was rendered or saved
    Skipped,
    Saved(PathBuf),
    /// The user dismissed the save dialog
    Cancelled,
}

/// Destination for exported PNG bytes
pub trait SaveTarget: Send + Sync {
    /// Persist `bytes` under `file_name`.
    ///
    /// Returns `Ok(None)` when the user cancelled.
    fn save(&self, file_name: &str, bytes: &[u8]) -> PolaroidResult<Option<PathBuf>>;
}

/// Writes `<dir>/<file_name>`, creating `dir` when missing
#[derive(Debug, Clone)]
pub struct DirectorySaveTarget {
    dir: PathBuf,
}

impl DirectorySaveTarget {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SaveTarget for DirectorySaveTarget {
    fn save(&self, file_name: &str, bytes: &[u8]) -> PolaroidResult<Option<PathBuf>> {
        if file_name.contains(['/', '\\']) {
            return Err(PolaroidError::Save(format!("not a bare file name: {}", file_name)));
        }
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(file_name);
        std::fs::write(&path, bytes)?;
        Ok(Some(path))
    }
}

#[derive(Debug, Clone)]
pub struct Exporter {
    renderer: Arc<CardRenderer>,
    file_name: String,
}

impl Exporter {
    pub fn new(renderer: Arc<CardRenderer>) -> Self {
        Self {
            renderer,
            file_name: OUTPUT_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn renderer(&self) -> &Arc<CardRenderer> {
        &self.renderer
    }

    /// Rasterize `preview` and save it through `target`.
    ///
    /// CPU bound; callers on an async runtime should run it on a blocking
    /// thread.
    pub fn export(
        &self,
        preview: Option<&CardSnapshot>,
        target: &dyn SaveTarget,
    ) -> PolaroidResult<ExportOutcome> {
        let Some(card) = preview else {
            debug!("Export requested without a preview; skipping");
            return Ok(ExportOutcome::Skipped);
        };

        let png = self.renderer.render_png(card)?;
        match target.save(&self.file_name, &png)? {
            Some(path) => {
                info!(path = %path.display(), bytes = png.len(), "Exported card");
                Ok(ExportOutcome::Saved(path))
            }
            None => {
                debug!("Export cancelled");
                Ok(ExportOutcome::Cancelled)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::Alignment;
    use crate::render::CardStyle;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Records every save call without touching disk
    #[derive(Default)]
    struct RecordingTarget {
        calls: Mutex<Vec<(String, usize)>>,
        cancel: bool,
    }

    impl SaveTarget for RecordingTarget {
        fn save(&self, file_name: &str, bytes: &[u8]) -> PolaroidResult<Option<PathBuf>> {
            self.calls.lock().unwrap().push((file_name.to_string(), bytes.len()));
            if self.cancel {
                Ok(None)
            } else {
                Ok(Some(PathBuf::from(file_name)))
            }
        }
    }

    struct FailingTarget;

    impl SaveTarget for FailingTarget {
        fn save(&self, _file_name: &str, _bytes: &[u8]) -> PolaroidResult<Option<PathBuf>> {
            Err(PolaroidError::Save("disk full".to_string()))
        }
    }

    fn exporter() -> Exporter {
        let renderer = CardRenderer::new(CardStyle::for_photo_size(64)).unwrap();
        Exporter::new(Arc::new(renderer))
    }

    fn snapshot() -> CardSnapshot {
        CardSnapshot::new("Hello", "Ben", Alignment::default())
    }

    #[test]
    fn test_missing_preview_is_noop() {
        let target = RecordingTarget::default();
        let outcome = exporter().export(None, &target).unwrap();
        assert_eq!(outcome, ExportOutcome::Skipped);
        assert!(target.calls.lock().unwrap().is_empty());
    }

    #[test]
    fn test_saves_under_fixed_name() {
        let target = RecordingTarget::default();
        let outcome = exporter().export(Some(&snapshot()), &target).unwrap();
        assert_eq!(outcome, ExportOutcome::Saved(PathBuf::from("polaroid.png")));

        let calls = target.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "polaroid.png");
        assert!(calls[0].1 > 0);
    }

    #[test]
    fn test_cancelled_dialog() {
        let target = RecordingTarget {
            cancel: true,
            ..Default::default()
        };
        let outcome = exporter().export(Some(&snapshot()), &target).unwrap();
        assert_eq!(outcome, ExportOutcome::Cancelled);
    }

    #[test]
    fn test_save_failure_propagates() {
        let err = exporter().export(Some(&snapshot()), &FailingTarget).unwrap_err();
        assert!(matches!(err, PolaroidError::Save(_)));
    }

    #[test]
    fn test_directory_target_writes_png() {
        let dir = TempDir::new().unwrap();
        let target = DirectorySaveTarget::new(dir.path().join("out"));
        let outcome = exporter().export(Some(&snapshot()), &target).unwrap();

        let expected = dir.path().join("out").join("polaroid.png");
        assert_eq!(outcome, ExportOutcome::Saved(expected.clone()));
        let written = image::open(&expected).unwrap();
        assert_eq!(written.width(), CardStyle::for_photo_size(64).card_width());
    }

    #[test]
    fn test_directory_target_rejects_paths() {
        let dir = TempDir::new().unwrap();
        let target = DirectorySaveTarget::new(dir.path());
        assert!(target.save("../escape.png", b"x").is_err());
    }
}
