//! Runtime configuration shared by the desktop app and the CLI.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{PolaroidError, PolaroidResult};
use crate::render::{CardRenderer, CardStyle};

/// Random photo endpoint; `/{size}` is appended
pub const DEFAULT_ENDPOINT: &str = "https://picsum.photos";

/// Edge length of the square photo, in pixels
pub const DEFAULT_IMAGE_SIZE: u32 = 700;

/// Largest photo edge accepted from configuration
pub const MAX_IMAGE_SIZE: u32 = 4096;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// File name every export is saved under
pub const OUTPUT_FILE_NAME: &str = "polaroid.png";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolaroidConfig {
    pub endpoint: String,
    pub image_size: u32,
    pub request_timeout_secs: u64,
    pub output_file_name: String,
    /// Font used for quote and name instead of the bundled one
    pub font_path: Option<PathBuf>,
    /// Save exports here directly instead of asking
    pub save_dir: Option<PathBuf>,
}

impl Default for PolaroidConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            image_size: DEFAULT_IMAGE_SIZE,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            output_file_name: OUTPUT_FILE_NAME.to_string(),
            font_path: None,
            save_dir: None,
        }
    }
}

impl PolaroidConfig {
    pub fn validate(&self) -> PolaroidResult<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(PolaroidError::Config(format!(
                "endpoint must be an http(s) URL: {}",
                self.endpoint
            )));
        }
        if self.image_size == 0 || self.image_size > MAX_IMAGE_SIZE {
            return Err(PolaroidError::Config(format!(
                "image size must be between 1 and {}: {}",
                MAX_IMAGE_SIZE, self.image_size
            )));
        }
        if self.request_timeout_secs == 0 {
            return Err(PolaroidError::Config("request timeout must be positive".to_string()));
        }
        let name = &self.output_file_name;
        if name.is_empty() || name.contains(['/', '\\']) || !name.to_ascii_lowercase().ends_with(".png") {
            return Err(PolaroidError::Config(format!(
                "output file name must be a bare .png name: {}",
                name
            )));
        }
        Ok(())
    }

    /// Full request URL for one random photo
    pub fn image_url(&self) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), self.image_size)
    }

    /// Card renderer sized to the configured photo, using the font override if set
    pub fn renderer(&self) -> PolaroidResult<CardRenderer> {
        let style = CardStyle::for_photo_size(self.image_size);
        match &self.font_path {
            Some(path) => CardRenderer::from_font_file(path, style),
            None => CardRenderer::new(style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PolaroidConfig::default();
        assert_eq!(config.image_url(), "https://picsum.photos/700");
        assert_eq!(config.output_file_name, "polaroid.png");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_endpoint() {
        let config = PolaroidConfig {
            endpoint: "ftp://example.test".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PolaroidError::Config(_))));
    }

    #[test]
    fn test_rejects_bad_size() {
        for size in [0, MAX_IMAGE_SIZE + 1] {
            let config = PolaroidConfig {
                image_size: size,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "size {} accepted", size);
        }
    }

    #[test]
    fn test_rejects_path_in_file_name() {
        for name in ["../polaroid.png", "dir\\card.png", "card.jpg", ""] {
            let config = PolaroidConfig {
                output_file_name: name.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "name {:?} accepted", name);
        }
    }

    #[test]
    fn test_serializes_to_json() {
        let json = serde_json::to_string(&PolaroidConfig::default()).unwrap();
        assert!(json.contains("\"image_size\":700"));
        let back: PolaroidConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PolaroidConfig::default());
    }

    #[test]
    fn test_missing_font_file() {
        let config = PolaroidConfig {
            font_path: Some(PathBuf::from("/definitely/not/here.ttf")),
            ..Default::default()
        };
        assert!(matches!(config.renderer(), Err(PolaroidError::Io(_))));
    }
}
