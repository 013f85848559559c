//! Error types for Polaroid

use thiserror::Error;

/// Main error type for Polaroid operations
#[derive(Error, Debug)]
pub enum PolaroidError {
    /// The photo source answered, but not with a usable photo
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Transport-level HTTP failure
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Photo bytes could not be decoded, or the card could not be encoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Font bytes were missing or not a usable TrueType/OpenType font
    #[error("Font error: {0}")]
    Font(String),

    /// Card composition failed
    #[error("Render error: {0}")]
    Render(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The save target refused the exported card
    #[error("Save error: {0}")]
    Save(String),

    /// Alignment name not among the nine known pairs
    #[error("Invalid alignment: {0}")]
    InvalidAlignment(String),

    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias using PolaroidError
pub type PolaroidResult<T> = Result<T, PolaroidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PolaroidError::InvalidAlignment("sideways".to_string());
        assert_eq!(format!("{}", err), "Invalid alignment: sideways");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PolaroidError = io_err.into();
        assert!(matches!(err, PolaroidError::Io(_)));
    }
}
