//! Error types for Stall Gallery

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for gallery operations
#[derive(Error, Debug)]
pub enum GalleryError {
    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest was not valid JSON
    #[error("Manifest parse error: {0}")]
    ManifestParse(#[from] serde_json::Error),

    /// Manifest parsed but was not a category -> filenames mapping
    #[error("Invalid manifest shape: {0}")]
    ManifestShape(String),

    /// The photos directory does not exist
    #[error("Photos directory not found: {}", .0.display())]
    PhotosDirMissing(PathBuf),

    /// Directory traversal failed
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Image could not be decoded or encoded
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias using GalleryError
pub type GalleryResult<T> = Result<T, GalleryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GalleryError::PhotosDirMissing(PathBuf::from("photos"));
        assert_eq!(format!("{}", err), "Photos directory not found: photos");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GalleryError = io_err.into();
        assert!(matches!(err, GalleryError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: GalleryError = json_err.into();
        assert!(matches!(err, GalleryError::ManifestParse(_)));
    }
}
