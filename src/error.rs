//! Custom error types for binarizer.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the binarizer library.
#[derive(Error, Debug)]
pub enum Error {
    /// The input image is missing or could not be decoded.
    #[error("File not found or cannot be read: {path}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to save an image file.
    #[error("failed to save image to {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to encode an image in memory.
    #[cfg(feature = "preview")]
    #[error("failed to encode image: {source}")]
    ImageEncode {
        #[source]
        source: image::ImageError,
    },

    /// Failed to create the output directory.
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The preview window could not be shown.
    #[cfg(feature = "preview")]
    #[error("failed to display image: {source}")]
    Display {
        #[source]
        source: opencv::Error,
    },

    /// Invalid parameter value.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl Error {
    /// Whether this error means the input image was missing or unreadable.
    ///
    /// These are reported separately from every other failure.
    #[must_use]
    pub const fn is_file_error(&self) -> bool {
        matches!(self, Self::ImageLoad { .. })
    }
}

/// Result type alias for binarizer operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn missing_file() -> Error {
        Error::ImageLoad {
            path: PathBuf::from("images/input/pumpkins.jpg"),
            source: image::ImageError::IoError(std::io::Error::from(
                std::io::ErrorKind::NotFound,
            )),
        }
    }

    #[test]
    fn test_load_error_message() {
        assert_eq!(
            missing_file().to_string(),
            "File not found or cannot be read: images/input/pumpkins.jpg"
        );
    }

    #[test]
    fn test_file_error_classification() {
        assert!(missing_file().is_file_error());

        let other = Error::InvalidParameter {
            name: "max_width".to_string(),
            reason: "must be greater than 0".to_string(),
        };
        assert!(!other.is_file_error());

        let save = Error::CreateDir {
            path: PathBuf::from("images/output"),
            source: std::io::Error::from(std::io::ErrorKind::AlreadyExists),
        };
        assert!(!save.is_file_error());
    }
}
