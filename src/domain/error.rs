//! Error types for the zallery plugin.
//!
//! This module defines the centralized error type [`GalleryError`] and a type
//! alias [`Result`] used throughout the crate. All variants are implemented with
//! `thiserror`.
//!
//! Note that the gallery core itself never fails: an empty visible set or an
//! `open` on nothing are ordinary states. Errors only arise at the edges, when
//! catalog files, themes or worker payloads are read.

use thiserror::Error;

/// The main error type for zallery operations.
///
/// # Examples
///
/// ```
/// use zallery::GalleryError;
///
/// let err = GalleryError::Catalog("duplicate item id 3".to_string());
/// assert_eq!(err.to_string(), "Catalog error: duplicate item id 3");
/// ```
#[derive(Debug, Error)]
pub enum GalleryError {
    /// The catalog contents violate an invariant (duplicate ids, unsupported
    /// file type).
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A catalog or theme file could not be decoded.
    ///
    /// Holds the decoder's message; JSON and TOML errors are both mapped here.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Theme loading failed.
    #[error("Theme error: {0}")]
    Theme(String),
}

impl From<serde_json::Error> for GalleryError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("invalid JSON: {e}"))
    }
}

impl From<toml::de::Error> for GalleryError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(format!("invalid TOML: {e}"))
    }
}

/// A specialized `Result` type for zallery operations.
pub type Result<T> = std::result::Result<T, GalleryError>;
