//! Catalog source abstraction.
//!
//! The gallery treats its catalog as an injected, read-only input. The
//! [`CatalogSource`] trait is the seam: the worker holds a boxed source and
//! asks it for a fresh [`Catalog`] whenever a load is requested.

use super::Catalog;
use crate::domain::Result;

/// Somewhere a catalog can be loaded from.
///
/// # Implementations
///
/// - [`EmbeddedCatalog`](super::EmbeddedCatalog): the compiled-in sample
/// - [`FileCatalog`](super::FileCatalog): a JSON or TOML data file
///
/// # Examples
///
/// ```
/// use zallery::catalog::{CatalogSource, EmbeddedCatalog};
///
/// let source: Box<dyn CatalogSource> = Box::new(EmbeddedCatalog);
/// let catalog = source.load()?;
/// assert!(!catalog.is_empty());
/// # Ok::<(), zallery::GalleryError>(())
/// ```
pub trait CatalogSource: Send {
    /// Loads the complete catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or decoded, or if the
    /// records violate catalog invariants.
    fn load(&self) -> Result<Catalog>;

    /// Short human-readable description used in logs and notifications.
    fn describe(&self) -> String;
}
