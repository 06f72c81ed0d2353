//! The item catalog and the sources it is loaded from.
//!
//! A [`Catalog`] is the full, ordered, immutable list of records the gallery
//! shows. It is created once per load and shared by `Arc`; the gallery never
//! appends to or removes from it. A reload replaces the catalog wholesale.
//!
//! # Modules
//!
//! - `source`: [`CatalogSource`] trait abstracting where records come from
//! - `embedded`: the built-in sample catalog
//! - `file`: JSON/TOML data file loader

pub mod embedded;
pub mod file;
pub mod source;

pub use embedded::EmbeddedCatalog;
pub use file::FileCatalog;
pub use source::CatalogSource;

use crate::domain::{GalleryError, Item, Result};
use std::collections::HashSet;
use std::sync::Arc;

/// Immutable, ordered list of catalog records with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Arc<[Item]>,
}

impl Catalog {
    /// Builds a catalog, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Catalog`] if two records share an id.
    ///
    /// # Examples
    ///
    /// ```
    /// use zallery::{Catalog, Item};
    ///
    /// let catalog = Catalog::new(vec![
    ///     Item::new(1, "Aman Kumar", 2024, "a1.jpg", "Top scorer"),
    ///     Item::new(2, "Sana Khan", 2023, "a2.jpg", "Science fair winner"),
    /// ])?;
    /// assert_eq!(catalog.len(), 2);
    /// assert!(Catalog::new(vec![
    ///     Item::new(1, "A", 2024, "", ""),
    ///     Item::new(1, "B", 2024, "", ""),
    /// ]).is_err());
    /// # Ok::<(), zallery::GalleryError>(())
    /// ```
    pub fn new(items: Vec<Item>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        if let Some(dup) = items.iter().find(|item| !seen.insert(item.id)) {
            return Err(GalleryError::Catalog(format!("duplicate item id {}", dup.id)));
        }
        Ok(Self {
            items: items.into(),
        })
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct years present in the catalog, in first-seen order.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|item| item.year)
            .filter(|year| seen.insert(*year))
            .collect()
    }
}

impl Default for Catalog {
    /// The embedded sample catalog.
    fn default() -> Self {
        EmbeddedCatalog.catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sample_of_eight() {
        let catalog = Catalog::default();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.years(), vec![2024, 2023, 2022]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Catalog::new(vec![
            Item::new(7, "A", 2024, "", ""),
            Item::new(8, "B", 2023, "", ""),
            Item::new(7, "C", 2022, "", ""),
        ])
        .unwrap_err();
        assert_eq!(err.to_string(), "Catalog error: duplicate item id 7");
    }
}
