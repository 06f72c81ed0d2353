//! File-backed catalog source.
//!
//! Reads the catalog from a data file on disk. The format is chosen by file
//! extension:
//!
//! - `.json`: either a bare array of records or an object with an `items`
//!   array
//! - `.toml`: an `[[items]]` array of tables
//!
//! # File Format
//!
//! ```json
//! {
//!   "items": [
//!     { "id": 1, "name": "Aman Kumar", "year": 2024,
//!       "img": "https://picsum.photos/seed/a1/600/400",
//!       "desc": "Top scorer in board exam" }
//!   ]
//! }
//! ```
//!
//! ```toml
//! [[items]]
//! id = 1
//! name = "Aman Kumar"
//! year = 2024
//! image = "https://picsum.photos/seed/a1/600/400"
//! description = "Top scorer in board exam"
//! ```

use super::{Catalog, CatalogSource};
use crate::domain::{GalleryError, Item, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Accepted JSON layouts.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonLayout {
    Wrapped { items: Vec<Item> },
    Bare(Vec<Item>),
}

#[derive(Debug, Deserialize)]
struct TomlLayout {
    #[serde(default)]
    items: Vec<Item>,
}

/// Data file format, derived from the extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn detect(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(GalleryError::Catalog(format!(
                "unsupported catalog file type {other:?} for {}",
                path.display()
            ))),
        }
    }
}

/// Catalog loaded from a JSON or TOML file.
///
/// # Examples
///
/// ```no_run
/// use zallery::catalog::{CatalogSource, FileCatalog};
///
/// let source = FileCatalog::new("/host/gallery/items.json");
/// let catalog = source.load()?;
/// # Ok::<(), zallery::GalleryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Decodes catalog records from file contents.
    fn parse(contents: &str, format: Format) -> Result<Vec<Item>> {
        match format {
            Format::Json => match serde_json::from_str::<JsonLayout>(contents)? {
                JsonLayout::Wrapped { items } | JsonLayout::Bare(items) => Ok(items),
            },
            Format::Toml => Ok(toml::from_str::<TomlLayout>(contents)?.items),
        }
    }
}

impl CatalogSource for FileCatalog {
    fn load(&self) -> Result<Catalog> {
        let _span = tracing::debug_span!("load_catalog_file", path = %self.path.display()).entered();

        let format = Format::detect(&self.path)?;
        let contents = std::fs::read_to_string(&self.path)?;
        let items = Self::parse(&contents, format)?;

        tracing::debug!(item_count = items.len(), format = ?format, "catalog file decoded");
        Catalog::new(items)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_bare_json_array_with_page_field_names() {
        let file = write_temp(
            ".json",
            r#"[{"id":1,"name":"Aman Kumar","year":2024,"img":"a1.jpg","desc":"Top scorer"},
                {"id":2,"name":"Sana Khan","year":2023,"img":"a2.jpg","desc":"Science fair winner"}]"#,
        );
        let catalog = FileCatalog::new(file.path()).load().unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[1].name, "Sana Khan");
    }

    #[test]
    fn loads_wrapped_json() {
        let file = write_temp(
            ".json",
            r#"{"items":[{"id":9,"name":"Ravi Patel","year":2023,"image":"r.jpg","description":"Essay"}]}"#,
        );
        let catalog = FileCatalog::new(file.path()).load().unwrap();
        assert_eq!(catalog.items()[0].id, 9);
    }

    #[test]
    fn loads_toml_items() {
        let file = write_temp(
            ".toml",
            "[[items]]\nid = 3\nname = \"Arun R\"\nyear = 2022\nimage = \"a3.jpg\"\ndescription = \"Math Olympiad medal\"\n",
        );
        let catalog = FileCatalog::new(file.path()).load().unwrap();
        assert_eq!(catalog.items()[0].year, 2022);
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = write_temp(".csv", "id,name\n");
        let err = FileCatalog::new(file.path()).load().unwrap_err();
        assert!(matches!(err, GalleryError::Catalog(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let file = write_temp(".json", "{ not json");
        let err = FileCatalog::new(file.path()).load().unwrap_err();
        assert!(matches!(err, GalleryError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = FileCatalog::new("/no/such/dir/items.json").load().unwrap_err();
        assert!(matches!(err, GalleryError::Io(_)));
    }

    #[test]
    fn duplicate_ids_in_file_are_rejected() {
        let file = write_temp(
            ".json",
            r#"[{"id":1,"name":"A","year":2024,"img":"","desc":""},{"id":1,"name":"B","year":2024,"img":"","desc":""}]"#,
        );
        let err = FileCatalog::new(file.path()).load().unwrap_err();
        assert!(matches!(err, GalleryError::Catalog(_)));
    }
}
