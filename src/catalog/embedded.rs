//! Built-in sample catalog.

use super::{Catalog, CatalogSource};
use crate::domain::{Item, Result};

/// The compiled-in sample catalog: eight records across three years.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedCatalog;

impl EmbeddedCatalog {
    /// Returns the sample records in display order.
    #[must_use]
    pub fn items() -> Vec<Item> {
        vec![
            Item::new(1, "Aman Kumar", 2024, "https://picsum.photos/seed/a1/600/400", "Top scorer in board exam"),
            Item::new(2, "Sana Khan", 2023, "https://picsum.photos/seed/a2/600/400", "Science fair winner"),
            Item::new(3, "Arun R", 2022, "https://picsum.photos/seed/a3/600/400", "Math Olympiad medal"),
            Item::new(4, "Neha Verma", 2024, "https://picsum.photos/seed/a4/600/400", "National Quiz finalist"),
            Item::new(5, "Ravi Patel", 2023, "https://picsum.photos/seed/a5/600/400", "Essay competition winner"),
            Item::new(6, "Arun R", 2022, "Sona lal.jpg", "Math Olympiad medal"),
            Item::new(7, "Neha Verma", 2024, "https://picsum.photos/seed/a4/600/400", "National Quiz finalist"),
            Item::new(8, "Ravi Patel", 2023, "https://picsum.photos/seed/a5/600/400", "Essay competition winner"),
        ]
    }

    /// The sample as a [`Catalog`].
    #[must_use]
    pub fn catalog(self) -> Catalog {
        // ids 1..=8 are unique, so the duplicate check is skipped
        Catalog {
            items: Self::items().into(),
        }
    }
}

impl CatalogSource for EmbeddedCatalog {
    fn load(&self) -> Result<Catalog> {
        Catalog::new(Self::items())
    }

    fn describe(&self) -> String {
        "embedded sample".to_string()
    }
}
