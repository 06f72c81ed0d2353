//! Gallery item domain model.
//!
//! An [`Item`] is one record of the catalog: a person or entry with a year, an
//! image reference and a short description. Items are immutable once the
//! catalog is built; the gallery only ever clones or shares them.

use serde::{Deserialize, Serialize};

/// A single catalog record.
///
/// Data files written for the web page use `img` and `desc` as field names;
/// both are accepted as aliases when deserializing.
///
/// # Examples
///
/// ```
/// use zallery::Item;
///
/// let item = Item::new(1, "Aman Kumar", 2024, "https://picsum.photos/seed/a1/600/400", "Top scorer in board exam");
/// assert_eq!(item.year_text(), "2024");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub year: i32,
    #[serde(alias = "img")]
    pub image: String,
    #[serde(alias = "desc")]
    pub description: String,
}

impl Item {
    #[must_use]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        year: i32,
        image: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            year,
            image: image.into(),
            description: description.into(),
        }
    }

    /// Decimal text form of the year, used by both filter predicates.
    #[must_use]
    pub fn year_text(&self) -> String {
        self.year.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_page_field_names() {
        let item: Item = serde_json::from_str(
            r#"{"id":6,"name":"Arun R","year":2022,"img":"Sona lal.jpg","desc":"Math Olympiad medal"}"#,
        )
        .unwrap();
        assert_eq!(item.image, "Sona lal.jpg");
        assert_eq!(item.description, "Math Olympiad medal");
    }
}
