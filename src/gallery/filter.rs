//! Visible-set derivation.
//!
//! The visible set is always recomputed in full from the catalog: it is the
//! catalog-ordered subsequence of items passing both the category predicate
//! and the text predicate. Nothing here is cached.

use crate::domain::{Category, Item};
use std::sync::Arc;

/// Normalized search text.
///
/// Raw input is trimmed and lowercased once, so the predicate only has to
/// lowercase the item name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Text predicate: the name contains the query case-insensitively, or the
    /// year's decimal text contains it. An empty query matches everything.
    ///
    /// ```
    /// use zallery::gallery::filter::SearchQuery;
    /// use zallery::Item;
    ///
    /// let item = Item::new(3, "Arun R", 2022, "a3.jpg", "Math Olympiad medal");
    /// assert!(SearchQuery::new("  ARUN ").matches(&item));
    /// assert!(SearchQuery::new("202").matches(&item));
    /// assert!(!SearchQuery::new("olympiad").matches(&item));
    /// ```
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        self.is_empty()
            || item.name.to_lowercase().contains(&self.needle)
            || item.year_text().contains(&self.needle)
    }
}

/// Category predicate. `All` matches everything; a year token matches iff it
/// equals the item's year text exactly.
#[must_use]
pub fn matches_category(category: &Category, item: &Item) -> bool {
    match category {
        Category::All => true,
        Category::Year(token) => item.year_text() == *token,
    }
}

/// Derives the visible set for a category and raw search text.
///
/// Catalog order is preserved and every returned item satisfies both
/// predicates.
///
/// # Examples
///
/// ```
/// use zallery::gallery::filter::visible_set;
/// use zallery::domain::Category;
/// use zallery::Catalog;
///
/// let catalog = Catalog::default();
/// let arun = visible_set(catalog.items(), &Category::All, "arun");
/// assert_eq!(arun.len(), 2);
/// let none = visible_set(catalog.items(), &Category::from_token("2024"), "nonexistent-xyz");
/// assert!(none.is_empty());
/// ```
#[must_use]
pub fn visible_set(items: &[Item], category: &Category, search_text: &str) -> Arc<[Item]> {
    let query = SearchQuery::new(search_text);
    let _span = tracing::debug_span!(
        "visible_set",
        total_items = items.len(),
        category = %category,
        query_len = query.as_str().len()
    )
    .entered();

    let visible: Arc<[Item]> = items
        .iter()
        .filter(|item| matches_category(category, item) && query.matches(item))
        .cloned()
        .collect();

    tracing::debug!(visible_count = visible.len(), "visible set recomputed");
    visible
}

/// Character range `(start, end)` of the first case-insensitive occurrence of
/// `query` in `name`, for match highlighting.
///
/// Returns `None` for an empty query or when only the year matched.
#[must_use]
pub fn match_range(name: &str, query: &SearchQuery) -> Option<(usize, usize)> {
    if query.is_empty() {
        return None;
    }
    let needle: Vec<char> = query.as_str().chars().collect();
    let haystack: Vec<char> = name.chars().flat_map(char::to_lowercase).collect();
    // Lowercasing can change the char count (e.g. 'İ'); highlight only when it
    // does not, so indices stay aligned with `name`.
    if haystack.len() != name.chars().count() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle.as_slice())
        .map(|start| (start, start + needle.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new(1, "Aman Kumar", 2024, "a1.jpg", "Top scorer in board exam"),
            Item::new(2, "Sana Khan", 2023, "a2.jpg", "Science fair winner"),
            Item::new(3, "Arun R", 2022, "a3.jpg", "Math Olympiad medal"),
            Item::new(4, "Neha Verma", 2024, "a4.jpg", "National Quiz finalist"),
        ]
    }

    fn ids(visible: &[Item]) -> Vec<u32> {
        visible.iter().map(|item| item.id).collect()
    }

    #[test]
    fn empty_search_under_all_is_whole_catalog() {
        assert_eq!(ids(&visible_set(&items(), &Category::All, "")), vec![1, 2, 3, 4]);
        assert_eq!(ids(&visible_set(&items(), &Category::All, "   ")), vec![1, 2, 3, 4]);
    }

    #[test]
    fn category_uses_exact_year_text() {
        assert_eq!(ids(&visible_set(&items(), &Category::from_token("2024"), "")), vec![1, 4]);
        assert!(visible_set(&items(), &Category::from_token("202"), "").is_empty());
    }

    #[test]
    fn search_matches_year_substring() {
        assert_eq!(ids(&visible_set(&items(), &Category::All, "23")), vec![2]);
    }

    #[test]
    fn description_is_not_searched() {
        assert!(visible_set(&items(), &Category::All, "olympiad").is_empty());
    }

    #[test]
    fn both_predicates_must_hold() {
        assert_eq!(ids(&visible_set(&items(), &Category::from_token("2024"), "NEHA")), vec![4]);
        assert!(visible_set(&items(), &Category::from_token("2023"), "neha").is_empty());
    }

    #[test]
    fn match_range_is_case_insensitive() {
        assert_eq!(match_range("Sana Khan", &SearchQuery::new("KHA")), Some((5, 8)));
        assert_eq!(match_range("Sana Khan", &SearchQuery::new("2023")), None);
        assert_eq!(match_range("Sana Khan", &SearchQuery::new("")), None);
    }
}
