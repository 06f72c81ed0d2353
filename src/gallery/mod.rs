//! Host-agnostic gallery core.
//!
//! [`Gallery`] is the input controller: it owns the selection state and the
//! derived views, and every mutation funnels through one refresh step:
//!
//! ```text
//! search text / filter change → visible_set → render_cards
//! card activation (Click | Enter) → Viewer::open(visible, index)
//! ```
//!
//! # Modules
//!
//! - [`filter`]: search and category predicates, visible-set derivation
//! - [`cards`]: card descriptors and activation triggers
//! - [`viewer`]: the modal state machine

pub mod cards;
pub mod filter;
pub mod viewer;

pub use cards::{render_cards, Card, ImageRef, Loading, Trigger};
pub use filter::{match_range, visible_set, SearchQuery};
pub use viewer::{BackgroundScroll, ModalContent, Viewer};

use crate::catalog::Catalog;
use crate::domain::{Category, FilterBar, Item};
use std::sync::Arc;

/// Snapshot of what the user has selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    pub active_category: Category,
    pub search_text: String,
    /// Open index of the viewer, `None` while it is closed.
    pub focused_index: Option<usize>,
}

/// Input controller owning catalog, selection, derived cards and viewer.
///
/// # Examples
///
/// ```
/// use zallery::gallery::{Gallery, Trigger};
/// use zallery::Catalog;
///
/// let mut gallery = Gallery::with_catalog(Catalog::default());
/// gallery.activate_category("2024");
/// gallery.set_search_text("neha");
/// assert_eq!(gallery.visible().len(), 2);
///
/// assert!(gallery.activate(1, Trigger::Enter));
/// assert_eq!(gallery.selection().focused_index, Some(1));
/// gallery.close();
/// assert!(!gallery.viewer().is_open());
/// ```
#[derive(Debug, Clone)]
pub struct Gallery {
    catalog: Catalog,
    filters: FilterBar,
    search_text: String,
    visible: Arc<[Item]>,
    cards: Vec<Card>,
    viewer: Viewer,
}

impl Gallery {
    /// Creates a gallery over `catalog` with an explicit filter bar.
    #[must_use]
    pub fn new(catalog: Catalog, filters: FilterBar) -> Self {
        let mut gallery = Self {
            catalog,
            filters,
            search_text: String::new(),
            visible: Arc::from(Vec::<Item>::new()),
            cards: Vec::new(),
            viewer: Viewer::new(),
        };
        gallery.refresh();
        gallery
    }

    /// Creates a gallery whose filter bar is derived from the catalog years.
    #[must_use]
    pub fn with_catalog(catalog: Catalog) -> Self {
        let filters = FilterBar::from_years(&catalog.years());
        Self::new(catalog, filters)
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterBar {
        &self.filters
    }

    #[must_use]
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    #[must_use]
    pub fn visible(&self) -> &Arc<[Item]> {
        &self.visible
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub const fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    #[must_use]
    pub fn selection(&self) -> SelectionState {
        SelectionState {
            active_category: self.filters.active().clone(),
            search_text: self.search_text.clone(),
            focused_index: self.viewer.index(),
        }
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
        self.refresh();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_text.push(c);
        self.refresh();
    }

    pub fn pop_search_char(&mut self) {
        self.search_text.pop();
        self.refresh();
    }

    /// Activates the filter tab at `position`. Unknown positions are ignored.
    pub fn activate_filter(&mut self, position: usize) -> bool {
        if !self.filters.activate(position) {
            tracing::debug!(position, "ignoring unknown filter position");
            return false;
        }
        self.refresh();
        true
    }

    /// Activates the filter tab with `token`. Unknown tokens are ignored.
    pub fn activate_category(&mut self, token: &str) -> bool {
        if !self.filters.activate_token(token) {
            tracing::debug!(token, "ignoring unknown category token");
            return false;
        }
        self.refresh();
        true
    }

    pub fn activate_next_filter(&mut self) {
        self.filters.activate_next();
        self.refresh();
    }

    pub fn activate_prev_filter(&mut self) {
        self.filters.activate_prev();
        self.refresh();
    }

    /// Opens the viewer on the current visible set.
    pub fn open(&mut self, index: usize) -> bool {
        self.viewer.open(&self.visible, index)
    }

    /// Delivers `trigger` to the card at `index`, opening the viewer on it.
    /// Returns `false` when no card sits at `index`.
    pub fn activate(&mut self, index: usize, trigger: Trigger) -> bool {
        match self.cards.get(index).map(|card| card.activation(trigger)) {
            Some(index) => self.open(index),
            None => false,
        }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        self.viewer.next();
    }

    pub fn prev(&mut self) {
        self.viewer.prev();
    }

    pub fn close(&mut self) {
        self.viewer.close();
    }

    /// Swaps in a reloaded catalog and filter bar.
    ///
    /// The active token is kept when the new bar still has it; otherwise the
    /// bar falls back to `all`. An open viewer keeps its own snapshot.
    pub fn replace_catalog(&mut self, catalog: Catalog, mut filters: FilterBar) {
        let token = self.filters.active().token().to_string();
        if !filters.activate_token(&token) {
            tracing::debug!(token = %token, "active category gone after reload, falling back to all");
            filters.activate(0);
        }
        self.catalog = catalog;
        self.filters = filters;
        self.refresh();
    }

    fn refresh(&mut self) {
        let _span = tracing::debug_span!("gallery_refresh", category = %self.filters.active()).entered();
        self.visible = visible_set(self.catalog.items(), self.filters.active(), &self.search_text);
        self.cards = render_cards(&self.visible);
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::with_catalog(Catalog::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_everything() {
        let gallery = Gallery::default();
        let selection = gallery.selection();
        assert_eq!(selection.active_category, Category::All);
        assert_eq!(selection.search_text, "");
        assert_eq!(selection.focused_index, None);
        assert_eq!(gallery.cards().len(), 8);
    }

    #[test]
    fn typing_recomputes_on_every_keystroke() {
        let mut gallery = Gallery::default();
        gallery.push_search_char('r');
        assert_eq!(gallery.visible().len(), 7);
        gallery.push_search_char('a');
        let names: Vec<&str> = gallery.visible().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Ravi Patel", "Ravi Patel"]);
        gallery.pop_search_char();
        gallery.pop_search_char();
        assert_eq!(gallery.visible().len(), 8);
    }

    #[test]
    fn unknown_filter_is_a_no_op() {
        let mut gallery = Gallery::default();
        assert!(gallery.activate_category("2023"));
        assert!(!gallery.activate_category("1999"));
        assert!(!gallery.activate_filter(42));
        assert_eq!(gallery.selection().active_category, Category::from_token("2023"));
        assert_eq!(gallery.visible().len(), 3);
    }

    #[test]
    fn cards_are_indexed_within_the_visible_set() {
        let mut gallery = Gallery::default();
        gallery.activate_category("2022");
        let ids: Vec<(usize, u32)> = gallery.cards().iter().map(|c| (c.index, c.item_id)).collect();
        assert_eq!(ids, vec![(0, 3), (1, 6)]);
    }

    #[test]
    fn activating_a_missing_card_does_not_open() {
        let mut gallery = Gallery::default();
        assert!(!gallery.activate(99, Trigger::Click));
        assert!(!gallery.activate(8, Trigger::Enter));
        assert!(!gallery.viewer().is_open());
    }

    #[test]
    fn viewer_keeps_snapshot_when_filter_empties_visible_set() {
        let mut gallery = Gallery::default();
        gallery.activate_category("2024");
        assert!(gallery.open(2));
        gallery.set_search_text("nonexistent-xyz");
        assert!(gallery.visible().is_empty());
        assert!(gallery.viewer().is_open());
        gallery.next();
        assert_eq!(gallery.selection().focused_index, Some(0));
        assert_eq!(gallery.viewer().current().map(|i| i.id), Some(1));
    }

    #[test]
    fn reload_keeps_active_token_when_present() {
        let mut gallery = Gallery::default();
        gallery.activate_category("2023");
        let catalog = Catalog::new(vec![
            Item::new(10, "Meera Iyer", 2023, "m.jpg", "Debate champion"),
            Item::new(11, "Kabir Singh", 2025, "k.jpg", "Robotics lead"),
        ])
        .unwrap();
        let filters = FilterBar::from_years(&catalog.years());
        gallery.replace_catalog(catalog, filters);
        assert_eq!(gallery.selection().active_category, Category::from_token("2023"));
        assert_eq!(gallery.visible().len(), 1);
    }

    #[test]
    fn reload_falls_back_to_all() {
        let mut gallery = Gallery::default();
        gallery.activate_category("2022");
        let catalog = Catalog::new(vec![Item::new(10, "Meera Iyer", 2025, "m.jpg", "Debate")]).unwrap();
        let filters = FilterBar::from_years(&catalog.years());
        gallery.replace_catalog(catalog, filters);
        assert_eq!(gallery.selection().active_category, Category::All);
        assert_eq!(gallery.visible().len(), 1);
    }
}
