//! Modal lightbox viewer.
//!
//! The viewer is a two-state machine. Opening it captures a shared snapshot of
//! the visible set, so later filter changes or catalog reloads never move the
//! item under the cursor; navigation wraps around the snapshot in both
//! directions. None of the operations can fail.
//!
//! ```text
//!            open(visible, i)            next / prev
//!   Closed ───────────────────▶ Open ◀──────────────┐
//!     ▲                          │ └────────────────┘
//!     └──────── close ───────────┘
//! ```

use crate::domain::Item;
use std::sync::Arc;

/// Whether the page behind the modal may scroll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BackgroundScroll {
    #[default]
    Free,
    Locked,
}

#[derive(Debug, Clone, Default)]
enum ViewerState {
    #[default]
    Closed,
    Open { snapshot: Arc<[Item]>, index: usize },
}

/// What the modal shows for the current item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalContent {
    pub image: String,
    pub alt: String,
    pub name: String,
    pub caption: String,
    /// Zero-based position within the snapshot.
    pub position: usize,
    pub total: usize,
}

/// Modal viewer state.
#[derive(Debug, Clone, Default)]
pub struct Viewer {
    state: ViewerState,
    scroll: BackgroundScroll,
}

impl Viewer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens on `visible` at `index mod N` and locks background scroll.
    ///
    /// Opening on an empty set does nothing and returns `false`.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use zallery::gallery::Viewer;
    /// use zallery::Item;
    ///
    /// let visible: Arc<[Item]> = vec![
    ///     Item::new(1, "Aman Kumar", 2024, "a1.jpg", "Top scorer"),
    ///     Item::new(2, "Sana Khan", 2023, "a2.jpg", "Science fair winner"),
    /// ].into();
    /// let mut viewer = Viewer::new();
    /// assert!(!viewer.open(&Arc::from(Vec::<Item>::new()), 0));
    /// assert!(viewer.open(&visible, 3));
    /// assert_eq!(viewer.index(), Some(1));
    /// viewer.next();
    /// assert_eq!(viewer.index(), Some(0));
    /// ```
    pub fn open(&mut self, visible: &Arc<[Item]>, index: usize) -> bool {
        if visible.is_empty() {
            tracing::debug!(index, "open ignored, nothing visible");
            return false;
        }
        let index = index % visible.len();
        tracing::debug!(index, total = visible.len(), "viewer opened");
        self.state = ViewerState::Open {
            snapshot: Arc::clone(visible),
            index,
        };
        self.scroll = BackgroundScroll::Locked;
        true
    }

    /// Advances to the next item, wrapping to the first. Inert while closed.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if let ViewerState::Open { snapshot, index } = &mut self.state {
            *index = (*index + 1) % snapshot.len();
        }
    }

    /// Steps back to the previous item, wrapping to the last. Inert while
    /// closed.
    pub fn prev(&mut self) {
        if let ViewerState::Open { snapshot, index } = &mut self.state {
            let len = snapshot.len();
            *index = (*index + len - 1) % len;
        }
    }

    /// Closes the viewer and restores background scroll. Idempotent.
    pub fn close(&mut self) {
        if self.is_open() {
            tracing::debug!("viewer closed");
        }
        self.state = ViewerState::Closed;
        self.scroll = BackgroundScroll::Free;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, ViewerState::Open { .. })
    }

    /// Current position within the snapshot, `None` while closed.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self.state {
            ViewerState::Open { index, .. } => Some(index),
            ViewerState::Closed => None,
        }
    }

    #[must_use]
    pub fn current(&self) -> Option<&Item> {
        match &self.state {
            ViewerState::Open { snapshot, index } => snapshot.get(*index),
            ViewerState::Closed => None,
        }
    }

    /// Number of items captured at open time.
    #[must_use]
    pub fn snapshot_len(&self) -> usize {
        match &self.state {
            ViewerState::Open { snapshot, .. } => snapshot.len(),
            ViewerState::Closed => 0,
        }
    }

    #[must_use]
    pub const fn background_scroll(&self) -> BackgroundScroll {
        self.scroll
    }

    #[must_use]
    pub fn presentation(&self) -> Option<ModalContent> {
        let item = self.current()?;
        Some(ModalContent {
            image: item.image.clone(),
            alt: item.name.clone(),
            name: item.name.clone(),
            caption: format!("{} — {} ({})", item.name, item.description, item.year),
            position: self.index().unwrap_or_default(),
            total: self.snapshot_len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EmbeddedCatalog;

    fn five() -> Arc<[Item]> {
        EmbeddedCatalog::items().into_iter().take(5).collect()
    }

    #[test]
    fn starts_closed_with_free_scroll() {
        let viewer = Viewer::new();
        assert!(!viewer.is_open());
        assert_eq!(viewer.background_scroll(), BackgroundScroll::Free);
        assert!(viewer.presentation().is_none());
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut viewer = Viewer::new();
        viewer.open(&five(), 2);
        viewer.prev();
        viewer.prev();
        assert_eq!(viewer.index(), Some(0));
        viewer.prev();
        assert_eq!(viewer.index(), Some(4));
    }

    #[test]
    fn full_cycles_return_to_start() {
        let mut viewer = Viewer::new();
        viewer.open(&five(), 3);
        for _ in 0..5 {
            viewer.next();
        }
        assert_eq!(viewer.index(), Some(3));
        for _ in 0..5 {
            viewer.prev();
        }
        assert_eq!(viewer.index(), Some(3));
    }

    #[test]
    fn close_restores_scroll_and_is_idempotent() {
        let mut viewer = Viewer::new();
        viewer.open(&five(), 1);
        assert_eq!(viewer.background_scroll(), BackgroundScroll::Locked);
        viewer.close();
        viewer.close();
        assert!(!viewer.is_open());
        assert_eq!(viewer.background_scroll(), BackgroundScroll::Free);
    }

    #[test]
    fn navigation_is_inert_while_closed() {
        let mut viewer = Viewer::new();
        viewer.next();
        viewer.prev();
        assert_eq!(viewer.index(), None);
    }

    #[test]
    fn single_item_wraps_onto_itself() {
        let one: Arc<[Item]> = EmbeddedCatalog::items().into_iter().take(1).collect();
        let mut viewer = Viewer::new();
        viewer.open(&one, 0);
        viewer.next();
        assert_eq!(viewer.index(), Some(0));
        viewer.prev();
        assert_eq!(viewer.index(), Some(0));
    }

    #[test]
    fn presentation_caption_includes_year() {
        let mut viewer = Viewer::new();
        viewer.open(&five(), 1);
        let content = viewer.presentation().unwrap();
        assert_eq!(content.caption, "Sana Khan — Science fair winner (2023)");
        assert_eq!(content.alt, "Sana Khan");
        assert_eq!((content.position, content.total), (1, 5));
    }
}
