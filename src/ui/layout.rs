//! Screen geometry and pointer hit testing.
//!
//! Components draw at the rows and columns defined here, and [`hit_test`]
//! maps a click back to what was drawn there, so both always agree. All
//! coordinates are 1-indexed, matching [`position_cursor`](super::helpers::position_cursor).
//!
//! ```text
//!  1  notification (right-aligned)
//!  2  header
//!  3  ──────────────
//!  4   All   2024   2023   2022        ← filter tabs
//!  5  ┌────────────┐
//!  6  │ Search: …  │                   ← search box
//!  7  └────────────┘
//!  8  NAME   YEAR   DESCRIPTION        ← table header / contact title
//!  9  cards … (rows - 11 of them)
//!     ──────────────
//!     footer
//! ```

use crate::app::{AppState, InputMode};
use crate::domain::ContactField;
use std::ops::Range;

pub const NOTIFICATION_ROW: usize = 1;
pub const HEADER_ROW: usize = 2;
pub const HEADER_BORDER_ROW: usize = 3;
pub const FILTER_ROW: usize = 4;
pub const SEARCH_TOP_ROW: usize = 5;
pub const SEARCH_BOX_HEIGHT: usize = 3;
pub const TABLE_HEADER_ROW: usize = 8;
pub const CARD_TOP_ROW: usize = 9;

/// First row of the contact form fields; the form title sits on
/// [`TABLE_HEADER_ROW`].
pub const CONTACT_FIELD_ROW: usize = 10;

/// Column the first filter tab starts at.
pub const FILTER_LEFT_COL: usize = 2;

/// Horizontal margin around the search box.
pub const SEARCH_BOX_MARGIN: usize = 5;

pub const NAME_COLUMN_WIDTH: usize = 26;
pub const YEAR_COLUMN_WIDTH: usize = 11;

pub const MODAL_HEIGHT: usize = 9;
pub const MODAL_MAX_WIDTH: usize = 72;
const MODAL_MIN_WIDTH: usize = 24;

pub const MODAL_CLOSE_LABEL: &str = "[x]";
pub const MODAL_PREV_LABEL: &str = "< Prev";
pub const MODAL_NEXT_LABEL: &str = "Next >";

#[must_use]
pub const fn footer_row(rows: usize) -> usize {
    let row = rows.saturating_sub(1);
    if row < CARD_TOP_ROW + 1 {
        CARD_TOP_ROW + 1
    } else {
        row
    }
}

#[must_use]
pub const fn footer_border_row(rows: usize) -> usize {
    footer_row(rows) - 1
}

/// Number of card rows that fit between the table header and the footer.
#[must_use]
pub const fn card_capacity(rows: usize) -> usize {
    footer_border_row(rows) - CARD_TOP_ROW
}

/// Window of card indices to draw, centred on the cursor where possible.
///
/// ```
/// use zallery::ui::layout::card_window;
///
/// assert_eq!(card_window(8, 0, 4), 0..4);
/// assert_eq!(card_window(8, 5, 4), 3..7);
/// assert_eq!(card_window(8, 7, 4), 4..8);
/// assert_eq!(card_window(3, 2, 10), 0..3);
/// ```
#[must_use]
pub fn card_window(total: usize, cursor: usize, capacity: usize) -> Range<usize> {
    let mut start = cursor.saturating_sub(capacity / 2);
    let end = (start + capacity).min(total);
    if end - start.min(end) < capacity && total >= capacity {
        start = end.saturating_sub(capacity);
    }
    start.min(end)..end
}

/// Column spans of the filter tabs. Each tab is drawn as ` label ` with one
/// column of gap between tabs.
#[must_use]
pub fn filter_tab_spans<'a, I>(labels: I) -> Vec<Range<usize>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut col = FILTER_LEFT_COL;
    labels
        .into_iter()
        .map(|label| {
            let width = label.chars().count() + 2;
            let span = col..col + width;
            col += width + 1;
            span
        })
        .collect()
}

/// Bounding box of the modal viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalRect {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

impl ModalRect {
    /// Centres the modal in a `rows` x `cols` pane.
    #[must_use]
    pub fn centered(rows: usize, cols: usize) -> Self {
        let width = cols
            .saturating_sub(4)
            .min(MODAL_MAX_WIDTH)
            .max(MODAL_MIN_WIDTH.min(cols));
        Self {
            top: rows.saturating_sub(MODAL_HEIGHT) / 2 + 1,
            left: cols.saturating_sub(width) / 2 + 1,
            width,
            height: MODAL_HEIGHT,
        }
    }

    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.top + self.height - 1
    }

    /// Row holding the prev/next controls.
    #[must_use]
    pub const fn nav_row(&self) -> usize {
        self.bottom() - 1
    }

    /// Columns of the close control, embedded in the top border.
    #[must_use]
    pub const fn close_span(&self) -> Range<usize> {
        let start = self.left + self.width.saturating_sub(MODAL_CLOSE_LABEL.len() + 2);
        start..start + MODAL_CLOSE_LABEL.len()
    }

    #[must_use]
    pub const fn prev_span(&self) -> Range<usize> {
        let start = self.left + 2;
        start..start + MODAL_PREV_LABEL.len()
    }

    #[must_use]
    pub const fn next_span(&self) -> Range<usize> {
        let start = self.left + self.width.saturating_sub(MODAL_NEXT_LABEL.len() + 2);
        start..start + MODAL_NEXT_LABEL.len()
    }

    #[must_use]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.top && row <= self.bottom() && col >= self.left && col < self.left + self.width
    }
}

/// What a pointer click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A card, by its index in the visible set.
    Card(usize),
    /// A filter tab, by its position in the filter bar.
    FilterTab(usize),
    SearchBar,
    ContactField(ContactField),
    ModalClose,
    ModalPrev,
    ModalNext,
    /// Inside the modal but on no control.
    ModalContent,
    /// Outside the modal while it is open.
    ModalBackdrop,
}

/// Maps a 1-indexed `(row, col)` click to the element drawn there.
#[must_use]
pub fn hit_test(state: &AppState, rows: usize, cols: usize, row: usize, col: usize) -> Option<HitTarget> {
    if state.gallery.viewer().is_open() {
        return Some(hit_test_modal(&ModalRect::centered(rows, cols), row, col));
    }

    if row == FILTER_ROW {
        let labels = state.gallery.filters().categories().iter().map(|c| c.label());
        return filter_tab_spans(labels)
            .iter()
            .position(|span| span.contains(&col))
            .map(HitTarget::FilterTab);
    }

    if (SEARCH_TOP_ROW..SEARCH_TOP_ROW + SEARCH_BOX_HEIGHT).contains(&row) {
        let inside = col > SEARCH_BOX_MARGIN && col <= cols.saturating_sub(SEARCH_BOX_MARGIN);
        return inside.then_some(HitTarget::SearchBar);
    }

    if state.input_mode == InputMode::Contact {
        return row
            .checked_sub(CONTACT_FIELD_ROW)
            .and_then(|offset| ContactField::ALL.get(offset).copied())
            .map(HitTarget::ContactField);
    }

    let window = card_window(state.gallery.cards().len(), state.focused_card, card_capacity(rows));
    row.checked_sub(CARD_TOP_ROW)
        .filter(|offset| *offset < window.len())
        .map(|offset| HitTarget::Card(window.start + offset))
}

fn hit_test_modal(rect: &ModalRect, row: usize, col: usize) -> HitTarget {
    if !rect.contains(row, col) {
        return HitTarget::ModalBackdrop;
    }
    if row == rect.top && rect.close_span().contains(&col) {
        return HitTarget::ModalClose;
    }
    if row == rect.nav_row() {
        if rect.prev_span().contains(&col) {
            return HitTarget::ModalPrev;
        }
        if rect.next_span().contains(&col) {
            return HitTarget::ModalNext;
        }
    }
    HitTarget::ModalContent
}
