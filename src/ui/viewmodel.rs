//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They hold no
//! logic, only display-ready data: truncated text, highlight ranges, and
//! flags for selection and focus.

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Transient status message, drawn right-aligned on the top row.
    pub notification: Option<NotificationInfo>,

    pub header: HeaderInfo,

    /// One tab per category, in filter bar order.
    pub filter_tabs: Vec<FilterTab>,

    pub search_bar: SearchBarInfo,

    /// Cards inside the visible window.
    pub display_cards: Vec<DisplayCard>,

    /// Set when the visible set is empty.
    pub empty_state: Option<EmptyState>,

    /// Set in contact mode; replaces the card table.
    pub contact: Option<ContactFormView>,

    /// Set while the viewer is open; drawn on top of everything else.
    pub modal: Option<ModalView>,

    pub footer: FooterInfo,
}

/// One row of the card table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCard {
    /// Position within the visible set.
    pub index: usize,

    pub name: String,

    /// `"Year 2024"`.
    pub year_label: String,

    pub description: String,

    pub is_selected: bool,

    /// Character ranges of `name` matching the search text.
    ///
    /// Each tuple is `(start_index, end_index)` in UTF-8 character indices.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTab {
    pub label: String,
    pub is_active: bool,
}

#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,
}

/// Shown when no items are visible.
#[derive(Debug, Clone)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    /// Keystrokes currently go into the search box.
    pub is_focused: bool,
}

#[derive(Debug, Clone)]
pub struct NotificationInfo {
    pub message: String,
    pub is_error: bool,
}

/// Contact form as drawn in contact mode.
#[derive(Debug, Clone)]
pub struct ContactFormView {
    pub fields: Vec<ContactFieldView>,
}

#[derive(Debug, Clone)]
pub struct ContactFieldView {
    pub label: &'static str,
    pub value: String,
    pub is_required: bool,
    pub is_focused: bool,
}

/// Modal viewer content.
#[derive(Debug, Clone)]
pub struct ModalView {
    pub name: String,
    pub image: String,
    pub caption: String,
    /// `"2 / 5"`, one-based.
    pub counter: String,
}
