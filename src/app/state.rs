//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for the plugin's transient UI
//! state. It owns the [`Gallery`] (selection, visible set, cards, viewer) and
//! adds what only the terminal host needs: a card cursor, the input mode, the
//! theme, the contact form and the current notification.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` turns a state snapshot into a [`UIViewModel`]: it
//! windows the card table around the cursor, computes match highlights,
//! truncates text to the pane width and picks mode-specific footer hints.
//!
//! # Example
//!
//! ```
//! use zallery::app::AppState;
//!
//! let mut state = AppState::default();
//! state.move_focus_down();
//! let vm = state.compute_viewmodel(24, 80);
//! assert!(vm.display_cards[1].is_selected);
//! ```

use super::actions::Action;
use super::modes::{InputMode, SearchFocus};
use crate::catalog::Catalog;
use crate::domain::{ContactField, ContactForm, FilterBar, Notification, NotificationKind};
use crate::gallery::{match_range, Gallery, SearchQuery};
use crate::ui::helpers::truncate_end;
use crate::ui::layout::{self, NAME_COLUMN_WIDTH, YEAR_COLUMN_WIDTH};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ContactFieldView, ContactFormView, DisplayCard, EmptyState, FilterTab, FooterInfo, HeaderInfo,
    ModalView, NotificationInfo, SearchBarInfo, UIViewModel,
};
use std::time::Duration;

/// Default lifetime of a notification.
pub const DEFAULT_NOTIFICATION_TIMEOUT: Duration = Duration::from_secs(5);

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Catalog, selection, visible set, cards and viewer.
    pub gallery: Gallery,

    /// Zero-based cursor into the visible cards.
    ///
    /// Clamped whenever the visible set changes; wraps during navigation.
    pub focused_card: usize,

    pub input_mode: InputMode,

    pub theme: Theme,

    pub contact: ContactForm,

    /// Notification currently on screen.
    pub notification: Option<Notification>,

    /// Dismissal timers still running.
    ///
    /// A notification is only cleared by the last timer, so a newer message
    /// is not cut short by the timer of an older one.
    pub pending_dismissals: usize,

    pub notification_timeout: Duration,

    /// Explicit category tokens; `None` derives them from catalog years.
    pub categories: Option<Vec<String>>,

    /// Catalog data file the worker loads from, if configured.
    pub catalog_file: Option<String>,

    /// Span filter directive forwarded to the worker with each load.
    pub trace_level: Option<String>,

    /// Last rendered pane size as `(rows, cols)`, used for hit testing.
    pub viewport: (usize, usize),
}

impl AppState {
    #[must_use]
    pub fn new(gallery: Gallery, theme: Theme) -> Self {
        Self {
            gallery,
            focused_card: 0,
            input_mode: InputMode::Browse,
            theme,
            contact: ContactForm::default(),
            notification: None,
            pending_dismissals: 0,
            notification_timeout: DEFAULT_NOTIFICATION_TIMEOUT,
            categories: None,
            catalog_file: None,
            trace_level: None,
            viewport: (0, 0),
        }
    }

    /// Moves the card cursor down, wrapping to the top. No-op when nothing is
    /// visible.
    pub fn move_focus_down(&mut self) {
        let len = self.gallery.cards().len();
        if len == 0 {
            return;
        }
        self.focused_card = (self.focused_card + 1) % len;
    }

    /// Moves the card cursor up, wrapping to the bottom.
    pub fn move_focus_up(&mut self) {
        let len = self.gallery.cards().len();
        if len == 0 {
            return;
        }
        if self.focused_card == 0 {
            self.focused_card = len - 1;
        } else {
            self.focused_card -= 1;
        }
    }

    /// Keeps the cursor inside the visible cards after they change.
    pub fn clamp_focus(&mut self) {
        let len = self.gallery.cards().len();
        self.focused_card = self.focused_card.min(len.saturating_sub(1));
    }

    /// Filter bar for a freshly loaded catalog, honouring configured tokens.
    #[must_use]
    pub fn filter_bar_for(&self, catalog: &Catalog) -> FilterBar {
        self.categories.as_ref().map_or_else(
            || FilterBar::from_years(&catalog.years()),
            FilterBar::new,
        )
    }

    /// Shows `notification` and returns the action arming its dismissal.
    pub fn notify(&mut self, notification: Notification) -> Action {
        tracing::debug!(kind = ?notification.kind, message = %notification.message, "notification shown");
        self.notification = Some(notification);
        self.pending_dismissals += 1;
        Action::ScheduleDismissal {
            after: self.notification_timeout,
        }
    }

    /// Computes a renderable view model for a `rows` x `cols` pane.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let in_contact = self.input_mode == InputMode::Contact;

        UIViewModel {
            notification: self.compute_notification(),
            header: self.compute_header(),
            filter_tabs: self.compute_filter_tabs(),
            search_bar: self.compute_search_bar(),
            display_cards: if in_contact {
                vec![]
            } else {
                self.compute_display_cards(rows, cols)
            },
            empty_state: if in_contact {
                None
            } else {
                self.compute_empty_state()
            },
            contact: in_contact.then(|| self.compute_contact_form()),
            modal: self.compute_modal(),
            footer: self.compute_footer(),
        }
    }

    fn compute_display_cards(&self, rows: usize, cols: usize) -> Vec<DisplayCard> {
        let cards = self.gallery.cards();
        let visible = self.gallery.visible();
        let window = layout::card_window(cards.len(), self.focused_card, layout::card_capacity(rows));
        let query = SearchQuery::new(self.gallery.search_text());
        let description_width = cols.saturating_sub(NAME_COLUMN_WIDTH + YEAR_COLUMN_WIDTH);

        cards[window.clone()]
            .iter()
            .zip(&visible[window])
            .map(|(card, item)| {
                let name = truncate_end(&card.name, NAME_COLUMN_WIDTH - 2);
                let shown = name.chars().count();
                let highlight_ranges = match_range(&card.name, &query)
                    .map(|(start, end)| (start, end.min(shown)))
                    .filter(|(start, end)| start < end)
                    .into_iter()
                    .collect();

                DisplayCard {
                    index: card.index,
                    name,
                    year_label: card.year_label.clone(),
                    description: truncate_end(&item.description, description_width),
                    is_selected: card.index == self.focused_card,
                    highlight_ranges,
                }
            })
            .collect()
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: format!(
                " Achievements ({} of {}) ",
                self.gallery.visible().len(),
                self.gallery.catalog().len()
            ),
        }
    }

    fn compute_filter_tabs(&self) -> Vec<FilterTab> {
        let filters = self.gallery.filters();
        filters
            .categories()
            .iter()
            .enumerate()
            .map(|(position, category)| FilterTab {
                label: category.label().to_string(),
                is_active: position == filters.active_position(),
            })
            .collect()
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.gallery.search_text().to_string(),
            is_focused: self.input_mode == InputMode::Search(SearchFocus::Typing),
        }
    }

    fn compute_empty_state(&self) -> Option<EmptyState> {
        if !self.gallery.visible().is_empty() {
            return None;
        }
        if self.gallery.catalog().is_empty() {
            return Some(EmptyState {
                message: "The catalog is empty".to_string(),
                subtitle: "Press 'r' to reload it".to_string(),
            });
        }
        let category = self.gallery.filters().active().label().to_string();
        let query = self.gallery.search_text().trim();
        let subtitle = if query.is_empty() {
            format!("Nothing filed under {category}")
        } else {
            format!("Nothing matches \"{query}\" in {category}")
        };
        Some(EmptyState {
            message: "No items match your filters".to_string(),
            subtitle,
        })
    }

    fn compute_contact_form(&self) -> ContactFormView {
        ContactFormView {
            fields: ContactField::ALL
                .iter()
                .map(|&field| ContactFieldView {
                    label: field.label(),
                    value: self.contact.value(field).to_string(),
                    is_required: field.is_required(),
                    is_focused: field == self.contact.focused(),
                })
                .collect(),
        }
    }

    fn compute_modal(&self) -> Option<ModalView> {
        self.gallery.viewer().presentation().map(|content| ModalView {
            name: content.name,
            image: content.image,
            caption: content.caption,
            counter: format!("{} / {}", content.position + 1, content.total),
        })
    }

    fn compute_notification(&self) -> Option<NotificationInfo> {
        self.notification.as_ref().map(|note| NotificationInfo {
            message: note.message.clone(),
            is_error: note.kind == NotificationKind::Error,
        })
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.gallery.viewer().is_open() {
            "Esc: close  Left/h: previous  Right/l: next  click outside: close"
        } else {
            match self.input_mode {
                InputMode::Browse => {
                    "j/k: navigate  h/l or Tab: year  Enter: view  /: search  c: contact  r: reload  q: quit"
                }
                InputMode::Search(SearchFocus::Typing) => "Esc: clear search  Enter: results  Type to filter",
                InputMode::Search(SearchFocus::Navigating) => {
                    "Esc: clear search  /: edit query  j/k: navigate  Enter: view"
                }
                InputMode::Contact => "Tab/Shift+Tab: field  Enter: send  Esc: back",
            }
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Gallery::default(), Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_wraps_in_both_directions() {
        let mut state = AppState::default();
        state.move_focus_up();
        assert_eq!(state.focused_card, 7);
        state.move_focus_down();
        assert_eq!(state.focused_card, 0);
    }

    #[test]
    fn focus_is_clamped_after_filtering() {
        let mut state = AppState::default();
        state.focused_card = 6;
        state.gallery.activate_category("2022");
        state.clamp_focus();
        assert_eq!(state.focused_card, 1);
    }

    #[test]
    fn header_counts_visible_of_total() {
        let mut state = AppState::default();
        state.gallery.activate_category("2023");
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.header.title, " Achievements (3 of 8) ");
        assert!(vm.filter_tabs[2].is_active);
        assert_eq!(vm.filter_tabs[0].label, "All");
    }

    #[test]
    fn cards_are_windowed_around_the_cursor() {
        let mut state = AppState::default();
        state.focused_card = 7;
        let vm = state.compute_viewmodel(14, 80);
        let indices: Vec<usize> = vm.display_cards.iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![5, 6, 7]);
        assert!(vm.display_cards[2].is_selected);
    }

    #[test]
    fn search_matches_are_highlighted() {
        let mut state = AppState::default();
        state.gallery.set_search_text("KHAN");
        let vm = state.compute_viewmodel(24, 80);
        assert_eq!(vm.display_cards.len(), 1);
        assert_eq!(vm.display_cards[0].highlight_ranges, vec![(5, 9)]);
        assert_eq!(vm.display_cards[0].year_label, "Year 2023");
    }

    #[test]
    fn empty_visible_set_yields_empty_state() {
        let mut state = AppState::default();
        state.gallery.set_search_text("nonexistent-xyz");
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.display_cards.is_empty());
        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.subtitle, "Nothing matches \"nonexistent-xyz\" in All");
    }

    #[test]
    fn open_viewer_produces_modal_and_footer() {
        let mut state = AppState::default();
        state.gallery.open(4);
        let vm = state.compute_viewmodel(24, 80);
        let modal = vm.modal.unwrap();
        assert_eq!(modal.counter, "5 / 8");
        assert_eq!(modal.caption, "Ravi Patel — Essay competition winner (2023)");
        assert!(vm.footer.keybindings.starts_with("Esc: close"));
    }

    #[test]
    fn contact_mode_replaces_card_table() {
        let mut state = AppState::default();
        state.input_mode = InputMode::Contact;
        state.contact.push_char('N');
        let vm = state.compute_viewmodel(24, 80);
        assert!(vm.display_cards.is_empty());
        let form = vm.contact.unwrap();
        assert_eq!(form.fields.len(), 4);
        assert_eq!(form.fields[0].value, "N");
        assert!(form.fields[0].is_focused);
        assert!(!form.fields[2].is_required);
    }

    #[test]
    fn notify_counts_pending_dismissals() {
        let mut state = AppState::default();
        state.notification_timeout = Duration::from_secs(2);
        let action = state.notify(Notification::success("saved"));
        state.notify(Notification::error("oops"));
        assert_eq!(action, Action::ScheduleDismissal { after: Duration::from_secs(2) });
        assert_eq!(state.pending_dismissals, 2);
        assert_eq!(state.notification, Some(Notification::error("oops")));
    }

    #[test]
    fn configured_categories_override_years() {
        let mut state = AppState::default();
        state.categories = Some(vec!["2024".to_string(), "2021".to_string()]);
        let bar = state.filter_bar_for(state.gallery.catalog());
        let tokens: Vec<&str> = bar.categories().iter().map(|c| c.token()).collect();
        assert_eq!(tokens, vec!["all", "2024", "2021"]);
    }
}
