//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the plugin shim or the worker thread
//! 2. [`handle_event`] pattern-matches the event
//! 3. State mutations go through `AppState` and `Gallery` methods
//! 4. Side effects are returned as [`Action`]s for the shim to execute
//!
//! # Event Types
//!
//! - **Cards**: `FocusDown`, `FocusUp`, `ActivateFocused`, `ActivateCard`
//! - **Filters**: `NextFilter`, `PrevFilter`, `SelectFilter`
//! - **Search**: `SearchMode`, `FocusSearchBar`, `FocusResults`, `ExitSearch`
//! - **Text input**: `Char`, `Backspace`, `Escape`
//! - **Viewer**: `ViewerNext`, `ViewerPrev`, `CloseViewer`
//! - **Contact**: `ContactMode`, `ContactNextField`, `ContactPrevField`,
//!   `FocusContactField`, `SubmitContact`, `CancelContact`
//! - **Pointer**: `Click`, resolved through [`hit_test`]
//! - **System**: `ReloadCatalog`, `PermissionsResult`, `TimerElapsed`,
//!   `WorkerResponse`, `CloseFocus`
//!
//! # Example
//!
//! ```
//! use zallery::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (should_render, actions) = handle_event(&mut state, &Event::ActivateFocused)?;
//! assert!(should_render && actions.is_empty());
//! assert!(state.gallery.viewer().is_open());
//! # Ok::<(), zallery::GalleryError>(())
//! ```

use super::modes::{InputMode, SearchFocus};
use crate::app::{Action, AppState};
use crate::catalog::Catalog;
use crate::domain::error::Result;
use crate::domain::{ContactField, Notification, NotificationKind};
use crate::gallery::Trigger;
use crate::ui::layout::{hit_test, HitTarget};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events triggered by user input, timers, or worker responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Moves the card cursor down (wraps to top).
    FocusDown,
    /// Moves the card cursor up (wraps to bottom).
    FocusUp,
    /// Keyboard activation of the focused card.
    ActivateFocused,
    /// Pointer activation of the card at a visible-set index.
    ActivateCard(usize),

    /// Activates the next filter tab (wraps).
    NextFilter,
    /// Activates the previous filter tab (wraps).
    PrevFilter,
    /// Activates the filter tab at a position.
    SelectFilter(usize),

    /// Enters search mode with typing focus, keeping the current text.
    SearchMode,
    /// Returns keystrokes to the search box (from navigating).
    FocusSearchBar,
    /// Moves keystrokes to the results list (from typing).
    FocusResults,
    /// Clears the search text and returns to browsing.
    ExitSearch,
    /// Appends a character to the focused text field.
    Char(char),
    /// Removes the last character from the focused text field.
    Backspace,
    /// Leaves the current mode.
    Escape,

    ViewerNext,
    ViewerPrev,
    CloseViewer,

    /// Opens the contact form.
    ContactMode,
    ContactNextField,
    ContactPrevField,
    FocusContactField(ContactField),
    SubmitContact,
    /// Leaves the contact form; the draft is kept.
    CancelContact,

    /// Left click at a 1-indexed pane position.
    Click {
        row: usize,
        col: usize,
    },

    /// Asks the worker to reload the configured catalog file.
    ReloadCatalog,

    /// Result of the plugin's permission request.
    PermissionsResult {
        granted: bool,
    },

    /// A dismissal timer armed by [`Action::ScheduleDismissal`] fired.
    TimerElapsed,

    /// Wraps a response from the catalog worker.
    WorkerResponse(WorkerResponse),

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns whether to
/// re-render together with the actions to execute.
///
/// # Errors
///
/// Returns an error when a state transition cannot be carried out. Rejected
/// catalogs and worker failures are not errors here; they become error
/// notifications and the previous catalog stays active.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::FocusDown => {
            state.move_focus_down();
            Ok((true, vec![]))
        }
        Event::FocusUp => {
            state.move_focus_up();
            Ok((true, vec![]))
        }
        Event::ActivateFocused => {
            let opened = state.gallery.activate(state.focused_card, Trigger::Enter);
            if !opened && state.input_mode.is_search() {
                tracing::debug!("nothing to open, leaving search");
                return handle_event(state, &Event::ExitSearch);
            }
            Ok((opened, vec![]))
        }
        Event::ActivateCard(index) => {
            if !state.gallery.activate(*index, Trigger::Click) {
                return Ok((false, vec![]));
            }
            state.focused_card = *index;
            Ok((true, vec![]))
        }
        Event::NextFilter => {
            state.gallery.activate_next_filter();
            state.clamp_focus();
            Ok((true, vec![]))
        }
        Event::PrevFilter => {
            state.gallery.activate_prev_filter();
            state.clamp_focus();
            Ok((true, vec![]))
        }
        Event::SelectFilter(position) => {
            if !state.gallery.activate_filter(*position) {
                return Ok((false, vec![]));
            }
            state.clamp_focus();
            Ok((true, vec![]))
        }
        Event::SearchMode | Event::FocusSearchBar => {
            tracing::debug!("entering search mode");
            state.input_mode = InputMode::Search(SearchFocus::Typing);
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.gallery.search_text().trim().is_empty() {
                state.input_mode = InputMode::Browse;
                state.gallery.set_search_text("");
                state.clamp_focus();
                return Ok((true, vec![]));
            }
            state.input_mode = InputMode::Search(SearchFocus::Navigating);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            tracing::debug!(query = %state.gallery.search_text(), "exiting search mode");
            state.input_mode = InputMode::Browse;
            state.gallery.set_search_text("");
            state.clamp_focus();
            Ok((true, vec![]))
        }
        Event::Char(c) => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                state.gallery.push_search_char(*c);
                tracing::trace!(query = %state.gallery.search_text(), "search text updated");
                state.clamp_focus();
                Ok((true, vec![]))
            }
            InputMode::Contact => {
                state.contact.push_char(*c);
                Ok((true, vec![]))
            }
            InputMode::Browse | InputMode::Search(SearchFocus::Navigating) => Ok((false, vec![])),
        },
        Event::Backspace => match state.input_mode {
            InputMode::Search(SearchFocus::Typing) => {
                state.gallery.pop_search_char();
                state.clamp_focus();
                Ok((true, vec![]))
            }
            InputMode::Contact => {
                state.contact.pop_char();
                Ok((true, vec![]))
            }
            InputMode::Browse | InputMode::Search(SearchFocus::Navigating) => Ok((false, vec![])),
        },
        Event::Escape => match state.input_mode {
            InputMode::Search(_) => handle_event(state, &Event::ExitSearch),
            InputMode::Contact => handle_event(state, &Event::CancelContact),
            InputMode::Browse => Ok((false, vec![])),
        },
        Event::ViewerNext => {
            state.gallery.next();
            Ok((state.gallery.viewer().is_open(), vec![]))
        }
        Event::ViewerPrev => {
            state.gallery.prev();
            Ok((state.gallery.viewer().is_open(), vec![]))
        }
        Event::CloseViewer => {
            let was_open = state.gallery.viewer().is_open();
            state.gallery.close();
            Ok((was_open, vec![]))
        }
        Event::ContactMode => {
            tracing::debug!("opening contact form");
            state.input_mode = InputMode::Contact;
            Ok((true, vec![]))
        }
        Event::ContactNextField => {
            state.contact.focus_next();
            Ok((true, vec![]))
        }
        Event::ContactPrevField => {
            state.contact.focus_prev();
            Ok((true, vec![]))
        }
        Event::FocusContactField(field) => {
            state.contact.focus = *field;
            Ok((true, vec![]))
        }
        Event::SubmitContact => {
            let notification = state.contact.submit();
            if notification.kind == NotificationKind::Success {
                state.input_mode = InputMode::Browse;
            }
            let action = state.notify(notification);
            Ok((true, vec![action]))
        }
        Event::CancelContact => {
            state.input_mode = InputMode::Browse;
            Ok((true, vec![]))
        }
        Event::Click { row, col } => {
            let (rows, cols) = state.viewport;
            let Some(target) = hit_test(state, rows, cols, *row, *col) else {
                return Ok((false, vec![]));
            };
            tracing::debug!(row, col, target = ?target, "click resolved");
            match click_event(target) {
                Some(event) => handle_event(state, &event),
                None => Ok((false, vec![])),
            }
        }
        Event::ReloadCatalog => {
            let Some(path) = state.catalog_file.clone() else {
                tracing::debug!("no catalog file configured, nothing to reload");
                return Ok((false, vec![]));
            };
            let message = WorkerMessage::load_catalog(path, state.trace_level.clone());
            Ok((false, vec![Action::PostToWorker(message)]))
        }
        Event::PermissionsResult { granted } => {
            if !granted {
                tracing::warn!("permissions denied, keeping the embedded catalog");
                return Ok((false, vec![]));
            }
            handle_event(state, &Event::ReloadCatalog)
        }
        Event::TimerElapsed => {
            state.pending_dismissals = state.pending_dismissals.saturating_sub(1);
            if state.pending_dismissals > 0 || state.notification.is_none() {
                return Ok((false, vec![]));
            }
            tracing::debug!("notification dismissed");
            state.notification = None;
            Ok((true, vec![]))
        }
        Event::WorkerResponse(response) => match response {
            WorkerResponse::CatalogLoaded { source, items } => match Catalog::new(items.clone()) {
                Ok(catalog) => {
                    tracing::debug!(source = %source, item_count = catalog.len(), "catalog replaced");
                    let filters = state.filter_bar_for(&catalog);
                    let count = catalog.len();
                    state.gallery.replace_catalog(catalog, filters);
                    state.clamp_focus();
                    let action = state.notify(Notification::success(format!("Loaded {count} items from {source}")));
                    Ok((true, vec![action]))
                }
                Err(e) => {
                    tracing::error!(source = %source, error = %e, "rejected catalog from worker");
                    let action = state.notify(Notification::error(e.to_string()));
                    Ok((true, vec![action]))
                }
            },
            WorkerResponse::Error { message } => {
                tracing::error!("Worker error: {}", message);
                let action = state.notify(Notification::error(message.clone()));
                Ok((true, vec![action]))
            }
        },
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Event a click on `target` stands for.
const fn click_event(target: HitTarget) -> Option<Event> {
    match target {
        HitTarget::Card(index) => Some(Event::ActivateCard(index)),
        HitTarget::FilterTab(position) => Some(Event::SelectFilter(position)),
        HitTarget::SearchBar => Some(Event::FocusSearchBar),
        HitTarget::ContactField(field) => Some(Event::FocusContactField(field)),
        HitTarget::ModalPrev => Some(Event::ViewerPrev),
        HitTarget::ModalNext => Some(Event::ViewerNext),
        HitTarget::ModalClose | HitTarget::ModalBackdrop => Some(Event::CloseViewer),
        // clicks inside the content box never close the modal
        HitTarget::ModalContent => None,
    }
}
