//! Zellij plugin wrapper and entry point.
//!
//! The thin layer between the zallery library and the Zellij plugin system:
//! it maps Zellij events to library [`Event`]s, runs [`handle_event`] and
//! carries out the returned [`Action`]s with host calls.
//!
//! ```text
//! ┌─────────────────────────┐
//! │   Zellij Main Thread    │
//! │  ┌──────────────────┐   │
//! │  │  State (plugin)  │   │  ← UI state, event handling
//! │  └──────────────────┘   │
//! │          │ IPC          │
//! │          ▼              │
//! │  ┌──────────────────┐   │
//! │  │  CatalogWorker   │   │  ← Catalog file loading
//! │  └──────────────────┘   │
//! └─────────────────────────┘
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState` on the
//!    embedded catalog, request permissions, subscribe
//! 2. **Permissions granted**: Ask the worker for the configured catalog file
//! 3. **Update**: Map events, delegate to the library, execute actions
//! 4. **Render**: Record the pane size for hit testing, then draw
//!
//! # Keybindings
//!
//! Viewer open:
//! - `Esc`: Close
//! - `Left`/`h`, `Right`/`l`: Previous/next item (wraps)
//!
//! Browse:
//! - `j`/`Down`, `k`/`Up`: Move the card cursor
//! - `Enter`: Open the focused card
//! - `h`/`Left`/`Shift+Tab`, `l`/`Right`/`Tab`: Previous/next filter tab
//! - `/`: Search
//! - `c`: Contact form
//! - `r`: Reload the catalog file
//! - `q`: Close the plugin
//!
//! Search (typing): characters edit the query, `Enter` moves to the results,
//! `Esc` clears the search. Search (results): `j`/`k` move, `Enter` opens,
//! `/` edits the query again.
//!
//! Contact: `Tab`/`Shift+Tab` cycle fields, `Enter` sends, `Esc` goes back.
//!
//! Mouse: click a card to open it, a tab to filter, the search box to type;
//! in the viewer click the controls, or anywhere outside it to close.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;
use zellij_tile::shim::post_message_to;

use zallery::worker::{CatalogWorker, WorkerMessage, WorkerResponse};
use zallery::{handle_event, Action, Config, Event, InputMode, SearchFocus};

register_plugin!(State);
register_worker!(CatalogWorker, catalog_worker, CATALOG_WORKER);

/// Name the worker is registered and addressed under.
const WORKER_NAME: &str = "catalog";

/// Plugin state wrapper.
struct State {
    app: zallery::app::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: zallery::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zallery::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(catalog_file = ?config.catalog_file, categories = ?config.categories, "parsed configuration");
        self.app = zallery::initialize(&config);

        request_permission(&[PermissionType::ChangeApplicationState, PermissionType::FullHdAccess]);

        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::CustomMessage,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match Self::map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_) => Event::TimerElapsed,
            zellij_tile::prelude::Event::CustomMessage(message, payload) => {
                match Self::map_custom_message_event(&message, &payload) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => Event::PermissionsResult {
                granted: matches!(status, PermissionStatus::Granted),
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.app.viewport = (rows, cols);
        zallery::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::Timer(_) => "Timer".to_string(),
            zellij_tile::prelude::Event::CustomMessage(msg, _) => format!("CustomMessage({msg})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps a key to an application event for the current mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        let shift_tab = key.bare_key == BareKey::Tab && key.has_modifiers(&[KeyModifier::Shift]);

        if self.app.gallery.viewer().is_open() {
            return match key.bare_key {
                BareKey::Esc => Some(Event::CloseViewer),
                BareKey::Left | BareKey::Char('h') => Some(Event::ViewerPrev),
                BareKey::Right | BareKey::Char('l') => Some(Event::ViewerNext),
                _ => None,
            };
        }

        match self.app.input_mode {
            InputMode::Browse => Some(match key.bare_key {
                BareKey::Down | BareKey::Char('j') => Event::FocusDown,
                BareKey::Up | BareKey::Char('k') => Event::FocusUp,
                BareKey::Enter => Event::ActivateFocused,
                BareKey::Tab if shift_tab => Event::PrevFilter,
                BareKey::Left | BareKey::Char('h') => Event::PrevFilter,
                BareKey::Right | BareKey::Char('l') | BareKey::Tab => Event::NextFilter,
                BareKey::Char('/') => Event::SearchMode,
                BareKey::Char('c') => Event::ContactMode,
                BareKey::Char('r') => Event::ReloadCatalog,
                BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
            InputMode::Search(SearchFocus::Typing) => Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Enter => Event::FocusResults,
                BareKey::Down => Event::FocusDown,
                BareKey::Up => Event::FocusUp,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            InputMode::Search(SearchFocus::Navigating) => Some(match key.bare_key {
                BareKey::Esc => Event::ExitSearch,
                BareKey::Down | BareKey::Char('j') => Event::FocusDown,
                BareKey::Up | BareKey::Char('k') => Event::FocusUp,
                BareKey::Enter => Event::ActivateFocused,
                BareKey::Char('/') => Event::FocusSearchBar,
                _ => return None,
            }),
            InputMode::Contact => Some(match key.bare_key {
                BareKey::Tab if shift_tab => Event::ContactPrevField,
                BareKey::Tab | BareKey::Down => Event::ContactNextField,
                BareKey::Up => Event::ContactPrevField,
                BareKey::Enter => Event::SubmitContact,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
        }
    }

    /// Left clicks become 1-indexed `Click` events; everything else is
    /// ignored.
    fn map_mouse_event(mouse: Mouse) -> Option<Event> {
        match mouse {
            Mouse::LeftClick(line, col) => {
                let row = usize::try_from(line).ok()?;
                Some(Event::Click { row: row + 1, col: col + 1 })
            }
            _ => None,
        }
    }

    fn map_custom_message_event(message: &str, payload: &str) -> Option<Event> {
        tracing::debug!(message_name = %message, payload_len = payload.len(), "custom message event");

        if message != WORKER_NAME {
            tracing::debug!(message_name = %message, "ignoring custom message with unknown name");
            return None;
        }

        match serde_json::from_str::<WorkerResponse>(payload) {
            Ok(response) => Some(Event::WorkerResponse(response)),
            Err(e) => {
                tracing::warn!(error = %e, "failed to deserialize worker response");
                None
            }
        }
    }

    fn post_worker_message(message: &WorkerMessage) {
        match serde_json::to_string(message) {
            Ok(payload) => {
                tracing::debug!(payload_len = payload.len(), "posting message to worker");
                post_message_to(PluginMessage {
                    worker_name: Some(WORKER_NAME.to_string()),
                    name: WORKER_NAME.to_string(),
                    payload,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize worker message");
            }
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => hide_self(),
            Action::PostToWorker(message) => Self::post_worker_message(message),
            Action::ScheduleDismissal { after } => set_timeout(after.as_secs_f64()),
        }
    }
}
