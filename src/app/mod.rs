//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin shim (main.rs) and the gallery and
//! worker layers:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──────── Worker Responses ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Input mode state machine types
//! - [`state`]: Central application state and view model computation
//!
//! # Example
//!
//! ```
//! use zallery::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! let (_, actions) = handle_event(&mut state, &Event::FocusDown)?;
//! assert!(actions.is_empty());
//! assert_eq!(state.focused_card, 1);
//! # Ok::<(), zallery::GalleryError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{InputMode, SearchFocus};
pub use state::AppState;
