//! Input mode state types for the application.
//!
//! The mode decides how a key press is interpreted by the plugin shim and
//! which footer hints and overlays are drawn:
//!
//! - **Browse**: card navigation, filter tabs, opening the viewer
//! - **Search**: typing into the search box, or walking the results
//! - **Contact**: editing the contact form
//!
//! The viewer is not a mode of its own. While it is open it captures the
//! keyboard regardless of the underlying mode, and closing it returns to
//! wherever the user was.
//!
//! # Example
//!
//! ```
//! use zallery::app::modes::{InputMode, SearchFocus};
//!
//! let mode = InputMode::Search(SearchFocus::Typing);
//! assert!(mode.is_search());
//! assert!(!InputMode::default().is_search());
//! ```

/// Focus state within search mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchFocus {
    /// Keystrokes edit the search text.
    Typing,

    /// Keystrokes move the card cursor; `/` returns to typing.
    Navigating,
}

/// Current input handling mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Default mode. j/k move the card cursor, h/l or Tab cycle filters,
    /// Enter opens the viewer, `/` searches, `c` opens the contact form.
    #[default]
    Browse,

    /// Search mode with a focus sub-state.
    Search(SearchFocus),

    /// Contact form editing.
    Contact,
}

impl InputMode {
    #[must_use]
    pub const fn is_search(self) -> bool {
        matches!(self, Self::Search(_))
    }

    /// Whether printable keys go into a text field rather than commands.
    #[must_use]
    pub const fn captures_text(self) -> bool {
        matches!(self, Self::Search(SearchFocus::Typing) | Self::Contact)
    }
}
