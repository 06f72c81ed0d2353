//! Zallery: a Zellij plugin for browsing an achievements gallery.
//!
//! Zallery shows a catalog of achievement records as a card table and
//! provides:
//! - Year filter tabs and case-insensitive name search, combined with AND
//! - A modal viewer with wrap-around previous/next navigation
//! - A contact form with client-side validation and timed notifications
//! - Catalog reloading from a JSON or TOML file on a Zellij worker thread

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling, action dispatching               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Gallery       │   │ Worker Layer  │
//! │ (ui/)         │   │ (gallery/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - Filtering   │   │ - File loads  │
//! │ - Hit testing │   │ - Cards       │   │ - IPC bridge  │
//! │ - Theming     │   │ - Viewer      │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Catalog, Domain & Infrastructure                   │
//! │  - Catalog sources (catalog/)                       │
//! │  - Items, categories, contact form (domain/)        │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry spans as JSON lines                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/zallery.wasm" {
//!         catalog_file "~/achievements.json"
//!         categories "2024,2023,2022"
//!         theme "catppuccin-mocha"
//!         notification_secs "5"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use zallery::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::SearchMode)?;
//! for c in "arun".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! assert_eq!(state.gallery.visible().len(), 2);
//! # Ok::<(), zallery::GalleryError>(())
//! ```

pub mod app;
pub mod catalog;
pub mod domain;
pub mod gallery;
pub mod infrastructure;
pub mod observability;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode, SearchFocus};
pub use catalog::Catalog;
pub use domain::{GalleryError, Item, Result};
pub use gallery::Gallery;
pub use ui::Theme;

use std::collections::BTreeMap;
use std::time::Duration;

/// Default notification lifetime in seconds.
const DEFAULT_NOTIFICATION_SECS: u64 = 5;

/// Plugin configuration parsed from the KDL plugin block.
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog data file loaded by the worker once permissions are granted.
    ///
    /// `.json` or `.toml`; `~` expands to the host mount. When unset the
    /// embedded sample catalog is used and `r` does nothing.
    pub catalog_file: Option<String>,

    /// Explicit filter tokens, comma-separated in the config.
    ///
    /// `all` is always first. When unset the tokens are the catalog's
    /// distinct years, newest first.
    pub categories: Option<Vec<String>>,

    /// Built-in theme name; ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. See [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,

    /// How long notifications stay on screen.
    pub notification_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_file: None,
            categories: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
            notification_secs: DEFAULT_NOTIFICATION_SECS,
        }
    }
}

impl Config {
    /// Parses the configuration map Zellij hands to `load`.
    ///
    /// Blank values count as unset; an unparsable or zero
    /// `notification_secs` falls back to 5.
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use zallery::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("categories".to_string(), "2024, 2023,".to_string());
    /// map.insert("notification_secs".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.categories, Some(vec!["2024".to_string(), "2023".to_string()]));
    /// assert_eq!(config.notification_secs, 5);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let categories = get("categories")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|v: &Vec<String>| !v.is_empty());

        let notification_secs = get("notification_secs")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_NOTIFICATION_SECS);

        Self {
            catalog_file: get("catalog_file"),
            categories,
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
            notification_secs,
        }
    }

    /// Resolves the theme: `theme_file`, then `theme`, then the default.
    /// Failures are logged and fall through to the default.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

/// Builds the initial application state.
///
/// The gallery starts on the embedded sample catalog; a configured
/// `catalog_file` replaces it once the worker has loaded it.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zallery plugin");

    let mut state = AppState::new(Gallery::default(), config.theme());
    state.categories.clone_from(&config.categories);
    state.catalog_file.clone_from(&config.catalog_file);
    state.trace_level.clone_from(&config.trace_level);
    state.notification_timeout = Duration::from_secs(config.notification_secs);

    let catalog = state.gallery.catalog().clone();
    let filters = state.filter_bar_for(&catalog);
    state.gallery = Gallery::new(catalog, filters);

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.catalog_file, None);
        assert_eq!(config.categories, None);
        assert_eq!(config.notification_secs, 5);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = Config::from_zellij(&map(&[("catalog_file", "  "), ("categories", " , ")]));
        assert_eq!(config.catalog_file, None);
        assert_eq!(config.categories, None);
    }

    #[test]
    fn initialize_applies_configuration() {
        let config = Config::from_zellij(&map(&[
            ("catalog_file", "~/items.toml"),
            ("categories", "2022,2023"),
            ("notification_secs", "2"),
            ("theme", "catppuccin-latte"),
            ("trace_level", "zallery=debug"),
        ]));
        let state = initialize(&config);

        assert_eq!(state.theme.name, "catppuccin-latte");
        assert_eq!(state.catalog_file.as_deref(), Some("~/items.toml"));
        assert_eq!(state.notification_timeout, Duration::from_secs(2));
        assert_eq!(state.trace_level.as_deref(), Some("zallery=debug"));
        assert_eq!(
            state.gallery.filters().categories(),
            &[Category::All, Category::from_token("2022"), Category::from_token("2023")]
        );
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config::from_zellij(&map(&[("theme", "nope"), ("theme_file", "")]));
        assert_eq!(config.theme().name, "catppuccin-mocha");
    }
}
