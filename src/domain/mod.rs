//! Domain layer for the zallery plugin.
//!
//! Core types with no dependency on Zellij or on rendering:
//!
//! - [`error`]: Error types and result alias
//! - [`item`]: The catalog record
//! - [`category`]: Category tokens and the filter bar
//! - [`contact`]: Contact form model and validation
//! - [`notification`]: Transient status messages
//!
//! # Examples
//!
//! ```
//! use zallery::domain::{Category, FilterBar};
//!
//! let mut bar = FilterBar::from_years(&[2023, 2024]);
//! assert!(bar.activate_token("2023"));
//! assert_eq!(bar.active(), &Category::Year("2023".to_string()));
//! ```

pub mod category;
pub mod contact;
pub mod error;
pub mod item;
pub mod notification;

pub use category::{Category, FilterBar, ALL_TOKEN};
pub use contact::{ContactError, ContactField, ContactForm};
pub use error::{GalleryError, Result};
pub use item::Item;
pub use notification::{Notification, NotificationKind};
