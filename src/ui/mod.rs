//! User interface rendering layer.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Renderable UI state
//! - [`layout`]: Screen geometry shared by drawing and hit testing
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Component renderers
//! - [`helpers`]: Cursor positioning, highlighting and truncation
//! - [`theme`]: Color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod layout;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use layout::{hit_test, HitTarget};
pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{DisplayCard, EmptyState, FilterTab, FooterInfo, HeaderInfo, ModalView, SearchBarInfo, UIViewModel};
