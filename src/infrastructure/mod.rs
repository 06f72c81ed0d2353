//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host` inside the sandbox; the
//! helpers here translate between host-style and sandbox paths.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, strip_host_prefix};
