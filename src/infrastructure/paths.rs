//! Path helpers for the Zellij sandbox, where the host filesystem is
//! mounted under `/host`.

use std::path::PathBuf;

/// Directory holding the span file.
///
/// `/host` points at the cwd of the last focused terminal, usually the home
/// directory, so this normally resolves to `~/.local/share/zellij/zallery`.
///
/// ```
/// use zallery::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/zallery"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("zallery")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// ```
/// use zallery::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/achievements.json"), "/host/achievements.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/data/items.toml"), "/data/items.toml");
/// assert_eq!(expand_tilde("~alice/items.toml"), "~alice/items.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}

/// Removes the `/host` prefix for display.
///
/// ```
/// use zallery::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/achievements.json"), "/achievements.json");
/// assert_eq!(strip_host_prefix("/hostile/items.json"), "/hostile/items.json");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest.to_string(),
        _ => path.to_string(),
    }
}
