//! Sandbox path handling.

use std::path::PathBuf;

/// Directory holding the trace file.
///
/// `/host` is where Zellij mounts the host filesystem (usually the home directory of
/// the session), so this resolves to `~/.local/share/zellij/swipecart` on the host.
///
/// ```
/// use swipecart::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/swipecart"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("swipecart")
}

/// Rewrites a leading `~` to `/host`, used for the `theme_file` option.
///
/// ```
/// use swipecart::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// assert_eq!(expand_tilde("~user/theme.toml"), "~user/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
