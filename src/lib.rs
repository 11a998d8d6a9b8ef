//! Swipecart: a Zellij plugin for browsing a product catalog from the terminal.
//!
//! Swipecart talks to a single HTTP search endpoint and provides:
//! - A query box with server suggestions and a faceted filter panel
//! - Active filter chips that can be removed one by one
//! - A swipe session (like / skip, one card at a time) and a paginated grid view
//! - A saved items drawer
//! - A modal quick-search overlay with its own debounced search
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← host calls only here
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Key mapping and event handling                   │
//! │  - Action emission (search, timer, close)           │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Search Layer  │   │ Swipe Layer   │
//! │ (ui/)         │   │ (search/)     │   │ (swipe/)      │
//! │ - Rendering   │   │ - Debounce    │   │ - Card cursor │
//! │ - Theming     │   │ - Query codec │   │ - Liked/skip  │
//! │ - Components  │   │ - Epochs      │   │ - Saved items │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/): items, facets, filters, errors   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/swipecart.wasm" {
//!         endpoint "http://localhost:3000/api/search"
//!         debounce_ms "350"
//!         overlay_debounce_ms "350"
//!         overlay_limit "8"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use swipecart::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let start = Instant::now();
//!
//! handle_event(&mut state, &Event::Input('m'), start)?;
//! let (_, actions) = handle_event(&mut state, &Event::Timer, start + Duration::from_secs(1))?;
//! assert!(matches!(&actions[..], [Action::Search(_)]));
//! # Ok::<(), swipecart::SwipecartError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod search;
pub mod swipe;

pub mod ui;

pub mod observability;

pub use app::{handle_event, map_key, Action, AppState, Event, Focus, ViewMode};
pub use domain::{Result, SwipecartError};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

/// Endpoint used when none (or an invalid one) is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/search";

const DEFAULT_DEBOUNCE_MS: u64 = 350;
const DEFAULT_OVERLAY_LIMIT: u32 = 8;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone)]
pub struct Config {
    /// Search endpoint. Query parameters are appended to it on every request.
    pub endpoint: Url,

    /// Quiet period before a change to the main filters triggers a search.
    pub debounce: Duration,

    /// Quiet period for the overlay query.
    pub overlay_debounce: Duration,

    /// Number of results requested by the overlay.
    pub overlay_limit: u32,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` maps to the sandbox `/host`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    /// # Panics
    ///
    /// Panics if [`DEFAULT_ENDPOINT`] fails to parse.
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint should always parse"),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            overlay_debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            overlay_limit: DEFAULT_OVERLAY_LIMIT,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unparsable values fall back to their defaults with a warning.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use swipecart::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("endpoint".to_string(), "https://shop.example.com/api/search".to_string());
    /// map.insert("debounce_ms".to_string(), "200".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.endpoint.host_str(), Some("shop.example.com"));
    /// assert_eq!(config.debounce, Duration::from_millis(200));
    /// assert_eq!(config.overlay_limit, 8);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let endpoint = config
            .get("endpoint")
            .and_then(|raw| {
                parse_endpoint(raw)
                    .map_err(|e| tracing::warn!(endpoint = %raw, error = %e, "invalid endpoint, using default"))
                    .ok()
            })
            .unwrap_or(defaults.endpoint);

        let millis = |key: &str, default: Duration| {
            config
                .get(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map_or(default, Duration::from_millis)
        };

        let overlay_limit = config
            .get("overlay_limit")
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|limit| *limit > 0)
            .unwrap_or(defaults.overlay_limit);

        Self {
            endpoint,
            debounce: millis("debounce_ms", defaults.debounce),
            overlay_debounce: millis("overlay_debounce_ms", defaults.overlay_debounce),
            overlay_limit,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").map(|p| infrastructure::expand_tilde(p)),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Parses a search endpoint, accepting only `http` and `https` URLs.
///
/// # Errors
///
/// Returns [`SwipecartError::Config`] for malformed URLs and other schemes.
pub fn parse_endpoint(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| SwipecartError::Config(format!("endpoint: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SwipecartError::Config(format!(
            "endpoint: unsupported scheme `{other}`"
        ))),
    }
}

/// Creates the application state for `config`.
///
/// The theme comes from `theme_file`, then `theme`, then the default; a theme that
/// fails to load is logged and replaced by the default.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, "initializing swipecart plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(config, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());

        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.debounce, Duration::from_millis(350));
        assert_eq!(config.overlay_limit, 8);
        assert!(config.theme_name.is_none());
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", "ftp://files.example.com"),
            ("debounce_ms", "soon"),
            ("overlay_limit", "0"),
        ]));

        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.debounce, Duration::from_millis(350));
        assert_eq!(config.overlay_limit, 8);
    }

    #[test]
    fn theme_file_expands_home() {
        let config = Config::from_zellij(&map(&[
            ("theme_file", "~/.config/swipecart/theme.toml"),
            ("overlay_debounce_ms", "120"),
        ]));

        assert_eq!(config.theme_file.as_deref(), Some("/host/.config/swipecart/theme.toml"));
        assert_eq!(config.overlay_debounce, Duration::from_millis(120));
    }

    #[test]
    fn endpoint_requires_http_scheme() {
        assert!(parse_endpoint("https://api.example.com/search").is_ok());
        assert!(matches!(parse_endpoint("not a url"), Err(SwipecartError::Config(_))));
        assert!(matches!(parse_endpoint("file:///tmp/x"), Err(SwipecartError::Config(_))));
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        let config = Config {
            theme_name: Some("neon".to_string()),
            ..Default::default()
        };
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }
}
