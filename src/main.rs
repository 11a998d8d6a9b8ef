//! Zellij plugin wrapper and entry point.
//!
//! The only place that calls Zellij host functions. Everything else lives in the
//! library: this file translates host events into [`Event`]s and executes the
//! [`Action`]s that come back.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; the first search runs once it is granted
//! 3. **Update**: Map Key / Timer / WebRequestResult events, delegate to the library
//! 4. **Render**: Call the library render function
//!
//! # Event Mapping
//!
//! - `Key` → [`map_key`] (overlay keys, Alt chords, focus-dependent keys)
//! - `Timer` → `Event::Timer` (debounce deadlines are checked by the library)
//! - `WebRequestResult` → `Event::WebResponse` with the request's context map
//! - `PermissionRequestResult(Granted)` → `Event::PermissionsGranted`
//!
//! # Keybindings
//!
//! - `Ctrl+k` / `/`: Open the quick-search overlay
//! - `Tab` / `Shift+Tab`: Move focus between query, filters, chips and results
//! - `Alt+l` / `Alt+s`: Like / skip the current card
//! - `Alt+v`: Toggle swipe and grid views
//! - `Alt+n` / `Alt+p`: Next / previous page
//! - `Alt+w`: Saved items drawer
//! - `Alt+i`: Card details
//! - `Alt+r`: Restart the swipe session
//! - `Alt+x`: Reset all filters
//! - `Esc`: Close overlay, drawer or details, then the plugin

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use std::time::Instant;
use zellij_tile::prelude::*;

use swipecart::{handle_event, map_key, Action, Config, Event};

register_plugin!(State);

struct State {
    app: swipecart::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: swipecart::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        swipecart::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(
            endpoint = %config.endpoint,
            debounce_ms = config.debounce.as_millis() as u64,
            overlay_limit = config.overlay_limit,
            "parsed configuration"
        );
        self.app = swipecart::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match map_key(key, &self.app) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::Timer,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                tracing::debug!(status, body_len = body.len(), "web request finished");
                Event::WebResponse { status, body, context }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Granted) => {
                Event::PermissionsGranted
            }
            zellij_tile::prelude::Event::PermissionRequestResult(PermissionStatus::Denied) => {
                tracing::warn!("web access denied - searches disabled");
                self.app.notice = Some("Web access was denied; reload the plugin to search".to_string());
                return true;
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event, Instant::now()) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        swipecart::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    #[tracing::instrument(level = "debug")]
    fn execute_action(action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::Search(request) => {
                let mut headers = BTreeMap::new();
                headers.insert("Accept".to_string(), "application/json".to_string());
                web_request(
                    request.url.as_str(),
                    HttpVerb::Get,
                    headers,
                    vec![],
                    request.context().to_map(),
                );
            }
            Action::ScheduleTimer(delay) => {
                set_timeout(delay.as_secs_f64());
            }
        }
    }
}
