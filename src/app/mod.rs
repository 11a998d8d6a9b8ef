//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the domain/search/swipe
//! layers. Nothing in here calls Zellij host functions.
//!
//! # Architecture
//!
//! ```text
//! Key / Timer / WebRequestResult → Event → handle_event → AppState mutations → Actions
//!                                     ↑                                          ↓
//!                                     └────────── web_request / set_timeout ─────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transition coordinator
//! - [`keymap`]: Key press to event translation
//! - [`modes`]: View mode, focus and direction types
//! - [`panel`]: Keyboard model of the filter panel
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod keymap;
pub mod modes;
pub mod panel;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keymap::map_key;
pub use modes::{Direction, Focus, ViewMode};
pub use panel::{FilterPanel, PanelEffect, PanelRow};
pub use state::AppState;
