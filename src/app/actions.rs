//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never calls Zellij host functions itself. It returns a
//! `Vec<Action>` and the plugin shim in `main.rs` executes them in order, which keeps
//! the whole application layer runnable in native unit tests.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use swipecart::app::Action;
//!
//! let actions = vec![Action::ScheduleTimer(Duration::from_millis(350))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::search::SearchRequest;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Emitted when `Esc` is pressed with nothing left to close.
    CloseFocus,

    /// Sends a `GET` request to the search endpoint.
    ///
    /// The shim passes the request's channel and epoch as the web request context so
    /// the result can be matched back to the session that issued it.
    Search(SearchRequest),

    /// Asks Zellij to deliver a `Timer` event after the given delay.
    ///
    /// Used to poll the debouncers. Timers cannot be cancelled, so an early or
    /// superseded firing is harmless.
    ScheduleTimer(Duration),
}
