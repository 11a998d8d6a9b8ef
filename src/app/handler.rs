//! Event handling and state transition logic.
//!
//! The handler is the only place where events turn into state changes. It never
//! talks to Zellij: side effects come back as [`Action`]s for the plugin shim.
//!
//! # Event Types
//!
//! - **Overlay**: `OpenOverlay`, `OverlayChar`, `OverlayBackspace`, `OverlayUp`,
//!   `OverlayDown`, `OverlaySubmit`
//! - **Navigation**: `FocusNext`, `FocusPrevious`, `Navigate`, `Escape`
//! - **Editing**: `Input`, `Erase`, `Activate`, `ResetFilters`
//! - **Swipe**: `Accept`, `Reject`, `RestartSwipe`, `ToggleDetails`
//! - **Views**: `ToggleView`, `ToggleSavedDrawer`, `NextPage`, `PreviousPage`
//! - **System**: `Timer`, `PermissionsGranted`, `WebResponse`
//!
//! # Example
//!
//! ```rust
//! use std::time::Instant;
//! use swipecart::{handle_event, AppState, Config, Event, Theme};
//!
//! let mut state = AppState::new(&Config::default(), Theme::default());
//! let (should_render, actions) = handle_event(&mut state, &Event::Input('l'), Instant::now())?;
//! assert!(should_render);
//! assert_eq!(actions.len(), 1); // debounce timer
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::app::modes::Direction;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::search::{decode, Applied, RequestContext};
use crate::swipe::Decision;
use std::collections::BTreeMap;
use std::time::Instant;

/// Events triggered by user input, timers or finished web requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opens the command overlay.
    OpenOverlay,
    /// Types into the overlay query.
    OverlayChar(char),
    OverlayBackspace,
    OverlayUp,
    OverlayDown,
    /// Picks the highlighted overlay entry.
    OverlaySubmit,

    /// Closes the top-most layer, or the plugin when nothing is open.
    Escape,
    FocusNext,
    FocusPrevious,
    /// Arrow key, routed to the focused region.
    Navigate(Direction),
    /// `Enter`, or `Space` outside the query box.
    Activate,
    /// `Backspace` or `Delete`.
    Erase,
    /// Printable character outside the overlay.
    Input(char),

    /// Likes the current card (and saves it).
    Accept,
    /// Skips the current card.
    Reject,
    ToggleView,
    RestartSwipe,
    NextPage,
    PreviousPage,
    ToggleSavedDrawer,
    ToggleDetails,
    ResetFilters,

    /// A scheduled timeout fired.
    Timer,

    /// Web access was granted; the first search can be issued.
    PermissionsGranted,

    /// A web request issued by a [`Action::Search`] finished.
    WebResponse {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: Vec<u8>,
        /// Context map passed with the request.
        context: BTreeMap<String, String>,
    },
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Parameters
///
/// * `state` - Mutable reference to application state
/// * `event` - Event to process
/// * `now` - Current instant, used for debounce deadlines
///
/// # Returns
///
/// Whether the UI should be re-rendered, and the actions to execute in order.
///
/// # Errors
///
/// Returns [`SwipecartError::Context`](crate::SwipecartError::Context) when a web
/// response carries a context map that cannot be matched to a request. Transport and
/// decoding failures are not errors here: they are stored as inline UI text.
pub fn handle_event(state: &mut AppState, event: &Event, now: Instant) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if !matches!(event, Event::Timer | Event::WebResponse { .. }) {
        state.notice = None;
    }

    match event {
        Event::OpenOverlay => Ok((true, state.open_overlay(now))),
        Event::OverlayChar(c) => Ok((true, state.overlay_input(*c, now))),
        Event::OverlayBackspace => Ok((true, state.overlay_erase(now))),
        Event::OverlayUp => {
            state.overlay.move_up();
            Ok((true, vec![]))
        }
        Event::OverlayDown => {
            state.overlay.move_down();
            Ok((true, vec![]))
        }
        Event::OverlaySubmit => {
            state.overlay_submit();
            Ok((true, vec![]))
        }
        Event::Escape => {
            let actions = state.escape();
            Ok((actions.is_empty(), actions))
        }
        Event::FocusNext => {
            state.focus = state.focus.next();
            state.suggestion_cursor = None;
            Ok((true, vec![]))
        }
        Event::FocusPrevious => {
            state.focus = state.focus.previous();
            state.suggestion_cursor = None;
            Ok((true, vec![]))
        }
        Event::Navigate(direction) => Ok((true, state.navigate(*direction, now))),
        Event::Activate => Ok((true, state.activate(now))),
        Event::Erase => Ok((true, state.erase(now))),
        Event::Input(c) => {
            let actions = state.input(*c, now);
            tracing::trace!(query = %state.filters.query, char = %c, "input handled");
            Ok((true, actions))
        }
        Event::Accept => Ok((state.decide(Decision::Accept), vec![])),
        Event::Reject => Ok((state.decide(Decision::Reject), vec![])),
        Event::ToggleView => {
            state.toggle_view();
            Ok((true, vec![]))
        }
        Event::RestartSwipe => {
            state.restart_swipe();
            Ok((true, vec![]))
        }
        Event::NextPage => {
            let actions = state.next_page();
            Ok((!actions.is_empty(), actions))
        }
        Event::PreviousPage => {
            let actions = state.previous_page();
            Ok((!actions.is_empty(), actions))
        }
        Event::ToggleSavedDrawer => {
            state.toggle_drawer();
            Ok((true, vec![]))
        }
        Event::ToggleDetails => {
            state.toggle_details();
            Ok((true, vec![]))
        }
        Event::ResetFilters => Ok((true, state.reset_filters(now))),
        Event::Timer => {
            let actions = state.tick(now);
            let issued = actions.iter().any(|a| matches!(a, Action::Search(_)));
            Ok((issued, actions))
        }
        Event::PermissionsGranted => {
            tracing::debug!("web access granted");
            Ok((true, state.start()))
        }
        Event::WebResponse { status, body, context } => {
            let context = RequestContext::from_map(context)?;
            let applied = state.apply_response(context, decode(*status, body));
            tracing::debug!(
                channel = %context.channel,
                epoch = context.epoch,
                status,
                applied = ?applied,
                "web response handled"
            );
            Ok((applied != Applied::Stale, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::Focus;
    use crate::search::SearchRequest;
    use crate::{Config, Theme};
    use std::time::Duration;

    fn state() -> AppState {
        AppState::new(&Config::default(), Theme::default())
    }

    fn respond(request: &SearchRequest, body: &str) -> Event {
        Event::WebResponse {
            status: 200,
            body: body.as_bytes().to_vec(),
            context: request.context().to_map(),
        }
    }

    fn search_request(actions: &[Action]) -> SearchRequest {
        actions
            .iter()
            .find_map(|action| match action {
                Action::Search(request) => Some(request.clone()),
                _ => None,
            })
            .expect("a search action")
    }

    const THREE_ITEMS: &str = r#"{
        "items": [
            {"id": "a", "title": "Over-ear Headphones", "price": 120.0, "category": "Audio"},
            {"id": "b", "title": "Earbuds", "price": 60.0, "category": "Audio"},
            {"id": "c", "title": "Desk Lamp", "price": 35.0, "category": "Home"}
        ],
        "total": 3,
        "facets": {"categories": [{"name": "Audio", "count": 2}, {"name": "Home", "count": 1}]}
    }"#;

    #[test]
    fn typing_burst_issues_a_single_debounced_search() {
        let mut state = state();
        let start = Instant::now();

        for (offset, c) in "head".chars().enumerate() {
            handle_event(&mut state, &Event::Input(c), start + Duration::from_millis(offset as u64 * 50)).unwrap();
        }

        let (_, early) = handle_event(&mut state, &Event::Timer, start + Duration::from_millis(360)).unwrap();
        assert!(matches!(&early[..], [Action::ScheduleTimer(_)]));

        let (render, actions) = handle_event(&mut state, &Event::Timer, start + Duration::from_millis(600)).unwrap();
        assert!(render);
        let request = search_request(&actions);
        assert_eq!(
            request.url.query(),
            Some("query=head&sortBy=relevance&page=1&limit=9")
        );
    }

    #[test]
    fn response_replaces_results_and_resets_swipe() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::PermissionsGranted, Instant::now()).unwrap();
        let request = search_request(&actions);

        handle_event(&mut state, &respond(&request, THREE_ITEMS), Instant::now()).unwrap();
        handle_event(&mut state, &Event::Accept, Instant::now()).unwrap();
        assert_eq!(state.swipe.cursor(), 1);
        assert!(state.swipe.saved().contains("a"));

        let request = state.main.refresh(&state.endpoint.clone());
        handle_event(&mut state, &respond(&request, THREE_ITEMS), Instant::now()).unwrap();

        assert_eq!(state.swipe.cursor(), 0);
        assert!(state.swipe.liked().is_empty());
        assert_eq!(state.swipe.saved().len(), 1);
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut state = state();
        let first = state.main.refresh(&state.endpoint.clone());
        let second = state.main.refresh(&state.endpoint.clone());

        handle_event(&mut state, &respond(&second, THREE_ITEMS), Instant::now()).unwrap();
        let (render, _) = handle_event(
            &mut state,
            &respond(&first, r#"{"items": [], "total": 0}"#),
            Instant::now(),
        )
        .unwrap();

        assert!(!render);
        assert_eq!(state.items().len(), 3);
    }

    #[test]
    fn failed_request_keeps_previous_results() {
        let mut state = state();
        let request = state.main.refresh(&state.endpoint.clone());
        handle_event(&mut state, &respond(&request, THREE_ITEMS), Instant::now()).unwrap();

        let request = state.main.refresh(&state.endpoint.clone());
        let failure = Event::WebResponse {
            status: 500,
            body: vec![],
            context: request.context().to_map(),
        };
        handle_event(&mut state, &failure, Instant::now()).unwrap();

        assert_eq!(state.items().len(), 3);
        assert_eq!(state.main.error(), Some("Failed to fetch (HTTP 500)"));
    }

    #[test]
    fn response_without_context_is_an_error() {
        let mut state = state();
        let event = Event::WebResponse {
            status: 200,
            body: b"{}".to_vec(),
            context: BTreeMap::new(),
        };
        assert!(handle_event(&mut state, &event, Instant::now()).is_err());
    }

    #[test]
    fn overlay_search_runs_on_its_own_channel() {
        let mut state = state();
        let start = Instant::now();
        handle_event(&mut state, &Event::OpenOverlay, start).unwrap();
        handle_event(&mut state, &Event::OverlayChar('e'), start).unwrap();

        let (_, actions) = handle_event(&mut state, &Event::Timer, start + Duration::from_secs(1)).unwrap();
        let request = search_request(&actions);
        assert!(request.url.as_str().contains("query=e"));
        assert!(request.url.as_str().contains("limit=8"));

        handle_event(&mut state, &respond(&request, THREE_ITEMS), start).unwrap();
        handle_event(&mut state, &Event::OverlayDown, start).unwrap();
        handle_event(&mut state, &Event::OverlaySubmit, start).unwrap();

        assert!(!state.overlay.is_open());
        assert_eq!(state.notice.as_deref(), Some("Selected Earbuds"));
        assert!(state.items().is_empty());
    }

    #[test]
    fn closed_overlay_drops_in_flight_results() {
        let mut state = state();
        let start = Instant::now();
        handle_event(&mut state, &Event::OpenOverlay, start).unwrap();
        handle_event(&mut state, &Event::OverlayChar('l'), start).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Timer, start + Duration::from_secs(1)).unwrap();
        let request = search_request(&actions);

        handle_event(&mut state, &Event::Escape, start).unwrap();
        let (render, _) = handle_event(&mut state, &respond(&request, THREE_ITEMS), start).unwrap();

        assert!(!render);
        assert!(state.overlay.entries().is_empty());
    }

    #[test]
    fn escape_without_layers_closes_the_plugin() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Escape, Instant::now()).unwrap();
        assert!(!render);
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn focus_cycles_and_space_saves_in_results() {
        let mut state = state();
        let request = state.main.refresh(&state.endpoint.clone());
        handle_event(&mut state, &respond(&request, THREE_ITEMS), Instant::now()).unwrap();

        handle_event(&mut state, &Event::FocusPrevious, Instant::now()).unwrap();
        assert_eq!(state.focus, Focus::Results);

        handle_event(&mut state, &Event::Activate, Instant::now()).unwrap();
        assert!(state.swipe.saved().contains("a"));
        assert_eq!(state.swipe.cursor(), 0);
    }

    #[test]
    fn reset_filters_schedules_a_search_only_when_something_changed() {
        let mut state = state();
        let (_, actions) = handle_event(&mut state, &Event::ResetFilters, Instant::now()).unwrap();
        assert!(actions.is_empty());

        handle_event(&mut state, &Event::Input('x'), Instant::now()).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::ResetFilters, Instant::now()).unwrap();
        assert!(matches!(&actions[..], [Action::ScheduleTimer(_)]));
        assert!(state.filters.query.is_empty());
    }
}
