//! Command overlay: a modal quick-search with its own debounced session.
//!
//! The overlay keeps its query between openings. Closing it cancels any pending
//! debounced input and ignores requests still in flight, so nothing arrives while it is
//! hidden.

use crate::domain::error::Result;
use crate::domain::{FilterState, Item};
use crate::search::response::{SearchChannel, SearchResponse};
use crate::search::session::{Applied, PagedSearch, ResultShape, SearchRequest, Tick};
use std::time::{Duration, Instant};
use url::Url;

/// One row of the overlay result list.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayEntry {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: f64,
}

impl From<Item> for OverlayEntry {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            category: item.category,
            price: item.price,
        }
    }
}

/// Result shape of the overlay session: a flat list, no paging metadata.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OverlayResults {
    pub entries: Vec<OverlayEntry>,
}

impl ResultShape for OverlayResults {
    fn from_response(response: SearchResponse, _page: u32) -> Self {
        Self {
            entries: response.items.into_iter().map(OverlayEntry::from).collect(),
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// The single command overlay owned by the application state.
#[derive(Debug)]
pub struct CommandOverlay {
    open: bool,
    query: String,
    cursor: usize,
    search: PagedSearch<OverlayResults>,
}

impl CommandOverlay {
    #[must_use]
    pub fn new(limit: u32, debounce: Duration) -> Self {
        Self {
            open: false,
            query: String::new(),
            cursor: 0,
            search: PagedSearch::new(SearchChannel::Overlay, limit, debounce),
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub const fn session(&self) -> &PagedSearch<OverlayResults> {
        &self.search
    }

    #[must_use]
    pub fn entries(&self) -> &[OverlayEntry] {
        &self.search.results().entries
    }

    #[must_use]
    pub fn selected(&self) -> Option<&OverlayEntry> {
        self.entries().get(self.cursor)
    }

    /// Opens the overlay. Returns a delay to schedule if the kept query needs searching.
    pub fn open(&mut self, now: Instant) -> Option<Duration> {
        if self.open {
            return None;
        }
        self.open = true;
        self.cursor = 0;
        self.push_query(now)
    }

    /// Closes the overlay and cancels its pending work.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.cursor = 0;
        self.search.cancel();
    }

    pub fn push_char(&mut self, c: char, now: Instant) -> Option<Duration> {
        self.query.push(c);
        self.cursor = 0;
        self.push_query(now)
    }

    pub fn pop_char(&mut self, now: Instant) -> Option<Duration> {
        self.query.pop()?;
        self.cursor = 0;
        self.push_query(now)
    }

    fn push_query(&mut self, now: Instant) -> Option<Duration> {
        if self.query.is_empty() {
            self.search.clear();
            return None;
        }
        let filters = FilterState {
            query: self.query.clone(),
            ..FilterState::default()
        };
        Some(self.search.input(filters, now))
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let last = self.entries().len().saturating_sub(1);
        self.cursor = (self.cursor + 1).min(last);
    }

    /// Closes the overlay on the highlighted entry and returns it.
    ///
    /// With no results nothing happens and `None` is returned.
    pub fn submit(&mut self) -> Option<OverlayEntry> {
        let entry = self.selected().cloned()?;
        self.close();
        Some(entry)
    }

    pub fn tick(&mut self, now: Instant, endpoint: &Url) -> Tick {
        if !self.open {
            return Tick::Idle;
        }
        self.search.tick(now, endpoint)
    }

    pub fn apply(&mut self, epoch: u64, outcome: Result<SearchResponse>) -> Applied {
        let applied = self.search.apply(epoch, outcome);
        if applied == Applied::Updated {
            self.cursor = 0;
        }
        applied
    }

    /// Builds the request for the current query right away, bypassing the debounce.
    pub fn refresh(&mut self, endpoint: &Url) -> Option<SearchRequest> {
        (self.open && !self.query.is_empty()).then(|| self.search.refresh(endpoint))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(350);

    fn endpoint() -> Url {
        Url::parse("http://localhost:3000/api/search").unwrap()
    }

    fn response(titles: &[&str]) -> SearchResponse {
        SearchResponse {
            items: titles
                .iter()
                .enumerate()
                .map(|(i, title)| Item {
                    id: i.to_string(),
                    title: (*title).to_string(),
                    description: String::new(),
                    price: 1.0,
                    rating: 0.0,
                    tags: Default::default(),
                    category: "Audio".to_string(),
                    image_url: None,
                    featured: false,
                })
                .collect(),
            total: titles.len() as u64,
            ..Default::default()
        }
    }

    fn typed(overlay: &mut CommandOverlay, text: &str, now: Instant) -> SearchRequest {
        for c in text.chars() {
            overlay.push_char(c, now);
        }
        match overlay.tick(now + DELAY, &endpoint()) {
            Tick::Issue(request) => request,
            other => panic!("expected a request, got {other:?}"),
        }
    }

    #[test]
    fn overlay_request_uses_its_own_limit() {
        let now = Instant::now();
        let mut overlay = CommandOverlay::new(8, DELAY);
        overlay.open(now);

        let request = typed(&mut overlay, "mouse", now);

        assert_eq!(request.channel, SearchChannel::Overlay);
        assert!(request.url.as_str().ends_with("query=mouse&sortBy=relevance&page=1&limit=8"));
    }

    #[test]
    fn cursor_is_clamped_without_wraparound() {
        let now = Instant::now();
        let mut overlay = CommandOverlay::new(8, DELAY);
        overlay.open(now);
        let request = typed(&mut overlay, "w", now);
        overlay.apply(request.epoch, Ok(response(&["Wireless Mouse", "Wireless Headphones"])));

        overlay.move_up();
        assert_eq!(overlay.cursor(), 0);
        overlay.move_down();
        overlay.move_down();
        overlay.move_down();
        assert_eq!(overlay.cursor(), 1);
    }

    #[test]
    fn cursor_resets_when_query_or_open_state_changes() {
        let now = Instant::now();
        let mut overlay = CommandOverlay::new(8, DELAY);
        overlay.open(now);
        let request = typed(&mut overlay, "w", now);
        overlay.apply(request.epoch, Ok(response(&["a", "b", "c"])));

        overlay.move_down();
        overlay.push_char('i', now);
        assert_eq!(overlay.cursor(), 0);

        overlay.move_down();
        overlay.close();
        overlay.open(now);
        assert_eq!(overlay.cursor(), 0);
    }

    #[test]
    fn submit_closes_only_with_a_result() {
        let now = Instant::now();
        let mut overlay = CommandOverlay::new(8, DELAY);
        overlay.open(now);

        assert!(overlay.submit().is_none());
        assert!(overlay.is_open());

        let request = typed(&mut overlay, "desk", now);
        overlay.apply(request.epoch, Ok(response(&["Desk Lamp"])));

        let entry = overlay.submit().unwrap();
        assert_eq!(entry.title, "Desk Lamp");
        assert!(!overlay.is_open());
    }

    #[test]
    fn closing_cancels_pending_and_in_flight_work() {
        let now = Instant::now();
        let mut overlay = CommandOverlay::new(8, DELAY);
        overlay.open(now);
        let request = typed(&mut overlay, "a", now);
        overlay.push_char('b', now);

        overlay.close();

        assert_eq!(overlay.apply(request.epoch, Ok(response(&["late"]))), Applied::Stale);
        assert_eq!(overlay.tick(now + DELAY * 3, &endpoint()), Tick::Idle);
        assert!(!overlay.session().is_pending());
    }

    #[test]
    fn erasing_the_query_clears_results() {
        let now = Instant::now();
        let mut overlay = CommandOverlay::new(8, DELAY);
        overlay.open(now);
        let request = typed(&mut overlay, "a", now);
        overlay.apply(request.epoch, Ok(response(&["Alpha"])));

        assert!(overlay.pop_char(now).is_none());
        assert!(overlay.entries().is_empty());
        assert!(overlay.pop_char(now).is_none());
    }
}
