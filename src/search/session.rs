//! Generic debounced, paged search session.
//!
//! A [`PagedSearch`] owns everything one search box needs: the debouncer for its input,
//! the applied filter snapshot, the current page, the request epoch counter and the
//! last received results. The main grid and the command overlay are two instances of
//! the same type, differing only in page size and result shape ([`ResultShape`]).
//!
//! # Lifecycle
//!
//! ```text
//! Idle ──issue──▶ Loading ──apply(latest epoch, Ok)──▶ Ready
//!                    │
//!                    └──apply(latest epoch, Err)──▶ Failed (previous results kept)
//! ```
//!
//! Responses whose epoch is not the most recently issued one are dropped on arrival.

use crate::domain::error::Result;
use crate::domain::{FacetSet, FilterState, ResultPage};
use crate::search::debounce::{Debouncer, Poll};
use crate::search::query::build_params;
use crate::search::response::{RequestContext, SearchChannel, SearchResponse};
use std::time::{Duration, Instant};
use url::Url;

/// Shape a session stores its results in.
pub trait ResultShape: Default {
    /// Builds the result value from a decoded response for `page`.
    fn from_response(response: SearchResponse, page: u32) -> Self;

    /// Number of items held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResultShape for ResultPage {
    fn from_response(response: SearchResponse, page: u32) -> Self {
        Self {
            items: response.items,
            total: response.total,
            page,
            suggestions: response.suggestions,
        }
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// A request ready to be executed by the plugin shim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub channel: SearchChannel,
    pub epoch: u64,
    pub url: Url,
}

impl SearchRequest {
    #[must_use]
    pub const fn context(&self) -> RequestContext {
        RequestContext {
            channel: self.channel,
            epoch: self.epoch,
        }
    }
}

/// Request state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Failed,
}

/// What [`PagedSearch::tick`] decided after a timer fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Debounced filters changed; this request must be sent.
    Issue(SearchRequest),
    /// The quiet period is still running; poll again after this delay.
    Reschedule(Duration),
    /// Nothing to do.
    Idle,
}

/// Result of handing a response to [`PagedSearch::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The response belonged to a superseded request and was dropped.
    Stale,
    /// Results were replaced.
    Updated,
    /// The request failed; previous results were kept.
    Failed,
}

/// One debounced search box with its paged results.
#[derive(Debug)]
pub struct PagedSearch<R> {
    channel: SearchChannel,
    page_size: u32,
    debouncer: Debouncer<FilterState>,
    applied: FilterState,
    page: u32,
    epoch: u64,
    status: SearchStatus,
    error: Option<String>,
    results: R,
    facets: Option<FacetSet>,
}

impl<R: ResultShape> PagedSearch<R> {
    #[must_use]
    pub fn new(channel: SearchChannel, page_size: u32, debounce: Duration) -> Self {
        Self {
            channel,
            page_size,
            debouncer: Debouncer::new(debounce),
            applied: FilterState::default(),
            page: 1,
            epoch: 0,
            status: SearchStatus::Idle,
            error: None,
            results: R::default(),
            facets: None,
        }
    }

    /// Feeds live filters into the debouncer.
    ///
    /// Returns the delay after which [`PagedSearch::tick`] should be called.
    pub fn input(&mut self, filters: FilterState, now: Instant) -> Duration {
        self.debouncer.push(filters, now)
    }

    /// Polls the debouncer and issues a request when the settled filters differ from
    /// the applied ones. A filter change always restarts from page 1.
    pub fn tick(&mut self, now: Instant, endpoint: &Url) -> Tick {
        match self.debouncer.poll(now) {
            Poll::Idle => Tick::Idle,
            Poll::Waiting(remaining) => Tick::Reschedule(remaining),
            Poll::Ready(filters) if filters == self.applied => {
                tracing::debug!(channel = %self.channel, "debounced filters unchanged");
                Tick::Idle
            }
            Poll::Ready(filters) => {
                self.applied = filters;
                self.page = 1;
                Tick::Issue(self.issue(endpoint))
            }
        }
    }

    /// Moves to `page` and issues a request immediately, without debouncing.
    ///
    /// Returns `None` when already on that page.
    pub fn set_page(&mut self, page: u32, endpoint: &Url) -> Option<SearchRequest> {
        let page = page.max(1);
        if page == self.page {
            return None;
        }
        self.page = page;
        Some(self.issue(endpoint))
    }

    /// Issues a request for the applied filters and current page.
    pub fn refresh(&mut self, endpoint: &Url) -> SearchRequest {
        self.issue(endpoint)
    }

    fn issue(&mut self, endpoint: &Url) -> SearchRequest {
        self.epoch += 1;
        self.status = SearchStatus::Loading;

        let params = build_params(&self.applied, self.page, self.page_size, self.facets.as_ref());
        let url = params.apply_to(endpoint);

        tracing::debug!(
            channel = %self.channel,
            epoch = self.epoch,
            page = self.page,
            url = %url,
            "issuing search request"
        );

        SearchRequest {
            channel: self.channel,
            epoch: self.epoch,
            url,
        }
    }

    /// Applies the outcome of the request tagged `epoch`.
    pub fn apply(&mut self, epoch: u64, outcome: Result<SearchResponse>) -> Applied {
        if epoch != self.epoch {
            tracing::debug!(
                channel = %self.channel,
                epoch,
                latest = self.epoch,
                "discarding stale response"
            );
            return Applied::Stale;
        }

        match outcome {
            Ok(mut response) => {
                self.facets = Some(std::mem::take(&mut response.facets));
                self.results = R::from_response(response, self.page);
                self.error = None;
                self.status = SearchStatus::Ready;
                Applied::Updated
            }
            Err(e) => {
                tracing::warn!(channel = %self.channel, epoch, error = %e, "search request failed");
                self.error = Some(e.to_string());
                self.status = SearchStatus::Failed;
                Applied::Failed
            }
        }
    }

    /// Drops any pending debounced input and ignores responses still in flight.
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
        self.epoch += 1;
        if self.status == SearchStatus::Loading {
            // the abandoned filters never arrived, so the next settle must re-issue
            self.applied = FilterState::default();
            self.status = SearchStatus::Idle;
        }
    }

    /// Forgets results, error and applied filters. Pending input is cancelled too.
    pub fn clear(&mut self) {
        self.cancel();
        self.applied = FilterState::default();
        self.page = 1;
        self.status = SearchStatus::Idle;
        self.error = None;
        self.results = R::default();
    }

    #[must_use]
    pub const fn channel(&self) -> SearchChannel {
        self.channel
    }

    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub const fn status(&self) -> SearchStatus {
        self.status
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub const fn results(&self) -> &R {
        &self.results
    }

    #[must_use]
    pub const fn facets(&self) -> Option<&FacetSet> {
        self.facets.as_ref()
    }

    #[must_use]
    pub const fn applied(&self) -> &FilterState {
        &self.applied
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SwipecartError;
    use crate::domain::Item;
    use crate::search::query::PAGE_SIZE;

    const DELAY: Duration = Duration::from_millis(350);

    fn endpoint() -> Url {
        Url::parse("http://localhost:3000/api/search").unwrap()
    }

    fn item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            title: format!("Item {id}"),
            description: String::new(),
            price: 10.0,
            rating: 4.0,
            tags: Default::default(),
            category: "Audio".to_string(),
            image_url: None,
            featured: false,
        }
    }

    fn response(ids: &[&str]) -> SearchResponse {
        SearchResponse {
            items: ids.iter().map(|id| item(id)).collect(),
            total: 30,
            ..Default::default()
        }
    }

    fn session() -> PagedSearch<ResultPage> {
        PagedSearch::new(SearchChannel::Main, PAGE_SIZE, DELAY)
    }

    fn query(text: &str) -> FilterState {
        FilterState {
            query: text.to_string(),
            ..Default::default()
        }
    }

    fn issue_for(search: &mut PagedSearch<ResultPage>, filters: FilterState, now: Instant) -> SearchRequest {
        search.input(filters, now);
        match search.tick(now + DELAY, &endpoint()) {
            Tick::Issue(request) => request,
            other => panic!("expected a request, got {other:?}"),
        }
    }

    #[test]
    fn later_epoch_wins_regardless_of_arrival_order() {
        let start = Instant::now();
        let mut search = session();

        let first = issue_for(&mut search, query("head"), start);
        let second = issue_for(&mut search, query("headphones"), start + DELAY * 2);
        assert!(second.epoch > first.epoch);

        assert_eq!(search.apply(second.epoch, Ok(response(&["e2"]))), Applied::Updated);
        assert_eq!(search.apply(first.epoch, Ok(response(&["e1"]))), Applied::Stale);

        assert_eq!(search.results().items[0].id, "e2");
        assert_eq!(search.status(), SearchStatus::Ready);
    }

    #[test]
    fn filter_change_resets_page_to_one() {
        let start = Instant::now();
        let mut search = session();
        let request = search.refresh(&endpoint());
        search.apply(request.epoch, Ok(response(&["a"])));

        let request = search.set_page(3, &endpoint()).unwrap();
        assert!(request.url.as_str().contains("page=3"));

        let request = issue_for(&mut search, query("lamp"), start);
        assert_eq!(search.page(), 1);
        assert!(request.url.as_str().contains("page=1"));
    }

    #[test]
    fn set_page_issues_without_debounce_and_ignores_same_page() {
        let mut search = session();
        assert!(search.set_page(1, &endpoint()).is_none());

        let request = search.set_page(2, &endpoint()).unwrap();
        assert_eq!(request.epoch, 1);
        assert!(search.is_loading());
    }

    #[test]
    fn settling_on_the_applied_filters_issues_nothing() {
        let start = Instant::now();
        let mut search = session();

        search.input(query("a"), start);
        search.input(FilterState::default(), start + Duration::from_millis(50));

        assert_eq!(search.tick(start + DELAY * 2, &endpoint()), Tick::Idle);
        assert_eq!(search.epoch(), 0);
    }

    #[test]
    fn early_timer_reschedules() {
        let start = Instant::now();
        let mut search = session();

        search.input(query("a"), start);
        search.input(query("ab"), start + Duration::from_millis(200));

        assert_eq!(
            search.tick(start + DELAY, &endpoint()),
            Tick::Reschedule(Duration::from_millis(200))
        );
    }

    #[test]
    fn failure_keeps_previous_results() {
        let start = Instant::now();
        let mut search = session();

        let request = search.refresh(&endpoint());
        search.apply(request.epoch, Ok(response(&["a", "b"])));

        let request = issue_for(&mut search, query("x"), start);
        let outcome = search.apply(request.epoch, Err(SwipecartError::Http { status: 500 }));

        assert_eq!(outcome, Applied::Failed);
        assert_eq!(search.results().items.len(), 2);
        assert_eq!(search.error(), Some("Failed to fetch (HTTP 500)"));
        assert!(!search.is_loading());

        let request = search.refresh(&endpoint());
        search.apply(request.epoch, Ok(response(&[])));
        assert!(search.error().is_none());
        assert!(search.results().is_empty());
    }

    #[test]
    fn cancel_drops_pending_input_and_in_flight_responses() {
        let start = Instant::now();
        let mut search = session();

        let request = search.refresh(&endpoint());
        search.input(query("q"), start);
        search.cancel();

        assert_eq!(search.tick(start + DELAY, &endpoint()), Tick::Idle);
        assert_eq!(search.apply(request.epoch, Ok(response(&["late"]))), Applied::Stale);
        assert_eq!(search.status(), SearchStatus::Idle);
    }

    #[test]
    fn cancelled_request_is_reissued_for_the_same_filters() {
        let start = Instant::now();
        let mut search = session();

        search.input(query("lamp"), start);
        assert!(matches!(search.tick(start + DELAY, &endpoint()), Tick::Issue(_)));
        search.cancel();

        search.input(query("lamp"), start + DELAY);
        assert!(matches!(search.tick(start + DELAY * 2, &endpoint()), Tick::Issue(_)));
    }
}
