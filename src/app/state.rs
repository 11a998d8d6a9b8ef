//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the plugin knows: the live filter
//! selection, the two search sessions, the swipe session and all cursor/focus state.
//! Every mutation goes through a method on it, called from
//! [`handle_event`](crate::app::handle_event). Methods that need side effects return
//! the [`Action`]s to execute instead of performing them.
//!
//! # State Components
//!
//! - **Filters**: The live [`FilterState`]; fed into the main session's debouncer
//! - **Main search**: Paged results for the card and grid views
//! - **Overlay**: The command overlay with its own session
//! - **Swipe**: Cursor, liked/skipped buckets and saved items
//! - **Focus/cursors**: Which region receives keys and what is highlighted there
//!
//! # View Model Computation
//!
//! `compute_viewmodel` projects the state into a [`UIViewModel`]. Chips, page counts
//! and highlight ranges are derived there on every frame and never stored.
//!
//! # Example
//!
//! ```rust
//! use swipecart::{AppState, Config, Theme};
//!
//! let state = AppState::new(&Config::default(), Theme::default());
//! let viewmodel = state.compute_viewmodel(24);
//! assert!(viewmodel.overlay.is_none());
//! ```

use super::modes::{Direction, Focus, ViewMode};
use super::panel::{FilterPanel, PanelEffect, PanelRow};
use super::Action;
use crate::domain::error::Result;
use crate::domain::{active_chips, FilterPatch, FilterRemoval, FilterState, Item, ResultPage, SortBy};
use crate::search::{
    Applied, CommandOverlay, PagedSearch, RequestContext, SearchChannel, SearchResponse,
    SearchStatus, Tick, PAGE_SIZE,
};
use crate::swipe::{time_ago, Decision, SwipeSession};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    Body, CardDetails, CardInfo, ChipItem, ChipsInfo, DrawerInfo, DrawerItem, EmptyState,
    FilterPanelInfo, FooterInfo, GridCell, GridInfo, HeaderInfo, OverlayInfo, OverlayItem,
    PanelRowInfo, SearchBarInfo, SuggestionItem, UIViewModel,
};
use crate::Config;
use fuzzy_matcher::skim::SkimMatcherV2;
use std::time::Instant;
use url::Url;

/// Number of columns in the grid view.
pub const GRID_COLUMNS: usize = 3;

/// Maximum number of suggestions listed under the query box.
const MAX_SUGGESTIONS: usize = 5;

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    /// Search endpoint every request is built against.
    pub endpoint: Url,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Live filter selection, before debouncing.
    pub filters: FilterState,

    /// Main search session (page size 9).
    pub main: PagedSearch<ResultPage>,

    /// The command overlay.
    pub overlay: CommandOverlay,

    /// Swipe progress and saved items.
    pub swipe: SwipeSession,

    pub view_mode: ViewMode,

    pub focus: Focus,

    pub panel: FilterPanel,

    /// Highlighted chip in the chips row.
    pub chip_cursor: usize,

    /// Highlighted suggestion, `None` while the query itself is edited.
    pub suggestion_cursor: Option<usize>,

    /// Highlighted cell in the grid view.
    pub grid_cursor: usize,

    /// Cursor in the saved drawer; `Some` while the drawer is open.
    pub drawer: Option<usize>,

    /// Whether the current card shows its description and tags.
    pub show_details: bool,

    /// One-line message shown above the footer until the next key press.
    pub notice: Option<String>,
}

impl AppState {
    /// Creates the state for a freshly loaded plugin.
    ///
    /// Nothing is requested yet; the first search is issued once web access is
    /// granted (see [`AppState::start`]).
    #[must_use]
    pub fn new(config: &Config, theme: Theme) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            theme,
            filters: FilterState::default(),
            main: PagedSearch::new(SearchChannel::Main, PAGE_SIZE, config.debounce),
            overlay: CommandOverlay::new(config.overlay_limit, config.overlay_debounce),
            swipe: SwipeSession::default(),
            view_mode: ViewMode::default(),
            focus: Focus::default(),
            panel: FilterPanel::default(),
            chip_cursor: 0,
            suggestion_cursor: None,
            grid_cursor: 0,
            drawer: None,
            show_details: false,
            notice: None,
        }
    }

    /// Items of the current result page.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.main.results().items
    }

    /// Item under the swipe cursor.
    #[must_use]
    pub fn current_card(&self) -> Option<&Item> {
        self.swipe.current(self.items())
    }

    /// Item the save toggle applies to in the current view mode.
    #[must_use]
    pub fn selected_item(&self) -> Option<&Item> {
        match self.view_mode {
            ViewMode::Card => self.current_card(),
            ViewMode::Grid => self.items().get(self.grid_cursor),
        }
    }

    #[must_use]
    pub fn page_count(&self) -> u32 {
        self.main.results().page_count(PAGE_SIZE)
    }

    /// Issues the initial search for the default filters.
    pub fn start(&mut self) -> Vec<Action> {
        tracing::debug!(endpoint = %self.endpoint, "starting initial search");
        vec![Action::Search(self.main.refresh(&self.endpoint))]
    }

    // ---- filters -------------------------------------------------------------

    fn change_filters(&mut self, now: Instant, change: impl FnOnce(&mut FilterState) -> bool) -> Vec<Action> {
        let query_before = self.filters.query.clone();
        if !change(&mut self.filters) {
            return vec![];
        }
        if self.filters.query != query_before {
            self.suggestion_cursor = None;
        }
        tracing::debug!(filters = ?self.filters, "filters changed");
        let delay = self.main.input(self.filters.clone(), now);
        vec![Action::ScheduleTimer(delay)]
    }

    /// Merges a partial filter update.
    pub fn update_filters(&mut self, patch: FilterPatch, now: Instant) -> Vec<Action> {
        self.change_filters(now, |filters| filters.update(patch))
    }

    /// Removes a single active filter value.
    pub fn remove_filter(&mut self, removal: &FilterRemoval, now: Instant) -> Vec<Action> {
        if *removal == FilterRemoval::PriceRange {
            self.panel.clear_price_text();
        }
        self.change_filters(now, |filters| filters.remove(removal))
    }

    /// Restores the default filters.
    pub fn reset_filters(&mut self, now: Instant) -> Vec<Action> {
        self.panel.clear_price_text();
        self.chip_cursor = 0;
        self.change_filters(now, FilterState::reset)
    }

    fn apply_panel_effect(&mut self, effect: Option<PanelEffect>, now: Instant) -> Vec<Action> {
        match effect {
            Some(PanelEffect::Patch(patch)) => self.update_filters(patch, now),
            Some(PanelEffect::Reset) => self.reset_filters(now),
            None => vec![],
        }
    }

    /// Removes the chip under the chip cursor.
    pub fn remove_selected_chip(&mut self, now: Instant) -> Vec<Action> {
        let chips = active_chips(&self.filters);
        let Some(chip) = chips.get(self.chip_cursor.min(chips.len().saturating_sub(1))) else {
            return vec![];
        };
        let actions = self.remove_filter(&chip.removal, now);
        self.chip_cursor = self.chip_cursor.min(chips.len().saturating_sub(2));
        actions
    }

    // ---- query and suggestions ----------------------------------------------

    fn suggestions(&self) -> &[String] {
        if self.filters.query.is_empty() {
            return &[];
        }
        let all = &self.main.results().suggestions;
        &all[..all.len().min(MAX_SUGGESTIONS)]
    }

    fn move_suggestion(&mut self, direction: Direction) {
        let len = self.suggestions().len();
        if len == 0 {
            self.suggestion_cursor = None;
            return;
        }
        self.suggestion_cursor = match (direction, self.suggestion_cursor) {
            (Direction::Down, None) => Some(0),
            (Direction::Down, Some(idx)) => Some((idx + 1).min(len - 1)),
            (Direction::Up, Some(0) | None) => None,
            (Direction::Up, Some(idx)) => Some(idx - 1),
            (_, current) => current,
        };
    }

    fn accept_suggestion(&mut self, now: Instant) -> Vec<Action> {
        let Some(text) = self
            .suggestion_cursor
            .and_then(|idx| self.suggestions().get(idx).cloned())
        else {
            return vec![];
        };
        self.suggestion_cursor = None;
        self.update_filters(FilterPatch::query(text), now)
    }

    // ---- keyboard routing ----------------------------------------------------

    /// Routes an arrow key to the drawer or the focused region.
    pub fn navigate(&mut self, direction: Direction, now: Instant) -> Vec<Action> {
        if let Some(cursor) = self.drawer {
            let last = self.swipe.saved().len().saturating_sub(1);
            self.drawer = Some(match direction {
                Direction::Up => cursor.saturating_sub(1),
                Direction::Down => (cursor + 1).min(last),
                Direction::Left | Direction::Right => cursor,
            });
            return vec![];
        }

        match self.focus {
            Focus::Query => {
                self.move_suggestion(direction);
                vec![]
            }
            Focus::Filters => {
                let facets = self.main.facets();
                let effect = match direction {
                    Direction::Up => {
                        self.panel.move_up();
                        None
                    }
                    Direction::Down => {
                        self.panel.move_down();
                        None
                    }
                    Direction::Left => self.panel.left(&self.filters, facets),
                    Direction::Right => self.panel.right(&self.filters, facets),
                };
                self.apply_panel_effect(effect, now)
            }
            Focus::Chips => {
                let len = active_chips(&self.filters).len();
                self.chip_cursor = match direction {
                    Direction::Left | Direction::Up => self.chip_cursor.saturating_sub(1),
                    Direction::Right | Direction::Down => (self.chip_cursor + 1).min(len.saturating_sub(1)),
                };
                vec![]
            }
            Focus::Results => {
                match self.view_mode {
                    ViewMode::Card => match direction {
                        Direction::Right => {
                            self.decide(Decision::Accept);
                        }
                        Direction::Left => {
                            self.decide(Decision::Reject);
                        }
                        Direction::Up | Direction::Down => {}
                    },
                    ViewMode::Grid => self.move_grid(direction),
                }
                vec![]
            }
        }
    }

    /// `Enter` (and `Space` outside the query box).
    pub fn activate(&mut self, now: Instant) -> Vec<Action> {
        match self.focus {
            Focus::Query => self.accept_suggestion(now),
            Focus::Filters => {
                let effect = self.panel.activate(&self.filters, self.main.facets());
                self.apply_panel_effect(effect, now)
            }
            Focus::Chips => self.remove_selected_chip(now),
            Focus::Results => {
                self.toggle_save_selected();
                vec![]
            }
        }
    }

    /// `Backspace` / `Delete`.
    pub fn erase(&mut self, now: Instant) -> Vec<Action> {
        if let Some(cursor) = self.drawer {
            self.unsave_in_drawer(cursor);
            return vec![];
        }
        match self.focus {
            Focus::Query => {
                let mut query = self.filters.query.clone();
                if query.pop().is_none() {
                    return vec![];
                }
                self.update_filters(FilterPatch::query(query), now)
            }
            Focus::Filters => {
                let effect = self.panel.erase(self.main.facets());
                self.apply_panel_effect(effect, now)
            }
            Focus::Chips => self.remove_selected_chip(now),
            Focus::Results => vec![],
        }
    }

    /// A printable character outside the overlay.
    pub fn input(&mut self, c: char, now: Instant) -> Vec<Action> {
        match self.focus {
            Focus::Query => {
                let mut query = self.filters.query.clone();
                query.push(c);
                self.update_filters(FilterPatch::query(query), now)
            }
            Focus::Filters if self.panel.accepts_text() => {
                let effect = self.panel.input(c, self.main.facets());
                self.apply_panel_effect(effect, now)
            }
            _ => vec![],
        }
    }

    // ---- swipe and grid ------------------------------------------------------

    /// Applies a swipe decision to the current card. Returns `false` when exhausted.
    pub fn decide(&mut self, decision: Decision) -> bool {
        let now = chrono::Utc::now().timestamp();
        let decided = self
            .swipe
            .decide(decision, &self.main.results().items, now)
            .is_some();
        if decided {
            self.show_details = false;
        }
        decided
    }

    /// Saves or unsaves the item selected in the current view mode.
    pub fn toggle_save_selected(&mut self) -> Option<bool> {
        let item = self.selected_item()?.clone();
        let saved = self.swipe.toggle_save(&item, chrono::Utc::now().timestamp());
        tracing::debug!(item_id = %item.id, saved, "toggled saved item");
        Some(saved)
    }

    fn move_grid(&mut self, direction: Direction) {
        let len = self.items().len();
        if len == 0 {
            return;
        }
        let cursor = self.grid_cursor.min(len - 1);
        self.grid_cursor = match direction {
            Direction::Left => cursor.saturating_sub(1),
            Direction::Right => (cursor + 1).min(len - 1),
            Direction::Up => cursor.checked_sub(GRID_COLUMNS).unwrap_or(cursor),
            Direction::Down if cursor + GRID_COLUMNS < len => cursor + GRID_COLUMNS,
            Direction::Down => cursor,
        };
    }

    pub fn restart_swipe(&mut self) {
        self.swipe.restart();
        self.show_details = false;
    }

    pub fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggle();
        tracing::debug!(view_mode = ?self.view_mode, "view mode toggled");
    }

    pub fn toggle_details(&mut self) {
        self.show_details = !self.show_details && self.current_card().is_some();
    }

    // ---- pagination ------------------------------------------------------------

    pub fn next_page(&mut self) -> Vec<Action> {
        let page = self.main.page();
        if page >= self.page_count() {
            return vec![];
        }
        self.main
            .set_page(page + 1, &self.endpoint)
            .map(Action::Search)
            .into_iter()
            .collect()
    }

    pub fn previous_page(&mut self) -> Vec<Action> {
        let page = self.main.page();
        if page <= 1 {
            return vec![];
        }
        self.main
            .set_page(page - 1, &self.endpoint)
            .map(Action::Search)
            .into_iter()
            .collect()
    }

    // ---- overlay ---------------------------------------------------------------

    pub fn open_overlay(&mut self, now: Instant) -> Vec<Action> {
        self.overlay
            .open(now)
            .map(Action::ScheduleTimer)
            .into_iter()
            .collect()
    }

    pub fn overlay_input(&mut self, c: char, now: Instant) -> Vec<Action> {
        self.overlay
            .push_char(c, now)
            .map(Action::ScheduleTimer)
            .into_iter()
            .collect()
    }

    pub fn overlay_erase(&mut self, now: Instant) -> Vec<Action> {
        self.overlay
            .pop_char(now)
            .map(Action::ScheduleTimer)
            .into_iter()
            .collect()
    }

    /// Closes the overlay on its highlighted entry.
    pub fn overlay_submit(&mut self) {
        if let Some(entry) = self.overlay.submit() {
            tracing::debug!(item_id = %entry.id, "overlay entry selected");
            self.notice = Some(format!("Selected {}", entry.title));
        }
    }

    // ---- saved drawer ------------------------------------------------------

    pub fn toggle_drawer(&mut self) {
        self.drawer = match self.drawer {
            Some(_) => None,
            None => Some(0),
        };
    }

    fn unsave_in_drawer(&mut self, cursor: usize) {
        let Some(id) = self.swipe.saved().get(cursor).map(|e| e.item.id.clone()) else {
            return;
        };
        self.swipe.unsave(&id);
        self.drawer = Some(cursor.min(self.swipe.saved().len().saturating_sub(1)));
    }

    /// Closes the top-most layer: overlay, then drawer, then details, then the plugin.
    pub fn escape(&mut self) -> Vec<Action> {
        if self.overlay.is_open() {
            self.overlay.close();
        } else if self.drawer.is_some() {
            self.drawer = None;
        } else if self.show_details {
            self.show_details = false;
        } else {
            return vec![Action::CloseFocus];
        }
        vec![]
    }

    // ---- search lifecycle ----------------------------------------------------

    /// Polls both debouncers after a timer fired.
    pub fn tick(&mut self, now: Instant) -> Vec<Action> {
        let main = self.main.tick(now, &self.endpoint);
        let overlay = self.overlay.tick(now, &self.endpoint);
        [main, overlay]
            .into_iter()
            .filter_map(|tick| match tick {
                Tick::Issue(request) => Some(Action::Search(request)),
                Tick::Reschedule(delay) => Some(Action::ScheduleTimer(delay)),
                Tick::Idle => None,
            })
            .collect()
    }

    /// Hands a search outcome to the session that issued it.
    pub fn apply_response(&mut self, context: RequestContext, outcome: Result<SearchResponse>) -> Applied {
        match context.channel {
            SearchChannel::Overlay => self.overlay.apply(context.epoch, outcome),
            SearchChannel::Main => {
                let applied = self.main.apply(context.epoch, outcome);
                if applied == Applied::Updated {
                    self.swipe.reset_for_new_results();
                    self.grid_cursor = 0;
                    self.show_details = false;
                    self.suggestion_cursor = None;
                    tracing::debug!(
                        items = self.items().len(),
                        total = self.main.results().total,
                        page = self.main.page(),
                        "main results replaced"
                    );
                }
                applied
            }
        }
    }
}

impl AppState {
    /// Computes a renderable view model.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height, used to window the saved drawer around its cursor
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize) -> UIViewModel {
        let error = self.main.error();
        let has_items = !self.items().is_empty();

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            chips: self.compute_chips(),
            filter_panel: self.compute_filter_panel(),
            body: self.compute_body(),
            error_line: error.filter(|_| has_items).map(str::to_string),
            notice: self.notice.clone(),
            overlay: self.overlay.is_open().then(|| self.compute_overlay()),
            drawer: self.drawer.map(|cursor| self.compute_drawer(cursor, rows)),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let results = self.main.results();
        let status = match self.main.status() {
            SearchStatus::Loading => "Searching…".to_string(),
            SearchStatus::Idle if results.items.is_empty() => String::new(),
            _ => format!(
                "page {} of {} · {} results",
                self.main.page(),
                self.page_count(),
                results.total
            ),
        };
        HeaderInfo {
            title: format!(" Swipecart · {} ", self.view_mode.label()),
            status,
            saved_count: self.swipe.saved().len(),
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        SearchBarInfo {
            query: self.filters.query.clone(),
            focused: self.focus == Focus::Query && !self.overlay.is_open(),
            suggestions: self
                .suggestions()
                .iter()
                .enumerate()
                .map(|(idx, text)| SuggestionItem {
                    text: text.clone(),
                    is_selected: self.suggestion_cursor == Some(idx),
                })
                .collect(),
        }
    }

    fn compute_chips(&self) -> ChipsInfo {
        let chips = active_chips(&self.filters);
        let cursor = self.chip_cursor.min(chips.len().saturating_sub(1));
        let focused = self.focus == Focus::Chips;
        ChipsInfo {
            chips: chips
                .into_iter()
                .enumerate()
                .map(|(idx, chip)| ChipItem {
                    label: chip.label,
                    kind: chip.kind,
                    is_selected: focused && idx == cursor,
                })
                .collect(),
            focused,
        }
    }

    fn compute_filter_panel(&self) -> FilterPanelInfo {
        let facets = self.main.facets();
        let focused = self.focus == Focus::Filters;

        let facet_value = |names: Option<(&str, u64)>, selected: usize, active: bool| match names {
            Some((name, count)) => {
                let mark = if active { "[x]" } else { "[ ]" };
                format!("{mark} {name} ({count})  {selected} selected")
            }
            None => "none available".to_string(),
        };

        let rows = PanelRow::ALL
            .iter()
            .enumerate()
            .map(|(idx, row)| {
                let (value, is_active) = match row {
                    PanelRow::Category => {
                        let current = self.panel.category_cursor(facets).and_then(|i| {
                            facets.and_then(|f| f.categories.get(i)).map(|c| (c.name.as_str(), c.count))
                        });
                        let active = current.is_some_and(|(name, _)| self.filters.category.contains(name));
                        (facet_value(current, self.filters.category.len(), active), active)
                    }
                    PanelRow::Tags => {
                        let current = self.panel.tag_cursor(facets).and_then(|i| {
                            facets.and_then(|f| f.tags.get(i)).map(|t| (t.name.as_str(), t.count))
                        });
                        let active = current.is_some_and(|(name, _)| self.filters.tags.contains(name));
                        (facet_value(current, self.filters.tags.len(), active), active)
                    }
                    PanelRow::MinPrice => price_value(self.panel.min_text(), facets.map(|f| f.price_range.min)),
                    PanelRow::MaxPrice => price_value(self.panel.max_text(), facets.map(|f| f.price_range.max)),
                    PanelRow::Sort => (
                        format!("◂ {} ▸", self.filters.sort_by.label()),
                        self.filters.sort_by != SortBy::Relevance,
                    ),
                    PanelRow::Featured => {
                        let on = self.filters.featured == Some(true);
                        ((if on { "[x]" } else { "[ ]" }).to_string(), on)
                    }
                    PanelRow::Reset => (String::new(), false),
                };
                PanelRowInfo {
                    label: row.label().to_string(),
                    value,
                    is_selected: focused && idx == self.panel.row_index(),
                    is_active,
                }
            })
            .collect();

        FilterPanelInfo { rows, focused }
    }

    fn compute_body(&self) -> Body {
        let items = self.items();
        if items.is_empty() {
            return Body::Empty(self.compute_empty_state());
        }

        match self.view_mode {
            ViewMode::Grid => {
                let cursor = self.grid_cursor.min(items.len() - 1);
                Body::Grid(GridInfo {
                    columns: GRID_COLUMNS,
                    cells: items
                        .iter()
                        .enumerate()
                        .map(|(idx, item)| GridCell {
                            title: item.title.clone(),
                            price: item.price_label(),
                            is_saved: self.swipe.saved().contains(&item.id),
                            is_selected: idx == cursor,
                        })
                        .collect(),
                    focused: self.focus == Focus::Results,
                })
            }
            ViewMode::Card => {
                let Some(item) = self.current_card() else {
                    return Body::Exhausted(EmptyState {
                        message: "No more matches".to_string(),
                        subtitle: "Alt+r to start over, Alt+n for the next page".to_string(),
                    });
                };
                let position = (self.swipe.cursor() + 1).min(items.len());
                Body::Card(CardInfo {
                    title: item.title.clone(),
                    price: item.price_label(),
                    rating: format!("★ {:.1}", item.rating),
                    category: item.category.clone(),
                    featured: item.featured,
                    is_saved: self.swipe.saved().contains(&item.id),
                    progress: format!("{position} of {} matches", items.len()),
                    liked: self.swipe.liked().len(),
                    skipped: self.swipe.skipped().len(),
                    details: self.show_details.then(|| CardDetails {
                        description: item.description.clone(),
                        tags: item.tags.iter().cloned().collect::<Vec<_>>().join(", "),
                    }),
                })
            }
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        let (message, subtitle) = match (self.main.status(), self.main.error()) {
            (SearchStatus::Loading, _) => ("Searching…", String::new()),
            (_, Some(error)) => ("Search failed", error.to_string()),
            (SearchStatus::Idle, None) => (
                "Waiting for web access",
                "Grant the permission request to start searching".to_string(),
            ),
            _ => (
                "No results",
                "Try a different query or remove a filter (Alt+x resets all)".to_string(),
            ),
        };
        EmptyState {
            message: message.to_string(),
            subtitle,
        }
    }

    fn compute_overlay(&self) -> OverlayInfo {
        let query = self.overlay.query();
        let session = self.overlay.session();
        let matcher = SkimMatcherV2::default();

        let entries: Vec<OverlayItem> = self
            .overlay
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| OverlayItem {
                title: entry.title.clone(),
                detail: format!("{} · ${:.2}", entry.category, entry.price),
                is_selected: idx == self.overlay.cursor(),
                highlight_ranges: compute_highlight_ranges(&entry.title, query, &matcher),
            })
            .collect();

        let status = if query.is_empty() {
            Some("Type to search the catalog".to_string())
        } else if let Some(error) = session.error() {
            Some(error.to_string())
        } else if entries.is_empty() && session.status() == SearchStatus::Ready {
            Some("No results".to_string())
        } else if entries.is_empty() {
            Some("Searching…".to_string())
        } else {
            None
        };

        OverlayInfo {
            query: query.to_string(),
            entries,
            status,
        }
    }

    fn compute_drawer(&self, cursor: usize, rows: usize) -> DrawerInfo {
        let now = chrono::Utc::now().timestamp();
        let saved = self.swipe.saved();
        // each entry takes two lines inside the drawer frame, plus one line for the link
        let available = (rows.saturating_sub(8) / 2).max(1);
        let start = cursor.saturating_sub(available / 2);
        let start = start.min(saved.len().saturating_sub(available));

        DrawerInfo {
            entries: saved
                .iter()
                .enumerate()
                .skip(start)
                .take(available)
                .map(|(idx, entry)| DrawerItem {
                    title: entry.item.title.clone(),
                    price: entry.item.price_label(),
                    saved_ago: format!("saved {}", time_ago(entry.saved_at, now)),
                    is_selected: idx == cursor,
                })
                .collect(),
            link: saved
                .get(cursor)
                .and_then(|entry| entry.item.web_search_url())
                .map(|url| format!("View more: {url}")),
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = if self.overlay.is_open() {
            "↑↓: navigate  Enter: select  Esc: close"
        } else if self.drawer.is_some() {
            "↑↓: navigate  Del: unsave  Alt+w/Esc: close"
        } else {
            match (self.focus, self.view_mode) {
                (Focus::Query, _) => "Type to search  ↑↓: suggestions  Enter: apply  Tab: filters  /: palette  Alt+v: view",
                (Focus::Filters, _) => "↑↓: rows  ←→: choose  Enter: toggle  0-9: price  Tab: chips  Alt+x: reset",
                (Focus::Chips, _) => "←→: choose  Del/Enter: remove  Tab: results",
                (Focus::Results, ViewMode::Card) => {
                    "Alt+l/→: like  Alt+s/←: skip  Space: save  Alt+i: details  Alt+r: restart  Alt+n/p: page  Alt+w: saved"
                }
                (Focus::Results, ViewMode::Grid) => {
                    "Arrows: move  Space: save  Alt+n/p: page  Alt+v: swipe  Alt+w: saved"
                }
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

fn price_value(text: &str, bound: Option<f64>) -> (String, bool) {
    if text.is_empty() {
        let placeholder = bound.map_or_else(|| "any".to_string(), |b| format!("any (from {b})"));
        (placeholder, false)
    } else {
        (format!("${text}"), true)
    }
}

/// Character ranges of `text` matched by a fuzzy `query`, coalesced into runs.
///
/// Returns `(start, end)` pairs with an exclusive end.
fn compute_highlight_ranges(text: &str, query: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
    use fuzzy_matcher::FuzzyMatcher;

    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        match ranges.last_mut() {
            Some((_, end)) if *end == idx => *end = idx + 1,
            _ => ranges.push((idx, idx + 1)),
        }
    }
    ranges
}
