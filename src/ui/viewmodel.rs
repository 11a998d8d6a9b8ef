//! View model types representing renderable UI state.
//!
//! View models are computed from [`AppState`](crate::app::AppState) by
//! `compute_viewmodel` and consumed by the renderer. They hold display-ready strings
//! and flags only; no component looks back into application state.

use crate::domain::ChipKind;

/// Complete UI view model for one frame.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub chips: ChipsInfo,
    pub filter_panel: FilterPanelInfo,
    pub body: Body,
    /// Inline error from the last failed request while older results stay visible.
    pub error_line: Option<String>,
    /// Transient message such as the last overlay selection.
    pub notice: Option<String>,
    pub overlay: Option<OverlayInfo>,
    pub drawer: Option<DrawerInfo>,
    pub footer: FooterInfo,
}

/// Title bar content.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub title: String,
    /// Right-hand status, e.g. `page 2 of 4 · 31 results` or `Searching…`.
    pub status: String,
    pub saved_count: usize,
}

#[derive(Debug, Clone)]
pub struct SearchBarInfo {
    pub query: String,
    pub focused: bool,
    pub suggestions: Vec<SuggestionItem>,
}

#[derive(Debug, Clone)]
pub struct SuggestionItem {
    pub text: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone)]
pub struct ChipsInfo {
    pub chips: Vec<ChipItem>,
    pub focused: bool,
}

#[derive(Debug, Clone)]
pub struct ChipItem {
    pub label: String,
    pub kind: ChipKind,
    pub is_selected: bool,
}

#[derive(Debug, Clone)]
pub struct FilterPanelInfo {
    pub rows: Vec<PanelRowInfo>,
    pub focused: bool,
}

/// One filter panel line: `label  value`.
#[derive(Debug, Clone)]
pub struct PanelRowInfo {
    pub label: String,
    pub value: String,
    pub is_selected: bool,
    /// The value shown is active (checked category, typed price, non-default sort).
    pub is_active: bool,
}

/// Main content area.
#[derive(Debug, Clone)]
pub enum Body {
    Card(CardInfo),
    Grid(GridInfo),
    /// Shown instead of the card once every item has been decided.
    Exhausted(EmptyState),
    /// No results, still loading, or a failure with nothing to keep on screen.
    Empty(EmptyState),
}

#[derive(Debug, Clone)]
pub struct CardInfo {
    pub title: String,
    pub price: String,
    pub rating: String,
    pub category: String,
    pub featured: bool,
    pub is_saved: bool,
    /// `3 of 9 matches`
    pub progress: String,
    pub liked: usize,
    pub skipped: usize,
    pub details: Option<CardDetails>,
}

#[derive(Debug, Clone)]
pub struct CardDetails {
    pub description: String,
    pub tags: String,
}

#[derive(Debug, Clone)]
pub struct GridInfo {
    pub columns: usize,
    pub cells: Vec<GridCell>,
    pub focused: bool,
}

#[derive(Debug, Clone)]
pub struct GridCell {
    pub title: String,
    pub price: String,
    pub is_saved: bool,
    pub is_selected: bool,
}

#[derive(Debug, Clone)]
pub struct OverlayInfo {
    pub query: String,
    pub entries: Vec<OverlayItem>,
    /// Replaces the list when there is nothing to show (hint, loading, error, no results).
    pub status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OverlayItem {
    pub title: String,
    pub detail: String,
    pub is_selected: bool,
    /// Character ranges of `title` matching the query, `(start, end)` exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone)]
pub struct DrawerInfo {
    pub entries: Vec<DrawerItem>,
    /// "View more" link for the selected entry.
    pub link: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DrawerItem {
    pub title: String,
    pub price: String,
    pub saved_ago: String,
    pub is_selected: bool,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Centered two-line message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}
