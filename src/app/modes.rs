//! View mode and keyboard focus types.
//!
//! [`ViewMode`] picks how the current result page is shown. [`Focus`] decides which
//! part of the screen receives arrows, `Enter`, typing and `Backspace`. The overlay,
//! the saved drawer and card details are layered on top and tracked separately in
//! [`AppState`](crate::app::AppState).
//!
//! # Example
//!
//! ```rust
//! use swipecart::app::{Focus, ViewMode};
//!
//! assert_eq!(ViewMode::Card.toggle(), ViewMode::Grid);
//! assert_eq!(Focus::Results.next(), Focus::Query);
//! ```

/// How the result page is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// One card at a time with swipe decisions.
    #[default]
    Card,
    /// The whole page as a three-column grid.
    Grid,
}

impl ViewMode {
    /// Returns the other mode. Switching never touches filters or swipe progress.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Card => Self::Grid,
            Self::Grid => Self::Card,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Swipe",
            Self::Grid => "Grid",
        }
    }
}

/// Screen region receiving navigation and text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The query box and its suggestions.
    #[default]
    Query,
    /// The filter panel.
    Filters,
    /// The active filter chips row.
    Chips,
    /// The card or the grid.
    Results,
}

impl Focus {
    const ORDER: [Self; 4] = [Self::Query, Self::Filters, Self::Chips, Self::Results];

    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Arrow key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}
