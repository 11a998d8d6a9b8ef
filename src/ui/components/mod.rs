//! Composable UI component renderers.
//!
//! Each component prints one region of the screen with absolute cursor positioning
//! and returns the next free row where that makes sense.
//!
//! # Components
//!
//! - [`header`]: Title bar with status and saved count
//! - [`search`]: Query box and suggestion list
//! - [`chips`]: Active filter chips
//! - [`filters`]: Filter panel on the left
//! - [`card`]: Swipe card
//! - [`grid`]: Three-column result grid
//! - [`empty`]: Centered message for empty, loading and exhausted states
//! - [`overlay`]: Command overlay drawn on top of everything
//! - [`drawer`]: Saved items drawer
//! - [`footer`]: Status line and keybinding hints

mod card;
mod chips;
mod drawer;
mod empty;
mod filters;
mod footer;
mod grid;
mod header;
mod overlay;
mod search;

pub use card::render_card;
pub use chips::render_chips;
pub use drawer::render_drawer;
pub use empty::render_empty_state;
pub use filters::render_filter_panel;
pub use footer::{render_footer, render_status_line};
pub use grid::render_grid;
pub use header::render_header;
pub use overlay::render_overlay;
pub use search::render_search_bar;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;

/// A rectangular screen region, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Area {
    pub top: usize,
    pub left: usize,
    pub width: usize,
    pub height: usize,
}

impl Area {
    /// First row below the area.
    #[must_use]
    pub const fn bottom(&self) -> usize {
        self.top + self.height
    }
}

/// Renders a horizontal separator at `row` and returns `row + 1`.
pub fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Draws a box outline around `area` and blanks its inside.
pub(crate) fn render_frame(area: Area, title: &str, color: &str) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let inner = area.width - 2;
    let title = crate::ui::helpers::truncate(title, inner.saturating_sub(2));
    let title_len = crate::ui::helpers::width(&title);

    position_cursor(area.top, area.left);
    print!("{}", Theme::fg(color));
    if title.is_empty() {
        print!("┌{}┐", "─".repeat(inner));
    } else {
        print!("┌ {}{title}{}{} ", Theme::bold(), Theme::reset(), Theme::fg(color));
        print!("{}┐", "─".repeat(inner.saturating_sub(title_len + 2)));
    }

    for row in area.top + 1..area.bottom() - 1 {
        position_cursor(row, area.left);
        print!("│{}│", " ".repeat(inner));
    }

    position_cursor(area.bottom() - 1, area.left);
    print!("└{}┘", "─".repeat(inner));
    print!("{}", Theme::reset());
}
