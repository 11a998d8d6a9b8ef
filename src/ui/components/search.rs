//! Search bar component renderer.
//!
//! A three-line bordered query box. Suggestions for the current query are listed
//! directly beneath it.

use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 2;

/// Renders the query box and its suggestions starting at `row`.
///
/// # Returns
///
/// The next available row: `row + 3` plus one row per suggestion.
///
/// # Layout
///
/// ```text
///   ┌──────────────────────────────┐
///   │ Search: headph▏               │
///   └──────────────────────────────┘
///     ↳ headphones wireless
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };

    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let cursor = if search.focused { "▏" } else { "" };
    let search_text = if search.query.is_empty() && !search.focused {
        " Search the catalog…".to_string()
    } else {
        format!(" Search: {}{cursor}", search.query)
    };
    let search_text = truncate(&search_text, inner_width);
    let padding = inner_width.saturating_sub(width(&search_text));

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    if search.query.is_empty() && !search.focused {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{search_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let mut current_row = row + 3;
    for suggestion in &search.suggestions {
        position_cursor(current_row, SEARCH_BOX_MARGIN + 3);
        let text = truncate(&format!("↳ {}", suggestion.text), inner_width);
        if suggestion.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{text}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
