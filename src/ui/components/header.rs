//! Header component renderer.
//!
//! Title on the left, search status and saved count on the right.

use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at `row` and returns `row + 1`.
///
/// # Layout
///
/// ```text
///  Swipecart · Swipe               page 1 of 3 · 21 results   ♥ 2
/// ```
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let saved = format!("♥ {} ", header.saved_count);
    let status = if header.status.is_empty() {
        String::new()
    } else {
        format!("{}   ", header.status)
    };
    let right_len = width(&status) + width(&saved);
    let title = truncate(&header.title, cols.saturating_sub(right_len));
    let gap = cols.saturating_sub(width(&title) + right_len);

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}", Theme::reset());
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }

    print!("{}", " ".repeat(gap));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{status}");
    print!("{}", Theme::fg(&theme.colors.saved_fg));
    print!("{saved}");
    print!("{}", Theme::reset());
    row + 1
}
