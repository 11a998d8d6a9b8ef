//! Footer component renderer.
//!
//! The footer is the keybinding help line. Above it sits a single status line used
//! for inline errors and transient notices.

use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered at `row` and returns `row + 1`.
///
/// Text wider than the terminal is truncated.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let help_text = truncate(&footer.keybindings, cols);
    let text_len = width(&help_text);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the error line, or the notice when there is no error.
///
/// Prints nothing when both are `None`.
pub fn render_status_line(row: usize, error: Option<&str>, notice: Option<&str>, theme: &Theme, cols: usize) {
    let (text, color) = match (error, notice) {
        (Some(error), _) => (format!(" ⚠ {error}"), &theme.colors.error_fg),
        (None, Some(notice)) => (format!(" {notice}"), &theme.colors.liked_fg),
        (None, None) => return,
    };

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", truncate(&text, cols));
    print!("{}", Theme::reset());
}
