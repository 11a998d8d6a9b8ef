//! Empty state component renderer.
//!
//! Used for "no results", loading, failures with nothing to show, and the end of a
//! swipe session.

use super::Area;
use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders a two-line message centered horizontally in `area`, a third of the way down.
pub fn render_empty_state(area: Area, empty: &EmptyState, theme: &Theme) {
    let row = area.top + area.height / 3;

    let message = truncate(&empty.message, area.width);
    let msg_padding = area.width.saturating_sub(width(&message)) / 2;

    position_cursor(row, area.left + msg_padding);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{message}");
    print!("{}", Theme::reset());

    if empty.subtitle.is_empty() {
        return;
    }

    let subtitle = truncate(&empty.subtitle, area.width);
    let sub_padding = area.width.saturating_sub(width(&subtitle)) / 2;

    position_cursor(row + 1, area.left + sub_padding);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{subtitle}");
    print!("{}", Theme::reset());
}
