//! Command overlay renderer.
//!
//! Drawn last, centered near the top of the screen, on top of whatever is below.

use super::{render_frame, Area};
use crate::ui::helpers::{fit, position_cursor, render_highlighted_text, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::OverlayInfo;

const MAX_WIDTH: usize = 64;

pub fn render_overlay(overlay: &OverlayInfo, theme: &Theme, rows: usize, cols: usize) {
    let list_len = if overlay.status.is_some() { 1 } else { overlay.entries.len() };
    let area = Area {
        top: 3,
        left: cols.saturating_sub(MAX_WIDTH.min(cols)) / 2 + 1,
        width: MAX_WIDTH.min(cols.saturating_sub(2)),
        height: (list_len + 5).min(rows.saturating_sub(4)),
    };
    if area.height < 5 || area.width < 10 {
        return;
    }
    render_frame(area, "Quick search", &theme.colors.search_bar_border);

    let inner = area.width - 4;
    let left = area.left + 2;

    position_cursor(area.top + 1, left);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", truncate(&format!("› {}▏", overlay.query), inner));
    print!("{}", Theme::reset());

    position_cursor(area.top + 2, left);
    print!("{}{}{}", Theme::fg(&theme.colors.border), "─".repeat(inner), Theme::reset());

    if let Some(status) = &overlay.status {
        position_cursor(area.top + 3, left);
        print!("{}{}{}", Theme::fg(&theme.colors.text_dim), truncate(status, inner), Theme::reset());
        return;
    }

    let last_row = area.bottom() - 2;
    for (idx, entry) in overlay.entries.iter().enumerate() {
        let row = area.top + 3 + idx;
        if row > last_row {
            break;
        }
        position_cursor(row, left);

        let detail = truncate(&entry.detail, inner / 2);
        let title_width = inner.saturating_sub(width(&detail) + 1);
        let title = truncate(&entry.title, title_width);

        if entry.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
            print!("{}", fit(&title, title_width));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            render_highlighted_text(&title, &entry.highlight_ranges, theme, false);
            print!("{}", " ".repeat(title_width.saturating_sub(width(&title))));
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!(" {detail}");
        print!("{}", Theme::reset());
    }
}
