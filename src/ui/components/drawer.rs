//! Saved items drawer renderer.

use super::{render_frame, Area};
use crate::ui::helpers::{fit, position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DrawerInfo;

const DRAWER_WIDTH: usize = 48;

/// Renders the drawer against the right edge, between the header and the footer.
pub fn render_drawer(drawer: &DrawerInfo, theme: &Theme, rows: usize, cols: usize) {
    let width_total = DRAWER_WIDTH.min(cols);
    let area = Area {
        top: 3,
        left: cols.saturating_sub(width_total) + 1,
        width: width_total,
        height: rows.saturating_sub(5),
    };
    if area.height < 3 || area.width < 12 {
        return;
    }
    render_frame(area, "Saved", &theme.colors.saved_fg);

    let inner = area.width - 4;
    let left = area.left + 2;

    if drawer.entries.is_empty() {
        position_cursor(area.top + 1, left);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", truncate("Nothing saved yet. Alt+l or Space saves.", inner));
        print!("{}", Theme::reset());
        return;
    }

    let link_row = area.bottom() - 2;
    for (idx, entry) in drawer.entries.iter().enumerate() {
        let row = area.top + 1 + idx * 2;
        if row + 1 >= link_row {
            break;
        }
        let price_width = width(&entry.price);

        position_cursor(row, left);
        if entry.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{}", fit(&entry.title, inner.saturating_sub(price_width + 1)));
        print!(" ");
        if !entry.is_selected {
            print!("{}", Theme::fg(&theme.colors.accent_fg));
        }
        print!("{}", entry.price);
        print!("{}", Theme::reset());

        position_cursor(row + 1, left);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", truncate(&entry.saved_ago, inner));
        print!("{}", Theme::reset());
    }

    if let Some(link) = &drawer.link {
        position_cursor(link_row, left);
        print!("{}", Theme::fg(&theme.colors.accent_fg));
        print!("{}", truncate(link, inner));
        print!("{}", Theme::reset());
    }
}
