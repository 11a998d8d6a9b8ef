//! Filter panel renderer.
//!
//! Rows are drawn top to bottom inside the left column of the body area. The
//! selected row is only highlighted while the panel has focus.

use super::{render_frame, Area};
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterPanelInfo;

const LABEL_WIDTH: usize = 10;

pub fn render_filter_panel(area: Area, panel: &FilterPanelInfo, theme: &Theme) {
    let border = if panel.focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.border
    };
    render_frame(area, "Filters", border);

    let inner = area.width.saturating_sub(4);
    let value_width = inner.saturating_sub(LABEL_WIDTH);

    for (idx, row) in panel.rows.iter().enumerate() {
        let line = area.top + 1 + idx;
        if line + 1 >= area.bottom() {
            break;
        }
        position_cursor(line, area.left + 2);

        if row.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
            print!("{}{}", fit(&row.label, LABEL_WIDTH), fit(&row.value, value_width));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{}", fit(&row.label, LABEL_WIDTH));
            let value_color = if row.is_active {
                &theme.colors.accent_fg
            } else {
                &theme.colors.text_normal
            };
            print!("{}", Theme::fg(value_color));
            print!("{}", fit(&row.value, value_width));
        }
        print!("{}", Theme::reset());
    }
}
