//! Result grid renderer.
//!
//! Cells are laid out row-major in `columns` columns, two text lines per cell plus a
//! spacer line. Rows that do not fit in the area are not drawn.

use super::Area;
use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::GridInfo;

const CELL_HEIGHT: usize = 3;

pub fn render_grid(area: Area, grid: &GridInfo, theme: &Theme) {
    let columns = grid.columns.max(1);
    let cell_width = (area.width / columns).saturating_sub(1);

    for (idx, cell) in grid.cells.iter().enumerate() {
        let top = area.top + (idx / columns) * CELL_HEIGHT;
        if top + 1 >= area.bottom() {
            break;
        }
        let left = area.left + (idx % columns) * (cell_width + 1);
        let highlight = cell.is_selected && grid.focused;

        let marker = if cell.is_saved { " ♥" } else { "" };
        let title = fit(&cell.title, cell_width.saturating_sub(marker.chars().count()));

        position_cursor(top, left);
        if highlight {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else if cell.is_selected {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.header_fg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
        }
        print!("{title}");
        if !highlight {
            print!("{}", Theme::fg(&theme.colors.saved_fg));
        }
        print!("{marker}");
        print!("{}", Theme::reset());

        position_cursor(top + 1, left);
        if highlight {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.accent_fg));
        }
        print!("{}", fit(&cell.price, cell_width));
        print!("{}", Theme::reset());
    }
}
