//! Top-level rendering coordinator.
//!
//! Computes the view model and lays the components out top to bottom:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search box + suggestions]
//! [Chips]
//! [Border]
//! [Filter panel] [Card | Grid | Empty state]
//! [Status line]
//! [Border]
//! [Footer]
//! ```
//!
//! The saved drawer and the command overlay are drawn last, on top.

use crate::app::AppState;
use crate::ui::components::{self, Area};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

/// Widest the filter panel gets.
const PANEL_WIDTH: usize = 36;

/// Widest the swipe card gets.
const CARD_WIDTH: usize = 56;

/// Renders the plugin UI to stdout.
pub fn render(state: &AppState, rows: usize, cols: usize) {
    let viewmodel = state.compute_viewmodel(rows);

    render_viewmodel(&viewmodel, &state.theme, rows, cols);
}

fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) {
    let mut current_row = 2;

    current_row = components::render_header(current_row, &vm.header, theme, cols);
    current_row = components::render_border(current_row, &theme.colors.border, cols);
    current_row = components::render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = components::render_chips(current_row, &vm.chips, theme, cols);
    current_row = components::render_border(current_row, &theme.colors.border, cols);

    let footer_row = rows;
    let border_row = rows.saturating_sub(1);
    let status_row = rows.saturating_sub(2);

    let body_height = status_row.saturating_sub(current_row);
    let panel_width = PANEL_WIDTH.min(cols / 3);
    let panel = Area {
        top: current_row,
        left: 1,
        width: panel_width,
        height: body_height,
    };
    components::render_filter_panel(panel, &vm.filter_panel, theme);

    let content = Area {
        top: current_row,
        left: panel_width + 2,
        width: cols.saturating_sub(panel_width + 2),
        height: body_height,
    };
    render_body(&vm.body, content, theme);

    components::render_status_line(status_row, vm.error_line.as_deref(), vm.notice.as_deref(), theme, cols);
    components::render_border(border_row, &theme.colors.border, cols);
    components::render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(drawer) = &vm.drawer {
        components::render_drawer(drawer, theme, rows, cols);
    }
    if let Some(overlay) = &vm.overlay {
        components::render_overlay(overlay, theme, rows, cols);
    }
}

fn render_body(body: &Body, area: Area, theme: &Theme) {
    match body {
        Body::Card(card) => {
            let width = CARD_WIDTH.min(area.width);
            let card_area = Area {
                left: area.left + (area.width - width) / 2,
                width,
                ..area
            };
            components::render_card(card_area, card, theme);
        }
        Body::Grid(grid) => components::render_grid(area, grid, theme),
        Body::Exhausted(empty) | Body::Empty(empty) => components::render_empty_state(area, empty, theme),
    }
}
