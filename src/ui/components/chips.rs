//! Active filter chips row.

use crate::domain::ChipKind;
use crate::ui::helpers::{position_cursor, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ChipsInfo;

/// Renders one line of chips at `row` and returns `row + 1`.
///
/// Chips that do not fit in `cols` are summarized as `+N more`.
pub fn render_chips(row: usize, chips: &ChipsInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let label_color = if chips.focused {
        &theme.colors.search_bar_border
    } else {
        &theme.colors.text_dim
    };
    print!("{}  Filters: {}", Theme::fg(label_color), Theme::reset());

    if chips.chips.is_empty() {
        print!("{}{}none{}", Theme::dim(), Theme::fg(&theme.colors.text_dim), Theme::reset());
        return row + 1;
    }

    let mut used = 11;
    for (idx, chip) in chips.chips.iter().enumerate() {
        let icon = match chip.kind {
            ChipKind::Category => "▣",
            ChipKind::Tag => "#",
            ChipKind::Price => "$",
            ChipKind::Featured => "★",
            ChipKind::Sort => "⇅",
        };
        let text = format!(" {icon} {} ✕ ", chip.label);
        let remaining = chips.chips.len() - idx;
        if used + width(&text) + 10 > cols && remaining > 1 {
            print!("{}+{remaining} more{}", Theme::fg(&theme.colors.text_dim), Theme::reset());
            break;
        }

        if chip.is_selected {
            print!("{}", Theme::fg(&theme.colors.selection_fg));
            print!("{}", Theme::bg(&theme.colors.selection_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.chip_fg));
            print!("{}", Theme::bg(&theme.colors.chip_bg));
        }
        print!("{text}");
        print!("{} ", Theme::reset());
        used += width(&text) + 1;
    }

    row + 1
}
