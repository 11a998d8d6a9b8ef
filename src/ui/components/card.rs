//! Swipe card renderer.
//!
//! ```text
//! ┌ 3 of 9 matches ─────────────────┐
//! │ ★ Featured                      │
//! │ Noise-cancelling Headphones  ♥  │
//! │ Audio                           │
//! │ $129.00            ★ 4.6        │
//! │                                 │
//! │ ✓ 2 liked   ✗ 1 skipped         │
//! └─────────────────────────────────┘
//! ```

use super::{render_frame, Area};
use crate::ui::helpers::{position_cursor, truncate, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardInfo;

pub fn render_card(area: Area, card: &CardInfo, theme: &Theme) {
    render_frame(area, &card.progress, &theme.colors.border);

    let left = area.left + 2;
    let inner = area.width.saturating_sub(4);
    let last_row = area.bottom().saturating_sub(2);
    let mut row = area.top + 1;

    let line = |row: &mut usize, text: &str, color: &str, bold: bool| {
        if *row > last_row {
            return;
        }
        position_cursor(*row, left);
        if bold {
            print!("{}", Theme::bold());
        }
        print!("{}{}{}", Theme::fg(color), truncate(text, inner), Theme::reset());
        *row += 1;
    };

    if card.featured {
        line(&mut row, "★ Featured", &theme.colors.match_highlight_bg, true);
    }

    if row <= last_row {
        position_cursor(row, left);
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.header_fg));
        print!("{}", truncate(&card.title, inner.saturating_sub(3)));
        print!("{}", Theme::reset());
        if card.is_saved {
            print!("{}  ♥{}", Theme::fg(&theme.colors.saved_fg), Theme::reset());
        }
        row += 1;
    }
    line(&mut row, &card.category, &theme.colors.text_dim, false);

    let gap = inner.saturating_sub(width(&card.price) + width(&card.rating)).min(12);
    line(
        &mut row,
        &format!("{}{}{}", card.price, " ".repeat(gap), card.rating),
        &theme.colors.accent_fg,
        true,
    );

    if let Some(details) = &card.details {
        row += 1;
        for chunk in wrap(&details.description, inner) {
            line(&mut row, &chunk, &theme.colors.text_normal, false);
        }
        if !details.tags.is_empty() {
            line(&mut row, &format!("# {}", details.tags), &theme.colors.text_dim, false);
        }
    }

    if last_row > area.top {
        position_cursor(last_row, left);
        print!("{}✓ {} liked{}", Theme::fg(&theme.colors.liked_fg), card.liked, Theme::reset());
        print!("   {}✗ {} skipped{}", Theme::fg(&theme.colors.text_dim), card.skipped, Theme::reset());
    }
}

/// Greedy word wrap on character widths.
fn wrap(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && width(&current) + 1 + width(word) > max {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::wrap;

    #[test]
    fn wrap_breaks_on_word_boundaries() {
        assert_eq!(
            wrap("Warm light for late evenings at the desk", 16),
            vec!["Warm light for", "late evenings at", "the desk"]
        );
        assert!(wrap("   ", 10).is_empty());
    }
}
