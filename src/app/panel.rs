//! Keyboard-driven filter panel.
//!
//! The panel is a list of rows. Arrow keys and `Enter` on a row translate into a
//! [`PanelEffect`]; the panel never mutates [`FilterState`] itself. The two price rows
//! keep the raw text being typed so that half-typed input such as `12.` survives
//! between keystrokes while the filter only ever holds a parsed [`PriceRange`].

use crate::domain::{FacetCount, FacetSet, FilterPatch, FilterState, PriceRange};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelRow {
    Category,
    Tags,
    MinPrice,
    MaxPrice,
    Sort,
    Featured,
    Reset,
}

impl PanelRow {
    pub const ALL: [Self; 7] = [
        Self::Category,
        Self::Tags,
        Self::MinPrice,
        Self::MaxPrice,
        Self::Sort,
        Self::Featured,
        Self::Reset,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Category => "Category",
            Self::Tags => "Tags",
            Self::MinPrice => "Min price",
            Self::MaxPrice => "Max price",
            Self::Sort => "Sort",
            Self::Featured => "Featured",
            Self::Reset => "Reset filters",
        }
    }

    const fn is_price(self) -> bool {
        matches!(self, Self::MinPrice | Self::MaxPrice)
    }
}

/// What a panel interaction asks the filter store to do.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEffect {
    Patch(FilterPatch),
    Reset,
}

#[derive(Debug, Clone, Default)]
pub struct FilterPanel {
    row: usize,
    category_cursor: usize,
    tag_cursor: usize,
    min_text: String,
    max_text: String,
}

impl FilterPanel {
    #[must_use]
    pub fn row(&self) -> PanelRow {
        PanelRow::ALL[self.row.min(PanelRow::ALL.len() - 1)]
    }

    #[must_use]
    pub const fn row_index(&self) -> usize {
        self.row
    }

    #[must_use]
    pub fn min_text(&self) -> &str {
        &self.min_text
    }

    #[must_use]
    pub fn max_text(&self) -> &str {
        &self.max_text
    }

    /// Highlighted category facet, clamped to the facets currently known.
    #[must_use]
    pub fn category_cursor(&self, facets: Option<&FacetSet>) -> Option<usize> {
        clamp(self.category_cursor, facets.map_or(0, |f| f.categories.len()))
    }

    /// Highlighted tag facet, clamped to the facets currently known.
    #[must_use]
    pub fn tag_cursor(&self, facets: Option<&FacetSet>) -> Option<usize> {
        clamp(self.tag_cursor, facets.map_or(0, |f| f.tags.len()))
    }

    pub fn move_up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.row = (self.row + 1).min(PanelRow::ALL.len() - 1);
    }

    pub fn left(&mut self, filters: &FilterState, facets: Option<&FacetSet>) -> Option<PanelEffect> {
        match self.row() {
            PanelRow::Category => {
                self.category_cursor = self.category_cursor(facets)?.saturating_sub(1);
                None
            }
            PanelRow::Tags => {
                self.tag_cursor = self.tag_cursor(facets)?.saturating_sub(1);
                None
            }
            PanelRow::Sort => Some(PanelEffect::Patch(FilterPatch::sort_by(filters.sort_by.previous()))),
            _ => None,
        }
    }

    pub fn right(&mut self, filters: &FilterState, facets: Option<&FacetSet>) -> Option<PanelEffect> {
        match self.row() {
            PanelRow::Category => {
                let len = facets.map_or(0, |f| f.categories.len());
                self.category_cursor = (self.category_cursor(facets)? + 1).min(len - 1);
                None
            }
            PanelRow::Tags => {
                let len = facets.map_or(0, |f| f.tags.len());
                self.tag_cursor = (self.tag_cursor(facets)? + 1).min(len - 1);
                None
            }
            PanelRow::Sort => Some(PanelEffect::Patch(FilterPatch::sort_by(filters.sort_by.next()))),
            _ => None,
        }
    }

    /// Toggles or cycles the value on the current row (`Enter` / `Space`).
    pub fn activate(&mut self, filters: &FilterState, facets: Option<&FacetSet>) -> Option<PanelEffect> {
        match self.row() {
            PanelRow::Category => {
                let idx = self.category_cursor(facets)?;
                let name = facets.and_then(|f| facet_name(&f.categories, idx))?;
                Some(PanelEffect::Patch(FilterPatch::category(toggled(&filters.category, name))))
            }
            PanelRow::Tags => {
                let idx = self.tag_cursor(facets)?;
                let name = facets.and_then(|f| facet_name(&f.tags, idx))?;
                Some(PanelEffect::Patch(FilterPatch::tags(toggled(&filters.tags, name))))
            }
            PanelRow::Sort => Some(PanelEffect::Patch(FilterPatch::sort_by(filters.sort_by.next()))),
            PanelRow::Featured => {
                let featured = if filters.featured == Some(true) { None } else { Some(true) };
                Some(PanelEffect::Patch(FilterPatch::featured(featured)))
            }
            PanelRow::Reset => {
                self.clear_price_text();
                Some(PanelEffect::Reset)
            }
            PanelRow::MinPrice | PanelRow::MaxPrice => None,
        }
    }

    /// Types into the focused price row. Only digits and `.` are accepted.
    pub fn input(&mut self, c: char, facets: Option<&FacetSet>) -> Option<PanelEffect> {
        if !(c.is_ascii_digit() || c == '.') {
            return None;
        }
        self.price_text_mut()?.push(c);
        Some(self.price_effect(facets))
    }

    /// Deletes the last character of the focused price row.
    pub fn erase(&mut self, facets: Option<&FacetSet>) -> Option<PanelEffect> {
        self.price_text_mut()?.pop()?;
        Some(self.price_effect(facets))
    }

    pub fn clear_price_text(&mut self) {
        self.min_text.clear();
        self.max_text.clear();
    }

    fn price_text_mut(&mut self) -> Option<&mut String> {
        match self.row() {
            PanelRow::MinPrice => Some(&mut self.min_text),
            PanelRow::MaxPrice => Some(&mut self.max_text),
            _ => None,
        }
    }

    fn price_effect(&self, facets: Option<&FacetSet>) -> PanelEffect {
        if self.min_text.is_empty() && self.max_text.is_empty() {
            return PanelEffect::Patch(FilterPatch::price_range(None));
        }
        let range = PriceRange::from_inputs(&self.min_text, &self.max_text, facets);
        PanelEffect::Patch(FilterPatch::price_range(Some(range)))
    }

    /// Whether typed characters should go to the panel instead of anywhere else.
    #[must_use]
    pub fn accepts_text(&self) -> bool {
        self.row().is_price()
    }
}

fn clamp(cursor: usize, len: usize) -> Option<usize> {
    (len > 0).then(|| cursor.min(len - 1))
}

fn facet_name(facets: &[FacetCount], idx: usize) -> Option<&str> {
    facets.get(idx).map(|f| f.name.as_str())
}

fn toggled(set: &BTreeSet<String>, value: &str) -> BTreeSet<String> {
    let mut set = set.clone();
    if !set.remove(value) {
        set.insert(value.to_string());
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PriceBounds, SortBy};

    fn facets() -> FacetSet {
        FacetSet {
            categories: vec![
                FacetCount { name: "Audio".to_string(), count: 4 },
                FacetCount { name: "Electronics".to_string(), count: 9 },
            ],
            tags: vec![FacetCount { name: "wireless".to_string(), count: 2 }],
            price_range: PriceBounds { min: 10.0, max: 300.0 },
        }
    }

    fn patch(effect: Option<PanelEffect>) -> FilterPatch {
        match effect {
            Some(PanelEffect::Patch(patch)) => patch,
            other => panic!("expected a patch, got {other:?}"),
        }
    }

    #[test]
    fn category_row_toggles_highlighted_facet() {
        let facets = facets();
        let mut panel = FilterPanel::default();
        let mut filters = FilterState::default();

        panel.right(&filters, Some(&facets));
        panel.right(&filters, Some(&facets));
        assert_eq!(panel.category_cursor(Some(&facets)), Some(1));

        filters.update(patch(panel.activate(&filters, Some(&facets))));
        assert!(filters.category.contains("Electronics"));

        filters.update(patch(panel.activate(&filters, Some(&facets))));
        assert!(filters.category.is_empty());
    }

    #[test]
    fn rows_without_facets_do_nothing() {
        let mut panel = FilterPanel::default();
        let filters = FilterState::default();
        assert!(panel.activate(&filters, None).is_none());
        assert!(panel.right(&filters, None).is_none());
    }

    #[test]
    fn price_rows_accept_digits_and_fall_back_on_bounds() {
        let facets = facets();
        let mut panel = FilterPanel::default();
        panel.move_down();
        panel.move_down();
        assert_eq!(panel.row(), PanelRow::MinPrice);

        assert!(panel.input('x', Some(&facets)).is_none());
        let typed = patch(panel.input('5', Some(&facets)));
        assert_eq!(typed.price_range, Some(Some(PriceRange::new(5.0, 300.0))));

        let erased = patch(panel.erase(Some(&facets)));
        assert_eq!(erased.price_range, Some(None));
        assert!(panel.erase(Some(&facets)).is_none());
    }

    #[test]
    fn sort_featured_and_reset_rows() {
        let mut panel = FilterPanel::default();
        let mut filters = FilterState::default();
        for _ in 0..4 {
            panel.move_down();
        }
        assert_eq!(panel.row(), PanelRow::Sort);
        filters.update(patch(panel.right(&filters, None)));
        assert_eq!(filters.sort_by, SortBy::PriceAsc);

        panel.move_down();
        filters.update(patch(panel.activate(&filters, None)));
        assert_eq!(filters.featured, Some(true));
        filters.update(patch(panel.activate(&filters, None)));
        assert_eq!(filters.featured, None);

        panel.move_down();
        panel.move_down();
        assert_eq!(panel.row(), PanelRow::Reset);
        assert_eq!(panel.activate(&filters, None), Some(PanelEffect::Reset));
    }
}
