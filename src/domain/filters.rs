//! Filter state, partial updates, removals and active filter chips.
//!
//! [`FilterState`] is the live (not yet debounced) filter selection. It is changed
//! only through three operations:
//!
//! - [`FilterState::update`]: shallow merge of a [`FilterPatch`]
//! - [`FilterState::remove`]: removal of a single value described by a [`FilterRemoval`]
//! - [`FilterState::reset`]: back to [`FilterState::default`]
//!
//! Pagination is deliberately not part of the filter state; the owning search session
//! keeps the page next to the applied filter snapshot and resets it when filters change.
//!
//! Chips are a pure projection computed by [`active_chips`] every time the view model is
//! built, never stored.

use crate::domain::item::FacetSet;
use std::collections::BTreeSet;
use std::fmt;

/// Result ordering requested from the search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    Rating,
    Newest,
}

impl SortBy {
    /// Every sort order in the order the filter panel cycles through them.
    pub const ALL: [Self; 5] = [
        Self::Relevance,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::Rating,
        Self::Newest,
    ];

    /// Wire value sent as the `sortBy` parameter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Rating => "rating",
            Self::Newest => "newest",
        }
    }

    /// Human-readable label for the filter panel and chips.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Relevance => "Relevance",
            Self::PriceAsc => "Price: Low to High",
            Self::PriceDesc => "Price: High to Low",
            Self::Rating => "Rating",
            Self::Newest => "Newest",
        }
    }

    /// The sort order after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The sort order before this one, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive price filter. Construction guarantees `min <= max` for finite bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    /// Creates a range, swapping the bounds if they arrive inverted.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        if min > max {
            Self { min: max, max: min }
        } else {
            Self { min, max }
        }
    }

    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Builds a range from the two free-text price inputs of the filter panel.
    ///
    /// Input is frequently half-typed, so anything that does not parse to a finite
    /// number falls back to the matching facet bound, or `0` when no facets are known.
    /// A fallback bound never overrides a typed one: it is clamped to the typed value
    /// instead, so a typed minimum stays the minimum.
    #[must_use]
    pub fn from_inputs(min_text: &str, max_text: &str, facets: Option<&FacetSet>) -> Self {
        let bounds = facets.map(|f| f.price_range).unwrap_or_default();
        match (parse_price(min_text), parse_price(max_text)) {
            (Some(min), Some(max)) => Self::new(min, max),
            (Some(min), None) => Self { min, max: bounds.max.max(min) },
            (None, Some(max)) => Self { min: bounds.min.min(max), max },
            (None, None) => Self::new(bounds.min, bounds.max),
        }
    }

    /// Chip label, e.g. `$10 - $250`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("${} - ${}", self.min, self.max)
    }
}

fn parse_price(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// The active filter selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub query: String,
    pub category: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub price_range: Option<PriceRange>,
    pub sort_by: SortBy,
    pub featured: Option<bool>,
}

/// A partial filter update. `None` fields are left untouched by the merge.
///
/// Optional filter fields use a nested `Option` so that a patch can also clear them:
/// `price_range: Some(None)` removes the price filter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterPatch {
    pub query: Option<String>,
    pub category: Option<BTreeSet<String>>,
    pub tags: Option<BTreeSet<String>>,
    pub price_range: Option<Option<PriceRange>>,
    pub sort_by: Option<SortBy>,
    pub featured: Option<Option<bool>>,
}

impl FilterPatch {
    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn category(category: BTreeSet<String>) -> Self {
        Self {
            category: Some(category),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn tags(tags: BTreeSet<String>) -> Self {
        Self {
            tags: Some(tags),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn price_range(range: Option<PriceRange>) -> Self {
        Self {
            price_range: Some(range),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn sort_by(sort_by: SortBy) -> Self {
        Self {
            sort_by: Some(sort_by),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn featured(featured: Option<bool>) -> Self {
        Self {
            featured: Some(featured),
            ..Self::default()
        }
    }
}

/// Removal of one active filter value, as triggered by dismissing a chip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRemoval {
    /// Drop one category from the selection.
    Category(String),
    /// Drop one tag from the selection.
    Tag(String),
    /// Clear the price range.
    PriceRange,
    /// Clear the featured flag.
    Featured,
    /// Reset ordering to relevance.
    SortBy,
}

impl FilterState {
    /// Shallow-merges `patch` into the state.
    ///
    /// Returns `true` if any field actually changed. The caller uses this to decide
    /// whether the debounced pipeline needs a new value.
    pub fn update(&mut self, patch: FilterPatch) -> bool {
        let before = self.clone();

        if let Some(query) = patch.query {
            self.query = query;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(price_range) = patch.price_range {
            self.price_range = price_range;
        }
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(featured) = patch.featured {
            self.featured = featured;
        }

        *self != before
    }

    /// Removes a single filter value. Removing something that is not set is a no-op.
    ///
    /// Returns `true` if the state changed.
    pub fn remove(&mut self, removal: &FilterRemoval) -> bool {
        match removal {
            FilterRemoval::Category(value) => self.category.remove(value),
            FilterRemoval::Tag(value) => self.tags.remove(value),
            FilterRemoval::PriceRange => self.price_range.take().is_some(),
            FilterRemoval::Featured => self.featured.take().is_some(),
            FilterRemoval::SortBy => {
                let changed = self.sort_by != SortBy::Relevance;
                self.sort_by = SortBy::Relevance;
                changed
            }
        }
    }

    /// Restores every field to its default. Returns `true` if the state changed.
    pub fn reset(&mut self) -> bool {
        let changed = *self != Self::default();
        *self = Self::default();
        changed
    }
}

/// Kind of an active filter chip, used by the renderer to pick colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipKind {
    Category,
    Tag,
    Price,
    Featured,
    Sort,
}

/// A removable token representing one active filter value.
#[derive(Debug, Clone, PartialEq)]
pub struct Chip {
    pub kind: ChipKind,
    pub label: String,
    pub removal: FilterRemoval,
}

/// Projects the filter state into its active chips.
///
/// Order: categories, tags, price, featured, sort.
#[must_use]
pub fn active_chips(filters: &FilterState) -> Vec<Chip> {
    let mut chips: Vec<Chip> = filters
        .category
        .iter()
        .map(|c| Chip {
            kind: ChipKind::Category,
            label: c.clone(),
            removal: FilterRemoval::Category(c.clone()),
        })
        .collect();

    chips.extend(filters.tags.iter().map(|t| Chip {
        kind: ChipKind::Tag,
        label: t.clone(),
        removal: FilterRemoval::Tag(t.clone()),
    }));

    if let Some(range) = &filters.price_range {
        chips.push(Chip {
            kind: ChipKind::Price,
            label: range.label(),
            removal: FilterRemoval::PriceRange,
        });
    }

    if filters.featured == Some(true) {
        chips.push(Chip {
            kind: ChipKind::Featured,
            label: "Featured".to_string(),
            removal: FilterRemoval::Featured,
        });
    }

    if filters.sort_by != SortBy::Relevance {
        chips.push(Chip {
            kind: ChipKind::Sort,
            label: filters.sort_by.label().to_string(),
            removal: FilterRemoval::SortBy,
        });
    }

    chips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::PriceBounds;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let mut filters = FilterState {
            query: "lamp".to_string(),
            tags: set(&["wood"]),
            ..Default::default()
        };

        assert!(filters.update(FilterPatch::sort_by(SortBy::Rating)));
        assert_eq!(filters.query, "lamp");
        assert_eq!(filters.tags, set(&["wood"]));
        assert_eq!(filters.sort_by, SortBy::Rating);
    }

    #[test]
    fn update_with_identical_values_reports_no_change() {
        let mut filters = FilterState::default();
        assert!(!filters.update(FilterPatch::query("")));
        assert!(!filters.update(FilterPatch::price_range(None)));
    }

    #[test]
    fn remove_of_absent_value_is_a_no_op() {
        let mut filters = FilterState {
            category: set(&["Audio"]),
            ..Default::default()
        };

        assert!(!filters.remove(&FilterRemoval::Category("Electronics".to_string())));
        assert!(!filters.remove(&FilterRemoval::Tag("missing".to_string())));
        assert!(!filters.remove(&FilterRemoval::PriceRange));
        assert!(!filters.remove(&FilterRemoval::SortBy));
        assert_eq!(filters.category, set(&["Audio"]));
    }

    #[test]
    fn remove_clears_scalars_and_resets_sort() {
        let mut filters = FilterState {
            price_range: Some(PriceRange::new(5.0, 50.0)),
            featured: Some(true),
            sort_by: SortBy::Newest,
            ..Default::default()
        };

        assert!(filters.remove(&FilterRemoval::PriceRange));
        assert!(filters.remove(&FilterRemoval::Featured));
        assert!(filters.remove(&FilterRemoval::SortBy));
        assert_eq!(filters, FilterState::default());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut filters = FilterState {
            query: "desk".to_string(),
            featured: Some(true),
            ..Default::default()
        };
        assert!(filters.reset());
        assert_eq!(filters, FilterState::default());
        assert!(!filters.reset());
    }

    #[test]
    fn price_range_swaps_inverted_bounds() {
        let range = PriceRange::new(100.0, 10.0);
        assert_eq!(range.min(), 10.0);
        assert_eq!(range.max(), 100.0);
    }

    #[test]
    fn price_inputs_fall_back_to_facet_bounds_then_zero() {
        let facets = FacetSet {
            price_range: PriceBounds { min: 3.0, max: 400.0 },
            ..Default::default()
        };

        let range = PriceRange::from_inputs("abc", "", Some(&facets));
        assert_eq!((range.min(), range.max()), (3.0, 400.0));

        let range = PriceRange::from_inputs("", "250", Some(&facets));
        assert_eq!((range.min(), range.max()), (3.0, 250.0));
    }

    #[test]
    fn typed_price_bound_keeps_its_side_past_the_fallback() {
        let facets = FacetSet {
            price_range: PriceBounds { min: 3.0, max: 300.0 },
            ..Default::default()
        };

        let range = PriceRange::from_inputs("500", "", Some(&facets));
        assert_eq!((range.min(), range.max()), (500.0, 500.0));

        let range = PriceRange::from_inputs("12.5", "", None);
        assert_eq!((range.min(), range.max()), (12.5, 12.5));

        let range = PriceRange::from_inputs("", "1", Some(&facets));
        assert_eq!((range.min(), range.max()), (1.0, 1.0));

        let range = PriceRange::from_inputs("80", "20", Some(&facets));
        assert_eq!((range.min(), range.max()), (20.0, 80.0));
    }

    #[test]
    fn chips_cover_every_active_filter_in_order() {
        let filters = FilterState {
            query: "ignored".to_string(),
            category: set(&["Audio", "Electronics"]),
            tags: set(&["wireless"]),
            price_range: Some(PriceRange::new(10.0, 99.5)),
            sort_by: SortBy::PriceAsc,
            featured: Some(true),
        };

        let chips = active_chips(&filters);
        let labels: Vec<&str> = chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Audio", "Electronics", "wireless", "$10 - $99.5", "Featured", "Price: Low to High"]
        );
        assert_eq!(chips[2].removal, FilterRemoval::Tag("wireless".to_string()));
    }

    #[test]
    fn chips_skip_defaults_and_featured_false() {
        let filters = FilterState {
            featured: Some(false),
            ..Default::default()
        };
        assert!(active_chips(&filters).is_empty());
    }

    #[test]
    fn sort_cycles_in_both_directions() {
        assert_eq!(SortBy::Newest.next(), SortBy::Relevance);
        assert_eq!(SortBy::Relevance.previous(), SortBy::Newest);
        assert_eq!(SortBy::PriceAsc.as_str(), "price-asc");
    }
}
