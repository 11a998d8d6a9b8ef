//! Query builder for the search endpoint.
//!
//! [`build_params`] turns the applied filters, a page number and the currently known
//! facets into an ordered list of query parameters. It is total: malformed input is
//! coerced, never rejected.
//!
//! # Parameter order
//!
//! `query`, `category`, `tags`, `sortBy`, `minPrice`, `maxPrice`, `featured`, `page`,
//! `limit`. Optional parameters are left out entirely rather than sent empty.
//!
//! # Example
//!
//! ```
//! use swipecart::domain::FilterState;
//! use swipecart::search::query::{build_params, PAGE_SIZE};
//!
//! let filters = FilterState { query: "headphones".to_string(), ..Default::default() };
//! let params = build_params(&filters, 1, PAGE_SIZE, None);
//! assert_eq!(
//!     params.to_query_string(),
//!     "query=headphones&sortBy=relevance&page=1&limit=9"
//! );
//! ```

use crate::domain::{FacetSet, FilterState, PriceRange};
use url::Url;

/// Page size of the main result grid.
pub const PAGE_SIZE: u32 = 9;

/// Ordered key/value pairs for one search request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    fn push(&mut self, key: &'static str, value: impl Into<String>) {
        self.pairs.push((key, value.into()));
    }

    /// Value of the first parameter named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Parameter names in request order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.pairs.iter().map(|(k, _)| *k)
    }

    /// Form-url-encodes the parameters (`application/x-www-form-urlencoded`).
    #[must_use]
    pub fn to_query_string(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }

    /// Returns `endpoint` with its query replaced by these parameters.
    #[must_use]
    pub fn apply_to(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        url.set_query(Some(&self.to_query_string()));
        url
    }
}

/// Builds the request parameters for `filters` at `page`.
///
/// # Parameters
///
/// * `filters` - Applied (debounced) filter snapshot
/// * `page` - 1-based page number; `0` is treated as `1`
/// * `page_size` - Value of the `limit` parameter
/// * `facets` - Facets from the last successful response, if any
///
/// # Returns
///
/// The ordered parameter list. `category` is left out when the selection covers every
/// known category, since selecting everything is the same as selecting nothing.
#[must_use]
pub fn build_params(
    filters: &FilterState,
    page: u32,
    page_size: u32,
    facets: Option<&FacetSet>,
) -> QueryParams {
    let mut params = QueryParams::default();

    if !filters.query.is_empty() {
        params.push("query", filters.query.as_str());
    }

    let all_selected = facets.is_some_and(|f| {
        !f.categories.is_empty() && f.category_names() == filters.category
    });
    if !filters.category.is_empty() && !all_selected {
        params.push("category", join(&filters.category));
    }

    if !filters.tags.is_empty() {
        params.push("tags", join(&filters.tags));
    }

    params.push("sortBy", filters.sort_by.as_str());

    if let Some(range) = &filters.price_range {
        let range = coerce_price_range(range, facets);
        params.push("minPrice", range.min().to_string());
        params.push("maxPrice", range.max().to_string());
    }

    if filters.featured == Some(true) {
        params.push("featured", "true");
    }

    params.push("page", page.max(1).to_string());
    params.push("limit", page_size.to_string());

    params
}

fn join<'a>(values: impl IntoIterator<Item = &'a String>) -> String {
    values
        .into_iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(",")
}

fn coerce_price_range(range: &PriceRange, facets: Option<&FacetSet>) -> PriceRange {
    let bounds = facets.map(|f| f.price_range).unwrap_or_default();
    let pick = |value: f64, fallback: f64| {
        if value.is_finite() {
            value
        } else if fallback.is_finite() {
            fallback
        } else {
            0.0
        }
    };
    PriceRange::new(pick(range.min(), bounds.min), pick(range.max(), bounds.max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FacetCount, PriceBounds, SortBy};
    use std::collections::BTreeSet;

    fn facets(categories: &[&str]) -> FacetSet {
        FacetSet {
            categories: categories
                .iter()
                .map(|name| FacetCount {
                    name: (*name).to_string(),
                    count: 3,
                })
                .collect(),
            tags: vec![],
            price_range: PriceBounds { min: 5.0, max: 500.0 },
        }
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn headphones_query_emits_only_required_parameters() {
        let filters = FilterState {
            query: "headphones".to_string(),
            ..Default::default()
        };

        let params = build_params(&filters, 1, PAGE_SIZE, None);

        assert_eq!(
            params.to_query_string(),
            "query=headphones&sortBy=relevance&page=1&limit=9"
        );
    }

    #[test]
    fn category_is_sent_only_for_a_strict_subset() {
        let known = facets(&["Electronics", "Audio"]);
        let mut filters = FilterState {
            category: set(&["Electronics"]),
            ..Default::default()
        };

        let params = build_params(&filters, 1, PAGE_SIZE, Some(&known));
        assert_eq!(params.get("category"), Some("Electronics"));

        filters.category = set(&["Electronics", "Audio"]);
        let params = build_params(&filters, 1, PAGE_SIZE, Some(&known));
        assert!(!params.contains("category"));

        filters.category.clear();
        let params = build_params(&filters, 1, PAGE_SIZE, Some(&known));
        assert!(!params.contains("category"));
    }

    #[test]
    fn category_without_known_facets_is_sent() {
        let filters = FilterState {
            category: set(&["Audio", "Electronics"]),
            ..Default::default()
        };
        let params = build_params(&filters, 1, PAGE_SIZE, None);
        assert_eq!(params.get("category"), Some("Audio,Electronics"));
    }

    #[test]
    fn parameters_follow_the_documented_order() {
        let filters = FilterState {
            query: "desk lamp".to_string(),
            category: set(&["Home"]),
            tags: set(&["led", "wood"]),
            price_range: Some(PriceRange::new(10.0, 80.5)),
            sort_by: SortBy::PriceDesc,
            featured: Some(true),
        };

        let params = build_params(&filters, 3, PAGE_SIZE, Some(&facets(&["Home", "Office"])));
        let keys: Vec<&str> = params.keys().collect();

        assert_eq!(
            keys,
            vec!["query", "category", "tags", "sortBy", "minPrice", "maxPrice", "featured", "page", "limit"]
        );
        assert_eq!(
            params.to_query_string(),
            "query=desk+lamp&category=Home&tags=led%2Cwood&sortBy=price-desc&minPrice=10&maxPrice=80.5&featured=true&page=3&limit=9"
        );
    }

    #[test]
    fn featured_false_is_not_sent() {
        let filters = FilterState {
            featured: Some(false),
            ..Default::default()
        };
        assert!(!build_params(&filters, 1, PAGE_SIZE, None).contains("featured"));
    }

    #[test]
    fn page_zero_is_coerced_to_one() {
        let params = build_params(&FilterState::default(), 0, PAGE_SIZE, None);
        assert_eq!(params.get("page"), Some("1"));
    }

    #[test]
    fn non_finite_prices_fall_back_to_facets_then_zero() {
        let filters = FilterState {
            price_range: Some(PriceRange::new(f64::NAN, 40.0)),
            ..Default::default()
        };

        let params = build_params(&filters, 1, PAGE_SIZE, Some(&facets(&[])));
        assert_eq!(params.get("minPrice"), Some("5"));
        assert_eq!(params.get("maxPrice"), Some("40"));

        let params = build_params(&filters, 1, PAGE_SIZE, None);
        assert_eq!(params.get("minPrice"), Some("0"));
    }

    #[test]
    fn apply_to_replaces_endpoint_query() {
        let endpoint = Url::parse("http://localhost:3000/api/search?stale=1").unwrap();
        let params = build_params(&FilterState::default(), 2, 8, None);

        let url = params.apply_to(&endpoint);

        assert_eq!(
            url.as_str(),
            "http://localhost:3000/api/search?sortBy=relevance&page=2&limit=8"
        );
    }
}
