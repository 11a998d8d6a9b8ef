//! Catalog item, facet and result page models.
//!
//! These types are read-only snapshots of what the search endpoint returned. The
//! core never mutates them in place: a new response replaces them wholesale.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use url::Url;

const WEB_SEARCH_URL: &str = "https://www.google.com/search";

/// A catalog item as returned by the search endpoint.
///
/// Identity is [`Item::id`]; two items with the same id are the same product even if
/// other fields differ between responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Item {
    /// Formats the price the way cards display it (`$12.50`).
    #[must_use]
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Web search for this item by title and category, offered as "View more".
    #[must_use]
    pub fn web_search_url(&self) -> Option<Url> {
        let terms = format!("{} {}", self.title, self.category);
        Url::parse_with_params(WEB_SEARCH_URL, &[("q", terms.trim())]).ok()
    }
}

/// One facet value with the number of matching items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub name: String,
    #[serde(default)]
    pub count: u64,
}

/// Price bounds of the current catalog slice as computed by the server.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceBounds {
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
}

/// Server-derived facet snapshot used to populate the filter panel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetSet {
    #[serde(default)]
    pub categories: Vec<FacetCount>,
    #[serde(default)]
    pub tags: Vec<FacetCount>,
    #[serde(default)]
    pub price_range: PriceBounds,
}

impl FacetSet {
    /// Names of every category the server currently knows about.
    #[must_use]
    pub fn category_names(&self) -> BTreeSet<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }
}

/// One page of search results.
///
/// `items` keeps server ordering. A page is never merged with another page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultPage {
    pub items: Vec<Item>,
    pub total: u64,
    pub page: u32,
    pub suggestions: Vec<String>,
}

impl ResultPage {
    /// Number of pages needed to show `total` items at `page_size` per page.
    ///
    /// Always at least 1 so that "page 1 of 1" is shown for empty results.
    #[must_use]
    pub fn page_count(&self, page_size: u32) -> u32 {
        if page_size == 0 {
            return 1;
        }
        let size = u64::from(page_size);
        let pages = self.total / size + u64::from(self.total % size != 0);
        u32::try_from(pages.max(1)).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_decodes_camel_case_with_missing_optionals() {
        let json = r#"{"id":"p1","title":"Wireless Mouse","price":19.5,"imageUrl":"https://cdn.example.com/m.png","tags":["usb","office","usb"]}"#;
        let item: Item = serde_json::from_str(json).unwrap();

        assert_eq!(item.id, "p1");
        assert_eq!(item.image_url.as_deref(), Some("https://cdn.example.com/m.png"));
        assert_eq!(item.tags.len(), 2);
        assert!(item.description.is_empty());
        assert!(!item.featured);
        assert_eq!(item.price_label(), "$19.50");
    }

    #[test]
    fn web_search_url_encodes_title_and_category() {
        let item: Item = serde_json::from_str(r#"{"id":"p2","title":"Desk Lamp & Shade","category":"Home"}"#).unwrap();
        let url = item.web_search_url().unwrap();
        assert_eq!(url.as_str(), "https://www.google.com/search?q=Desk+Lamp+%26+Shade+Home");
    }

    #[test]
    fn page_count_rounds_up_and_never_returns_zero() {
        let mut page = ResultPage { total: 19, ..Default::default() };
        assert_eq!(page.page_count(9), 3);

        page.total = 18;
        assert_eq!(page.page_count(9), 2);

        page.total = 0;
        assert_eq!(page.page_count(9), 1);
    }

    #[test]
    fn page_count_survives_huge_totals() {
        let page = ResultPage { total: u64::MAX, ..Default::default() };
        assert_eq!(page.page_count(1), u32::MAX);

        let page = ResultPage { total: u64::MAX - 1, ..Default::default() };
        assert_eq!(page.page_count(9), u32::MAX);

        let page = ResultPage { total: u64::from(u32::MAX) * 9 - 1, ..Default::default() };
        assert_eq!(page.page_count(9), u32::MAX);
    }
}
