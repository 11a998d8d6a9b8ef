//! Wire format of the search endpoint and request correlation.
//!
//! Zellij delivers web request results as a separate event, so every request carries a
//! context map identifying the channel and epoch it was issued for. [`RequestContext`]
//! converts between that map and a typed value.

use crate::domain::error::{Result, SwipecartError};
use crate::domain::{FacetSet, Item};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Decoded body of a successful search response.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub facets: FacetSet,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Turns a raw web request result into a [`SearchResponse`].
///
/// # Errors
///
/// - [`SwipecartError::Http`] for any status outside `200..300`
/// - [`SwipecartError::Decode`] if the body is not a valid search response
pub fn decode(status: u16, body: &[u8]) -> Result<SearchResponse> {
    if !(200..300).contains(&status) {
        return Err(SwipecartError::Http { status });
    }
    Ok(serde_json::from_slice(body)?)
}

/// Which search session a request belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchChannel {
    Main,
    Overlay,
}

impl SearchChannel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Overlay => "overlay",
        }
    }
}

impl fmt::Display for SearchChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchChannel {
    type Err = SwipecartError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "main" => Ok(Self::Main),
            "overlay" => Ok(Self::Overlay),
            other => Err(SwipecartError::Context(format!("unknown channel '{other}'"))),
        }
    }
}

const CHANNEL_KEY: &str = "channel";
const EPOCH_KEY: &str = "epoch";

/// Identity of an issued request, round-tripped through the web request context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    pub channel: SearchChannel,
    pub epoch: u64,
}

impl RequestContext {
    #[must_use]
    pub fn to_map(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (CHANNEL_KEY.to_string(), self.channel.to_string()),
            (EPOCH_KEY.to_string(), self.epoch.to_string()),
        ])
    }

    /// Reads the context back from a web request result.
    ///
    /// # Errors
    ///
    /// Returns [`SwipecartError::Context`] if either entry is missing or malformed.
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let channel = map
            .get(CHANNEL_KEY)
            .ok_or_else(|| SwipecartError::Context("missing channel".to_string()))?
            .parse()?;
        let epoch = map
            .get(EPOCH_KEY)
            .ok_or_else(|| SwipecartError::Context("missing epoch".to_string()))?
            .parse::<u64>()
            .map_err(|e| SwipecartError::Context(format!("invalid epoch: {e}")))?;
        Ok(Self { channel, epoch })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_full_response() {
        let body = br#"{
            "items": [{"id": "1", "title": "Studio Headphones", "price": 129.0, "category": "Audio"}],
            "total": 14,
            "facets": {
                "categories": [{"name": "Audio", "count": 14}],
                "tags": [{"name": "wireless", "count": 6}],
                "priceRange": {"min": 19.0, "max": 349.0}
            },
            "suggestions": ["headphones wireless"]
        }"#;

        let response = decode(200, body).unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.total, 14);
        assert_eq!(response.facets.price_range.max, 349.0);
        assert_eq!(response.suggestions, vec!["headphones wireless"]);
    }

    #[test]
    fn non_success_status_is_an_http_error() {
        let err = decode(502, b"{}").unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch (HTTP 502)");
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        assert!(matches!(decode(200, b"<html>"), Err(SwipecartError::Decode(_))));
    }

    #[test]
    fn context_survives_the_map() {
        let ctx = RequestContext {
            channel: SearchChannel::Overlay,
            epoch: 42,
        };
        assert_eq!(RequestContext::from_map(&ctx.to_map()).unwrap(), ctx);
    }

    #[test]
    fn context_rejects_missing_or_bad_entries() {
        let mut map = BTreeMap::new();
        assert!(RequestContext::from_map(&map).is_err());

        map.insert("channel".to_string(), "main".to_string());
        map.insert("epoch".to_string(), "soon".to_string());
        assert!(matches!(
            RequestContext::from_map(&map),
            Err(SwipecartError::Context(_))
        ));
    }
}
