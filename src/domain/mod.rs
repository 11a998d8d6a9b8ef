//! Domain layer for the Swipecart plugin.
//!
//! This module contains the catalog and filter types, independent of Zellij APIs.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Catalog items, facets and result pages
//! - [`filters`]: Filter state, partial updates, removals and chips
//!
//! # Examples
//!
//! ```
//! use swipecart::domain::{FilterPatch, FilterState, SortBy};
//!
//! let mut filters = FilterState::default();
//! assert!(filters.update(FilterPatch::sort_by(SortBy::Rating)));
//! ```

pub mod error;
pub mod filters;
pub mod item;

pub use error::{Result, SwipecartError};
pub use filters::{active_chips, Chip, ChipKind, FilterPatch, FilterRemoval, FilterState, PriceRange, SortBy};
pub use item::{FacetCount, FacetSet, Item, PriceBounds, ResultPage};
