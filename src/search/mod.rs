//! Search pipeline: debouncing, query building, request correlation and sessions.
//!
//! # Organization
//!
//! - [`debounce`]: Deadline-based debouncer usable with uncancellable timers
//! - [`query`]: Filter state to endpoint query parameters
//! - [`response`]: Response decoding and the web request context
//! - [`session`]: Generic debounced paged search with epoch guarding
//! - [`overlay`]: The command overlay built on a second session

pub mod debounce;
pub mod overlay;
pub mod query;
pub mod response;
pub mod session;

pub use debounce::{Debouncer, Poll};
pub use overlay::{CommandOverlay, OverlayEntry, OverlayResults};
pub use query::{build_params, QueryParams, PAGE_SIZE};
pub use response::{decode, RequestContext, SearchChannel, SearchResponse};
pub use session::{Applied, PagedSearch, ResultShape, SearchRequest, SearchStatus, Tick};
