//! Swipe session: one card at a time with accept, reject and save.
//!
//! - [`queue`]: Cursor and decision buckets over the current results
//! - [`saved`]: The saved-items wishlist

pub mod queue;
pub mod saved;

pub use queue::{Decision, SwipeSession};
pub use saved::{time_ago, SavedItem, SavedItems};
