//! Swipe session over the current result set.
//!
//! The session walks the result items with a cursor. Every decision moves the current
//! item into exactly one of `liked` or `skipped` and advances the cursor, so at any
//! point `liked + skipped + remaining == items.len()`. Accepting also saves the item.
//! Saving is otherwise an independent toggle that does not touch the cursor.

use crate::domain::Item;
use crate::swipe::saved::SavedItems;

/// A swipe decision on the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

#[derive(Debug, Clone, Default)]
pub struct SwipeSession {
    cursor: usize,
    liked: Vec<Item>,
    skipped: Vec<Item>,
    saved: SavedItems,
}

impl SwipeSession {
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn liked(&self) -> &[Item] {
        &self.liked
    }

    #[must_use]
    pub fn skipped(&self) -> &[Item] {
        &self.skipped
    }

    #[must_use]
    pub const fn saved(&self) -> &SavedItems {
        &self.saved
    }

    /// The card under the cursor, `None` once the queue is exhausted.
    #[must_use]
    pub fn current<'a>(&self, items: &'a [Item]) -> Option<&'a Item> {
        items.get(self.cursor)
    }

    #[must_use]
    pub fn is_exhausted(&self, items: &[Item]) -> bool {
        self.cursor >= items.len()
    }

    #[must_use]
    pub fn remaining(&self, items: &[Item]) -> usize {
        items.len().saturating_sub(self.cursor)
    }

    /// Applies `decision` to the current card and advances.
    ///
    /// Returns the decided item, or `None` when the queue is exhausted.
    pub fn decide<'a>(&mut self, decision: Decision, items: &'a [Item], now: i64) -> Option<&'a Item> {
        let item = items.get(self.cursor)?;
        match decision {
            Decision::Accept => {
                self.liked.push(item.clone());
                self.saved.insert(item, now);
            }
            Decision::Reject => self.skipped.push(item.clone()),
        }
        self.cursor += 1;

        tracing::debug!(
            item_id = %item.id,
            decision = ?decision,
            cursor = self.cursor,
            "swipe decision"
        );
        Some(item)
    }

    /// Saves or unsaves `item`. Returns whether it is now saved.
    pub fn toggle_save(&mut self, item: &Item, now: i64) -> bool {
        self.saved.toggle(item, now)
    }

    /// Removes a saved item by id.
    pub fn unsave(&mut self, id: &str) -> bool {
        self.saved.remove(id).is_some()
    }

    /// Starts the current result set over, keeping saved items.
    pub fn restart(&mut self) {
        self.cursor = 0;
        self.liked.clear();
        self.skipped.clear();
    }

    /// Called whenever a new result set replaces the old one.
    pub fn reset_for_new_results(&mut self) {
        self.restart();
    }
}
