//! Saved items: an insertion-ordered wishlist unique by item id.
//!
//! The list outlives result sets. It lives only in memory; reloading the plugin
//! starts with an empty list.

use crate::domain::Item;

const SECONDS_PER_MINUTE: i64 = 60;
const SECONDS_PER_HOUR: i64 = 3600;
const SECONDS_PER_DAY: i64 = 86_400;

/// A saved item together with the Unix timestamp it was saved at.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedItem {
    pub item: Item,
    pub saved_at: i64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SavedItems {
    entries: Vec<SavedItem>,
}

impl SavedItems {
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.item.id == id)
    }

    /// Appends `item` unless an item with the same id is already saved.
    ///
    /// Returns `true` if it was inserted.
    pub fn insert(&mut self, item: &Item, now: i64) -> bool {
        if self.contains(&item.id) {
            return false;
        }
        self.entries.push(SavedItem {
            item: item.clone(),
            saved_at: now,
        });
        true
    }

    /// Removes the item with `id`, keeping the order of the others.
    pub fn remove(&mut self, id: &str) -> Option<SavedItem> {
        let idx = self.entries.iter().position(|e| e.item.id == id)?;
        Some(self.entries.remove(idx))
    }

    /// Saves `item` if absent, unsaves it otherwise. Returns whether it is now saved.
    pub fn toggle(&mut self, item: &Item, now: i64) -> bool {
        if self.remove(&item.id).is_some() {
            false
        } else {
            self.insert(item, now)
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedItem> {
        self.entries.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SavedItem> {
        self.entries.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Short relative age such as `just now`, `5m ago`, `3h ago` or `2d ago`.
#[must_use]
pub fn time_ago(then: i64, now: i64) -> String {
    let age = (now - then).max(0);
    if age < SECONDS_PER_MINUTE {
        "just now".to_string()
    } else if age < SECONDS_PER_HOUR {
        format!("{}m ago", age / SECONDS_PER_MINUTE)
    } else if age < SECONDS_PER_DAY {
        format!("{}h ago", age / SECONDS_PER_HOUR)
    } else {
        format!("{}d ago", age / SECONDS_PER_DAY)
    }
}
