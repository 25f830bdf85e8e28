// Permission Table
// Maps operation selectors to lock expiry timestamps.
//
// Lock state is never stored as a flag: a selector is locked iff its
// stored expiry lies strictly in the future, resolved lazily against the
// clock on every read. Expired entries are inert; they are left in
// place until overwritten by a new lock or removed by an explicit
// unlock.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::selector::Selector;
use crate::time::TimestampSeconds;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionTable {
    entries: IndexMap<Selector, TimestampSeconds>,
}

impl PermissionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored expiry for a selector, whether or not it has passed
    pub fn expiry_of(&self, selector: &Selector) -> Option<TimestampSeconds> {
        self.entries.get(selector).copied()
    }

    /// True iff a stored expiry exists and lies strictly in the future
    pub fn is_locked(&self, selector: &Selector, now: TimestampSeconds) -> bool {
        match self.entries.get(selector) {
            Some(expires_at) => *expires_at > now,
            None => false,
        }
    }

    /// Set the expiry for a selector, overwriting any existing entry
    pub fn set(&mut self, selector: Selector, expires_at: TimestampSeconds) {
        self.entries.insert(selector, expires_at);
    }

    /// Remove the entry for a selector, returning its stored expiry
    pub fn clear(&mut self, selector: &Selector) -> Option<TimestampSeconds> {
        self.entries.shift_remove(selector)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All stored entries, including expired ones
    pub fn iter(&self) -> impl Iterator<Item = (&Selector, &TimestampSeconds)> {
        self.entries.iter()
    }
}
