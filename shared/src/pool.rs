use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable identity of a pool slot. Never reused within one pool, so two
/// entries sharing a label stay distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("entry id {0} appears more than once")]
    DuplicateId(u64),
}

/// Ordered candidates. An entry's position decides its slice on the wheel.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "PoolRecord")]
pub struct Pool {
    entries: Vec<Entry>,
    next_id: u64,
}

// Wire shape of a pool; checked before it becomes a `Pool`.
#[derive(Deserialize)]
struct PoolRecord {
    entries: Vec<Entry>,
    #[serde(default)]
    next_id: u64,
}

impl TryFrom<PoolRecord> for Pool {
    type Error = PoolError;

    fn try_from(record: PoolRecord) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(record.entries.len());
        for entry in &record.entries {
            if !seen.insert(entry.id) {
                return Err(PoolError::DuplicateId(entry.id.0));
            }
        }
        let after_last = record.entries.iter().map(|entry| entry.id.0 + 1).max().unwrap_or(0);
        Ok(Self {
            entries: record.entries,
            next_id: record.next_id.max(after_last),
        })
    }
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut pool = Self::new();
        pool.extend(labels);
        pool
    }

    /// Appends a label as-is and returns the id of the new slot.
    pub fn push(&mut self, label: impl Into<String>) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            label: label.into(),
        });
        id
    }

    pub fn extend<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for label in labels {
            self.push(label);
        }
    }

    /// Removes exactly the slot with `id`, leaving same-label slots alone.
    pub fn remove(&mut self, id: EntryId) -> Option<Entry> {
        let position = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(position))
    }

    /// Swaps the contents for `labels`. Ids keep counting up.
    pub fn replace<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries.clear();
        self.extend(labels);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.label.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a Pool {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
