//! Thread-safe in-memory entry store.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::registry::{
    domain::{AlgorithmEntry, AlgorithmName, Category},
    ports::{EntryStore, EntryStoreError, EntryStoreResult},
};

/// Process-wide in-memory entry store.
///
/// Shared-read / exclusive-write discipline via [`RwLock`]; every mutating
/// operation completes under a single write guard, so readers never observe
/// a half-applied batch. Registration order is tracked with a monotonic
/// sequence number per entry.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEntryStore {
    state: Arc<RwLock<EntryStoreState>>,
}

#[derive(Debug, Default)]
struct EntryStoreState {
    entries: HashMap<EntryKey, StoredEntry>,
    next_seq: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct EntryKey {
    category: Category,
    name: AlgorithmName,
}

#[derive(Debug)]
struct StoredEntry {
    entry: AlgorithmEntry,
    seq: u64,
}

impl InMemoryEntryStore {
    /// Creates an empty in-memory entry store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn key_of(entry: &AlgorithmEntry) -> EntryKey {
    EntryKey {
        category: entry.category(),
        name: entry.name().clone(),
    }
}

fn duplicate(key: EntryKey) -> EntryStoreError {
    EntryStoreError::DuplicateKey {
        category: key.category,
        name: key.name,
    }
}

#[async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn load(&self, entries: Vec<AlgorithmEntry>) -> EntryStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| EntryStoreError::storage(std::io::Error::other(err.to_string())))?;

        // All checks run before any mutation so a failed batch commits
        // nothing.
        let mut batch_keys = HashSet::new();
        for entry in &entries {
            entry.validate()?;
            let key = key_of(entry);
            if state.entries.contains_key(&key) || !batch_keys.insert(key.clone()) {
                return Err(duplicate(key));
            }
        }

        for entry in entries {
            let key = key_of(&entry);
            let seq = state.next_seq;
            state.next_seq += 1;
            state.entries.insert(key, StoredEntry { entry, seq });
        }
        Ok(())
    }

    async fn register(&self, entry: AlgorithmEntry, overwrite: bool) -> EntryStoreResult<()> {
        entry.validate()?;
        let key = key_of(&entry);

        let mut state = self
            .state
            .write()
            .map_err(|err| EntryStoreError::storage(std::io::Error::other(err.to_string())))?;

        let existing_seq = match state.entries.get(&key) {
            Some(_) if !overwrite => return Err(duplicate(key)),
            Some(existing) => Some(existing.seq),
            None => None,
        };

        // A replacement keeps the original slot in registration order.
        let seq = existing_seq.unwrap_or_else(|| {
            let next = state.next_seq;
            state.next_seq += 1;
            next
        });
        state.entries.insert(key, StoredEntry { entry, seq });
        Ok(())
    }

    async fn unregister(&self, category: Category, name: &AlgorithmName) -> EntryStoreResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| EntryStoreError::storage(std::io::Error::other(err.to_string())))?;

        let key = EntryKey {
            category,
            name: name.clone(),
        };
        state
            .entries
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| EntryStoreError::NotFound {
                category,
                name: name.clone(),
            })
    }

    async fn lookup(
        &self,
        category: Category,
        name: &AlgorithmName,
    ) -> EntryStoreResult<Option<AlgorithmEntry>> {
        let state = self
            .state
            .read()
            .map_err(|err| EntryStoreError::storage(std::io::Error::other(err.to_string())))?;

        let key = EntryKey {
            category,
            name: name.clone(),
        };
        Ok(state.entries.get(&key).map(|stored| stored.entry.clone()))
    }

    async fn list_by_category(
        &self,
        category: Category,
    ) -> EntryStoreResult<Vec<AlgorithmEntry>> {
        let state = self
            .state
            .read()
            .map_err(|err| EntryStoreError::storage(std::io::Error::other(err.to_string())))?;

        let mut ordered: Vec<(u64, AlgorithmEntry)> = state
            .entries
            .values()
            .filter(|stored| stored.entry.category() == category)
            .map(|stored| (stored.seq, stored.entry.clone()))
            .collect();
        ordered.sort_by_key(|(seq, _)| *seq);
        Ok(ordered.into_iter().map(|(_, entry)| entry).collect())
    }
}
