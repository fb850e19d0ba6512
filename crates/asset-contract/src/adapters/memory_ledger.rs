//! In-memory world-state adapter.
//!
//! An ordered map under a lock, standing in for the replicated ledger in
//! tests and in-process gateways. `BTreeMap` keeps keys lexicographically
//! ordered, which the range-scan port requires.

use crate::errors::LedgerError;
use crate::ports::outbound::{KvEntry, RangeScan, StateIterator, WorldState};
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::RwLock;

/// In-memory implementation of [`WorldState`].
pub struct InMemoryWorldState {
    entries: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryWorldState {
    /// Create an empty world state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of entries currently stored.
    pub fn len(&self) -> Result<usize, LedgerError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| LedgerError::Io("lock poisoned".to_string()))?;
        Ok(entries.len())
    }

    /// Whether the store holds no entries.
    pub fn is_empty(&self) -> Result<bool, LedgerError> {
        Ok(self.len()? == 0)
    }
}

impl Default for InMemoryWorldState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldState for InMemoryWorldState {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| LedgerError::Io("lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| LedgerError::Io("lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), LedgerError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| LedgerError::Io("lock poisoned".to_string()))?;
        entries.remove(key);
        Ok(())
    }

    fn range_scan(&self, start_key: &str, end_key: &str) -> Result<RangeScan, LedgerError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| LedgerError::Io("lock poisoned".to_string()))?;

        // Snapshot the range so the scan stays stable under concurrent
        // writes, matching a committed-state read.
        let lower: Bound<&str> = if start_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start_key)
        };
        let upper: Bound<&str> = if end_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end_key)
        };

        let snapshot: Vec<KvEntry> = entries
            .range::<str, _>((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(RangeScan::new(Box::new(SnapshotIterator {
            entries: snapshot.into_iter(),
        })))
    }
}

/// Cursor over a materialized snapshot of a key range.
struct SnapshotIterator {
    entries: std::vec::IntoIter<KvEntry>,
}

impl StateIterator for SnapshotIterator {
    fn next_entry(&mut self) -> Result<Option<KvEntry>, LedgerError> {
        Ok(self.entries.next())
    }

    fn close(&mut self) -> Result<(), LedgerError> {
        // Snapshot is plain memory; closing just drops the remainder.
        self.entries = Vec::new().into_iter();
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
