//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the record manager depends on. External adapters implement
//! these traits to provide the replicated key-value world state.
//!
//! The world state holds the latest agreed value of every key. This crate
//! only consumes it; ordering, validation, and replication of writes belong
//! to the external ledger engine.

use crate::errors::LedgerError;

/// A key/value entry produced by a range scan.
pub type KvEntry = (String, Vec<u8>);

// =============================================================================
// WORLD STATE
// =============================================================================

/// Interface to the replicated key-value world state.
///
/// ## Implementation Notes
///
/// The adapter implementing this trait should:
/// 1. Treat values as opaque bytes; no schema is enforced at this layer
/// 2. Serve `get` from the most recent locally committed state
/// 3. Iterate `range_scan` in lexicographic key order
///
/// `delete` of an absent key is a no-op; callers check existence first.
pub trait WorldState: Send + Sync {
    /// Get the value stored under `key`.
    ///
    /// # Returns
    ///
    /// * `Some(bytes)` - If the key is present
    /// * `None` - If the key is absent (absence is never a sentinel value)
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, LedgerError>;

    /// Store `value` under `key`, replacing any previous value entirely.
    fn put(&self, key: &str, value: Vec<u8>) -> Result<(), LedgerError>;

    /// Remove the entry under `key`. No-op if the key is absent.
    fn delete(&self, key: &str) -> Result<(), LedgerError>;

    /// Open an ordered scan over `[start_key, end_key)`.
    ///
    /// An empty `start_key`/`end_key` pair denotes an open-ended scan of
    /// the whole namespace. The returned [`RangeScan`] owns a live
    /// iterator resource and must be released; release is guaranteed on
    /// drop.
    fn range_scan(&self, start_key: &str, end_key: &str) -> Result<RangeScan, LedgerError>;
}

// =============================================================================
// RANGE SCAN
// =============================================================================

/// Backend-side cursor over a key range.
///
/// Implementations are free to hold snapshots, file handles, or remote
/// cursors; `close` releases whatever is held and must be idempotent.
pub trait StateIterator: Send {
    /// Advance the cursor.
    ///
    /// # Returns
    ///
    /// * `Some((key, value))` - The next entry in key order
    /// * `None` - The scan is exhausted
    fn next_entry(&mut self) -> Result<Option<KvEntry>, LedgerError>;

    /// Release the underlying resource. Idempotent.
    fn close(&mut self) -> Result<(), LedgerError>;
}

/// Guard over a [`StateIterator`] guaranteeing release on every exit path.
///
/// Dropping the guard closes the iterator, so early returns and error
/// propagation mid-scan cannot leak the resource. Explicit [`close`] is
/// available for callers that want to surface release failures.
///
/// [`close`]: RangeScan::close
pub struct RangeScan {
    inner: Box<dyn StateIterator>,
    closed: bool,
}

impl RangeScan {
    /// Wraps a backend cursor in a release-on-drop guard.
    #[must_use]
    pub fn new(inner: Box<dyn StateIterator>) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    /// Advance the scan.
    ///
    /// Fails with [`LedgerError::IteratorClosed`] after [`close`].
    ///
    /// [`close`]: RangeScan::close
    pub fn next_entry(&mut self) -> Result<Option<KvEntry>, LedgerError> {
        if self.closed {
            return Err(LedgerError::IteratorClosed);
        }
        self.inner.next_entry()
    }

    /// Release the scan. Idempotent.
    pub fn close(&mut self) -> Result<(), LedgerError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        self.inner.close()
    }
}

impl Drop for RangeScan {
    fn drop(&mut self) {
        // Release failure has no caller to report to on this path.
        let _ = self.close();
    }
}

impl std::fmt::Debug for RangeScan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeScan")
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// TESTS
// =============================================================================
