//! Cache Entry Module
//!
//! Defines the record stored per key: raw response bytes plus the instant
//! they were inserted.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A stored value plus its insertion timestamp.
///
/// Entries are immutable once created; overwriting a key replaces the
/// whole entry, timestamp included.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// When the entry was inserted
    pub created_at: Instant,
    /// The raw, unparsed bytes handed to `add`
    pub value: Vec<u8>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry holding `value`, timestamped now.
    pub fn new(value: Vec<u8>) -> Self {
        Self {
            created_at: Instant::now(),
            value,
        }
    }

    // == Age ==
    /// Time elapsed since the entry was inserted.
    #[allow(dead_code)]
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }

    // == Is Stale ==
    /// Checks whether the entry is strictly older than `interval` as of
    /// `now`.
    ///
    /// Boundary condition: an entry whose age is exactly `interval` is
    /// not stale. Taking `now` as an argument lets a reap pass judge
    /// every entry against a single cutoff instant.
    pub fn is_stale(&self, now: Instant, interval: Duration) -> bool {
        now.duration_since(self.created_at) > interval
    }
}
