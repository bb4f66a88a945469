//! Timed Cache Module
//!
//! The cache engine: a locked key/value map with a background reaper task
//! that periodically evicts entries older than the configured interval.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::{watch, Mutex};
use tracing::{debug, info};

use crate::cache::CacheEntry;
use crate::error::{PokedexError, Result};

/// Shared entry map, locked for every read and write.
type Entries = Arc<Mutex<HashMap<String, CacheEntry>>>;

// == Timed Cache ==
/// Thread-safe byte cache with age-based expiry.
///
/// Every entry records its insertion instant. A background reaper task,
/// started by the constructor and owned by the cache, wakes once per
/// `interval` and removes entries strictly older than `interval`. Reads
/// never check age, so a caller can observe an entry up to twice the
/// interval old in the worst case; in exchange, `get` is a single lock
/// acquisition and lookup regardless of entry age.
///
/// Cloning is cheap; clones share the same entries and reaper. Multiple
/// independent caches coexist without interference, each with its own
/// reaper.
#[derive(Debug, Clone)]
pub struct TimedCache {
    entries: Entries,
    interval: Duration,
    shutdown: watch::Sender<bool>,
}

impl TimedCache {
    // == Constructor ==
    /// Creates an empty cache bound to `interval` and starts its reaper.
    ///
    /// `interval` is both the reap period and the staleness threshold.
    /// A zero interval is rejected with [`PokedexError::InvalidInterval`]
    /// (`Duration` cannot express a negative one).
    ///
    /// Must be called from within a tokio runtime, since the reaper is
    /// spawned onto it.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(PokedexError::InvalidInterval);
        }

        let entries: Entries = Arc::new(Mutex::new(HashMap::new()));
        let (shutdown, signal) = watch::channel(false);
        tokio::spawn(reap_loop(Arc::clone(&entries), interval, signal));

        Ok(Self {
            entries,
            interval,
            shutdown,
        })
    }

    /// The configured reap period and staleness threshold.
    #[allow(dead_code)]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Add ==
    /// Inserts or overwrites the entry for `key`, timestamped now.
    ///
    /// Overwriting replaces the whole entry, so the age clock restarts.
    /// Concurrent writers to the same key are linearized by the lock;
    /// the last one to acquire it wins.
    pub async fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let mut entries = self.entries.lock().await;
        entries.insert(key.into(), CacheEntry::new(value));
    }

    // == Get ==
    /// Returns the bytes stored for `key`, or `None` on a miss.
    ///
    /// Age is deliberately not checked here: expiry is the reaper's job,
    /// so a hit can be up to `2 * interval` old (inserted just after one
    /// pass, collected by the pass after next). An evicted key is simply
    /// a miss, never an error.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        let entries = self.entries.lock().await;
        entries.get(key).map(|entry| entry.value.clone())
    }

    // == Shutdown ==
    /// Signals the reaper to exit at its next wakeup.
    ///
    /// Idempotent: repeated calls are no-ops. `add` and `get` remain
    /// usable afterwards, but nothing expires any more. Dropping every
    /// clone of the cache also stops the reaper, since the task observes
    /// the signal channel closing.
    pub fn shutdown(&self) {
        // send only fails once the reaper is already gone
        let _ = self.shutdown.send(true);
    }

    // == Length ==
    /// Current number of entries.
    #[allow(dead_code)]
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    #[allow(dead_code)]
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

// == Reaper ==
/// Background loop: wake once per `interval` and run a reap pass; exit
/// permanently on the shutdown signal or when every cache handle has
/// been dropped.
async fn reap_loop(entries: Entries, interval: Duration, mut signal: watch::Receiver<bool>) {
    let mut ticker = tokio::time::interval(interval);
    // a tokio interval's first tick completes immediately; skip it so
    // the first pass runs one full interval after creation
    ticker.tick().await;

    debug!(interval_ms = interval.as_millis() as u64, "reaper started");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let removed = reap(&entries, interval).await;
                if removed > 0 {
                    info!(removed, "reap pass evicted stale entries");
                } else {
                    debug!("reap pass found no stale entries");
                }
            }
            changed = signal.changed() => {
                // Err means all senders were dropped; stop either way
                if changed.is_err() || *signal.borrow() {
                    break;
                }
            }
        }
    }

    debug!("reaper stopped");
}

/// One scan-and-evict pass. Returns the number of entries removed.
///
/// `now` is read once so every entry in the pass is judged against the
/// same cutoff; an entry aged exactly `interval` survives the pass. The
/// lock is held only for the scan, never across an await.
async fn reap(entries: &Entries, interval: Duration) -> usize {
    let now = Instant::now();
    let mut entries = entries.lock().await;
    let before = entries.len();
    entries.retain(|_, entry| !entry.is_stale(now, interval));
    before - entries.len()
}
