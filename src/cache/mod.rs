//! Cache Module
//!
//! Time-based in-memory caching: each entry carries its insertion
//! instant, and a background reaper evicts entries older than the
//! configured interval. Reads are age-blind; expiry happens only on
//! reap passes.

mod entry;
mod timed;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use timed::TimedCache;
