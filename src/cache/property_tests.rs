//! Property-Based Tests for the Cache Module
//!
//! Uses proptest to verify the cache's read/write contract against a
//! plain map model, plus a handful of low-case-count timing properties
//! for the reaper.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::cache::TimedCache;

// == Test Configuration ==
/// Long enough that no reap pass runs during a model-based case.
const TEST_INTERVAL: Duration = Duration::from_secs(300);

/// Builds a small runtime so async cache calls can run inside a
/// synchronous proptest case.
fn test_runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build test runtime")
}

// == Strategies ==
/// Generates cache keys shaped like the request URLs callers use.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_/:.-]{1,64}"
}

/// Generates arbitrary byte payloads, including empty ones.
fn value_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..256)
}

/// Generates a sequence of cache operations for model-based testing
#[derive(Debug, Clone)]
enum CacheOp {
    Add { key: String, value: Vec<u8> },
    Get { key: String },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), value_strategy()).prop_map(|(key, value)| CacheOp::Add { key, value }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Round-trip: adding then reading a key returns exactly the stored
    // bytes, as long as no interval has elapsed.
    #[test]
    fn prop_roundtrip(key in key_strategy(), value in value_strategy()) {
        let got = test_runtime().block_on(async {
            let cache = TimedCache::new(TEST_INTERVAL).unwrap();
            cache.add(key.clone(), value.clone()).await;
            cache.get(&key).await
        });

        prop_assert_eq!(got, Some(value), "Round-trip value mismatch");
    }

    // Miss: a key never added is never found.
    #[test]
    fn prop_miss_on_unknown_key(key in key_strategy()) {
        let got = test_runtime().block_on(async {
            let cache = TimedCache::new(TEST_INTERVAL).unwrap();
            cache.get(&key).await
        });

        prop_assert_eq!(got, None, "Unknown key should miss");
    }

    // Overwrite: the second add wins wholesale, with no merge and no
    // duplicate entry.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy()
    ) {
        let (got, len) = test_runtime().block_on(async {
            let cache = TimedCache::new(TEST_INTERVAL).unwrap();
            cache.add(key.clone(), value1).await;
            cache.add(key.clone(), value2.clone()).await;
            (cache.get(&key).await, cache.len().await)
        });

        prop_assert_eq!(got, Some(value2), "Overwrite should return new value");
        prop_assert_eq!(len, 1, "Should have exactly one entry after overwrite");
    }

    // Model equivalence: with no reap pass in between, an arbitrary
    // sequence of adds and gets behaves exactly like a plain HashMap.
    #[test]
    fn prop_matches_map_model(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let observations = test_runtime().block_on(async {
            let cache = TimedCache::new(TEST_INTERVAL).unwrap();
            let mut model: HashMap<String, Vec<u8>> = HashMap::new();
            let mut observations = Vec::new();

            for op in ops {
                match op {
                    CacheOp::Add { key, value } => {
                        cache.add(key.clone(), value.clone()).await;
                        model.insert(key, value);
                    }
                    CacheOp::Get { key } => {
                        let got = cache.get(&key).await;
                        let expected = model.get(&key).cloned();
                        observations.push((key, got, expected));
                    }
                }
            }

            observations
        });

        for (key, got, expected) in observations {
            prop_assert_eq!(got, expected, "Cache diverged from model on key {}", key);
        }
    }
}

// Separate proptest block with fewer cases for time-sensitive reaper tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // Eviction: any entry is gone once two intervals have elapsed and a
    // reap pass has had the chance to run.
    #[test]
    fn prop_stale_entries_are_reaped(key in key_strategy(), value in value_strategy()) {
        let (before, after) = test_runtime().block_on(async {
            let cache = TimedCache::new(Duration::from_millis(50)).unwrap();
            cache.add(key.clone(), value.clone()).await;

            let before = cache.get(&key).await;
            tokio::time::sleep(Duration::from_millis(150)).await;
            let after = cache.get(&key).await;

            (before, after)
        });

        prop_assert_eq!(before, Some(value), "Entry should exist before the interval elapses");
        prop_assert_eq!(after, None, "Entry should be reaped after two intervals");
    }

    // Freshness: an entry read strictly before one interval has elapsed
    // is always present.
    #[test]
    fn prop_fresh_entries_survive(key in key_strategy(), value in value_strategy()) {
        let got = test_runtime().block_on(async {
            let cache = TimedCache::new(Duration::from_millis(200)).unwrap();
            cache.add(key.clone(), value.clone()).await;
            tokio::time::sleep(Duration::from_millis(20)).await;
            cache.get(&key).await
        });

        prop_assert_eq!(got, Some(value), "Entry younger than the interval must survive");
    }
}
