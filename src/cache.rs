use crate::Stats;
use observer::{LogMissObserver, MissObserver};
use parking_lot::{Mutex, RwLock};
use stats::Counters;
use std::collections::HashMap;
use std::fmt;
use std::hash::BuildHasher;
use std::time::Instant;

pub mod observer;
pub(crate) mod stats;

pub(crate) type RandomState = ahash::RandomState;

/// Thread-safe mapping from `i64` keys to `i64` values.
///
/// The mapping sits behind a single reader-writer lock. [`get`](Self::get) takes the lock in
/// shared mode, so lookups never wait on each other. [`set`](Self::set) takes it exclusively and
/// is serialized against every other lookup and write. The lock is eventually fair: a waiting
/// writer is granted access even under sustained read load.
///
/// Wrap the map in a [`std::sync::Arc`] to share it between threads. Both reads and writes only
/// require shared references.
pub struct ConcurrentMap<S = RandomState> {
    data: RwLock<HashMap<i64, i64, S>>,
    observer: Box<dyn MissObserver>,
    counters: Counters,
    metrics_last_accessed: Mutex<Instant>,
}

impl ConcurrentMap<RandomState> {
    /// Creates an empty map with room for at least `capacity` entries.
    ///
    /// The capacity is only a sizing hint. The map grows past it as needed.
    pub fn with_capacity(capacity: usize) -> ConcurrentMap<RandomState> {
        ConcurrentMap::with_capacity_and_hasher(capacity, Default::default())
    }
}

impl Default for ConcurrentMap<RandomState> {
    fn default() -> Self {
        ConcurrentMap::with_capacity(0)
    }
}

impl<S> ConcurrentMap<S>
where
    S: BuildHasher,
{
    /// Creates an empty map with room for at least `capacity` entries, using `hash_builder` to
    /// hash the keys.
    pub fn with_capacity_and_hasher(capacity: usize, hash_builder: S) -> ConcurrentMap<S> {
        Self {
            data: RwLock::new(HashMap::with_capacity_and_hasher(capacity, hash_builder)),
            observer: Box::new(LogMissObserver),
            counters: Counters::default(),
            metrics_last_accessed: Mutex::new(Instant::now()),
        }
    }

    /// Replaces the observer that is notified about lookup misses.
    pub fn with_observer<O>(mut self, observer: O) -> Self
    where
        O: MissObserver + 'static,
    {
        self.observer = Box::new(observer);
        self
    }

    /// Returns the value stored for `key`.
    ///
    /// If the key is absent, the miss observer is notified once and `0` is returned. A stored `0`
    /// therefore looks exactly like a miss to the caller.
    pub fn get(&self, key: i64) -> i64 {
        let value = {
            let data = self.data.read();
            data.get(&key).copied()
        };

        match value {
            Some(value) => {
                self.counters.increment_hit_count();
                value
            }
            None => {
                self.counters.increment_miss_count();
                self.observer.on_miss(key);
                0
            }
        }
    }

    /// Inserts `value` for `key`, overwriting any previous value.
    pub fn set(&self, key: i64, value: i64) {
        let mut data = self.data.write();
        data.insert(key, value);
        drop(data);

        self.counters.increment_write_count();
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl<S> ConcurrentMap<S> {
    /// Returns the counters accumulated since the previous call and resets them.
    pub fn stats(&self) -> Stats {
        let millis_elapsed = {
            let mut guard = self.metrics_last_accessed.lock();
            let millis_elapsed = guard.elapsed().as_millis();
            *guard = Instant::now();
            millis_elapsed
        };

        let mut stats = self.counters.take();
        stats.millis_elapsed = millis_elapsed;
        stats
    }
}

impl<S> fmt::Debug for ConcurrentMap<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConcurrentMap")
            .field("len", &self.data.try_read().map(|data| data.len()))
            .field("counters", &self.counters)
            .finish_non_exhaustive()
    }
}
