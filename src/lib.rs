//! A small, thread-safe integer cache.
//!
//! [`ConcurrentMap`] maps `i64` keys to `i64` values and guards the mapping with a single
//! reader-writer lock. Any number of readers may look up values in parallel, while writers get
//! exclusive access.
//!
//! # Misses
//!
//! A lookup for an absent key returns `0`. This is indistinguishable from a stored `0`; the only
//! signal for a miss is the [`MissObserver`] attached to the map. By default misses are reported
//! through the [`log`] facade.
//!
//! # Examples
//!
//! Basic usage:
//!
//! ```rust
//! use rwcache::ConcurrentMap;
//!
//! let cache = ConcurrentMap::with_capacity(30);
//!
//! cache.set(1, 10);
//! assert_eq!(cache.get(1), 10);
//!
//! // missing keys read as zero
//! assert_eq!(cache.get(2), 0);
//! ```
//!
//! Counting misses with a custom observer:
//!
//! ```rust
//! use rwcache::ConcurrentMap;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! let misses = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&misses);
//!
//! let cache = ConcurrentMap::with_capacity(8).with_observer(move |_key: i64| {
//!     counter.fetch_add(1, Ordering::Relaxed);
//! });
//!
//! cache.get(42);
//! assert_eq!(misses.load(Ordering::Relaxed), 1);
//! ```
//!
//! Sharing the cache between a writer and a reader thread:
//!
//! ```rust
//! use rwcache::ConcurrentMap;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let cache = Arc::new(ConcurrentMap::with_capacity(30));
//!
//! let writer = {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || {
//!         for i in 0..30 {
//!             cache.set(i, i);
//!         }
//!     })
//! };
//! writer.join().unwrap();
//!
//! let reader = {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || (0..30).map(|i| cache.get(i)).sum::<i64>())
//! };
//!
//! assert_eq!(reader.join().unwrap(), (0..30).sum::<i64>());
//! ```

#![forbid(unsafe_code)]
pub mod cache;

pub use cache::ConcurrentMap;
pub use cache::observer::{LogMissObserver, MissObserver, NoopMissObserver};
pub use cache::stats::Stats;
