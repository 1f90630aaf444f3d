//! Notification hooks for lookup misses.

/// Receives a notification for every lookup that did not find its key.
///
/// A miss is not an error: [`ConcurrentMap::get`](crate::ConcurrentMap::get) still returns `0`.
/// The observer is invoked after the read lock has been released, so it may call back into the
/// map.
///
/// Any `Fn(i64) + Send + Sync` closure is an observer.
pub trait MissObserver: Send + Sync {
    fn on_miss(&self, key: i64);
}

impl<F> MissObserver for F
where
    F: Fn(i64) + Send + Sync,
{
    fn on_miss(&self, key: i64) {
        self(key)
    }
}

/// Reports misses through the [`log`] facade at `info` level.
///
/// This is the observer a map is created with.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogMissObserver;

impl MissObserver for LogMissObserver {
    fn on_miss(&self, key: i64) {
        log::info!(target: "rwcache", "cache miss for key {key}");
    }
}

/// Discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopMissObserver;

impl MissObserver for NoopMissObserver {
    fn on_miss(&self, _key: i64) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[test]
    fn it_forwards_misses_to_closures() {
        // given
        let seen = Mutex::new(Vec::new());
        let observer = |key: i64| seen.lock().push(key);

        // when
        observer.on_miss(3);
        observer.on_miss(-7);

        // then
        assert_eq!(*seen.lock(), vec![3, -7]);
    }

    #[test]
    fn it_does_not_panic_when_logging_misses() {
        // given
        let _ = env_logger::builder().is_test(true).try_init();
        let map = crate::ConcurrentMap::with_capacity(4);

        // when
        LogMissObserver.on_miss(1);
        NoopMissObserver.on_miss(1);
        let value = map.get(1);

        // then
        assert_eq!(value, 0);
        assert_eq!(map.stats().miss_count, 1);
    }
}
