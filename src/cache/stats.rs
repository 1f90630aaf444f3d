use std::sync::atomic::{AtomicU64, Ordering};

/// Counters collected by [`ConcurrentMap::stats`](crate::ConcurrentMap::stats).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Stats {
    pub miss_count: u64,
    pub hit_count: u64,
    pub write_count: u64,
    pub millis_elapsed: u128,
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    hit_count: AtomicU64,
    miss_count: AtomicU64,
    write_count: AtomicU64,
}

impl Counters {
    pub(crate) fn increment_hit_count(&self) {
        self.hit_count.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn increment_miss_count(&self) {
        self.miss_count.fetch_add(1, Ordering::AcqRel);
    }

    pub(crate) fn increment_write_count(&self) {
        self.write_count.fetch_add(1, Ordering::AcqRel);
    }

    /// Reads and zeroes every counter.
    ///
    /// Each counter is swapped individually, so an increment racing with this call lands either in
    /// the returned snapshot or in the next one, never in neither.
    pub(crate) fn take(&self) -> Stats {
        Stats {
            hit_count: self.hit_count.swap(0, Ordering::AcqRel),
            miss_count: self.miss_count.swap(0, Ordering::AcqRel),
            write_count: self.write_count.swap(0, Ordering::AcqRel),
            millis_elapsed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_takes_and_resets_counters() {
        // given
        let counters = Counters::default();
        counters.increment_hit_count();
        counters.increment_hit_count();
        counters.increment_miss_count();
        counters.increment_write_count();

        // when
        let first = counters.take();
        let second = counters.take();

        // then
        assert_eq!(first.hit_count, 2);
        assert_eq!(first.miss_count, 1);
        assert_eq!(first.write_count, 1);
        assert_eq!(second, Stats::default());
    }
}
