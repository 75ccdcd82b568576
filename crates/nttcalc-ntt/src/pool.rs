//! Transform buffer pool with power-of-two size classes.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

/// Snapshot of pool counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Requests served from a pooled buffer.
    pub hits: u64,
    /// Requests that allocated.
    pub misses: u64,
    /// Released buffers dropped (oversized, or their class was full).
    pub evictions: u64,
}

#[derive(Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl Counters {
    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> PoolStats {
        PoolStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        for counter in [&self.hits, &self.misses, &self.evictions] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Pool of `u64` coefficient buffers keyed by transform size.
///
/// Buffers handed out by [`BufferPool::acquire`] are always zeroed and have
/// exactly the requested length.
pub struct BufferPool {
    pools: Mutex<HashMap<usize, Vec<Vec<u64>>>>,
    max_len: usize,
    max_per_class: usize,
    stats: Counters,
}

impl BufferPool {
    /// Create a new pool.
    ///
    /// Buffers whose capacity exceeds `max_len` are dropped on release.
    #[must_use]
    pub fn new(max_len: usize, max_per_class: usize) -> Self {
        Self {
            pools: Mutex::new(HashMap::new()),
            max_len,
            max_per_class,
            stats: Counters::default(),
        }
    }

    /// Get a zeroed buffer of length `len`.
    pub fn acquire(&self, len: usize) -> Vec<u64> {
        let class = Self::size_class(len);
        let recycled = self.pools.lock().get_mut(&class).and_then(Vec::pop);
        if let Some(mut buf) = recycled {
            Counters::bump(&self.stats.hits);
            buf.clear();
            buf.resize(len, 0);
            return buf;
        }
        Counters::bump(&self.stats.misses);
        let mut buf = Vec::with_capacity(class);
        buf.resize(len, 0);
        buf
    }

    /// Return a buffer to the pool.
    pub fn release(&self, buf: Vec<u64>) {
        let cap = buf.capacity();
        if cap == 0 || cap > self.max_len {
            Counters::bump(&self.stats.evictions);
            return;
        }

        // Largest class the capacity fully covers.
        let class = 1usize << (usize::BITS - 1 - cap.leading_zeros());
        let mut pools = self.pools.lock();
        let pool = pools.entry(class).or_default();
        if pool.len() < self.max_per_class {
            pool.push(buf);
        } else {
            Counters::bump(&self.stats.evictions);
        }
    }

    /// Size class for a requested length (next power of two).
    fn size_class(len: usize) -> usize {
        len.max(1).next_power_of_two()
    }

    /// Buffers currently held across all classes.
    #[must_use]
    pub fn total_pooled(&self) -> usize {
        self.pools.lock().values().map(Vec::len).sum()
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        self.stats.snapshot()
    }

    /// Zero the counters.
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    /// Drop every pooled buffer.
    pub fn clear(&self) {
        self.pools.lock().clear();
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(1 << 23, 8)
    }
}
