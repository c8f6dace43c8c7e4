use std::sync::atomic::{AtomicU8, Ordering};
use tracing::{debug, trace};
use crate::*;

/// A fixed-size, lock-free hash table shared by all search threads.
///
/// Concurrent probes and stores never block. A read racing a write may miss
/// but never returns a value stored under a different key.
#[derive(Debug)]
pub struct TranspositionTable {
    buckets: Box<[Bucket]>,
    generation: AtomicU8,
}

impl TranspositionTable {
    pub const DEFAULT_MEGABYTES: usize = 16;

    pub fn new(megabytes: usize) -> TranspositionTable {
        let bucket_count = (megabytes * 1024 * 1024 / size_of::<Bucket>()).max(1);
        let buckets = (0..bucket_count).map(|_| Bucket::new()).collect::<Box<[_]>>();

        debug!(megabytes, bucket_count, "allocated transposition table");

        TranspositionTable {
            buckets,
            generation: AtomicU8::new(0),
        }
    }

    #[inline]
    fn bucket(&self, key: u64) -> &Bucket {
        &self.buckets[(key % self.buckets.len() as u64) as usize]
    }

    /*----------------------------------------------------------------*/

    #[inline]
    pub fn find(&self, key: u64) -> Option<Value> {
        self.bucket(key).find(key, self.generation())
    }

    /// Stores a search result for `key`, stamped with the current generation.
    /// `depth` must be non-zero.
    #[inline]
    pub fn try_insert(
        &self,
        key: u64,
        mv: Option<Move>,
        score: i16,
        depth: u8,
        node_type: NodeType,
    ) -> bool {
        let value = Value::new(mv, score, depth, node_type, self.generation());
        self.bucket(key).try_insert(key, value)
    }

    /// Called once between searches. Wraps after 255.
    pub fn advance_generation(&self) {
        let previous = self.generation.fetch_add(1, Ordering::Relaxed);
        trace!(generation = previous.wrapping_add(1), "advanced transposition table generation");
    }

    pub fn clear(&self) {
        for bucket in &self.buckets {
            bucket.clear();
        }

        self.generation.store(0, Ordering::Relaxed);
    }

    /*----------------------------------------------------------------*/

    #[inline(always)]
    pub fn generation(&self) -> u8 {
        self.generation.load(Ordering::Relaxed)
    }

    #[inline(always)]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        TranspositionTable::new(TranspositionTable::DEFAULT_MEGABYTES)
    }
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use super::*;

    const E2E4: Move = Move::new(Square::E2, Square::E4, None);

    #[test]
    fn sizing() {
        assert_eq!(TranspositionTable::new(1).bucket_count(), 1024 * 1024 / CACHE_LINE_SIZE);
        assert_eq!(TranspositionTable::new(0).bucket_count(), 1);
        assert_eq!(
            TranspositionTable::default().bucket_count(),
            TranspositionTable::DEFAULT_MEGABYTES * 1024 * 1024 / CACHE_LINE_SIZE,
        );
    }

    #[test]
    fn advance_generation() {
        const KEY: u64 = 0x1234_5678_9abc_def0;

        let table = TranspositionTable::new(1);
        assert_eq!(table.generation(), 0);
        assert!(table.try_insert(KEY, Some(E2E4), -25, 5, NodeType::Pv));
        assert_eq!(table.find(KEY), Some(Value::new(Some(E2E4), -25, 5, NodeType::Pv, 0)));

        table.advance_generation();
        assert_eq!(table.generation(), 1);
        assert_eq!(table.find(KEY), Some(Value::new(Some(E2E4), -25, 5, NodeType::Pv, 1)));
        assert_eq!(table.find(KEY + 1), None);
    }

    #[test]
    fn generation_wraps() {
        let table = TranspositionTable::new(1);

        for _ in 0..256 {
            table.advance_generation();
        }

        assert_eq!(table.generation(), 0);
    }

    #[test]
    fn clear() {
        let table = TranspositionTable::new(1);
        assert!(table.try_insert(42, None, 7, 1, NodeType::All));
        table.advance_generation();

        table.clear();
        assert_eq!(table.find(42), None);
        assert_eq!(table.generation(), 0);
    }

    #[test]
    fn concurrent_access() {
        let table = Arc::new(TranspositionTable::new(1));

        let handles = (0..4u64).map(|thread| {
            let table = Arc::clone(&table);

            std::thread::spawn(move || {
                for i in 0..10_000u64 {
                    let key = thread << 32 | i;
                    table.try_insert(key, Some(E2E4), (i % 1000) as i16, 1 + (i % 20) as u8, NodeType::Cut);

                    if let Some(value) = table.find(key) {
                        assert_eq!(value.mv(), Some(E2E4));
                        assert_ne!(value.depth(), 0);
                    }
                }
            })
        }).collect::<Vec<_>>();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
