use crate::*;

pub const CACHE_LINE_SIZE: usize = 64;
pub const BUCKET_SIZE: usize = CACHE_LINE_SIZE / size_of::<Entry>();

/// A cache line of entries probed together.
#[derive(Debug)]
#[repr(align(64))]
pub struct Bucket {
    entries: [Entry; BUCKET_SIZE],
}

const _: () = assert!(size_of::<Bucket>() == CACHE_LINE_SIZE);

impl Bucket {
    #[inline]
    pub fn new() -> Bucket {
        Bucket {
            entries: std::array::from_fn(|_| Entry::empty()),
        }
    }

    /// Looks up `key`. A hit from an older generation is refreshed to `generation`
    /// before it is returned, so that it survives the next round of evictions.
    pub fn find(&self, key: u64, generation: u8) -> Option<Value> {
        for entry in &self.entries {
            let (stored_key, value) = entry.load();

            if value.depth() == 0 || stored_key != key {
                continue;
            }

            if value.generation() != generation {
                let value = value.with_generation(generation);
                entry.store(key, value);

                return Some(value);
            }

            return Some(value);
        }

        None
    }

    /// Stores `value` under `key`, returning whether anything was written.
    /// An existing entry for the same key is only overwritten by an equal or deeper one,
    /// otherwise the first empty slot or the least valuable entry is taken.
    pub fn try_insert(&self, key: u64, value: Value) -> bool {
        debug_assert!(value.depth() != 0);

        let mut least = &self.entries[0];
        let mut least_value = least.load().1;

        for entry in &self.entries {
            let (stored_key, stored) = entry.load();

            if stored.depth() == 0 {
                entry.store(key, value);
                return true;
            }

            if stored_key == key {
                if value.depth() >= stored.depth() {
                    entry.store(key, value);
                    return true;
                }

                return false;
            }

            if less_valuable_than(stored, least_value, value.generation()) {
                least = entry;
                least_value = stored;
            }
        }

        least.store(key, value);
        true
    }

    pub fn clear(&self) {
        for entry in &self.entries {
            entry.store(0, Value::EMPTY);
        }
    }
}

impl Default for Bucket {
    #[inline]
    fn default() -> Self {
        Bucket::new()
    }
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: u64 = 0;
    const GENERATION: u8 = 1;
    const E2E4: Move = Move::new(Square::E2, Square::E4, None);

    fn value(depth: u8, generation: u8) -> Value {
        Value::new(Some(E2E4), -25, depth, NodeType::Pv, generation)
    }

    #[test]
    fn find_and_age() {
        let bucket = Bucket::new();
        assert_eq!(bucket.find(KEY, 0), None);

        let inserted = value(5, GENERATION);
        assert!(bucket.try_insert(KEY, inserted));
        assert_eq!(bucket.find(KEY, GENERATION), Some(inserted));

        let aged = bucket.find(KEY, GENERATION + 1);
        assert_eq!(aged, Some(inserted.with_generation(GENERATION + 1)));
        assert_eq!(bucket.find(KEY, GENERATION + 1), aged);
        assert_eq!(bucket.find(KEY + 1, GENERATION + 1), None);
    }

    #[test]
    fn try_insert_same_key() {
        let bucket = Bucket::new();

        assert!(bucket.try_insert(KEY, value(5, GENERATION)));
        assert_eq!(bucket.find(KEY, GENERATION), Some(value(5, GENERATION)));

        assert!(bucket.try_insert(KEY, value(10, GENERATION)));
        assert_eq!(bucket.find(KEY, GENERATION), Some(value(10, GENERATION)));

        assert!(!bucket.try_insert(KEY, value(9, GENERATION + 1)));
        assert_eq!(bucket.find(KEY, GENERATION), Some(value(10, GENERATION)));

        assert!(bucket.try_insert(KEY, value(10, GENERATION)));
        assert!(bucket.try_insert(KEY, value(11, GENERATION + 1)));
        assert_eq!(bucket.find(KEY, GENERATION + 1), Some(value(11, GENERATION + 1)));
    }

    #[test]
    fn evict_ancient_same_depth() {
        let bucket = Bucket::new();

        for key in 0..BUCKET_SIZE as u64 {
            assert!(bucket.try_insert(key, value(3, key as u8)));
        }

        let current = BUCKET_SIZE as u8;
        for key in BUCKET_SIZE as u64..2 * BUCKET_SIZE as u64 {
            assert!(bucket.try_insert(key, value(3, current)));
        }

        for key in 0..BUCKET_SIZE as u64 {
            assert_eq!(bucket.find(key, current), None);
        }
        for key in BUCKET_SIZE as u64..2 * BUCKET_SIZE as u64 {
            assert_eq!(bucket.find(key, current), Some(value(3, current)));
        }
    }

    #[test]
    fn evict_smallest_depth_same_generation() {
        let bucket = Bucket::new();

        for key in 0..BUCKET_SIZE as u64 {
            assert!(bucket.try_insert(key, value(10 - key as u8, GENERATION)));
        }

        let evicted = BUCKET_SIZE as u64 - 1;
        assert!(bucket.try_insert(BUCKET_SIZE as u64, value(4, GENERATION)));

        for key in 0..BUCKET_SIZE as u64 {
            let expected = (key != evicted).then(|| value(10 - key as u8, GENERATION));
            assert_eq!(bucket.find(key, GENERATION), expected);
        }
        assert_eq!(bucket.find(BUCKET_SIZE as u64, GENERATION), Some(value(4, GENERATION)));
    }

    #[test]
    fn evict_least_valuable() {
        let bucket = Bucket::new();

        for key in 0..BUCKET_SIZE as u64 {
            assert!(bucket.try_insert(key, value(3 + key as u8, 0)));
        }

        assert!(bucket.try_insert(BUCKET_SIZE as u64, value(2, 1)));

        assert_eq!(bucket.find(0, 1), None);
        assert_eq!(bucket.find(BUCKET_SIZE as u64, 1), Some(value(2, 1)));
        for key in 1..BUCKET_SIZE as u64 {
            assert_eq!(bucket.find(key, 1), Some(value(3 + key as u8, 1)));
        }
    }

    #[test]
    fn clear() {
        let bucket = Bucket::new();
        assert!(bucket.try_insert(KEY, value(5, GENERATION)));

        bucket.clear();
        assert_eq!(bucket.find(KEY, GENERATION), None);
    }
}
