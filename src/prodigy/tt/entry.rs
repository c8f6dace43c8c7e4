use std::sync::atomic::{AtomicU64, Ordering};
use crate::*;

/// One slot as two independent words. The key is stored XORed with the value, so a pair
/// torn by a concurrent writer reconstructs to a key nobody asked for and reads as a miss.
#[derive(Debug)]
pub struct Entry {
    key_xor_value: AtomicU64,
    value: AtomicU64,
}

impl Entry {
    #[inline]
    pub fn new(key: u64, value: Value) -> Entry {
        let value = value.to_bits();

        Entry {
            key_xor_value: AtomicU64::new(key ^ value),
            value: AtomicU64::new(value),
        }
    }

    #[inline]
    pub fn empty() -> Entry {
        Entry::new(0, Value::EMPTY)
    }

    #[inline]
    pub fn load(&self) -> (u64, Value) {
        let value = self.value.load(Ordering::Relaxed);
        let key = self.key_xor_value.load(Ordering::Relaxed) ^ value;

        (key, Value::from_bits(value))
    }

    #[inline]
    pub fn store(&self, key: u64, value: Value) {
        let value = value.to_bits();

        self.key_xor_value.store(key ^ value, Ordering::Relaxed);
        self.value.store(value, Ordering::Relaxed);
    }
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_and_store() {
        let initial = Value::new(Some(Move::new(Square::E2, Square::E4, None)), -25, 4, NodeType::Pv, 15);
        let updated = Value::new(Some(Move::new(Square::F2, Square::F4, None)), 12, 5, NodeType::All, 16);

        let entry = Entry::new(100, initial);
        assert_eq!(entry.load(), (100, initial));

        entry.store(100, updated);
        assert_eq!(entry.load(), (100, updated));

        entry.store(7, Value::EMPTY);
        assert_eq!(entry.load(), (7, Value::EMPTY));
    }

    #[test]
    fn torn_pair_misreads_key() {
        let first = Value::new(Some(Move::new(Square::E2, Square::E4, None)), 1, 3, NodeType::Pv, 0);
        let second = Value::new(Some(Move::new(Square::D2, Square::D4, None)), 2, 3, NodeType::Pv, 0);

        let entry = Entry::new(1, first);

        // Only the value word of a second writer landed.
        entry.value.store(second.to_bits(), Ordering::Relaxed);

        let (key, value) = entry.load();
        assert_eq!(value, second);
        assert_ne!(key, 1);
        assert_ne!(key, 2);
    }
}
