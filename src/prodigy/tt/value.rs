use std::fmt;
use crate::*;

/*----------------------------------------------------------------*/

/*
Bit Layout:
bits 0-15: Move, 0 when there is none
bits 16-31: Score
bits 32-39: Depth
bits 40-47: Node type
bits 48-55: Generation
bits 56-63: Always zero
*/
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Value {
    mv: Option<Move>,
    score: i16,
    depth: u8,
    node_type: NodeType,
    generation: u8,
}

impl Value {
    #[inline]
    pub const fn new(mv: Option<Move>, score: i16, depth: u8, node_type: NodeType, generation: u8) -> Value {
        Value {
            mv,
            score,
            depth,
            node_type,
            generation,
        }
    }

    /// Unused slots hold this, recognizable by their zero depth.
    pub const EMPTY: Value = Value::new(None, 0, 0, NodeType::Pv, 0);

    /*----------------------------------------------------------------*/

    #[inline]
    pub const fn from_bits(bits: u64) -> Value {
        Value {
            mv: Move::try_from_bits(bits as u16),
            score: (bits >> 16) as u16 as i16,
            depth: (bits >> 32) as u8,
            node_type: NodeType::index(((bits >> 40) as u8) as usize),
            generation: (bits >> 48) as u8,
        }
    }

    #[inline]
    pub const fn to_bits(self) -> u64 {
        let mv = match self.mv {
            Some(mv) => mv.bits(),
            None => 0,
        };

        mv as u64
            | (self.score as u16 as u64) << 16
            | (self.depth as u64) << 32
            | (self.node_type as u64) << 40
            | (self.generation as u64) << 48
    }

    /*----------------------------------------------------------------*/

    #[inline(always)]
    pub const fn mv(self) -> Option<Move> { self.mv }

    #[inline(always)]
    pub const fn score(self) -> i16 { self.score }

    #[inline(always)]
    pub const fn depth(self) -> u8 { self.depth }

    #[inline(always)]
    pub const fn node_type(self) -> NodeType { self.node_type }

    #[inline(always)]
    pub const fn generation(self) -> u8 { self.generation }

    #[inline]
    pub const fn with_generation(self, generation: u8) -> Value {
        Value { generation, ..self }
    }
}

/// Whether `lhs` should be evicted before `rhs` during `generation`.
/// Entries from an older generation lose to current ones; otherwise the shallower entry loses.
#[inline]
pub const fn less_valuable_than(lhs: Value, rhs: Value, generation: u8) -> bool {
    if rhs.generation == generation {
        if lhs.generation == generation {
            lhs.depth < rhs.depth
        } else {
            true
        }
    } else if lhs.generation == generation {
        false
    } else {
        lhs.depth < rhs.depth
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Value{{ move=")?;

        match self.mv {
            Some(mv) => write!(f, "{}", mv)?,
            None => write!(f, "0000")?,
        }

        write!(
            f,
            " score={} depth={} node_type={} generation={} underlying={} }}",
            self.score,
            self.depth,
            self.node_type,
            self.generation,
            self.to_bits(),
        )
    }
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    const E2E4: Move = Move::new(Square::E2, Square::E4, None);

    const fn value(depth: u8, generation: u8) -> Value {
        Value::new(Some(E2E4), -25, depth, NodeType::Pv, generation)
    }

    #[test]
    fn fields() {
        let value = Value::new(Some(E2E4), -25, 5, NodeType::Cut, 40);

        assert_eq!(value.mv(), Some(E2E4));
        assert_eq!(value.score(), -25);
        assert_eq!(value.depth(), 5);
        assert_eq!(value.node_type(), NodeType::Cut);
        assert_eq!(value.generation(), 40);
        assert_eq!(Value::from_bits(value.to_bits()), value);
        assert_eq!(value.to_bits() >> 56, 0);
        assert_eq!(Value::EMPTY.to_bits(), 0);
        assert_eq!(Value::from_bits(0), Value::EMPTY);
        assert_eq!(value.with_generation(41).generation(), 41);
    }

    #[test]
    fn current_other_comparison() {
        const CURRENT: u8 = 40;
        const DEPTH: u8 = 5;

        let other = value(DEPTH, CURRENT);
        let cases = [
            (value(DEPTH - 1, CURRENT), true),
            (value(DEPTH, CURRENT), false),
            (value(DEPTH + 1, CURRENT), false),
            (value(DEPTH - 1, CURRENT - 1), true),
            (value(DEPTH, CURRENT - 1), true),
            (value(DEPTH + 1, CURRENT - 1), true),
        ];

        for (lhs, expected) in cases {
            assert_eq!(less_valuable_than(lhs, other, CURRENT), expected, "{}", lhs);
        }
    }

    #[test]
    fn ancient_other_comparison() {
        const CURRENT: u8 = 40;
        const ANCIENT: u8 = 39;
        const DEPTH: u8 = 5;

        let other = value(DEPTH, ANCIENT);
        let cases = [
            (value(DEPTH - 1, CURRENT), false),
            (value(DEPTH, CURRENT), false),
            (value(DEPTH + 1, CURRENT), false),
            (value(DEPTH - 1, ANCIENT), true),
            (value(DEPTH, ANCIENT), false),
            (value(DEPTH + 1, ANCIENT), false),
            (value(DEPTH - 1, ANCIENT - 1), true),
            (value(DEPTH, ANCIENT - 1), false),
            (value(DEPTH + 1, ANCIENT - 1), false),
        ];

        for (lhs, expected) in cases {
            assert_eq!(less_valuable_than(lhs, other, CURRENT), expected, "{}", lhs);
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            Value::new(Some(E2E4), -25, 5, NodeType::Pv, 30).to_string(),
            "Value{ move=e2e4 score=-25 depth=5 node_type=PV generation=30 underlying=8444275069486860 }",
        );
        assert!(Value::EMPTY.to_string().starts_with("Value{ move=0000 "));
    }
}
