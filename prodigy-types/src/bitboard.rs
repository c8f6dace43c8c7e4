use std::{fmt, ops::*};
use crate::{Direction, File, Rank, Square};

/*----------------------------------------------------------------*/

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    #[inline(always)]
    pub const fn shift<D: Direction>(self, steps: usize) -> Bitboard {
        let mut result = self;
        let mut i = 0;

        while i < steps {
            result = if D::SHIFT > 0 {
                Bitboard((result.0 & D::MASK.0) << D::SHIFT)
            } else {
                Bitboard((result.0 & D::MASK.0) >> -D::SHIFT)
            };

            i += 1;
        }

        result
    }

    /*----------------------------------------------------------------*/

    #[inline(always)]
    pub const fn union(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }

    #[inline(always)]
    pub const fn intersection(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }

    #[inline(always)]
    pub const fn without(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & !rhs.0)
    }

    /*----------------------------------------------------------------*/

    #[inline(always)]
    pub const fn lsb(self) -> Bitboard {
        Bitboard(self.0 & self.0.wrapping_neg())
    }

    #[inline(always)]
    pub const fn next_square(self) -> Square {
        Square::index(self.0.trailing_zeros() as usize)
    }

    #[inline(always)]
    pub const fn try_next_square(self) -> Option<Square> {
        Square::try_index(self.0.trailing_zeros() as usize)
    }

    /*----------------------------------------------------------------*/

    #[inline(always)]
    pub const fn is_subset(self, rhs: Bitboard) -> bool {
        self.0 & rhs.0 == self.0
    }

    #[inline(always)]
    pub const fn is_disjoint(self, rhs: Bitboard) -> bool {
        self.0 & rhs.0 == 0
    }

    #[inline(always)]
    pub const fn has(self, sq: Square) -> bool {
        !self.is_disjoint(sq.bitboard())
    }

    #[inline(always)]
    pub const fn popcnt(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /*----------------------------------------------------------------*/

    /// Every subset of `self`, the empty set first and `self` last.
    #[inline]
    pub const fn iter_subsets(self) -> BitboardSubsets {
        BitboardSubsets {
            mask: self.0,
            subset: 0,
            done: false,
        }
    }

    /*----------------------------------------------------------------*/

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const FULL: Bitboard = Bitboard(u64::MAX);

    pub const EDGES: Bitboard = Bitboard(0xFF818181818181FF);
}

/*----------------------------------------------------------------*/

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        sq.bitboard()
    }
}

impl fmt::Display for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &rank in Rank::ALL.iter().rev() {
            writeln!(f)?;

            for &file in &File::ALL {
                if self.has(Square::new(file, rank)) {
                    write!(f, " x")?;
                } else {
                    write!(f, " .")?;
                }
            }
        }

        Ok(())
    }
}

/*----------------------------------------------------------------*/

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

macro_rules! impl_bb_ops {
    ($($trait:ident, $fn:ident, $assign_trait:ident, $assign_fn:ident;)*) => {$(
        impl $trait<Bitboard> for Bitboard {
            type Output = Bitboard;

            #[inline(always)]
            fn $fn(self, rhs: Bitboard) -> Self::Output {
                Bitboard(self.0.$fn(rhs.0))
            }
        }

        impl $trait<Square> for Bitboard {
            type Output = Bitboard;

            #[inline(always)]
            fn $fn(self, rhs: Square) -> Self::Output {
                Bitboard(self.0.$fn(rhs.bitboard().0))
            }
        }

        impl $assign_trait<Bitboard> for Bitboard {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: Bitboard) {
                self.0.$assign_fn(rhs.0);
            }
        }

        impl $assign_trait<Square> for Bitboard {
            #[inline(always)]
            fn $assign_fn(&mut self, rhs: Square) {
                self.0.$assign_fn(rhs.bitboard().0);
            }
        }
    )*}
}

impl_bb_ops! {
    BitAnd, bitand, BitAndAssign, bitand_assign;
    BitOr, bitor, BitOrAssign, bitor_assign;
    BitXor, bitxor, BitXorAssign, bitxor_assign;
}

/*----------------------------------------------------------------*/

pub struct BitboardIter(Bitboard);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        let sq = self.0.try_next_square();

        if let Some(sq) = sq {
            self.0 ^= sq;
        }

        sq
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.popcnt();
        (len, Some(len))
    }
}

impl ExactSizeIterator for BitboardIter {}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIter(self)
    }
}

/*----------------------------------------------------------------*/

pub struct BitboardSubsets {
    mask: u64,
    subset: u64,
    done: bool,
}

impl Iterator for BitboardSubsets {
    type Item = Bitboard;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self.subset;
        self.subset = self.subset.wrapping_sub(self.mask) & self.mask;
        self.done = self.subset == 0;

        Some(Bitboard(current))
    }
}

/*----------------------------------------------------------------*/

#[test]
fn validate_bitboard() {
    use crate::{North, NorthEast, SouthWest, West};

    let bb = Square::E4.bitboard() | Square::A1 | Square::H8;

    assert_eq!(bb.popcnt(), 3);
    assert!(bb.has(Square::E4));
    assert!(!bb.has(Square::E5));
    assert_eq!(bb.lsb(), Square::A1.bitboard());
    assert_eq!(bb.next_square(), Square::A1);
    assert_eq!(bb.into_iter().collect::<Vec<_>>(), vec![Square::A1, Square::E4, Square::H8]);
    assert_eq!(Bitboard::EMPTY.try_next_square(), None);

    assert_eq!(Square::H4.bitboard().shift::<NorthEast>(1), Bitboard::EMPTY);
    assert_eq!(Square::A4.bitboard().shift::<West>(1), Bitboard::EMPTY);
    assert_eq!(Square::E4.bitboard().shift::<North>(2), Square::E6.bitboard());
    assert_eq!(Square::E4.bitboard().shift::<SouthWest>(1), Square::D3.bitboard());
    assert_eq!(Rank::Eighth.bitboard().shift::<North>(1), Bitboard::EMPTY);
}

#[test]
fn validate_subsets() {
    let mask = Square::B2.bitboard() | Square::D4 | Square::G7;
    let subsets = mask.iter_subsets().collect::<Vec<_>>();

    assert_eq!(subsets.len(), 8);
    assert_eq!(subsets[0], Bitboard::EMPTY);
    assert_eq!(subsets[7], mask);
    assert!(subsets.iter().all(|s| s.is_subset(mask)));

    for (i, a) in subsets.iter().enumerate() {
        assert!(subsets[i + 1..].iter().all(|b| a != b));
    }

    assert_eq!(Bitboard::EMPTY.iter_subsets().collect::<Vec<_>>(), vec![Bitboard::EMPTY]);
}
