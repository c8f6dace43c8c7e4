use core::{fmt, str::FromStr};
use core::ops::{Index, IndexMut};
use thiserror::Error;
use crate::{Bitboard, Color};

/*----------------------------------------------------------------*/

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth
}

impl Rank {
    #[inline]
    pub const fn index(i: usize) -> Rank {
        if i < Rank::COUNT {
            return Rank::ALL[i];
        }

        panic!("Rank::index(): Index out of bounds");
    }

    #[inline]
    pub const fn try_index(i: usize) -> Option<Rank> {
        if i < Rank::COUNT {
            return Some(Rank::ALL[i]);
        }

        None
    }

    /*----------------------------------------------------------------*/

    #[inline]
    pub const fn try_offset(self, dy: i8) -> Option<Rank> {
        let i = self as i8 + dy;

        if i < 0 || i >= Rank::COUNT as i8 {
            return None;
        }

        Rank::try_index(i as usize)
    }

    #[inline]
    pub const fn flip(self) -> Rank {
        Rank::index(Rank::Eighth as usize - self as usize)
    }

    /// The rank as seen from `color`'s side of the board.
    #[inline]
    pub const fn relative_to(self, color: Color) -> Rank {
        match color {
            Color::White => self,
            Color::Black => self.flip(),
        }
    }

    #[inline]
    pub const fn bitboard(self) -> Bitboard {
        Bitboard(0xFF << (8 * self as u8))
    }

    /*----------------------------------------------------------------*/

    pub const COUNT: usize = 8;
    pub const ALL: [Rank; Self::COUNT] = [
        Rank::First,
        Rank::Second,
        Rank::Third,
        Rank::Fourth,
        Rank::Fifth,
        Rank::Sixth,
        Rank::Seventh,
        Rank::Eighth
    ];
}

impl<T> Index<Rank> for [T; Rank::COUNT] {
    type Output = T;

    #[inline]
    fn index(&self, rank: Rank) -> &Self::Output {
        &self.as_slice()[rank as usize]
    }
}

impl<T> IndexMut<Rank> for [T; Rank::COUNT] {
    #[inline]
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        &mut self.as_mut_slice()[rank as usize]
    }
}

/*----------------------------------------------------------------*/

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
#[error("invalid rank, expected one of 1-8")]
pub struct RankParseError;

impl From<Rank> for char {
    #[inline]
    fn from(r: Rank) -> char {
        (b'1' + r as u8) as char
    }
}

impl TryFrom<char> for Rank {
    type Error = RankParseError;

    #[inline]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '1'..='8' => Ok(Rank::index(c as usize - '1' as usize)),
            _ => Err(RankParseError),
        }
    }
}

impl FromStr for Rank {
    type Err = RankParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Rank, RankParseError> {
        crate::sole_char(s).ok_or(RankParseError)?.try_into()
    }
}

impl fmt::Display for Rank {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/*----------------------------------------------------------------*/

#[test]
fn validate_rank() {
    assert_eq!(Rank::index(7), Rank::Eighth);
    assert_eq!(Rank::try_index(8), None);
    assert_eq!(Rank::First.bitboard(), Bitboard(0xFF));
    assert_eq!(Rank::Eighth.bitboard(), Bitboard(0xFF00000000000000));
    assert_eq!(Rank::Second.relative_to(Color::Black), Rank::Seventh);
    assert_eq!(Rank::Fourth.relative_to(Color::White), Rank::Fourth);
    assert_eq!(Rank::First.try_offset(-1), None);
    assert_eq!(Rank::try_from('3'), Ok(Rank::Third));
    assert_eq!(Rank::try_from('9'), Err(RankParseError));
    assert_eq!(Rank::Sixth.to_string(), "6");
}
