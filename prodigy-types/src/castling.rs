use core::ops::*;
use std::{fmt, str::FromStr};
use thiserror::Error;
use crate::Color;

/*----------------------------------------------------------------*/

/// The four castling flags packed into the low nibble.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights(u8);

impl CastlingRights {
    #[inline]
    pub const fn from_bits(bits: u8) -> CastlingRights {
        CastlingRights(bits & Self::ALL.0)
    }

    #[inline(always)]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Index into a table of one entry per flag combination.
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /*----------------------------------------------------------------*/

    #[inline]
    pub const fn kingside(color: Color) -> CastlingRights {
        match color {
            Color::White => Self::WHITE_KINGSIDE,
            Color::Black => Self::BLACK_KINGSIDE,
        }
    }

    #[inline]
    pub const fn queenside(color: Color) -> CastlingRights {
        match color {
            Color::White => Self::WHITE_QUEENSIDE,
            Color::Black => Self::BLACK_QUEENSIDE,
        }
    }

    #[inline]
    pub const fn both(color: Color) -> CastlingRights {
        CastlingRights(Self::kingside(color).0 | Self::queenside(color).0)
    }

    /*----------------------------------------------------------------*/

    #[inline(always)]
    pub const fn has(self, rights: CastlingRights) -> bool {
        self.0 & rights.0 == rights.0
    }

    #[inline(always)]
    pub const fn insert(self, rights: CastlingRights) -> CastlingRights {
        CastlingRights(self.0 | rights.0)
    }

    #[inline(always)]
    pub const fn remove(self, rights: CastlingRights) -> CastlingRights {
        CastlingRights(self.0 & !rights.0)
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /*----------------------------------------------------------------*/

    pub const NONE: CastlingRights = CastlingRights(0);
    pub const WHITE_KINGSIDE: CastlingRights = CastlingRights(1);
    pub const WHITE_QUEENSIDE: CastlingRights = CastlingRights(2);
    pub const BLACK_KINGSIDE: CastlingRights = CastlingRights(4);
    pub const BLACK_QUEENSIDE: CastlingRights = CastlingRights(8);
    pub const ALL: CastlingRights = CastlingRights(15);

    pub const COUNT: usize = 16;
}

impl BitOr for CastlingRights {
    type Output = CastlingRights;

    #[inline(always)]
    fn bitor(self, rhs: CastlingRights) -> Self::Output {
        self.insert(rhs)
    }
}

impl BitOrAssign for CastlingRights {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: CastlingRights) {
        *self = self.insert(rhs);
    }
}

impl BitAnd for CastlingRights {
    type Output = CastlingRights;

    #[inline(always)]
    fn bitand(self, rhs: CastlingRights) -> Self::Output {
        CastlingRights(self.0 & rhs.0)
    }
}

impl Not for CastlingRights {
    type Output = CastlingRights;

    #[inline(always)]
    fn not(self) -> Self::Output {
        CastlingRights(!self.0 & Self::ALL.0)
    }
}

/*----------------------------------------------------------------*/

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
#[error("invalid castling rights, expected '-' or a subset of KQkq")]
pub struct CastlingRightsParseError;

impl FromStr for CastlingRights {
    type Err = CastlingRightsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(CastlingRights::NONE);
        }

        if s.is_empty() {
            return Err(CastlingRightsParseError);
        }

        let mut rights = CastlingRights::NONE;

        for c in s.chars() {
            let flag = match c {
                'K' => CastlingRights::WHITE_KINGSIDE,
                'Q' => CastlingRights::WHITE_QUEENSIDE,
                'k' => CastlingRights::BLACK_KINGSIDE,
                'q' => CastlingRights::BLACK_QUEENSIDE,
                _ => return Err(CastlingRightsParseError),
            };

            if rights.has(flag) {
                return Err(CastlingRightsParseError);
            }

            rights |= flag;
        }

        Ok(rights)
    }
}

impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }

        let flags = [
            (CastlingRights::WHITE_KINGSIDE, 'K'),
            (CastlingRights::WHITE_QUEENSIDE, 'Q'),
            (CastlingRights::BLACK_KINGSIDE, 'k'),
            (CastlingRights::BLACK_QUEENSIDE, 'q'),
        ];

        for (flag, c) in flags {
            if self.has(flag) {
                write!(f, "{}", c)?;
            }
        }

        Ok(())
    }
}

/*----------------------------------------------------------------*/

#[test]
fn validate_castling_rights() {
    let rights = CastlingRights::ALL.remove(CastlingRights::kingside(Color::Black));

    assert_eq!(rights.index(), 0b1011);
    assert!(rights.has(CastlingRights::both(Color::White)));
    assert!(!rights.has(CastlingRights::both(Color::Black)));
    assert!(rights.has(CastlingRights::queenside(Color::Black)));
    assert_eq!(!rights, CastlingRights::BLACK_KINGSIDE);
    assert_eq!(CastlingRights::from_bits(0xFF), CastlingRights::ALL);
}

#[test]
fn parse_castling_rights() {
    assert_eq!("KQkq".parse::<CastlingRights>(), Ok(CastlingRights::ALL));
    assert_eq!("-".parse::<CastlingRights>(), Ok(CastlingRights::NONE));
    assert_eq!("qK".parse::<CastlingRights>().map(|r| r.to_string()), Ok("Kq".to_owned()));
    assert!("".parse::<CastlingRights>().is_err());
    assert!("KK".parse::<CastlingRights>().is_err());
    assert!("KX".parse::<CastlingRights>().is_err());
    assert_eq!(CastlingRights::NONE.to_string(), "-");
    assert_eq!(CastlingRights::ALL.to_string(), "KQkq");
}
