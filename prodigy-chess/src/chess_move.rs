use std::{fmt, num::NonZeroU16, str::FromStr};
use thiserror::Error;
use crate::*;

/*----------------------------------------------------------------*/

/*
Bit Layout:
bits 0-5: Origin square
bits 6-11: Target square
bits 12-15: Promotion piece index, 0 when the move does not promote
*/
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move { bits: NonZeroU16 }

impl Move {
    #[inline]
    pub const fn new(origin: Square, target: Square, promotion: Option<Piece>) -> Move {
        let mut bits = 0;

        bits |= origin as u16;
        bits |= (target as u16) << 6;

        if let Some(piece) = promotion {
            debug_assert!(piece.is_promotion());
            bits |= (piece as u16) << 12;
        }

        Move::from_bits(bits)
    }

    /// Panics on zero, which no move encodes since origin and target always differ.
    #[inline]
    pub const fn from_bits(bits: u16) -> Move {
        match NonZeroU16::new(bits) {
            Some(bits) => Move { bits },
            None => panic!("Move::from_bits(): Zero is not a valid move"),
        }
    }

    #[inline]
    pub const fn try_from_bits(bits: u16) -> Option<Move> {
        match NonZeroU16::new(bits) {
            Some(bits) => Some(Move { bits }),
            None => None,
        }
    }

    /*----------------------------------------------------------------*/

    #[inline(always)]
    pub const fn bits(self) -> u16 {
        self.bits.get()
    }

    #[inline(always)]
    pub const fn origin(self) -> Square {
        Square::index((self.bits.get() & 0b111111) as usize)
    }

    #[inline(always)]
    pub const fn target(self) -> Square {
        Square::index(((self.bits.get() >> 6) & 0b111111) as usize)
    }

    #[inline(always)]
    pub const fn promotion(self) -> Option<Piece> {
        match self.bits.get() >> 12 {
            0 => None,
            i => Piece::try_index(i as usize),
        }
    }
}

/*----------------------------------------------------------------*/

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum MoveParseError {
    #[error("invalid origin square")]
    InvalidOrigin,
    #[error("invalid target square")]
    InvalidTarget,
    #[error("invalid promotion piece, expected one of n, b, r, q")]
    InvalidPromotion,
    #[error("expected 4 or 5 characters")]
    InvalidLength,
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !s.is_ascii() || !(4..=5).contains(&s.len()) {
            return Err(MoveParseError::InvalidLength);
        }

        let origin = s[0..2].parse::<Square>().map_err(|_| MoveParseError::InvalidOrigin)?;
        let target = s[2..4].parse::<Square>().map_err(|_| MoveParseError::InvalidTarget)?;

        if origin == target {
            return Err(MoveParseError::InvalidTarget);
        }

        let promotion = match s.get(4..) {
            Some("") | None => None,
            Some(p) => {
                let piece = p.parse::<Piece>().map_err(|_| MoveParseError::InvalidPromotion)?;

                if !piece.is_promotion() || p.chars().any(|c| c.is_ascii_uppercase()) {
                    return Err(MoveParseError::InvalidPromotion);
                }

                Some(piece)
            }
        };

        Ok(Move::new(origin, target, promotion))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.origin(), self.target())?;

        if let Some(piece) = self.promotion() {
            write!(f, "{}", piece)?;
        }

        Ok(())
    }
}

/*----------------------------------------------------------------*/

#[test]
fn validate_move() {
    let mv = Move::new(Square::E2, Square::E4, None);

    assert_eq!(mv.origin(), Square::E2);
    assert_eq!(mv.target(), Square::E4);
    assert_eq!(mv.promotion(), None);
    assert_eq!(mv.bits(), 12 | (28 << 6));
    assert_eq!(Move::from_bits(mv.bits()), mv);
    assert_eq!(Move::try_from_bits(0), None);

    let promo = Move::new(Square::B7, Square::A8, Some(Piece::Knight));

    assert_eq!(promo.promotion(), Some(Piece::Knight));
    assert_eq!(promo.to_string(), "b7a8n");
}

#[test]
fn parse_move() {
    assert_eq!("e2e4".parse::<Move>(), Ok(Move::new(Square::E2, Square::E4, None)));
    assert_eq!("h2h1q".parse::<Move>(), Ok(Move::new(Square::H2, Square::H1, Some(Piece::Queen))));
    assert_eq!("e2e4e".parse::<Move>(), Err(MoveParseError::InvalidPromotion));
    assert_eq!("e7e8k".parse::<Move>(), Err(MoveParseError::InvalidPromotion));
    assert_eq!("e7e8Q".parse::<Move>(), Err(MoveParseError::InvalidPromotion));
    assert_eq!("z2e4".parse::<Move>(), Err(MoveParseError::InvalidOrigin));
    assert_eq!("e2e9".parse::<Move>(), Err(MoveParseError::InvalidTarget));
    assert_eq!("e2e2".parse::<Move>(), Err(MoveParseError::InvalidTarget));
    assert_eq!("e2".parse::<Move>(), Err(MoveParseError::InvalidLength));
    assert_eq!("e2e4qq".parse::<Move>(), Err(MoveParseError::InvalidLength));
}
