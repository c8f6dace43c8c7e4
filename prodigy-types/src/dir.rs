use crate::{Bitboard, File, Rank};

pub trait Direction {
    const DX: i8;
    const DY: i8;

    const SHIFT: i8 = Self::DY * 8 + Self::DX;

    /// Squares that stay on the board after one step.
    const MASK: Bitboard = {
        let mut mask = Bitboard::FULL;

        if Self::DX > 0 {
            mask = mask.without(File::H.bitboard());
        } else if Self::DX < 0 {
            mask = mask.without(File::A.bitboard());
        }

        if Self::DY > 0 {
            mask = mask.without(Rank::Eighth.bitboard());
        } else if Self::DY < 0 {
            mask = mask.without(Rank::First.bitboard());
        }

        mask
    };
}

/*----------------------------------------------------------------*/

pub struct North;
pub struct South;
pub struct East;
pub struct West;

pub struct NorthEast;
pub struct NorthWest;
pub struct SouthEast;
pub struct SouthWest;

/*----------------------------------------------------------------*/

macro_rules! impl_direction {
    ($($dir:ident: $dx:expr, $dy:expr;)*) => {$(
        impl Direction for $dir {
            const DX: i8 = $dx;
            const DY: i8 = $dy;
        }
    )*}
}

impl_direction! {
    North: 0, 1;
    South: 0, -1;
    East: 1, 0;
    West: -1, 0;
    NorthEast: 1, 1;
    NorthWest: -1, 1;
    SouthEast: 1, -1;
    SouthWest: -1, -1;
}

/*----------------------------------------------------------------*/

#[test]
fn validate_direction() {
    assert_eq!(North::SHIFT, 8);
    assert_eq!(SouthWest::SHIFT, -9);
    assert_eq!(East::MASK, Bitboard(!File::H.bitboard().0));
    assert_eq!(South::MASK, Bitboard(!Rank::First.bitboard().0));
    assert!(!NorthWest::MASK.has(crate::Square::A4));
    assert!(!NorthWest::MASK.has(crate::Square::D8));
    assert!(NorthWest::MASK.has(crate::Square::B7));
}
