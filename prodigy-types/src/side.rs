use crate::{Color, Rank};

/// Type-level side to move, so per-color code is monomorphized instead of branching on a [`Color`].
pub trait Side {
    const COLOR: Color;
    type Opponent: Side;

    /// Rank pawns start on.
    const PAWN_RANK: Rank = Rank::Second.relative_to(Self::COLOR);
    /// Rank a double push lands on.
    const DOUBLE_PUSH_RANK: Rank = Rank::Fourth.relative_to(Self::COLOR);
    /// Rank a pawn must stand on to capture en passant.
    const EN_PASSANT_RANK: Rank = Rank::Fifth.relative_to(Self::COLOR);
    const PROMOTION_RANK: Rank = Rank::Eighth.relative_to(Self::COLOR);
    const BACK_RANK: Rank = Rank::First.relative_to(Self::COLOR);

    /// Direction of a pawn push in rank steps.
    const PAWN_DY: i8 = match Self::COLOR {
        Color::White => 1,
        Color::Black => -1,
    };
}

#[derive(Debug, Copy, Clone)]
pub struct White;

#[derive(Debug, Copy, Clone)]
pub struct Black;

impl Side for White {
    const COLOR: Color = Color::White;
    type Opponent = Black;
}

impl Side for Black {
    const COLOR: Color = Color::Black;
    type Opponent = White;
}

/*----------------------------------------------------------------*/

#[test]
fn validate_side() {
    assert_eq!(<White as Side>::Opponent::COLOR, Color::Black);
    assert_eq!(<Black as Side>::Opponent::COLOR, Color::White);
    assert_eq!(White::PAWN_RANK, Rank::Second);
    assert_eq!(Black::PAWN_RANK, Rank::Seventh);
    assert_eq!(Black::EN_PASSANT_RANK, Rank::Fourth);
    assert_eq!(Black::PROMOTION_RANK, Rank::First);
    assert_eq!(Black::PAWN_DY, -1);
}
