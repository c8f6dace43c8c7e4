use core::{fmt, str::FromStr};
use core::ops::{Index, IndexMut};
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King
}

impl Piece {
    #[inline]
    pub const fn index(i: usize) -> Piece {
        if i < Piece::COUNT {
            return Piece::ALL[i];
        }

        panic!("Piece::index(): Index out of bounds");
    }

    #[inline]
    pub const fn try_index(i: usize) -> Option<Piece> {
        if i < Piece::COUNT {
            return Some(Piece::ALL[i]);
        }

        None
    }

    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Rook | Piece::Queen)
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        !matches!(self, Piece::Pawn | Piece::King)
    }

    /*----------------------------------------------------------------*/

    pub const COUNT: usize = 6;
    pub const ALL: [Piece; Self::COUNT] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Promotion choices in generation order.
    pub const PROMOTIONS: [Piece; 4] = [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen];

    const CHARS: [char; Self::COUNT] = ['p', 'n', 'b', 'r', 'q', 'k'];
}

impl<T> Index<Piece> for [T; Piece::COUNT] {
    type Output = T;

    #[inline]
    fn index(&self, piece: Piece) -> &Self::Output {
        &self.as_slice()[piece as usize]
    }
}

impl<T> IndexMut<Piece> for [T; Piece::COUNT] {
    #[inline]
    fn index_mut(&mut self, piece: Piece) -> &mut Self::Output {
        &mut self.as_mut_slice()[piece as usize]
    }
}

/*----------------------------------------------------------------*/

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
#[error("invalid piece, expected one of p, n, b, r, q, k")]
pub struct PieceParseError;

/// Case-insensitive, the color of a FEN letter is decided by the caller.
impl TryFrom<char> for Piece {
    type Error = PieceParseError;

    #[inline]
    fn try_from(c: char) -> Result<Self, Self::Error> {
        let c = c.to_ascii_lowercase();

        Piece::CHARS
            .iter()
            .position(|&piece| piece == c)
            .map(Piece::index)
            .ok_or(PieceParseError)
    }
}

impl From<Piece> for char {
    #[inline]
    fn from(piece: Piece) -> Self {
        Piece::CHARS[piece]
    }
}

impl FromStr for Piece {
    type Err = PieceParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Piece, PieceParseError> {
        crate::sole_char(s).ok_or(PieceParseError)?.try_into()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", char::from(*self))
    }
}

/*----------------------------------------------------------------*/

#[test]
fn validate_piece() {
    assert_eq!(Piece::try_from('N'), Ok(Piece::Knight));
    assert_eq!(Piece::try_from('q'), Ok(Piece::Queen));
    assert_eq!(Piece::try_from('x'), Err(PieceParseError));
    assert_eq!("K".parse::<Piece>(), Ok(Piece::King));
    assert!("kk".parse::<Piece>().is_err());
    assert_eq!(char::from(Piece::Rook), 'r');
    assert_eq!(Piece::try_index(6), None);
    assert!(Piece::Queen.is_slider());
    assert!(!Piece::Knight.is_slider());
    assert!(!Piece::King.is_promotion());
    assert!(!Piece::Pawn.is_promotion());
    assert!(Piece::PROMOTIONS.iter().all(|p| p.is_promotion()));
}
