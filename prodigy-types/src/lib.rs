mod bitboard;
mod castling;
mod color;
mod dir;
mod file;
mod piece;
mod rank;
mod side;
mod square;

pub use bitboard::*;
pub use castling::*;
pub use color::*;
pub use dir::*;
pub use file::*;
pub use piece::*;
pub use rank::*;
pub use side::*;
pub use square::*;

/// The only character of `s`, if it has exactly one.
#[inline]
pub(crate) fn sole_char(s: &str) -> Option<char> {
    let mut chars = s.chars();

    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
