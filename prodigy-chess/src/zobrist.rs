use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::trace;
use crate::*;

/*----------------------------------------------------------------*/

/// Random keys hashed into a [`Position`]. Built once and shared read-only.
#[derive(Debug, Clone)]
pub struct Zobrist {
    pieces: [[[u64; Square::COUNT]; Piece::COUNT]; Color::COUNT],
    castling_rights: [u64; CastlingRights::COUNT],
    en_passant: [u64; File::COUNT],
    active_color: u64,
}

impl Zobrist {
    pub fn new(rng: &mut impl Rng) -> Zobrist {
        let mut zobrist = Zobrist {
            pieces: [[[0; Square::COUNT]; Piece::COUNT]; Color::COUNT],
            castling_rights: [0; CastlingRights::COUNT],
            en_passant: [0; File::COUNT],
            active_color: 0,
        };

        for color_keys in &mut zobrist.pieces {
            for piece_keys in color_keys.iter_mut() {
                rng.fill(&mut piece_keys[..]);
            }
        }

        rng.fill(&mut zobrist.castling_rights[..]);
        rng.fill(&mut zobrist.en_passant[..]);
        zobrist.active_color = rng.random();

        trace!("generated zobrist keys");

        zobrist
    }

    pub fn from_seed(seed: u64) -> Zobrist {
        Zobrist::new(&mut StdRng::seed_from_u64(seed))
    }

    /*----------------------------------------------------------------*/

    #[inline(always)]
    pub fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.pieces[color][piece][sq]
    }

    /// One key per combination of castling flags, not per flag.
    #[inline(always)]
    pub fn castling_rights(&self, rights: CastlingRights) -> u64 {
        self.castling_rights[rights.index()]
    }

    #[inline(always)]
    pub fn en_passant(&self, file: File) -> u64 {
        self.en_passant[file]
    }

    /// Hashed in while white is to move.
    #[inline(always)]
    pub fn active_color(&self) -> u64 {
        self.active_color
    }
}

impl Default for Zobrist {
    fn default() -> Self {
        Zobrist::new(&mut rand::rng())
    }
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_keys_are_reproducible() {
        let a = Zobrist::from_seed(7);
        let b = Zobrist::from_seed(7);
        let c = Zobrist::from_seed(8);

        assert_eq!(a.piece(Color::Black, Piece::Queen, Square::D8), b.piece(Color::Black, Piece::Queen, Square::D8));
        assert_eq!(a.active_color(), b.active_color());
        assert_ne!(a.active_color(), c.active_color());
    }

    #[test]
    fn keys_are_distinct() {
        let zobrist = Zobrist::from_seed(0);
        let mut keys = Vec::new();

        for &color in &Color::ALL {
            for &piece in &Piece::ALL {
                for &sq in &Square::ALL {
                    keys.push(zobrist.piece(color, piece, sq));
                }
            }
        }

        for i in 0..CastlingRights::COUNT {
            keys.push(zobrist.castling_rights(CastlingRights::from_bits(i as u8)));
        }

        for &file in &File::ALL {
            keys.push(zobrist.en_passant(file));
        }

        keys.push(zobrist.active_color());

        let len = keys.len();
        keys.sort_unstable();
        keys.dedup();

        assert_eq!(keys.len(), len);
    }
}
