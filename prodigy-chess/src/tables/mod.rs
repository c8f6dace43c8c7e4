use std::time::Instant;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;
use crate::*;

mod attacks;
mod magic;

pub use attacks::*;
pub use magic::*;

/*----------------------------------------------------------------*/

/// Attack lookups for every piece plus the square-pair ray table. Built once and shared read-only.
#[derive(Debug, Clone)]
pub struct Tables {
    bishops: MagicBitboards,
    rooks: MagicBitboards,
    rays: Box<[[Bitboard; Square::COUNT]]>,
}

impl Tables {
    pub fn new(rng: &mut impl Rng) -> Tables {
        let start = Instant::now();

        let bishops = MagicBitboards::new(rng, bishop_relevant_blockers, bishop_attacks_slow);
        let rooks = MagicBitboards::new(rng, rook_relevant_blockers, rook_attacks_slow);
        let mut rays = vec![[Bitboard::EMPTY; Square::COUNT]; Square::COUNT].into_boxed_slice();

        for &origin in &Square::ALL {
            for &target in &Square::ALL {
                if origin == target {
                    continue;
                }

                let same_line = origin.file() == target.file() || origin.rank() == target.rank();
                let dx = (origin.file() as i8 - target.file() as i8).abs();
                let dy = (origin.rank() as i8 - target.rank() as i8).abs();

                let between = if same_line {
                    rooks.attacks(origin, target.bitboard()) & rooks.attacks(target, origin.bitboard())
                } else if dx == dy {
                    bishops.attacks(origin, target.bitboard()) & bishops.attacks(target, origin.bitboard())
                } else {
                    continue;
                };

                rays[origin as usize][target] = between | target;
            }
        }

        debug!(elapsed = ?start.elapsed(), "built attack tables");

        Tables { bishops, rooks, rays }
    }

    pub fn from_seed(seed: u64) -> Tables {
        Tables::new(&mut StdRng::seed_from_u64(seed))
    }

    /*----------------------------------------------------------------*/

    /// Squares a `piece` of `color` on `sq` attacks given `occupancy`.
    #[inline(always)]
    pub fn attack_set(&self, color: Color, piece: Piece, sq: Square, occupancy: Bitboard) -> Bitboard {
        match piece {
            Piece::Pawn => pawn_attacks(sq, color),
            Piece::Knight => knight_attacks(sq),
            Piece::Bishop => self.bishop_attacks(sq, occupancy),
            Piece::Rook => self.rook_attacks(sq, occupancy),
            Piece::Queen => self.queen_attacks(sq, occupancy),
            Piece::King => king_attacks(sq),
        }
    }

    #[inline(always)]
    pub fn pawn_attacks(&self, sq: Square, color: Color) -> Bitboard {
        pawn_attacks(sq, color)
    }

    #[inline(always)]
    pub fn knight_attacks(&self, sq: Square) -> Bitboard {
        knight_attacks(sq)
    }

    #[inline(always)]
    pub fn king_attacks(&self, sq: Square) -> Bitboard {
        king_attacks(sq)
    }

    #[inline(always)]
    pub fn bishop_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.bishops.attacks(sq, occupancy)
    }

    #[inline(always)]
    pub fn rook_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.rooks.attacks(sq, occupancy)
    }

    #[inline(always)]
    pub fn queen_attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.bishop_attacks(sq, occupancy) | self.rook_attacks(sq, occupancy)
    }

    /// Squares strictly between `origin` and `target` plus `target` itself when they share a line, else empty.
    #[inline(always)]
    pub fn ray(&self, origin: Square, target: Square) -> Bitboard {
        self.rays[origin as usize][target]
    }

    #[inline(always)]
    pub fn bishops(&self) -> &MagicBitboards {
        &self.bishops
    }

    #[inline(always)]
    pub fn rooks(&self) -> &MagicBitboards {
        &self.rooks
    }
}

impl Default for Tables {
    fn default() -> Self {
        Tables::new(&mut rand::rng())
    }
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;
    use super::*;

    static TABLES: LazyLock<Tables> = LazyLock::new(|| Tables::from_seed(1));

    #[test]
    fn rays() {
        let tables = &*TABLES;

        assert_eq!(tables.ray(Square::A1, Square::A1), Bitboard::EMPTY);
        assert_eq!(tables.ray(Square::A1, Square::A2), Square::A2.bitboard());
        assert_eq!(tables.ray(Square::A1, Square::A4), Square::A2.bitboard() | Square::A3 | Square::A4);
        assert_eq!(tables.ray(Square::A4, Square::A1), Square::A3.bitboard() | Square::A2 | Square::A1);
        assert_eq!(tables.ray(Square::E1, Square::H1), Square::F1.bitboard() | Square::G1 | Square::H1);
        assert_eq!(tables.ray(Square::C1, Square::F4), Square::D2.bitboard() | Square::E3 | Square::F4);
        assert_eq!(tables.ray(Square::H1, Square::A8).popcnt(), 7);
        assert_eq!(tables.ray(Square::A1, Square::B3), Bitboard::EMPTY);
        assert_eq!(tables.ray(Square::E4, Square::G5), Bitboard::EMPTY);
    }

    #[test]
    fn attack_sets() {
        let tables = &*TABLES;
        let occupancy = Square::E6.bitboard() | Square::C4 | Square::G2 | Square::B7;

        for &sq in &Square::ALL {
            assert_eq!(tables.rook_attacks(sq, occupancy), rook_attacks_slow(sq, occupancy));
            assert_eq!(tables.bishop_attacks(sq, occupancy), bishop_attacks_slow(sq, occupancy));
            assert_eq!(
                tables.attack_set(Color::White, Piece::Queen, sq, occupancy),
                rook_attacks_slow(sq, occupancy) | bishop_attacks_slow(sq, occupancy),
            );
        }

        assert_eq!(tables.attack_set(Color::Black, Piece::Pawn, Square::E4, occupancy), Square::D3.bitboard() | Square::F3);
        assert_eq!(tables.attack_set(Color::White, Piece::Knight, Square::G1, occupancy).popcnt(), 3);
        assert_eq!(tables.attack_set(Color::White, Piece::King, Square::A1, occupancy).popcnt(), 3);
    }
}
