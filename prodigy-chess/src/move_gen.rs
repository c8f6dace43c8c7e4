use core::ops::{Deref, DerefMut};
use std::sync::Arc;
use arrayvec::ArrayVec;
use crate::*;

/*----------------------------------------------------------------*/

pub const MAX_MOVES: usize = 256;

#[derive(Debug, Clone, Default)]
pub struct MoveList(ArrayVec<Move, MAX_MOVES>);

impl MoveList {
    #[inline]
    pub fn empty() -> Self {
        MoveList(ArrayVec::new())
    }
}

impl Deref for MoveList {
    type Target = ArrayVec<Move, MAX_MOVES>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveList {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = arrayvec::IntoIter<Move, MAX_MOVES>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = core::slice::Iter<'a, Move>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/*----------------------------------------------------------------*/

/// Produces every legal move of a [`Position`]. Holds no per-position state.
#[derive(Debug, Clone)]
pub struct MoveGenerator {
    tables: Arc<Tables>,
}

impl MoveGenerator {
    #[inline]
    pub fn new(tables: Arc<Tables>) -> MoveGenerator {
        MoveGenerator { tables }
    }

    #[inline]
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    /// Legal moves for the side to move, in a fixed order for a given position.
    #[inline]
    pub fn generate(&self, position: &Position) -> MoveList {
        match position.active_color() {
            Color::White => self.generate_as::<White>(position),
            Color::Black => self.generate_as::<Black>(position),
        }
    }

    /*----------------------------------------------------------------*/

    #[inline(always)]
    fn pseudo_legal_moves<S: Side>(
        &self,
        position: &Position,
        piece: Piece,
        origin: Square,
        occupancy: Bitboard,
    ) -> Bitboard {
        let us = S::COLOR;

        if piece != Piece::Pawn {
            return self.tables.attack_set(us, piece, origin, occupancy) & !position.all_pieces(us);
        }

        let mut pushes = Bitboard::EMPTY;

        if let Some(single) = origin.try_offset(0, S::PAWN_DY) {
            pushes = single.bitboard().without(occupancy);

            if !pushes.is_empty() && origin.rank() == S::PAWN_RANK {
                if let Some(double) = single.try_offset(0, S::PAWN_DY) {
                    pushes |= double.bitboard().without(occupancy);
                }
            }
        }

        (self.tables.pawn_attacks(origin, us) & position.all_pieces(!us)) | pushes
    }

    /// Union of every square `color` attacks, with the enemy king lifted off the board.
    fn king_danger<S: Side>(&self, position: &Position, occupancy: Bitboard) -> Bitboard {
        let them = <S::Opponent as Side>::COLOR;
        let kingless = occupancy.without(position.pieces(S::COLOR, Piece::King));
        let mut danger = Bitboard::EMPTY;

        for &piece in &Piece::ALL {
            for origin in position.pieces(them, piece) {
                danger |= self.tables.attack_set(them, piece, origin, kingless);
            }
        }

        danger
    }

    /// [`MoveGenerator::generate`] with the side to move known at compile time.
    pub fn generate_as<S: Side>(&self, position: &Position) -> MoveList {
        debug_assert_eq!(S::COLOR, position.active_color());

        let tables = &*self.tables;
        let us = S::COLOR;
        let them = <S::Opponent as Side>::COLOR;

        let mut moves = MoveList::empty();
        let ours = position.all_pieces(us);
        let theirs = position.all_pieces(them);
        let occupancy = ours | theirs;
        let king = position.king(us);
        let king_danger = self.king_danger::<S>(position, occupancy);

        let attackers = [Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]
            .into_iter()
            .fold(Bitboard::EMPTY, |acc, piece| {
                acc | (tables.attack_set(us, piece, king, occupancy) & position.pieces(them, piece))
            });
        let attacker_count = attackers.popcnt();

        debug_assert!(attacker_count <= 2, "more than two pieces give check");

        let king_moves = self.pseudo_legal_moves::<S>(position, Piece::King, king, occupancy).without(king_danger);
        for target in king_moves {
            moves.push(Move::new(king, target, None));
        }

        if attacker_count == 2 {
            return moves;
        }

        let check_evasion = match attackers.try_next_square() {
            Some(attacker) => attackers | tables.ray(king, attacker),
            None => Bitboard::FULL,
        };

        let mut pin_masks = [Bitboard::FULL; Square::COUNT];
        let xray = |attacks: fn(&Tables, Square, Bitboard) -> Bitboard| {
            let attack_set = attacks(tables, king, occupancy);
            attack_set ^ attacks(tables, king, occupancy ^ (ours & attack_set))
        };
        let pinners = (xray(Tables::bishop_attacks) & position.diagonal_sliders(them))
            | (xray(Tables::rook_attacks) & position.orthogonal_sliders(them));

        for pinner in pinners {
            let ray = tables.ray(king, pinner);
            pin_masks[(ray & ours).next_square()] = ray;
        }

        for piece in [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen] {
            for origin in position.pieces(us, piece) {
                let targets = self.pseudo_legal_moves::<S>(position, piece, origin, occupancy)
                    & check_evasion
                    & pin_masks[origin];

                for target in targets {
                    moves.push(Move::new(origin, target, None));
                }
            }
        }

        for origin in position.pieces(us, Piece::Pawn) {
            let targets = self.pseudo_legal_moves::<S>(position, Piece::Pawn, origin, occupancy)
                & check_evasion
                & pin_masks[origin];

            for target in targets {
                if target.rank() == S::PROMOTION_RANK {
                    for promotion in Piece::PROMOTIONS {
                        moves.push(Move::new(origin, target, Some(promotion)));
                    }
                } else {
                    moves.push(Move::new(origin, target, None));
                }
            }

            if let Some(target) = position.en_passant_target() {
                if origin.rank() == S::EN_PASSANT_RANK && tables.ray(origin, target) == target.bitboard() {
                    let captured = target.offset(0, -S::PAWN_DY);

                    debug_assert!(!occupancy.has(target));
                    debug_assert!(position.pieces(them, Piece::Pawn).has(captured));

                    // Both pawns leave their rank at once, which the pin masks cannot see.
                    let after = (occupancy ^ origin ^ captured) | target;
                    let exposed = (tables.bishop_attacks(king, after) & position.diagonal_sliders(them))
                        | (tables.rook_attacks(king, after) & position.orthogonal_sliders(them));

                    if exposed.is_empty() && !(check_evasion & (target.bitboard() | captured)).is_empty() {
                        moves.push(Move::new(origin, target, None));
                    }
                }
            }
        }

        if attacker_count == 0 {
            let king_origin = Square::new(File::E, S::BACK_RANK);
            let castles = [
                (CastlingRights::kingside(us), File::G, File::H),
                (CastlingRights::queenside(us), File::C, File::A),
            ];

            for (rights, king_file, rook_file) in castles {
                if !position.castling_rights().has(rights) {
                    continue;
                }

                let king_target = Square::new(king_file, S::BACK_RANK);
                let rook_origin = Square::new(rook_file, S::BACK_RANK);

                if (tables.ray(king_origin, rook_origin) & occupancy) == rook_origin.bitboard()
                    && (king_danger & tables.ray(king_origin, king_target)).is_empty()
                {
                    moves.push(Move::new(king_origin, king_target, None));
                }
            }
        }

        moves
    }
}

/*----------------------------------------------------------------*/
