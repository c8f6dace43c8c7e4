use crate::*;

impl Position {
    /// Plays `mv` for the side to move. The move must be legal in this position.
    #[inline]
    pub fn apply(&self, mv: Move, zobrist: &Zobrist) -> Position {
        match self.active_color {
            Color::White => self.apply_as::<White>(mv, zobrist),
            Color::Black => self.apply_as::<Black>(mv, zobrist),
        }
    }

    /// [`Position::apply`] with the side to move known at compile time.
    pub fn apply_as<S: Side>(&self, mv: Move, zobrist: &Zobrist) -> Position {
        debug_assert_eq!(S::COLOR, self.active_color, "Position::apply(): Wrong side to move");

        let us = S::COLOR;
        let them = !us;
        let (origin, target) = (mv.origin(), mv.target());

        let mut next = *self;
        next.active_color = them;
        next.en_passant_target = None;
        next.halfmove_clock = self.halfmove_clock.saturating_add(1);
        next.hash ^= zobrist.active_color();

        if let Some(sq) = self.en_passant_target {
            next.hash ^= zobrist.en_passant(sq.file());
        }

        let moved = match self.piece_type_at(us, origin) {
            Some(piece) => piece,
            None => panic!("Position::apply(): No piece to move on {}", origin),
        };

        match moved {
            Piece::Pawn => {
                next.halfmove_clock = 0;
                next.toggle(us, Piece::Pawn, origin, zobrist);

                if let Some(promotion) = mv.promotion() {
                    debug_assert!(promotion.is_promotion());
                    next.toggle(us, promotion, target, zobrist);
                } else {
                    next.toggle(us, Piece::Pawn, target, zobrist);

                    if origin.rank() == S::PAWN_RANK {
                        if target.rank() == S::DOUBLE_PUSH_RANK {
                            let file = target.file();

                            next.en_passant_target = Some(Square::new(file, Rank::Third.relative_to(us)));
                            next.hash ^= zobrist.en_passant(file);
                        }
                    } else if self.en_passant_target == Some(target) {
                        let captured = target.offset(0, -S::PAWN_DY);
                        next.toggle(them, Piece::Pawn, captured, zobrist);
                    }
                }
            }
            Piece::Rook => {
                next.toggle(us, Piece::Rook, origin, zobrist);
                next.toggle(us, Piece::Rook, target, zobrist);

                if origin == Square::new(File::H, S::BACK_RANK) {
                    next.revoke(CastlingRights::kingside(us), zobrist);
                } else if origin == Square::new(File::A, S::BACK_RANK) {
                    next.revoke(CastlingRights::queenside(us), zobrist);
                }
            }
            Piece::King => {
                next.toggle(us, Piece::King, origin, zobrist);
                next.toggle(us, Piece::King, target, zobrist);

                let rook_move = if self.castling_rights.has(CastlingRights::kingside(us))
                    && target == Square::new(File::G, S::BACK_RANK)
                {
                    Some((File::H, File::F))
                } else if self.castling_rights.has(CastlingRights::queenside(us))
                    && target == Square::new(File::C, S::BACK_RANK)
                {
                    Some((File::A, File::D))
                } else {
                    None
                };

                if let Some((rook_origin, rook_target)) = rook_move {
                    next.toggle(us, Piece::Rook, Square::new(rook_origin, S::BACK_RANK), zobrist);
                    next.toggle(us, Piece::Rook, Square::new(rook_target, S::BACK_RANK), zobrist);
                }

                next.revoke(CastlingRights::both(us), zobrist);
            }
            Piece::Knight | Piece::Bishop | Piece::Queen => {
                next.toggle(us, moved, origin, zobrist);
                next.toggle(us, moved, target, zobrist);
            }
        }

        if let Some(captured) = self.piece_type_at(them, target) {
            debug_assert_ne!(captured, Piece::King, "Position::apply(): King captured");

            next.halfmove_clock = 0;
            next.toggle(them, captured, target, zobrist);

            if captured == Piece::Rook {
                let their_back_rank = <S::Opponent as Side>::BACK_RANK;

                if target == Square::new(File::H, their_back_rank) {
                    next.revoke(CastlingRights::kingside(them), zobrist);
                } else if target == Square::new(File::A, their_back_rank) {
                    next.revoke(CastlingRights::queenside(them), zobrist);
                }
            }
        }

        if us == Color::Black {
            next.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        debug_assert_eq!(next.hash, next.compute_hash(zobrist));

        next
    }

    /*----------------------------------------------------------------*/

    #[inline(always)]
    fn toggle(&mut self, color: Color, piece: Piece, sq: Square, zobrist: &Zobrist) {
        self.board[color][piece] ^= sq;
        self.hash ^= zobrist.piece(color, piece, sq);
    }

    #[inline(always)]
    fn revoke(&mut self, rights: CastlingRights, zobrist: &Zobrist) {
        self.hash ^= zobrist.castling_rights(self.castling_rights);
        self.castling_rights = self.castling_rights.remove(rights);
        self.hash ^= zobrist.castling_rights(self.castling_rights);
    }
}
