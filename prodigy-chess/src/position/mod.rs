mod apply;
mod parse;
mod print;

pub use parse::*;

/*----------------------------------------------------------------*/

use crate::*;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Immutable snapshot of a game. Every transition produces a new value through [`Position::apply`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    board: [[Bitboard; Piece::COUNT]; Color::COUNT],
    active_color: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
    hash: u64,
}

impl Position {
    fn from_parts(
        board: [[Bitboard; Piece::COUNT]; Color::COUNT],
        active_color: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
        zobrist: &Zobrist,
    ) -> Position {
        let mut position = Position {
            board,
            active_color,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            hash: 0,
        };

        position.hash = position.compute_hash(zobrist);
        position
    }

    pub fn starting_position(zobrist: &Zobrist) -> Position {
        match Position::from_fen(STARTING_POSITION_FEN, zobrist) {
            Ok(position) => position,
            Err(err) => unreachable!("starting position FEN is malformed: {}", err),
        }
    }

    /// Hash recomputed from every field. [`Position::apply`] keeps [`Position::hash`] equal to this incrementally.
    pub fn compute_hash(&self, zobrist: &Zobrist) -> u64 {
        let mut hash = 0;

        for &color in &Color::ALL {
            for &piece in &Piece::ALL {
                for sq in self.pieces(color, piece) {
                    hash ^= zobrist.piece(color, piece, sq);
                }
            }
        }

        if self.active_color == Color::White {
            hash ^= zobrist.active_color();
        }

        hash ^= zobrist.castling_rights(self.castling_rights);

        if let Some(sq) = self.en_passant_target {
            hash ^= zobrist.en_passant(sq.file());
        }

        hash
    }

    /*----------------------------------------------------------------*/

    #[inline(always)]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.board[color][piece]
    }

    #[inline]
    pub fn all_pieces(&self, color: Color) -> Bitboard {
        self.board[color].iter().fold(Bitboard::EMPTY, |acc, &bb| acc | bb)
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.all_pieces(Color::White) | self.all_pieces(Color::Black)
    }

    #[inline]
    pub fn diagonal_sliders(&self, color: Color) -> Bitboard {
        self.pieces(color, Piece::Bishop) | self.pieces(color, Piece::Queen)
    }

    #[inline]
    pub fn orthogonal_sliders(&self, color: Color) -> Bitboard {
        self.pieces(color, Piece::Rook) | self.pieces(color, Piece::Queen)
    }

    /// Panics when `color` has no king, which no position reached through legal play lacks.
    #[inline]
    pub fn king(&self, color: Color) -> Square {
        self.pieces(color, Piece::King).next_square()
    }

    #[inline]
    pub fn piece_type_at(&self, color: Color, sq: Square) -> Option<Piece> {
        Piece::ALL.into_iter().find(|&piece| self.pieces(color, piece).has(sq))
    }

    /*----------------------------------------------------------------*/

    #[inline(always)]
    pub fn active_color(&self) -> Color { self.active_color }

    #[inline(always)]
    pub fn castling_rights(&self) -> CastlingRights { self.castling_rights }

    #[inline(always)]
    pub fn en_passant_target(&self) -> Option<Square> { self.en_passant_target }

    #[inline(always)]
    pub fn halfmove_clock(&self) -> u16 { self.halfmove_clock }

    #[inline(always)]
    pub fn fullmove_number(&self) -> u16 { self.fullmove_number }

    #[inline(always)]
    pub fn hash(&self) -> u64 { self.hash }
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use std::sync::LazyLock;
    use super::*;

    static ZOBRIST: LazyLock<Zobrist> = LazyLock::new(|| Zobrist::from_seed(0x5EED));

    fn position(fen: &str) -> Position {
        Position::from_fen(fen, &ZOBRIST).unwrap()
    }

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    /// Applies `mv` and checks every field the move is expected to touch.
    fn test_move(
        before: Position,
        mv: Move,
        expected_castling_rights: CastlingRights,
        expected_en_passant_target: Option<Square>,
    ) -> Position {
        let zobrist = &*ZOBRIST;
        let color = before.active_color();
        let after = before.apply(mv, zobrist);
        let context = format!("before: {}\nafter: {}\nmove: {}", before, after, mv);

        let moved = before.piece_type_at(color, mv.origin()).expect(&context);
        let landed = after.piece_type_at(color, mv.target()).expect(&context);

        match mv.promotion() {
            Some(promotion) => {
                assert_eq!(moved, Piece::Pawn, "{}", context);
                assert_eq!(landed, promotion, "{}", context);
            }
            None => assert_eq!(landed, moved, "{}", context),
        }

        assert_eq!(after.active_color(), !color, "{}", context);
        assert_eq!(after.castling_rights(), expected_castling_rights, "{}", context);
        assert_eq!(after.en_passant_target(), expected_en_passant_target, "{}", context);

        if moved == Piece::Pawn || before.piece_type_at(!color, mv.target()).is_some() {
            assert_eq!(after.halfmove_clock(), 0, "{}", context);
        } else {
            assert_eq!(after.halfmove_clock(), before.halfmove_clock() + 1, "{}", context);
        }

        match color {
            Color::White => assert_eq!(after.fullmove_number(), before.fullmove_number(), "{}", context),
            Color::Black => assert_eq!(after.fullmove_number(), before.fullmove_number() + 1, "{}", context),
        }

        assert_eq!(after.hash(), position(&after.fen()).hash(), "{}", context);
        assert_eq!(after.hash(), after.compute_hash(zobrist), "{}", context);

        after
    }

    fn play(position: Position, moves: &[&str]) -> Position {
        moves.iter().fold(position, |position, &m| position.apply(mv(m), &ZOBRIST))
    }

    #[test]
    fn from_fen() {
        let cases = [
            (STARTING_POSITION_FEN, Color::White, CastlingRights::ALL, None, 0, 1),
            (
                "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 3 12",
                Color::White, CastlingRights::ALL, None, 3, 12,
            ),
            (
                "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 20 40",
                Color::White, CastlingRights::NONE, None, 20, 40,
            ),
            (
                "r2q1rk1/pP1p2pp/Q4n2/bbp1p3/Np6/1B3NBn/pPPP1PPP/R3K2R b KQ - 0 1",
                Color::Black, CastlingRights::both(Color::White), None, 0, 1,
            ),
            (
                "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1",
                Color::Black, CastlingRights::ALL, Some(Square::E3), 0, 1,
            ),
        ];

        for (fen, active_color, castling_rights, en_passant_target, halfmove_clock, fullmove_number) in cases {
            let position = position(fen);

            assert_eq!(position.active_color(), active_color, "{}", fen);
            assert_eq!(position.castling_rights(), castling_rights, "{}", fen);
            assert_eq!(position.en_passant_target(), en_passant_target, "{}", fen);
            assert_eq!(position.halfmove_clock(), halfmove_clock, "{}", fen);
            assert_eq!(position.fullmove_number(), fullmove_number, "{}", fen);
            assert_eq!(position.fen(), fen);
        }
    }

    #[test]
    fn pieces() {
        let position = Position::starting_position(&ZOBRIST);

        assert_eq!(position.all_pieces(Color::White), Rank::First.bitboard() | Rank::Second.bitboard());
        assert_eq!(position.all_pieces(Color::Black), Rank::Seventh.bitboard() | Rank::Eighth.bitboard());
        assert_eq!(position.pieces(Color::White, Piece::Pawn), Rank::Second.bitboard());
        assert_eq!(position.pieces(Color::White, Piece::Knight), Square::B1.bitboard() | Square::G1);
        assert_eq!(position.pieces(Color::White, Piece::Bishop), Square::C1.bitboard() | Square::F1);
        assert_eq!(position.pieces(Color::White, Piece::Rook), Square::A1.bitboard() | Square::H1);
        assert_eq!(position.pieces(Color::White, Piece::Queen), Square::D1.bitboard());
        assert_eq!(position.pieces(Color::White, Piece::King), Square::E1.bitboard());
        assert_eq!(position.pieces(Color::Black, Piece::Pawn), Rank::Seventh.bitboard());
        assert_eq!(position.pieces(Color::Black, Piece::Knight), Square::B8.bitboard() | Square::G8);
        assert_eq!(position.pieces(Color::Black, Piece::Bishop), Square::C8.bitboard() | Square::F8);
        assert_eq!(position.pieces(Color::Black, Piece::Rook), Square::A8.bitboard() | Square::H8);
        assert_eq!(position.pieces(Color::Black, Piece::Queen), Square::D8.bitboard());
        assert_eq!(position.pieces(Color::Black, Piece::King), Square::E8.bitboard());

        assert_eq!(position.diagonal_sliders(Color::White), Square::C1.bitboard() | Square::F1 | Square::D1);
        assert_eq!(position.orthogonal_sliders(Color::Black), Square::A8.bitboard() | Square::H8 | Square::D8);
        assert_eq!(position.occupied().popcnt(), 32);
        assert_eq!(position.king(Color::Black), Square::E8);
        assert_eq!(position.piece_type_at(Color::White, Square::E8), None);
        assert_eq!(position.piece_type_at(Color::Black, Square::E8), Some(Piece::King));
    }

    #[test]
    fn pawn_pushes() {
        let start = Position::starting_position(&ZOBRIST);

        test_move(start, mv("e2e3"), CastlingRights::ALL, None);
        test_move(start, mv("e2e4"), CastlingRights::ALL, Some(Square::E3));
    }

    #[test]
    fn pawn_captures() {
        test_move(
            position("rnbqkbnr/pppp1ppp/8/4p3/3N4/8/PPPPPPPP/RNBQKB1R b KQkq - 1 2"),
            mv("e5d4"),
            CastlingRights::ALL,
            None,
        );

        let after = test_move(
            position("rnbqkbnr/ppp1pppp/8/8/3pP1PP/8/PPPP1P2/RNBQKBNR b KQkq e3 0 2"),
            mv("d4e3"),
            CastlingRights::ALL,
            None,
        );
        assert_eq!(after.piece_type_at(Color::White, Square::E4), None);
    }

    #[test]
    fn pawn_promotion() {
        for promotion in Piece::PROMOTIONS {
            test_move(
                position("8/k7/8/8/8/8/K6p/8 b - - 0 1"),
                Move::new(Square::H2, Square::H1, Some(promotion)),
                CastlingRights::NONE,
                None,
            );
        }
    }

    #[test]
    fn king_move_revokes_castling_rights() {
        let after_white = test_move(
            position("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2"),
            mv("e1e2"),
            CastlingRights::both(Color::Black),
            None,
        );
        test_move(after_white, mv("e8e7"), CastlingRights::NONE, None);
    }

    #[test]
    fn rook_move_revokes_castling_rights() {
        let position = test_move(
            position("rnbqkbnr/1pppppp1/p6p/8/8/P6P/1PPPPPP1/RNBQKBNR w KQkq - 0 3"),
            mv("h1h2"),
            CastlingRights::ALL.remove(CastlingRights::WHITE_KINGSIDE),
            None,
        );
        let position = test_move(
            position,
            mv("h8h7"),
            CastlingRights::WHITE_QUEENSIDE | CastlingRights::BLACK_QUEENSIDE,
            None,
        );
        let position = test_move(position, mv("a1a2"), CastlingRights::BLACK_QUEENSIDE, None);
        test_move(position, mv("a8a7"), CastlingRights::NONE, None);
    }

    #[test]
    fn captured_rook_revokes_castling_rights() {
        let position = test_move(
            position("r1bqkb1r/pppppppp/1N4N1/8/8/1n4n1/PPPPPPPP/R1BQKB1R w KQkq - 12 6"),
            mv("g6h8"),
            CastlingRights::ALL.remove(CastlingRights::BLACK_KINGSIDE),
            None,
        );
        let position = test_move(
            position,
            mv("g3h1"),
            CastlingRights::WHITE_QUEENSIDE | CastlingRights::BLACK_QUEENSIDE,
            None,
        );
        let position = test_move(position, mv("b6a8"), CastlingRights::WHITE_QUEENSIDE, None);
        test_move(position, mv("b3a1"), CastlingRights::NONE, None);
    }

    #[test]
    fn castling_moves_rook() {
        let start = position("r3k2r/pppbqppp/2nb1n2/3pp3/3PP3/2N1BN2/PPPQBPPP/R3K2R w KQkq - 6 12");
        let black_rights = CastlingRights::both(Color::Black);

        let kingside = test_move(start, mv("e1g1"), black_rights, None);
        assert_eq!(kingside.piece_type_at(Color::White, Square::H1), None);
        assert_eq!(kingside.piece_type_at(Color::White, Square::F1), Some(Piece::Rook));

        let kingside = test_move(kingside, mv("e8g8"), CastlingRights::NONE, None);
        assert_eq!(kingside.piece_type_at(Color::Black, Square::H8), None);
        assert_eq!(kingside.piece_type_at(Color::Black, Square::F8), Some(Piece::Rook));

        let queenside = test_move(start, mv("e1c1"), black_rights, None);
        assert_eq!(queenside.piece_type_at(Color::White, Square::A1), None);
        assert_eq!(queenside.piece_type_at(Color::White, Square::D1), Some(Piece::Rook));

        let queenside = test_move(queenside, mv("e8c8"), CastlingRights::NONE, None);
        assert_eq!(queenside.piece_type_at(Color::Black, Square::A8), None);
        assert_eq!(queenside.piece_type_at(Color::Black, Square::D8), Some(Piece::Rook));
    }

    #[test]
    fn halfmove_clock() {
        let rights = CastlingRights::both(Color::Black);
        let position = test_move(
            position("rnbqk2r/pppp1ppp/5n2/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 0 1"),
            mv("e1g1"),
            rights,
            None,
        );
        assert_eq!(position.halfmove_clock(), 1);

        let position = test_move(position, mv("f6e4"), rights, None);
        let position = test_move(position, mv("f1e1"), rights, None);
        assert_eq!(position.halfmove_clock(), 1);

        test_move(position, mv("h7h6"), rights, None);
    }

    #[test]
    fn fullmove_number() {
        let position = test_move(Position::starting_position(&ZOBRIST), mv("e2e3"), CastlingRights::ALL, None);
        let position = test_move(position, mv("e7e5"), CastlingRights::ALL, Some(Square::E6));

        assert_eq!(position.fullmove_number(), 2);
    }

    #[test]
    fn same_hash_after_undo() {
        let start = Position::starting_position(&ZOBRIST);
        let after = play(start, &["g1f3", "g8f6", "f3g1", "f6g8"]);

        assert_eq!(after.hash(), start.hash());
        assert_eq!(after.halfmove_clock(), 4);
    }

    #[test]
    fn transposition_hash() {
        let start = Position::starting_position(&ZOBRIST);

        assert_eq!(
            play(start, &["e2e3", "e7e6", "g1f3", "g8f6"]).hash(),
            play(start, &["g1f3", "g8f6", "e2e3", "e7e6"]).hash(),
        );

        // Same placement, but only the second order leaves an en passant target behind.
        assert_ne!(
            play(start, &["e2e4", "e7e5", "g1f3", "g8f6"]).hash(),
            play(start, &["g1f3", "g8f6", "e2e4", "e7e5"]).hash(),
        );
    }

    #[test]
    fn castling_rights_change_hash() {
        let with_rights = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        let without_rights = position("r3k2r/8/8/8/8/8/8/R3K2R w Kkq - 0 1");

        assert_eq!(with_rights.occupied(), without_rights.occupied());
        assert_ne!(with_rights.hash(), without_rights.hash());
    }

    #[test]
    fn active_color_changes_hash() {
        let white = position("4k3/8/8/8/8/8/8/4K3 w - - 0 1");
        let black = position("4k3/8/8/8/8/8/8/4K3 b - - 0 1");

        assert_eq!(white.hash() ^ black.hash(), ZOBRIST.active_color());
    }
}
