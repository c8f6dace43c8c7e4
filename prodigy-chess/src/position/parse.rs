use thiserror::Error;
use crate::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Error)]
pub enum FenParseError {
    #[error("invalid piece placement")]
    InvalidBoard,
    #[error("invalid active color")]
    InvalidActiveColor,
    #[error("invalid castling rights")]
    InvalidCastlingRights,
    #[error("invalid en passant target")]
    InvalidEnPassant,
    #[error("invalid halfmove clock")]
    InvalidHalfmoveClock,
    #[error("invalid fullmove number")]
    InvalidFullmoveNumber,
    #[error("missing FEN field")]
    MissingField,
    #[error("too many FEN fields")]
    TooManyFields,
}

impl Position {
    /// Parses the six FEN fields. Only the syntax is checked, so positions without kings are accepted.
    pub fn from_fen(fen: &str, zobrist: &Zobrist) -> Result<Position, FenParseError> {
        let mut reader = fen.split_ascii_whitespace();
        let mut next = || reader.next().ok_or(FenParseError::MissingField);

        let board = parse_board(next()?)?;
        let active_color = next()?.parse::<Color>().map_err(|_| FenParseError::InvalidActiveColor)?;
        let castling_rights = next()?
            .parse::<CastlingRights>()
            .map_err(|_| FenParseError::InvalidCastlingRights)?;
        let en_passant_target = parse_en_passant(next()?, active_color)?;
        let halfmove_clock = next()?.parse::<u16>().map_err(|_| FenParseError::InvalidHalfmoveClock)?;
        let fullmove_number = next()?.parse::<u16>().map_err(|_| FenParseError::InvalidFullmoveNumber)?;

        if reader.next().is_some() {
            return Err(FenParseError::TooManyFields);
        }

        Ok(Position::from_parts(
            board,
            active_color,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            zobrist,
        ))
    }
}

/*----------------------------------------------------------------*/

fn parse_board(s: &str) -> Result<[[Bitboard; Piece::COUNT]; Color::COUNT], FenParseError> {
    let mut board = [[Bitboard::EMPTY; Piece::COUNT]; Color::COUNT];
    let mut ranks = 0;

    for (rank, row) in s.rsplit('/').enumerate() {
        let rank = Rank::try_index(rank).ok_or(FenParseError::InvalidBoard)?;
        let mut file = 0;

        for p in row.chars() {
            if let Some(empty) = p.to_digit(10) {
                if !(1..=8).contains(&empty) {
                    return Err(FenParseError::InvalidBoard);
                }

                file += empty as usize;
            } else {
                let piece = Piece::try_from(p).map_err(|_| FenParseError::InvalidBoard)?;
                let color = Color::index(p.is_ascii_lowercase() as usize);
                let sq = Square::new(File::try_index(file).ok_or(FenParseError::InvalidBoard)?, rank);

                board[color][piece] |= sq;
                file += 1;
            }
        }

        if file != File::COUNT {
            return Err(FenParseError::InvalidBoard);
        }

        ranks += 1;
    }

    if ranks != Rank::COUNT {
        return Err(FenParseError::InvalidBoard);
    }

    Ok(board)
}

fn parse_en_passant(s: &str, active_color: Color) -> Result<Option<Square>, FenParseError> {
    if s == "-" {
        return Ok(None);
    }

    let sq = s.parse::<Square>().map_err(|_| FenParseError::InvalidEnPassant)?;

    if sq.rank() != Rank::Sixth.relative_to(active_color) {
        return Err(FenParseError::InvalidEnPassant);
    }

    Ok(Some(sq))
}

/*----------------------------------------------------------------*/
