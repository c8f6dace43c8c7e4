use std::fmt;
use crate::*;

impl Position {
    #[inline]
    pub fn fen(&self) -> String {
        self.to_string()
    }

    fn char_at(&self, sq: Square) -> Option<char> {
        Color::ALL.into_iter().find_map(|color| {
            self.piece_type_at(color, sq).map(|piece| {
                let c = char::from(piece);

                match color {
                    Color::White => c.to_ascii_uppercase(),
                    Color::Black => c,
                }
            })
        })
    }

    fn write_fen(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &rank in Rank::ALL.iter().rev() {
            let mut empty = 0;

            for &file in &File::ALL {
                match self.char_at(Square::new(file, rank)) {
                    Some(c) => {
                        if empty > 0 {
                            write!(f, "{}", empty)?;
                            empty = 0;
                        }

                        write!(f, "{}", c)?;
                    }
                    None => empty += 1,
                }
            }

            if empty > 0 {
                write!(f, "{}", empty)?;
            }

            if rank > Rank::First {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {} ", self.active_color, self.castling_rights)?;

        match self.en_passant_target {
            Some(sq) => write!(f, "{}", sq)?,
            None => write!(f, "-")?,
        }

        write!(f, " {} {}", self.halfmove_clock, self.fullmove_number)
    }

    fn write_diagram(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const FILE_LABELS: &str = "     a   b   c   d   e   f   g   h";
        const RANK_SEPARATOR: &str = "   +---+---+---+---+---+---+---+---+";

        writeln!(f, "{}", FILE_LABELS)?;
        writeln!(f, "{}", RANK_SEPARATOR)?;

        for &rank in Rank::ALL.iter().rev() {
            write!(f, " {} |", rank)?;

            for &file in &File::ALL {
                write!(f, " {} |", self.char_at(Square::new(file, rank)).unwrap_or(' '))?;
            }

            writeln!(f, " {}", rank)?;
            writeln!(f, "{}", RANK_SEPARATOR)?;
        }

        writeln!(f, "{}", FILE_LABELS)?;
        writeln!(f)?;
        writeln!(f, " Active color   : {}", self.active_color)?;
        writeln!(f, " Castling rights: {}", self.castling_rights)?;

        match self.en_passant_target {
            Some(sq) => writeln!(f, " En passant     : {}", sq)?,
            None => writeln!(f, " En passant     : -")?,
        }

        writeln!(f, " Halfmove clock : {}", self.halfmove_clock)?;
        writeln!(f, " Fullmove number: {}", self.fullmove_number)?;
        write!(f, " FEN            : ")?;
        self.write_fen(f)?;
        writeln!(f)?;
        write!(f, " Hash           : {:#018x}", self.hash)
    }
}

/// FEN by default, a framed board diagram with every field listed under `{:#}`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.alternate() {
            self.write_diagram(f)
        } else {
            self.write_fen(f)
        }
    }
}

/*----------------------------------------------------------------*/
