use crate::*;

/*----------------------------------------------------------------*/

const fn leaper_attacks(sq: Square, deltas: &[(i8, i8)]) -> Bitboard {
    let mut bb = Bitboard::EMPTY;
    let mut i = 0;

    while i < deltas.len() {
        let (dx, dy) = deltas[i];

        if let Some(target) = sq.try_offset(dx, dy) {
            bb.0 |= target.bitboard().0;
        }

        i += 1;
    }

    bb
}

const fn leaper_table(deltas: &[(i8, i8)]) -> [Bitboard; Square::COUNT] {
    let mut table = [Bitboard::EMPTY; Square::COUNT];
    let mut i = 0;

    while i < Square::COUNT {
        table[i] = leaper_attacks(Square::index(i), deltas);
        i += 1;
    }

    table
}

/*----------------------------------------------------------------*/

/// Squares a pawn of `color` on `sq` attacks.
#[inline(always)]
pub const fn pawn_attacks(sq: Square, color: Color) -> Bitboard {
    const TABLE: [[Bitboard; Square::COUNT]; Color::COUNT] = [
        leaper_table(&[(-1, 1), (1, 1)]),
        leaper_table(&[(-1, -1), (1, -1)]),
    ];

    TABLE[color as usize][sq as usize]
}

#[inline(always)]
pub const fn knight_attacks(sq: Square) -> Bitboard {
    const TABLE: [Bitboard; Square::COUNT] = leaper_table(&[
        (1, 2),   (2, 1),
        (2, -1),  (1, -2),
        (-1, -2), (-2, -1),
        (-2, 1),  (-1, 2),
    ]);

    TABLE[sq as usize]
}

#[inline(always)]
pub const fn king_attacks(sq: Square) -> Bitboard {
    const TABLE: [Bitboard; Square::COUNT] = leaper_table(&[
        (0, 1),  (1, 1),
        (1, 0),  (1, -1),
        (0, -1), (-1, -1),
        (-1, 0), (-1, 1),
    ]);

    TABLE[sq as usize]
}

/*----------------------------------------------------------------*/

/// Squares whose occupancy changes a bishop's attacks from `sq`. Edges never block anything beyond them.
pub const fn bishop_relevant_blockers(sq: Square) -> Bitboard {
    let mut rays = Bitboard::EMPTY;
    let mut i = 0;

    while i < Square::COUNT {
        let target = Square::index(i);
        let dx = (sq.file() as i8 - target.file() as i8).abs();
        let dy = (sq.rank() as i8 - target.rank() as i8).abs();

        if dy == dx && dy != 0 {
            rays.0 |= target.bitboard().0;
        }

        i += 1;
    }

    Bitboard(rays.0 & !Bitboard::EDGES.0)
}

pub const fn rook_relevant_blockers(sq: Square) -> Bitboard {
    let rank_moves = sq.rank().bitboard().0 & !(File::A.bitboard().0 | File::H.bitboard().0);
    let file_moves = sq.file().bitboard().0 & !(Rank::First.bitboard().0 | Rank::Eighth.bitboard().0);

    Bitboard((rank_moves | file_moves) & !sq.bitboard().0)
}

/*----------------------------------------------------------------*/

/// Casts a ray along each delta until it leaves the board or hits a blocker, which is included.
const fn slider_attacks_slow(sq: Square, mut blockers: Bitboard, deltas: &[(i8, i8); 4]) -> Bitboard {
    blockers.0 &= !sq.bitboard().0;

    let mut attacks = Bitboard::EMPTY;
    let mut i = 0;

    while i < deltas.len() {
        let (dx, dy) = deltas[i];
        let mut current = sq;

        while !blockers.has(current) {
            match current.try_offset(dx, dy) {
                Some(next) => {
                    current = next;
                    attacks.0 |= current.bitboard().0;
                }
                None => break,
            }
        }

        i += 1;
    }

    attacks
}

pub const fn bishop_attacks_slow(sq: Square, blockers: Bitboard) -> Bitboard {
    slider_attacks_slow(sq, blockers, &[(1, 1), (1, -1), (-1, -1), (-1, 1)])
}

pub const fn rook_attacks_slow(sq: Square, blockers: Bitboard) -> Bitboard {
    slider_attacks_slow(sq, blockers, &[(1, 0), (0, -1), (-1, 0), (0, 1)])
}

/*----------------------------------------------------------------*/
