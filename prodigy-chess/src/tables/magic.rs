use rand::Rng;
use tracing::trace;
use crate::*;

/*----------------------------------------------------------------*/

/// Perfect hash from the relevant occupancy around one square to that square's slider attacks.
#[derive(Debug, Clone)]
pub struct Magic {
    mask: Bitboard,
    magic: u64,
    shift: u32,
    attacks: Box<[Bitboard]>,
}

impl Magic {
    #[inline(always)]
    pub fn mask(&self) -> Bitboard {
        self.mask
    }

    #[inline(always)]
    pub fn magic(&self) -> u64 {
        self.magic
    }

    #[inline(always)]
    pub fn shift(&self) -> u32 {
        self.shift
    }

    #[inline(always)]
    fn index(&self, occupancy: Bitboard) -> usize {
        ((occupancy & self.mask).0.wrapping_mul(self.magic) >> self.shift) as usize
    }

    #[inline(always)]
    pub fn attacks(&self, occupancy: Bitboard) -> Bitboard {
        self.attacks[self.index(occupancy)]
    }
}

/*----------------------------------------------------------------*/

/// One [`Magic`] per origin square for a single slider family.
#[derive(Debug, Clone)]
pub struct MagicBitboards {
    magics: Box<[Magic]>,
}

impl MagicBitboards {
    pub fn new(
        rng: &mut impl Rng,
        relevant_blockers: impl Fn(Square) -> Bitboard,
        slow_attacks: impl Fn(Square, Bitboard) -> Bitboard,
    ) -> MagicBitboards {
        let magics = Square::ALL.iter().map(|&sq| {
            let mask = relevant_blockers(sq);
            let (magic, attempts) = find_magic(rng, mask, |blockers| slow_attacks(sq, blockers));

            trace!(square = %sq, attempts, shift = magic.shift, "found magic");

            magic
        }).collect();

        MagicBitboards { magics }
    }

    #[inline(always)]
    pub fn get(&self, sq: Square) -> &Magic {
        &self.magics[sq as usize]
    }

    #[inline(always)]
    pub fn attacks(&self, sq: Square, occupancy: Bitboard) -> Bitboard {
        self.get(sq).attacks(occupancy)
    }
}

/*----------------------------------------------------------------*/

/// Searches random sparse multipliers until every subset of `mask` hashes without a destructive collision.
/// Returns the finished record and the number of candidates tried.
pub fn find_magic(
    rng: &mut impl Rng,
    mask: Bitboard,
    slow_attacks: impl Fn(Bitboard) -> Bitboard,
) -> (Magic, u64) {
    let bits = mask.popcnt() as u32;
    let shift = 64 - bits;
    let size = 1usize << bits;

    let subsets = mask.iter_subsets()
        .map(|blockers| (blockers, slow_attacks(blockers)))
        .collect::<Vec<_>>();

    // No attack set ever covers the whole board, so FULL marks an unused slot.
    let mut table = vec![Bitboard::FULL; size].into_boxed_slice();
    let mut attempts = 0;

    loop {
        attempts += 1;

        let magic = rng.random::<u64>() & rng.random::<u64>() & rng.random::<u64>();

        if ((mask.0.wrapping_mul(magic) >> shift).count_ones() as usize) < mask.popcnt() * 2 / 3 {
            continue;
        }

        table.fill(Bitboard::FULL);

        let collides = subsets.iter().any(|&(blockers, attacks)| {
            let index = (blockers.0.wrapping_mul(magic) >> shift) as usize;
            let slot = &mut table[index];

            if *slot == Bitboard::FULL {
                *slot = attacks;
                false
            } else {
                *slot != attacks
            }
        });

        if !collides {
            let magic = Magic {
                mask,
                magic,
                shift,
                attacks: table,
            };

            return (magic, attempts);
        }
    }
}

/*----------------------------------------------------------------*/
