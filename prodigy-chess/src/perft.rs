use std::{fmt, time::{Duration, Instant}};
use crate::*;

/*----------------------------------------------------------------*/

#[derive(Debug, Clone, Default)]
pub struct PerftResult {
    /// Number of positions reached at each ply, starting with the root at ply 0.
    pub depth_to_node_count: Vec<u64>,
    pub runtime: Duration,
}

pub fn perft(generator: &MoveGenerator, zobrist: &Zobrist, position: &Position, depth: usize) -> PerftResult {
    let mut result = PerftResult::default();

    if depth == 0 {
        result.depth_to_node_count.push(1);
        return result;
    }

    result.depth_to_node_count.resize(depth + 1, 0);

    let start = Instant::now();

    match position.active_color() {
        Color::White => perft_as::<White>(generator, zobrist, position, &mut result.depth_to_node_count, 0),
        Color::Black => perft_as::<Black>(generator, zobrist, position, &mut result.depth_to_node_count, 0),
    }

    result.runtime = start.elapsed();
    result
}

fn perft_as<S: Side>(
    generator: &MoveGenerator,
    zobrist: &Zobrist,
    position: &Position,
    counts: &mut [u64],
    ply: usize,
) {
    counts[ply] += 1;

    let moves = generator.generate_as::<S>(position);

    // Leaves are counted without being played.
    if ply + 2 == counts.len() {
        counts[ply + 1] += moves.len() as u64;
        return;
    }

    for mv in moves {
        let child = position.apply_as::<S>(mv, zobrist);
        perft_as::<S::Opponent>(generator, zobrist, &child, counts, ply + 1);
    }
}

impl PerftResult {
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.depth_to_node_count.last().copied().unwrap_or(0)
    }

    #[inline]
    pub fn nps(&self) -> f64 {
        self.nodes() as f64 / self.runtime.as_secs_f64().max(f64::EPSILON)
    }
}

impl fmt::Display for PerftResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (depth, nodes) in self.depth_to_node_count.iter().enumerate() {
            writeln!(f, " perft({}): {}", depth, nodes)?;
        }

        writeln!(f, "      NPS: {:.0}", self.nps())?;
        write!(f, "  Runtime: {:.6}s", self.runtime.as_secs_f64())
    }
}

/*----------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use std::sync::{Arc, LazyLock};
    use super::*;

    static GENERATOR: LazyLock<MoveGenerator> = LazyLock::new(|| {
        MoveGenerator::new(Arc::new(Tables::from_seed(0x9E4F7)))
    });
    static ZOBRIST: LazyLock<Zobrist> = LazyLock::new(|| Zobrist::from_seed(0x9E4F7));

    macro_rules! perft_test {
        ($(#[$attr:meta])* $name:ident: $fen:expr; $($nodes:expr),*) => {
            #[test]
            $(#[$attr])*
            fn $name() {
                const NODES: &[u64] = &[$($nodes),*];

                let position = Position::from_fen($fen, &ZOBRIST).unwrap();
                let result = perft(&GENERATOR, &ZOBRIST, &position, NODES.len() - 1);

                assert_eq!(result.depth_to_node_count, NODES);
            }
        }
    }

    perft_test!(
        perft_startpos: STARTING_POSITION_FEN;
        1,
        20,
        400,
        8902,
        197281
    );

    perft_test!(
        #[ignore = "slow without optimizations, run with --release --ignored"]
        perft_startpos_deep: STARTING_POSITION_FEN;
        1,
        20,
        400,
        8902,
        197281,
        4865609
    );

    perft_test!(
        perft_kiwipete: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        1,
        48,
        2039,
        97862
    );

    perft_test!(
        perft_pos3: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
        1,
        14,
        191,
        2812,
        43238,
        674624
    );

    perft_test!(
        perft_pos4: "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
        1,
        6,
        264,
        9467,
        422333
    );

    perft_test!(
        perft_pos5: "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";
        1,
        44,
        1486,
        62379
    );

    perft_test!(
        perft_pos6: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10";
        1,
        46,
        2079,
        89890
    );

    perft_test!(
        perft_promotion_check: "rnbQkbnr/3ppppp/p1p5/8/8/2P5/PP1PPPPP/RNB1KBNR b KQkq - 0 4";
        1,
        1,
        19,
        342,
        7095
    );

    perft_test!(
        perft_underpromotion: "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1";
        1,
        24,
        496,
        9483,
        182838
    );

    #[test]
    fn depth_zero() {
        let position = Position::starting_position(&ZOBRIST);
        let result = perft(&GENERATOR, &ZOBRIST, &position, 0);

        assert_eq!(result.depth_to_node_count, vec![1]);
        assert_eq!(result.nodes(), 1);
    }

    #[test]
    fn display() {
        let position = Position::starting_position(&ZOBRIST);
        let result = perft(&GENERATOR, &ZOBRIST, &position, 2).to_string();

        assert!(result.starts_with(" perft(0): 1\n perft(1): 20\n perft(2): 400\n      NPS: "));
        assert!(result.contains("  Runtime: "));
        assert!(result.ends_with('s'));
    }
}
