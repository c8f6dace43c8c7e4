use std::sync::Arc;
use rand::Rng;
use crate::*;

/// Plays a uniformly random legal move.
#[derive(Debug, Clone)]
pub struct RandomSearcher {
    move_gen: MoveGenerator,
}

impl RandomSearcher {
    #[inline]
    pub fn new(tables: Arc<Tables>) -> RandomSearcher {
        RandomSearcher {
            move_gen: MoveGenerator::new(tables),
        }
    }
}

impl Searcher for RandomSearcher {
    fn search(&mut self, position: &Position, _: &SearchState) -> Option<Move> {
        let moves = self.move_gen.generate(position);

        if moves.is_empty() {
            return None;
        }

        Some(moves[rand::rng().random_range(0..moves.len())])
    }
}

/*----------------------------------------------------------------*/
