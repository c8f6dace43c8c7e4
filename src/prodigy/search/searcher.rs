use crate::*;

/// A pluggable search strategy driven by a [`Controller`].
pub trait Searcher: Send {
    /// Returns a move for the side to move, `None` only when there are no legal moves.
    /// Long-running implementations poll [`SearchState::keep_searching`] and return
    /// their best move so far once it turns false.
    fn search(&mut self, position: &Position, state: &SearchState) -> Option<Move>;
}
