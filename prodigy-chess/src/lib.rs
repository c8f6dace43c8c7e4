pub use prodigy_types::*;

mod chess_move;
mod move_gen;
mod perft;
mod position;
mod tables;
mod zobrist;

pub use chess_move::*;
pub use move_gen::*;
pub use perft::*;
pub use position::*;
pub use tables::*;
pub use zobrist::*;
