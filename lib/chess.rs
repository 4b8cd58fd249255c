mod attacks;
mod board;
mod castles;
mod color;
mod fen;
mod file;
mod r#move;
mod movegen;
mod outcome;
mod perft;
mod piece;
mod position;
mod promotion;
mod rank;
mod role;
mod square;
mod status;

pub use board::*;
pub use castles::*;
pub use color::*;
pub use fen::*;
pub use file::*;
pub use movegen::*;
pub use outcome::*;
pub use piece::*;
pub use position::*;
pub use promotion::*;
pub use r#move::*;
pub use rank::*;
pub use role::*;
pub use square::*;
pub use status::*;
