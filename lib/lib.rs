/// Chess domain types and rules.
pub mod chess;
/// A game session with history.
pub mod game;
