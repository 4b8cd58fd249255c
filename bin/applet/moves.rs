use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::{Move, Position, Square};
use tracing::instrument;

/// Lists legal moves.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Moves {
    /// The position in FEN notation.
    #[clap(short, long, default_value_t)]
    fen: Position,

    /// Only list the moves of the piece on this square.
    square: Option<Square>,
}

impl Moves {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let moves: Vec<Move> = match self.square {
            Some(sq) => self.fen.moves_from(sq).to_vec(),
            None => self.fen.moves(),
        };

        for m in &moves {
            let promotion = if m.is_promotion() { " (promotion)" } else { "" };
            println!("{m}{promotion}");
        }

        println!();
        println!("{} to move, {}", self.fen.turn(), self.fen.status());

        Ok(())
    }
}
