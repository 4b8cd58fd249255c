use anyhow::Error as Anyhow;
use clap::Parser;
use lib::chess::Position;
use rayon::prelude::*;
use std::time::Instant;
use tracing::{info, instrument};

/// Counts the leaf nodes of the game tree up to some depth.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Perft {
    /// The starting position in FEN notation.
    #[clap(short, long, default_value_t)]
    fen: Position,

    /// The depth of the tree.
    depth: u8,
}

impl Perft {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let timer = Instant::now();

        let mut divide: Vec<_> = match self.depth {
            0 => Vec::new(),
            d => self
                .fen
                .successors()
                .par_bridge()
                .map(|(m, p, next)| {
                    let promotion = p.map(|p| p.to_string()).unwrap_or_default();
                    (format!("{m}{promotion}"), next.perft(d - 1))
                })
                .collect(),
        };

        divide.sort();
        for (m, nodes) in &divide {
            println!("{m}: {nodes}");
        }

        let nodes: usize = match self.depth {
            0 => 1,
            _ => divide.iter().map(|(_, n)| n).sum(),
        };

        println!();
        println!("{nodes}");

        let elapsed = timer.elapsed();
        info!(%nodes, ?elapsed, nps = %(nodes as f64 / elapsed.as_secs_f64()));

        Ok(())
    }
}
