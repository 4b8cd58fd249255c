use super::{Move, Position, Promotion};
use rayon::prelude::*;

const PROMOTIONS: [Promotion; 4] = [
    Promotion::Queen,
    Promotion::Rook,
    Promotion::Bishop,
    Promotion::Knight,
];

impl Position {
    /// The successors of this position, one per legal [`Move`] and promotion choice.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Option<Promotion>, Position)> + '_ {
        self.moves().into_iter().flat_map(move |m| {
            let choices = if m.is_promotion() {
                PROMOTIONS.map(Some).to_vec()
            } else {
                vec![None]
            };

            choices
                .into_iter()
                .map(move |p| (m, p, self.play(&m, p)))
        })
    }

    /// Counts the leaf nodes of the game tree up to some depth.
    ///
    /// See [perft](https://www.chessprogramming.org/Perft).
    pub fn perft(&self, depth: u8) -> usize {
        match depth {
            0 => 1,
            1 => self.successors().count(),
            d => self
                .successors()
                .par_bridge()
                .map(|(_, _, next)| next.perft(d - 1))
                .sum(),
        }
    }
}
