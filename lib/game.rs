use crate::chess::{Color, Move, Position, Promotion, Square, Status};
use derive_more::{Display, Error};
use std::collections::HashMap;
use tracing::{debug, instrument, warn};

mod history;
mod options;

pub use history::*;
pub use options::*;

/// The reason why a [`Move`] was rejected by [`Game::commit`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum InvalidAction {
    #[display(fmt = "it is not the {} player's turn", _0)]
    NotMoversTurn(#[error(not(source))] Color),

    #[display(fmt = "move `{}` is illegal in this position", _0)]
    IllegalMove(#[error(not(source))] Move),

    #[display(fmt = "move `{}` requires a promotion", _0)]
    PromotionRequired(#[error(not(source))] Move),

    #[display(fmt = "move `{}` is not a promotion", _0)]
    UnexpectedPromotion(#[error(not(source))] Move),
}

/// The reason why [`Game::undo`] failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "there are no moves to take back")]
pub struct NoHistory;

/// The result of committing a [`Move`].
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Transition {
    /// The position after the move.
    pub position: Position,
    /// The status of the new position from the point of view of the side to move.
    pub status: Status,
}

/// A game session.
///
/// Tracks the current [`Position`] along with the [`History`] of moves that led to it.
#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    history: History,
    memo: HashMap<Square, Vec<Move>>,
    options: Options,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl From<Position> for Game {
    fn from(pos: Position) -> Self {
        Self::with_position(pos, Options::default())
    }
}

impl Game {
    /// Starts a game from the initial position.
    pub fn new(options: Options) -> Self {
        Self::with_position(Position::default(), options)
    }

    /// Starts a game from an arbitrary position.
    pub fn with_position(position: Position, options: Options) -> Self {
        Game {
            position,
            history: History::new(options.history),
            memo: HashMap::new(),
            options,
        }
    }

    /// The current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The moves that can be taken back, oldest first.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// This game's configuration.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The status of the current position.
    pub fn status(&self) -> Status {
        self.position.status()
    }

    /// The legal moves of the piece on this [`Square`], if any.
    pub fn moves_from(&mut self, whence: Square) -> Vec<Move> {
        let pos = &self.position;

        if self.options.memoize {
            self.memo
                .entry(whence)
                .or_insert_with(|| pos.moves_from(whence).to_vec())
                .clone()
        } else {
            pos.moves_from(whence).to_vec()
        }
    }

    /// Looks up the legal [`Move`] between two squares, if there is one.
    pub fn find(&mut self, whence: Square, whither: Square) -> Option<Move> {
        self.moves_from(whence)
            .into_iter()
            .find(|m| m.whither() == whither)
    }

    /// Plays a [`Move`] on behalf of the side to move.
    ///
    /// Promotions must be chosen if and only if [`Move::is_promotion`].
    /// A rejected move leaves the game unchanged.
    #[instrument(level = "debug", skip(self))]
    pub fn commit(
        &mut self,
        m: Move,
        promotion: Option<Promotion>,
    ) -> Result<Transition, InvalidAction> {
        if let Err(e) = self.validate(m, promotion) {
            warn!(%e, "rejected");
            return Err(e);
        }

        let next = self.position.play(&m, promotion);
        let previous = std::mem::replace(&mut self.position, next);
        self.history.push(Entry::new(previous, m, promotion));
        self.memo.clear();

        let status = self.position.status();
        debug!(%status, position = %self.position, "committed");

        Ok(Transition {
            position: self.position.clone(),
            status,
        })
    }

    fn validate(&mut self, m: Move, promotion: Option<Promotion>) -> Result<(), InvalidAction> {
        let piece = match self.position.board()[m.whence()] {
            Some(p) if p == m.piece() => p,
            _ => return Err(InvalidAction::IllegalMove(m)),
        };

        if piece.color() != self.position.turn() {
            return Err(InvalidAction::NotMoversTurn(piece.color()));
        }

        if !self.moves_from(m.whence()).contains(&m) {
            return Err(InvalidAction::IllegalMove(m));
        }

        match (m.is_promotion(), promotion) {
            (true, None) => Err(InvalidAction::PromotionRequired(m)),
            (false, Some(_)) => Err(InvalidAction::UnexpectedPromotion(m)),
            _ => Ok(()),
        }
    }

    /// Takes back the last move, returning the position it was played in.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> Result<Position, NoHistory> {
        let entry = match self.history.pop() {
            Some(entry) => entry,
            None => {
                warn!("{}", NoHistory);
                return Err(NoHistory);
            }
        };

        debug!(action = %entry.action(), "taken back");
        self.position = entry.into_position();
        self.memo.clear();
        Ok(self.position.clone())
    }

    /// Starts over from the initial position, forgetting the history.
    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.position = Position::default();
        self.history.clear();
        self.memo.clear();
    }
}
