use anyhow::{anyhow, Context, Error as Anyhow};
use clap::Parser;
use derive_more::{Display, Error, From};
use lib::chess::{ParsePromotionError, ParseSquareError, Position, Promotion, Square};
use lib::game::{Game, Options};
use std::str::FromStr;
use tracing::{info, instrument};

/// An instruction for the game session.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq)]
enum Action {
    #[display(fmt = "{}{}{}", _0, _1, "_2.map(|p| p.to_string()).unwrap_or_default()")]
    Move(Square, Square, Option<Promotion>),

    #[display(fmt = "undo")]
    Undo,
}

/// The reason why parsing [`Action`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error, From)]
enum ParseActionError {
    #[from(ignore)]
    #[display(fmt = "failed to parse move, expected coordinates such as `e2e4` or `e7e8q`")]
    InvalidLength,
    #[display(fmt = "failed to parse move; {}", _0)]
    InvalidSquare(ParseSquareError),
    #[display(fmt = "failed to parse move; {}", _0)]
    InvalidPromotion(ParsePromotionError),
}

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "undo" {
            return Ok(Action::Undo);
        }

        let whence = s.get(0..2).ok_or(ParseActionError::InvalidLength)?;
        let whither = s.get(2..4).ok_or(ParseActionError::InvalidLength)?;
        let promotion = match s.get(4..) {
            None | Some("") => None,
            Some(p) => Some(p.parse()?),
        };

        Ok(Action::Move(whence.parse()?, whither.parse()?, promotion))
    }
}

/// Plays a sequence of moves.
///
/// Moves are given in coordinate notation, pawns promote to a queen unless told otherwise.
#[derive(Debug, Parser)]
#[clap(disable_help_flag = true, disable_version_flag = true)]
pub struct Play {
    /// The game configuration.
    #[clap(short, long, default_value_t)]
    options: Options,

    /// The starting position in FEN notation.
    #[clap(short, long, default_value_t)]
    fen: Position,

    /// Moves such as `e2e4` or `e7e8n`, or `undo` to take back the last move.
    #[clap(value_parser = Action::from_str)]
    actions: Vec<Action>,
}

impl Play {
    #[instrument(level = "trace", skip(self), err)]
    pub fn execute(self) -> Result<(), Anyhow> {
        let mut game = Game::with_position(self.fen, self.options);

        for action in self.actions {
            match action {
                Action::Undo => {
                    game.undo().context("failed to take back")?;
                }

                Action::Move(whence, whither, promotion) => {
                    let m = game
                        .find(whence, whither)
                        .ok_or_else(|| anyhow!("`{action}` is not a legal move"))?;

                    let promotion = match promotion {
                        None if m.is_promotion() => Some(Promotion::Queen),
                        p => p,
                    };

                    let t = game
                        .commit(m, promotion)
                        .with_context(|| format!("failed to play `{action}`"))?;

                    info!(%action, status = %t.status);
                }
            }
        }

        println!("{}", game.position());
        println!("{} to move, {}", game.position().turn(), game.status());

        if let Some(o) = game.position().outcome() {
            println!("{o}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn parsing_printed_action_is_an_identity(
        #[strategy(proptest::sample::select(Square::iter().collect::<Vec<_>>()))] whence: Square,
        #[strategy(proptest::sample::select(Square::iter().collect::<Vec<_>>()))] whither: Square,
        #[strategy(proptest::option::of(proptest::sample::select(vec![
            Promotion::Queen,
            Promotion::Rook,
            Promotion::Bishop,
            Promotion::Knight,
        ])))]
        promotion: Option<Promotion>,
    ) {
        let action = Action::Move(whence, whither, promotion);
        assert_eq!(action.to_string().parse(), Ok(action));
        assert_eq!(Action::Undo.to_string().parse(), Ok(Action::Undo));
    }

    #[proptest]
    fn parsing_action_reads_the_promotion() {
        assert_eq!(
            "e7e8n".parse(),
            Ok(Action::Move(Square::E7, Square::E8, Some(Promotion::Knight)))
        );

        assert!("e7e8x".parse::<Action>().is_err());
        assert!("i7e8".parse::<Action>().is_err());
    }

    #[proptest]
    fn parsing_action_fails_for_short_strings(#[strategy("[a-h1-8]{0,3}")] s: String) {
        assert_eq!(s.parse::<Action>(), Err(ParseActionError::InvalidLength));
    }

    #[proptest]
    fn playing_a_promotion_defaults_to_a_queen() {
        let fen: Position = "4k3/1P6/8/8/8/8/8/4K3 w - - 0 1".parse()?;
        let play = Play {
            options: Options::default(),
            fen,
            actions: vec!["b7b8".parse()?, "e8e7".parse()?, "undo".parse()?],
        };

        assert!(play.execute().is_ok());
    }

    #[proptest]
    fn playing_an_illegal_move_fails() {
        let play = Play {
            options: Options::default(),
            fen: Position::default(),
            actions: vec!["e2e5".parse()?],
        };

        assert!(play.execute().is_err());
    }
}
