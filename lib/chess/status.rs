use derive_more::Display;

/// The state of a position from the point of view of the side to move.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Status {
    #[display(fmt = "normal")]
    Normal,
    #[display(fmt = "check")]
    Check,
    #[display(fmt = "checkmate")]
    Checkmate,
    #[display(fmt = "stalemate")]
    Stalemate,
}

impl Status {
    /// Whether the king of the side to move is attacked.
    pub fn is_check(&self) -> bool {
        matches!(self, Status::Check | Status::Checkmate)
    }

    /// Whether the side to move is in check and has no legal moves.
    pub fn is_checkmate(&self) -> bool {
        *self == Status::Checkmate
    }

    /// Whether the side to move is not in check but has no legal moves.
    pub fn is_stalemate(&self) -> bool {
        *self == Status::Stalemate
    }

    /// Whether the game is over.
    pub fn is_terminal(&self) -> bool {
        self.is_checkmate() || self.is_stalemate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn checkmate_is_a_kind_of_check() {
        assert!(Status::Checkmate.is_check());
        assert!(!Status::Stalemate.is_check());
    }

    #[proptest]
    fn terminal_statuses_are_checkmate_and_stalemate(s: Status) {
        assert_eq!(
            s.is_terminal(),
            matches!(s, Status::Checkmate | Status::Stalemate)
        );
    }

    #[proptest]
    fn checkmate_and_stalemate_are_exclusive(s: Status) {
        assert!(!(s.is_checkmate() && s.is_stalemate()));
    }
}
