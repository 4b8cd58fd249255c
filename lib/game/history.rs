use crate::chess::{Move, Position, Promotion};
use std::{collections::VecDeque, num::NonZeroUsize};

/// A move committed to a [`Game`](`crate::game::Game`), along with the position it was played in.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Entry {
    position: Position,
    action: Move,
    promotion: Option<Promotion>,
}

impl Entry {
    pub(crate) fn new(position: Position, action: Move, promotion: Option<Promotion>) -> Self {
        Entry {
            position,
            action,
            promotion,
        }
    }

    /// The position before the move was played.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// The move played.
    pub fn action(&self) -> Move {
        self.action
    }

    /// The piece chosen for a promotion, if the move was one.
    pub fn promotion(&self) -> Option<Promotion> {
        self.promotion
    }

    pub(crate) fn into_position(self) -> Position {
        self.position
    }
}

/// The sequence of [`Entry`]s that can be taken back, oldest first.
///
/// If bounded, the oldest entries are forgotten to make room for new ones.
#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct History {
    entries: VecDeque<Entry>,
    limit: Option<NonZeroUsize>,
}

impl History {
    /// An empty history that retains at most `limit` entries, if any.
    pub fn new(limit: Option<NonZeroUsize>) -> Self {
        History {
            entries: VecDeque::new(),
            limit,
        }
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&Entry> {
        self.entries.back()
    }

    /// Iterates over the entries, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Entry> + ExactSizeIterator {
        self.entries.iter()
    }

    pub(crate) fn push(&mut self, entry: Entry) {
        self.entries.push_back(entry);

        if let Some(limit) = self.limit {
            while self.entries.len() > limit.get() {
                self.entries.pop_front();
            }
        }
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.entries.pop_back()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }
}
