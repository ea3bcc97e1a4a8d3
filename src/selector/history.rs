//! Win/loss history driving weight adjustment.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Move, RoundOutcome};

/// Moves the selector won and lost with since the last reset.
///
/// SmallVec keeps a typical between-reset window (about ten rounds) inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    winning_moves: SmallVec<[Move; 16]>,
    losing_moves: SmallVec<[Move; 16]>,
    rounds: u32,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one round. Ties only bump the round counter.
    pub fn record(&mut self, played: Move, outcome: RoundOutcome) {
        match outcome {
            RoundOutcome::SelectorWins => self.winning_moves.push(played),
            RoundOutcome::OpponentWins => self.losing_moves.push(played),
            RoundOutcome::Tie => {}
        }
        self.count_round();
    }

    /// Bump the round counter without touching either sequence.
    pub fn count_round(&mut self) {
        self.rounds += 1;
    }

    #[must_use]
    pub fn winning_moves(&self) -> &[Move] {
        &self.winning_moves
    }

    #[must_use]
    pub fn losing_moves(&self) -> &[Move] {
        &self.losing_moves
    }

    /// Rounds recorded since the last reset, ties included.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Share of `winning_moves` equal to `m`; 0 when empty.
    #[must_use]
    pub fn win_frequency(&self, m: Move) -> f64 {
        frequency(&self.winning_moves, m)
    }

    /// Share of `losing_moves` equal to `m`; 0 when empty.
    #[must_use]
    pub fn loss_frequency(&self, m: Move) -> f64 {
        frequency(&self.losing_moves, m)
    }

    /// Drop both sequences and zero the round counter.
    pub fn clear(&mut self) {
        self.winning_moves.clear();
        self.losing_moves.clear();
        self.rounds = 0;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.winning_moves.is_empty() && self.losing_moves.is_empty() && self.rounds == 0
    }
}

fn frequency(moves: &[Move], m: Move) -> f64 {
    if moves.is_empty() {
        return 0.0;
    }
    let count = moves.iter().filter(|&&x| x == m).count();
    count as f64 / moves.len() as f64
}
