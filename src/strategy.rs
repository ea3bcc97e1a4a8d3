//! Move strategies for the computer side.
//!
//! Strategies are trait-based so sessions and simulations can swap the
//! opponent:
//! - `AdaptiveSelector`: weighted random with feedback
//! - `UniformStrategy`: every move equally likely
//! - `FixedStrategy`: always the same move
//! - `CyclingStrategy`: repeats a fixed sequence

use crate::core::{GameRng, Move, RoundOutcome};
use crate::selector::AdaptiveSelector;

/// A source of moves that may learn from round outcomes.
pub trait MoveStrategy {
    /// Short label for logs and reports.
    fn name(&self) -> &str;

    /// Pick this round's move.
    fn choose_move(&mut self) -> Move;

    /// Outcome of the round just played, from this strategy's side.
    fn record_outcome(&mut self, _outcome: RoundOutcome) {}

    /// Called once after each completed match.
    fn finish_match(&mut self) {}
}

impl MoveStrategy for AdaptiveSelector {
    fn name(&self) -> &str {
        "adaptive"
    }

    fn choose_move(&mut self) -> Move {
        AdaptiveSelector::choose_move(self)
    }

    fn record_outcome(&mut self, outcome: RoundOutcome) {
        AdaptiveSelector::record_outcome(self, outcome);
    }

    fn finish_match(&mut self) {
        AdaptiveSelector::finish_match(self);
    }
}

impl<S: MoveStrategy + ?Sized> MoveStrategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn choose_move(&mut self) -> Move {
        (**self).choose_move()
    }

    fn record_outcome(&mut self, outcome: RoundOutcome) {
        (**self).record_outcome(outcome);
    }

    fn finish_match(&mut self) {
        (**self).finish_match();
    }
}

/// Uniform random strategy.
#[derive(Clone, Debug)]
pub struct UniformStrategy {
    rng: GameRng,
}

impl UniformStrategy {
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl MoveStrategy for UniformStrategy {
    fn name(&self) -> &str {
        "uniform"
    }

    fn choose_move(&mut self) -> Move {
        let idx = self.rng.gen_below(Move::COUNT as u32) as usize;
        Move::ALL[idx]
    }
}

/// Always plays the same move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedStrategy(pub Move);

impl MoveStrategy for FixedStrategy {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn choose_move(&mut self) -> Move {
        self.0
    }
}

/// Plays a fixed sequence over and over.
#[derive(Clone, Debug)]
pub struct CyclingStrategy {
    sequence: Vec<Move>,
    next: usize,
}

impl CyclingStrategy {
    /// Cycle through `sequence`.
    ///
    /// # Panics
    ///
    /// Panics if `sequence` is empty.
    pub fn new(sequence: impl Into<Vec<Move>>) -> Self {
        let sequence = sequence.into();
        assert!(!sequence.is_empty(), "Cycle must contain at least one move");
        Self { sequence, next: 0 }
    }

    /// Rock, paper, scissors, lizard, spock, repeat.
    pub fn all_moves() -> Self {
        Self::new(Move::ALL)
    }
}

impl MoveStrategy for CyclingStrategy {
    fn name(&self) -> &str {
        "cycle"
    }

    fn choose_move(&mut self) -> Move {
        let m = self.sequence[self.next];
        self.next = (self.next + 1) % self.sequence.len();
        m
    }
}
