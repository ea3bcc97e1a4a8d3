//! Match state: scores, round log, winner.

use serde::{Deserialize, Serialize};

use crate::core::{MatchConfig, Move, RoundOutcome, Side, SideMap};

/// One judged round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub moves: SideMap<Move>,
    /// `None` on a tie.
    pub winner: Option<Side>,
}

impl RoundResult {
    /// Judge a round between the two sides.
    #[must_use]
    pub fn judge(human: Move, computer: Move) -> Self {
        let winner = match RoundOutcome::judge(human, computer) {
            RoundOutcome::SelectorWins => Some(Side::Human),
            RoundOutcome::OpponentWins => Some(Side::Computer),
            RoundOutcome::Tie => None,
        };
        Self {
            moves: SideMap::new(human, computer),
            winner,
        }
    }

    /// This round from one side's point of view.
    #[must_use]
    pub fn outcome_for(&self, side: Side) -> RoundOutcome {
        match self.winner {
            Some(w) if w == side => RoundOutcome::SelectorWins,
            Some(_) => RoundOutcome::OpponentWins,
            None => RoundOutcome::Tie,
        }
    }
}

/// Scores and log of the match in progress.
///
/// Purely in-memory; display is left to a `GameUi`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    config: MatchConfig,
    scores: SideMap<u32>,
    rounds: Vec<RoundResult>,
}

impl MatchState {
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self {
            config,
            scores: SideMap::default(),
            rounds: Vec::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn scores(&self) -> &SideMap<u32> {
        &self.scores
    }

    /// Every round played this match, oldest first.
    #[must_use]
    pub fn rounds(&self) -> &[RoundResult] {
        &self.rounds
    }

    /// Judge a round, score it and log it.
    pub fn play_round(&mut self, human: Move, computer: Move) -> RoundResult {
        debug_assert!(!self.is_over(), "round played after the match ended");
        let result = RoundResult::judge(human, computer);
        if let Some(side) = result.winner {
            if !self.is_over() {
                self.scores[side] += 1;
            }
        }
        self.rounds.push(result);
        result
    }

    /// Side that has reached the winning score, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        Side::BOTH
            .into_iter()
            .find(|&side| self.scores[side] >= self.config.winning_score)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Start a fresh match with the same configuration.
    pub fn reset(&mut self) {
        self.scores = SideMap::default();
        self.rounds.clear();
    }
}
