//! Round outcomes from the selector's point of view.

use serde::{Deserialize, Serialize};

use super::moves::Move;

/// Result of one round, seen from the side that played `mine`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The other side's move beat ours.
    OpponentWins,
    /// Our move beat the other side's.
    SelectorWins,
    /// Both sides played the same move.
    Tie,
}

impl RoundOutcome {
    /// Judge a round under the dominance relation.
    ///
    /// ```
    /// use rpsls::core::{Move, RoundOutcome};
    ///
    /// assert_eq!(RoundOutcome::judge(Move::Paper, Move::Rock), RoundOutcome::SelectorWins);
    /// assert_eq!(RoundOutcome::judge(Move::Paper, Move::Lizard), RoundOutcome::OpponentWins);
    /// assert_eq!(RoundOutcome::judge(Move::Spock, Move::Spock), RoundOutcome::Tie);
    /// ```
    #[must_use]
    pub fn judge(mine: Move, theirs: Move) -> Self {
        if mine.beats(theirs) {
            RoundOutcome::SelectorWins
        } else if theirs.beats(mine) {
            RoundOutcome::OpponentWins
        } else {
            RoundOutcome::Tie
        }
    }

    /// The same round seen from the other side.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            RoundOutcome::OpponentWins => RoundOutcome::SelectorWins,
            RoundOutcome::SelectorWins => RoundOutcome::OpponentWins,
            RoundOutcome::Tie => RoundOutcome::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judge_ties_only_on_same_move() {
        for a in Move::ALL {
            for b in Move::ALL {
                let outcome = RoundOutcome::judge(a, b);
                assert_eq!(outcome == RoundOutcome::Tie, a == b);
            }
        }
    }

    #[test]
    fn test_judge_matches_perspective_flip() {
        for a in Move::ALL {
            for b in Move::ALL {
                assert_eq!(RoundOutcome::judge(a, b), RoundOutcome::judge(b, a).flipped());
            }
        }
    }
}
