//! Headless strategy-vs-strategy matches.
//!
//! Useful for watching the adaptive selector drift against a predictable
//! opponent without a terminal.
//!
//! ```
//! use rpsls::core::Move;
//! use rpsls::selector::AdaptiveSelector;
//! use rpsls::sim::{simulate, SimConfig};
//! use rpsls::strategy::FixedStrategy;
//!
//! let mut selector = AdaptiveSelector::seeded(1);
//! let mut rock = FixedStrategy(Move::Rock);
//! let report = simulate(&mut selector, &mut rock, &SimConfig::default().with_matches(10))?;
//! assert_eq!(report.matches, 10);
//! # Ok::<(), rpsls::Error>(())
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{MatchConfig, RoundOutcome};
use crate::error::Result;
use crate::strategy::MoveStrategy;

/// Simulation parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Matches to play (default: 100).
    pub matches: u32,

    /// Per-match settings.
    pub match_config: MatchConfig,

    /// A match still undecided after this many rounds is abandoned
    /// (default: 1000).
    pub max_rounds_per_match: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            matches: 100,
            match_config: MatchConfig::default(),
            max_rounds_per_match: 1000,
        }
    }
}

impl SimConfig {
    #[must_use]
    pub fn with_matches(mut self, matches: u32) -> Self {
        self.matches = matches;
        self
    }

    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.match_config.winning_score = score;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds_per_match = rounds;
        self
    }
}

/// Tallies from a simulation, `a` being the first strategy passed in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimReport {
    pub matches: u32,
    pub a_match_wins: u32,
    pub b_match_wins: u32,
    /// Matches cut off by `max_rounds_per_match`.
    pub abandoned: u32,
    pub a_round_wins: u32,
    pub b_round_wins: u32,
    pub ties: u32,
}

impl SimReport {
    /// Rounds played in total.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.a_round_wins + self.b_round_wins + self.ties
    }
}

/// Play `config.matches` matches between `a` and `b`.
///
/// Both strategies see each outcome from their own side and get
/// `finish_match` after every match, abandoned ones included.
///
/// Fails before playing anything if the match config does not validate.
pub fn simulate<A, B>(a: &mut A, b: &mut B, config: &SimConfig) -> Result<SimReport>
where
    A: MoveStrategy + ?Sized,
    B: MoveStrategy + ?Sized,
{
    config.match_config.validate()?;
    let target = config.match_config.winning_score;
    let mut report = SimReport::default();

    for n in 0..config.matches {
        let (mut a_score, mut b_score) = (0u32, 0u32);
        let mut rounds = 0u32;

        while a_score < target && b_score < target && rounds < config.max_rounds_per_match {
            let move_a = a.choose_move();
            let move_b = b.choose_move();
            let outcome = RoundOutcome::judge(move_a, move_b);

            match outcome {
                RoundOutcome::SelectorWins => {
                    a_score += 1;
                    report.a_round_wins += 1;
                }
                RoundOutcome::OpponentWins => {
                    b_score += 1;
                    report.b_round_wins += 1;
                }
                RoundOutcome::Tie => report.ties += 1,
            }

            a.record_outcome(outcome);
            b.record_outcome(outcome.flipped());
            rounds += 1;
        }

        report.matches += 1;
        if a_score >= target {
            report.a_match_wins += 1;
        } else if b_score >= target {
            report.b_match_wins += 1;
        } else {
            report.abandoned += 1;
        }
        debug!("match {n}: {} {a_score} - {b_score} {} in {rounds} rounds", a.name(), b.name());

        a.finish_match();
        b.finish_match();
    }

    info!(
        "{} vs {}: {} - {} over {} matches ({} abandoned)",
        a.name(),
        b.name(),
        report.a_match_wins,
        report.b_match_wins,
        report.matches,
        report.abandoned
    );
    Ok(report)
}
