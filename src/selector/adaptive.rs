//! The adaptive weighted-random move selector.

use log::{debug, info, warn};

use crate::core::{GameRng, Move, RoundOutcome, SelectorConfig};
use crate::error::Result;

use super::history::History;
use super::weights::WeightTable;

/// Moves whose weights changed during one `rebalance`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rebalance {
    /// Moves raised by one.
    pub raised: Vec<Move>,
    /// Moves lowered by one.
    pub lowered: Vec<Move>,
}

impl Rebalance {
    /// True when no weight moved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raised.is_empty() && self.lowered.is_empty()
    }
}

/// Computer opponent that samples moves by weight and learns from results.
///
/// Per round: `choose_move`, then `record_outcome` once the opponent's
/// move is known. Per match: `finish_match` (rebalance, then clear history
/// if more than `reset_threshold` rounds have accumulated).
///
/// ```
/// use rpsls::core::{Move, RoundOutcome};
/// use rpsls::selector::AdaptiveSelector;
///
/// let mut selector = AdaptiveSelector::seeded(7);
/// let mine = selector.choose_move();
/// selector.record_outcome(RoundOutcome::judge(mine, Move::Rock));
/// selector.finish_match();
/// ```
#[derive(Clone, Debug)]
pub struct AdaptiveSelector {
    config: SelectorConfig,
    weights: WeightTable,
    history: History,
    current: Option<Move>,
    rng: GameRng,
}

impl AdaptiveSelector {
    /// Create from a validated configuration.
    pub fn new(config: SelectorConfig, rng: GameRng) -> Result<Self> {
        config.validate()?;
        Ok(Self::with_valid_config(config, rng))
    }

    /// Default configuration with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::with_valid_config(SelectorConfig::default(), GameRng::new(seed))
    }

    fn with_valid_config(config: SelectorConfig, rng: GameRng) -> Self {
        Self {
            weights: WeightTable::new(config.initial_weight, config.bounds),
            history: History::new(),
            current: None,
            config,
            rng,
        }
    }

    /// Replace the weights, clamped into the configured bounds.
    #[must_use]
    pub fn with_weights(mut self, weights: [u32; Move::COUNT]) -> Self {
        self.weights = WeightTable::from_weights(weights, self.config.bounds);
        self
    }

    /// Replace the history.
    #[must_use]
    pub fn with_history(mut self, history: History) -> Self {
        self.history = history;
        self
    }

    #[must_use]
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    #[must_use]
    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move returned by the last `choose_move`.
    #[must_use]
    pub fn current_move(&self) -> Option<Move> {
        self.current
    }

    /// Sample a move with probability proportional to its weight.
    pub fn choose_move(&mut self) -> Move {
        let total = self.weights.total();
        let draw = self.rng.gen_below(total);
        let chosen = self.weights.pick(draw);
        debug!("selector drew {draw}/{total} -> {chosen}");
        self.current = Some(chosen);
        chosen
    }

    /// Record how the current move fared. Ties only count the round.
    pub fn record_outcome(&mut self, outcome: RoundOutcome) {
        match self.current {
            Some(played) => {
                debug!("selector played {played}: {outcome:?}");
                self.history.record(played, outcome);
            }
            None => {
                warn!("outcome {outcome:?} recorded before any move was chosen");
                self.history.count_round();
            }
        }
    }

    /// Adjust weights from the recorded history.
    ///
    /// A sequence only counts once it holds `min_samples` entries. Any move
    /// making up at least `majority_threshold` of the winning sequence is
    /// raised by one; of the losing sequence, lowered by one. Weights stay
    /// within bounds.
    pub fn rebalance(&mut self) -> Rebalance {
        let mut report = Rebalance::default();
        let threshold = self.config.majority_threshold;
        let wins_ready = self.history.winning_moves().len() >= self.config.min_samples;
        let losses_ready = self.history.losing_moves().len() >= self.config.min_samples;

        for m in Move::ALL {
            if wins_ready && self.history.win_frequency(m) >= threshold && self.weights.increment(m) {
                report.raised.push(m);
            }
            if losses_ready && self.history.loss_frequency(m) >= threshold && self.weights.decrement(m) {
                report.lowered.push(m);
            }
        }

        if !report.is_empty() {
            info!(
                "rebalanced (raised {:?}, lowered {:?}): {}",
                report.raised, report.lowered, self.weights
            );
        }
        report
    }

    /// True once more rounds than `reset_threshold` have been recorded.
    #[must_use]
    pub fn should_reset(&self) -> bool {
        self.history.rounds() > self.config.reset_threshold
    }

    /// Clear history and the round counter. Weights are kept.
    pub fn reset_history(&mut self) {
        info!("clearing history after {} rounds", self.history.rounds());
        self.history.clear();
    }

    /// End-of-match bookkeeping: rebalance, then reset if due.
    pub fn finish_match(&mut self) -> Rebalance {
        let report = self.rebalance();
        if self.should_reset() {
            self.reset_history();
        }
        report
    }
}
