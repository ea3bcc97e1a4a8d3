//! Configuration for the selector and for matches.
//!
//! - `WeightBounds`: closed interval every weight stays inside
//! - `SelectorConfig`: initial weight, bounds, rebalance policy, reset threshold
//! - `MatchConfig`: winning score
//!
//! Defaults reproduce the classic game: weights start at 5 within `[1, 10]`,
//! a move needs at least half of at least 5 recorded outcomes to be
//! adjusted, history is cleared after more than 10 rounds, and a match is
//! first to 5.

use serde::{Deserialize, Serialize};

use crate::core::Move;
use crate::error::ConfigError;

/// Closed interval `[min, max]` for move weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightBounds {
    pub min: u32,
    pub max: u32,
}

impl WeightBounds {
    /// Create bounds. Use `validate` before trusting user input.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Clamp a weight into the interval. Inverted bounds resolve to `max`.
    #[must_use]
    pub fn clamp(self, weight: u32) -> u32 {
        weight.max(self.min).min(self.max)
    }

    #[must_use]
    pub fn contains(self, weight: u32) -> bool {
        (self.min..=self.max).contains(&weight)
    }

    /// Reject a zero floor, inverted bounds, or a cap whose five-move total
    /// does not fit in `u32`.
    pub fn validate(self) -> Result<(), ConfigError> {
        if self.min == 0 {
            return Err(ConfigError::ZeroMinWeight);
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedBounds {
                min: self.min,
                max: self.max,
            });
        }
        if self.max.checked_mul(Move::COUNT as u32).is_none() {
            return Err(ConfigError::WeightTotalOverflow { max: self.max });
        }
        Ok(())
    }
}

impl Default for WeightBounds {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

/// Adaptive selector parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Starting weight for every move (default: 5).
    pub initial_weight: u32,

    /// Weight interval (default: [1, 10]).
    pub bounds: WeightBounds,

    /// Share of a history sequence a move must reach to be adjusted
    /// (default: 0.5, inclusive).
    pub majority_threshold: f64,

    /// Entries a history sequence needs before it drives any adjustment
    /// (default: 5).
    pub min_samples: usize,

    /// History is cleared once the round counter exceeds this (default: 10).
    pub reset_threshold: u32,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            initial_weight: 5,
            bounds: WeightBounds::default(),
            majority_threshold: 0.5,
            min_samples: 5,
            reset_threshold: 10,
        }
    }
}

impl SelectorConfig {
    /// Set the starting weight.
    #[must_use]
    pub fn with_initial_weight(mut self, weight: u32) -> Self {
        self.initial_weight = weight;
        self
    }

    /// Set the weight interval.
    #[must_use]
    pub fn with_bounds(mut self, min: u32, max: u32) -> Self {
        self.bounds = WeightBounds::new(min, max);
        self
    }

    /// Set the majority threshold.
    #[must_use]
    pub fn with_majority_threshold(mut self, threshold: f64) -> Self {
        self.majority_threshold = threshold;
        self
    }

    /// Set the minimum sample size.
    #[must_use]
    pub fn with_min_samples(mut self, samples: usize) -> Self {
        self.min_samples = samples;
        self
    }

    /// Set the history reset threshold.
    #[must_use]
    pub fn with_reset_threshold(mut self, rounds: u32) -> Self {
        self.reset_threshold = rounds;
        self
    }

    /// Check every field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds.validate()?;
        if !self.bounds.contains(self.initial_weight) {
            return Err(ConfigError::InitialWeightOutOfBounds {
                weight: self.initial_weight,
                min: self.bounds.min,
                max: self.bounds.max,
            });
        }
        if !(self.majority_threshold > 0.0 && self.majority_threshold <= 1.0) {
            return Err(ConfigError::ThresholdOutOfRange(self.majority_threshold));
        }
        if self.min_samples == 0 {
            return Err(ConfigError::ZeroMinSamples);
        }
        if self.reset_threshold == 0 {
            return Err(ConfigError::ZeroResetThreshold);
        }
        Ok(())
    }
}

/// Match parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Round wins needed to take the match (default: 5).
    pub winning_score: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self { winning_score: 5 }
    }
}

impl MatchConfig {
    /// Set the winning score.
    #[must_use]
    pub fn with_winning_score(mut self, score: u32) -> Self {
        self.winning_score = score;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.winning_score == 0 {
            return Err(ConfigError::ZeroWinningScore);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SelectorConfig::default();
        assert_eq!(config.initial_weight, 5);
        assert_eq!(config.bounds, WeightBounds::new(1, 10));
        assert_eq!(config.majority_threshold, 0.5);
        assert_eq!(config.min_samples, 5);
        assert_eq!(config.reset_threshold, 10);
        assert!(config.validate().is_ok());

        assert_eq!(MatchConfig::default().winning_score, 5);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SelectorConfig::default()
            .with_initial_weight(3)
            .with_bounds(2, 6)
            .with_majority_threshold(0.6)
            .with_min_samples(3)
            .with_reset_threshold(20);

        assert_eq!(config.initial_weight, 3);
        assert_eq!(config.bounds, WeightBounds::new(2, 6));
        assert_eq!(config.majority_threshold, 0.6);
        assert_eq!(config.min_samples, 3);
        assert_eq!(config.reset_threshold, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bounds_clamp() {
        let bounds = WeightBounds::default();
        assert_eq!(bounds.clamp(0), 1);
        assert_eq!(bounds.clamp(7), 7);
        assert_eq!(bounds.clamp(42), 10);
    }

    #[test]
    fn test_validation_errors() {
        let base = SelectorConfig::default();

        assert_eq!(
            base.clone().with_bounds(0, 10).validate(),
            Err(ConfigError::ZeroMinWeight)
        );
        assert_eq!(
            base.clone().with_bounds(8, 3).validate(),
            Err(ConfigError::InvertedBounds { min: 8, max: 3 })
        );
        assert_eq!(
            base.clone().with_bounds(1, u32::MAX).with_initial_weight(u32::MAX).validate(),
            Err(ConfigError::WeightTotalOverflow { max: u32::MAX })
        );
        assert_eq!(
            base.clone().with_initial_weight(11).validate(),
            Err(ConfigError::InitialWeightOutOfBounds { weight: 11, min: 1, max: 10 })
        );
        assert_eq!(
            base.clone().with_majority_threshold(0.0).validate(),
            Err(ConfigError::ThresholdOutOfRange(0.0))
        );
        assert!(base.clone().with_majority_threshold(f64::NAN).validate().is_err());
        assert_eq!(
            base.clone().with_min_samples(0).validate(),
            Err(ConfigError::ZeroMinSamples)
        );
        assert_eq!(
            base.with_reset_threshold(0).validate(),
            Err(ConfigError::ZeroResetThreshold)
        );
        assert_eq!(
            MatchConfig::default().with_winning_score(0).validate(),
            Err(ConfigError::ZeroWinningScore)
        );
    }

    #[test]
    fn test_largest_cap_that_fits() {
        let cap = u32::MAX / Move::COUNT as u32;
        assert!(WeightBounds::new(1, cap).validate().is_ok());
        assert_eq!(
            WeightBounds::new(1, cap + 1).validate(),
            Err(ConfigError::WeightTotalOverflow { max: cap + 1 })
        );
    }

    #[test]
    fn test_serialization() {
        let config = SelectorConfig::default().with_min_samples(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SelectorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
