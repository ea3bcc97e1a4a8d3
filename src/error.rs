//! Crate error type.

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced at the crate boundary.
///
/// The selector itself never fails; these come from parsing player input,
/// validating configuration, and the console collaborator.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid move: {0:?}")]
    InvalidMove(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "cli")]
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Configuration rejected by validation.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("minimum weight must be at least 1")]
    ZeroMinWeight,

    #[error("weight bounds are inverted: min {min} > max {max}")]
    InvertedBounds { min: u32, max: u32 },

    #[error("maximum weight {max} overflows the weight total")]
    WeightTotalOverflow { max: u32 },

    #[error("initial weight {weight} outside bounds [{min}, {max}]")]
    InitialWeightOutOfBounds { weight: u32, min: u32, max: u32 },

    #[error("majority threshold must be in (0, 1], got {0}")]
    ThresholdOutOfRange(f64),

    #[error("minimum sample size must be at least 1")]
    ZeroMinSamples,

    #[error("reset threshold must be at least 1")]
    ZeroResetThreshold,

    #[error("winning score must be at least 1")]
    ZeroWinningScore,
}
