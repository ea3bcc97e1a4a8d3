//! # rpsls
//!
//! Rock-Paper-Scissors-Lizard-Spock against an adaptive computer opponent.
//!
//! ## Design Principles
//!
//! 1. **IO-Free Core**: The selector and the match engine never print or
//!    read. All prompting goes through the `GameUi` trait.
//!
//! 2. **Deterministic**: Every random choice flows through a seedable
//!    `GameRng`, so a seed reproduces a whole session.
//!
//! 3. **Bounded Adaptation**: Weights live in a closed interval with a
//!    floor of at least 1, so no move ever becomes unreachable.
//!
//! ## Modules
//!
//! - `core`: Moves, dominance, outcomes, sides, RNG, configuration
//! - `selector`: Weighted-random move selection with win/loss feedback
//! - `strategy`: `MoveStrategy` trait and simple bot strategies
//! - `game`: Match engine, UI trait, play loop, console front end
//! - `sim`: Headless strategy-vs-strategy runs
//! - `error`: Crate error type

pub mod core;
pub mod error;
pub mod game;
pub mod selector;
pub mod sim;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    GameRng, MatchConfig, Move, RoundOutcome, SelectorConfig, Side, SideMap,
    WeightBounds,
};

pub use crate::error::{ConfigError, Error, Result};

pub use crate::selector::{AdaptiveSelector, History, Rebalance, WeightTable};

pub use crate::strategy::{CyclingStrategy, FixedStrategy, MoveStrategy, UniformStrategy};

pub use crate::game::{GameUi, MatchState, RoundResult, Session, SessionSummary};

pub use crate::sim::{simulate, SimConfig, SimReport};
