//! Core types: moves, outcomes, sides, RNG, configuration.
//!
//! Everything here is plain data with no IO. The selector, the match
//! engine and the simulator all build on these.

pub mod config;
pub mod moves;
pub mod outcome;
pub mod rng;
pub mod side;

pub use config::{MatchConfig, SelectorConfig, WeightBounds};
pub use moves::Move;
pub use outcome::RoundOutcome;
pub use rng::GameRng;
pub use side::{Side, SideMap};
