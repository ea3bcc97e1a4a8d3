//! Adaptive computer opponent.
//!
//! ## Overview
//!
//! - **WeightTable**: one bounded integer weight per move
//! - **History**: moves the selector won and lost with, plus a round counter
//! - **AdaptiveSelector**: samples by weight, records outcomes, and nudges
//!   weights toward moves that keep winning and away from moves that keep
//!   losing
//!
//! The selector does no IO. Callers feed it outcomes and read its moves.
//!
//! ## Usage
//!
//! ```rust
//! use rpsls::core::{Move, RoundOutcome};
//! use rpsls::selector::AdaptiveSelector;
//!
//! let mut selector = AdaptiveSelector::seeded(42);
//!
//! for opponent in [Move::Rock, Move::Rock, Move::Paper] {
//!     let mine = selector.choose_move();
//!     selector.record_outcome(RoundOutcome::judge(mine, opponent));
//! }
//!
//! // Once per match
//! let report = selector.finish_match();
//! println!("raised {:?}, weights {}", report.raised, selector.weights());
//! ```

pub mod adaptive;
pub mod history;
pub mod weights;

pub use adaptive::{AdaptiveSelector, Rebalance};
pub use history::History;
pub use weights::WeightTable;
