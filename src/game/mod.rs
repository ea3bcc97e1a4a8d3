//! Human-vs-computer matches.
//!
//! - `state`: IO-free match engine (rounds, scores, winner)
//! - `ui`: the `GameUi` trait every front end implements
//! - `session`: the play loop tying a UI to a computer strategy
//! - `console`: dialoguer-based terminal UI (feature `cli`)

pub mod session;
pub mod state;
pub mod ui;

#[cfg(feature = "cli")]
pub mod console;

pub use session::{Session, SessionSummary};
pub use state::{MatchState, RoundResult};
pub use ui::GameUi;

#[cfg(feature = "cli")]
pub use console::ConsoleUi;
