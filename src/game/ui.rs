//! Display and prompting collaborator.
//!
//! The session drives play through this trait only. `ConsoleUi` is the
//! terminal implementation; tests script their own.

use crate::core::{Move, Side, SideMap};
use crate::error::Result;

use super::state::RoundResult;

/// Everything a session needs from the person at the keyboard.
pub trait GameUi {
    /// Shown once before the first match.
    fn welcome(&mut self) -> Result<()>;

    /// Ask for the human's move. Implementations re-prompt on bad input.
    fn prompt_move(&mut self) -> Result<Move>;

    /// Show both moves and who took the round.
    fn show_round(&mut self, round: &RoundResult) -> Result<()>;

    /// Show the running score.
    fn show_score(&mut self, scores: &SideMap<u32>, winning_score: u32) -> Result<()>;

    /// Announce the match winner.
    fn show_match_winner(&mut self, winner: Side) -> Result<()>;

    /// Wait before the next round.
    fn pause(&mut self) -> Result<()>;

    /// Clear the screen between rounds.
    fn clear(&mut self) -> Result<()>;

    /// Ask whether to start another match.
    fn play_again(&mut self) -> Result<bool>;

    /// Shown once when the session ends.
    fn goodbye(&mut self) -> Result<()>;
}
