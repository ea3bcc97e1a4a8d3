//! Human-vs-computer play loop.

use log::info;

use crate::core::{MatchConfig, Side, SideMap};
use crate::error::Result;
use crate::strategy::MoveStrategy;

use super::state::MatchState;
use super::ui::GameUi;

/// Totals for a finished session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Matches played to completion.
    pub matches: u32,
    /// Matches won per side.
    pub match_wins: SideMap<u32>,
    /// Rounds played across all matches, ties included.
    pub rounds: u32,
}

/// A run of matches between the person behind `ui` and `computer`.
///
/// Each round: prompt the human, ask the strategy, judge, show, and feed
/// the outcome back to the strategy. After each match the strategy's
/// `finish_match` runs before the play-again prompt.
pub struct Session<U, S> {
    ui: U,
    computer: S,
    state: MatchState,
    summary: SessionSummary,
}

impl<U: GameUi, S: MoveStrategy> Session<U, S> {
    /// Create a session. Fails if `config` is invalid.
    pub fn new(ui: U, computer: S, config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            ui,
            computer,
            state: MatchState::new(config),
            summary: SessionSummary::default(),
        })
    }

    #[must_use]
    pub fn ui(&self) -> &U {
        &self.ui
    }

    #[must_use]
    pub fn computer(&self) -> &S {
        &self.computer
    }

    /// State of the current (or last) match.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Play matches until the human declines another.
    pub fn run(&mut self) -> Result<SessionSummary> {
        self.ui.clear()?;
        self.ui.welcome()?;

        loop {
            let winner = self.play_match()?;
            self.ui.show_match_winner(winner)?;
            self.computer.finish_match();

            if !self.ui.play_again()? {
                break;
            }
        }

        self.ui.goodbye()?;
        Ok(self.summary)
    }

    /// Play one match to the winning score and return the winner.
    pub fn play_match(&mut self) -> Result<Side> {
        self.state.reset();

        loop {
            if self.summary.rounds > 0 {
                self.ui.clear()?;
            }

            let human = self.ui.prompt_move()?;
            let computer = self.computer.choose_move();
            let round = self.state.play_round(human, computer);
            self.summary.rounds += 1;

            self.ui.show_round(&round)?;
            self.ui
                .show_score(self.state.scores(), self.state.config().winning_score)?;
            self.computer.record_outcome(round.outcome_for(Side::Computer));

            if let Some(winner) = self.state.winner() {
                self.summary.matches += 1;
                self.summary.match_wins[winner] += 1;
                info!(
                    "match {} won by {winner} after {} rounds",
                    self.summary.matches,
                    self.state.rounds().len()
                );
                return Ok(winner);
            }

            self.ui.pause()?;
        }
    }

    /// Hand back the UI and strategy.
    pub fn into_parts(self) -> (U, S) {
        (self.ui, self.computer)
    }
}
