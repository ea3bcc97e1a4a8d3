//! Terminal front end built on dialoguer.

use dialoguer::console::Term;
use dialoguer::{Confirm, Input};

use crate::core::{Move, Side, SideMap};
use crate::error::Result;

use super::state::RoundResult;
use super::ui::GameUi;

const MOVE_PROMPT: &str = "Please choose rock(r), paper(p), scissors(s), lizard(l), spock(sp)";

/// Console `GameUi` writing to stdout and reading from the terminal.
#[derive(Debug)]
pub struct ConsoleUi {
    term: Term,
}

impl ConsoleUi {
    #[must_use]
    pub fn new() -> Self {
        Self { term: Term::stdout() }
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new()
    }
}

impl GameUi for ConsoleUi {
    fn welcome(&mut self) -> Result<()> {
        self.term
            .write_line("Welcome to Rock, Paper, Scissors, Lizard, Spock!\n")?;
        Ok(())
    }

    fn prompt_move(&mut self) -> Result<Move> {
        let input: String = Input::new()
            .with_prompt(MOVE_PROMPT)
            .report(false)
            .validate_with(|s: &String| -> std::result::Result<(), &str> {
                s.parse::<Move>()
                    .map(|_| ())
                    .map_err(|_| "Sorry, invalid choice.")
            })
            .interact_text_on(&self.term)?;
        input.parse()
    }

    fn show_round(&mut self, round: &RoundResult) -> Result<()> {
        self.term.write_line("")?;
        self.term
            .write_line(&format!("You chose: {}", round.moves[Side::Human]))?;
        self.term.write_line(&format!(
            "The computer chose: {}",
            round.moves[Side::Computer]
        ))?;
        self.term.write_line("")?;
        let verdict = match round.winner {
            Some(Side::Human) => "You win!",
            Some(Side::Computer) => "Computer wins.",
            None => "It's a tie",
        };
        self.term.write_line(verdict)?;
        Ok(())
    }

    fn show_score(&mut self, scores: &SideMap<u32>, winning_score: u32) -> Result<()> {
        self.term.write_line("")?;
        self.term.write_line(&format!(
            "The scores are: player: {} | computer: {}. First to {} wins!",
            scores[Side::Human],
            scores[Side::Computer],
            winning_score
        ))?;
        self.term.write_line("")?;
        Ok(())
    }

    fn show_match_winner(&mut self, winner: Side) -> Result<()> {
        let line = match winner {
            Side::Human => "You win the game!",
            Side::Computer => "The computer wins the game.",
        };
        self.term.write_line(line)?;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        let _: String = Input::new()
            .with_prompt("Please hit enter to continue...")
            .allow_empty(true)
            .report(false)
            .interact_text_on(&self.term)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.term.clear_screen()?;
        Ok(())
    }

    fn play_again(&mut self) -> Result<bool> {
        let answer = Confirm::new()
            .with_prompt("Would you like to play again?")
            .interact_on(&self.term)?;
        Ok(answer)
    }

    fn goodbye(&mut self) -> Result<()> {
        self.term
            .write_line("Thanks for playing Rock, Paper, Scissors, Lizard, Spock. Goodbye!")?;
        Ok(())
    }
}
