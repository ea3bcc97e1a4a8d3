//! The five moves and the dominance relation between them.
//!
//! Every move beats exactly two others and loses to exactly two others,
//! so two distinct moves never tie:
//!
//! | Move     | Beats              |
//! |----------|--------------------|
//! | Rock     | Scissors, Lizard   |
//! | Paper    | Rock, Spock        |
//! | Scissors | Paper, Lizard      |
//! | Lizard   | Paper, Spock       |
//! | Spock    | Rock, Scissors     |
//!
//! ## Parsing
//!
//! ```
//! use rpsls::core::Move;
//!
//! assert_eq!("rock".parse::<Move>().unwrap(), Move::Rock);
//! assert_eq!("sp".parse::<Move>().unwrap(), Move::Spock);
//! assert!("dynamite".parse::<Move>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::Error;

/// One of the five moves.
///
/// The declaration order is the fixed enumeration order used by weighted
/// selection. `Move::index()` and `Move::ALL` follow it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Move {
    /// Number of moves.
    pub const COUNT: usize = 5;

    /// All moves in enumeration order.
    pub const ALL: [Move; Move::COUNT] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    /// Position in the enumeration order (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Lizard => "lizard",
            Move::Spock => "spock",
        }
    }

    /// Shorthand accepted at the prompt.
    #[must_use]
    pub const fn shorthand(self) -> &'static str {
        match self {
            Move::Rock => "r",
            Move::Paper => "p",
            Move::Scissors => "s",
            Move::Lizard => "l",
            Move::Spock => "sp",
        }
    }

    /// The two moves this move defeats.
    #[must_use]
    pub const fn victims(self) -> [Move; 2] {
        match self {
            Move::Rock => [Move::Scissors, Move::Lizard],
            Move::Paper => [Move::Rock, Move::Spock],
            Move::Scissors => [Move::Paper, Move::Lizard],
            Move::Lizard => [Move::Paper, Move::Spock],
            Move::Spock => [Move::Rock, Move::Scissors],
        }
    }

    /// Does `self` defeat `other`?
    #[must_use]
    pub fn beats(self, other: Move) -> bool {
        self.victims().contains(&other)
    }

    /// The two moves that defeat this move.
    pub fn counters(self) -> impl Iterator<Item = Move> {
        Move::ALL.into_iter().filter(move |m| m.beats(self))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_ascii_lowercase();
        Move::ALL
            .into_iter()
            .find(|m| input == m.name() || input == m.shorthand())
            .ok_or_else(|| Error::InvalidMove(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order() {
        for (i, m) in Move::ALL.iter().enumerate() {
            assert_eq!(m.index(), i);
        }
        assert_eq!(Move::ALL[0], Move::Rock);
        assert_eq!(Move::ALL[4], Move::Spock);
    }

    #[test]
    fn test_each_move_beats_two_and_loses_to_two() {
        for m in Move::ALL {
            let wins = Move::ALL.iter().filter(|&&o| m.beats(o)).count();
            let losses = m.counters().count();
            assert_eq!(wins, 2, "{m} should beat two moves");
            assert_eq!(losses, 2, "{m} should lose to two moves");
            assert!(!m.beats(m));
        }
    }

    #[test]
    fn test_beats_is_antisymmetric() {
        for a in Move::ALL {
            for b in Move::ALL {
                if a != b {
                    assert!(a.beats(b) ^ b.beats(a), "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn test_known_matchups() {
        assert!(Move::Rock.beats(Move::Scissors));
        assert!(Move::Rock.beats(Move::Lizard));
        assert!(Move::Paper.beats(Move::Spock));
        assert!(Move::Lizard.beats(Move::Paper));
        assert!(Move::Spock.beats(Move::Scissors));
        assert!(!Move::Scissors.beats(Move::Rock));
    }

    #[test]
    fn test_parse_names_and_shorthand() {
        for m in Move::ALL {
            assert_eq!(m.name().parse::<Move>().unwrap(), m);
            assert_eq!(m.shorthand().parse::<Move>().unwrap(), m);
        }
        assert_eq!("  Rock ".parse::<Move>().unwrap(), Move::Rock);
        assert_eq!("SP".parse::<Move>().unwrap(), Move::Spock);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "spo".parse::<Move>().unwrap_err();
        assert!(matches!(err, Error::InvalidMove(ref s) if s == "spo"));
        assert!("".parse::<Move>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Move::Scissors), "scissors");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Move::Lizard).unwrap();
        assert_eq!(json, "\"lizard\"");
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Move::Lizard);
    }
}
