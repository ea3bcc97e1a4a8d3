//! The two sides of a match and per-side storage.
//!
//! ## Side
//!
//! Tagged identity of a participant: the human at the keyboard or the
//! computer strategy. Role behaviour is injected elsewhere (`GameUi` for
//! the human, `MoveStrategy` for the computer); `Side` only names them.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Participant in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Both sides, human first.
    pub const BOTH: [Side; 2] = [Side::Human, Side::Computer];
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Human => f.write_str("human"),
            Side::Computer => f.write_str("computer"),
        }
    }
}

/// One value per side.
///
/// ```
/// use rpsls::core::{Side, SideMap};
///
/// let mut score: SideMap<u32> = SideMap::default();
/// score[Side::Computer] += 1;
/// assert_eq!(score[Side::Human], 0);
/// assert_eq!(score[Side::Computer], 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    pub human: T,
    pub computer: T,
}

impl<T> SideMap<T> {
    /// Create with explicit values.
    pub fn new(human: T, computer: T) -> Self {
        Self { human, computer }
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        match side {
            Side::Human => &self.human,
            Side::Computer => &self.computer,
        }
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        match side {
            Side::Human => &mut self.human,
            Side::Computer => &mut self.computer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Side::Human.to_string(), "human");
        assert_eq!(Side::Computer.to_string(), "computer");
    }

    #[test]
    fn test_side_map_mutation() {
        let mut map = SideMap::new(0, 0);
        map[Side::Human] = 3;
        map[Side::Computer] += 2;

        assert_eq!(map.human, 3);
        assert_eq!(map.computer, 2);
        assert_eq!(Side::BOTH.map(|side| map[side]), [3, 2]);
    }

    #[test]
    fn test_side_map_serialization() {
        let map = SideMap::new(1u32, 4u32);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: SideMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }
}
