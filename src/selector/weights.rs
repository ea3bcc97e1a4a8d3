//! Bounded integer weight per move.

use serde::{Deserialize, Serialize};

use crate::core::{Move, WeightBounds};

/// Weight of every move, kept inside `bounds`.
///
/// Backed by a fixed array in `Move` enumeration order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightTable {
    weights: [u32; Move::COUNT],
    bounds: WeightBounds,
}

impl WeightTable {
    /// Every move at `initial`, clamped into `bounds`.
    #[must_use]
    pub fn new(initial: u32, bounds: WeightBounds) -> Self {
        Self {
            weights: [bounds.clamp(initial); Move::COUNT],
            bounds,
        }
    }

    /// Explicit weights in enumeration order, each clamped into `bounds`.
    #[must_use]
    pub fn from_weights(weights: [u32; Move::COUNT], bounds: WeightBounds) -> Self {
        Self {
            weights: weights.map(|w| bounds.clamp(w)),
            bounds,
        }
    }

    #[must_use]
    pub fn get(&self, m: Move) -> u32 {
        self.weights[m.index()]
    }

    #[must_use]
    pub fn bounds(&self) -> WeightBounds {
        self.bounds
    }

    /// Sum of all weights. Never zero since the floor is at least 1, and
    /// never overflows for bounds that pass `WeightBounds::validate`.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.weights.iter().sum()
    }

    /// Iterate over (Move, weight) in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Move, u32)> + '_ {
        Move::ALL.into_iter().map(move |m| (m, self.get(m)))
    }

    /// Raise a move's weight by one, up to the cap. Returns whether it changed.
    pub fn increment(&mut self, m: Move) -> bool {
        let w = &mut self.weights[m.index()];
        if *w < self.bounds.max {
            *w += 1;
            true
        } else {
            false
        }
    }

    /// Lower a move's weight by one, down to the floor. Returns whether it changed.
    pub fn decrement(&mut self, m: Move) -> bool {
        let w = &mut self.weights[m.index()];
        if *w > self.bounds.min {
            *w -= 1;
            true
        } else {
            false
        }
    }

    /// Map a draw in `[0, total)` to a move.
    ///
    /// Walks moves in enumeration order, subtracting each weight from the
    /// draw until the remainder falls below the current move's weight.
    /// A draw at or past the total lands on the last move.
    ///
    /// ```
    /// use rpsls::core::{Move, WeightBounds};
    /// use rpsls::selector::WeightTable;
    ///
    /// let table = WeightTable::new(5, WeightBounds::default());
    /// assert_eq!(table.pick(0), Move::Rock);
    /// assert_eq!(table.pick(5), Move::Paper);
    /// assert_eq!(table.pick(24), Move::Spock);
    /// ```
    #[must_use]
    pub fn pick(&self, draw: u32) -> Move {
        let mut remaining = draw;
        for (m, weight) in self.iter() {
            if remaining < weight {
                return m;
            }
            remaining -= weight;
        }
        Move::ALL[Move::COUNT - 1]
    }
}

impl std::fmt::Display for WeightTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (m, w) in self.iter() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{m}={w}")?;
            first = false;
        }
        Ok(())
    }
}
