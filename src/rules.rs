//! Life-like rulesets and the naive reference stepper.
//!
//! For the notations of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

use crate::{
    cells::{neighbors, CellMap},
    error::Error,
};
use ca_rules::ParseLife;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Conway's original ruleset, `B3/S23`.
pub const LIFE: Ruleset = Ruleset {
    survive: 0b1100,
    birth: 0b1000,
};

/// A totalistic Life-like ruleset.
///
/// `survive` and `birth` are 9-bit masks over neighbor counts: bit `c`
/// of `survive` is set iff an active cell with `c` active neighbors
/// stays active, and bit `c` of `birth` iff an inactive cell with `c`
/// active neighbors becomes active.
///
/// Rulesets are immutable values, threaded explicitly into table
/// generation and recorded in the generated table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ruleset {
    survive: u16,
    birth: u16,
}

impl Ruleset {
    /// Constructs a ruleset from the `b` and `s` neighbor counts.
    ///
    /// Counts above 8 are ignored; a Moore neighborhood never has more
    /// than 8 cells.
    pub fn new(b: &[u8], s: &[u8]) -> Self {
        fn mask(counts: &[u8]) -> u16 {
            counts
                .iter()
                .filter(|&&c| c <= 8)
                .fold(0, |acc, &c| acc | 1 << c)
        }
        Self {
            survive: mask(s),
            birth: mask(b),
        }
    }

    /// Whether the rule contains `B0`.
    ///
    /// In a `B0` rule a dead cell with no active neighbors comes
    /// alive, so the infinite empty background cannot stay empty and
    /// no sparse world can represent the next generation. Such rules
    /// are rejected before table generation.
    pub fn has_b0(self) -> bool {
        self.birth & 1 != 0
    }

    /// The next state of a cell with the given state and number of
    /// active neighbors.
    pub fn next_state(self, active: bool, live_neighbors: u32) -> bool {
        let mask = if active { self.survive } else { self.birth };
        live_neighbors <= 8 && mask >> live_neighbors & 1 != 0
    }

    /// Advances every cell of `map` by one generation.
    ///
    /// Neighbors missing from the map count as inactive, and only the
    /// positions already in the map appear in the result. This is the
    /// slow reference stepper: the world never calls it, only the table
    /// generator does, once per possible present pattern, after which
    /// every step is a table lookup.
    pub fn step_cell_map(self, map: &CellMap) -> CellMap {
        let mut next = CellMap::with_capacity(map.len());
        for (&pos, &active) in map {
            let live = neighbors(pos)
                .iter()
                .filter(|n| map.get(n).copied().unwrap_or(false))
                .count() as u32;
            next.insert(pos, self.next_state(active, live));
        }
        next
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        LIFE
    }
}

/// A parser for the ruleset.
impl ParseLife for Ruleset {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(&b, &s)
    }
}

impl FromStr for Ruleset {
    type Err = Error;
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rule: Ruleset = ParseLife::parse_rule(input).map_err(Error::ParseRuleError)?;
        if rule.has_b0() {
            Err(Error::B0Error)
        } else {
            Ok(rule)
        }
    }
}
