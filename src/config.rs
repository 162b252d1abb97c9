//! Engine configuration.

use crate::{error::Error, rules::Ruleset, transform::TransformTable, world::World};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Engine configuration.
///
/// The transform table and every world stepped with it must come from
/// the same configuration. The table records its own copy of the size
/// and ruleset, so a persisted table cannot be replayed against the
/// wrong configuration.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Present-pattern side length, border included.
    ///
    /// The stored interiors have side `subpattern_size - 2`. The
    /// default of 5 stores 3x3 interiors and generates a table of
    /// `2^25` entries.
    #[educe(Default = 5)]
    pub subpattern_size: u32,

    /// The cellular automaton's ruleset.
    pub rule: Ruleset,
}

impl Config {
    /// Creates a configuration with the given subpattern size and the
    /// default [`LIFE`](crate::LIFE) ruleset.
    pub fn new(subpattern_size: u32) -> Self {
        Self {
            subpattern_size,
            ..Self::default()
        }
    }

    /// Sets the ruleset.
    pub fn set_rule(mut self, rule: Ruleset) -> Self {
        self.rule = rule;
        self
    }

    /// Generates the transform table for this configuration.
    ///
    /// This enumerates all `2 ^ (subpattern_size ^ 2)` present
    /// patterns; for size 5 it is the one expensive call in the crate
    /// and is meant to run once, ahead of stepping.
    pub fn table(&self) -> Result<TransformTable, Error> {
        TransformTable::generate(self.subpattern_size, self.rule)
    }

    /// Creates an empty world for this configuration.
    pub fn world(&self) -> Result<World, Error> {
        World::new(self.subpattern_size)
    }
}
