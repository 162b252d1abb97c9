//! Precomputed subpattern transforms.

use crate::{error::Error, rules::Ruleset, subpattern::Subpattern};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "serde")]
use std::convert::TryFrom;

/// The smallest subpattern size with a non-empty interior.
pub const MIN_TRANSFORM_SIZE: u32 = 3;

/// The largest subpattern size whose `2 ^ (size * size)` present
/// patterns can be enumerated.
///
/// Size 5 already means 33 554 432 entries; one size more would need
/// `2^36` and is out of reach for an in-memory table.
pub const MAX_TRANSFORM_SIZE: u32 = 5;

/// The precomputed transforms of every present pattern of one size
/// under one ruleset.
///
/// Entry `k` is the interior that the present pattern with encoding `k`
/// evolves into, so the vector is total over the whole key range by
/// construction and advancing a subpattern is a single index, never a
/// neighbor count. A table is generated once, never mutated afterwards,
/// and may be shared by any number of worlds of the same size.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTable"))]
pub struct TransformTable {
    /// The present-pattern side length the table was generated for.
    size: u32,
    /// The ruleset the table was generated for.
    ///
    /// Recorded so that a persisted table cannot be replayed against a
    /// different rule.
    rule: Ruleset,
    /// The future interior of every present pattern, indexed by the
    /// present pattern's encoding.
    ///
    /// An interior never has more than `3 * 3 = 9` cells within the
    /// supported sizes, so `u16` holds every value.
    futures: Vec<u16>,
}

impl TransformTable {
    /// Generates the full table for the given subpattern size and
    /// ruleset.
    ///
    /// Every possible present pattern is decoded into a cell map,
    /// advanced once with the naive stepper, and its interior (the
    /// block one cell in from every edge) re-encoded as the future.
    /// Generating twice with the same arguments yields identical
    /// tables.
    ///
    /// Returns [`Error::SubpatternSizeError`] unless
    /// `3 <= size <= 5`: a smaller block has no interior, and a larger
    /// one cannot be enumerated. Returns [`Error::B0Error`] for `B0`
    /// rules: their empty present pattern maps to a live interior,
    /// which only the finitely many subpatterns near the frontier
    /// would ever see, while identical empty neighborhoods further out
    /// stayed dead.
    pub fn generate(size: u32, rule: Ruleset) -> Result<Self, Error> {
        if !(MIN_TRANSFORM_SIZE..=MAX_TRANSFORM_SIZE).contains(&size) {
            return Err(Error::SubpatternSizeError(size));
        }
        if rule.has_b0() {
            return Err(Error::B0Error);
        }
        let len = 1_usize << (size * size);
        let mut futures = Vec::with_capacity(len);
        for present in 0..len as u64 {
            let map = Subpattern::new(present, size).to_cell_map();
            let next = rule.step_cell_map(&map);
            let future = Subpattern::from_cell_map(&next, size - 2, (1, 1));
            futures.push(future.binary() as u16);
        }
        Ok(Self {
            size,
            rule,
            futures,
        })
    }

    /// The present-pattern side length the table was generated for.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The side length of the interiors the table produces.
    pub fn interior_size(&self) -> u32 {
        self.size - 2
    }

    /// The ruleset the table was generated for.
    pub fn rule(&self) -> Ruleset {
        self.rule
    }

    /// The number of entries, always exactly `2 ^ (size * size)`.
    pub fn len(&self) -> usize {
        self.futures.len()
    }

    /// Whether the table has no entries. A generated table never is.
    pub fn is_empty(&self) -> bool {
        self.futures.is_empty()
    }

    /// Looks up the future interior of a present pattern.
    ///
    /// Returns [`Error::TableMismatchError`] if the pattern's size is
    /// not the size the table was generated for; a table is total for
    /// its own size, so that is the only way a lookup can fail.
    pub fn future(&self, present: Subpattern) -> Result<Subpattern, Error> {
        if present.size() != self.size {
            return Err(Error::TableMismatchError {
                table: self.size,
                requested: present.size(),
            });
        }
        Ok(Subpattern::new(
            self.future_bits(present.binary()),
            self.interior_size(),
        ))
    }

    /// Raw lookup by encoding; the caller has already checked the size.
    pub(crate) fn future_bits(&self, present: u64) -> u64 {
        u64::from(self.futures[present as usize])
    }
}

/// The raw fields of a persisted table, before validation.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawTable {
    size: u32,
    rule: Ruleset,
    futures: Vec<u16>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTable> for TransformTable {
    type Error = Error;

    /// Revalidates a persisted table.
    ///
    /// A generated table is total and in range by construction, but an
    /// artifact read back from storage can claim anything; a table
    /// that slipped past this check would panic or corrupt a world
    /// mid-step instead of failing here.
    fn try_from(raw: RawTable) -> Result<Self, Error> {
        let RawTable {
            size,
            rule,
            futures,
        } = raw;
        if !(MIN_TRANSFORM_SIZE..=MAX_TRANSFORM_SIZE).contains(&size) {
            return Err(Error::SubpatternSizeError(size));
        }
        if rule.has_b0() {
            return Err(Error::B0Error);
        }
        let interior_bits = (size - 2) * (size - 2);
        if futures.len() != 1 << (size * size)
            || futures.iter().any(|&future| future >> interior_bits != 0)
        {
            return Err(Error::TableArtifactError(size));
        }
        Ok(Self {
            size,
            rule,
            futures,
        })
    }
}
