//! Bit-packed square blocks of cells.

use crate::cells::{linear_to_pos, pos_to_linear, CellMap, Pos};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The largest side length whose cells fit in the 64-bit encoding.
pub const MAX_SUBPATTERN_SIZE: u32 = 8;

/// A square block of cells, bit-packed into a single integer.
///
/// Bit `i` of the encoding is the cell at `(i % size, i / size)`,
/// reading the block row by row from the top-left corner. The codec,
/// the table generator and the world's neighborhood assembly all share
/// this one ordering; table lookups are only valid because they agree.
///
/// Two flavors share the representation: a *present* block of side `N`
/// including its one-cell border, and the *interior* block of side
/// `N - 2` that a present block evolves into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Subpattern {
    binary: u64,
    size: u32,
}

impl Subpattern {
    /// Creates a subpattern from its packed bits.
    ///
    /// Bits at or above `size * size` must be zero.
    pub fn new(binary: u64, size: u32) -> Self {
        debug_assert!(size >= 1 && size <= MAX_SUBPATTERN_SIZE);
        debug_assert!(
            size * size == 64 || binary >> (size * size) == 0,
            "bits beyond the {0}x{0} block",
            size
        );
        Self { binary, size }
    }

    /// The all-inactive subpattern of the given side length.
    pub fn empty(size: u32) -> Self {
        Self::new(0, size)
    }

    /// The packed bits.
    pub fn binary(self) -> u64 {
        self.binary
    }

    /// The side length in cells.
    pub fn size(self) -> u32 {
        self.size
    }

    /// Whether the cell at linear index `i` is active.
    pub fn bit(self, i: u32) -> bool {
        debug_assert!(i < self.size * self.size);
        self.binary >> i & 1 != 0
    }

    /// Returns a copy with the cell at linear index `i` set to `active`.
    pub fn with_bit(self, i: u32, active: bool) -> Self {
        debug_assert!(i < self.size * self.size);
        let binary = if active {
            self.binary | 1 << i
        } else {
            self.binary & !(1 << i)
        };
        Self { binary, ..self }
    }

    /// The number of active cells.
    pub fn population(self) -> u32 {
        self.binary.count_ones()
    }

    /// Decodes the block into a cell map covering `[0, size)` on both
    /// axes.
    pub fn to_cell_map(self) -> CellMap {
        let cells = self.size * self.size;
        let mut map = CellMap::with_capacity(cells as usize);
        for i in 0..cells {
            map.insert(linear_to_pos(u64::from(i), self.size), self.bit(i));
        }
        map
    }

    /// Encodes the square window of `map` with side `size` and top-left
    /// corner at `shift`.
    ///
    /// Positions missing from the map encode as inactive. A `shift` of
    /// `(1, 1)` extracts the interior of a bordered block.
    pub fn from_cell_map(map: &CellMap, size: u32, shift: Pos) -> Self {
        let mut binary = 0;
        for y in 0..i64::from(size) {
            for x in 0..i64::from(size) {
                if map.get(&(shift.0 + x, shift.1 + y)).copied().unwrap_or(false) {
                    binary |= 1 << pos_to_linear((x, y), size);
                }
            }
        }
        Self::new(binary, size)
    }

    /// Iterates over the cells of the block in bit order, yielding each
    /// position relative to the block's top-left corner.
    pub fn cells(self) -> impl Iterator<Item = (Pos, bool)> {
        (0..self.size * self.size).map(move |i| (linear_to_pos(u64::from(i), self.size), self.bit(i)))
    }
}
