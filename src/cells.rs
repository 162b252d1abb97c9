//! Positions and cell maps.
//!
//! Two coordinate systems share the same representation: *cell space*,
//! where one unit is one atomic cell, and *subpattern space*, where one
//! unit is the interior footprint of one subpattern. The conversions
//! between them live here, next to the linear indexing used by the
//! bit-packed codec.

use std::collections::HashMap;

/// The coordinates of a cell or of a subpattern.
///
/// `(x-coordinate, y-coordinate)`. Both coordinates are signed and
/// unbounded.
pub type Pos = (i64, i64);

/// A transient map from cell-space positions to activity.
///
/// A position missing from the map reads as inactive. Cell maps only
/// appear inside the naive stepper and the codec; the world never
/// stores cells one by one.
pub type CellMap = HashMap<Pos, bool>;

/// The position at linear index `i` of a row-major grid of the given
/// width.
#[inline]
pub fn linear_to_pos(i: u64, size: u32) -> Pos {
    let size = u64::from(size);
    ((i % size) as i64, (i / size) as i64)
}

/// The linear index of `pos` in a row-major grid of the given width.
///
/// `pos` must lie inside the grid.
#[inline]
pub fn pos_to_linear(pos: Pos, size: u32) -> u64 {
    let size = i64::from(size);
    debug_assert!(pos.0 >= 0 && pos.0 < size && pos.1 >= 0 && pos.1 < size);
    (pos.0 + pos.1 * size) as u64
}

/// Resolves a cell-space position to the subpattern-space position that
/// owns it, together with the bit index of the cell inside that
/// subpattern's interior.
///
/// The subpattern at position `p` owns the interior cells
/// `[p * interior, (p + 1) * interior)` on each axis, so every
/// cell-space position, negative coordinates included, resolves to
/// exactly one subpattern.
#[inline]
pub fn cell_to_subpattern(pos: Pos, interior: u32) -> (Pos, u32) {
    let m = i64::from(interior);
    let sub = (pos.0.div_euclid(m), pos.1.div_euclid(m));
    let bit = (pos.0.rem_euclid(m) + pos.1.rem_euclid(m) * m) as u32;
    (sub, bit)
}

/// The cell-space origin of the interior of the subpattern at `pos`.
///
/// Exact inverse of [`cell_to_subpattern`] at bit index 0. The bordered
/// present block around the same subpattern starts one cell up and to
/// the left of this origin.
#[inline]
pub fn subpattern_to_cell(pos: Pos, interior: u32) -> Pos {
    let m = i64::from(interior);
    (pos.0 * m, pos.1 * m)
}

/// The 8 positions of the Moore neighborhood around `pos`.
///
/// Shared by the naive stepper (counting live neighbors) and the world
/// (expanding the frontier by one ring), which keeps the two notions of
/// adjacency identical.
pub fn neighbors(pos: Pos) -> [Pos; 8] {
    let (x, y) = pos;
    [
        (x - 1, y - 1),
        (x, y - 1),
        (x + 1, y - 1),
        (x - 1, y),
        (x + 1, y),
        (x - 1, y + 1),
        (x, y + 1),
        (x + 1, y + 1),
    ]
}
