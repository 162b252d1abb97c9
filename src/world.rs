//! The world.

use crate::{
    cells::{cell_to_subpattern, neighbors, subpattern_to_cell, Pos},
    error::Error,
    subpattern::Subpattern,
    transform::{TransformTable, MAX_TRANSFORM_SIZE, MIN_TRANSFORM_SIZE},
};
use std::collections::{HashMap, HashSet};

/// The world: an unbounded, sparse grid of subpattern interiors.
///
/// Subpattern-space position `p` stores the interior of side `size - 2`
/// occupying cells `[p * (size - 2), (p + 1) * (size - 2))` on each
/// axis; an absent entry is an all-inactive region, so the grid is
/// effectively infinite. Cells are addressed in cell space; only
/// stepping thinks in subpattern space.
pub struct World {
    /// Stored interiors, keyed by subpattern-space position.
    ///
    /// Every stored interior has at least one active cell.
    subpatterns: HashMap<Pos, Subpattern>,

    /// Present-pattern side length; stored interiors have side
    /// `size - 2`.
    size: u32,

    /// The number of completed steps.
    generation: u64,
}

impl World {
    /// Creates an empty world for present patterns of the given side
    /// length.
    ///
    /// Returns [`Error::SubpatternSizeError`] for sizes no transform
    /// table can exist for.
    pub fn new(size: u32) -> Result<Self, Error> {
        if !(MIN_TRANSFORM_SIZE..=MAX_TRANSFORM_SIZE).contains(&size) {
            return Err(Error::SubpatternSizeError(size));
        }
        Ok(Self {
            subpatterns: HashMap::new(),
            size,
            generation: 0,
        })
    }

    /// The side length of the stored interiors.
    fn interior(&self) -> u32 {
        self.size - 2
    }

    /// The present-pattern side length the world was created with.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The number of completed steps.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The number of active cells.
    pub fn population(&self) -> u64 {
        self.subpatterns
            .values()
            .map(|s| u64::from(s.population()))
            .sum()
    }

    /// Whether no cell is active.
    pub fn is_empty(&self) -> bool {
        self.subpatterns.is_empty()
    }

    /// The state of the cell at a cell-space position.
    ///
    /// Every position is valid; cells outside the tracked region read
    /// as inactive.
    pub fn get(&self, pos: Pos) -> bool {
        let (sub, bit) = cell_to_subpattern(pos, self.interior());
        self.subpatterns.get(&sub).map_or(false, |s| s.bit(bit))
    }

    /// Sets the state of the cell at a cell-space position.
    ///
    /// Materializes the owning subpattern on demand, and drops it again
    /// if the write leaves it with no active cells.
    pub fn set(&mut self, pos: Pos, active: bool) {
        let m = self.interior();
        let (sub, bit) = cell_to_subpattern(pos, m);
        let entry = self
            .subpatterns
            .entry(sub)
            .or_insert_with(|| Subpattern::empty(m));
        *entry = entry.with_bit(bit, active);
        if entry.binary() == 0 {
            self.subpatterns.remove(&sub);
        }
    }

    /// Advances the whole world by one generation.
    ///
    /// Recomputes every position holding a live interior and every
    /// position bordering one; one ring is exactly as far as activity
    /// can propagate in a single generation. Each recomputed position
    /// costs one table index. The new generation is built into a fresh
    /// map and swapped in at the end, so no neighborhood ever mixes old
    /// and new state. Futures that come out all-inactive are not
    /// stored, which also prunes regions that have died out.
    ///
    /// Returns [`Error::TableMismatchError`] if the table was generated
    /// for another subpattern size.
    pub fn step(&mut self, table: &TransformTable) -> Result<(), Error> {
        if table.size() != self.size {
            return Err(Error::TableMismatchError {
                table: table.size(),
                requested: self.size,
            });
        }
        let mut frontier = HashSet::with_capacity(self.subpatterns.len() * 9);
        for &pos in self.subpatterns.keys() {
            frontier.insert(pos);
            frontier.extend(neighbors(pos).iter().copied());
        }
        let mut next = HashMap::with_capacity(self.subpatterns.len());
        for &pos in &frontier {
            let future = table.future_bits(self.present(pos));
            if future != 0 {
                next.insert(pos, Subpattern::new(future, self.interior()));
            }
        }
        self.subpatterns = next;
        self.generation += 1;
        Ok(())
    }

    /// Assembles the bordered present pattern around a subpattern-space
    /// position: its own interior plus the nearest sliver of each of
    /// its 8 neighbors.
    fn present(&self, pos: Pos) -> u64 {
        let m = i64::from(self.interior());
        // The 3x3 block of stored interiors the bordered window can
        // touch.
        let mut block = [[0_u64; 3]; 3];
        for (dy, row) in block.iter_mut().enumerate() {
            for (dx, bits) in row.iter_mut().enumerate() {
                let key = (pos.0 + dx as i64 - 1, pos.1 + dy as i64 - 1);
                *bits = self.subpatterns.get(&key).map_or(0, |s| s.binary());
            }
        }
        let mut present = 0_u64;
        for y in 0..i64::from(self.size) {
            for x in 0..i64::from(self.size) {
                // Coordinates relative to this subpattern's interior
                // origin; the border row and column land in a neighbor.
                let (cx, cy) = (x - 1, y - 1);
                let owner = block[(cy.div_euclid(m) + 1) as usize][(cx.div_euclid(m) + 1) as usize];
                let bit = cx.rem_euclid(m) + cy.rem_euclid(m) * m;
                if owner >> bit & 1 != 0 {
                    present |= 1 << (x + y * i64::from(self.size));
                }
            }
        }
        present
    }

    /// Iterates over the tracked subpatterns and their subpattern-space
    /// positions, for a renderer to decode.
    pub fn subpatterns(&self) -> impl Iterator<Item = (Pos, Subpattern)> + '_ {
        self.subpatterns.iter().map(|(&pos, &s)| (pos, s))
    }

    /// Iterates over the cell-space positions of all active cells.
    pub fn live_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        let m = self.interior();
        self.subpatterns.iter().flat_map(move |(&pos, &s)| {
            let origin = subpattern_to_cell(pos, m);
            s.cells()
                .filter(|&(_, active)| active)
                .map(move |((x, y), _)| (origin.0 + x, origin.1 + y))
        })
    }

    /// Renders a cell-space window as text, one row per line, with `A`
    /// for active cells and `.` for inactive ones.
    pub fn display(&self, top_left: Pos, width: u32, height: u32) -> String {
        let mut out = String::with_capacity(((width + 1) * height) as usize);
        for y in 0..i64::from(height) {
            for x in 0..i64::from(width) {
                let active = self.get((top_left.0 + x, top_left.1 + y));
                out.push(if active { 'A' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}
