mod cells;
mod config;
mod error;
mod rules;
mod subpattern;
mod transform;
mod world;

pub use cells::{
    cell_to_subpattern, linear_to_pos, neighbors, pos_to_linear, subpattern_to_cell, CellMap, Pos,
};
pub use config::Config;
pub use error::Error;
pub use rules::{Ruleset, LIFE};
pub use subpattern::{Subpattern, MAX_SUBPATTERN_SIZE};
pub use transform::{TransformTable, MAX_TRANSFORM_SIZE, MIN_TRANSFORM_SIZE};
pub use world::World;
