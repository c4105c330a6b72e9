//! Sparse hash-set engine internals and public API.

mod cell;
mod engine;
mod neighbors;
pub mod seed;

pub use cell::Cell;
pub use engine::{CellGrid, GridConfig, StepScratch, StepStats};
pub use neighbors::{Direction, NeighborBuf};
pub use seed::{SeedError, SeedReport};
