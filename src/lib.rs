//! Sparse Conway's Game of Life engine (B3/S23) on the unbounded i64 plane.

pub mod sparselife;
pub use sparselife::{Cell, CellGrid, GridConfig, SeedError, SeedReport, StepScratch, StepStats};
