use std::collections::HashSet;
use std::io::BufRead;
use std::path::Path;

use log::{debug, trace};

use super::cell::Cell;
use super::neighbors::NeighborBuf;
use super::seed::{self, SeedCells, SeedError, SeedReport};

/// Configuration for a CellGrid instance.
///
/// Use `GridConfig::default()` for an unsized grid, or customise individual
/// knobs via the builder methods.
#[derive(Clone, Debug, Default)]
pub struct GridConfig {
    /// Expected live population, used to pre-size the live set.
    /// `None` starts empty and grows on demand.
    pub capacity: Option<usize>,
}

impl GridConfig {
    /// Pre-size the live set for roughly `n` cells.
    pub fn capacity(mut self, n: usize) -> Self {
        self.capacity = Some(n);
        self
    }
}

/// Working sets for one generation step.
///
/// Nothing in here carries meaning between calls; every field is reset at
/// the start of [`CellGrid::advance_generation_with`]. Keeping one around
/// only saves the allocations.
#[derive(Default)]
pub struct StepScratch {
    /// Dead cells with exactly three live neighbors.
    births: Vec<Cell>,
    /// Live cells with fewer than two or more than three live neighbors.
    deaths: Vec<Cell>,
    /// Dead cells already evaluated this generation.
    examined: HashSet<Cell>,
}

impl StepScratch {
    pub fn new() -> Self {
        Self::default()
    }

    fn begin(&mut self, population: usize) {
        self.births.clear();
        self.deaths.clear();
        self.examined.clear();
        self.examined.reserve(population.saturating_mul(2));
    }
}

/// Result of one generation step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepStats {
    pub births: usize,
    pub deaths: usize,
}

/// Sparse Game of Life grid: the set of live cells on the i64 plane.
#[derive(Clone, Debug)]
pub struct CellGrid {
    alive: HashSet<Cell>,
    generation: u64,
}

impl Default for CellGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl CellGrid {
    pub fn new() -> Self {
        Self::with_config(GridConfig::default())
    }

    /// Create a grid with explicit configuration.
    pub fn with_config(config: GridConfig) -> Self {
        let alive = match config.capacity {
            Some(n) => HashSet::with_capacity(n),
            None => HashSet::new(),
        };
        Self {
            alive,
            generation: 0,
        }
    }

    /// Replace the live set with the cells listed in `reader`.
    ///
    /// The previous generation is kept if reading fails.
    pub fn seed<R: BufRead>(&mut self, reader: R) -> Result<SeedReport, SeedError> {
        let seeded = seed::read_seed(reader)?;
        Ok(self.install_seed(seeded))
    }

    /// Replace the live set with the cells listed in the file at `path`.
    pub fn seed_from_path(&mut self, path: impl AsRef<Path>) -> Result<SeedReport, SeedError> {
        let seeded = seed::read_seed_file(path)?;
        Ok(self.install_seed(seeded))
    }

    /// Replace the live set with `cells`.
    pub fn seed_cells<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        self.alive.clear();
        self.alive.extend(cells.into_iter().map(Into::into));
        self.generation = 0;
    }

    fn install_seed(&mut self, seeded: SeedCells) -> SeedReport {
        self.alive.clear();
        self.alive.extend(seeded.cells);
        self.generation = 0;
        debug!("grid seeded with {} live cells", self.alive.len());
        seeded.report
    }

    /// Whether `(x, y)` is currently alive.
    #[inline]
    pub fn is_alive(&self, x: i64, y: i64) -> bool {
        self.alive.contains(&Cell::new(x, y))
    }

    pub fn set_cell(&mut self, x: i64, y: i64, alive: bool) {
        let cell = Cell::new(x, y);
        if alive {
            self.alive.insert(cell);
        } else {
            self.alive.remove(&cell);
        }
    }

    #[inline]
    fn live_count(&self, neighbors: &NeighborBuf) -> usize {
        neighbors
            .iter()
            .filter(|cell| self.alive.contains(*cell))
            .count()
    }

    /// Advance one generation (B3/S23) using throwaway working sets.
    pub fn advance_generation(&mut self) -> StepStats {
        let mut scratch = StepScratch::new();
        self.advance_generation_with(&mut scratch)
    }

    /// Advance one generation, reusing the caller's working sets.
    ///
    /// Only live cells and their neighbors are examined. All births and
    /// deaths are computed from the current generation before any of them
    /// is applied.
    pub fn advance_generation_with(&mut self, scratch: &mut StepScratch) -> StepStats {
        scratch.begin(self.alive.len());

        let mut around = NeighborBuf::new();
        let mut probe = NeighborBuf::new();

        for &cell in &self.alive {
            around.fill(cell);

            let live = self.live_count(&around);
            if !(2..=3).contains(&live) {
                scratch.deaths.push(cell);
            }

            for &neighbor in &around {
                if self.alive.contains(&neighbor) || !scratch.examined.insert(neighbor) {
                    continue;
                }
                probe.fill(neighbor);
                if self.live_count(&probe) == 3 {
                    scratch.births.push(neighbor);
                }
            }
        }

        for cell in &scratch.deaths {
            self.alive.remove(cell);
        }
        self.alive.extend(scratch.births.iter().copied());
        self.generation += 1;

        let stats = StepStats {
            births: scratch.births.len(),
            deaths: scratch.deaths.len(),
        };
        trace!(
            "generation {}: +{} -{} = {} ({} dead candidates examined)",
            self.generation,
            stats.births,
            stats.deaths,
            self.alive.len(),
            scratch.examined.len()
        );
        stats
    }

    /// Advance `n` generations, sharing one set of working buffers.
    pub fn step_n(&mut self, n: u64) {
        let mut scratch = StepScratch::new();
        for _ in 0..n {
            self.advance_generation_with(&mut scratch);
        }
    }

    pub fn clear(&mut self) {
        self.alive.clear();
        self.generation = 0;
    }

    pub fn population(&self) -> usize {
        self.alive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alive.is_empty()
    }

    /// Generations advanced since the last seed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// `(min_x, min_y, max_x, max_y)` of the live cells.
    pub fn bounds(&self) -> Option<(i64, i64, i64, i64)> {
        let mut min_x = i64::MAX;
        let mut min_y = i64::MAX;
        let mut max_x = i64::MIN;
        let mut max_y = i64::MIN;
        let mut seen = false;

        self.for_each_live(|x, y| {
            seen = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        });

        seen.then_some((min_x, min_y, max_x, max_y))
    }

    /// Visit every live cell, in no particular order.
    pub fn for_each_live<F: FnMut(i64, i64)>(&self, mut f: F) {
        for cell in &self.alive {
            f(cell.x(), cell.y());
        }
    }

    /// Sorted snapshot of the live cells.
    pub fn live_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<Cell> = self.alive.iter().copied().collect();
        cells.sort_unstable();
        cells
    }
}
