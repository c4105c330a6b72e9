use rand::RngCore;
use rand::SeedableRng;
use rayon::prelude::*;
use sparse_life::sparselife::{CellGrid, GridConfig, StepScratch};
use std::time::Instant;

const LIVE_DENSITY: f64 = 0.35;
const SOUPS_PER_SIZE: u64 = 4;

fn seed_soup(size: i64, density: f64, seed: u64) -> CellGrid {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let threshold = (u64::MAX as f64 * density) as u64;
    let expected = (size * size) as f64 * density;
    let mut grid = CellGrid::with_config(GridConfig::default().capacity(expected as usize));

    for y in -(size / 2)..(size / 2) {
        for x in -(size / 2)..(size / 2) {
            if rng.next_u64() <= threshold {
                grid.set_cell(x, y, true);
            }
        }
    }
    grid
}

fn bench_soup(size: i64, iterations: u64, seed: u64) -> (f64, usize) {
    let mut grid = seed_soup(size, LIVE_DENSITY, seed);
    let mut scratch = StepScratch::new();

    let start = Instant::now();
    for _ in 0..iterations {
        grid.advance_generation_with(&mut scratch);
    }
    let duration = start.elapsed();

    (duration.as_secs_f64() * 1000.0, grid.population())
}

fn main() {
    let scales: &[(i64, u64)] = &[
        (64, 500),
        (128, 200),
        (256, 100),
        (512, 40),
    ];

    println!(
        "{:<10} {:>6} {:>8} {:>12} {:>10} {:>10}",
        "Soup", "Runs", "Iters", "Total(ms)", "Avg(ms)", "Pop"
    );
    println!("{}", "-".repeat(61));

    for &(size, iters) in scales {
        // Each soup is an independent single-threaded grid.
        let results: Vec<(f64, usize)> = (0..SOUPS_PER_SIZE)
            .into_par_iter()
            .map(|i| bench_soup(size, iters, 0x5EED_1234_ABCD_EF01 ^ i))
            .collect();

        let total_ms: f64 = results.iter().map(|&(ms, _)| ms).sum();
        let avg_ms = total_ms / (iters * SOUPS_PER_SIZE) as f64;
        let mean_pop = results.iter().map(|&(_, pop)| pop).sum::<usize>() / results.len();
        println!(
            "{:<10} {:>6} {:>8} {:>12.1} {:>10.4} {:>10}",
            format!("{}x{}", size, size),
            SOUPS_PER_SIZE,
            iters,
            total_ms,
            avg_ms,
            mean_pop
        );
    }
}
