#[cfg(feature = "mimalloc-global")]
#[global_allocator]
static GLOBAL_ALLOCATOR: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io::{self, Write};
use std::time::Instant;

use anyhow::{Context, bail};
use log::{LevelFilter, debug, info};
use simple_logger::SimpleLogger;
use sparse_life::sparselife::{CellGrid, GridConfig, StepScratch};

const DEFAULT_SEED_PATH: &str = "seed_input.txt";
const DEFAULT_GENERATIONS: u64 = 10;
const MAX_VIEW_SIDE: i64 = 1024;

const USAGE: &str = "usage: sparse-life [--seed PATH] [--generations N] [--view N] [--capacity N] [--dump] [--verbose]";

struct MainArgs {
    config: GridConfig,
    seed_path: String,
    generations: u64,
    view: Option<i64>,
    dump: bool,
    verbose: bool,
}

fn parse_args() -> anyhow::Result<MainArgs> {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = MainArgs {
        config: GridConfig::default(),
        seed_path: DEFAULT_SEED_PATH.to_owned(),
        generations: DEFAULT_GENERATIONS,
        view: None,
        dump: false,
        verbose: false,
    };
    let next_arg = |i: usize, flag: &str| -> anyhow::Result<&str> {
        args.get(i)
            .map(String::as_str)
            .with_context(|| format!("{flag} requires a value"))
    };
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                parsed.seed_path = next_arg(i, "--seed")?.to_owned();
            }
            "--generations" => {
                i += 1;
                parsed.generations = next_arg(i, "--generations")?
                    .parse()
                    .context("--generations requires a non-negative integer")?;
            }
            "--view" => {
                i += 1;
                parsed.view = Some(parse_view_side(next_arg(i, "--view")?)?);
            }
            "--capacity" => {
                i += 1;
                let n: usize = next_arg(i, "--capacity")?
                    .parse()
                    .context("--capacity requires a non-negative integer")?;
                parsed.config = parsed.config.capacity(n);
            }
            "--dump" => parsed.dump = true,
            "--verbose" => parsed.verbose = true,
            other => bail!("unknown argument: {other}\n{USAGE}"),
        }
        i += 1;
    }
    Ok(parsed)
}

fn parse_view_side(value: &str) -> anyhow::Result<i64> {
    let side: i64 = value
        .parse()
        .context("--view requires a positive integer")?;
    if !(1..=MAX_VIEW_SIDE).contains(&side) {
        bail!("--view must be between 1 and {MAX_VIEW_SIDE}, got {side}");
    }
    Ok(side)
}

/// Print a `side`×`side` window centered on the origin, north at the top.
fn print_window(grid: &CellGrid, side: i64) -> io::Result<()> {
    let half = side / 2;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut row = String::with_capacity(side as usize);
    for y in (0..side).rev() {
        row.clear();
        for x in 0..side {
            row.push(if grid.is_alive(x - half, y - half) { '#' } else { '.' });
        }
        writeln!(out, "{row}")?;
    }
    out.flush()
}

fn main() -> anyhow::Result<()> {
    let args = parse_args()?;
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::new()
        .with_level(level)
        .env()
        .init()
        .context("failed to install logger")?;
    info!("Starting sparse-life v{} ...", env!("CARGO_PKG_VERSION"));

    let mut grid = CellGrid::with_config(args.config);
    let report = grid
        .seed_from_path(&args.seed_path)
        .with_context(|| format!("failed to seed grid from {}", args.seed_path))?;
    info!(
        "Seeded {} cells from {} ({} lines, {} skipped)",
        report.cells, args.seed_path, report.lines, report.skipped
    );

    let mut scratch = StepScratch::new();
    let start = Instant::now();
    for _ in 0..args.generations {
        let stats = grid.advance_generation_with(&mut scratch);
        info!(
            "Generation {}: population = {} (+{} -{})",
            grid.generation(),
            grid.population(),
            stats.births,
            stats.deaths
        );
    }
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    debug!("{} generations in {elapsed_ms:.3} ms", args.generations);

    if let Some(bounds) = grid.bounds() {
        info!("Live bounds: {bounds:?}");
    }
    if let Some(side) = args.view {
        print_window(&grid, side).context("failed to print view")?;
    }
    if args.dump {
        sparse_life::sparselife::seed::write_seed(io::stdout().lock(), grid.live_cells())
            .context("failed to write live cells")?;
    }
    Ok(())
}
