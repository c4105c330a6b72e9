use std::collections::HashSet;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use sparse_life::sparselife::seed::{read_seed, write_seed};
use sparse_life::sparselife::{Cell, CellGrid, SeedError};

fn collect_live(engine: &CellGrid) -> HashSet<(i64, i64)> {
    let mut out = HashSet::new();
    engine.for_each_live(|x, y| {
        out.insert((x, y));
    });
    out
}

fn set_of(cells: &[(i64, i64)]) -> HashSet<(i64, i64)> {
    cells.iter().copied().collect()
}

fn temp_seed_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "sparse-life-{}-{}.txt",
        name,
        std::process::id()
    ));
    fs::write(&path, contents).expect("write seed file");
    path
}

#[test]
fn seed_accepts_mixed_formats() {
    let mut engine = CellGrid::new();
    let report = engine
        .seed(Cursor::new("(3, -4)\n5 6\n-7,8\n"))
        .expect("seed from memory");

    assert_eq!(report.cells, 3);
    assert_eq!(report.skipped, 0);
    assert_eq!(
        collect_live(&engine),
        set_of(&[(3, -4), (5, 6), (-7, 8)])
    );
}

#[test]
fn malformed_lines_do_not_abort_later_lines() {
    let mut engine = CellGrid::new();
    let report = engine
        .seed(Cursor::new("1\n\nhello world\n(2)\n(10, 20)\n"))
        .expect("seed from memory");

    assert_eq!(report.lines, 5);
    assert_eq!(report.skipped, 4);
    assert_eq!(collect_live(&engine), set_of(&[(10, 20)]));
}

#[test]
fn duplicate_lines_collapse() {
    let mut engine = CellGrid::new();
    let report = engine
        .seed(Cursor::new("(1, 1)\n1 1\n1,1\n"))
        .expect("seed from memory");
    assert_eq!(report.cells, 1);
    assert_eq!(engine.population(), 1);
}

#[test]
fn reseeding_replaces_previous_cells() {
    let mut engine = CellGrid::new();
    engine.seed(Cursor::new("0 0\n1 0\n2 0\n")).unwrap();
    engine.advance_generation();
    engine.seed(Cursor::new("9 9\n")).unwrap();
    assert_eq!(collect_live(&engine), set_of(&[(9, 9)]));
    assert_eq!(engine.generation(), 0);
}

#[test]
fn seed_from_file_then_run_blinker() {
    let path = temp_seed_file("blinker", "# blinker\n(0, 0)\n(1, 0)\n(2, 0)\n");
    let mut engine = CellGrid::new();
    let report = engine.seed_from_path(&path).expect("seed from file");
    fs::remove_file(&path).ok();

    assert_eq!(report.cells, 3);
    assert_eq!(report.skipped, 1);

    engine.advance_generation();
    assert_eq!(
        collect_live(&engine),
        set_of(&[(1, -1), (1, 0), (1, 1)])
    );
}

#[test]
fn missing_file_is_fatal_and_leaves_grid_untouched() {
    let mut engine = CellGrid::new();
    engine.set_cell(1, 2, true);

    let path = std::env::temp_dir().join("sparse-life-definitely-missing.txt");
    let err = engine.seed_from_path(&path).unwrap_err();

    assert!(matches!(err, SeedError::Open { .. }));
    assert!(engine.is_alive(1, 2));
}

#[test]
fn written_seed_reloads_to_same_generation() {
    let mut engine = CellGrid::new();
    engine
        .seed(Cursor::new("1 0\n2 -1\n0 -2\n1 -2\n2 -2\n"))
        .unwrap();
    engine.step_n(7);

    let mut saved = Vec::new();
    write_seed(&mut saved, engine.live_cells()).unwrap();

    let mut reloaded = CellGrid::new();
    reloaded.seed(Cursor::new(saved)).unwrap();
    assert_eq!(reloaded.live_cells(), engine.live_cells());

    let parsed = read_seed(Cursor::new("(-1, 5)")).unwrap();
    assert!(parsed.cells.contains(&Cell::new(-1, 5)));
}
