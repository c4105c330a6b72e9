use std::collections::HashSet;
use std::io::Cursor;

use proptest::prelude::*;
use sparse_life::sparselife::seed::write_seed;
use sparse_life::sparselife::{Cell, CellGrid};

fn step_naive(cells: &HashSet<(i64, i64)>) -> HashSet<(i64, i64)> {
    let mut candidates = HashSet::new();
    for &(x, y) in cells {
        for dy in -1..=1 {
            for dx in -1..=1 {
                candidates.insert((x + dx, y + dy));
            }
        }
    }
    candidates
        .into_iter()
        .filter(|&(x, y)| {
            let mut neighbors = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if (dx, dy) != (0, 0) && cells.contains(&(x + dx, y + dy)) {
                        neighbors += 1;
                    }
                }
            }
            neighbors == 3 || (neighbors == 2 && cells.contains(&(x, y)))
        })
        .collect()
}

fn collect_live(engine: &CellGrid) -> HashSet<(i64, i64)> {
    let mut out = HashSet::new();
    engine.for_each_live(|x, y| {
        out.insert((x, y));
    });
    out
}

fn small_pattern() -> impl Strategy<Value = HashSet<(i64, i64)>> {
    prop::collection::hash_set((-6i64..=6, -6i64..=6), 0..40)
}

proptest! {
    #[test]
    fn equal_cells_have_equal_hash_codes(x in any::<i64>(), y in any::<i64>()) {
        let a = Cell::new(x, y);
        let b = Cell::from((x, y));
        prop_assert_eq!(a, b);
        prop_assert_eq!(a.hash_code(), b.hash_code());
    }

    #[test]
    fn query_is_idempotent(pattern in small_pattern(), x in -8i64..=8, y in -8i64..=8) {
        let mut engine = CellGrid::new();
        engine.seed_cells(pattern.iter().copied());
        let first = engine.is_alive(x, y);
        for _ in 0..4 {
            prop_assert_eq!(engine.is_alive(x, y), first);
        }
        prop_assert_eq!(first, pattern.contains(&(x, y)));
    }

    #[test]
    fn seed_text_round_trips(pattern in small_pattern()) {
        let mut text = Vec::new();
        write_seed(&mut text, pattern.iter().map(|&c| Cell::from(c))).unwrap();

        let mut engine = CellGrid::new();
        let report = engine.seed(Cursor::new(text)).unwrap();
        prop_assert_eq!(report.cells, pattern.len());
        prop_assert_eq!(collect_live(&engine), pattern);
    }

    #[test]
    fn agrees_with_naive_stepper(pattern in small_pattern(), steps in 1usize..6) {
        let mut engine = CellGrid::new();
        engine.seed_cells(pattern.iter().copied());
        let mut naive = pattern;
        for _ in 0..steps {
            engine.advance_generation();
            naive = step_naive(&naive);
            prop_assert_eq!(collect_live(&engine), naive.clone());
        }
    }

    #[test]
    fn edge_cells_never_overflow(ys in prop::collection::vec(-3i64..=3, 1..8)) {
        let mut engine = CellGrid::new();
        for &y in &ys {
            engine.set_cell(i64::MAX, y, true);
            engine.set_cell(i64::MIN, y, true);
        }
        engine.step_n(4);
        let mut xs = Vec::new();
        engine.for_each_live(|x, _| xs.push(x));
        for x in xs {
            prop_assert!(x >= i64::MAX - 4 || x <= i64::MIN + 4, "x = {} drifted off the edge", x);
        }
    }
}
