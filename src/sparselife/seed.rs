//! Seed sources: newline-delimited coordinate lists.
//!
//! Each line contributes at most one live cell. Tokens are separated by
//! whitespace, commas or parentheses, and the first two tokens that parse as
//! `i64` become `x` then `y`, so `(3, -4)`, `3 -4` and `3,-4` are all the
//! same cell. Lines without two integers are skipped, never reported as
//! errors.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, trace};
use thiserror::Error;

use super::cell::Cell;

/// Errors that abort loading a seed source.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be opened.
    #[error("cannot open seed file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading failed partway through the source.
    #[error("read error on seed line {line}: {source}")]
    Read {
        /// 1-based number of the line being read.
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Summary of one seed load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Lines read from the source.
    pub lines: usize,
    /// Distinct live cells produced.
    pub cells: usize,
    /// Lines that did not yield a coordinate pair.
    pub skipped: usize,
}

/// Cells parsed from a seed source, deduplicated.
#[derive(Debug, Default)]
pub struct SeedCells {
    pub cells: HashSet<Cell>,
    pub report: SeedReport,
}

#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '(' | ')')
}

/// Parse one seed line. Returns `None` unless two integers are present.
pub fn parse_line(line: &str) -> Option<Cell> {
    let mut ints = line
        .split(is_separator)
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<i64>().ok());
    let x = ints.next()?;
    let y = ints.next()?;
    Some(Cell::new(x, y))
}

/// Read every line of `reader` into a set of live cells.
///
/// Bytes that are not valid UTF-8 are replaced before tokenizing, which at
/// worst turns the line into a skipped one. Only I/O failures are errors.
pub fn read_seed<R: BufRead>(mut reader: R) -> Result<SeedCells, SeedError> {
    let mut out = SeedCells::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| SeedError::Read {
                line: out.report.lines + 1,
                source,
            })?;
        if read == 0 {
            break;
        }
        out.report.lines += 1;

        let line = String::from_utf8_lossy(&buf);
        match parse_line(&line) {
            Some(cell) => {
                out.cells.insert(cell);
            }
            None => {
                out.report.skipped += 1;
                trace!(
                    "skipping seed line {}: {:?}",
                    out.report.lines,
                    line.trim_end()
                );
            }
        }
    }

    out.report.cells = out.cells.len();
    debug!(
        "seed parsed: {} lines, {} cells, {} skipped",
        out.report.lines, out.report.cells, out.report.skipped
    );
    Ok(out)
}

/// Open `path` and read it as a seed source.
pub fn read_seed_file(path: impl AsRef<Path>) -> Result<SeedCells, SeedError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SeedError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("reading seed file {}", path.display());
    read_seed(BufReader::new(file))
}

/// Write `cells` as seed lines, sorted by `(x, y)`.
pub fn write_seed<W, I>(mut writer: W, cells: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Cell>,
{
    let mut sorted: Vec<Cell> = cells.into_iter().collect();
    sorted.sort_unstable();
    for cell in sorted {
        writeln!(writer, "{cell}")?;
    }
    writer.flush()
}
