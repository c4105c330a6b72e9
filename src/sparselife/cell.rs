//! Cell identity on the i64 plane.

use std::fmt;
use std::hash::{Hash, Hasher};

const HASH_SEED: i64 = 23;
const HASH_FACTOR: i64 = 37;

/// One grid position. Never mutated after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cell {
    x: i64,
    y: i64,
}

impl Cell {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn x(self) -> i64 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> i64 {
        self.y
    }

    /// Combined coordinate hash: `((23 * 37) + x) * 37 + y`.
    ///
    /// Overflow wraps. Only the distribution of the result matters, never
    /// its numeric value.
    #[inline]
    pub const fn hash_code(self) -> i64 {
        let h = HASH_SEED.wrapping_mul(HASH_FACTOR).wrapping_add(self.x);
        h.wrapping_mul(HASH_FACTOR).wrapping_add(self.y)
    }
}

impl Hash for Cell {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i64(self.hash_code());
    }
}

impl From<(i64, i64)> for Cell {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
