//! A validated square obstacle grid.
//!
//! [`BinaryGrid`] is the input to every search in `tessel-paths`: an N×N
//! matrix where each cell is either [`Cell::Open`] or [`Cell::Blocked`].
//! Construction validates shape and values up front so that searches never
//! have to.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::geom::{Point, Range};

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Open,
    Blocked,
}

impl Cell {
    /// Interpret a 0/1 integer. Any other value is rejected.
    pub const fn from_bit(v: i64) -> Option<Self> {
        match v {
            0 => Some(Self::Open),
            1 => Some(Self::Blocked),
            _ => None,
        }
    }

    /// The 0/1 integer for this cell.
    pub const fn bit(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Blocked => 1,
        }
    }

    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

impl From<bool> for Cell {
    fn from(blocked: bool) -> Self {
        if blocked { Self::Blocked } else { Self::Open }
    }
}

/// Errors raised when raw input does not describe a valid square grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// No rows at all.
    #[error("grid is empty")]
    Empty,
    /// A row with no cells.
    #[error("grid row {row} is empty")]
    EmptyRow { row: usize },
    /// A row whose length differs from the number of rows.
    #[error("grid is not square: row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A numeric cell outside {0, 1}.
    #[error("grid value {value} at row {row}, column {col} is not 0 or 1")]
    InvalidValue { row: usize, col: usize, value: i64 },
    /// An unrecognised character in a textual grid.
    #[error("grid character '{ch}' at row {row}, column {col} is not one of . 0 # 1")]
    InvalidChar { ch: char, row: usize, col: usize },
}

/// An immutable-by-convention N×N grid of open and blocked cells, N ≥ 1.
///
/// Cell `(0, 0)` is the top-left corner and `(n-1, n-1)` the bottom-right.
/// Storage is row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BinaryGrid {
    n: usize,
    blocked: Vec<bool>,
}

impl BinaryGrid {
    /// An `n`×`n` grid with no obstacles. `n` must be at least 1.
    pub fn open(n: usize) -> Result<Self, GridError> {
        if n == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            n,
            blocked: vec![false; n * n],
        })
    }

    /// Build an `n`×`n` grid by asking `f` for each cell.
    pub fn from_fn(n: usize, mut f: impl FnMut(Point) -> Cell) -> Result<Self, GridError> {
        let mut g = Self::open(n)?;
        for p in g.range() {
            let i = g.index(p);
            g.blocked[i] = f(p) == Cell::Blocked;
        }
        Ok(g)
    }

    /// Build from rows of 0/1 integers (`1` = blocked).
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, GridError> {
        let n = check_shape(rows.iter().map(Vec::len))?;
        let mut blocked = Vec::with_capacity(n * n);
        for (row, r) in rows.iter().enumerate() {
            for (col, &value) in r.iter().enumerate() {
                let cell =
                    Cell::from_bit(value).ok_or(GridError::InvalidValue { row, col, value })?;
                blocked.push(cell == Cell::Blocked);
            }
        }
        Ok(Self { n, blocked })
    }

    /// Build from rows of booleans (`true` = blocked).
    pub fn from_bools<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, GridError> {
        let n = check_shape(rows.iter().map(|r| r.as_ref().len()))?;
        let blocked = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().copied())
            .collect();
        Ok(Self { n, blocked })
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// The grid rectangle `[0, n) × [0, n)`.
    #[inline]
    pub fn range(&self) -> Range {
        Range::square(self.n as i32)
    }

    /// Source cell, always `(0, 0)`.
    #[inline]
    pub fn source(&self) -> Point {
        Point::ZERO
    }

    /// Destination cell, always `(n-1, n-1)`.
    #[inline]
    pub fn destination(&self) -> Point {
        let last = self.n as i32 - 1;
        Point::new(last, last)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.range().contains(p)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        if !self.contains(p) {
            return None;
        }
        Some(Cell::from(self.blocked[self.index(p)]))
    }

    /// Whether `p` is in bounds and not blocked.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        self.at(p).is_some_and(Cell::is_open)
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, cell: Cell) {
        if !self.contains(p) {
            return;
        }
        let i = self.index(p);
        self.blocked[i] = cell == Cell::Blocked;
    }

    /// A copy of this grid with `p` blocked.
    pub fn with_blocked(&self, p: Point) -> Self {
        let mut g = self.clone();
        g.set(p, Cell::Blocked);
        g
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }

    /// Rows of 0/1 integers, the inverse of [`from_rows`](Self::from_rows).
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.blocked
            .chunks(self.n)
            .map(|row| row.iter().map(|&b| Cell::from(b).bit()).collect())
            .collect()
    }

    /// Iterate over `(Point, Cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.range()
            .iter()
            .zip(self.blocked.iter())
            .map(|(p, &b)| (p, Cell::from(b)))
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        p.y as usize * self.n + p.x as usize
    }
}

/// Validate that `lens` describes N rows of N cells each and return N.
fn check_shape(lens: impl ExactSizeIterator<Item = usize>) -> Result<usize, GridError> {
    let n = lens.len();
    if n == 0 {
        return Err(GridError::Empty);
    }
    for (row, found) in lens.enumerate() {
        if found == 0 {
            return Err(GridError::EmptyRow { row });
        }
        if found != n {
            return Err(GridError::NotSquare {
                row,
                expected: n,
                found,
            });
        }
    }
    Ok(n)
}

/// Parses an ASCII picture, one line per row: `.` or `0` is open, `#` or
/// `1` is blocked. Surrounding whitespace of the whole string and of each
/// line is ignored.
impl FromStr for BinaryGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<bool>> = Vec::new();
        for (row, line) in s.trim().lines().enumerate() {
            let mut cells = Vec::new();
            for (col, ch) in line.trim().chars().enumerate() {
                let blocked = match ch {
                    '.' | '0' => false,
                    '#' | '1' => true,
                    _ => return Err(GridError::InvalidChar { ch, row, col }),
                };
                cells.push(blocked);
            }
            rows.push(cells);
        }
        Self::from_bools(&rows)
    }
}

impl fmt::Display for BinaryGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.blocked.chunks(self.n).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &b in row {
                f.write_str(if b { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BinaryGrid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.to_rows(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BinaryGrid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows: Vec<Vec<i64>> = serde::Deserialize::deserialize(deserializer)?;
        BinaryGrid::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}
