//! Shortest clear path across a [`BinaryGrid`].
//!
//! A clear path runs from the top-left cell to the bottom-right cell through
//! open cells only. Its length counts cells, both endpoints included, so a
//! 1×1 open grid has a path of length 1.

use log::debug;
use tessel_core::{BinaryGrid, GridError, Point};

use crate::PathRange;
use crate::neighbors::Moves;
use crate::pathrange::UNREACHABLE;
use crate::traits::Pather;

/// Value returned by [`shortest_clear_path_len`] when no clear path exists.
pub const NO_PATH: i32 = -1;

/// Tuning knobs for [`ClearPathSolver`].
///
/// The default is the classic problem: king moves, no length limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    pub moves: Moves,
    /// Paths with more cells than this are reported as missing.
    pub max_len: Option<usize>,
}

impl SolverConfig {
    pub fn with_moves(mut self, moves: Moves) -> Self {
        self.moves = moves;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }
}

/// [`Pather`] over the open cells of a [`BinaryGrid`].
pub struct ClearPather<'a> {
    grid: &'a BinaryGrid,
    moves: Moves,
}

impl<'a> ClearPather<'a> {
    pub fn new(grid: &'a BinaryGrid, moves: Moves) -> Self {
        Self { grid, moves }
    }
}

impl Pather for ClearPather<'_> {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.moves.push_neighbors(p, buf, |n| self.grid.is_open(n));
    }
}

/// Reusable clear-path solver.
///
/// Holds a [`PathRange`] so that solving many grids of similar size does not
/// reallocate the search buffers.
pub struct ClearPathSolver {
    config: SolverConfig,
    pr: PathRange,
}

impl Default for ClearPathSolver {
    fn default() -> Self {
        Self::new(SolverConfig::default())
    }
}

impl ClearPathSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            pr: PathRange::new(Default::default()),
        }
    }

    #[inline]
    pub fn config(&self) -> SolverConfig {
        self.config
    }

    /// Cells expanded by the last search.
    #[inline]
    pub fn last_expanded(&self) -> usize {
        self.pr.last_expanded()
    }

    /// Length of the shortest clear path, or `None` if there is none.
    pub fn solve(&mut self, grid: &BinaryGrid) -> Option<usize> {
        self.route(grid).map(|path| path.len())
    }

    /// One shortest clear path from source to destination.
    pub fn route(&mut self, grid: &BinaryGrid) -> Option<Vec<Point>> {
        let (src, dst) = (grid.source(), grid.destination());
        if !grid.is_open(src) || !grid.is_open(dst) {
            debug!("{n}x{n} grid: source or destination blocked", n = grid.size());
            return None;
        }

        let max_dist = match self.config.max_len {
            Some(0) => return None,
            Some(len) => i32::try_from(len - 1).unwrap_or(i32::MAX),
            None => i32::MAX,
        };
        if self.config.moves.min_steps(src, dst) > max_dist {
            debug!(
                "{n}x{n} grid: no path fits in {max_dist} steps",
                n = grid.size()
            );
            return None;
        }

        if self.pr.range() != grid.range() {
            self.pr.set_range(grid.range());
        }
        let pather = ClearPather::new(grid, self.config.moves);
        let path = self.pr.bfs_path(&pather, src, dst, max_dist);

        debug!(
            "{n}x{n} grid: path length {:?}, {} cells expanded",
            path.as_ref().map(Vec::len),
            self.pr.last_expanded(),
            n = grid.size()
        );
        path
    }

    /// Shortest clear path length from the source to every cell, row by row.
    ///
    /// Entries are `None` for blocked or unreachable cells and for cells past
    /// the configured `max_len`. A blocked source leaves every entry `None`.
    pub fn distances(&mut self, grid: &BinaryGrid) -> Vec<Vec<Option<usize>>> {
        let n = grid.size();
        let src = grid.source();
        if self.pr.range() != grid.range() {
            self.pr.set_range(grid.range());
        }

        let max_dist = match self.config.max_len {
            Some(len) => i32::try_from(len).unwrap_or(i32::MAX) - 1,
            None => i32::MAX,
        };
        let pather = ClearPather::new(grid, self.config.moves);
        let sources: &[Point] = if grid.is_open(src) && max_dist >= 0 {
            &[src]
        } else {
            &[]
        };
        let reached = self.pr.bfs_map(&pather, sources, max_dist).len();
        debug!("{n}x{n} grid: {reached} cells reachable from the source");

        let mut rows = vec![vec![None; n]; n];
        for p in grid.range() {
            let d = self.pr.bfs_at(p);
            if d != UNREACHABLE {
                rows[p.y as usize][p.x as usize] = Some(d as usize + 1);
            }
        }
        rows
    }
}

/// Length of the shortest 8-directional clear path from `(0, 0)` to
/// `(n-1, n-1)`, counting both endpoints.
///
/// Returns `None` when either corner is blocked or no path connects them.
///
/// ```
/// use tessel_core::BinaryGrid;
/// use tessel_paths::shortest_clear_path;
///
/// let grid = BinaryGrid::from_rows(&[vec![0, 0, 0], vec![1, 1, 0], vec![1, 1, 0]]).unwrap();
/// assert_eq!(shortest_clear_path(&grid), Some(4));
/// ```
pub fn shortest_clear_path(grid: &BinaryGrid) -> Option<usize> {
    ClearPathSolver::default().solve(grid)
}

/// Cells of one shortest 8-directional clear path, both endpoints included.
pub fn shortest_clear_route(grid: &BinaryGrid) -> Option<Vec<Point>> {
    ClearPathSolver::default().route(grid)
}

/// Validate raw 0/1 rows and return the shortest clear path length, or
/// [`NO_PATH`] when none exists.
///
/// Malformed input (empty, not square, values other than 0 and 1) is an
/// error, not a missing path.
pub fn shortest_clear_path_len(rows: &[Vec<i64>]) -> Result<i32, GridError> {
    let grid = BinaryGrid::from_rows(rows)?;
    Ok(shortest_clear_path(&grid).map_or(NO_PATH, |len| len as i32))
}
