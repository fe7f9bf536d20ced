use std::collections::VecDeque;

use tessel_core::{Point, Range};

/// A position with an associated step count, returned from BFS map queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
}

/// Sentinel value meaning "not visited" in BFS distance maps.
pub const UNREACHABLE: i32 = i32::MAX;

/// Parent marker for sources and unvisited cells.
pub(crate) const NO_PARENT: usize = usize::MAX;

// ---------------------------------------------------------------------------
// PathRange
// ---------------------------------------------------------------------------

/// Breadth-first search engine for a grid rectangle.
///
/// `PathRange` owns the visited map, parent links, frontier queue and
/// neighbour scratch buffer, so repeated queries incur no allocations after
/// the first use. Every search starts by clearing the visited map; nothing
/// from a previous query leaks into the next one.
pub struct PathRange {
    pub(crate) rng: Range,
    pub(crate) width: usize,
    // BFS caches
    pub(crate) bfs_map: Vec<i32>,
    pub(crate) bfs_parent: Vec<usize>,
    pub(crate) bfs_queue: VecDeque<usize>,
    pub(crate) bfs_results: Vec<PathNode>,
    // cells dequeued by the last search
    pub(crate) expanded: usize,
    // shared scratch buffer for neighbor queries
    pub(crate) nbuf: Vec<Point>,
}

impl PathRange {
    /// Create a new `PathRange` for the given grid rectangle.
    pub fn new(rng: Range) -> Self {
        let w = rng.width().max(0) as usize;
        let len = rng.len();
        Self {
            rng,
            width: w,
            bfs_map: vec![UNREACHABLE; len],
            bfs_parent: vec![NO_PARENT; len],
            bfs_queue: VecDeque::new(),
            bfs_results: Vec::new(),
            expanded: 0,
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Replace the underlying range.
    ///
    /// Buffers are kept when the new range fits in their current capacity
    /// and grown otherwise.
    pub fn set_range(&mut self, rng: Range) {
        let new_len = rng.len();
        self.rng = rng;
        self.width = rng.width().max(0) as usize;
        self.bfs_results.clear();
        self.bfs_queue.clear();
        self.expanded = 0;

        if new_len > self.bfs_map.len() {
            self.bfs_map.resize(new_len, UNREACHABLE);
            self.bfs_parent.resize(new_len, NO_PARENT);
        }
    }

    /// The grid rectangle being used.
    #[inline]
    pub fn range(&self) -> Range {
        self.rng
    }

    /// Number of cells taken off the frontier by the last search.
    #[inline]
    pub fn last_expanded(&self) -> usize {
        self.expanded
    }

    /// Mark every cell unvisited and drop the previous frontier.
    pub(crate) fn reset_bfs(&mut self) {
        let len = self.rng.len();
        self.bfs_map[..len].fill(UNREACHABLE);
        self.bfs_parent[..len].fill(NO_PARENT);
        self.bfs_queue.clear();
        self.bfs_results.clear();
        self.expanded = 0;
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        if !self.rng.contains(p) {
            return None;
        }
        let x = (p.x - self.rng.min.x) as usize;
        let y = (p.y - self.rng.min.y) as usize;
        Some(y * self.width + x)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        let x = (idx % self.width) as i32 + self.rng.min.x;
        let y = (idx / self.width) as i32 + self.rng.min.y;
        Point::new(x, y)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PathRange {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serde::Serialize::serialize(&self.rng, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PathRange {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let range: Range = serde::Deserialize::deserialize(deserializer)?;
        Ok(PathRange::new(range))
    }
}
