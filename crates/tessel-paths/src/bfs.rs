use log::trace;
use tessel_core::Point;

use crate::PathRange;
use crate::pathrange::{NO_PARENT, PathNode, UNREACHABLE};
use crate::traits::Pather;

impl PathRange {
    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step has cost 1 and sources have cost 0. Expansion stops when the
    /// distance exceeds `max_dist`. Returns a slice of all reached nodes in
    /// discovery order.
    pub fn bfs_map<P: Pather>(
        &mut self,
        pather: &P,
        sources: &[Point],
        max_dist: i32,
    ) -> &[PathNode] {
        self.reset_bfs();

        for &src in sources {
            if let Some(si) = self.idx(src) {
                if self.bfs_map[si] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[si] = 0;
                self.bfs_queue.push_back(si);
                self.bfs_results.push(PathNode { pos: src, cost: 0 });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.bfs_queue.pop_front() {
            self.expanded += 1;
            let current_dist = self.bfs_map[ci];
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                let nd = current_dist + 1;
                if nd > max_dist {
                    continue;
                }
                self.bfs_map[ni] = nd;
                self.bfs_parent[ni] = ci;
                self.bfs_queue.push_back(ni);
                self.bfs_results.push(PathNode { pos: np, cost: nd });
            }
        }

        self.nbuf = nbuf;
        &self.bfs_results
    }

    /// Query the BFS distance at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or was not
    /// reached by the last search.
    pub fn bfs_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.bfs_map[i],
            None => UNREACHABLE,
        }
    }

    /// Shortest path from `from` to `to` by breadth-first search.
    ///
    /// The frontier is first-in-first-out and a cell is marked visited when
    /// it is enqueued, so each cell enters the frontier at most once. The
    /// search stops as soon as `to` is taken off the frontier. Paths of more
    /// than `max_dist` steps are not explored.
    ///
    /// Returns the full path (including both endpoints) or `None` if `to`
    /// cannot be reached. `from` itself is never checked against the pather;
    /// callers decide whether a blocked start is acceptable.
    pub fn bfs_path<P: Pather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        max_dist: i32,
    ) -> Option<Vec<Point>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        self.reset_bfs();
        self.bfs_map[start_idx] = 0;
        self.bfs_queue.push_back(start_idx);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(ci) = self.bfs_queue.pop_front() else {
                break 'search false;
            };
            self.expanded += 1;

            if ci == goal_idx {
                break 'search true;
            }

            let current_dist = self.bfs_map[ci];
            let nd = current_dist + 1;
            if nd > max_dist {
                continue;
            }
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[ni] = nd;
                self.bfs_parent[ni] = ci;
                self.bfs_queue.push_back(ni);
            }
        };

        self.nbuf = nbuf;
        trace!(
            "bfs {from} -> {to}: found={found}, expanded={}",
            self.expanded
        );

        if !found {
            return None;
        }

        // Reconstruct path.
        let mut path = Vec::with_capacity(self.bfs_map[goal_idx] as usize + 1);
        let mut ci = goal_idx;
        while ci != NO_PARENT {
            path.push(self.point(ci));
            ci = self.bfs_parent[ci];
        }
        path.reverse();
        Some(path)
    }
}
