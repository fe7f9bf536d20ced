//! Property-based tests for the clear-path solver.
//!
//! Random grids up to 9×9 are checked against the invariants of a
//! breadth-first shortest path and against an independent relaxation-based
//! reference.

use proptest::prelude::*;
use tessel_core::{BinaryGrid, Cell, Point};
use tessel_paths::{
    ClearPathSolver, Moves, NO_PATH, SolverConfig, chebyshev, shortest_clear_path,
    shortest_clear_path_len, shortest_clear_route,
};

/// Random N×N grid with roughly `density` of the cells blocked.
fn grid_strategy(max_n: usize, density: f64) -> impl Strategy<Value = BinaryGrid> {
    (1..=max_n).prop_flat_map(move |n| {
        prop::collection::vec(prop::bool::weighted(density), n * n).prop_map(move |cells| {
            BinaryGrid::from_fn(n, |p| Cell::from(cells[p.y as usize * n + p.x as usize]))
                .expect("n >= 1")
        })
    })
}

/// Shortest path by repeated relaxation until nothing changes.
fn reference_len(grid: &BinaryGrid) -> Option<usize> {
    if !grid.is_open(grid.source()) || !grid.is_open(grid.destination()) {
        return None;
    }
    let n = grid.size();
    let mut dist = vec![usize::MAX; n * n];
    dist[0] = 1;
    let mut changed = true;
    while changed {
        changed = false;
        for p in grid.range() {
            let i = p.y as usize * n + p.x as usize;
            if dist[i] == usize::MAX {
                continue;
            }
            for q in p.neighbors_8() {
                if !grid.is_open(q) {
                    continue;
                }
                let j = q.y as usize * n + q.x as usize;
                if dist[i] + 1 < dist[j] {
                    dist[j] = dist[i] + 1;
                    changed = true;
                }
            }
        }
    }
    let d = dist[n * n - 1];
    (d != usize::MAX).then_some(d)
}

proptest! {
    /// The breadth-first answer agrees with the relaxation reference.
    #[test]
    fn prop_matches_reference(grid in grid_strategy(9, 0.35)) {
        prop_assert_eq!(shortest_clear_path(&grid), reference_len(&grid), "grid:\n{}", grid);
    }

    /// Solving the same grid twice gives the same answer.
    #[test]
    fn prop_idempotent(grid in grid_strategy(9, 0.3)) {
        let mut solver = ClearPathSolver::default();
        let first = solver.solve(&grid);
        let second = solver.solve(&grid);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, shortest_clear_path(&grid));
    }

    /// Adding an obstacle never makes the path shorter.
    #[test]
    fn prop_monotone_under_obstacles(
        grid in grid_strategy(9, 0.25),
        x in 0usize..9,
        y in 0usize..9,
    ) {
        let n = grid.size();
        let extra = Point::new((x % n) as i32, (y % n) as i32);
        let before = shortest_clear_path(&grid);
        let after = shortest_clear_path(&grid.with_blocked(extra));
        match (before, after) {
            (None, after) => {
                prop_assert_eq!(after, None);
            }
            (Some(_), None) => {}
            (Some(b), Some(a)) => {
                prop_assert!(a >= b, "{} < {}", a, b);
            }
        }
    }

    /// A grid with no obstacles has a path of exactly N cells.
    #[test]
    fn prop_open_grid_is_n(n in 1usize..40) {
        let grid = BinaryGrid::open(n).expect("n >= 1");
        prop_assert_eq!(shortest_clear_path(&grid), Some(n));
        let d = chebyshev(grid.source(), grid.destination()) as usize;
        prop_assert_eq!(d + 1, n);
    }

    /// Blocking either corner always means no path.
    #[test]
    fn prop_blocked_corner(grid in grid_strategy(9, 0.3), which in any::<bool>()) {
        let corner = if which { grid.source() } else { grid.destination() };
        let blocked = grid.with_blocked(corner);
        prop_assert_eq!(shortest_clear_path(&blocked), None);
        let rows: Vec<Vec<i64>> = blocked
            .to_rows()
            .into_iter()
            .map(|r| r.into_iter().map(i64::from).collect())
            .collect();
        prop_assert_eq!(shortest_clear_path_len(&rows), Ok(NO_PATH));
    }

    /// The returned route is a legal walk whose length is the answer.
    #[test]
    fn prop_route_is_valid(grid in grid_strategy(9, 0.3)) {
        let route = shortest_clear_route(&grid);
        prop_assert_eq!(route.as_ref().map(Vec::len), shortest_clear_path(&grid));
        if let Some(route) = route {
            prop_assert_eq!(route.first().copied(), Some(grid.source()));
            prop_assert_eq!(route.last().copied(), Some(grid.destination()));
            for p in &route {
                prop_assert!(grid.is_open(*p));
            }
            for pair in route.windows(2) {
                prop_assert!(pair[0].is_king_adjacent(pair[1]));
            }
        }
    }

    /// Cardinal-only moves are never better than king moves, and each cell
    /// is expanded at most once.
    #[test]
    fn prop_four_way_not_shorter(grid in grid_strategy(9, 0.25)) {
        let mut four = ClearPathSolver::new(SolverConfig::default().with_moves(Moves::Four));
        let mut eight = ClearPathSolver::default();
        let n = grid.size();
        match (four.solve(&grid), eight.solve(&grid)) {
            (Some(f), Some(e)) => {
                prop_assert!(f >= e);
            }
            (Some(_), None) => {
                prop_assert!(false, "four-way path without eight-way path");
            }
            _ => {}
        }
        prop_assert!(four.last_expanded() <= n * n);
        prop_assert!(eight.last_expanded() <= n * n);
    }
}
