//! Breadth-first pathfinding on square obstacle grids.
//!
//! The headline operation is [`shortest_clear_path`]: the fewest cells on a
//! path of king moves from the top-left to the bottom-right corner of a
//! [`BinaryGrid`](tessel_core::BinaryGrid), or `None` when the corners are
//! not connected. [`shortest_clear_path_len`] is the same query over raw 0/1
//! rows, reporting a missing path as [`NO_PATH`].
//!
//! The search itself lives on [`PathRange`], which owns and reuses its
//! buffers so that repeated queries incur no allocations after warm-up:
//!
//! - [`PathRange::bfs_path`] single-pair search with early exit
//! - [`PathRange::bfs_map`] multi-source distance maps
//!
//! Any [`Pather`] can drive it; [`ClearPather`] is the one for grids.

mod bfs;
mod clear;
mod distance;
mod neighbors;
mod pathrange;
mod traits;

pub use clear::{
    ClearPathSolver, ClearPather, NO_PATH, SolverConfig, shortest_clear_path,
    shortest_clear_path_len, shortest_clear_route,
};
pub use distance::{chebyshev, manhattan};
pub use neighbors::Moves;
pub use pathrange::{PathNode, PathRange, UNREACHABLE};
pub use traits::Pather;
