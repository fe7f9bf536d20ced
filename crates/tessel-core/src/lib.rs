//! **tessel-core**: core types for square obstacle grids.
//!
//! This crate provides the foundational types used across the *tessel*
//! workspace: geometry primitives and a validated N×N grid of open and
//! blocked cells.

pub mod geom;
pub mod grid;

pub use geom::{Point, Range, RangeIter};
pub use grid::{BinaryGrid, Cell, GridError};
