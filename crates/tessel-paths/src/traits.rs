use tessel_core::Point;

/// Minimal pathfinding interface: neighbour enumeration.
///
/// Every edge has unit cost, which is what breadth-first search relies on.
pub trait Pather {
    /// Append the cells reachable in one step from `p` into `buf`.
    /// The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}
