use tessel_core::Point;

use crate::distance::{chebyshev, manhattan};

/// Which steps count as a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Moves {
    /// Cardinal steps only (up, right, down, left).
    Four,
    /// Cardinal and diagonal steps.
    #[default]
    Eight,
}

impl Moves {
    /// Step offsets for this move set.
    pub fn offsets(self) -> &'static [Point] {
        match self {
            Self::Four => &Point::CARDINAL_MOVES,
            Self::Eight => &Point::KING_MOVES,
        }
    }

    /// Append the neighbours of `p` for which `keep` returns `true`.
    pub fn push_neighbors(self, p: Point, buf: &mut Vec<Point>, keep: impl Fn(Point) -> bool) {
        for &d in self.offsets() {
            let n = p + d;
            if keep(n) {
                buf.push(n);
            }
        }
    }

    /// Fewest steps between `a` and `b` with no obstacles in the way.
    #[inline]
    pub fn min_steps(self, a: Point, b: Point) -> i32 {
        match self {
            Self::Four => manhattan(a, b),
            Self::Eight => chebyshev(a, b),
        }
    }
}
