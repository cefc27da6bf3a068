use serde::Serialize;
use std::fmt;

/// A lattice point. The first component moves right, the second moves up,
/// so every grid starts at `(0, 0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coordinate {
    pub x: u32,
    pub y: u32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, y: 0 };

    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// `true` if `other` is reachable from `self` by monotone steps,
    /// i.e. `self.x <= other.x && self.y <= other.y`.
    pub fn precedes(&self, other: &Coordinate) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// Step delta from `self` to `other`, or `None` if `other` is not reachable.
    pub fn delta_to(&self, other: &Coordinate) -> Option<(u32, u32)> {
        if self.precedes(other) {
            Some((other.x - self.x, other.y - self.y))
        } else {
            None
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Two coordinates where `first` precedes `second`.
///
/// Only [`CoordinateValidator::parse_ordered`](super::CoordinateValidator::parse_ordered)
/// and [`OrderedPair::new`] construct one, so downstream code may rely on the
/// ordering without checking it again.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderedPair {
    first: Coordinate,
    second: Coordinate,
}

impl OrderedPair {
    /// Returns `None` when `first` does not precede `second`.
    pub fn new(first: Coordinate, second: Coordinate) -> Option<Self> {
        first.precedes(&second).then_some(Self { first, second })
    }

    pub fn first(&self) -> Coordinate {
        self.first
    }

    pub fn second(&self) -> Coordinate {
        self.second
    }
}
