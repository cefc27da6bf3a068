//! Monotone lattice-path counting and path probabilities over a bounded grid.
//!
//! Coordinates run from `(0, 0)` to a corner fixed by the configured digit
//! width (`99,99` by default). Two queries are answered:
//!
//! - **info**: for one point, the unit-step edges touching it and how many
//!   origin-to-corner paths use each;
//! - **chance**: for two points where the first precedes the second, the
//!   probability that a uniformly chosen origin-to-corner path visits both.
//!
//! All counts are exact big integers taken from a Pascal's-triangle table built
//! once per process; probabilities stay exact ratios until they are reported.

pub mod app;
pub mod grid;
pub mod paths;
pub mod service;

pub use grid::{Coordinate, CoordinateValidator, GridBounds, GridConfig, GridError, OrderedPair};
pub use paths::{Edge, EdgeEnumerator, PathCountTable, Probability, ProbabilityEngine};
pub use service::{ChanceResponse, EdgeInfo, GridService, InfoResponse};
