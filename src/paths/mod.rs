// edges module
mod edges;
// probability module
mod probability;
// table module
mod table;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use edges::{Axis, Edge, EdgeEnumerator};
pub use probability::{Probability, ProbabilityEngine};
pub use table::PathCountTable;
