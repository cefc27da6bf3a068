// bounds module
mod bounds;
// coordinate module
mod coordinate;
// error module
mod error;
// validator module
mod validator;

//─────────────────────────────────────────────────────────────────────────────
// Public re-exports.
//─────────────────────────────────────────────────────────────────────────────
pub use bounds::{GridBounds, GridConfig, DEFAULT_GRID_DIGITS, MAX_GRID_DIGITS};
pub use coordinate::{Coordinate, OrderedPair};
pub use error::GridError;
pub use validator::CoordinateValidator;
