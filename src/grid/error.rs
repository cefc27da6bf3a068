use super::Coordinate;
use thiserror::Error;

//─────────────────────────────────────────────────────────────────────────────

/// Error type for coordinate validation and path-count arithmetic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Text is not of the form `digits,digits`, a digit run is too long,
    /// or the value lies outside the grid bounds.
    #[error("Invalid coordinate string of \"{0}\"")]
    InvalidCoordinate(String),

    /// Both coordinates are well formed but the first does not precede the second.
    #[error("Invalid relative coordinates: {first} does not precede {second}")]
    InvalidOrdering { first: Coordinate, second: Coordinate },

    /// A path count was requested between points where `to` is not reachable
    /// from `from` by monotone steps. Upstream validation excludes this.
    #[error("No monotone path from {from} to {to}")]
    UnreachablePair { from: Coordinate, to: Coordinate },

    /// The grid configuration is unusable.
    #[error("Invalid grid configuration: {0}")]
    InvalidConfig(String),

    /// An exact ratio could not be represented as a finite float.
    #[error("Value not representable as a float: {0}")]
    Unrepresentable(String),
}

impl GridError {
    /// Returns `true` for errors caused by caller input rather than a logic fault.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            GridError::InvalidCoordinate(_)
                | GridError::InvalidOrdering { .. }
                | GridError::InvalidConfig(_)
        )
    }
}
