use super::error::GridError;
use super::Coordinate;

/// Largest digit width accepted by [`GridConfig`].
pub const MAX_GRID_DIGITS: u32 = 3;

/// Default digit width: coordinates `0..=99`.
pub const DEFAULT_GRID_DIGITS: u32 = 2;

/// Process-wide grid configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    digits: u32,
}

impl GridConfig {
    /// Creates a configuration with the given maximum digit width.
    ///
    /// # Errors
    /// Returns `GridError::InvalidConfig` unless `1 <= digits <= MAX_GRID_DIGITS`.
    pub fn new(digits: u32) -> Result<Self, GridError> {
        if digits == 0 || digits > MAX_GRID_DIGITS {
            return Err(GridError::InvalidConfig(format!(
                "digit width must be between 1 and {}, got {}",
                MAX_GRID_DIGITS, digits
            )));
        }
        Ok(Self { digits })
    }

    pub fn digits(&self) -> u32 {
        self.digits
    }

    /// Bounds implied by the digit width: `10^digits - 1` on both axes.
    pub fn bounds(&self) -> GridBounds {
        let max = 10u32.pow(self.digits) - 1;
        GridBounds::new(max, max)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            digits: DEFAULT_GRID_DIGITS,
        }
    }
}

/// Inclusive extent of the grid. The origin is always `(0, 0)`; the corner is
/// `(x_max, y_max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBounds {
    pub x_max: u32,
    pub y_max: u32,
}

impl GridBounds {
    pub const fn new(x_max: u32, y_max: u32) -> Self {
        Self { x_max, y_max }
    }

    pub fn origin(&self) -> Coordinate {
        Coordinate::ORIGIN
    }

    pub fn corner(&self) -> Coordinate {
        Coordinate::new(self.x_max, self.y_max)
    }

    pub fn contains(&self, coord: &Coordinate) -> bool {
        coord.x <= self.x_max && coord.y <= self.y_max
    }

    /// Number of lattice points, which is also the number of table cells.
    pub fn cell_count(&self) -> usize {
        (self.x_max as usize + 1) * (self.y_max as usize + 1)
    }
}
