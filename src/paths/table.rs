use num_bigint::BigUint;
use num_traits::One;

use crate::grid::{Coordinate, GridBounds, GridError};

/// Lattice-path counts for every step delta up to the grid extent.
///
/// Cell `(dx, dy)` holds `C(dx + dy, dx)`, the number of monotone paths that
/// advance `dx` steps right and `dy` steps up. Because the count depends only on
/// the delta, any pair of points inside the grid is answered by one lookup.
#[derive(Clone, Debug)]
pub struct PathCountTable {
    bounds: GridBounds,
    cells: Vec<BigUint>,
}

impl PathCountTable {
    /// Builds the table bottom-up with Pascal's rule
    /// `paths(dx, dy) = paths(dx - 1, dy) + paths(dx, dy - 1)`, `paths(0, 0) = 1`.
    pub fn build(bounds: GridBounds) -> Self {
        let stride = bounds.y_max as usize + 1;
        let mut cells: Vec<BigUint> = Vec::with_capacity(bounds.cell_count());

        for dx in 0..=bounds.x_max as usize {
            for dy in 0..stride {
                let value = if dx == 0 || dy == 0 {
                    BigUint::one()
                } else {
                    // Row `dx - 1` and the previous cell of this row are both filled.
                    &cells[(dx - 1) * stride + dy] + &cells[dx * stride + dy - 1]
                };
                cells.push(value);
            }
        }

        Self { bounds, cells }
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    /// Number of stored counts.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Count for a raw step delta, or `None` if the delta exceeds the grid.
    pub fn get(&self, dx: u32, dy: u32) -> Option<&BigUint> {
        if dx > self.bounds.x_max || dy > self.bounds.y_max {
            return None;
        }
        let stride = self.bounds.y_max as usize + 1;
        self.cells.get(dx as usize * stride + dy as usize)
    }

    /// Number of monotone paths from `from` to `to`.
    ///
    /// # Errors
    /// Returns `GridError::UnreachablePair` if `from` does not precede `to`, or if
    /// the delta between them is larger than the table.
    pub fn count_paths(&self, from: Coordinate, to: Coordinate) -> Result<&BigUint, GridError> {
        from.delta_to(&to)
            .and_then(|(dx, dy)| self.get(dx, dy))
            .ok_or(GridError::UnreachablePair { from, to })
    }

    /// Number of monotone paths from the origin to the far corner.
    pub fn total(&self) -> &BigUint {
        // The corner delta is always inside the table; index directly.
        &self.cells[self.cells.len() - 1]
    }
}
