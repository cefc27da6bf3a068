use num_bigint::BigUint;
use serde::Serialize;

use super::table::PathCountTable;
use crate::grid::{Coordinate, GridError};

/// Axis along which an edge steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// A unit step between adjacent lattice points, `from` preceding `to`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: Coordinate,
    pub to: Coordinate,
    pub axis: Axis,
    /// Origin-to-corner paths that traverse this edge.
    pub path_count: BigUint,
}

/// Lists the grid edges touching a point.
pub struct EdgeEnumerator<'t> {
    table: &'t PathCountTable,
}

impl<'t> EdgeEnumerator<'t> {
    pub fn new(table: &'t PathCountTable) -> Self {
        Self { table }
    }

    /// Returns the unit-step edges incident to `point` that stay inside the grid.
    ///
    /// Order: outgoing along x, outgoing along y, incoming along x, incoming
    /// along y. Points on the border yield fewer edges; a one-point grid yields
    /// none.
    ///
    /// # Errors
    /// Returns `GridError::UnreachablePair` if `point` lies outside the grid.
    pub fn edges_at(&self, point: Coordinate) -> Result<Vec<Edge>, GridError> {
        let bounds = self.table.bounds();
        if !bounds.contains(&point) {
            return Err(GridError::UnreachablePair {
                from: bounds.origin(),
                to: point,
            });
        }

        let mut steps: Vec<(Coordinate, Coordinate, Axis)> = Vec::with_capacity(4);
        if point.x < bounds.x_max {
            steps.push((point, Coordinate::new(point.x + 1, point.y), Axis::X));
        }
        if point.y < bounds.y_max {
            steps.push((point, Coordinate::new(point.x, point.y + 1), Axis::Y));
        }
        if point.x > 0 {
            steps.push((Coordinate::new(point.x - 1, point.y), point, Axis::X));
        }
        if point.y > 0 {
            steps.push((Coordinate::new(point.x, point.y - 1), point, Axis::Y));
        }

        steps
            .into_iter()
            .map(|(from, to, axis)| {
                Ok(Edge {
                    from,
                    to,
                    axis,
                    path_count: self.paths_using(from, to)?,
                })
            })
            .collect()
    }

    /// Paths from the origin to `from`, times paths from `to` to the corner.
    fn paths_using(&self, from: Coordinate, to: Coordinate) -> Result<BigUint, GridError> {
        let bounds = self.table.bounds();
        let before = self.table.count_paths(bounds.origin(), from)?;
        let after = self.table.count_paths(to, bounds.corner())?;
        Ok(before * after)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridBounds;

    fn c(x: u32, y: u32) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn origin_has_only_outgoing_edges() {
        let table = PathCountTable::build(GridBounds::new(99, 99));
        let edges = EdgeEnumerator::new(&table).edges_at(c(0, 0)).unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!((edges[0].from, edges[0].to, edges[0].axis), (c(0, 0), c(1, 0), Axis::X));
        assert_eq!((edges[1].from, edges[1].to, edges[1].axis), (c(0, 0), c(0, 1), Axis::Y));
        // Every path leaves the origin through exactly one of the two edges.
        assert_eq!(&edges[0].path_count + &edges[1].path_count, *table.total());
    }

    #[test]
    fn corner_has_only_incoming_edges() {
        let table = PathCountTable::build(GridBounds::new(99, 99));
        let edges = EdgeEnumerator::new(&table).edges_at(c(99, 99)).unwrap();
        assert_eq!(edges.len(), 2);
        assert_eq!((edges[0].from, edges[0].to), (c(98, 99), c(99, 99)));
        assert_eq!((edges[1].from, edges[1].to), (c(99, 98), c(99, 99)));
        assert_eq!(&edges[0].path_count + &edges[1].path_count, *table.total());
    }

    #[test]
    fn interior_point_has_four_edges_in_order() {
        let table = PathCountTable::build(GridBounds::new(3, 3));
        let edges = EdgeEnumerator::new(&table).edges_at(c(1, 2)).unwrap();
        let ends: Vec<_> = edges.iter().map(|e| (e.from, e.to)).collect();
        assert_eq!(
            ends,
            vec![
                (c(1, 2), c(2, 2)),
                (c(1, 2), c(1, 3)),
                (c(0, 2), c(1, 2)),
                (c(1, 1), c(1, 2)),
            ]
        );
        // (0,0)->(1,2): 3 paths, (2,2)->(3,3): 2 paths.
        assert_eq!(edges[0].path_count, BigUint::from(6u32));
        // (0,0)->(1,2): 3 paths, (1,3)->(3,3): 1 path.
        assert_eq!(edges[1].path_count, BigUint::from(3u32));
        // Flow through the point is conserved.
        assert_eq!(
            &edges[0].path_count + &edges[1].path_count,
            &edges[2].path_count + &edges[3].path_count
        );
    }

    #[test]
    fn border_points_yield_fewer_edges() {
        let table = PathCountTable::build(GridBounds::new(5, 5));
        let enumerator = EdgeEnumerator::new(&table);
        assert_eq!(enumerator.edges_at(c(3, 0)).unwrap().len(), 3);
        assert_eq!(enumerator.edges_at(c(0, 3)).unwrap().len(), 3);
        assert_eq!(enumerator.edges_at(c(5, 0)).unwrap().len(), 2);
        assert_eq!(enumerator.edges_at(c(5, 2)).unwrap().len(), 3);
    }

    #[test]
    fn single_point_grid_has_no_edges() {
        let table = PathCountTable::build(GridBounds::new(0, 0));
        assert!(EdgeEnumerator::new(&table).edges_at(c(0, 0)).unwrap().is_empty());
    }

    #[test]
    fn point_outside_grid_is_rejected() {
        let table = PathCountTable::build(GridBounds::new(2, 2));
        assert!(matches!(
            EdgeEnumerator::new(&table).edges_at(c(3, 1)),
            Err(GridError::UnreachablePair { .. })
        ));
    }
}
