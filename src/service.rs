//! The two queries exposed to callers: point information and path chance.
//!
//! `GridService` owns the immutable path-count table and validator built from a
//! [`GridConfig`]. Every method takes `&self` and touches no shared mutable
//! state, so one service can answer requests from many threads at once.
//! Responses are plain serializable values; path counts are decimal strings
//! because they overflow every fixed-width number type.

use serde::Serialize;

use crate::grid::{Coordinate, CoordinateValidator, GridBounds, GridConfig, GridError, OrderedPair};
use crate::paths::{Axis, EdgeEnumerator, PathCountTable, Probability, ProbabilityEngine};

/// One edge of an info response.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EdgeInfo {
    pub from: Coordinate,
    pub to: Coordinate,
    pub axis: Axis,
    pub path_count: String,
    pub probability: f64,
}

/// Result of [`GridService::get_info`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InfoResponse {
    pub coord: Coordinate,
    /// Paths from the origin to the point.
    pub paths_to: String,
    /// Origin-to-corner paths through the point.
    pub paths_through: String,
    pub edges: Vec<EdgeInfo>,
}

/// Result of [`GridService::get_chance`] and [`GridService::get_chance_within`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChanceResponse {
    pub first: Coordinate,
    pub second: Coordinate,
    pub probability: f64,
    /// Reduced exact ratio.
    pub numerator: String,
    pub denominator: String,
}

/// Answers grid queries against a table built once at construction.
#[derive(Debug)]
pub struct GridService {
    validator: CoordinateValidator,
    table: PathCountTable,
}

impl GridService {
    /// Builds the path-count table for the configured grid.
    pub fn new(config: &GridConfig) -> Self {
        Self {
            validator: CoordinateValidator::from_config(config),
            table: PathCountTable::build(config.bounds()),
        }
    }

    /// Service over explicit bounds, for grids smaller than a digit width implies.
    pub fn with_bounds(digits: u32, bounds: GridBounds) -> Self {
        Self {
            validator: CoordinateValidator::new(digits, bounds),
            table: PathCountTable::build(bounds),
        }
    }

    pub fn bounds(&self) -> GridBounds {
        self.table.bounds()
    }

    pub fn table(&self) -> &PathCountTable {
        &self.table
    }

    /// Edges touching the point named by `coord_text`, with path counts.
    ///
    /// # Errors
    /// `GridError::InvalidCoordinate` if the text does not parse. Nothing is
    /// computed for invalid input.
    pub fn get_info(&self, coord_text: &str) -> Result<InfoResponse, GridError> {
        let coord = self.validator.parse(coord_text)?;
        let bounds = self.table.bounds();
        let engine = ProbabilityEngine::new(&self.table);

        let paths_to = self.table.count_paths(bounds.origin(), coord)?;
        let paths_through = paths_to * self.table.count_paths(coord, bounds.corner())?;

        let edges = EdgeEnumerator::new(&self.table)
            .edges_at(coord)?
            .into_iter()
            .map(|edge| {
                let probability = engine.edge_chance(&edge).to_f64()?;
                Ok(EdgeInfo {
                    from: edge.from,
                    to: edge.to,
                    axis: edge.axis,
                    path_count: edge.path_count.to_string(),
                    probability,
                })
            })
            .collect::<Result<Vec<_>, GridError>>()?;

        Ok(InfoResponse {
            coord,
            paths_to: paths_to.to_string(),
            paths_through: paths_through.to_string(),
            edges,
        })
    }

    /// Chance that a random origin-to-corner path passes through both points.
    ///
    /// # Errors
    /// `GridError::InvalidCoordinate` if either text does not parse,
    /// `GridError::InvalidOrdering` if the first point does not precede the second.
    pub fn get_chance(&self, first: &str, second: &str) -> Result<ChanceResponse, GridError> {
        let pair = self.validator.parse_ordered(first, second)?;
        let probability = ProbabilityEngine::new(&self.table).chance(&pair)?;
        Self::chance_response(&pair, &probability)
    }

    /// Chance that a random path from the origin to the second point passes
    /// through the first. Validation is the same as [`get_chance`](Self::get_chance).
    pub fn get_chance_within(
        &self,
        first: &str,
        second: &str,
    ) -> Result<ChanceResponse, GridError> {
        let pair = self.validator.parse_ordered(first, second)?;
        let probability = ProbabilityEngine::new(&self.table).chance_within(&pair)?;
        Self::chance_response(&pair, &probability)
    }

    fn chance_response(
        pair: &OrderedPair,
        probability: &Probability,
    ) -> Result<ChanceResponse, GridError> {
        Ok(ChanceResponse {
            first: pair.first(),
            second: pair.second(),
            probability: probability.to_f64()?,
            numerator: probability.numer().to_string(),
            denominator: probability.denom().to_string(),
        })
    }
}
