use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};
use std::fmt;

use super::edges::Edge;
use super::table::PathCountTable;
use crate::grid::{Coordinate, GridError, OrderedPair};

/// An exact probability, kept as a reduced ratio of big integers until it is
/// handed to a caller.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Probability(BigRational);

impl Probability {
    /// `denominator` must be non-zero; every path-count denominator is at least one.
    fn from_counts(numerator: BigUint, denominator: &BigUint) -> Self {
        Probability(BigRational::new(
            BigInt::from(numerator),
            BigInt::from(denominator.clone()),
        ))
    }

    pub fn ratio(&self) -> &BigRational {
        &self.0
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Nearest `f64`. Only done at the response boundary.
    ///
    /// # Errors
    /// Returns `GridError::Unrepresentable` if the ratio has no finite float value.
    pub fn to_f64(&self) -> Result<f64, GridError> {
        self.0
            .to_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| GridError::Unrepresentable(self.0.to_string()))
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Probabilities under a uniform choice among all monotone paths from the
/// origin to the far corner of the grid.
pub struct ProbabilityEngine<'t> {
    table: &'t PathCountTable,
}

impl<'t> ProbabilityEngine<'t> {
    pub fn new(table: &'t PathCountTable) -> Self {
        Self { table }
    }

    /// Probability that a random origin-to-corner path visits both points of
    /// `pair`:
    ///
    /// `paths(O, p1) * paths(p1, p2) * paths(p2, C) / paths(O, C)`
    ///
    /// With `p1 == p2` this is the chance of visiting that single point.
    ///
    /// # Errors
    /// `GridError::UnreachablePair` if either point lies outside the grid.
    pub fn chance(&self, pair: &OrderedPair) -> Result<Probability, GridError> {
        let bounds = self.table.bounds();
        let (p1, p2) = (pair.first(), pair.second());

        let numerator = self.table.count_paths(bounds.origin(), p1)?
            * self.table.count_paths(p1, p2)?
            * self.table.count_paths(p2, bounds.corner())?;

        Ok(Probability::from_counts(numerator, self.table.total()))
    }

    /// Probability that a random path from the origin to `pair.second()` visits
    /// `pair.first()`, treating the second point as the end of the grid:
    ///
    /// `paths(O, p1) * paths(p1, p2) / paths(O, p2)`
    ///
    /// # Errors
    /// `GridError::UnreachablePair` if either point lies outside the grid.
    pub fn chance_within(&self, pair: &OrderedPair) -> Result<Probability, GridError> {
        let origin = self.table.bounds().origin();
        let (p1, p2) = (pair.first(), pair.second());

        let numerator = self.table.count_paths(origin, p1)? * self.table.count_paths(p1, p2)?;
        let denominator = self.table.count_paths(origin, p2)?;

        Ok(Probability::from_counts(numerator, denominator))
    }

    /// Probability that a random origin-to-corner path visits `point`.
    pub fn point_chance(&self, point: Coordinate) -> Result<Probability, GridError> {
        let pair = OrderedPair::new(point, point).ok_or(GridError::UnreachablePair {
            from: point,
            to: point,
        })?;
        self.chance(&pair)
    }

    /// Probability that a random origin-to-corner path uses `edge`.
    pub fn edge_chance(&self, edge: &Edge) -> Probability {
        Probability::from_counts(edge.path_count.clone(), self.table.total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridBounds;
    use crate::paths::EdgeEnumerator;
    use num_traits::One;

    fn pair(a: (u32, u32), b: (u32, u32)) -> OrderedPair {
        OrderedPair::new(Coordinate::new(a.0, a.1), Coordinate::new(b.0, b.1)).unwrap()
    }

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn origin_to_corner_is_certain() {
        let table = PathCountTable::build(GridBounds::new(99, 99));
        let engine = ProbabilityEngine::new(&table);
        let p = engine.chance(&pair((0, 0), (99, 99))).unwrap();
        assert!(p.ratio().is_one());
        assert_eq!(p.to_f64().unwrap(), 1.0);
    }

    #[test]
    fn small_grid_values_are_exact() {
        // 2x2 grid: 6 paths in total.
        let table = PathCountTable::build(GridBounds::new(2, 2));
        let engine = ProbabilityEngine::new(&table);

        assert_eq!(*engine.chance(&pair((1, 1), (1, 1))).unwrap().ratio(), ratio(2, 3));
        assert_eq!(*engine.chance(&pair((1, 0), (1, 1))).unwrap().ratio(), ratio(1, 3));
        assert_eq!(*engine.chance(&pair((2, 0), (2, 2))).unwrap().ratio(), ratio(1, 6));
        assert_eq!(*engine.chance(&pair((0, 0), (1, 1))).unwrap().ratio(), ratio(2, 3));
        assert_eq!(*engine.chance(&pair((1, 1), (2, 2))).unwrap().ratio(), ratio(2, 3));
    }

    #[test]
    fn single_point_chance_matches_formula() {
        let table = PathCountTable::build(GridBounds::new(30, 30));
        let engine = ProbabilityEngine::new(&table);
        let bounds = table.bounds();

        for (x, y) in [(0, 0), (30, 30), (4, 9), (15, 15), (30, 0), (0, 30)] {
            let p = Coordinate::new(x, y);
            let expected = Probability::from_counts(
                table.count_paths(bounds.origin(), p).unwrap()
                    * table.count_paths(p, bounds.corner()).unwrap(),
                table.total(),
            );
            let got = engine.chance(&pair((x, y), (x, y))).unwrap();
            assert_eq!(got, expected);
            assert_eq!(engine.point_chance(p).unwrap(), expected);

            let f = got.to_f64().unwrap();
            assert!((0.0..=1.0).contains(&f), "chance {} out of range", f);
        }
    }

    #[test]
    fn opposite_corners_are_rarely_visited() {
        let table = PathCountTable::build(GridBounds::new(99, 99));
        let engine = ProbabilityEngine::new(&table);
        let p = engine.point_chance(Coordinate::new(99, 0)).unwrap();
        // Exactly one path reaches (99, 0) and one leaves it.
        assert_eq!(p.numer(), &BigInt::one());
        assert_eq!(p.denom(), &BigInt::from(table.total().clone()));
        let f = p.to_f64().unwrap();
        assert!(f > 0.0 && f < 1e-50);
    }

    #[test]
    fn visiting_two_points_is_no_likelier_than_one() {
        let table = PathCountTable::build(GridBounds::new(20, 20));
        let engine = ProbabilityEngine::new(&table);
        let both = engine.chance(&pair((3, 4), (10, 12))).unwrap();
        let first = engine.point_chance(Coordinate::new(3, 4)).unwrap();
        let second = engine.point_chance(Coordinate::new(10, 12)).unwrap();
        assert!(both <= first);
        assert!(both <= second);
        assert!(!both.is_zero());
    }

    #[test]
    fn chance_within_treats_second_point_as_end() {
        let table = PathCountTable::build(GridBounds::new(9, 9));
        let engine = ProbabilityEngine::new(&table);

        assert_eq!(*engine.chance_within(&pair((1, 1), (2, 2))).unwrap().ratio(), ratio(2, 3));
        assert!(engine.chance_within(&pair((0, 0), (5, 7))).unwrap().ratio().is_one());
        assert!(engine.chance_within(&pair((5, 7), (5, 7))).unwrap().ratio().is_one());
        // Over the whole grid it agrees with the corner-based chance.
        assert_eq!(
            engine.chance_within(&pair((4, 2), (9, 9))).unwrap(),
            engine.point_chance(Coordinate::new(4, 2)).unwrap()
        );
    }

    #[test]
    fn edge_chances_at_origin_sum_to_one() {
        let table = PathCountTable::build(GridBounds::new(7, 4));
        let engine = ProbabilityEngine::new(&table);
        let edges = EdgeEnumerator::new(&table).edges_at(Coordinate::ORIGIN).unwrap();
        let sum = edges
            .iter()
            .map(|e| engine.edge_chance(e).ratio().clone())
            .fold(BigRational::zero(), |acc, r| acc + r);
        assert!(sum.is_one());
        // Rectangular grid: stepping along the long axis first is likelier.
        assert_eq!(*engine.edge_chance(&edges[0]).ratio(), ratio(7, 11));
    }

    #[test]
    fn points_outside_grid_are_rejected() {
        let table = PathCountTable::build(GridBounds::new(3, 3));
        let engine = ProbabilityEngine::new(&table);
        assert!(matches!(
            engine.chance(&pair((1, 1), (4, 4))),
            Err(GridError::UnreachablePair { .. })
        ));
    }
}
