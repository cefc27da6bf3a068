use once_cell::sync::Lazy;
use regex::Regex;

use super::bounds::{GridBounds, GridConfig};
use super::error::GridError;
use super::{Coordinate, OrderedPair};

// Digit-run length is checked separately so the pattern stays static.
static COORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+),([0-9]+)$").expect("valid coordinate regex"));

/// Parses coordinate text of the form `digits,digits` into grid coordinates.
#[derive(Clone, Copy, Debug)]
pub struct CoordinateValidator {
    digits: u32,
    bounds: GridBounds,
}

impl CoordinateValidator {
    /// Creates a validator accepting digit runs of `1..=digits` characters whose
    /// values fall inside `bounds`.
    pub fn new(digits: u32, bounds: GridBounds) -> Self {
        Self { digits, bounds }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.digits(), config.bounds())
    }

    /// Parses a single coordinate.
    ///
    /// # Errors
    /// Returns `GridError::InvalidCoordinate` for a missing or extra separator,
    /// non-digit characters, an empty or over-long digit run, or a value
    /// outside the grid bounds.
    pub fn parse(&self, text: &str) -> Result<Coordinate, GridError> {
        let invalid = || GridError::InvalidCoordinate(text.to_string());

        let caps = COORD_PATTERN.captures(text).ok_or_else(invalid)?;
        let x = self.parse_run(&caps[1]).ok_or_else(invalid)?;
        let y = self.parse_run(&caps[2]).ok_or_else(invalid)?;

        let coord = Coordinate::new(x, y);
        if !self.bounds.contains(&coord) {
            return Err(invalid());
        }
        Ok(coord)
    }

    /// Parses two coordinates and checks that the first precedes the second.
    ///
    /// # Errors
    /// `GridError::InvalidCoordinate` if either text fails [`parse`](Self::parse)
    /// (the first text is reported when both fail), otherwise
    /// `GridError::InvalidOrdering` if `first.x > second.x` or `first.y > second.y`.
    pub fn parse_ordered(&self, first: &str, second: &str) -> Result<OrderedPair, GridError> {
        let first = self.parse(first)?;
        let second = self.parse(second)?;
        OrderedPair::new(first, second).ok_or(GridError::InvalidOrdering { first, second })
    }

    fn parse_run(&self, run: &str) -> Option<u32> {
        if run.len() > self.digits as usize {
            return None;
        }
        run.parse().ok()
    }
}
