//! Builds the grid service and runs individual queries against it, logging
//! each step.

use serde::Serialize;
use std::time::Instant;

use super::error::AppError;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::grid::{GridConfig, GridError};
use crate::service::{ChanceResponse, GridService, InfoResponse};

/// Builds the path-count table for `config` and wraps it in a service.
pub fn build_service(config: &GridConfig, quiet_mode: bool) -> GridService {
    verbose_println!(quiet_mode, "[STEP 1] Building path-count table...");
    let started = Instant::now();
    let service = GridService::new(config);
    verbose_println!(
        quiet_mode,
        "   => {} cells up to corner {} in {:.2?}.",
        service.table().len(),
        service.bounds().corner(),
        started.elapsed()
    );
    service
}

/// Runs an info query for `coord_text`.
pub fn process_info(
    service: &GridService,
    coord_text: &str,
    quiet_mode: bool,
) -> Result<InfoResponse, AppError> {
    verbose_println!(quiet_mode, "[STEP 2] Info for \"{}\"...", coord_text);
    let info = service
        .get_info(coord_text)
        .inspect_err(|e| log_query_error(e, quiet_mode))?;
    verbose_println!(
        quiet_mode,
        "   => {} edge(s); {} path(s) to point, {} through it.",
        info.edges.len(),
        info.paths_to,
        info.paths_through
    );
    Ok(info)
}

/// Runs a chance query. With `within`, the second point is the path's end.
pub fn process_chance(
    service: &GridService,
    first: &str,
    second: &str,
    within: bool,
    quiet_mode: bool,
) -> Result<ChanceResponse, AppError> {
    verbose_println!(
        quiet_mode,
        "[STEP 2] Chance for \"{}\" -> \"{}\" ({})...",
        first,
        second,
        if within { "ending at second point" } else { "ending at grid corner" }
    );
    let result = if within {
        service.get_chance_within(first, second)
    } else {
        service.get_chance(first, second)
    };
    let chance = result.inspect_err(|e| log_query_error(e, quiet_mode))?;
    verbose_println!(
        quiet_mode,
        "   => {} (exact ratio has a {}-digit denominator).",
        chance.probability,
        chance.denominator.len()
    );
    Ok(chance)
}

/// Serializes a response to JSON.
pub fn render_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, AppError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}

fn log_query_error(error: &GridError, quiet_mode: bool) {
    if error.is_user_error() {
        verbose_eprintln!(quiet_mode, "   [REJECTED] {}", error);
    } else {
        // Validation should make this unreachable.
        verbose_eprintln!(quiet_mode, "   [BUG] {}", error);
    }
}
