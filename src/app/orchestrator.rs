//! Main application orchestrator.
//!
//! Coordinates one invocation:
//! 1. Initializes logging (unless quiet).
//! 2. Validates the grid configuration and output path.
//! 3. Builds the path-count table once.
//! 4. Runs the requested query.
//! 5. Writes the JSON result to stdout or the output file.
//!
//! Input problems are reported before any path-count arithmetic runs.

use super::cli::{Cli, Command};
use super::error::AppError;
use super::file_handler;
use super::logger;
use super::processing;
use super::{verbose_eprintln, verbose_println}; // Macros for conditional logging.
use crate::grid::GridConfig;

/// Runs the application for parsed command-line arguments.
///
/// # Errors
/// Returns `AppError` for invalid configuration or coordinates, an unusable
/// output path, or a failure to write the result.
pub fn run_app(cli: Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    if !quiet_mode {
        if let Err(e) = logger::init_global_logger(&cli.log_file) {
            // Keep going; only file logging is lost.
            eprintln!(
                "Warning: Failed to initialize verbose logger ({}): {}. Verbose file logging will be unavailable.",
                cli.log_file.display(),
                e
            );
        } else {
            verbose_println!(
                quiet_mode,
                "Verbose logging initialized to {}",
                cli.log_file.display()
            );
        }
    }

    let result = execute(&cli);
    if let Err(e) = &result {
        verbose_eprintln!(quiet_mode, "[ERROR] {}", e);
    }

    if !quiet_mode {
        if let Err(e) = logger::flush_global_logger() {
            eprintln!(
                "[WARNING] Failed to perform final flush of {}: {}",
                cli.log_file.display(),
                e
            );
        }
    }

    result
}

fn execute(cli: &Cli) -> Result<(), AppError> {
    let quiet_mode = cli.quiet;

    let config = GridConfig::new(cli.digits)?;
    if let Some(output_path) = &cli.output {
        file_handler::validate_output_path(output_path, quiet_mode)?;
    }
    verbose_println!(
        quiet_mode,
        "Grid digit width {} (corner {}).",
        config.digits(),
        config.bounds().corner()
    );

    let service = processing::build_service(&config, quiet_mode);

    let rendered = match &cli.command {
        Command::Info { coord } => {
            let info = processing::process_info(&service, coord, quiet_mode)?;
            processing::render_json(&info, cli.pretty)?
        }
        Command::Chance {
            coord,
            coord_end,
            within,
        } => {
            let chance =
                processing::process_chance(&service, coord, coord_end, *within, quiet_mode)?;
            processing::render_json(&chance, cli.pretty)?
        }
    };

    match &cli.output {
        Some(output_path) => {
            file_handler::write_content_to_file(output_path, &rendered)?;
            verbose_println!(
                quiet_mode,
                "[STEP 3] Result written to {}",
                output_path.display()
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
