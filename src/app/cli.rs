use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::grid::DEFAULT_GRID_DIGITS;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Counts monotone lattice paths and path probabilities on a bounded grid.", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Maximum number of digits per coordinate component (grid runs 0..10^digits - 1).
    #[clap(short, long, default_value_t = DEFAULT_GRID_DIGITS, global = true)]
    pub digits: u32,

    /// Suppress verbose logging; only the result or an error is printed.
    #[clap(short, long, global = true)]
    pub quiet: bool,

    /// File that receives verbose log output.
    #[clap(long, default_value = "gridprob.log", global = true)]
    pub log_file: PathBuf,

    /// Write the JSON result to this file instead of stdout.
    #[clap(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Pretty-print the JSON result.
    #[clap(long, global = true)]
    pub pretty: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Edges touching a point and the number of paths using each, e.g. `info 3,4`.
    Info {
        /// Coordinate as `x,y`.
        coord: String,
    },
    /// Probability that a random origin-to-corner path visits both points, e.g. `chance 2,3 5,5`.
    Chance {
        /// First coordinate as `x,y`; must not exceed the second on either axis.
        coord: String,
        /// Second coordinate as `x,y`.
        coord_end: String,
        /// Treat the second coordinate as the path's end instead of the grid corner.
        #[clap(long)]
        within: bool,
    },
}
