//! Command-line interface for ranking a directory of HTML pages.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod rank;
mod report;

pub use error::CliError;

use rank::{RankArgs, run_rank};

pub(crate) const ARG_CORPUS: &str = "corpus";
pub(crate) const ARG_DAMPING: &str = "damping";
pub(crate) const ARG_SAMPLES: &str = "samples";
pub(crate) const ARG_SEED: &str = "seed";
pub(crate) const ARG_TOLERANCE: &str = "tolerance";
pub(crate) const ARG_MAX_ITERATIONS: &str = "max-iterations";
pub(crate) const ARG_FORMAT: &str = "format";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_CORPUS: &str = "SURFRANK_CMDS_RANK_CORPUS";

/// Run the surfrank CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] when arguments are invalid, the corpus cannot be
/// crawled or ranked, or the report cannot be written.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Rank(args) => run_rank(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "surfrank",
    about = "Estimate PageRank for a directory of linked HTML pages",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank every page of a corpus by sampling and by iteration.
    Rank(RankArgs),
}

#[cfg(test)]
mod tests;
