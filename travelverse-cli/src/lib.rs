//! Command-line interface for the TravelVerse recommendation engine.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use travelverse_core::ChaChaSource;

mod error;
mod guides;
mod inputs;
mod logging;
mod optimize;
mod recommend;

pub use error::CliError;
pub use logging::init_logging;

use guides::{GuidesArgs, run_guides};
use optimize::{OptimizeArgs, run_optimize};
use recommend::{RecommendArgs, run_recommend};

pub(crate) const ARG_RECOMMEND_REQUEST: &str = "request";
pub(crate) const ARG_RECOMMEND_SEED: &str = "seed";
pub(crate) const ARG_RECOMMEND_LIMIT: &str = "limit";
pub(crate) const ENV_RECOMMEND_REQUEST: &str = "TRAVELVERSE_CMDS_RECOMMEND_REQUEST_PATH";

pub(crate) const ARG_GUIDES_INPUT: &str = "guides";
pub(crate) const ENV_GUIDES_INPUT: &str = "TRAVELVERSE_CMDS_GUIDES_GUIDES_PATH";

pub(crate) const ARG_OPTIMIZE_REQUEST: &str = "request";
pub(crate) const ARG_OPTIMIZE_ITERATIONS: &str = "iterations";
pub(crate) const ARG_OPTIMIZE_ALTERNATIVES: &str = "alternatives";
pub(crate) const ARG_OPTIMIZE_SEED: &str = "seed";
pub(crate) const ENV_OPTIMIZE_REQUEST: &str = "TRAVELVERSE_CMDS_OPTIMIZE_REQUEST_PATH";

/// Run the TravelVerse CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Guides(args) => run_guides(args),
        Command::Optimize(args) => run_optimize(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "travelverse",
    about = "Score destinations, rank photo guides and optimise group photo spots",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend destinations for a traveler profile.
    Recommend(RecommendArgs),
    /// Rank photo guides by viral potential.
    Guides(GuidesArgs),
    /// Search for the best photo spot for a group.
    Optimize(OptimizeArgs),
}

/// Seeded runs are reproducible; unseeded runs draw from OS entropy.
fn random_source(seed: Option<u64>) -> ChaChaSource {
    seed.map_or_else(ChaChaSource::from_entropy, ChaChaSource::seeded)
}

#[cfg(test)]
mod tests;
