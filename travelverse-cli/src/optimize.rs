//! Optimize command implementation for the TravelVerse CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use travelverse_core::{OptimizationResult, OptimizeRequest, Optimizer};
use travelverse_swarm::{SwarmConfig, SwarmOptimizer};

use crate::inputs::{load_json, require_existing, write_json};
use crate::{
    ARG_OPTIMIZE_ALTERNATIVES, ARG_OPTIMIZE_ITERATIONS, ARG_OPTIMIZE_REQUEST, ARG_OPTIMIZE_SEED,
    CliError, ENV_OPTIMIZE_REQUEST, random_source,
};

/// CLI arguments for the `optimize` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Search for the best photo spot for a group of \
                 participants. The request is a JSON object holding a \
                 destination id and the participants' positions.",
    about = "Optimise a group photo spot"
)]
#[ortho_config(prefix = "TRAVELVERSE")]
pub(crate) struct OptimizeArgs {
    /// Path to a JSON file containing the optimisation request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Rounds to run (default 50).
    #[arg(long = ARG_OPTIMIZE_ITERATIONS, value_name = "n")]
    #[serde(default)]
    pub(crate) iterations: Option<u32>,
    /// Alternative spots to propose (default 3).
    #[arg(long = ARG_OPTIMIZE_ALTERNATIVES, value_name = "n")]
    #[serde(default)]
    pub(crate) alternatives: Option<usize>,
    /// Seed for a reproducible search.
    #[arg(long = ARG_OPTIMIZE_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
}

impl OptimizeArgs {
    pub(crate) fn into_config(self) -> Result<OptimizeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        OptimizeConfig::try_from(merged)
    }
}

/// Resolved `optimize` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OptimizeConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Search seed; `None` draws from OS entropy.
    pub(crate) seed: Option<u64>,
    /// Swarm tunables.
    pub(crate) swarm: SwarmConfig,
}

impl OptimizeConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_OPTIMIZE_REQUEST)
    }
}

impl TryFrom<OptimizeArgs> for OptimizeConfig {
    type Error = CliError;

    fn try_from(args: OptimizeArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_OPTIMIZE_REQUEST,
            env: ENV_OPTIMIZE_REQUEST,
        })?;
        let defaults = SwarmConfig::default();
        Ok(Self {
            request_path,
            seed: args.seed,
            swarm: SwarmConfig {
                iterations: args.iterations.unwrap_or(defaults.iterations),
                alternative_count: args.alternatives.unwrap_or(defaults.alternative_count),
                ..defaults
            },
        })
    }
}

pub(super) fn run_optimize(args: OptimizeArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_optimize_with(args, &mut stdout)
}

pub(super) fn run_optimize_with(
    args: OptimizeArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let result = execute_optimize(&config)?;
    write_json(writer, &result)
}

fn execute_optimize(config: &OptimizeConfig) -> Result<OptimizationResult, CliError> {
    let request: OptimizeRequest = load_json(&config.request_path, ARG_OPTIMIZE_REQUEST)?;
    log::info!(
        "optimising destination {} for {} participants over {} rounds",
        request.destination_id,
        request.participants.len(),
        config.swarm.iterations
    );
    let optimizer = SwarmOptimizer::new(config.swarm);
    let mut rng = random_source(config.seed);
    Ok(optimizer.optimize(&request, &mut rng)?)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<OptimizeConfig, CliError> {
    let merged = OptimizeArgs::merge_from_layers(layers).map_err(CliError::from)?;
    OptimizeConfig::try_from(merged)
}
