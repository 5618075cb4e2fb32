//! Recommend command implementation for the TravelVerse CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use travelverse_core::{Destination, RawTravelerProfile};
use travelverse_scorer::{RecommendationConfig, RecommendationSet, Recommender, RelevanceScorer};

use crate::inputs::{load_json, require_existing, write_json};
use crate::{
    ARG_RECOMMEND_LIMIT, ARG_RECOMMEND_REQUEST, ARG_RECOMMEND_SEED, CliError,
    ENV_RECOMMEND_REQUEST, random_source,
};

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score candidate destinations against a traveler profile \
                 and print the best matches with a personality match and \
                 travel insights. The request is a JSON object holding a \
                 profile and a list of destinations.",
    about = "Recommend destinations for a traveler"
)]
#[ortho_config(prefix = "TRAVELVERSE")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing the profile and destinations.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Seed for reproducible scoring noise.
    #[arg(long = ARG_RECOMMEND_SEED, value_name = "n")]
    #[serde(default)]
    pub(crate) seed: Option<u64>,
    /// Maximum number of destinations to print (default 5).
    #[arg(long = ARG_RECOMMEND_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

/// Resolved `recommend` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Noise seed; `None` draws from OS entropy.
    pub(crate) seed: Option<u64>,
    /// Recommendation tunables.
    pub(crate) recommendation: RecommendationConfig,
}

impl RecommendConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.request_path, ARG_RECOMMEND_REQUEST)
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_REQUEST,
            env: ENV_RECOMMEND_REQUEST,
        })?;
        let limit = args
            .limit
            .unwrap_or_else(|| RecommendationConfig::default().limit);
        if limit == 0 {
            return Err(CliError::InvalidArgument {
                field: ARG_RECOMMEND_LIMIT,
                reason: "must be at least 1",
            });
        }
        Ok(Self {
            request_path,
            seed: args.seed,
            recommendation: RecommendationConfig { limit },
        })
    }
}

/// JSON payload accepted by `recommend`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RecommendRequest {
    /// Traveler profile, validated before scoring.
    pub(crate) profile: RawTravelerProfile,
    /// Candidate destinations.
    pub(crate) destinations: Vec<Destination>,
}

pub(super) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_recommend_with(args, &mut stdout)
}

pub(super) fn run_recommend_with(
    args: RecommendArgs,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let set = execute_recommend(&config)?;
    write_json(writer, &set)
}

fn execute_recommend(config: &RecommendConfig) -> Result<RecommendationSet, CliError> {
    let request: RecommendRequest = load_json(&config.request_path, ARG_RECOMMEND_REQUEST)?;
    log::info!(
        "scoring {} destinations from {}",
        request.destinations.len(),
        config.request_path
    );
    let recommender = Recommender::new(RelevanceScorer::new(), config.recommendation);
    let mut rng = random_source(config.seed);
    let set = recommender.recommend_raw(request.profile, &request.destinations, &mut rng)?;
    Ok(set)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
