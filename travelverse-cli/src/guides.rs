//! Guides command implementation for the TravelVerse CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use travelverse_core::{RawPhotoGuide, ScoredPhotoGuide};
use travelverse_scorer::{ViralPotentialScorer, rank_raw_guides};

use crate::inputs::{load_json, require_existing, write_json};
use crate::{ARG_GUIDES_INPUT, CliError, ENV_GUIDES_INPUT};

/// CLI arguments for the `guides` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank photo guides by viral potential. The input is a JSON \
                 array of guides with category, difficulty and image count.",
    about = "Rank photo guides by viral potential"
)]
#[ortho_config(prefix = "TRAVELVERSE")]
pub(crate) struct GuidesArgs {
    /// Path to a JSON file containing an array of photo guides.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) guides_path: Option<Utf8PathBuf>,
}

impl GuidesArgs {
    pub(crate) fn into_config(self) -> Result<GuidesConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        GuidesConfig::try_from(merged)
    }
}

/// Resolved `guides` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GuidesConfig {
    /// Path to the JSON guide list.
    pub(crate) guides_path: Utf8PathBuf,
}

impl GuidesConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.guides_path, ARG_GUIDES_INPUT)
    }
}

impl TryFrom<GuidesArgs> for GuidesConfig {
    type Error = CliError;

    fn try_from(args: GuidesArgs) -> Result<Self, Self::Error> {
        let guides_path = args.guides_path.ok_or(CliError::MissingArgument {
            field: ARG_GUIDES_INPUT,
            env: ENV_GUIDES_INPUT,
        })?;
        Ok(Self { guides_path })
    }
}

pub(super) fn run_guides(args: GuidesArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_guides_with(args, &mut stdout)
}

pub(super) fn run_guides_with(args: GuidesArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let ranked = execute_guides(&config)?;
    write_json(writer, &ranked)
}

fn execute_guides(config: &GuidesConfig) -> Result<Vec<ScoredPhotoGuide>, CliError> {
    let guides: Vec<RawPhotoGuide> = load_json(&config.guides_path, ARG_GUIDES_INPUT)?;
    log::info!("ranking {} photo guides from {}", guides.len(), config.guides_path);
    Ok(rank_raw_guides(&ViralPotentialScorer, guides)?)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<GuidesConfig, CliError> {
    let merged = GuidesArgs::merge_from_layers(layers).map_err(CliError::from)?;
    GuidesConfig::try_from(merged)
}
