//! Error types emitted by the TravelVerse CLI.
//!
//! Keep this error type reasonably small, as every command helper returns
//! `Result<_, CliError>`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use travelverse_core::OptimizeError;
use travelverse_scorer::{GuideScoringError, RecommendationError};

/// Errors emitted by the TravelVerse CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        field: &'static str,
        env: &'static str,
    },
    /// An option was present but unusable.
    #[error("invalid {field}: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: &'static str,
    },
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        field: &'static str,
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Opening an input file failed.
    #[error("failed to open {field} input at {path:?}: {source}")]
    OpenInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Input JSON could not be decoded.
    #[error("failed to parse {field} JSON at {path:?}: {source}")]
    ParseInput {
        field: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The recommender rejected the request.
    #[error("recommendation failed: {0}")]
    Recommend(#[from] RecommendationError),
    /// A photo guide failed validation.
    #[error("guide ranking failed: {0}")]
    ScoreGuides(#[from] GuideScoringError),
    /// The optimizer rejected the request.
    #[error("optimisation failed: {0}")]
    Optimize(#[from] OptimizeError),
    /// Serializing command output failed.
    #[error("failed to serialize output: {0}")]
    SerializeOutput(#[source] serde_json::Error),
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
    /// Installing the log subscriber failed.
    #[error("failed to initialise logging: {0}")]
    Logging(#[source] Box<dyn std::error::Error + Send + Sync>),
}
