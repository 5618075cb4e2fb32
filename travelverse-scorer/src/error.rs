//! Error types raised while ranking destinations and guides.
#![forbid(unsafe_code)]

use thiserror::Error;
use travelverse_core::{GuideError, ProfileError};

/// Errors raised while producing destination recommendations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecommendationError {
    /// The raw traveler profile failed validation.
    #[error("invalid traveler profile")]
    InvalidProfile(#[from] ProfileError),
    /// No candidate destinations were supplied.
    #[error("no candidate destinations to rank")]
    EmptyCandidateSet,
}

/// Errors raised while ranking photo guides.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuideScoringError {
    /// A raw guide failed validation.
    #[error("guide at index {index} is invalid")]
    InvalidGuide {
        /// Position of the guide in the input list.
        index: usize,
        /// Validation failure.
        #[source]
        source: GuideError,
    },
}
