//! Photo-spot optimisation requests, results and the optimizer trait.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Coordinates, RandomSource};

/// Parameters for a photo-spot optimisation.
///
/// # Examples
/// ```rust
/// use travelverse_core::{Coordinates, OptimizeRequest};
///
/// let request = OptimizeRequest {
///     destination_id: "1".into(),
///     participants: vec![Coordinates::new(27.1738, 78.0421)],
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    /// Destination the participants are photographing.
    pub destination_id: String,
    /// Current participant positions, one particle each.
    pub participants: Vec<Coordinates>,
}

impl OptimizeRequest {
    /// Check the request before any search runs.
    ///
    /// # Errors
    /// Returns [`OptimizeError::NoParticipants`] for an empty participant list
    /// and [`OptimizeError::InvalidCoordinate`] for the first position that is
    /// non-finite or outside WGS84 bounds.
    pub fn validate(&self) -> Result<(), OptimizeError> {
        if self.participants.is_empty() {
            return Err(OptimizeError::NoParticipants);
        }
        if let Some(index) = self.participants.iter().position(|p| !p.is_valid()) {
            return Err(OptimizeError::InvalidCoordinate { index });
        }
        Ok(())
    }
}

/// A nearby alternative to the recommended spot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternativeSpot {
    /// Jittered position near the best spot.
    pub position: Coordinates,
    /// Fitness of the alternative.
    pub fitness: f64,
    /// Whether the crowd check accepted the spot.
    pub crowd_validated: bool,
}

/// Outcome of one optimisation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// Destination the request referred to.
    pub destination_id: String,
    /// Number of particles searched.
    pub participant_count: usize,
    /// Rounds executed.
    pub iterations: u32,
    /// Highest-fitness position observed in any round.
    pub best_position: Coordinates,
    /// Fitness at `best_position`.
    pub best_fitness: f64,
    /// Nearby candidates around `best_position`.
    pub alternatives: Vec<AlternativeSpot>,
    /// Optimiser confidence in `0.0..=1.0`.
    pub confidence: f64,
}

/// Errors returned by [`Optimizer::optimize`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptimizeError {
    /// The request contained no participant positions.
    #[error("optimisation requires at least one participant")]
    NoParticipants,
    /// The optimiser was configured to run zero rounds.
    #[error("optimisation requires at least one iteration")]
    ZeroIterations,
    /// A participant position was unusable.
    #[error("participant {index} has a non-finite or out-of-range position")]
    InvalidCoordinate {
        /// Index of the offending participant.
        index: usize,
    },
}

/// Search for the best photo spot for a group of participants.
///
/// Implementations should return an [`OptimizeError`] for invalid requests
/// rather than panicking, and must draw randomness only from `rng` so equal
/// inputs and streams give bit-identical results.
pub trait Optimizer: Send + Sync {
    /// Run the search for `request`.
    fn optimize(
        &self,
        request: &OptimizeRequest,
        rng: &mut dyn RandomSource,
    ) -> Result<OptimizationResult, OptimizeError>;
}
