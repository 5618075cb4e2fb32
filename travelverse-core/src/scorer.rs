//! Score destinations and photo guides.
//!
//! The [`DestinationScorer`] trait assigns a relevance score to a
//! [`Destination`] for a [`TravelerProfile`]; [`GuideScorer`] predicts the
//! viral potential of a [`PhotoGuide`].

use crate::{
    Destination, PhotoGuide, RandomSource, ScoredDestination, ScoredPhotoGuide, TravelerProfile,
};

/// Calculate how well a destination suits a traveler.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent requests. Scoring is infallible: profiles are validated
/// on construction.
///
/// Implementations must:
/// - Produce finite `score` and `confidence` values in `0.0..=1.0`.
/// - Draw randomness only from `rng`.
///
/// Use [`crate::scoring::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use travelverse_core::{
///     Destination, DestinationScorer, RandomSource, ScoredDestination, TravelerProfile,
/// };
///
/// struct FlatScorer;
///
/// impl DestinationScorer for FlatScorer {
///     fn score(
///         &self,
///         _profile: &TravelerProfile,
///         destination: &Destination,
///         _rng: &mut dyn RandomSource,
///     ) -> ScoredDestination {
///         ScoredDestination {
///             destination: destination.clone(),
///             score: 0.5,
///             justification: String::from("every place is fine"),
///             confidence: 1.0,
///         }
///     }
/// }
/// ```
pub trait DestinationScorer: Send + Sync {
    /// Score `destination` for `profile`, drawing noise from `rng`.
    fn score(
        &self,
        profile: &TravelerProfile,
        destination: &Destination,
        rng: &mut dyn RandomSource,
    ) -> ScoredDestination;
}

/// Predict how shareable a photo guide will be.
pub trait GuideScorer: Send + Sync {
    /// Annotate `guide` with its viral potential in `0.0..=1.0`.
    fn score(&self, guide: &PhotoGuide) -> ScoredPhotoGuide;
}
