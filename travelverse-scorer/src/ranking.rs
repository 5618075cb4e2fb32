//! Stable descending ranking of scored destinations and guides.

use travelverse_core::scoring::descending;
use travelverse_core::{
    Destination, DestinationScorer, GuideScorer, PhotoGuide, RandomSource, RawPhotoGuide,
    ScoredDestination, ScoredPhotoGuide, TravelerProfile,
};

use crate::error::{GuideScoringError, RecommendationError};

/// Score `destinations` in input order and sort them best first.
///
/// Equal scores keep their input order. Randomness is drawn in input order,
/// so the same stream gives the same ranking.
///
/// # Errors
/// Returns [`RecommendationError::EmptyCandidateSet`] when `destinations` is
/// empty.
///
/// # Examples
/// ```
/// use travelverse_core::test_support::{FixedSource, sample_destination};
/// use travelverse_core::{BudgetRange, TravelStyle, TravelerProfile};
/// use travelverse_scorer::{RelevanceScorer, rank_destinations};
///
/// let profile = TravelerProfile::new(BudgetRange::Budget, TravelStyle::Balanced);
/// let mut pricey = sample_destination("2", "Zurich");
/// pricey.travel_info.average_cost_range.max = 400;
/// let ranked = rank_destinations(
///     &RelevanceScorer::new(),
///     &profile,
///     &[pricey, sample_destination("1", "Hanoi")],
///     &mut FixedSource::new(0.5),
/// )
/// .unwrap();
/// assert_eq!(ranked[0].destination.id, "1");
/// ```
pub fn rank_destinations(
    scorer: &dyn DestinationScorer,
    profile: &TravelerProfile,
    destinations: &[Destination],
    rng: &mut dyn RandomSource,
) -> Result<Vec<ScoredDestination>, RecommendationError> {
    if destinations.is_empty() {
        return Err(RecommendationError::EmptyCandidateSet);
    }
    let mut scored: Vec<ScoredDestination> = destinations
        .iter()
        .map(|destination| scorer.score(profile, destination, rng))
        .collect();
    scored.sort_by(|lhs, rhs| descending(lhs.score, rhs.score));
    log::debug!("ranked {} destinations", scored.len());
    Ok(scored)
}

/// Score `guides` and sort them best first; equal potentials keep input order.
#[must_use]
pub fn rank_guides(scorer: &dyn GuideScorer, guides: &[PhotoGuide]) -> Vec<ScoredPhotoGuide> {
    let mut scored: Vec<ScoredPhotoGuide> = guides.iter().map(|guide| scorer.score(guide)).collect();
    scored.sort_by(|lhs, rhs| descending(lhs.viral_potential, rhs.viral_potential));
    log::debug!("ranked {} photo guides", scored.len());
    scored
}

/// Validate raw guides and rank them.
///
/// # Errors
/// Returns [`GuideScoringError::InvalidGuide`] for the first guide whose
/// category or difficulty is unknown.
pub fn rank_raw_guides(
    scorer: &dyn GuideScorer,
    guides: Vec<RawPhotoGuide>,
) -> Result<Vec<ScoredPhotoGuide>, GuideScoringError> {
    let validated = guides
        .into_iter()
        .enumerate()
        .map(|(index, raw)| {
            PhotoGuide::try_from(raw).map_err(|source| GuideScoringError::InvalidGuide { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rank_guides(scorer, &validated))
}
