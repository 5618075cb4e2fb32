//! Recommendation sets: the top-ranked destinations for a traveler together
//! with a personality match and travel insights.
//!
//! [`Recommender`] wraps any [`DestinationScorer`] and applies a
//! [`RecommendationConfig`]. Raw profiles are validated before scoring so an
//! unknown budget or style surfaces as
//! [`RecommendationError::InvalidProfile`].

use serde::{Deserialize, Serialize};
use travelverse_core::{
    Destination, DestinationScorer, PersonalityTrait, RandomSource, RawTravelerProfile,
    ScoredDestination, TravelerProfile,
};

use crate::error::RecommendationError;
use crate::ranking::rank_destinations;
use crate::relevance::RelevanceScorer;

const DEFAULT_LIMIT: usize = 5;
const TRENDING_COUNT: usize = 3;
const NEUTRAL_MATCH: f32 = 0.75_f32;
const MATCH_BASE: f32 = 0.5_f32;
const MATCH_BONUS: f32 = 0.2_f32;
/// Traits must exceed this weight to count towards a match.
const STRONG_TRAIT: f32 = 0.7_f32;
const TIMING_ADVICE: &str = "Booking 2-3 months in advance usually secures the best prices";

/// Tunables for [`Recommender`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationConfig {
    /// Maximum number of destinations returned. Zero yields an empty list.
    pub limit: usize,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Travel insights derived from a recommendation set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insights {
    /// Names of the three best-ranked destinations.
    pub trending_destinations: Vec<String>,
    /// Budget advice for the traveler's bracket.
    pub budget_optimization: String,
    /// Advice keyed off the traveler's adventurousness.
    pub personality_insight: String,
    /// Booking-window advice.
    pub timing_recommendation: String,
}

/// The outcome of [`Recommender::recommend`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    /// Best destinations first, at most `limit` entries.
    pub recommendations: Vec<ScoredDestination>,
    /// How well the recommendations suit the traveler's personality.
    pub personality_match: f32,
    /// Insights derived from the recommendations.
    pub insights: Insights,
}

/// Produces recommendation sets with a pluggable destination scorer.
#[derive(Debug, Clone, Default)]
pub struct Recommender<S = RelevanceScorer> {
    scorer: S,
    config: RecommendationConfig,
}

impl<S: DestinationScorer> Recommender<S> {
    /// Construct a recommender from a scorer and configuration.
    pub const fn new(scorer: S, config: RecommendationConfig) -> Self {
        Self { scorer, config }
    }

    /// Rank `destinations` for `profile` and build the recommendation set.
    ///
    /// # Errors
    /// Returns [`RecommendationError::EmptyCandidateSet`] when `destinations`
    /// is empty.
    pub fn recommend(
        &self,
        profile: &TravelerProfile,
        destinations: &[Destination],
        rng: &mut dyn RandomSource,
    ) -> Result<RecommendationSet, RecommendationError> {
        let mut recommendations = rank_destinations(&self.scorer, profile, destinations, rng)?;
        let personality_match = personality_match(profile, &recommendations);
        let insights = insights(profile, &recommendations);
        recommendations.truncate(self.config.limit);
        log::debug!(
            "recommended {} of {} destinations (personality match {personality_match:.2})",
            recommendations.len(),
            destinations.len()
        );
        Ok(RecommendationSet {
            recommendations,
            personality_match,
            insights,
        })
    }

    /// Validate `raw` and recommend from `destinations`.
    ///
    /// # Errors
    /// Returns [`RecommendationError::InvalidProfile`] when the budget range,
    /// travel style or a personality trait is unknown, and
    /// [`RecommendationError::EmptyCandidateSet`] for an empty destination
    /// list.
    pub fn recommend_raw(
        &self,
        raw: RawTravelerProfile,
        destinations: &[Destination],
        rng: &mut dyn RandomSource,
    ) -> Result<RecommendationSet, RecommendationError> {
        let profile = TravelerProfile::try_from(raw)?;
        self.recommend(&profile, destinations, rng)
    }
}

fn is_strong(profile: &TravelerProfile, personality_trait: PersonalityTrait) -> bool {
    profile
        .trait_weight(personality_trait)
        .is_some_and(|weight| weight > STRONG_TRAIT)
}

/// Mean personality fit of `recommendations` in `0.0..=1.0`.
///
/// [`Recommender`] passes the full ranking here, before the result limit is
/// applied. A profile whose personality map is empty is treated the same as
/// one without a personality: both get the neutral `0.75`, as does an empty
/// recommendation list. Otherwise each destination starts at `0.5` and gains `0.2`
/// for each strong trait it serves: adventurous travelers and an `Adventure`
/// activity, cultural travelers and a cultural profile, relaxed travelers
/// and a `Relaxation` activity.
///
/// # Examples
/// ```
/// use travelverse_core::test_support::sample_destination;
/// use travelverse_core::{BudgetRange, PersonalityTrait, ScoredDestination, TravelStyle};
/// use travelverse_core::TravelerProfile;
/// use travelverse_scorer::personality_match;
///
/// let profile = TravelerProfile::new(BudgetRange::Budget, TravelStyle::Adventure)
///     .with_trait(PersonalityTrait::Adventurous, 0.9);
/// let scored = ScoredDestination {
///     destination: sample_destination("1", "Moab").with_activities(["Adventure canyoning"]),
///     score: 0.8,
///     justification: String::new(),
///     confidence: 0.8,
/// };
/// assert!((personality_match(&profile, &[scored]) - 0.7).abs() < 1e-6);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "personality match averages per-destination bonuses"
)]
#[expect(
    clippy::cast_precision_loss,
    reason = "recommendation counts are far below f32 precision limits"
)]
pub fn personality_match(profile: &TravelerProfile, recommendations: &[ScoredDestination]) -> f32 {
    if !profile.has_personality() || recommendations.is_empty() {
        return NEUTRAL_MATCH;
    }
    let adventurous = is_strong(profile, PersonalityTrait::Adventurous);
    let cultural = is_strong(profile, PersonalityTrait::Cultural);
    let relaxed = is_strong(profile, PersonalityTrait::Relaxed);

    let total: f32 = recommendations
        .iter()
        .map(|scored| {
            let destination = &scored.destination;
            let served = [
                adventurous && destination.has_activity_containing("Adventure"),
                cultural && destination.culture.is_some(),
                relaxed && destination.has_activity_containing("Relaxation"),
            ];
            let bonuses = served.iter().filter(|&&hit| hit).count();
            MATCH_BASE + MATCH_BONUS * bonuses as f32
        })
        .sum();
    (total / recommendations.len() as f32).clamp(0.0, 1.0)
}

fn insights(profile: &TravelerProfile, recommendations: &[ScoredDestination]) -> Insights {
    let trending_destinations = recommendations
        .iter()
        .take(TRENDING_COUNT)
        .map(|scored| scored.destination.name.clone())
        .collect();
    let budget_optimization = format!(
        "Based on your {} budget, consider visiting during shoulder season for 30% savings",
        profile.budget_range()
    );
    let personality_insight = if is_strong(profile, PersonalityTrait::Adventurous) {
        "Your adventurous personality suggests active exploration"
    } else {
        "Your relaxed personality suggests leisurely discovery"
    };
    Insights {
        trending_destinations,
        budget_optimization,
        personality_insight: personality_insight.to_owned(),
        timing_recommendation: TIMING_ADVICE.to_owned(),
    }
}
