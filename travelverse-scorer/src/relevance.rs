//! Rule-based destination relevance.
//!
//! Scores start at a neutral base and accumulate fixed bonuses for every rule
//! a destination satisfies. A small amount of noise drawn from the injected
//! [`RandomSource`] is then applied and the result clamped to `0.0..=1.0`.
//! The justification sentence names up to three satisfied rules in rule
//! order.

#![forbid(unsafe_code)]

use std::fmt;

use travelverse_core::scoring::{inject_noise, sanitise, unit_draw};
use travelverse_core::{
    BudgetRange, Destination, DestinationScorer, RandomSource, ScoredDestination, TravelStyle,
    TravelerProfile,
};

const BASE_SCORE: f32 = 0.5_f32;
const CULTURE_BONUS: f32 = 0.20_f32;
const ADVENTURE_INTEREST_BONUS: f32 = 0.20_f32;
const PHOTOGRAPHY_BONUS: f32 = 0.15_f32;
const NATURE_BONUS: f32 = 0.18_f32;
const BUDGET_BONUS: f32 = 0.10_f32;
const STYLE_BONUS: f32 = 0.15_f32;
/// Photography interest needs strictly more spots than this.
const PHOTO_SPOT_THRESHOLD: u32 = 2;
const DEFAULT_NOISE_MAGNITUDE: f32 = 0.05_f32;
const CONFIDENCE_FLOOR: f32 = 0.75_f32;
const CONFIDENCE_SPREAD: f32 = 0.2_f32;
const MAX_REASONS: usize = 3;

/// A relevance rule satisfied by a destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchedRule {
    /// Culture interest and at least one tradition.
    CulturalHeritage {
        /// Number of distinct traditions.
        traditions: usize,
    },
    /// Adventure interest and an activity mentioning adventure.
    AdventureActivities {
        /// First matching activity.
        activity: String,
    },
    /// Photography interest and more than two photo spots.
    PhotoSpots {
        /// Number of curated spots.
        spots: u32,
    },
    /// Nature interest and a hiking or nature activity.
    NatureExperiences,
    /// Daily cost within the traveler's budget ceiling.
    WithinBudget {
        /// The traveler's bracket.
        budget: BudgetRange,
    },
    /// Luxury style and a luxury accommodation.
    LuxuryStays,
    /// Adventure style and an activity mentioning `Adventure`.
    AdventureStyle,
    /// Cultural style, a recorded history and a cultural profile.
    CulturalStyle,
}

impl MatchedRule {
    /// Score increment contributed by the rule.
    #[must_use]
    pub const fn bonus(&self) -> f32 {
        match self {
            Self::CulturalHeritage { .. } => CULTURE_BONUS,
            Self::AdventureActivities { .. } => ADVENTURE_INTEREST_BONUS,
            Self::PhotoSpots { .. } => PHOTOGRAPHY_BONUS,
            Self::NatureExperiences => NATURE_BONUS,
            Self::WithinBudget { .. } => BUDGET_BONUS,
            Self::LuxuryStays | Self::AdventureStyle | Self::CulturalStyle => STYLE_BONUS,
        }
    }
}

impl fmt::Display for MatchedRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CulturalHeritage { traditions } => {
                let noun = if *traditions == 1 { "tradition" } else { "traditions" };
                write!(f, "rich cultural heritage with {traditions} unique {noun}")
            }
            Self::AdventureActivities { activity } => {
                write!(f, "adventure activities such as {activity}")
            }
            Self::PhotoSpots { spots } => write!(f, "{spots} Instagram-worthy photo spots"),
            Self::NatureExperiences => f.write_str("hiking and nature experiences"),
            Self::WithinBudget { budget } => write!(f, "prices within your {budget} range"),
            Self::LuxuryStays => f.write_str("premium luxury accommodations available"),
            Self::AdventureStyle => f.write_str("signature adventure experiences"),
            Self::CulturalStyle => f.write_str("a storied history"),
        }
    }
}

/// Evaluate every relevance rule, returning the satisfied ones in rule order.
///
/// # Examples
/// ```
/// use travelverse_core::test_support::{culture_with_traditions, sample_destination};
/// use travelverse_core::{BudgetRange, TravelStyle, TravelerProfile};
/// use travelverse_scorer::{MatchedRule, matched_rules};
///
/// let mut destination = sample_destination("1", "Kyoto");
/// destination.culture = Some(culture_with_traditions(&["Tea ceremony"]));
/// let profile = TravelerProfile::new(BudgetRange::Budget, TravelStyle::Balanced)
///     .with_interest("culture");
///
/// assert_eq!(
///     matched_rules(&profile, &destination),
///     vec![
///         MatchedRule::CulturalHeritage { traditions: 1 },
///         MatchedRule::WithinBudget { budget: BudgetRange::Budget },
///     ]
/// );
/// ```
#[must_use]
pub fn matched_rules(profile: &TravelerProfile, destination: &Destination) -> Vec<MatchedRule> {
    let mut rules = Vec::new();

    let traditions = destination.tradition_count();
    if profile.has_interest("culture") && traditions > 0 {
        rules.push(MatchedRule::CulturalHeritage { traditions });
    }
    if profile.has_interest("adventure") {
        if let Some(activity) = destination
            .activities
            .iter()
            .find(|activity| activity.to_lowercase().contains("adventure"))
        {
            rules.push(MatchedRule::AdventureActivities {
                activity: activity.clone(),
            });
        }
    }
    if profile.has_interest("photography") && destination.photo_spot_count > PHOTO_SPOT_THRESHOLD
    {
        rules.push(MatchedRule::PhotoSpots {
            spots: destination.photo_spot_count,
        });
    }
    if profile.has_interest("nature")
        && (destination.has_activity_matching("hiking")
            || destination.has_activity_matching("nature"))
    {
        rules.push(MatchedRule::NatureExperiences);
    }
    let budget = profile.budget_range();
    if budget.admits(destination.travel_info.average_cost_range.max) {
        rules.push(MatchedRule::WithinBudget { budget });
    }

    match profile.travel_style() {
        TravelStyle::Luxury
            if destination
                .accommodation
                .iter()
                .any(|stay| stay.kind.contains("Luxury")) =>
        {
            rules.push(MatchedRule::LuxuryStays);
        }
        TravelStyle::Adventure if destination.has_activity_containing("Adventure") => {
            rules.push(MatchedRule::AdventureStyle);
        }
        TravelStyle::Cultural if destination.has_history() && destination.culture.is_some() => {
            rules.push(MatchedRule::CulturalStyle);
        }
        _ => {}
    }

    rules
}

/// Build the justification sentence for a set of satisfied rules.
///
/// # Examples
/// ```
/// use travelverse_core::TravelStyle;
/// use travelverse_scorer::{MatchedRule, justify};
///
/// assert_eq!(
///     justify(TravelStyle::Foodie, &[]),
///     "Great match for your foodie travel preferences"
/// );
/// assert_eq!(
///     justify(TravelStyle::Cultural, &[MatchedRule::CulturalStyle]),
///     "Perfect for cultural travelers who love a storied history"
/// );
/// ```
#[must_use]
pub fn justify(style: TravelStyle, rules: &[MatchedRule]) -> String {
    if rules.is_empty() {
        return format!("Great match for your {style} travel preferences");
    }
    let reasons = rules
        .iter()
        .take(MAX_REASONS)
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Perfect for {style} travelers who love {reasons}")
}

/// Scorer applying the fixed relevance rules with injected noise.
///
/// Each call takes two draws from the random source: the first perturbs the
/// score, the second sets the confidence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RelevanceScorer {
    noise_magnitude: f32,
}

impl RelevanceScorer {
    /// Construct a scorer with the default noise magnitude of `0.05`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            noise_magnitude: DEFAULT_NOISE_MAGNITUDE,
        }
    }

    /// Override the noise magnitude; negative or non-finite values disable
    /// noise.
    #[must_use]
    pub const fn with_noise_magnitude(mut self, magnitude: f32) -> Self {
        self.noise_magnitude = if magnitude.is_finite() {
            magnitude.max(0.0_f32)
        } else {
            0.0_f32
        };
        self
    }

    /// Configured noise magnitude.
    #[must_use]
    pub const fn noise_magnitude(&self) -> f32 {
        self.noise_magnitude
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "relevance scoring sums rule bonuses onto the base score"
    )]
    fn raw_score(rules: &[MatchedRule]) -> f32 {
        BASE_SCORE + rules.iter().map(MatchedRule::bonus).sum::<f32>()
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "confidence scales a uniform draw into its band"
    )]
    fn confidence(rng: &mut dyn RandomSource) -> f32 {
        sanitise(CONFIDENCE_FLOOR + unit_draw(rng) * CONFIDENCE_SPREAD)
    }
}

impl Default for RelevanceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl DestinationScorer for RelevanceScorer {
    fn score(
        &self,
        profile: &TravelerProfile,
        destination: &Destination,
        rng: &mut dyn RandomSource,
    ) -> ScoredDestination {
        let rules = matched_rules(profile, destination);
        let raw = Self::raw_score(&rules);
        let score = sanitise(inject_noise(raw, self.noise_magnitude, rng));
        let confidence = Self::confidence(rng);
        log::debug!(
            "scored destination {} at {score:.3} ({} rules matched)",
            destination.id,
            rules.len()
        );
        ScoredDestination {
            destination: destination.clone(),
            score,
            justification: justify(profile.travel_style(), &rules),
            confidence,
        }
    }
}
