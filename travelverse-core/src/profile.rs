//! Traveler profiles: interests, budget, travel style and personality traits.
//!
//! Profiles arrive from the host API as [`RawTravelerProfile`] values with
//! free-form strings. Converting one into a [`TravelerProfile`] validates every
//! enumerated field, so scorers never see an unknown budget or style.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Nightly spend bracket declared by the traveler.
///
/// # Examples
/// ```
/// use travelverse_core::BudgetRange;
///
/// assert_eq!(BudgetRange::Moderate.ceiling(), Some(200));
/// assert_eq!(BudgetRange::Luxury.ceiling(), None);
/// assert_eq!("Budget".parse::<BudgetRange>(), Ok(BudgetRange::Budget));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetRange {
    /// Up to 100 per day.
    Budget,
    /// Up to 200 per day.
    Moderate,
    /// No upper bound.
    Luxury,
}

impl BudgetRange {
    /// Return the bracket as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Moderate => "moderate",
            Self::Luxury => "luxury",
        }
    }

    /// Upper cost bound implied by the bracket; `None` means unbounded.
    pub const fn ceiling(self) -> Option<u32> {
        match self {
            Self::Budget => Some(100),
            Self::Moderate => Some(200),
            Self::Luxury => None,
        }
    }

    /// Report whether a destination costing at most `max_cost` fits.
    pub fn admits(self, max_cost: u32) -> bool {
        self.ceiling().is_none_or(|ceiling| max_cost <= ceiling)
    }
}

impl fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetRange {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "budget" => Ok(Self::Budget),
            "moderate" => Ok(Self::Moderate),
            "luxury" => Ok(Self::Luxury),
            _ => Err(ProfileError::UnknownBudgetRange(s.to_owned())),
        }
    }
}

/// Overall flavour of trip the traveler is planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TravelStyle {
    /// Active, outdoor trips.
    Adventure,
    /// Slow-paced rest.
    Relaxation,
    /// Heritage and history.
    Cultural,
    /// Food-led travel.
    Foodie,
    /// Trips planned around photo spots.
    Photography,
    /// Evening entertainment.
    Nightlife,
    /// No dominant preference.
    Balanced,
    /// Premium stays and services.
    Luxury,
}

impl TravelStyle {
    /// Return the style as a lowercase `&str`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adventure => "adventure",
            Self::Relaxation => "relaxation",
            Self::Cultural => "cultural",
            Self::Foodie => "foodie",
            Self::Photography => "photography",
            Self::Nightlife => "nightlife",
            Self::Balanced => "balanced",
            Self::Luxury => "luxury",
        }
    }
}

impl fmt::Display for TravelStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TravelStyle {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "adventure" => Ok(Self::Adventure),
            "relaxation" => Ok(Self::Relaxation),
            "cultural" => Ok(Self::Cultural),
            "foodie" => Ok(Self::Foodie),
            "photography" => Ok(Self::Photography),
            "nightlife" => Ok(Self::Nightlife),
            "balanced" => Ok(Self::Balanced),
            "luxury" => Ok(Self::Luxury),
            _ => Err(ProfileError::UnknownTravelStyle(s.to_owned())),
        }
    }
}

/// Personality dimensions captured by the planner wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalityTrait {
    /// Seeks novelty and physical challenge.
    Adventurous,
    /// Drawn to heritage and local customs.
    Cultural,
    /// Prefers a slow pace.
    Relaxed,
    /// Enjoys group activities.
    Social,
    /// Watches spending closely.
    BudgetConscious,
}

impl PersonalityTrait {
    /// Return the trait name as used in JSON payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adventurous => "adventurous",
            Self::Cultural => "cultural",
            Self::Relaxed => "relaxed",
            Self::Social => "social",
            Self::BudgetConscious => "budgetConscious",
        }
    }
}

impl fmt::Display for PersonalityTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonalityTrait {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "adventurous" => Ok(Self::Adventurous),
            "cultural" => Ok(Self::Cultural),
            "relaxed" => Ok(Self::Relaxed),
            "social" => Ok(Self::Social),
            "budgetconscious" | "budget_conscious" => Ok(Self::BudgetConscious),
            _ => Err(ProfileError::UnknownTrait(s.to_owned())),
        }
    }
}

/// Errors raised while validating a traveler profile.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProfileError {
    /// The budget range is not one of `budget`, `moderate` or `luxury`.
    #[error("unknown budget range '{0}'")]
    UnknownBudgetRange(String),
    /// The travel style is not a recognised variant.
    #[error("unknown travel style '{0}'")]
    UnknownTravelStyle(String),
    /// A personality trait name is not recognised.
    #[error("unknown personality trait '{0}'")]
    UnknownTrait(String),
    /// A personality weight was non-finite or outside `0.0..=1.0`.
    #[error("personality trait {personality_trait} has weight {weight}, expected 0.0..=1.0")]
    InvalidTraitWeight {
        /// Trait carrying the bad weight.
        personality_trait: PersonalityTrait,
        /// The rejected weight.
        weight: f32,
    },
}

/// A validated traveler profile.
///
/// Interests are stored lowercase. Personality weights lie in `0.0..=1.0`.
///
/// # Examples
/// ```
/// use travelverse_core::{BudgetRange, PersonalityTrait, TravelStyle, TravelerProfile};
///
/// let profile = TravelerProfile::new(BudgetRange::Moderate, TravelStyle::Cultural)
///     .with_interest("Culture")
///     .with_trait(PersonalityTrait::Cultural, 0.9);
/// assert!(profile.has_interest("culture"));
/// assert_eq!(profile.trait_weight(PersonalityTrait::Cultural), Some(0.9));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTravelerProfile")]
pub struct TravelerProfile {
    interests: BTreeSet<String>,
    budget_range: BudgetRange,
    travel_style: TravelStyle,
    personality: BTreeMap<PersonalityTrait, f32>,
}

impl TravelerProfile {
    /// Construct a profile with no interests and no personality traits.
    pub const fn new(budget_range: BudgetRange, travel_style: TravelStyle) -> Self {
        Self {
            interests: BTreeSet::new(),
            budget_range,
            travel_style,
            personality: BTreeMap::new(),
        }
    }

    /// Add an interest while returning `self` for chaining.
    pub fn with_interest(mut self, interest: impl AsRef<str>) -> Self {
        self.interests.insert(normalise_interest(interest.as_ref()));
        self
    }

    /// Add a personality trait while returning `self` for chaining.
    ///
    /// Values are clamped into `0.0..=1.0`; non-finite values become `0.0`.
    pub fn with_trait(mut self, personality_trait: PersonalityTrait, weight: f32) -> Self {
        let clamped = if weight.is_finite() {
            weight.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.personality.insert(personality_trait, clamped);
        self
    }

    /// Report whether the traveler declared `interest` (case-insensitive).
    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.contains(&normalise_interest(interest))
    }

    /// Declared interests in lexical order.
    pub const fn interests(&self) -> &BTreeSet<String> {
        &self.interests
    }

    /// The traveler's budget bracket.
    pub const fn budget_range(&self) -> BudgetRange {
        self.budget_range
    }

    /// The traveler's travel style.
    pub const fn travel_style(&self) -> TravelStyle {
        self.travel_style
    }

    /// Return the weight for a personality trait, if present.
    pub fn trait_weight(&self, personality_trait: PersonalityTrait) -> Option<f32> {
        self.personality.get(&personality_trait).copied()
    }

    /// Report whether any personality traits were supplied.
    pub fn has_personality(&self) -> bool {
        !self.personality.is_empty()
    }
}

fn normalise_interest(interest: &str) -> String {
    interest.trim().to_lowercase()
}

/// Profile payload as decoded from JSON, before validation.
///
/// # Examples
/// ```
/// use travelverse_core::{ProfileError, RawTravelerProfile, TravelerProfile};
///
/// let raw = RawTravelerProfile {
///     interests: vec!["culture".into()],
///     budget_range: "moderate".into(),
///     travel_style: "space-tourism".into(),
///     ..RawTravelerProfile::default()
/// };
/// let err = TravelerProfile::try_from(raw).unwrap_err();
/// assert!(matches!(err, ProfileError::UnknownTravelStyle(_)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTravelerProfile {
    /// Free-form interest tags.
    #[serde(default)]
    pub interests: Vec<String>,
    /// Budget bracket name.
    pub budget_range: String,
    /// Travel style name.
    pub travel_style: String,
    /// Personality weights keyed by trait name.
    #[serde(default)]
    pub personality: BTreeMap<String, f32>,
}

impl TryFrom<RawTravelerProfile> for TravelerProfile {
    type Error = ProfileError;

    fn try_from(raw: RawTravelerProfile) -> Result<Self, Self::Error> {
        let budget_range = raw.budget_range.parse::<BudgetRange>()?;
        let travel_style = raw.travel_style.parse::<TravelStyle>()?;
        let mut personality = BTreeMap::new();
        for (name, weight) in raw.personality {
            let personality_trait = name.parse::<PersonalityTrait>()?;
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(ProfileError::InvalidTraitWeight {
                    personality_trait,
                    weight,
                });
            }
            personality.insert(personality_trait, weight);
        }
        let interests = raw
            .interests
            .iter()
            .map(|interest| normalise_interest(interest))
            .filter(|interest| !interest.is_empty())
            .collect();
        Ok(Self {
            interests,
            budget_range,
            travel_style,
            personality,
        })
    }
}

impl From<TravelerProfile> for RawTravelerProfile {
    fn from(profile: TravelerProfile) -> Self {
        Self {
            interests: profile.interests.into_iter().collect(),
            budget_range: profile.budget_range.as_str().to_owned(),
            travel_style: profile.travel_style.as_str().to_owned(),
            personality: profile
                .personality
                .into_iter()
                .map(|(personality_trait, weight)| (personality_trait.as_str().to_owned(), weight))
                .collect(),
        }
    }
}
