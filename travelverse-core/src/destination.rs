//! Destinations as published by the content store, and their scored form.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::Coordinates;

/// A travel destination.
///
/// Destinations are read-only inputs to the scorers; the content store owns
/// their lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Country the destination lies in.
    pub country: String,
    /// Representative position.
    pub coordinates: Coordinates,
    /// Activities in editorial order.
    #[serde(default)]
    pub activities: Vec<String>,
    /// Cultural profile, when the content store has one.
    #[serde(default)]
    pub culture: Option<Culture>,
    /// Historical summary; empty when unknown.
    #[serde(default)]
    pub history: String,
    /// Cost and timing guidance.
    pub travel_info: TravelInfo,
    /// Available places to stay.
    #[serde(default)]
    pub accommodation: Vec<Accommodation>,
    /// Number of curated photo spots.
    #[serde(default)]
    pub photo_spot_count: u32,
}

impl Destination {
    /// Report whether any activity contains `needle`, ignoring case.
    ///
    /// # Examples
    /// ```
    /// use travelverse_core::Destination;
    ///
    /// let destination: Destination = serde_json::from_str::<Destination>(
    ///     r#"{"id":"1","name":"Taj Mahal","country":"India",
    ///         "coordinates":{"lat":27.1751,"lng":78.0421},
    ///         "travelInfo":{"averageCostRange":{"min":50,"max":150}}}"#,
    /// )
    /// .unwrap()
    /// .with_activities(["Sunrise photography", "Guided heritage walk"]);
    /// assert!(destination.has_activity_matching("PHOTOGRAPHY"));
    /// assert!(!destination.has_activity_matching("diving"));
    /// ```
    pub fn has_activity_matching(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.activities
            .iter()
            .any(|activity| activity.to_lowercase().contains(&needle))
    }

    /// Report whether any activity contains `needle` exactly as written.
    pub fn has_activity_containing(&self, needle: &str) -> bool {
        self.activities
            .iter()
            .any(|activity| activity.contains(needle))
    }

    /// Number of distinct traditions; zero without a cultural profile.
    pub fn tradition_count(&self) -> usize {
        self.culture
            .as_ref()
            .map_or(0, |culture| culture.traditions.len())
    }

    /// Report whether a historical summary is present.
    pub fn has_history(&self) -> bool {
        !self.history.trim().is_empty()
    }

    /// Replace the activity list while returning `self` for chaining.
    #[must_use]
    pub fn with_activities<I, S>(mut self, activities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.activities = activities.into_iter().map(Into::into).collect();
        self
    }
}

/// Language, currency and customs of a destination.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Culture {
    /// Main spoken language.
    pub language: String,
    /// Local currency code or name.
    pub currency: String,
    /// Distinct local traditions.
    #[serde(default)]
    pub traditions: BTreeSet<String>,
    /// Distinct recurring festivals.
    #[serde(default)]
    pub festivals: BTreeSet<String>,
}

/// Practical guidance for visiting a destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelInfo {
    /// Typical daily spend.
    pub average_cost_range: CostRange,
    /// Free-form season guidance.
    #[serde(default)]
    pub best_time_to_visit: String,
}

/// Inclusive daily cost bracket in the destination's quoted currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRange {
    /// Lower bound.
    pub min: u32,
    /// Upper bound.
    pub max: u32,
}

/// A place to stay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    /// Free-form category, e.g. `"Luxury Hotel"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Guest rating out of five.
    pub rating: f32,
}

/// A destination annotated with its relevance for one traveler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredDestination {
    /// The scored destination.
    #[serde(flatten)]
    pub destination: Destination,
    /// Relevance in `0.0..=1.0`.
    pub score: f32,
    /// Human-readable reasons for the score.
    pub justification: String,
    /// Scorer confidence in `0.0..=1.0`.
    pub confidence: f32,
}
