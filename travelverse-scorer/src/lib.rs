//! Scoring for TravelVerse destinations and photo guides.
//!
//! The crate provides three layers:
//! - **Destination relevance**: [`RelevanceScorer`] applies fixed rule
//!   bonuses for interests, budget and travel style, perturbs the result with
//!   injected noise and explains the match in a short sentence. It implements
//!   [`DestinationScorer`](travelverse_core::DestinationScorer).
//! - **Viral potential**: [`ViralPotentialScorer`] rates photo guides by
//!   category, difficulty and image count without any randomness.
//! - **Ranking and recommendation**: [`rank_destinations`] and
//!   [`rank_guides`] sort best first with ties kept in input order, and
//!   [`Recommender`] builds a [`RecommendationSet`] with a personality match
//!   and travel insights.
//!
//! # Examples
//!
//! ```
//! use travelverse_core::test_support::{FixedSource, sample_destination};
//! use travelverse_core::{BudgetRange, TravelStyle, TravelerProfile};
//! use travelverse_scorer::{RecommendationConfig, Recommender, RelevanceScorer};
//!
//! let recommender = Recommender::new(RelevanceScorer::new(), RecommendationConfig::default());
//! let profile = TravelerProfile::new(BudgetRange::Moderate, TravelStyle::Balanced);
//! let set = recommender
//!     .recommend(&profile, &[sample_destination("1", "Lisbon")], &mut FixedSource::new(0.5))
//!     .expect("one candidate");
//! assert_eq!(set.recommendations.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod ranking;
mod recommendation;
mod relevance;
mod viral;

pub use error::{GuideScoringError, RecommendationError};
pub use ranking::{rank_destinations, rank_guides, rank_raw_guides};
pub use recommendation::{
    Insights, RecommendationConfig, RecommendationSet, Recommender, personality_match,
};
pub use relevance::{MatchedRule, RelevanceScorer, justify, matched_rules};
pub use viral::{ViralPotentialScorer, viral_potential};
