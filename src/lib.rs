//! Facade crate for the TravelVerse recommendation engine.
//!
//! This crate re-exports the core domain types and exposes the scorer and
//! swarm optimizer behind feature flags, both enabled by default.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use travelverse_core::profile;
pub use travelverse_core::scoring;
pub use travelverse_core::{
    Accommodation, AlternativeSpot, BudgetRange, ChaChaSource, Coordinates, CostRange, Culture,
    Destination, DestinationScorer, Difficulty, GuideCategory, GuideError, GuideScorer,
    OptimizationResult, OptimizeError, OptimizeRequest, Optimizer, PersonalityTrait, PhotoGuide,
    ProfileError, RandomSource, RawPhotoGuide, RawTravelerProfile, RngSource, ScoredDestination,
    ScoredPhotoGuide, TravelInfo, TravelStyle, TravelerProfile, Velocity,
};

#[cfg(feature = "scorer")]
#[cfg_attr(docsrs, doc(cfg(feature = "scorer")))]
pub use travelverse_scorer::{
    GuideScoringError, Insights, MatchedRule, RecommendationConfig, RecommendationError,
    RecommendationSet, Recommender, RelevanceScorer, ViralPotentialScorer, justify,
    matched_rules, personality_match, rank_destinations, rank_guides, rank_raw_guides,
    viral_potential,
};

#[cfg(feature = "swarm")]
#[cfg_attr(docsrs, doc(cfg(feature = "swarm")))]
pub use travelverse_swarm::{SwarmConfig, SwarmOptimizer, SwarmParticle, optimize, sample_fitness};
