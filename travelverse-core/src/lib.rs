//! Core domain types for the TravelVerse recommendation engine.
//!
//! The crate defines the records exchanged with the host API (traveler
//! profiles, destinations, photo guides, optimisation requests), the
//! [`RandomSource`] seam every stochastic component draws from, the shared
//! scoring primitives, and the traits implemented by the scorer and swarm
//! crates.
//!
//! Raw payloads (`RawTravelerProfile`, `RawPhotoGuide`) are validated with
//! `TryFrom` so invalid enum strings surface before any scoring runs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod coordinates;
mod destination;
mod guide;
mod optimizer;
pub mod profile;
mod random;
mod scorer;
pub mod scoring;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use coordinates::{Coordinates, Velocity};
pub use destination::{Accommodation, CostRange, Culture, Destination, ScoredDestination, TravelInfo};
pub use guide::{Difficulty, GuideCategory, GuideError, PhotoGuide, RawPhotoGuide, ScoredPhotoGuide};
pub use optimizer::{AlternativeSpot, OptimizationResult, OptimizeError, OptimizeRequest, Optimizer};
pub use profile::{
    BudgetRange, PersonalityTrait, ProfileError, RawTravelerProfile, TravelStyle, TravelerProfile,
};
pub use random::{ChaChaSource, RandomSource, RngSource};
pub use scorer::{DestinationScorer, GuideScorer};
