//! Swarm search for group photo spots.
//!
//! This crate provides [`SwarmOptimizer`], the default implementation of the
//! [`Optimizer`](travelverse_core::Optimizer) trait. Each participant seeds one
//! [`SwarmParticle`] that drifts by a fixed velocity every round; the best
//! fitness observed across all rounds wins, and a handful of jittered
//! alternatives are proposed around it.
//!
//! The drift is linear and the fitness is sampled from the injected
//! [`RandomSource`](travelverse_core::RandomSource) rather than derived from
//! the position, so the search is a stand-in for a full particle swarm. With
//! every draw fixed at `0.5`, one round moves a particle by `0.0005` degrees
//! on each axis and yields a fitness of `0.775`.
//!
//! # Examples
//!
//! ```
//! use travelverse_core::test_support::FixedSource;
//! use travelverse_core::{Coordinates, OptimizeRequest, Optimizer};
//! use travelverse_swarm::{SwarmConfig, SwarmOptimizer};
//!
//! let optimizer = SwarmOptimizer::new(SwarmConfig {
//!     iterations: 1,
//!     ..SwarmConfig::default()
//! });
//! let request = OptimizeRequest {
//!     destination_id: "1".into(),
//!     participants: vec![Coordinates::new(27.1738, 78.0421)],
//! };
//! let result = optimizer
//!     .optimize(&request, &mut FixedSource::new(0.5))
//!     .expect("valid request");
//! assert!((result.best_position.lat - 27.1743).abs() < 1e-9);
//! assert!((result.best_fitness - 0.775).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod optimizer;
mod particle;

pub use optimizer::{SwarmConfig, SwarmOptimizer, optimize};
pub use particle::{SwarmParticle, sample_fitness};
