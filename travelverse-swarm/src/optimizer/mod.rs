//! `SwarmOptimizer` implementation of the [`Optimizer`] trait.
//!
//! After `n` rounds a particle sits at `position + n * velocity`. The
//! velocity is fixed at spawn time, so particles never converge on each
//! other.

use travelverse_core::scoring::weighted_sum;
use travelverse_core::{
    AlternativeSpot, Coordinates, OptimizationResult, OptimizeError, OptimizeRequest, Optimizer,
    RandomSource,
};

use crate::particle::SwarmParticle;

const ALTERNATIVE_FITNESS_FLOOR: f64 = 0.7;
const ALTERNATIVE_FITNESS_SPREAD: f64 = 0.2;
/// Alternatives pass the crowd check when their draw exceeds this.
const CROWD_THRESHOLD: f64 = 0.3;
const CONFIDENCE_FLOOR: f64 = 0.85;
const CONFIDENCE_SPREAD: f64 = 0.12;

/// Configuration for [`SwarmOptimizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwarmConfig {
    /// Rounds to run; must be positive.
    pub iterations: u32,
    /// Number of alternative spots proposed around the best one.
    pub alternative_count: usize,
    /// Upper bound of each velocity component, in degrees per round.
    pub velocity_scale: f64,
    /// Width of the square, centred on the best spot, that alternatives are
    /// drawn from.
    pub alternative_jitter: f64,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            alternative_count: 3,
            velocity_scale: 0.001,
            alternative_jitter: 0.001,
        }
    }
}

/// Photo-spot optimizer drifting one particle per participant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SwarmOptimizer {
    config: SwarmConfig,
}

impl SwarmOptimizer {
    /// Construct an optimizer with explicit configuration.
    #[must_use]
    pub const fn new(config: SwarmConfig) -> Self {
        Self { config }
    }

    fn search(
        &self,
        participants: &[Coordinates],
        rng: &mut dyn RandomSource,
    ) -> Option<(Coordinates, f64)> {
        let mut particles: Vec<SwarmParticle> = participants
            .iter()
            .enumerate()
            .map(|(id, &position)| {
                SwarmParticle::spawn(id, position, self.config.velocity_scale, rng)
            })
            .collect();

        let mut best: Option<(Coordinates, f64)> = None;
        for round in 0..self.config.iterations {
            for particle in &mut particles {
                let fitness = particle.advance(rng);
                if best.is_none_or(|(_, best_fitness)| fitness > best_fitness) {
                    log::trace!(
                        "round {round}: particle {} improved best fitness to {fitness:.4}",
                        particle.id
                    );
                    best = Some((particle.position, fitness));
                }
            }
        }
        best
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "alternatives jitter around the best spot"
    )]
    fn alternatives(&self, best: Coordinates, rng: &mut dyn RandomSource) -> Vec<AlternativeSpot> {
        let jitter = self.config.alternative_jitter;
        (0..self.config.alternative_count)
            .map(|_| {
                let lat = best.lat + (rng.draw() - 0.5) * jitter;
                let lng = best.lng + (rng.draw() - 0.5) * jitter;
                let fitness = weighted_sum([
                    (ALTERNATIVE_FITNESS_FLOOR, 1.0),
                    (rng.draw(), ALTERNATIVE_FITNESS_SPREAD),
                ]);
                AlternativeSpot {
                    position: Coordinates::new(lat, lng).normalised(),
                    fitness,
                    crowd_validated: rng.draw() > CROWD_THRESHOLD,
                }
            })
            .collect()
    }
}

impl Optimizer for SwarmOptimizer {
    fn optimize(
        &self,
        request: &OptimizeRequest,
        rng: &mut dyn RandomSource,
    ) -> Result<OptimizationResult, OptimizeError> {
        request.validate()?;
        if self.config.iterations == 0 {
            return Err(OptimizeError::ZeroIterations);
        }
        if self.config.alternative_count == 0 {
            log::warn!("swarm optimizer configured without alternative spots");
        }

        let (best_position, best_fitness) = self
            .search(&request.participants, rng)
            .ok_or(OptimizeError::NoParticipants)?;
        let alternatives = self.alternatives(best_position, rng);
        let confidence = weighted_sum([(CONFIDENCE_FLOOR, 1.0), (rng.draw(), CONFIDENCE_SPREAD)]);

        log::debug!(
            "optimised destination {} over {} participants and {} rounds: fitness {best_fitness:.4}",
            request.destination_id,
            request.participants.len(),
            self.config.iterations
        );

        Ok(OptimizationResult {
            destination_id: request.destination_id.clone(),
            participant_count: request.participants.len(),
            iterations: self.config.iterations,
            best_position,
            best_fitness,
            alternatives,
            confidence,
        })
    }
}

/// Run a [`SwarmOptimizer`] with the given round and alternative counts.
///
/// Velocity scale and jitter keep their defaults.
///
/// # Errors
/// Returns [`OptimizeError::NoParticipants`] for an empty participant list,
/// [`OptimizeError::InvalidCoordinate`] for an unusable position and
/// [`OptimizeError::ZeroIterations`] when `iterations` is zero.
///
/// # Examples
/// ```
/// use travelverse_core::test_support::FixedSource;
/// use travelverse_core::Coordinates;
/// use travelverse_swarm::optimize;
///
/// let result = optimize("2", &[Coordinates::new(48.8584, 2.2945)], 10, 2, &mut FixedSource::new(0.5))
///     .expect("valid request");
/// assert_eq!(result.alternatives.len(), 2);
/// assert_eq!(result.iterations, 10);
/// ```
pub fn optimize(
    destination_id: &str,
    participants: &[Coordinates],
    iterations: u32,
    alternative_count: usize,
    rng: &mut dyn RandomSource,
) -> Result<OptimizationResult, OptimizeError> {
    let optimizer = SwarmOptimizer::new(SwarmConfig {
        iterations,
        alternative_count,
        ..SwarmConfig::default()
    });
    let request = OptimizeRequest {
        destination_id: destination_id.to_owned(),
        participants: participants.to_vec(),
    };
    optimizer.optimize(&request, rng)
}
