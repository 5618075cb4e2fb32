//! Particles and the sampled photo-spot fitness.

use travelverse_core::scoring::weighted_sum;
use travelverse_core::{Coordinates, RandomSource, Velocity};

const LIGHTING_WEIGHT: f64 = 0.3;
const ACCESSIBILITY_WEIGHT: f64 = 0.2;
const AESTHETIC_WEIGHT: f64 = 0.4;
const CROWD_WEIGHT: f64 = -0.1;

/// One candidate position tracked during a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwarmParticle {
    /// Index of the participant that seeded the particle.
    pub id: usize,
    /// Current position.
    pub position: Coordinates,
    /// Per-round displacement.
    pub velocity: Velocity,
    /// Fitness at the current position; zero until the first round.
    pub fitness: f64,
}

impl SwarmParticle {
    /// Seed a particle at `position` with a velocity drawn from `rng`.
    ///
    /// Takes two draws, latitude first, each scaled by `velocity_scale`.
    #[expect(
        clippy::float_arithmetic,
        reason = "velocity components scale uniform draws"
    )]
    pub fn spawn(
        id: usize,
        position: Coordinates,
        velocity_scale: f64,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let d_lat = rng.draw() * velocity_scale;
        let d_lng = rng.draw() * velocity_scale;
        Self {
            id,
            position,
            velocity: Velocity { d_lat, d_lng },
            fitness: 0.0,
        }
    }

    /// Drift one round and resample the fitness, returning it.
    pub fn advance(&mut self, rng: &mut dyn RandomSource) -> f64 {
        self.position = self.position.drifted(self.velocity);
        self.fitness = sample_fitness(rng);
        self.fitness
    }
}

/// Sample a photo-spot fitness in `0.65..=0.9` from four draws.
///
/// Draws are taken in the order lighting, accessibility, crowd penalty,
/// aesthetic and combined as
/// `0.3 * lighting + 0.2 * accessibility + 0.4 * aesthetic - 0.1 * crowd`.
///
/// # Examples
/// ```
/// use travelverse_core::test_support::FixedSource;
/// use travelverse_swarm::sample_fitness;
///
/// let fitness = sample_fitness(&mut FixedSource::new(0.5));
/// assert!((fitness - 0.775).abs() < 1e-12);
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "component scores scale uniform draws into their bands"
)]
pub fn sample_fitness(rng: &mut dyn RandomSource) -> f64 {
    let lighting = 0.8 + 0.2 * rng.draw();
    let accessibility = 0.7 + 0.3 * rng.draw();
    let crowd_penalty = 0.3 * rng.draw();
    let aesthetic = 0.75 + 0.25 * rng.draw();
    weighted_sum([
        (lighting, LIGHTING_WEIGHT),
        (accessibility, ACCESSIBILITY_WEIGHT),
        (aesthetic, AESTHETIC_WEIGHT),
        (crowd_penalty, CROWD_WEIGHT),
    ])
}
