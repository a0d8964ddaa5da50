//! Public entry points for trajectory generation
//!
//! `generate_trajectory` is the one-call API. `TrajectoryGenerator` is the
//! same thing with an explicit random source and config, which is what tests
//! and batch tools use to get reproducible output.

use crate::commands::batch::ScreenBounds;
use crate::config::TrajectoryConfig;
use crate::error::TrajectoryResult;
use crate::processing::synthesize;
use crate::types::{
    GenerationRequest, Pixel, Point, Trajectory, DEFAULT_FREQUENCY, DEFAULT_FREQUENCY_RANDOMIZER,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Caller-facing knobs for a single gesture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    pub frequency: f64,
    pub frequency_randomizer: f64,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            frequency: DEFAULT_FREQUENCY,
            frequency_randomizer: DEFAULT_FREQUENCY_RANDOMIZER,
        }
    }
}

impl GenerationOptions {
    pub fn frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn frequency_randomizer(mut self, frequency_randomizer: f64) -> Self {
        self.frequency_randomizer = frequency_randomizer;
        self
    }

    fn request(&self, start: Point, end: Point) -> GenerationRequest {
        GenerationRequest::new(start, end)
            .with_frequency(self.frequency)
            .with_frequency_randomizer(self.frequency_randomizer)
    }
}

/// Trajectory generator with an owned random source
pub struct TrajectoryGenerator<R = ChaCha8Rng> {
    rng: R,
    config: TrajectoryConfig,
}

impl TrajectoryGenerator<ChaCha8Rng> {
    /// Generator seeded from OS entropy
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Deterministic generator; the same seed always yields the same gestures
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for TrajectoryGenerator<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TrajectoryGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            config: TrajectoryConfig::default(),
        }
    }

    /// Replace the tunables, rejecting an invalid config
    pub fn with_config(mut self, config: TrajectoryConfig) -> TrajectoryResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &TrajectoryConfig {
        &self.config
    }

    /// Generate a gesture with the default frequency and randomizer
    pub fn generate(
        &mut self,
        start: impl Into<Point>,
        end: impl Into<Point>,
    ) -> TrajectoryResult<Trajectory> {
        self.generate_with(start, end, GenerationOptions::default())
    }

    pub fn generate_with(
        &mut self,
        start: impl Into<Point>,
        end: impl Into<Point>,
        options: GenerationOptions,
    ) -> TrajectoryResult<Trajectory> {
        let request = options.request(start.into(), end.into());
        self.generate_request(&request)
    }

    /// Validate a request and synthesize it; nothing is produced on error
    pub fn generate_request(&mut self, request: &GenerationRequest) -> TrajectoryResult<Trajectory> {
        request.validate()?;
        Ok(synthesize(request, &self.config, &mut self.rng))
    }

    /// Draw a random pixel inside `bounds` from this generator's random source
    pub fn random_pixel(&mut self, bounds: ScreenBounds) -> Pixel {
        bounds.random_pixel(&mut self.rng)
    }
}

/// Generate a human-like trajectory from `start` to `end`
///
/// Uses 100 Hz sampling with a small amount of interval jitter.
pub fn generate_trajectory(
    start: impl Into<Point>,
    end: impl Into<Point>,
) -> TrajectoryResult<Trajectory> {
    TrajectoryGenerator::new().generate(start, end)
}

/// Generate a trajectory with explicit frequency and randomizer
pub fn generate_trajectory_with(
    start: impl Into<Point>,
    end: impl Into<Point>,
    options: GenerationOptions,
) -> TrajectoryResult<Trajectory> {
    TrajectoryGenerator::new().generate_with(start, end, options)
}
