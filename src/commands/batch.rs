//! Batch generation for plotting and offline inspection

use crate::commands::generate::{GenerationOptions, TrajectoryGenerator};
use crate::error::TrajectoryResult;
use crate::types::{GeneratedGesture, Pixel};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Screen area that random targets are drawn from, inclusive of both edges
///
/// Sides are `u16` so every position inside converts losslessly to a `Pixel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: u16,
    pub height: u16,
}

impl ScreenBounds {
    pub const FULL_HD: ScreenBounds = ScreenBounds {
        width: 1920,
        height: 1080,
    };

    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Uniformly random pixel inside the bounds
    pub fn random_pixel<R: Rng + ?Sized>(&self, rng: &mut R) -> Pixel {
        Pixel::new(
            i32::from(rng.gen_range(0..=self.width)),
            i32::from(rng.gen_range(0..=self.height)),
        )
    }

    pub fn contains(&self, pixel: Pixel) -> bool {
        let inside = |value: i32, side: u16| u16::try_from(value).map_or(false, |v| v <= side);
        inside(pixel.x, self.width) && inside(pixel.y, self.height)
    }
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self::FULL_HD
    }
}

/// Generate `count` gestures between random points inside `bounds`
///
/// Start and end targets are drawn from the generator's own random source,
/// so a seeded generator yields the same batch every time.
pub fn generate_batch<R: Rng>(
    generator: &mut TrajectoryGenerator<R>,
    bounds: ScreenBounds,
    count: usize,
    options: GenerationOptions,
) -> TrajectoryResult<Vec<GeneratedGesture>> {
    let started = Instant::now();
    let mut batch = Vec::with_capacity(count);

    for _ in 0..count {
        let target_start = generator.random_pixel(bounds);
        let target_end = generator.random_pixel(bounds);
        let trajectory = generator.generate_with(target_start, target_end, options)?;
        let (points, timings) = trajectory.into_parts();
        batch.push(GeneratedGesture {
            points,
            timings,
            target_start,
            target_end,
        });
    }

    let elapsed = started.elapsed();
    tracing::info!(
        "Generated {} gestures in {:?} (average {:.3} ms)",
        count,
        elapsed,
        average_ms(elapsed, count)
    );

    Ok(batch)
}

fn average_ms(elapsed: Duration, count: usize) -> f64 {
    elapsed.as_secs_f64() * 1000.0 / count.max(1) as f64
}
