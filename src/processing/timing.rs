//! Movement timing: how long a gesture takes, how many samples it gets,
//! when each sample fires, and how far along the path each sample sits.

use crate::config::{TrajectoryConfig, VelocityProfile};
use rand::Rng;
use std::f64::consts::PI;

/// Estimated movement time for a straight-line distance, in milliseconds
///
/// Fitts's-law shape: `a + b * log2(1 + D / W)`. Never decreases as the
/// distance grows, with diminishing returns for long moves.
pub fn movement_duration_ms(distance: f64, config: &TrajectoryConfig) -> f64 {
    let difficulty = (1.0 + distance.max(0.0) / config.target_width).log2();
    config.base_duration_ms + config.duration_per_bit_ms * difficulty
}

/// Nominal milliseconds between two samples
pub fn nominal_interval_ms(frequency: f64) -> f64 {
    1000.0 / frequency
}

/// Number of sample intervals for a movement; always at least one
pub fn interval_count(duration_ms: f64, frequency: f64) -> usize {
    let intervals = (duration_ms * frequency / 1000.0).round();
    if intervals.is_finite() && intervals >= 1.0 {
        intervals as usize
    } else {
        1
    }
}

/// Build `intervals + 1` cumulative millisecond timestamps starting at 0
///
/// Each interval is the nominal `1000 / frequency` scaled by `1 + s·u`, with
/// `u` uniform in `[-1, 1]` and `s = min(randomizer * jitter_per_unit, 1)`.
/// The jittered intervals are rescaled so they sum to exactly
/// `intervals * 1000 / frequency`. A randomizer of zero draws nothing from
/// `rng` and yields perfectly even spacing.
pub fn build_schedule<R: Rng + ?Sized>(
    intervals: usize,
    frequency: f64,
    randomizer: f64,
    jitter_per_unit: f64,
    rng: &mut R,
) -> Vec<u64> {
    let base = nominal_interval_ms(frequency);
    let spread = (randomizer * jitter_per_unit).min(1.0);

    let mut gaps = vec![base; intervals];
    if spread > 0.0 {
        for gap in gaps.iter_mut() {
            *gap *= 1.0 + spread * rng.gen_range(-1.0..=1.0);
        }
        let sum: f64 = gaps.iter().sum();
        if sum > 0.0 {
            let scale = base * intervals as f64 / sum;
            gaps.iter_mut().for_each(|gap| *gap *= scale);
        } else {
            gaps.fill(base);
        }
    }

    let mut timings = Vec::with_capacity(intervals + 1);
    timings.push(0u64);
    let mut elapsed = 0.0;
    let mut last = 0u64;
    for gap in gaps {
        elapsed += gap;
        last = (elapsed.round() as u64).max(last);
        timings.push(last);
    }
    timings
}

/// Two-sample schedule for a gesture that does not move
pub fn stationary_schedule(intervals: usize, frequency: f64) -> Vec<u64> {
    let duration = (intervals.max(1) as f64 * nominal_interval_ms(frequency)).round() as u64;
    vec![0, duration]
}

/// Map elapsed-time fraction `s` to path-progress fraction
///
/// Every profile except `Linear` starts and ends with zero velocity, so
/// samples bunch up near both ends of the path.
pub fn progress(profile: VelocityProfile, s: f64) -> f64 {
    let s = s.clamp(0.0, 1.0);
    match profile {
        VelocityProfile::MinimumJerk => s * s * s * (10.0 - 15.0 * s + 6.0 * s * s),
        VelocityProfile::Cosine => 0.5 - 0.5 * (PI * s).cos(),
        VelocityProfile::Cubic => {
            if s < 0.5 {
                4.0 * s * s * s
            } else {
                1.0 - (-2.0 * s + 2.0).powi(3) / 2.0
            }
        }
        VelocityProfile::Linear => s,
    }
}
