//! Trajectory synthesis
//!
//! Combines the gesture path with the timing schedule: every timestamp is
//! turned into an eased progress value, the path is evaluated there, and the
//! result is rounded to device pixels.

use crate::config::TrajectoryConfig;
use crate::processing::geometry::build_path;
use crate::processing::timing::{
    build_schedule, interval_count, movement_duration_ms, progress, stationary_schedule,
};
use crate::types::{GenerationRequest, Point, Trajectory};
use rand::Rng;

/// Synthesize a trajectory for an already validated request
///
/// The first and last samples are always the rounded start and end points.
/// When both round to the same pixel the gesture collapses to two identical
/// samples spanning the zero-distance movement time.
pub fn synthesize<R: Rng + ?Sized>(
    request: &GenerationRequest,
    config: &TrajectoryConfig,
    rng: &mut R,
) -> Trajectory {
    let start_px = request.start.round();
    let end_px = request.end.round();

    if start_px == end_px {
        // Sub-pixel moves still count as zero distance
        let intervals = interval_count(movement_duration_ms(0.0, config), request.frequency);
        let timings = stationary_schedule(intervals, request.frequency);
        tracing::debug!(
            "Stationary gesture at {} ({} ms)",
            start_px,
            timings[timings.len() - 1]
        );
        return Trajectory {
            points: vec![start_px, start_px],
            timings,
        };
    }

    let distance = request.start.distance_to(request.end);
    let intervals = interval_count(movement_duration_ms(distance, config), request.frequency);

    let path = build_path(request.start.into(), request.end.into(), config, rng);
    let timings = build_schedule(
        intervals,
        request.frequency,
        request.frequency_randomizer,
        config.jitter_per_unit,
        rng,
    );

    let last_index = timings.len() - 1;
    let total_ms = timings[last_index] as f64;

    let mut points: Vec<_> = timings
        .iter()
        .enumerate()
        .map(|(i, &t)| {
            // Rounded timings can all collapse to zero at extreme frequencies
            let elapsed = if total_ms > 0.0 {
                t as f64 / total_ms
            } else {
                i as f64 / last_index as f64
            };
            Point::from(path.point_at(progress(config.velocity_profile, elapsed))).round()
        })
        .collect();

    points[0] = start_px;
    points[last_index] = end_px;

    tracing::debug!(
        "Synthesized {} samples {} -> {} over {} ms (path length {:.1}px, {} segment(s))",
        points.len(),
        start_px,
        end_px,
        timings[last_index],
        path.length(),
        path.segments().len()
    );

    Trajectory { points, timings }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VelocityProfile;
    use crate::types::{Pixel, MIN_FREQUENCY};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn request(start: (i32, i32), end: (i32, i32)) -> GenerationRequest {
        GenerationRequest::new(start, end)
    }

    #[test]
    fn test_endpoints_and_lengths() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let config = TrajectoryConfig::default();
        for _ in 0..100 {
            let start = (rng.gen_range(0..1920), rng.gen_range(0..1080));
            let end = (rng.gen_range(0..1920), rng.gen_range(0..1080));
            let trajectory = synthesize(&request(start, end), &config, &mut rng);

            assert!(trajectory.len() >= 2);
            assert_eq!(trajectory.points.len(), trajectory.timings.len());
            assert_eq!(trajectory.points[0], Pixel::from(start));
            assert_eq!(*trajectory.points.last().unwrap(), Pixel::from(end));
            assert_eq!(trajectory.timings[0], 0);
            assert!(trajectory.timings.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_fractional_endpoints_are_rounded() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let req = GenerationRequest::new((10.4, 20.6), (300.5, 99.2));
        let trajectory = synthesize(&req, &TrajectoryConfig::default(), &mut rng);
        assert_eq!(trajectory.points[0], Pixel::new(10, 21));
        assert_eq!(trajectory.end(), Some(Pixel::new(301, 99)));
    }

    #[test]
    fn test_same_seed_same_output() {
        let config = TrajectoryConfig::default();
        let req = request((200, 100), (800, 900));
        let a = synthesize(&req, &config, &mut ChaCha8Rng::seed_from_u64(8));
        let b = synthesize(&req, &config, &mut ChaCha8Rng::seed_from_u64(8));
        assert_eq!(a, b);
    }

    #[test]
    fn test_stationary_gesture() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let config = TrajectoryConfig::default();
        let trajectory = synthesize(&request((50, 60), (50, 60)), &config, &mut rng);

        assert_eq!(trajectory.points, vec![Pixel::new(50, 60), Pixel::new(50, 60)]);
        assert_eq!(trajectory.timings[0], 0);
        assert_eq!(trajectory.timings.len(), 2);
        assert_eq!(trajectory.timings[1], 120);
    }

    #[test]
    fn test_sub_pixel_move_is_stationary() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let req = GenerationRequest::new((0.4, 0.0), (-0.4, 0.0));
        let trajectory = synthesize(&req, &TrajectoryConfig::default(), &mut rng);

        assert_eq!(trajectory.points, vec![Pixel::new(0, 0), Pixel::new(0, 0)]);
        assert_eq!(trajectory.timings, vec![0, 120]);
    }

    #[test]
    fn test_lowest_frequency_gives_one_interval() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let req = request((0, 0), (500, 500)).with_frequency(MIN_FREQUENCY);
        let trajectory = synthesize(&req, &TrajectoryConfig::default(), &mut rng);

        assert_eq!(trajectory.points, vec![Pixel::new(0, 0), Pixel::new(500, 500)]);
        assert_eq!(trajectory.timings, vec![0, 1_000_000]);
    }

    #[test]
    fn test_samples_are_denser_near_the_ends() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let config = TrajectoryConfig {
            overshoot_probability: 0.0,
            velocity_profile: VelocityProfile::MinimumJerk,
            ..TrajectoryConfig::default()
        };
        let req = request((0, 0), (1500, 0)).with_frequency_randomizer(0.0);
        let trajectory = synthesize(&req, &config, &mut rng);

        let steps: Vec<f64> = trajectory
            .points
            .windows(2)
            .map(|w| Point::from(w[0]).distance_to(Point::from(w[1])))
            .collect();
        let n = steps.len();
        let mid = steps[n / 2];
        assert!(steps[0] < mid, "first step {} vs mid {}", steps[0], mid);
        assert!(steps[n - 1] < mid, "last step {} vs mid {}", steps[n - 1], mid);
    }

    #[test]
    fn test_duration_never_shrinks_with_distance() {
        let config = TrajectoryConfig::default();
        let mut prev = 0;
        for d in (0..2000).step_by(25) {
            let req = request((0, 0), (d, 0)).with_frequency_randomizer(0.0);
            let trajectory = synthesize(&req, &config, &mut ChaCha8Rng::seed_from_u64(1));
            assert!(
                trajectory.duration_ms() >= prev,
                "distance {} gave {} ms < {} ms",
                d,
                trajectory.duration_ms(),
                prev
            );
            prev = trajectory.duration_ms();
        }
    }
}
