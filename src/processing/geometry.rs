//! Path geometry for a single pointer gesture
//!
//! A gesture is one or two cubic Bézier segments: the main bowed stroke from
//! the start point and, when the hand overshoots, a short corrective stroke
//! back onto the target. The path is evaluated by normalised arc length so
//! that the timing layer alone decides how fast the pointer travels.

use crate::config::TrajectoryConfig;
use kurbo::{CubicBez, ParamCurve, ParamCurveArclen, Point, Vec2};
use rand::Rng;

/// Arc-length accuracy in pixels, for both measuring and inverting
const ARCLEN_ACCURACY: f64 = 1e-3;

/// Straight cubic with control points at its thirds
pub fn line_segment(from: Point, to: Point) -> CubicBez {
    CubicBez::new(from, from.lerp(to, 1.0 / 3.0), from.lerp(to, 2.0 / 3.0), to)
}

/// Continuous gesture path `C(u)` for `u ∈ [0, 1]` by arc-length fraction
#[derive(Debug, Clone)]
pub struct GesturePath {
    start: Point,
    end: Point,
    segments: Vec<CubicBez>,
    lengths: Vec<f64>,
    total_length: f64,
}

impl GesturePath {
    /// Build a path through the given segments, which must be joined end to start
    pub fn from_segments(segments: Vec<CubicBez>) -> Self {
        let start = segments.first().map(|s| s.p0).unwrap_or(Point::ZERO);
        let end = segments.last().map(|s| s.p3).unwrap_or(start);
        let lengths: Vec<f64> = segments.iter().map(|s| s.arclen(ARCLEN_ACCURACY)).collect();
        let total_length = lengths.iter().sum();

        Self {
            start,
            end,
            segments,
            lengths,
            total_length,
        }
    }

    /// A path that never leaves `point`
    pub fn stationary(point: Point) -> Self {
        Self {
            start: point,
            end: point,
            segments: vec![line_segment(point, point)],
            lengths: vec![0.0],
            total_length: 0.0,
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn segments(&self) -> &[CubicBez] {
        &self.segments
    }

    /// Length of the path in pixels
    pub fn length(&self) -> f64 {
        self.total_length
    }

    /// Point at arc-length fraction `u`; exact at both ends
    pub fn point_at(&self, u: f64) -> Point {
        if u <= 0.0 || self.total_length <= 0.0 {
            return self.start;
        }
        if u >= 1.0 {
            return self.end;
        }

        let mut remaining = u * self.total_length;
        let last = self.segments.len() - 1;
        for (index, (segment, &length)) in self.segments.iter().zip(&self.lengths).enumerate() {
            if remaining <= length || index == last {
                let t = if length > 0.0 {
                    segment.inv_arclen(remaining.min(length), ARCLEN_ACCURACY)
                } else {
                    1.0
                };
                return segment.eval(t);
            }
            remaining -= length;
        }
        self.end
    }
}

/// Build a human-looking path from `start` to `end`
///
/// The main stroke bows to one side by a random fraction of the distance
/// (bounded by `config.curvature`). With `config.overshoot_probability` the
/// stroke lands past the target and a corrective segment settles back.
pub fn build_path<R: Rng + ?Sized>(
    start: Point,
    end: Point,
    config: &TrajectoryConfig,
    rng: &mut R,
) -> GesturePath {
    let chord = end - start;
    let distance = chord.hypot();
    if distance <= f64::EPSILON {
        return GesturePath::stationary(start);
    }

    let direction = chord / distance;
    let normal = Vec2::new(-direction.y, direction.x);
    let side = if rng.gen::<bool>() { 1.0 } else { -1.0 };

    let overshoot = distance >= config.overshoot_min_distance
        && rng.gen_bool(config.overshoot_probability);

    let main_end = if overshoot {
        let (lo, hi) = config.overshoot_extent;
        let along = distance * rng.gen_range(lo..=hi);
        let lateral = distance * rng.gen_range(-0.01..=0.01);
        end + direction * along + normal * lateral
    } else {
        end
    };

    let bow = distance * rng.gen_range(config.min_curvature..=config.curvature) * side;
    let c1 = start.lerp(main_end, rng.gen_range(0.2..=0.4)) + normal * (bow * rng.gen_range(0.6..=1.0));
    let c2 = start.lerp(main_end, rng.gen_range(0.6..=0.8)) + normal * (bow * rng.gen_range(0.4..=0.9));
    let mut segments = vec![CubicBez::new(start, c1, c2, main_end)];

    if overshoot {
        let back = main_end.distance(end);
        let wobble = back * rng.gen_range(-0.3..=0.3);
        let k1 = main_end.lerp(end, 1.0 / 3.0) + normal * wobble;
        let k2 = main_end.lerp(end, 2.0 / 3.0) + normal * (wobble * 0.5);
        segments.push(CubicBez::new(main_end, k1, k2, end));
    }

    tracing::trace!(
        "Built path {:?} -> {:?} (distance={:.1}, overshoot={}, bow={:.1})",
        start,
        end,
        distance,
        overshoot,
        bow
    );

    GesturePath::from_segments(segments)
}
