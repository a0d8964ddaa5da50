//! Value types shared by the geometry, timing and playback layers.

use crate::error::{Axis, TrajectoryError, TrajectoryResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A screen position with floating-point coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: Point) -> f64 {
        kurbo::Point::from(*self).distance(other.into())
    }

    /// Round to the nearest device pixel
    pub fn round(&self) -> Pixel {
        Pixel::new(self.x.round() as i32, self.y.round() as i32)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(f64::from(x), f64::from(y))
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Point::new(f64::from(x), f64::from(y))
    }
}

impl From<Pixel> for Point {
    fn from(pixel: Pixel) -> Self {
        Point::new(f64::from(pixel.x), f64::from(pixel.y))
    }
}

impl From<kurbo::Point> for Point {
    fn from(point: kurbo::Point) -> Self {
        Point::new(point.x, point.y)
    }
}

impl From<Point> for kurbo::Point {
    fn from(point: Point) -> Self {
        kurbo::Point::new(point.x, point.y)
    }
}

/// An integer device coordinate, as handed to a pointer driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pixel {
    pub x: i32,
    pub y: i32,
}

impl Pixel {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Pixel {
    fn from((x, y): (i32, i32)) -> Self {
        Pixel::new(x, y)
    }
}

impl fmt::Display for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A synthesized gesture: pixel samples paired one-to-one with millisecond offsets
///
/// `points` and `timings` always have the same length (at least 2), the first
/// timing is 0 and timings never decrease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    pub points: Vec<Pixel>,
    pub timings: Vec<u64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Option<Pixel> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<Pixel> {
        self.points.last().copied()
    }

    /// Total gesture duration in milliseconds
    pub fn duration_ms(&self) -> u64 {
        self.timings.last().copied().unwrap_or(0)
    }

    /// Iterate `(point, timing)` pairs in order
    pub fn samples(&self) -> impl Iterator<Item = (Pixel, u64)> + '_ {
        self.points.iter().copied().zip(self.timings.iter().copied())
    }

    /// Split into the two parallel sequences
    pub fn into_parts(self) -> (Vec<Pixel>, Vec<u64>) {
        (self.points, self.timings)
    }
}

/// A generated gesture together with the targets it was asked for
///
/// This is the record handed to plotting tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedGesture {
    pub points: Vec<Pixel>,
    pub timings: Vec<u64>,
    pub target_start: Pixel,
    pub target_end: Pixel,
}

/// Default sampling frequency in samples per second
pub const DEFAULT_FREQUENCY: f64 = 100.0;

/// Default interval jitter strength
pub const DEFAULT_FREQUENCY_RANDOMIZER: f64 = 1.0;

/// Lowest accepted sampling frequency; below it the interval overflows a `u64` of milliseconds
pub const MIN_FREQUENCY: f64 = 1e-3;

/// Highest accepted sampling frequency
pub const MAX_FREQUENCY: f64 = 10_000.0;

/// Largest accepted absolute coordinate, far beyond any real display
pub const MAX_COORDINATE: f64 = 1_000_000.0;

/// Everything needed to synthesize one gesture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub start: Point,
    pub end: Point,
    /// Average samples per second
    pub frequency: f64,
    /// Per-interval jitter strength; zero gives perfectly even spacing
    pub frequency_randomizer: f64,
}

impl GenerationRequest {
    /// Request with the default frequency and randomizer
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            frequency: DEFAULT_FREQUENCY,
            frequency_randomizer: DEFAULT_FREQUENCY_RANDOMIZER,
        }
    }

    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_frequency_randomizer(mut self, frequency_randomizer: f64) -> Self {
        self.frequency_randomizer = frequency_randomizer;
        self
    }

    /// Reject anything the synthesizer cannot honour exactly
    pub fn validate(&self) -> TrajectoryResult<()> {
        if !(MIN_FREQUENCY..=MAX_FREQUENCY).contains(&self.frequency) {
            return Err(TrajectoryError::InvalidFrequency(self.frequency));
        }
        if !self.frequency_randomizer.is_finite() || self.frequency_randomizer < 0.0 {
            return Err(TrajectoryError::InvalidRandomizer(self.frequency_randomizer));
        }
        for point in [self.start, self.end] {
            check_coordinate(Axis::X, point.x)?;
            check_coordinate(Axis::Y, point.y)?;
        }
        Ok(())
    }
}

fn check_coordinate(axis: Axis, value: f64) -> TrajectoryResult<()> {
    if value.is_finite() && value.abs() <= MAX_COORDINATE {
        Ok(())
    } else {
        Err(TrajectoryError::InvalidCoordinate { axis, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_distance() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_conversions() {
        assert_eq!(Point::from((3, -4)), Point::new(3.0, -4.0));
        assert_eq!(Point::from((7u32, 8u32)), Point::new(7.0, 8.0));
        assert_eq!(Point::from([1.5, 2.5]), Point::new(1.5, 2.5));
        assert_eq!(Point::from(Pixel::new(10, 20)), Point::new(10.0, 20.0));
    }

    #[test]
    fn test_point_rounding() {
        assert_eq!(Point::new(10.4, -2.6).round(), Pixel::new(10, -3));
        assert_eq!(Point::new(0.5, 1.49).round(), Pixel::new(1, 1));
    }

    #[test]
    fn test_kurbo_conversions() {
        let p = Point::new(12.5, -3.0);
        let k = kurbo::Point::from(p);
        assert_eq!((k.x, k.y), (12.5, -3.0));
        assert_eq!(Point::from(k), p);
    }

    #[test]
    fn test_trajectory_parts() {
        let trajectory = Trajectory {
            points: vec![Pixel::new(0, 0), Pixel::new(5, 5)],
            timings: vec![0, 10],
        };
        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.duration_ms(), 10);
        assert_eq!(trajectory.end(), Some(Pixel::new(5, 5)));

        let pairs: Vec<_> = trajectory.samples().collect();
        assert_eq!(pairs[1], (Pixel::new(5, 5), 10));

        let (points, timings) = trajectory.into_parts();
        assert_eq!(points.len(), timings.len());
    }

    #[test]
    fn test_request_defaults() {
        let request = GenerationRequest::new((0, 0), (1080, 720));
        assert_eq!(request.frequency, DEFAULT_FREQUENCY);
        assert_eq!(request.frequency_randomizer, DEFAULT_FREQUENCY_RANDOMIZER);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_request_validation() {
        let request = GenerationRequest::new((0, 0), (10, 10));

        for frequency in [
            0.0,
            -100.0,
            f64::NAN,
            f64::INFINITY,
            MAX_FREQUENCY * 2.0,
            1e-300,
            5e-324,
            MIN_FREQUENCY / 2.0,
        ] {
            let err = request.with_frequency(frequency).validate().unwrap_err();
            assert!(matches!(err, TrajectoryError::InvalidFrequency(_)));
        }
        assert!(request.with_frequency(MIN_FREQUENCY).validate().is_ok());
        assert!(request.with_frequency(MAX_FREQUENCY).validate().is_ok());

        for randomizer in [-0.5, f64::NAN] {
            let err = request
                .with_frequency_randomizer(randomizer)
                .validate()
                .unwrap_err();
            assert!(matches!(err, TrajectoryError::InvalidRandomizer(_)));
        }

        let err = GenerationRequest::new((f64::NAN, 0.0), (1.0, 1.0))
            .validate()
            .unwrap_err();
        assert!(matches!(err, TrajectoryError::InvalidCoordinate { axis: Axis::X, .. }));

        let err = GenerationRequest::new((0.0, 0.0), (1.0, -2.0e6))
            .validate()
            .unwrap_err();
        assert!(matches!(err, TrajectoryError::InvalidCoordinate { axis: Axis::Y, .. }));
    }
}
