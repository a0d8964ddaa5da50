//! Processing module for gesture synthesis
//!
//! This module contains the path geometry, the movement timing model and the
//! synthesizer that samples one against the other.

pub mod geometry;
pub mod timing;
pub mod trajectory;

pub use geometry::{build_path, line_segment, GesturePath};
pub use timing::{build_schedule, movement_duration_ms, progress};
pub use trajectory::synthesize;
