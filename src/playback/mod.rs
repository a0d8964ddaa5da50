//! Playback of generated gestures
//!
//! Implements the pacing loop that feeds a `PointerSink` one sample at a
//! time, subtracting each move's own latency from the scheduled pause.

pub mod player;
pub mod sink;

pub use player::{play_gesture, play_gestures, PlaybackError, PlaybackReport};
pub use sink::{MouseButton, PointerSink, SinkError, SinkResult};
