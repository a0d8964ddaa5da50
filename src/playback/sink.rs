//! Pointer sink trait
//!
//! Defines the interface a pointer driver (browser automation, remote
//! desktop, test recorder) implements to receive generated gestures.

use async_trait::async_trait;
use thiserror::Error;

/// Errors a pointer driver can report
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Pointer move failed: {0}")]
    MoveFailed(String),

    #[error("Pointer click failed: {0}")]
    ClickFailed(String),

    #[error("Driver disconnected")]
    Disconnected,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for pointer sink operations
pub type SinkResult<T> = Result<T, SinkError>;

/// Mouse button used for clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl std::fmt::Display for MouseButton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MouseButton::Left => write!(f, "left"),
            MouseButton::Right => write!(f, "right"),
            MouseButton::Middle => write!(f, "middle"),
        }
    }
}

/// Trait for pointer drivers
///
/// Calls arrive strictly in trajectory order; the playback loop measures the
/// latency of every `move_to` and sleeps only for what remains of the
/// scheduled interval.
#[async_trait]
pub trait PointerSink: Send {
    /// Move the pointer to the given device pixel
    async fn move_to(&mut self, x: i32, y: i32) -> SinkResult<()>;

    /// Click at the given device pixel
    async fn click(&mut self, x: i32, y: i32, button: MouseButton) -> SinkResult<()>;
}
