//! Cursory - human-like mouse trajectories.
//!
//! Given a start and an end point, this crate produces integer pointer
//! positions together with millisecond timestamps that look like a person
//! moved the mouse: a bowed path, an occasional overshoot, slow-fast-slow
//! motion and a sampling cadence that averages the requested frequency.
//!
//! ```no_run
//! use cursory::generate_trajectory;
//!
//! let trajectory = generate_trajectory((0, 0), (1080, 720)).unwrap();
//! for (point, timing) in trajectory.samples() {
//!     println!("{timing} ms -> {point}");
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod playback;
pub mod processing;
pub mod types;

pub use commands::batch::{generate_batch, ScreenBounds};
pub use commands::export::{read_batch_json, to_mact, write_batch_json, TimingStats};
pub use commands::generate::{
    generate_trajectory, generate_trajectory_with, GenerationOptions, TrajectoryGenerator,
};
pub use config::{TrajectoryConfig, VelocityProfile};
pub use error::{TrajectoryError, TrajectoryResult};
pub use types::{GeneratedGesture, GenerationRequest, Pixel, Point, Trajectory};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install a `tracing` subscriber for binaries and demos embedding the crate
///
/// Honours `RUST_LOG`; defaults to debug output for this crate. Calling it
/// more than once is harmless.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cursory=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    tracing::info!("Cursory v{} logging initialized", env!("CARGO_PKG_VERSION"));
}
