//! Real-time playback of generated gestures into a pointer sink

use crate::commands::generate::{GenerationOptions, TrajectoryGenerator};
use crate::playback::sink::{MouseButton, PointerSink, SinkError, SinkResult};
use crate::types::{Pixel, Trajectory};
use rand::Rng;
use std::time::Duration;
use thiserror::Error;
use tokio::time::Instant;

/// What happened while replaying one gesture
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaybackReport {
    /// Number of `move_to` calls issued
    pub moves: usize,
    /// Moves whose own latency exceeded the scheduled pause
    pub late_moves: usize,
    /// Wall-clock time from first move to click
    pub elapsed: Duration,
}

/// Replay a trajectory in real time and click on its last point
///
/// Sample `i` is moved to at roughly `timings[i]` after the first move. The
/// latency of each `move_to` call is subtracted from the gap to the next
/// sample; a move that took longer than that gap is logged and playback
/// carries on without sleeping.
pub async fn play_gesture<S>(sink: &mut S, trajectory: &Trajectory) -> SinkResult<PlaybackReport>
where
    S: PointerSink + ?Sized,
{
    let started = Instant::now();
    let mut report = PlaybackReport::default();
    let mut samples = trajectory.samples().peekable();

    while let Some((point, timing)) = samples.next() {
        let move_started = Instant::now();
        sink.move_to(point.x, point.y).await?;
        let delay = move_started.elapsed();
        report.moves += 1;

        let Some(&(_, next_timing)) = samples.peek() else {
            break;
        };
        let pause = Duration::from_millis(next_timing.saturating_sub(timing));

        match pause.checked_sub(delay) {
            Some(remaining) => tokio::time::sleep(remaining).await,
            None => {
                report.late_moves += 1;
                tracing::warn!(
                    "Delay ({:.2} ms) is greater than timing pause ({} ms)",
                    delay.as_secs_f64() * 1000.0,
                    pause.as_millis()
                );
            }
        }
    }

    if let Some(end) = trajectory.end() {
        sink.click(end.x, end.y, MouseButton::Left).await?;
    }

    report.elapsed = started.elapsed();
    Ok(report)
}

/// Errors from chained gesture playback
#[derive(Error, Debug)]
pub enum PlaybackError {
    #[error("Trajectory generation failed: {0}")]
    Generation(#[from] crate::error::TrajectoryError),

    #[error("Pointer sink failed: {0}")]
    Sink(#[from] SinkError),
}

/// Move through `targets` one after another, starting at `origin`
///
/// Each gesture starts where the previous one ended and finishes with a
/// click; `settle` is waited after every click.
pub async fn play_gestures<S, R>(
    sink: &mut S,
    generator: &mut TrajectoryGenerator<R>,
    origin: Pixel,
    targets: &[Pixel],
    options: GenerationOptions,
    settle: Duration,
) -> Result<Vec<PlaybackReport>, PlaybackError>
where
    S: PointerSink + ?Sized,
    R: Rng,
{
    let mut reports = Vec::with_capacity(targets.len());
    let mut current = origin;

    for &target in targets {
        let trajectory = generator.generate_with(current, target, options)?;
        if let Some(stats) = trajectory.timing_stats() {
            tracing::info!(
                "Gesture {} -> {}: {} samples, average frequency {:.2} Hz",
                current,
                target,
                stats.samples,
                stats.average_frequency
            );
        }

        let report = play_gesture(sink, &trajectory).await?;
        if report.late_moves > 0 {
            tracing::warn!(
                "{} of {} moves exceeded their pause",
                report.late_moves,
                report.moves
            );
        }
        reports.push(report);

        tokio::time::sleep(settle).await;
        current = target;
    }

    Ok(reports)
}
