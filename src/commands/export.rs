//! Timing statistics and serialisation of generated gestures

use crate::types::{GeneratedGesture, Trajectory};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::path::Path;

/// Summary of a timing schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingStats {
    pub samples: usize,
    pub duration_ms: u64,
    pub mean_interval_ms: f64,
    pub min_interval_ms: u64,
    pub max_interval_ms: u64,
    /// `1000 / (last - first) * samples`, the figure playback scripts report
    pub average_frequency: f64,
}

impl TimingStats {
    /// Compute statistics; `None` when there are fewer than two samples
    pub fn from_timings(timings: &[u64]) -> Option<Self> {
        let (first, last) = (*timings.first()?, *timings.last()?);
        if timings.len() < 2 {
            return None;
        }

        let deltas = timings.windows(2).map(|w| w[1].saturating_sub(w[0]));
        let min_interval_ms = deltas.clone().min().unwrap_or(0);
        let max_interval_ms = deltas.max().unwrap_or(0);
        let duration_ms = last.saturating_sub(first);
        let intervals = (timings.len() - 1) as f64;

        let average_frequency = if duration_ms > 0 {
            1000.0 / duration_ms as f64 * timings.len() as f64
        } else {
            f64::INFINITY
        };

        Some(Self {
            samples: timings.len(),
            duration_ms,
            mean_interval_ms: duration_ms as f64 / intervals,
            min_interval_ms,
            max_interval_ms,
            average_frequency,
        })
    }
}

impl Trajectory {
    pub fn timing_stats(&self) -> Option<TimingStats> {
        TimingStats::from_timings(&self.timings)
    }
}

/// Encode a trajectory as `idx,move,timing,x,y;` records
pub fn to_mact(trajectory: &Trajectory) -> String {
    let mut out = String::with_capacity(trajectory.len() * 20);
    for (idx, (point, timing)) in trajectory.samples().enumerate() {
        // Writing to a String cannot fail
        let _ = write!(out, "{},move,{},{},{};", idx, timing, point.x, point.y);
    }
    out
}

/// Write a batch of gestures as pretty-printed JSON
pub fn write_batch_json(path: impl AsRef<Path>, batch: &[GeneratedGesture]) -> anyhow::Result<()> {
    let path = path.as_ref();
    let data = serde_json::to_vec_pretty(batch).context("Failed to serialize gesture batch")?;
    std::fs::write(path, data)
        .with_context(|| format!("Failed to write gesture batch to {}", path.display()))?;

    tracing::info!("Wrote {} gestures to {}", batch.len(), path.display());
    Ok(())
}

/// Read a batch previously written by [`write_batch_json`]
pub fn read_batch_json(path: impl AsRef<Path>) -> anyhow::Result<Vec<GeneratedGesture>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read gesture batch from {}", path.display()))?;
    let batch = serde_json::from_str(&content).context("Failed to parse gesture batch")?;
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::batch::{generate_batch, ScreenBounds};
    use crate::commands::generate::{GenerationOptions, TrajectoryGenerator};
    use crate::types::Pixel;

    #[test]
    fn test_stats_uniform() {
        let timings: Vec<u64> = (0..=50).map(|i| i * 10).collect();
        let stats = TimingStats::from_timings(&timings).unwrap();
        assert_eq!(stats.samples, 51);
        assert_eq!(stats.duration_ms, 500);
        assert_eq!(stats.min_interval_ms, 10);
        assert_eq!(stats.max_interval_ms, 10);
        assert_eq!(stats.mean_interval_ms, 10.0);
        assert!((stats.average_frequency - 102.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_edge_cases() {
        assert!(TimingStats::from_timings(&[]).is_none());
        assert!(TimingStats::from_timings(&[0]).is_none());

        let stats = TimingStats::from_timings(&[0, 0]).unwrap();
        assert!(stats.average_frequency.is_infinite());
    }

    #[test]
    fn test_mact_format() {
        let trajectory = Trajectory {
            points: vec![Pixel::new(1, 2), Pixel::new(3, 4)],
            timings: vec![0, 10],
        };
        assert_eq!(to_mact(&trajectory), "0,move,0,1,2;1,move,10,3,4;");
    }

    #[test]
    fn test_batch_json_round_trip() {
        let mut generator = TrajectoryGenerator::seeded(12);
        let batch = generate_batch(&mut generator, ScreenBounds::default(), 3, GenerationOptions::default())
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gestures.json");
        write_batch_json(&path, &batch).unwrap();

        let loaded = read_batch_json(&path).unwrap();
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[1].points, batch[1].points);
        assert_eq!(loaded[2].target_end, batch[2].target_end);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("targetStart"));
    }

    #[test]
    fn test_read_missing_batch_has_context() {
        let err = read_batch_json("/nonexistent/gestures.json").unwrap_err();
        assert!(err.to_string().contains("Failed to read gesture batch"));
    }
}
