//! Diffusion History
//!
//! Bounded rolling time series of population percentages, suitable for a
//! stacked area chart. Only the most recent [`HISTORY_CAPACITY`] samples are
//! retained; the oldest is evicted first.

use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::population::Population;

/// Maximum number of retained samples
pub const HISTORY_CAPACITY: usize = 100;

/// One timestamped reading of the population split, in percent.
///
/// The three percentages always sum to 100 (up to float rounding): every
/// agent is in exactly one belief state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffusionSample {
    pub time_secs: f32,
    pub uninformed_pct: f32,
    pub believer_pct: f32,
    pub disbeliever_pct: f32,
}

impl DiffusionSample {
    /// Measure the given population snapshot at the given simulation time
    pub fn measure(population: &Population, time_secs: f32) -> Self {
        let counts = population.counts();
        let total = population.len().max(1) as f32;
        Self {
            time_secs,
            uninformed_pct: counts.uninformed as f32 / total * 100.0,
            believer_pct: counts.believers as f32 / total * 100.0,
            disbeliever_pct: counts.disbelievers as f32 / total * 100.0,
        }
    }
}

/// Resource holding the rolling sample window
#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiffusionHistory {
    samples: VecDeque<DiffusionSample>,
}

impl DiffusionHistory {
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(HISTORY_CAPACITY),
        }
    }

    /// Append a sample, evicting the oldest once the window is full
    pub fn push(&mut self, sample: DiffusionSample) {
        if self.samples.len() == HISTORY_CAPACITY {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn samples(&self) -> impl Iterator<Item = &DiffusionSample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<&DiffusionSample> {
        self.samples.back()
    }

    pub fn oldest(&self) -> Option<&DiffusionSample> {
        self.samples.front()
    }

    /// Discard all samples (used on reset)
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

/// Write the history as pretty-printed JSON chart data
pub fn write_history(history: &DiffusionHistory, path: impl AsRef<Path>) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(history)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::build_population;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_measure_percentages_sum_to_100() {
        let mut rng = SmallRng::seed_from_u64(42);
        let population = build_population(200, 2, &mut rng).unwrap();

        let sample = DiffusionSample::measure(&population, 0.0);
        assert_eq!(sample.uninformed_pct, 99.0);
        assert_eq!(sample.believer_pct, 1.0);
        assert_eq!(sample.disbeliever_pct, 0.0);

        let sum = sample.uninformed_pct + sample.believer_pct + sample.disbeliever_pct;
        assert!((sum - 100.0).abs() < 1e-3);
    }

    #[test]
    fn test_window_evicts_oldest_first() {
        let mut history = DiffusionHistory::new();
        for i in 0..150 {
            history.push(DiffusionSample {
                time_secs: i as f32,
                uninformed_pct: 100.0,
                believer_pct: 0.0,
                disbeliever_pct: 0.0,
            });
        }

        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history.oldest().map(|s| s.time_secs), Some(50.0));
        assert_eq!(history.latest().map(|s| s.time_secs), Some(149.0));
    }

    #[test]
    fn test_history_serialization_round_trip() {
        let mut history = DiffusionHistory::new();
        history.push(DiffusionSample {
            time_secs: 0.05,
            uninformed_pct: 98.5,
            believer_pct: 1.0,
            disbeliever_pct: 0.5,
        });

        let json = serde_json::to_string_pretty(&history).unwrap();
        assert!(json.contains("believer_pct"));

        let parsed: DiffusionHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed.latest(), history.latest());
    }

    #[test]
    fn test_write_history_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut history = DiffusionHistory::new();
        history.push(DiffusionSample {
            time_secs: 0.0,
            uninformed_pct: 99.0,
            believer_pct: 1.0,
            disbeliever_pct: 0.0,
        });

        write_history(&history, &path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("uninformed_pct"));
    }
}
