use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use crate::config::constants::MAX_TIMER_SAMPLES;
use crate::structs::metrics_summary::{MetricsSummary, TimerStats};

#[derive(Default)]
struct MetricsState {
    counters: BTreeMap<String, u64>,
    timers: BTreeMap<String, Vec<f64>>,
}

/// Process-local counters and duration samples. Each timer keeps its most
/// recent `MAX_TIMER_SAMPLES` durations; counters are unbounded totals.
#[derive(Default)]
pub struct MetricsCollector {
    state: Mutex<MetricsState>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, MetricsState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn increment(&self, name: &str) {
        self.increment_by(name, 1);
    }

    pub fn increment_by(&self, name: &str, amount: u64) {
        *self.lock().counters.entry(name.to_string()).or_insert(0) += amount;
    }

    pub fn record_duration(&self, name: &str, duration: Duration) {
        let mut state = self.lock();
        let samples = state.timers.entry(name.to_string()).or_default();
        if samples.len() >= MAX_TIMER_SAMPLES {
            let excess = samples.len() + 1 - MAX_TIMER_SAMPLES;
            samples.drain(..excess);
        }
        samples.push(duration.as_secs_f64() * 1000.0);
    }

    pub fn counter(&self, name: &str) -> u64 {
        self.lock().counters.get(name).copied().unwrap_or(0)
    }

    pub fn timer_stats(&self, name: &str) -> Option<TimerStats> {
        self.lock().timers.get(name).and_then(|samples| compute_stats(samples))
    }

    pub fn summary(&self) -> MetricsSummary {
        let state = self.lock();
        MetricsSummary {
            counters: state.counters.clone(),
            timers: state
                .timers
                .iter()
                .filter_map(|(name, samples)| compute_stats(samples).map(|stats| (name.clone(), stats)))
                .collect(),
        }
    }

    pub fn reset(&self) {
        *self.lock() = MetricsState::default();
    }
}

/// p95 uses the nearest-rank method.
pub fn compute_stats(samples: &[f64]) -> Option<TimerStats> {
    if samples.is_empty() {
        return None;
    }

    let mut sorted = samples.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let count = sorted.len();
    let total: f64 = sorted.iter().sum();
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };
    let rank = ((0.95 * count as f64).ceil() as usize).clamp(1, count);

    Some(TimerStats {
        count,
        total,
        mean: total / count as f64,
        median,
        min: sorted[0],
        max: sorted[count - 1],
        p95: sorted[rank - 1],
    })
}
