//! Run metrics and logging setup.
//!
//! Provides structured logging and counters for monitoring a long-running
//! simulation.

use crate::history::RoundRecord;
use crate::win::Census;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Progress is logged every this many ticks.
const PROGRESS_INTERVAL: u64 = 1000;

/// Counters for a whole run, across rounds.
pub struct Metrics {
    tick_count: AtomicU64,
    conversion_count: AtomicU64,
    round_count: AtomicU64,
    slowest_tick_us: AtomicU64,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tick_count: AtomicU64::new(0),
            conversion_count: AtomicU64::new(0),
            round_count: AtomicU64::new(0),
            slowest_tick_us: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed tick with its duration.
    pub fn record_tick(&self, duration: Duration, census: Census, conversions: usize) {
        let tick = self.tick_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.conversion_count
            .fetch_add(conversions as u64, Ordering::Relaxed);
        self.slowest_tick_us
            .fetch_max(duration.as_micros() as u64, Ordering::Relaxed);

        if tick.is_multiple_of(PROGRESS_INTERVAL) {
            tracing::info!(
                tick,
                rock = census.rock,
                paper = census.paper,
                scissors = census.scissors,
                duration_us = duration.as_micros() as u64,
                "Simulation tick"
            );
        }
    }

    /// Logs and counts a finished round.
    pub fn record_round(&self, record: &RoundRecord) {
        self.round_count.fetch_add(1, Ordering::Relaxed);
        match record.winner {
            Some(winner) => tracing::info!(
                round = record.round,
                winner = %winner,
                ticks = record.ticks,
                elapsed_ms = record.elapsed_ms,
                conversions = record.conversions,
                "The winner is {}",
                winner
            ),
            None => tracing::warn!(
                round = record.round,
                ticks = record.ticks,
                census = %record.final_census,
                "Round hit the tick limit without a winner"
            ),
        }
    }

    #[must_use]
    pub fn tick_count(&self) -> u64 {
        self.tick_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn conversion_count(&self) -> u64 {
        self.conversion_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn round_count(&self) -> u64 {
        self.round_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn slowest_tick(&self) -> Duration {
        Duration::from_micros(self.slowest_tick_us.load(Ordering::Relaxed))
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use roshambo_data::AgentType;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new();
        assert_eq!(metrics.tick_count(), 0);
        assert_eq!(metrics.round_count(), 0);
    }

    #[test]
    fn test_record_tick() {
        let metrics = Metrics::new();
        metrics.record_tick(Duration::from_millis(2), Census::default(), 3);
        metrics.record_tick(Duration::from_millis(5), Census::default(), 1);
        assert_eq!(metrics.tick_count(), 2);
        assert_eq!(metrics.conversion_count(), 4);
        assert_eq!(metrics.slowest_tick(), Duration::from_millis(5));
    }

    #[test]
    fn test_record_round() {
        let metrics = Metrics::new();
        metrics.record_round(&RoundRecord {
            round: 1,
            winner: Some(AgentType::Paper),
            ticks: 12,
            elapsed_ms: 1,
            conversions: 2,
            final_census: Census::default(),
            finished_at: Utc::now(),
        });
        assert_eq!(metrics.round_count(), 1);
    }
}
