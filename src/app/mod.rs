pub mod presenter;
pub mod shutdown;
pub mod state;

pub use presenter::{JsonLinesPresenter, LogPresenter};
pub use shutdown::ShutdownManager;
pub use state::{App, RunMode, RunOptions};

use anyhow::{Context, Result};
use roshambo_core::{AgentType, LoopEvent, Presenter};
use std::time::Duration;
use tokio::time::MissedTickBehavior;

impl App {
    /// Runs until shutdown or the round limit, in the configured mode.
    pub async fn run<P: Presenter>(&mut self, presenter: &mut P) -> Result<()> {
        match self.options.mode {
            RunMode::Paced => self.run_paced(presenter).await,
            RunMode::Headless => self.run_headless(presenter),
        }
    }

    /// One step per tick of a `tick_rate` Hz interval.
    pub async fn run_paced<P: Presenter>(&mut self, presenter: &mut P) -> Result<()> {
        let period = Duration::from_secs_f64(1.0 / self.tick_rate as f64);
        let mut interval = tokio::time::interval(period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.sim.present_to(presenter);
        loop {
            interval.tick().await;
            if matches!(
                self.sim.step_with(presenter, self.options.max_rounds),
                LoopEvent::Stopped
            ) {
                break;
            }
        }
        self.finish()
    }

    pub fn run_headless<P: Presenter>(&mut self, presenter: &mut P) -> Result<()> {
        self.sim.run(presenter, self.options.max_rounds);
        self.finish()
    }

    /// Logs the run summary and writes the history file if one was asked for.
    pub fn finish(&self) -> Result<()> {
        let history = self.sim.history();
        let metrics = self.sim.metrics();
        tracing::info!(
            rounds = history.rounds.len(),
            rock = history.wins(AgentType::Rock),
            paper = history.wins(AgentType::Paper),
            scissors = history.wins(AgentType::Scissors),
            abandoned = history.abandoned(),
            mean_ticks = history.mean_ticks_to_win().unwrap_or(0.0),
            ticks = metrics.tick_count(),
            conversions = metrics.conversion_count(),
            slowest_tick_us = metrics.slowest_tick().as_micros() as u64,
            elapsed_s = metrics.elapsed().as_secs_f64(),
            "Run finished"
        );

        if let Some(path) = &self.options.history_path {
            history
                .save_json(path)
                .with_context(|| format!("writing run history to {}", path.display()))?;
            tracing::info!(path = %path.display(), "Run history saved");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roshambo_core::config::SimConfig;

    fn config() -> SimConfig {
        let mut config = SimConfig::default();
        config.world.width = 100.0;
        config.world.height = 100.0;
        config.world.count_per_type = 2;
        config.world.seed = Some(8);
        config.max_ticks_per_round = Some(20);
        config.tick_rate = 240;
        config
    }

    #[tokio::test]
    async fn test_paced_run_stops_after_max_rounds() {
        let options = RunOptions {
            mode: RunMode::Paced,
            max_rounds: Some(1),
            history_path: None,
        };
        let mut app = App::new(config(), options).unwrap();
        let mut presenter = LogPresenter::new(app.shutdown.clone(), 5);
        app.run(&mut presenter).await.unwrap();
        assert_eq!(app.sim.history().rounds.len(), 1);
    }

    #[tokio::test]
    async fn test_headless_run_writes_history() {
        let path = std::env::temp_dir().join(format!("roshambo_app_{}.json", std::process::id()));
        let options = RunOptions {
            mode: RunMode::Headless,
            max_rounds: Some(2),
            history_path: Some(path.clone()),
        };
        let mut app = App::new(config(), options).unwrap();
        let mut presenter = LogPresenter::new(app.shutdown.clone(), 5);
        app.run(&mut presenter).await.unwrap();

        let saved = roshambo_core::history::RunHistory::load_json(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(saved.rounds.len(), 2);
    }
}
