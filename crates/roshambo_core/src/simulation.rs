//! Round-after-round driver.
//!
//! The loop is a small state machine:
//!
//! - `Running`: each step advances the population one tick and checks for a
//!   winner. A winner (or the per-round tick limit) moves to `WonRestart`.
//! - `WonRestart`: the next step scatters a fresh population of the same
//!   size and returns to `Running`.
//! - `Stopped`: terminal, entered when the quit signal is observed.
//!
//! Wall-clock pacing is left to the caller; the loop produces the same
//! sequence of populations however fast it is stepped.

use crate::config::SimConfig;
use crate::engine::Engine;
use crate::error::Result;
use crate::history::{RoundRecord, RunHistory};
use crate::lifecycle;
use crate::metrics::Metrics;
use crate::snapshot::PopulationSnapshot;
use crate::win::Census;
use chrono::Utc;
use rand_chacha::ChaCha8Rng;
use roshambo_data::Agent;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    WonRestart,
    Stopped,
}

/// What a single [`SimulationLoop::step`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopEvent {
    Ticked { conversions: usize },
    RoundFinished(RoundRecord),
    Restarted { round: u64 },
    Stopped,
}

/// The outside world as seen by the loop.
///
/// Presenters only ever receive read-only snapshots; their failures are
/// logged and never affect the population.
pub trait Presenter {
    /// Polled once per step.
    fn quit_requested(&mut self) -> bool;

    fn present(&mut self, snapshot: &PopulationSnapshot<'_>) -> anyhow::Result<()>;

    fn round_finished(&mut self, _record: &RoundRecord) -> anyhow::Result<()> {
        Ok(())
    }
}

pub struct SimulationLoop {
    engine: Engine,
    rng: ChaCha8Rng,
    population: Vec<Agent>,
    state: LoopState,
    round: u64,
    round_ticks: u64,
    round_conversions: u64,
    round_started: Instant,
    history: RunHistory,
    metrics: Metrics,
}

impl SimulationLoop {
    /// Validates `config` and scatters the first population, seeded from
    /// `config.world.seed`.
    pub fn new(config: SimConfig) -> Result<Self> {
        let rng = lifecycle::rng_from_seed(config.world.seed);
        Self::with_rng(config, rng)
    }

    pub fn with_rng(config: SimConfig, mut rng: ChaCha8Rng) -> Result<Self> {
        let engine = Engine::new(config)?;
        let population = engine.initialize(&mut rng);
        tracing::info!(
            agents = population.len(),
            width = engine.config().world.width,
            height = engine.config().world.height,
            fingerprint = %engine.config().fingerprint(),
            "Simulation initialized"
        );
        Ok(Self {
            engine,
            rng,
            population,
            state: LoopState::Running,
            round: 1,
            round_ticks: 0,
            round_conversions: 0,
            round_started: Instant::now(),
            history: RunHistory::default(),
            metrics: Metrics::new(),
        })
    }

    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[must_use]
    pub fn population(&self) -> &[Agent] {
        &self.population
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn round(&self) -> u64 {
        self.round
    }

    #[must_use]
    pub fn round_ticks(&self) -> u64 {
        self.round_ticks
    }

    #[must_use]
    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    #[must_use]
    pub fn snapshot(&self) -> PopulationSnapshot<'_> {
        let world = &self.engine.config().world;
        PopulationSnapshot {
            round: self.round,
            tick: self.round_ticks,
            width: world.width,
            height: world.height,
            census: Census::of(&self.population),
            agents: &self.population,
        }
    }

    pub fn stop(&mut self) {
        if self.state != LoopState::Stopped {
            tracing::info!(round = self.round, tick = self.round_ticks, "Simulation stopped");
            self.state = LoopState::Stopped;
        }
    }

    /// Advances the state machine by one step.
    ///
    /// `quit` is the externally polled cancel signal; it is honored before
    /// any work is done.
    pub fn step(&mut self, quit: bool) -> LoopEvent {
        if quit {
            self.stop();
        }
        match self.state {
            LoopState::Stopped => LoopEvent::Stopped,
            LoopState::WonRestart => {
                self.restart();
                LoopEvent::Restarted { round: self.round }
            }
            LoopState::Running => self.tick(),
        }
    }

    fn tick(&mut self) -> LoopEvent {
        let started = Instant::now();
        let tick = self.engine.tick(&self.population);
        self.population = tick.population;
        self.round_ticks += 1;
        self.round_conversions += tick.conversions as u64;
        self.metrics
            .record_tick(started.elapsed(), Census::of(&self.population), tick.conversions);

        let limit_hit = self
            .engine
            .config()
            .max_ticks_per_round
            .is_some_and(|limit| self.round_ticks >= limit);

        if tick.winner.is_some() || limit_hit {
            let record = RoundRecord {
                round: self.round,
                winner: tick.winner,
                ticks: self.round_ticks,
                elapsed_ms: self.round_started.elapsed().as_millis() as u64,
                conversions: self.round_conversions,
                final_census: Census::of(&self.population),
                finished_at: Utc::now(),
            };
            self.metrics.record_round(&record);
            self.history.record(record.clone());
            self.state = LoopState::WonRestart;
            LoopEvent::RoundFinished(record)
        } else {
            LoopEvent::Ticked {
                conversions: tick.conversions,
            }
        }
    }

    fn restart(&mut self) {
        self.population = self.engine.initialize(&mut self.rng);
        self.round += 1;
        self.round_ticks = 0;
        self.round_conversions = 0;
        self.round_started = Instant::now();
        self.state = LoopState::Running;
        tracing::debug!(round = self.round, "Round restarted");
    }

    /// Polls `presenter` for the quit signal, steps once, and hands the
    /// result back to it.
    ///
    /// Once `max_rounds` rounds have finished the loop stops itself.
    pub fn step_with<P: Presenter>(&mut self, presenter: &mut P, max_rounds: Option<u64>) -> LoopEvent {
        let quit = presenter.quit_requested();
        let event = self.step(quit);
        match &event {
            LoopEvent::Stopped => {}
            LoopEvent::RoundFinished(record) => {
                self.present_to(presenter);
                if let Err(e) = presenter.round_finished(record) {
                    tracing::warn!(error = %e, "Presenter failed to report round");
                }
                if max_rounds.is_some_and(|max| self.history.rounds.len() as u64 >= max) {
                    self.stop();
                }
            }
            LoopEvent::Ticked { .. } | LoopEvent::Restarted { .. } => self.present_to(presenter),
        }
        event
    }

    /// Hands the current snapshot to `presenter`, logging any failure.
    pub fn present_to<P: Presenter>(&self, presenter: &mut P) {
        if let Err(e) = presenter.present(&self.snapshot()) {
            tracing::warn!(error = %e, "Presenter failed");
        }
    }

    /// Steps until the presenter asks to quit or `max_rounds` rounds have
    /// finished.
    pub fn run<P: Presenter>(&mut self, presenter: &mut P, max_rounds: Option<u64>) -> &RunHistory {
        self.present_to(presenter);
        while !matches!(self.step_with(presenter, max_rounds), LoopEvent::Stopped) {}
        &self.history
    }
}
