use crate::app::shutdown::ShutdownManager;
use anyhow::Result;
use roshambo_core::config::SimConfig;
use roshambo_core::SimulationLoop;
use std::path::PathBuf;

/// How the shell drives the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Throttled to the configured tick rate.
    #[default]
    Paced,
    /// As fast as possible.
    Headless,
}

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub mode: RunMode,
    /// Stop after this many finished rounds.
    pub max_rounds: Option<u64>,
    /// Where to write the run history on exit.
    pub history_path: Option<PathBuf>,
}

pub struct App {
    pub sim: SimulationLoop,
    pub shutdown: ShutdownManager,
    pub options: RunOptions,
    pub tick_rate: u64,
}

impl App {
    pub fn new(config: SimConfig, options: RunOptions) -> Result<Self> {
        let tick_rate = config.tick_rate;
        let sim = SimulationLoop::new(config)?;
        Ok(Self {
            sim,
            shutdown: ShutdownManager::new(),
            options,
            tick_rate,
        })
    }
}
