//! Public face of the engine: `initialize`, `tick`, `is_converged`.

use crate::config::SimConfig;
use crate::error::Result;
use crate::lifecycle;
use crate::step::Stepper;
use crate::win;
use rand::Rng;
use roshambo_data::{Agent, AgentType};

/// Outcome of one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub population: Vec<Agent>,
    pub winner: Option<AgentType>,
    pub conversions: usize,
}

/// A validated configuration bound to its stepper.
#[derive(Debug, Clone)]
pub struct Engine {
    config: SimConfig,
    stepper: Stepper,
}

impl Engine {
    /// Fails fast on malformed configuration.
    pub fn new(config: SimConfig) -> Result<Self> {
        config.validate()?;
        let stepper = Stepper::new(&config);
        Ok(Self { config, stepper })
    }

    #[must_use]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[must_use]
    pub fn stepper(&self) -> &Stepper {
        &self.stepper
    }

    pub fn initialize<R: Rng>(&self, rng: &mut R) -> Vec<Agent> {
        lifecycle::populate(&self.config, rng)
    }

    #[must_use]
    pub fn tick(&self, population: &[Agent]) -> Tick {
        let outcome = self.stepper.advance_with_outcome(population);
        let winner = win::detect_winner(&outcome.population);
        Tick {
            population: outcome.population,
            winner,
            conversions: outcome.conversions,
        }
    }

    #[must_use]
    pub fn is_converged(&self, population: &[Agent]) -> bool {
        win::is_converged(population)
    }
}
