//! Population creation.
//!
//! Randomness is confined to this module: a round starts from uniformly
//! scattered agents, and every later tick is a pure function of the
//! previous population.

use crate::config::SimConfig;
use crate::error::Result;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use roshambo_data::{Agent, AgentType};

/// Seeded generator, or one drawn from entropy when `seed` is `None`.
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// An agent of `kind` at a uniformly random point of the canvas.
pub fn spawn_agent<R: Rng>(kind: AgentType, config: &SimConfig, rng: &mut R) -> Agent {
    let x = rng.gen_range(0.0..=config.world.width);
    let y = rng.gen_range(0.0..=config.world.height);
    Agent::new(kind, x, y, config.agent.extent)
}

/// `count_per_type` agents of each type, grouped by type.
///
/// `config` is expected to be validated already.
pub fn populate<R: Rng>(config: &SimConfig, rng: &mut R) -> Vec<Agent> {
    let mut population = Vec::with_capacity(config.population_size());
    for kind in AgentType::ALL {
        for _ in 0..config.world.count_per_type {
            population.push(spawn_agent(kind, config, rng));
        }
    }
    population
}

/// Validates the canvas and counts, then scatters a fresh population.
pub fn initialize<R: Rng>(
    count_per_type: usize,
    width: f64,
    height: f64,
    rng: &mut R,
) -> Result<Vec<Agent>> {
    let mut config = SimConfig::default();
    config.world.count_per_type = count_per_type;
    config.world.width = width;
    config.world.height = height;
    config.validate()?;
    Ok(populate(&config, rng))
}
