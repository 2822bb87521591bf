pub mod macros;

use roshambo_lib::model::config::{PeerInteraction, SimConfig};
use roshambo_lib::model::engine::Engine;
use roshambo_lib::model::state::{Agent, AgentType};

#[allow(dead_code)]
pub struct PopulationBuilder {
    config: SimConfig,
    agents: Vec<Agent>,
}

#[allow(dead_code)]
impl PopulationBuilder {
    /// 100x100 canvas, small agents, no center pull, peers ignored.
    pub fn new() -> Self {
        let mut config = SimConfig::default();
        config.world.width = 100.0;
        config.world.height = 100.0;
        config.world.count_per_type = 1;
        config.agent.extent = 2.0;
        config.agent.speed = 1.0;
        config.force.center_pull = 0.0;
        config.force.peer = PeerInteraction::Ignore;
        Self {
            config,
            agents: Vec::new(),
        }
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn canvas(mut self, width: f64, height: f64) -> Self {
        self.config.world.width = width;
        self.config.world.height = height;
        self
    }

    pub fn agent(mut self, kind: AgentType, x: f64, y: f64) -> Self {
        self.agents
            .push(Agent::new(kind, x, y, self.config.agent.extent));
        self
    }

    pub fn build(self) -> (Engine, Vec<Agent>) {
        let engine = Engine::new(self.config).expect("Failed to create engine in test builder");
        (engine, self.agents)
    }
}

/// Scenario config: `per_type` of each type on a `size` x `size` canvas
/// with default forces.
#[allow(dead_code)]
pub fn scenario_config(per_type: usize, size: f64, seed: u64) -> SimConfig {
    let mut config = SimConfig::default();
    config.world.count_per_type = per_type;
    config.world.width = size;
    config.world.height = size;
    config.world.seed = Some(seed);
    config
}
