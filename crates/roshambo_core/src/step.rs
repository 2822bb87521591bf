//! One tick of movement and conversion.
//!
//! Every agent reads the same immutable snapshot of the current tick and
//! the next population is built as a fresh vector, so the outcome does not
//! depend on the order agents are visited in.

use crate::config::{ConversionRule, SimConfig};
use crate::force::ForceField;
use roshambo_data::{Agent, AgentType, Position};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of advancing a population by one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub population: Vec<Agent>,
    /// Number of agents that changed type this tick.
    pub conversions: usize,
}

#[derive(Debug, Clone)]
pub struct Stepper {
    field: ForceField,
    speed: f64,
    width: f64,
    height: f64,
    rule: ConversionRule,
}

impl Stepper {
    #[must_use]
    pub fn new(config: &SimConfig) -> Self {
        Self {
            field: ForceField::new(config),
            speed: config.agent.speed,
            width: config.world.width,
            height: config.world.height,
            rule: config.conversion.rule,
        }
    }

    #[must_use]
    pub fn field(&self) -> &ForceField {
        &self.field
    }

    /// Next population, same length and order as `population`.
    #[must_use]
    pub fn advance(&self, population: &[Agent]) -> Vec<Agent> {
        self.advance_with_outcome(population).population
    }

    #[must_use]
    pub fn advance_with_outcome(&self, population: &[Agent]) -> StepOutcome {
        #[cfg(feature = "parallel")]
        {
            let stepped: Vec<(Agent, bool)> = population
                .par_iter()
                .map(|agent| self.step_agent(agent, population))
                .collect();
            Self::collect_outcome(stepped)
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.advance_sequential(population)
        }
    }

    /// Single-threaded tick, regardless of the `parallel` feature.
    #[must_use]
    pub fn advance_sequential(&self, population: &[Agent]) -> StepOutcome {
        let stepped: Vec<(Agent, bool)> = population
            .iter()
            .map(|agent| self.step_agent(agent, population))
            .collect();
        Self::collect_outcome(stepped)
    }

    fn collect_outcome(stepped: Vec<(Agent, bool)>) -> StepOutcome {
        let conversions = stepped.iter().filter(|(_, converted)| *converted).count();
        StepOutcome {
            population: stepped.into_iter().map(|(agent, _)| agent).collect(),
            conversions,
        }
    }

    /// Moves one agent and resolves its conversion against `population`.
    ///
    /// Returns the agent's successor and whether it changed type.
    #[must_use]
    pub fn step_agent(&self, agent: &Agent, population: &[Agent]) -> (Agent, bool) {
        let force = self.field.compute_force(agent, population);
        let heading = if force.is_zero() || !force.is_finite() {
            agent.heading
        } else {
            force.angle()
        };

        let (sin, cos) = heading.sin_cos();
        let x = (agent.position.x + cos * self.speed).clamp(0.0, self.width);
        let y = (agent.position.y + sin * self.speed).clamp(0.0, self.height);
        let moved = agent.moved_to(Position::new(x, y), heading);

        let master = agent.kind.master();
        let caught = population
            .iter()
            .any(|other| other.kind == master && moved.overlaps(other));
        if caught {
            (moved.converted_to(self.converted_kind(agent.kind)), true)
        } else {
            (moved, false)
        }
    }

    /// Type an agent of `kind` takes after touching its master.
    #[must_use]
    pub fn converted_kind(&self, kind: AgentType) -> AgentType {
        match self.rule {
            ConversionRule::JoinMaster => kind.master(),
            ConversionRule::BecomeSlave => kind.slave(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PeerInteraction;

    fn config() -> SimConfig {
        let mut config = SimConfig::default();
        config.world.width = 100.0;
        config.world.height = 100.0;
        config.world.count_per_type = 1;
        config.agent.extent = 2.0;
        config.agent.speed = 1.0;
        config.force.center_pull = 0.0;
        config.force.peer = PeerInteraction::Ignore;
        config
    }

    #[test]
    fn test_moves_by_speed_toward_prey() {
        let stepper = Stepper::new(&config());
        let rock = Agent::new(AgentType::Rock, 10.0, 10.0, 2.0);
        let scissors = Agent::new(AgentType::Scissors, 50.0, 10.0, 2.0);
        let (next, converted) = stepper.step_agent(&rock, &[rock, scissors]);
        assert!(!converted);
        assert!((next.position.x - 11.0).abs() < 1e-12);
        assert!((next.position.y - 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_force_keeps_heading() {
        let stepper = Stepper::new(&config());
        let mut lonely = Agent::new(AgentType::Paper, 50.0, 50.0, 2.0);
        lonely.heading = std::f64::consts::FRAC_PI_2;
        let (next, _) = stepper.step_agent(&lonely, &[lonely]);
        assert!((next.position.y - 51.0).abs() < 1e-12);
        assert_eq!(next.heading, std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_clamps_to_canvas() {
        let stepper = Stepper::new(&config());
        let mut edge = Agent::new(AgentType::Rock, 0.2, 99.9, 2.0);
        edge.heading = 3.0 * std::f64::consts::FRAC_PI_4;
        let (next, _) = stepper.step_agent(&edge, &[edge]);
        assert_eq!(next.position.x, 0.0);
        assert_eq!(next.position.y, 100.0);
    }

    #[test]
    fn test_touching_master_converts() {
        let stepper = Stepper::new(&config());
        let rock = Agent::new(AgentType::Rock, 10.0, 10.0, 2.0);
        let paper = Agent::new(AgentType::Paper, 12.0, 10.0, 2.0);
        let outcome = stepper.advance_with_outcome(&[rock, paper]);
        assert_eq!(outcome.population[0].kind, AgentType::Paper);
        assert_eq!(outcome.population[1].kind, AgentType::Paper);
        assert_eq!(outcome.conversions, 1);
    }

    #[test]
    fn test_become_slave_rule() {
        let mut config = config();
        config.conversion.rule = ConversionRule::BecomeSlave;
        let stepper = Stepper::new(&config);
        let rock = Agent::new(AgentType::Rock, 10.0, 10.0, 2.0);
        let paper = Agent::new(AgentType::Paper, 12.0, 10.0, 2.0);
        let next = stepper.advance(&[rock, paper]);
        assert_eq!(next[0].kind, AgentType::Scissors);
    }

    #[test]
    fn test_prey_overlap_does_not_convert() {
        let stepper = Stepper::new(&config());
        let rock = Agent::new(AgentType::Rock, 10.0, 10.0, 2.0);
        let scissors = Agent::new(AgentType::Scissors, 11.0, 10.0, 2.0);
        let next = stepper.advance(&[rock, scissors]);
        assert_eq!(next[0].kind, AgentType::Rock);
        assert_eq!(next[1].kind, AgentType::Rock);
    }

    #[test]
    fn test_order_independent() {
        let stepper = Stepper::new(&config());
        let population = vec![
            Agent::new(AgentType::Rock, 10.0, 10.0, 2.0),
            Agent::new(AgentType::Paper, 40.0, 70.0, 2.0),
            Agent::new(AgentType::Scissors, 80.0, 30.0, 2.0),
        ];
        let forward = stepper.advance(&population);
        let mut reversed_input = population.clone();
        reversed_input.reverse();
        let mut backward = stepper.advance(&reversed_input);
        backward.reverse();
        assert_eq!(forward, backward);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let mut config = SimConfig::default();
        config.world.seed = Some(99);
        let stepper = Stepper::new(&config);
        let mut rng = crate::lifecycle::rng_from_seed(config.world.seed);
        let mut population = crate::lifecycle::populate(&config, &mut rng);
        assert_eq!(population.len(), 150);

        for tick in 0..50 {
            let parallel = stepper.advance_with_outcome(&population);
            let sequential = stepper.advance_sequential(&population);
            assert_eq!(parallel.conversions, sequential.conversions, "tick {tick}");
            for (p, s) in parallel.population.iter().zip(&sequential.population) {
                assert_eq!(p.kind, s.kind, "tick {tick}");
                assert_eq!(p.position.x.to_bits(), s.position.x.to_bits(), "tick {tick}");
                assert_eq!(p.position.y.to_bits(), s.position.y.to_bits(), "tick {tick}");
                assert_eq!(p.heading.to_bits(), s.heading.to_bits(), "tick {tick}");
            }
            population = parallel.population;
        }
    }
}
