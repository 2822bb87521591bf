//! Convergence detection.

use roshambo_data::{Agent, AgentType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Returns the shared type when every agent has the same one.
///
/// An empty population has no winner.
#[must_use]
pub fn detect_winner(population: &[Agent]) -> Option<AgentType> {
    let (first, rest) = population.split_first()?;
    rest.iter()
        .all(|agent| agent.kind == first.kind)
        .then_some(first.kind)
}

#[must_use]
pub fn is_converged(population: &[Agent]) -> bool {
    detect_winner(population).is_some()
}

/// Number of agents of each type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Census {
    pub rock: usize,
    pub paper: usize,
    pub scissors: usize,
}

impl Census {
    #[must_use]
    pub fn of(population: &[Agent]) -> Self {
        let mut census = Self::default();
        for agent in population {
            *census.count_mut(agent.kind) += 1;
        }
        census
    }

    #[must_use]
    pub fn count(&self, kind: AgentType) -> usize {
        match kind {
            AgentType::Rock => self.rock,
            AgentType::Paper => self.paper,
            AgentType::Scissors => self.scissors,
        }
    }

    fn count_mut(&mut self, kind: AgentType) -> &mut usize {
        match kind {
            AgentType::Rock => &mut self.rock,
            AgentType::Paper => &mut self.paper,
            AgentType::Scissors => &mut self.scissors,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.rock + self.paper + self.scissors
    }

    /// Types with at least one agent left.
    #[must_use]
    pub fn surviving(&self) -> usize {
        AgentType::ALL
            .iter()
            .filter(|kind| self.count(**kind) > 0)
            .count()
    }
}

impl fmt::Display for Census {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R:{} P:{} S:{}",
            self.rock, self.paper, self.scissors
        )
    }
}
