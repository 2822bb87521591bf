use serde::{Deserialize, Serialize};
use std::fmt;

/// The three cyclic agent types.
///
/// Rock beats Scissors, Paper beats Rock, Scissors beats Paper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgentType {
    Rock,
    Paper,
    Scissors,
}

impl AgentType {
    pub const ALL: [AgentType; 3] = [AgentType::Rock, AgentType::Paper, AgentType::Scissors];

    /// The type that beats `self`.
    #[must_use]
    pub const fn master(self) -> AgentType {
        match self {
            AgentType::Rock => AgentType::Paper,
            AgentType::Paper => AgentType::Scissors,
            AgentType::Scissors => AgentType::Rock,
        }
    }

    /// The type that `self` beats.
    #[must_use]
    pub const fn slave(self) -> AgentType {
        match self {
            AgentType::Rock => AgentType::Scissors,
            AgentType::Paper => AgentType::Rock,
            AgentType::Scissors => AgentType::Paper,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            AgentType::Rock => "Rock",
            AgentType::Paper => "Paper",
            AgentType::Scissors => "Scissors",
        }
    }

    /// Stable index into per-type tables.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            AgentType::Rock => 0,
            AgentType::Paper => 1,
            AgentType::Scissors => 2,
        }
    }

    #[must_use]
    pub fn beats(self, other: AgentType) -> bool {
        self.slave() == other
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
