//! Configuration management for simulation parameters.
//!
//! Every tunable of the engine lives in [`SimConfig`], which maps onto a
//! `roshambo.toml` file. Missing sections and fields fall back to the
//! defaults below, and the whole structure is validated before any
//! population is created.
//!
//! ## Example `roshambo.toml`
//!
//! ```toml
//! tick_rate = 30
//!
//! [world]
//! width = 1000.0
//! height = 500.0
//! count_per_type = 50
//! seed = 42
//!
//! [force]
//! epsilon = 0.01
//! center_pull = 300.0
//! peer = "attract"
//!
//! [conversion]
//! rule = "join_master"
//! ```

use crate::error::{Result, SimError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canvas and population parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub count_per_type: usize,
    /// Seed for initial placement. `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            count_per_type: 50,
            seed: None,
        }
    }
}

/// Size and speed of every agent.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    /// Half-size of the square hit box.
    pub extent: f64,
    /// Distance covered per tick.
    pub speed: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            extent: 15.0,
            speed: 7.5,
        }
    }
}

/// How an agent reacts to others of its own type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PeerInteraction {
    /// Weak pull toward peers, keeps groups loosely clustered.
    #[default]
    Attract,
    /// Weak push away from peers, spreads groups out.
    Repel,
    /// Peers contribute nothing.
    Ignore,
}

/// Force-field tunables.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ForceConfig {
    /// Added to every count denominator.
    pub epsilon: f64,
    /// Strength of the pull toward the canvas center. Zero disables it.
    pub center_pull: f64,
    /// Upper bound on the population factor of the center pull.
    pub center_population_cap: f64,
    pub peer: PeerInteraction,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            epsilon: 0.01,
            center_pull: 300.0,
            center_population_cap: 10.0,
            peer: PeerInteraction::Attract,
        }
    }
}

/// Which type an agent takes after touching its master.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConversionRule {
    /// The agent is captured and becomes its master's type.
    #[default]
    JoinMaster,
    /// The agent steps down the cycle and becomes the type it beats.
    BecomeSlave,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ConversionConfig {
    pub rule: ConversionRule,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub agent: AgentConfig,
    pub force: ForceConfig,
    pub conversion: ConversionConfig,
    /// Logical ticks per second when the driver paces the loop.
    pub tick_rate: u64,
    /// Rounds that run this long without a winner are abandoned and restarted.
    pub max_ticks_per_round: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            world: WorldConfig::default(),
            agent: AgentConfig::default(),
            force: ForceConfig::default(),
            conversion: ConversionConfig::default(),
            tick_rate: 30,
            max_ticks_per_round: None,
        }
    }
}

fn ensure(condition: bool, message: &str) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(SimError::invalid_config(message))
    }
}

impl SimConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns the first violated rule as [`SimError::InvalidConfig`].
    pub fn validate(&self) -> Result<()> {
        ensure(
            self.world.count_per_type > 0,
            "Population count per type must be positive",
        )?;
        ensure(
            self.world.width.is_finite() && self.world.width > 0.0,
            "Canvas width must be positive",
        )?;
        ensure(
            self.world.height.is_finite() && self.world.height > 0.0,
            "Canvas height must be positive",
        )?;

        ensure(
            self.agent.extent.is_finite() && self.agent.extent > 0.0,
            "Agent extent must be positive",
        )?;
        ensure(
            self.agent.speed.is_finite() && self.agent.speed >= 0.0,
            "Agent speed must be non-negative",
        )?;

        ensure(
            self.force.epsilon.is_finite() && self.force.epsilon > 0.0,
            "Epsilon must be positive",
        )?;
        ensure(
            self.force.center_pull.is_finite() && self.force.center_pull >= 0.0,
            "Center pull must be non-negative",
        )?;
        ensure(
            self.force.center_population_cap.is_finite() && self.force.center_population_cap >= 0.0,
            "Center population cap must be non-negative",
        )?;

        ensure(self.tick_rate > 0, "Tick rate must be positive")?;
        ensure(self.tick_rate <= 240, "Tick rate too high (max 240)")?;
        ensure(
            self.max_ticks_per_round != Some(0),
            "Max ticks per round must be positive",
        )?;

        Ok(())
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| e.with_context(format!("loading {}", path.display())))
    }

    /// Total number of agents in every round.
    #[must_use]
    pub fn population_size(&self) -> usize {
        self.world.count_per_type * 3
    }

    /// Hash of everything that changes the sequence of populations.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.world).as_bytes());
        hasher.update(format!("{:?}", self.agent).as_bytes());
        hasher.update(format!("{:?}", self.force).as_bytes());
        hasher.update(format!("{:?}", self.conversion).as_bytes());
        hex::encode(hasher.finalize())
    }
}
