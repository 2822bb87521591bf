//! # Roshambo Core
//!
//! Deterministic engine for a Rock-Paper-Scissors swarm: agents of three
//! cyclic types chase their prey, flee their masters and convert on
//! contact until a single type remains.
//!
//! ## Architecture
//!
//! - **Force field**: inverse-square attraction and repulsion between
//!   every pair, plus a pull toward the canvas center
//! - **Stepper**: moves every agent from one immutable snapshot and
//!   resolves conversions into a brand-new population
//! - **Simulation loop**: ticks, detects the winner, restarts rounds
//! - **Deterministic simulation**: only initial placement is random, from a
//!   seeded `ChaCha8Rng`
//!
//! ## Example
//!
//! ```
//! use roshambo_core::config::SimConfig;
//! use roshambo_core::engine::Engine;
//! use roshambo_core::lifecycle::rng_from_seed;
//!
//! let engine = Engine::new(SimConfig::default()).unwrap();
//! let mut rng = rng_from_seed(Some(42));
//! let population = engine.initialize(&mut rng);
//!
//! let tick = engine.tick(&population);
//! assert_eq!(tick.population.len(), population.len());
//! ```

/// Configuration management for simulation parameters
pub mod config;
/// Facade over initialization, ticking and convergence
pub mod engine;
/// Error types
pub mod error;
/// Net force on an agent
pub mod force;
/// Round results and run summaries
pub mod history;
/// Population creation
pub mod lifecycle;
/// Run metrics and logging setup
pub mod metrics;
/// Round-after-round state machine
pub mod simulation;
/// Read-only views handed to presenters
pub mod snapshot;
/// One tick of movement and conversion
pub mod step;
/// Convergence detection and census
pub mod win;

pub use engine::{Engine, Tick};
pub use error::{Result, SimError};
pub use metrics::{init_logging, Metrics};
pub use roshambo_data::{Agent, AgentType, Position, Vector2};
pub use simulation::{LoopEvent, LoopState, Presenter, SimulationLoop};
