//! Plain data shared by the simulation engine and its presenters.

pub mod data;

pub use data::agent::{Agent, Bounds, Position};
pub use data::kind::AgentType;
pub use data::vector::Vector2;
