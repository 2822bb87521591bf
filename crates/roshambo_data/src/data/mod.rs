//! Core data structures for the Roshambo simulation.

pub mod agent;
pub mod kind;
pub mod vector;
