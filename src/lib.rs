//! # Roshambo
//!
//! Application shell around `roshambo_core`: command line, paced or
//! headless driving, Ctrl+C handling and the built-in presenters.

pub mod app;
pub mod model;
