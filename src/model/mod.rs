//! Engine modules re-exported under one roof for the shell and its tests.

pub mod config {
    pub use roshambo_core::config::*;
}
pub mod engine {
    pub use roshambo_core::engine::*;
}
pub mod force {
    pub use roshambo_core::force::*;
}
pub mod history {
    pub use roshambo_core::history::*;
}
pub mod lifecycle {
    pub use roshambo_core::lifecycle::*;
}
pub mod simulation {
    pub use roshambo_core::simulation::*;
}
pub mod snapshot {
    pub use roshambo_core::snapshot::*;
}
pub mod step {
    pub use roshambo_core::step::*;
}
pub mod win {
    pub use roshambo_core::win::*;
}

pub mod state {
    pub use roshambo_data::*;
}

pub use roshambo_core::metrics::{init_logging, Metrics};
