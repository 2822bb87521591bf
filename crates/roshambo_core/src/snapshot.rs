use crate::win::Census;
use roshambo_data::Agent;
use serde::Serialize;

/// Read-only view of one tick, handed to presenters.
#[derive(Serialize, Clone, Copy, Debug)]
pub struct PopulationSnapshot<'a> {
    pub round: u64,
    pub tick: u64,
    pub width: f64,
    pub height: f64,
    pub census: Census,
    pub agents: &'a [Agent],
}

impl PopulationSnapshot<'_> {
    /// Single-line JSON encoding.
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
