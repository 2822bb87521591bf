//! Per-round results and run summaries.

use crate::error::Result;
use crate::win::Census;
use chrono::{DateTime, Utc};
use roshambo_data::AgentType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// How one round ended.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RoundRecord {
    pub round: u64,
    /// `None` when the round hit the tick limit first.
    pub winner: Option<AgentType>,
    pub ticks: u64,
    pub elapsed_ms: u64,
    pub conversions: u64,
    pub final_census: Census,
    pub finished_at: DateTime<Utc>,
}

impl RoundRecord {
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.winner.is_some()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RunHistory {
    pub rounds: Vec<RoundRecord>,
}

impl RunHistory {
    pub fn record(&mut self, record: RoundRecord) {
        self.rounds.push(record);
    }

    #[must_use]
    pub fn wins(&self, kind: AgentType) -> usize {
        self.rounds
            .iter()
            .filter(|r| r.winner == Some(kind))
            .count()
    }

    /// Rounds abandoned at the tick limit.
    #[must_use]
    pub fn abandoned(&self) -> usize {
        self.rounds.iter().filter(|r| !r.is_win()).count()
    }

    #[must_use]
    pub fn mean_ticks_to_win(&self) -> Option<f64> {
        let (count, total) = self
            .rounds
            .iter()
            .filter(|r| r.is_win())
            .fold((0u64, 0u64), |(n, sum), r| (n + 1, sum + r.ticks));
        (count > 0).then(|| total as f64 / count as f64)
    }

    #[must_use]
    pub fn last(&self) -> Option<&RoundRecord> {
        self.rounds.last()
    }

    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
