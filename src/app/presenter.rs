//! Built-in presenters.
//!
//! Neither draws anything: the log presenter reports progress through
//! `tracing`, the JSON presenter streams one snapshot per line for an
//! external renderer.

use crate::app::shutdown::ShutdownManager;
use anyhow::Result;
use roshambo_core::history::RoundRecord;
use roshambo_core::snapshot::PopulationSnapshot;
use roshambo_core::Presenter;
use serde::Serialize;
use std::io::Write;

/// Logs the census every `every` ticks and each finished round.
pub struct LogPresenter {
    shutdown: ShutdownManager,
    every: u64,
}

impl LogPresenter {
    pub fn new(shutdown: ShutdownManager, every: u64) -> Self {
        Self {
            shutdown,
            every: every.max(1),
        }
    }
}

impl Presenter for LogPresenter {
    fn quit_requested(&mut self) -> bool {
        self.shutdown.is_shutdown_requested()
    }

    fn present(&mut self, snapshot: &PopulationSnapshot<'_>) -> Result<()> {
        if snapshot.tick % self.every == 0 {
            tracing::debug!(
                round = snapshot.round,
                tick = snapshot.tick,
                census = %snapshot.census,
                "Population"
            );
        }
        Ok(())
    }

    fn round_finished(&mut self, record: &RoundRecord) -> Result<()> {
        match record.winner {
            Some(winner) => println!(
                "round {}: the winner is {}, {} ticks ({} ms)",
                record.round, winner, record.ticks, record.elapsed_ms
            ),
            None => println!(
                "round {}: no winner after {} ticks ({})",
                record.round, record.ticks, record.final_census
            ),
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct RoundLine<'a> {
    round_finished: &'a RoundRecord,
}

/// Writes every snapshot and round record as a JSON line.
pub struct JsonLinesPresenter<W: Write> {
    out: W,
    shutdown: ShutdownManager,
}

impl<W: Write> JsonLinesPresenter<W> {
    pub fn new(out: W, shutdown: ShutdownManager) -> Self {
        Self { out, shutdown }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for JsonLinesPresenter<W> {
    fn quit_requested(&mut self) -> bool {
        self.shutdown.is_shutdown_requested()
    }

    fn present(&mut self, snapshot: &PopulationSnapshot<'_>) -> Result<()> {
        writeln!(self.out, "{}", snapshot.to_json()?)?;
        self.out.flush()?;
        Ok(())
    }

    fn round_finished(&mut self, record: &RoundRecord) -> Result<()> {
        serde_json::to_writer(&mut self.out, &RoundLine { round_finished: record })?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
