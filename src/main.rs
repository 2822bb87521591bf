use anyhow::Result;
use clap::Parser;
use roshambo_lib::app::{App, JsonLinesPresenter, LogPresenter, RunMode, RunOptions};
use roshambo_lib::model::config::SimConfig;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Mode to run the simulation in
    #[arg(short, long, value_enum, default_value = "paced")]
    mode: Mode,

    /// Custom config file path
    #[arg(short, long, default_value = "roshambo.toml")]
    config: PathBuf,

    /// Agents of each type per round
    #[arg(long)]
    per_type: Option<usize>,

    /// Canvas width
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height
    #[arg(long)]
    height: Option<f64>,

    /// Ticks per second in paced mode
    #[arg(long)]
    tick_rate: Option<u64>,

    /// Strength of the pull toward the canvas center
    #[arg(long)]
    center_pull: Option<f64>,

    /// Denominator offset for the force weights
    #[arg(long)]
    epsilon: Option<f64>,

    /// Seed for initial placement
    #[arg(long)]
    seed: Option<u64>,

    /// Abandon a round after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Stop after this many rounds
    #[arg(long)]
    max_rounds: Option<u64>,

    /// Stream snapshots to stdout as JSON lines
    #[arg(long)]
    json: bool,

    /// Write the run history to this file on exit
    #[arg(long)]
    history: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(clap::ValueEnum, Clone, Debug)]
enum Mode {
    Paced,
    Headless,
}

impl Args {
    fn apply(&self, config: &mut SimConfig) {
        if let Some(per_type) = self.per_type {
            config.world.count_per_type = per_type;
        }
        if let Some(width) = self.width {
            config.world.width = width;
        }
        if let Some(height) = self.height {
            config.world.height = height;
        }
        if let Some(tick_rate) = self.tick_rate {
            config.tick_rate = tick_rate;
        }
        if let Some(center_pull) = self.center_pull {
            config.force.center_pull = center_pull;
        }
        if let Some(epsilon) = self.epsilon {
            config.force.epsilon = epsilon;
        }
        if self.seed.is_some() {
            config.world.seed = self.seed;
        }
        if self.max_ticks.is_some() {
            config.max_ticks_per_round = self.max_ticks;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    roshambo_lib::model::init_logging(&args.log_level);

    let mut config = SimConfig::load(&args.config)?;
    args.apply(&mut config);
    config.validate()?;

    let options = RunOptions {
        mode: match args.mode {
            Mode::Paced => RunMode::Paced,
            Mode::Headless => RunMode::Headless,
        },
        max_rounds: args.max_rounds,
        history_path: args.history.clone(),
    };

    let mut app = App::new(config, options)?;
    app.shutdown.listen_for_ctrl_c();

    if args.json {
        let stdout = std::io::stdout().lock();
        let mut presenter =
            JsonLinesPresenter::new(std::io::BufWriter::new(stdout), app.shutdown.clone());
        app.run(&mut presenter).await?;
    } else {
        let mut presenter = LogPresenter::new(app.shutdown.clone(), 100);
        app.run(&mut presenter).await?;
    }

    Ok(())
}
