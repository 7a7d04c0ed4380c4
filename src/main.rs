//! Command line entry point: opens the chase window, or runs headless.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chase::{init_logging, MoveInput, Scenario, SimConfig};
use clap::Parser;
use log::{error, info};

/// A realtime chase: steer the white square, the red one follows
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// JSON scenario configuration; omitted fields use the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Simulate without opening a window
    #[arg(long)]
    headless: bool,

    /// Frames to simulate in a headless run
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Keys from `wasd` held for the whole headless run
    #[arg(long, default_value = "")]
    hold: String,
}

/// Frames between headless progress reports.
const REPORT_INTERVAL: u64 = 120;

fn load_config(path: Option<&Path>) -> Result<SimConfig> {
    let Some(file) = path else {
        return Ok(SimConfig::default());
    };
    SimConfig::from_path(file)
        .inspect_err(|e| error!("{e}"))
        .with_context(|| format!("loading {}", file.display()))
}

fn run_headless(config: &SimConfig, frames: u64, input: MoveInput) -> Scenario {
    let mut scenario = Scenario::new(config);
    info!(
        "Running {frames} frames at {:.4}s per frame holding {input:?}",
        scenario.fixed_dt()
    );

    for _ in 0..frames {
        scenario.step_fixed(input);
        if scenario.frame() % REPORT_INTERVAL == 0 {
            info!(
                "frame {}: player at {:?}, pursuer at {:?}",
                scenario.frame(),
                scenario.player().position(),
                scenario.pursuer().position()
            );
        }
    }

    let gap = scenario.player().centre().distance(scenario.pursuer().centre());
    info!(
        "Finished after {} frames: player {:?} moving {:?}, pursuer {:?}, gap {gap:.1}",
        scenario.frame(),
        scenario.player().position(),
        scenario.player().velocity(),
        scenario.pursuer().position()
    );
    scenario
}

/// What a parsed command line asks the binary to do.
#[derive(Debug, Clone, PartialEq, Eq)]
enum RunMode {
    /// Open the Bevy window.
    #[cfg(feature = "render")]
    Windowed,
    /// Step the scenario without a window.
    Headless { frames: u64, input: MoveInput },
}

impl Args {
    /// Headless is forced when the binary is built without `render`.
    fn run_mode(&self) -> RunMode {
        #[cfg(feature = "render")]
        if !self.headless {
            return RunMode::Windowed;
        }
        #[cfg(not(feature = "render"))]
        if !self.headless {
            info!("Built without the `render` feature; running headless");
        }
        RunMode::Headless {
            frames: self.frames,
            input: MoveInput::from_keys(&self.hold),
        }
    }
}

#[cfg(feature = "render")]
fn run_windowed(config: SimConfig) -> Result<()> {
    use bevy::app::AppExit;

    match chase::presentation::run(config) {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("window loop exited with code {code}"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref())?;
    match args.run_mode() {
        #[cfg(feature = "render")]
        RunMode::Windowed => run_windowed(config),
        RunMode::Headless { frames, input } => {
            run_headless(&config, frames, input);
            Ok(())
        }
    }
}
