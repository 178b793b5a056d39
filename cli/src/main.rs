//! tempo - action timer engine driver.
//!
//! Three ways in:
//! - `tempo run` starts an interactive session that ticks on the wall clock
//! - `tempo simulate` fast-forwards a scenario without waiting
//! - `tempo keys` inspects and edits persisted keybinds

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::filter::EnvFilter;

use tempo_core::{AppSettings, Scenario};

mod announcer;
mod keys;
mod render;
mod repl;
mod simulate;

#[derive(Parser)]
#[command(version, about = "Action timer engine driver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive session
    Run {
        /// Scenario file; omit to use settings or the built-in roster
        #[arg(short, long)]
        scenario: Option<PathBuf>,
        /// Frame length in milliseconds
        #[arg(long, default_value_t = 33.0)]
        frame_ms: f64,
    },
    /// Fast-forward a scenario on a fixed timestep and print the result
    Simulate {
        /// Scenario file; omit to use settings or the built-in roster
        #[arg(short, long)]
        scenario: Option<PathBuf>,
        /// Total simulated time in milliseconds
        #[arg(short, long, default_value_t = 60_000.0)]
        duration_ms: f64,
        /// Timestep in milliseconds
        #[arg(long, default_value_t = 16.0)]
        step_ms: f64,
        /// Print the final state as one JSON line
        #[arg(long)]
        json: bool,
    },
    /// Show or change persisted keybinds
    Keys {
        #[command(subcommand)]
        command: KeysCommand,
    },
}

#[derive(Subcommand)]
enum KeysCommand {
    /// List the effective binds
    List,
    /// Bind an action to a chord and save, e.g. `keys set gift_ap ctrl+g`
    Set { action: String, chord: String },
    /// Drop saved binds and return to the defaults
    Reset,
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Pick the scenario source: CLI flag, then saved settings, then built-in
fn resolve_scenario(arg: Option<&Path>, settings: &AppSettings) -> Result<Scenario, String> {
    match arg.or(settings.scenario_path.as_deref()) {
        Some(path) => Scenario::load_file(path).map_err(|e| e.to_string()),
        None => Ok(Scenario::default()),
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { scenario, frame_ms } => repl::run(scenario.as_deref(), frame_ms),
        Commands::Simulate {
            scenario,
            duration_ms,
            step_ms,
            json,
        } => simulate::run(scenario.as_deref(), duration_ms, step_ms, json),
        Commands::Keys { command } => match command {
            KeysCommand::List => keys::list(),
            KeysCommand::Set { action, chord } => keys::set(&action, &chord),
            KeysCommand::Reset => keys::reset(),
        },
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "Fatal error");
        std::process::exit(1);
    }
}
