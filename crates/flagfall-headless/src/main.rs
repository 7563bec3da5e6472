// Allow print in the CLI binary
#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flagfall_core::team::Team;
use flagfall_ctf::CaptureTheFlag;
use flagfall_ctf::config::MatchConfig;
use flagfall_headless::runner::run_match;
use flagfall_headless::sink::LogSink;

/// Play a capture-the-flag match with the autopilot and report the result.
#[derive(Parser, Debug)]
#[command(name = "flagfall-headless")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Team the autopilot plays (red or blue)
    #[arg(short, long, default_value = "red")]
    team: Team,

    /// Match config TOML (default: $FLAGFALL_MATCH_CONFIG, then config/match.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Stop after this many ticks if nobody has won
    #[arg(long, default_value = "36000")]
    max_ticks: u64,

    /// Print the final render snapshot as JSON
    #[arg(long)]
    dump_snapshot: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => match MatchConfig::from_toml_file(path) {
            Some(config) => config,
            None => {
                tracing::error!("Could not load match config from {}", path.display());
                return ExitCode::FAILURE;
            },
        },
        None => MatchConfig::load(),
    };

    let mut game = match CaptureTheFlag::validated(config) {
        Ok(game) => game,
        Err(e) => {
            tracing::error!("Invalid match config: {e}");
            return ExitCode::FAILURE;
        },
    };

    let mut sink = LogSink::default();
    let summary = run_match(&mut game, args.team, args.max_ticks, &mut sink);
    tracing::info!(
        pickups = sink.pickups,
        captures = sink.captures,
        player_tags = sink.player_tags,
        guard_tags = sink.guard_tags,
        "Match finished"
    );

    if args.dump_snapshot {
        match serde_json::to_string_pretty(&game.snapshot()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("Failed to encode snapshot: {e}");
                return ExitCode::FAILURE;
            },
        }
    }

    println!("{summary}");
    if summary.winner.is_some() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
