//! STARHOP CLI - Command-line interface
//!
//! Commands:
//! - moves: Show where a piece can go
//! - play: Play the star game interactively
//! - demo: Play rounds automatically and show star placement

mod demo_cmd;
mod moves_cmd;
mod play_cmd;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "starhop")]
#[command(about = "Learn how chess pieces move, then find the star")]
struct Cli {
    /// Random seed for reproducible star placement
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the moves of a piece
    Moves(moves_cmd::MovesArgs),
    /// Play the star game
    Play(play_cmd::PlayArgs),
    /// Play rounds automatically
    Demo(demo_cmd::DemoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Moves(args) => moves_cmd::run(args),
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Demo(args) => demo_cmd::run(args, cli.seed),
    }
}

/// Log to stderr; RUST_LOG overrides the -v level
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
