//! Pythia - an animal-guessing game that learns.
//!
//! Think of something, answer its questions, and it narrows down what you
//! have in mind. Wrong guesses teach it new objects and questions.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pythia::{commands, game};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pythia")]
#[command(about = "A guessing game that learns from every round", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive guessing game (the default)
    Play {
        /// Don't grow the knowledge base from this game
        #[arg(long)]
        no_learn: bool,

        /// Show the posterior table and selector diagnostics every round
        #[arg(long)]
        debug: bool,

        /// Knowledge directory (defaults to the platform data dir)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Summarize the knowledge base
    Stats {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,

        /// Knowledge directory (defaults to the platform data dir)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Show or change the effective configuration
    Config {
        /// Set a configuration value (key=value)
        #[arg(long)]
        set: Option<String>,
    },
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so the game screen stays clean; raise with
    // RUST_LOG=debug to watch the selector think.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        None => game::play(false, false, None),
        Some(Commands::Play {
            no_learn,
            debug,
            data_dir,
        }) => game::play(no_learn, debug, data_dir),
        Some(Commands::Stats { json, data_dir }) => commands::stats(json, data_dir),
        Some(Commands::Config { set }) => commands::config(set),
    }
}
