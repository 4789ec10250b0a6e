//! Terminal frontend for Gatorwalk.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use gw_fiction::SessionConfig;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(
    name = "gw",
    about = "Gatorwalk: a swamp-side text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a story in the terminal
    Play {
        /// Story to play
        #[arg(short, long, default_value = gw_story::DEFAULT_STORY)]
        story: String,

        /// RNG seed for reproducible duels
        #[arg(long)]
        seed: Option<u64>,

        /// Start in this scene instead of the story's first one
        #[arg(long)]
        start: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// List a story's scenes and their commands
    Scenes {
        /// Story to list
        #[arg(short, long, default_value = gw_story::DEFAULT_STORY)]
        story: String,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate a story and report unreachable scenes and missing items
    Check {
        /// Story to check
        #[arg(short, long, default_value = gw_story::DEFAULT_STORY)]
        story: String,
    },
}

/// Logs go to stderr so they never interleave with the story on stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("GW_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let result = match cli.command {
        Commands::Play {
            story,
            seed,
            start,
            no_color,
        } => {
            let config = SessionConfig { seed, start };
            commands::play::run(&story, &config, no_color)
        }
        Commands::Scenes { story, json } => commands::scenes::run(&story, json),
        Commands::Check { story } => commands::check::run(&story),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
