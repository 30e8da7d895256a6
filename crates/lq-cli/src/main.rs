//! Terminal front-end for the Lingqian divination engine.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lq",
    about = "灵签 — draw a fortune slip and receive its reading",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full ritual: draw a slip, throw the blocks, read the result
    Ritual {
        /// RNG seed for a reproducible ritual (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Skip the ceremonial delays
        #[arg(long)]
        fast: bool,
    },

    /// List all slips in the corpus
    List,

    /// Show one slip by id
    Show {
        /// Slip id (1-based)
        id: u32,
    },

    /// Draw a random slip without the ceremony
    Draw {
        /// RNG seed for a deterministic draw (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Restrict the draw to the curated prefix, as when offline
        #[arg(long)]
        offline: bool,
    },

    /// Interpret a slip by id (built-in reading when no backend is configured)
    Interpret {
        /// Slip id (1-based)
        id: u32,

        /// Override the backend model name
        #[arg(short, long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ritual { seed, fast } => commands::ritual::run(seed, fast).await,
        Commands::List => commands::list::run(),
        Commands::Show { id } => commands::show::run(id),
        Commands::Draw { seed, offline } => commands::draw::run(seed, offline),
        Commands::Interpret { id, model } => commands::interpret::run(id, model).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
