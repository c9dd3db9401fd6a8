//! CLI frontend for the Uranai divination engines.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "uranai",
    about = "Uranai: tarot, I Ching, runes and nine more divination systems",
    version,
    propagate_version = true
)]
struct Cli {
    /// Raise the log level (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a reading
    Read(commands::read::ReadArgs),

    /// List the available divination systems
    List,

    /// List the tarot spreads
    Spreads {
        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show one tarot card by deck index (0-77)
    Card {
        /// Deck index
        #[arg(allow_negative_numbers = true)]
        index: i64,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Read(args) => commands::read::run(&args),
        Commands::List => commands::list::run(),
        Commands::Spreads { format } => commands::spreads::run(&format),
        Commands::Card { index, format } => commands::card::run(index, &format),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
