//! Terminal frontend for Arise: status screen, quest log, and reminders.

mod commands;
mod feedback;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use arise_core::{AriseConfig, Feedback, Silent};

use crate::commands::Context;
use crate::feedback::TerminalFeedback;

#[derive(Parser)]
#[command(
    name = "arise",
    about = "Arise: level up your real life, one quest at a time",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding saved state (default: per-user data directory)
    #[arg(long, global = true, env = "ARISE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Suppress sound cues and notifications
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the status screen
    Status,

    /// Register with the System under a player name
    Awaken {
        /// Player name (surrounding whitespace is ignored)
        name: String,
    },

    /// Show the quest log
    Quests,

    /// Complete a quest and collect its rewards
    Complete {
        /// Quest id as shown in the quest log
        id: u32,
    },

    /// Spend stat points on an attribute
    Allocate {
        /// Attribute: str, agl, sen, vit, int (or the full name)
        attribute: String,

        /// Number of points to spend
        #[arg(short, long, default_value = "1")]
        count: u32,
    },

    /// Send a test notification
    Connect,

    /// Check the daily-quest reminder once
    Remind {
        /// Check as if the local time were HH:MM
        #[arg(long)]
        at: Option<String>,
    },

    /// Keep checking the daily-quest reminder once a minute
    Watch {
        /// Stop after this many checks
        #[arg(long)]
        ticks: Option<u64>,
    },
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = AriseConfig::default();
    if let Some(dir) = cli.data_dir {
        config = config.with_data_dir(dir);
    }
    let feedback: Box<dyn Feedback> = if cli.quiet {
        Box::new(Silent)
    } else {
        Box::new(TerminalFeedback)
    };
    let ctx = Context::new(config, feedback);

    let result = match cli.command {
        Commands::Status => commands::status::run(&ctx),
        Commands::Awaken { name } => commands::awaken::run(&ctx, &name),
        Commands::Quests => commands::quests::run(&ctx),
        Commands::Complete { id } => commands::complete::run(&ctx, id),
        Commands::Allocate { attribute, count } => commands::allocate::run(&ctx, &attribute, count),
        Commands::Connect => commands::connect::run(&ctx),
        Commands::Remind { at } => commands::remind::run(&ctx, at.as_deref()),
        Commands::Watch { ticks } => commands::watch::run(&ctx, ticks),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
