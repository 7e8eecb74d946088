//! CLI frontend for the Augur divination oracle.

mod commands;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(
    name = "augur",
    about = "Augur — a cooldown-gated divination oracle",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress log output entirely
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the oracle a single question
    Ask {
        /// The question to divine (free text)
        #[arg(required = true)]
        question: Vec<String>,

        /// User identity for cooldown tracking
        #[arg(short, long, default_value = "wanderer")]
        user: String,

        /// Bypass the cooldown window
        #[arg(short, long)]
        privileged: bool,

        /// RNG seed for a reproducible reading
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the reading as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive divination session
    Session {
        /// Initial user identity
        #[arg(short, long, default_value = "wanderer")]
        user: String,

        /// Start with the cooldown bypass enabled
        #[arg(short, long)]
        privileged: bool,

        /// RNG seed for reproducible readings
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let result = match cli.command {
        Commands::Ask {
            ref question,
            ref user,
            privileged,
            seed,
            json,
        } => commands::ask::run(&question.join(" "), user, privileged, seed, json),
        Commands::Session {
            ref user,
            privileged,
            seed,
        } => commands::session::run(user, privileged, seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,augur_engine=info",
        1 => "info,augur_engine=debug",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
