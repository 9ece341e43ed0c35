use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "moodbloom", version, about = "Mood Bloom CLI")]
struct Cli {
    /// Treat this RFC 3339 timestamp as the current time
    #[arg(long, global = true)]
    at: Option<DateTime<Utc>>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log how you feel today
    Log(commands::log::LogArgs),
    /// Today's status: whether you can log, last emotion, streak, season
    Status {
        #[arg(long)]
        json: bool,
    },
    /// List all plants in the garden
    Plants {
        #[arg(long)]
        json: bool,
    },
    /// Show the plant grown from one emotion
    Plant {
        /// Emotion id (e.g. "happy")
        emotion: String,
        #[arg(long)]
        json: bool,
    },
    /// List the emotions you can log
    Emotions {
        #[arg(long)]
        json: bool,
    },
    /// Add a decoration (bench, lantern, bridge, fountain, statue)
    Decorate {
        kind: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Remove every plant, decoration and streak
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MOODBLOOM_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let now = cli.at.unwrap_or_else(Utc::now);
    let result = match cli.command {
        Commands::Log(args) => commands::log::run(args, now),
        Commands::Status { json } => commands::garden::status(json, now),
        Commands::Plants { json } => commands::garden::plants(json),
        Commands::Plant { emotion, json } => commands::garden::plant(&emotion, json),
        Commands::Emotions { json } => commands::emotions::run(json),
        Commands::Decorate { kind } => commands::garden::decorate(&kind),
        Commands::Config { action } => commands::config::run(action),
        Commands::Reset { yes } => commands::garden::reset(yes),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
