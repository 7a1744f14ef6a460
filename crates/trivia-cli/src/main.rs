//! trivia CLI: play quizzes against the trivia backend or a local bank.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "trivia", version, about = "Terminal trivia quiz player")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz of up to five questions
    Play {
        /// "all", a category id, or a category name
        #[arg(long, default_value = "all")]
        category: String,

        /// Named source from the config file
        #[arg(long, conflicts_with = "bank")]
        source: Option<String>,

        /// Play from a local bank file or directory instead
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory to write a JSON transcript into
        #[arg(long)]
        transcript: Option<PathBuf>,
    },

    /// List the categories a source offers
    Categories {
        /// Named source from the config file
        #[arg(long, conflicts_with = "bank")]
        source: Option<String>,

        /// Local bank file or directory
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate question bank TOML files
    Validate {
        /// Path to bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// Create starter config and sample question bank
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trivia=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            category,
            source,
            bank,
            config,
            transcript,
        } => commands::play::execute(category, source, bank, config, transcript).await,
        Commands::Categories {
            source,
            bank,
            config,
        } => commands::categories::execute(source, bank, config).await,
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
