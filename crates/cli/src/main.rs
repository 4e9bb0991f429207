//! MamaBot CLI
//!
//! Main entry point for the mamabot command-line tool: a minimal
//! question-answering assistant for new parents, grounded in a fixed set
//! of trusted public health sources.

mod commands;
mod render;

use clap::{Parser, Subcommand};
use commands::{AskCommand, SourcesCommand};
use mamabot_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// MamaBot CLI - source-grounded Q&A for new parents
#[derive(Parser, Debug)]
#[command(name = "mamabot")]
#[command(about = "Source-grounded Q&A assistant for new parents", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "MAMABOT_CONFIG")]
    config: Option<PathBuf>,

    /// Model identifier
    #[arg(short, long, global = true, env = "MAMABOT_MODEL")]
    model: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ask a question against the configured sources
    Ask(AskCommand),

    /// Show a snapshot of the configured sources
    Sources(SourcesCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration: defaults -> config file -> environment
    let config = AppConfig::load(cli.config)?;

    // Apply CLI overrides
    let config = config.with_overrides(cli.model, cli.log_level, cli.verbose, cli.no_color);

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("MamaBot CLI starting");
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Model: {}", config.model);
    tracing::debug!("Sources configured: {}", config.sources.len());

    let command_name = match &cli.command {
        Some(Commands::Ask(_)) => "ask",
        Some(Commands::Sources(_)) => "sources",
        None => "walkthrough",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers. With no subcommand, run the original
    // walkthrough: snapshot, banner, example question, prompt preview,
    // answer, citations.
    let result = match cli.command {
        Some(Commands::Ask(cmd)) => cmd.execute(&config).await,
        Some(Commands::Sources(cmd)) => cmd.execute(&config).await,
        None => AskCommand::walkthrough().execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
