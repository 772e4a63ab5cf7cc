//! Bookshelf CLI - command-line client for the book network API

mod commands;
mod config;

use anyhow::Result;
use bookshelf_core::logging::{LoggingConfig, init_logging};
use clap::{Parser, ValueEnum};
use commands::Commands;
use config::ClientSettings;
use std::path::PathBuf;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(about = "Command-line client for the book network")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// Configuration file (defaults to <config_dir>/bookshelf/config.toml)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    /// API base URL, overriding the configuration
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    const fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LoggingConfig {
        log_level: cli.log_level.as_directive().to_string(),
        with_target: false,
    })?;

    let settings = ClientSettings::load(cli.config.as_deref())?.with_base_url(cli.base_url);
    debug!(?settings, "Loaded settings");

    if let Err(e) = cli.command.execute(&settings).await {
        error!("Command failed: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}
