use clap::Parser;
use eyre::{Context, Result};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;
mod commands;
mod config;
mod credentials;
mod error;
mod param;
mod source;

use cli::{Cli, Commands};
use config::{Config, LogLevel};

fn setup_logging(log_level: LogLevel) -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("chef-param")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("chef-param.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // RUST_LOG env var takes precedence, otherwise use config log_level
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        // Let env_logger parse RUST_LOG
        builder.parse_default_env();
    } else {
        // Use log level from config (or the -v/-q overrides)
        builder.filter_level(match log_level {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Off => log::LevelFilter::Off,
        });
    }

    builder.target(env_logger::Target::Pipe(target)).init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn run(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::List { definition, format } => commands::list::run(&definition, format, &config),
        Commands::Resolve { definition, value, format } => {
            commands::resolve::run(&definition, value.as_deref(), format)
        }
        Commands::Check { filter } => commands::check::run(&filter),
        Commands::Categories { format } => commands::categories::run(format),
        Commands::Credentials => commands::credentials::run(&config),
        Commands::Config { action } => commands::config::run(action, &config),
        Commands::Completions { shell } => commands::completions::run(shell),
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments first
    let cli = Cli::parse();

    // Load configuration (before logging, so log messages in Config::load are silent)
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    // -v/-q beat the configured level; RUST_LOG beats both
    let log_level = if cli.quiet {
        LogLevel::Error
    } else if cli.verbose {
        LogLevel::Debug
    } else {
        config.log_level
    };
    setup_logging(log_level).context("Failed to setup logging")?;

    info!("Starting chef-param with config from: {:?}", cli.config);

    // Run the command
    run(cli, config).context("Command failed")?;

    Ok(())
}
