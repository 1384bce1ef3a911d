use colored::*;
use eyre::Result;

use crate::cli::{ConfigAction, OutputFormat};
use crate::config::Config;

pub fn run(action: ConfigAction, config: &Config) -> Result<()> {
    match action {
        ConfigAction::Show { format } => show(OutputFormat::resolve(format), config),
    }
}

fn show(format: OutputFormat, config: &Config) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(config)?);
        }
        OutputFormat::Text => {
            println!("{}", "chef-param configuration".bold());
            println!();

            println!("{}: {}", "credentials_file".cyan(), config.credentials_file.display());
            println!("{}: {}s", "fetch.timeout_secs".cyan(), config.fetch.timeout_secs);
            println!("{}: {}", "log_level".cyan(), config.log_level.as_filter());
        }
    }

    Ok(())
}
