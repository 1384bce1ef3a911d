use colored::*;
use eyre::{Context, Result};
use std::path::Path;
use std::time::Duration;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::credentials::FileCredentialStore;
use crate::param::definition::ParamDefinition;
use crate::param::provider::InventoryProvider;
use crate::source::HttpItemSource;

pub fn run(definition_path: &Path, format: Option<OutputFormat>, config: &Config) -> Result<()> {
    let definition = ParamDefinition::load(definition_path)
        .context(format!("Failed to load definition from {}", definition_path.display()))?;

    let store = match FileCredentialStore::load(Config::expand_path(&config.credentials_file)) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{} Items unavailable: {}", "✗".red(), e);
            std::process::exit(1);
        }
    };

    let source = HttpItemSource::with_timeout(Duration::from_secs(config.fetch.timeout_secs));
    let provider = InventoryProvider::new(&source, &store);

    let items = match provider.list_selectable_items(&definition) {
        Ok(items) => items,
        Err(e) => {
            // Typed failure, not a crash: the caller can tell a broken fetch
            // from an empty inventory.
            eprintln!("{} Items unavailable: {}", "✗".red(), e);
            std::process::exit(1);
        }
    };

    match OutputFormat::resolve(format) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&items)?);
        }
        OutputFormat::Text => {
            println!(
                "{} ({}, {} item(s))",
                definition.name.bold(),
                definition.item_category.display_name(),
                items.len()
            );
            for item in &items {
                println!("  {}", item);
            }
        }
    }

    Ok(())
}
