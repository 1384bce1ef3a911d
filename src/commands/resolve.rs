use colored::*;
use eyre::{Context, Result};
use std::path::Path;

use crate::cli::OutputFormat;
use crate::param::definition::ParamDefinition;
use crate::param::provider::ResolvedValue;

pub fn run(definition_path: &Path, value: Option<&str>, format: Option<OutputFormat>) -> Result<()> {
    let definition = ParamDefinition::load(definition_path)
        .context(format!("Failed to load definition from {}", definition_path.display()))?;

    // Resolution is pure over the definition; no credential store, no fetch.
    let resolved = ResolvedValue::from_submission(&definition, value);

    match OutputFormat::resolve(format) {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&resolved)?);
        }
        OutputFormat::Text => {
            println!("{} {}={}", "→".blue(), resolved.name.cyan(), resolved.value.green());
        }
    }

    Ok(())
}
