use colored::*;
use eyre::Result;

use crate::cli::OutputFormat;
use crate::param::category::{ItemCategory, SortOrder};

pub fn run(format: Option<OutputFormat>) -> Result<()> {
    let format = OutputFormat::resolve(format);
    let listing = serde_json::json!({
        "categories": ItemCategory::ALL,
        "sortOrders": SortOrder::ALL,
    });

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yaml::to_string(&listing)?);
        }
        OutputFormat::Text => {
            println!("{}:", "categories".cyan());
            for category in ItemCategory::ALL {
                println!("  {}", category.display_name());
            }
            println!();

            println!("{}:", "sort orders".cyan());
            for order in SortOrder::ALL {
                println!("  {}", order.display_name());
            }
        }
    }

    Ok(())
}
