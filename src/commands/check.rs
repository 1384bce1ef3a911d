use colored::*;
use eyre::Result;

use crate::param::validate::{check_filter_syntax, ValidationResult};

pub fn run(filter: &str) -> Result<()> {
    match check_filter_syntax(filter) {
        ValidationResult::Ok => {
            println!("{} Filter is valid", "✓".green());
        }
        ValidationResult::Error(message) => {
            eprintln!("{} Invalid filter: {}", "✗".red(), message);
            std::process::exit(1);
        }
    }

    Ok(())
}
