use colored::*;
use eyre::Result;

use crate::config::Config;
use crate::credentials::{CredentialResolver, FileCredentialStore};

pub fn run(config: &Config) -> Result<()> {
    let path = Config::expand_path(&config.credentials_file);
    let store = match FileCredentialStore::load(&path) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            std::process::exit(1);
        }
    };

    let ids = store.list_ids()?;
    if ids.is_empty() {
        println!("No credentials in {}", path.display());
        return Ok(());
    }

    for id in ids {
        println!("{}", id);
    }

    Ok(())
}
