//! YAML-file credential store.
//!
//! The store file maps credential ids to username/password pairs:
//!
//! ```yaml
//! chef-ci:
//!   username: builder
//!   password: s3cret
//! ```

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

use crate::error::CredentialError;

use super::{Credential, CredentialResolver};

#[derive(Debug, Clone, Deserialize)]
struct StoredCredential {
    username: String,
    password: String,
}

/// Credential store backed by a single YAML file.
#[derive(Debug)]
pub struct FileCredentialStore {
    entries: IndexMap<String, StoredCredential>,
}

impl FileCredentialStore {
    /// Load the store from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CredentialError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CredentialError::StoreUnavailable {
            reason: format!("{}: {}", path.display(), e),
        })?;

        let entries: IndexMap<String, StoredCredential> =
            serde_yaml::from_str(&content).map_err(|e| CredentialError::StoreUnavailable {
                reason: format!("{}: {}", path.display(), e),
            })?;

        log::info!("Loaded {} credential(s) from {}", entries.len(), path.display());
        Ok(Self { entries })
    }
}

impl CredentialResolver for FileCredentialStore {
    fn resolve(&self, id: &str) -> Result<Credential, CredentialError> {
        self.entries
            .get(id)
            .map(|stored| Credential::new(&stored.username, &stored.password))
            .ok_or_else(|| CredentialError::NotFound { id: id.to_string() })
    }

    fn list_ids(&self) -> Result<Vec<String>, CredentialError> {
        Ok(self.entries.keys().cloned().collect())
    }
}
