//! Credential lookup for the Chef server.
//!
//! The provider only ever holds a credentials id; the material itself lives in
//! a store behind [`CredentialResolver`] and is fetched per listing call,
//! never cached.

pub mod file;

use std::fmt;

use crate::error::CredentialError;

pub use file::FileCredentialStore;

/// A username/password credential resolved from a store.
///
/// The secret is redacted from `Debug` output so credentials can appear in
/// log statements without leaking material.
#[derive(Clone)]
pub struct Credential {
    username: String,
    secret: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            secret: secret.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Looks up credentials visible in the current scope.
pub trait CredentialResolver {
    /// Resolve a credential by its opaque id.
    fn resolve(&self, id: &str) -> Result<Credential, CredentialError>;

    /// Ids available for selection in a configuration UI. Ids only, no
    /// material.
    fn list_ids(&self) -> Result<Vec<String>, CredentialError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let credential = Credential::new("builder", "s3cret");
        let rendered = format!("{:?}", credential);
        assert!(rendered.contains("builder"));
        assert!(!rendered.contains("s3cret"));
        assert!(rendered.contains("<redacted>"));
    }
}
