//! Error types for inventory listing.
//!
//! Credential and remote failures stay distinguishable so callers can tell a
//! misconfigured credentials id apart from an unreachable Chef server. Neither
//! is ever collapsed into an empty item list.

use thiserror::Error;

/// Errors from resolving a credentials id against a store.
///
/// Messages carry the id only; credential material must never appear here.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("No credentials found for id: {id}")]
    NotFound { id: String },

    #[error("Credential store unavailable: {reason}")]
    StoreUnavailable { reason: String },
}

/// Errors from fetching raw item names out of a remote inventory.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Network error reaching {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("Authentication rejected by {url} (HTTP {status})")]
    Auth { url: String, status: u16 },

    #[error("Unexpected response from {url}: {reason}")]
    Format { url: String, reason: String },
}

/// Top-level error returned when listing selectable items.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Credential error: {0}")]
    Credential(#[from] CredentialError),

    #[error("Remote error: {0}")]
    Remote(#[from] RemoteError),

    /// A stored filter that no longer compiles. Form validation catches this
    /// before saving, but a definition persisted by an older host version can
    /// still carry one.
    #[error("Invalid item filter: {0}")]
    InvalidFilter(#[from] regex::Error),
}
