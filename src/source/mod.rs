//! Item sources: where raw inventory names come from.

pub mod http;

use crate::credentials::Credential;
use crate::error::RemoteError;
use crate::param::category::ItemCategory;

pub use http::HttpItemSource;

/// Lists raw item names for one category from a remote inventory.
///
/// Implementations do I/O and nothing else: no caching, no retry. Callers that
/// want backoff wrap the call themselves. The returned order is the server's
/// document order; the provider sorts later.
pub trait ItemSource {
    fn fetch(
        &self,
        category: ItemCategory,
        server_url: &str,
        credential: &Credential,
    ) -> Result<Vec<String>, RemoteError>;
}
