//! HTTP item source for the Chef server REST API.
//!
//! Index endpoints (`/environments`, `/roles`, ...) answer with a JSON object
//! whose keys are the item names, a few with a plain array of names. Both
//! shapes are accepted; anything else is a format error.

use base64::Engine;
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::time::Duration;

use crate::credentials::Credential;
use crate::error::RemoteError;
use crate::param::category::ItemCategory;

use super::ItemSource;

/// Shapes the Chef server uses for index responses.
#[derive(Deserialize)]
#[serde(untagged)]
enum IndexResponse {
    Names(Vec<String>),
    Index(IndexMap<String, serde_json::Value>),
}

impl IndexResponse {
    fn into_names(self) -> Vec<String> {
        match self {
            IndexResponse::Names(names) => names,
            IndexResponse::Index(index) => index.into_keys().collect(),
        }
    }
}

/// Item source backed by a Chef server over HTTP with basic auth.
pub struct HttpItemSource {
    agent: ureq::Agent,
}

impl HttpItemSource {
    /// Source with a caller-chosen global request timeout. A fetch that blows
    /// the timeout surfaces as [`RemoteError::Network`].
    pub fn with_timeout(timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder().timeout_global(Some(timeout)).build();
        Self {
            agent: ureq::Agent::new_with_config(config),
        }
    }

    fn basic_auth(credential: &Credential) -> String {
        let pair = format!("{}:{}", credential.username(), credential.secret());
        let encoded = base64::engine::general_purpose::STANDARD.encode(pair.as_bytes());
        format!("Basic {}", encoded)
    }
}

impl ItemSource for HttpItemSource {
    fn fetch(
        &self,
        category: ItemCategory,
        server_url: &str,
        credential: &Credential,
    ) -> Result<Vec<String>, RemoteError> {
        let url = format!("{}/{}", server_url, category.endpoint());
        debug!("GET {} as {}", url, credential.username());

        let result = self
            .agent
            .get(&url)
            .header("Accept", "application/json")
            .header("Authorization", &Self::basic_auth(credential))
            .call();

        let mut response = match result {
            Ok(response) => response,
            Err(ureq::Error::StatusCode(status @ (401 | 403))) => {
                return Err(RemoteError::Auth { url, status });
            }
            Err(ureq::Error::StatusCode(status)) => {
                return Err(RemoteError::Network {
                    url,
                    reason: format!("HTTP {}", status),
                });
            }
            Err(e) => {
                return Err(RemoteError::Network {
                    url,
                    reason: e.to_string(),
                });
            }
        };

        let body = response.body_mut().read_to_string().map_err(|e| RemoteError::Network {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        let index: IndexResponse = serde_json::from_str(&body).map_err(|e| RemoteError::Format {
            url,
            reason: e.to_string(),
        })?;

        Ok(index.into_names())
    }
}
