//! Parameter definition parsing (stored per CI job).
//!
//! Field names are camelCase and must stay stable: existing job configurations
//! persist them verbatim.

use log::debug;
use once_cell::sync::OnceCell;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use super::category::{ItemCategory, SortOrder};

/// A Chef-inventory parameter definition.
///
/// Immutable once created; editing a job configuration produces a fresh
/// instance, which is what invalidates the cached filter pattern.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParamDefinition {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(deserialize_with = "de_server_url")]
    pub server_url: String,

    pub item_category: ItemCategory,

    /// Regex restricting which raw item names are offered. Blank means all.
    #[serde(default)]
    pub item_filter: String,

    pub sort_order: SortOrder,

    #[serde(default, deserialize_with = "de_trimmed")]
    pub default_value: String,

    /// Stored as a string and parsed lazily, see [`effective_max_items`].
    ///
    /// [`effective_max_items`]: ParamDefinition::effective_max_items
    #[serde(default)]
    pub max_items: String,

    pub credentials_id: String,

    #[serde(skip)]
    filter_pattern: OnceCell<Regex>,
}

fn de_server_url<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(strip_trailing_slash(&raw))
}

fn de_trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(raw.trim().to_string())
}

fn strip_trailing_slash(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

impl ParamDefinition {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        server_url: &str,
        item_category: ItemCategory,
        item_filter: impl Into<String>,
        sort_order: SortOrder,
        default_value: &str,
        max_items: impl Into<String>,
        credentials_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            server_url: strip_trailing_slash(server_url),
            item_category,
            item_filter: item_filter.into(),
            sort_order,
            default_value: default_value.trim().to_string(),
            max_items: max_items.into(),
            credentials_id: credentials_id.into(),
            filter_pattern: OnceCell::new(),
        }
    }

    /// Load a definition from a YAML or JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> eyre::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let definition = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        Ok(definition)
    }

    /// Maximum number of items offered to the user.
    ///
    /// `maxItems` that is blank, unparsable, or not a positive integer means
    /// unbounded. That is inherited behavior: a bad limit is ignored, never an
    /// error.
    pub fn effective_max_items(&self) -> usize {
        let raw = self.max_items.trim();
        if raw.is_empty() {
            return usize::MAX;
        }

        match raw.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => {
                debug!("Ignoring unparsable maxItems {:?}, cap is unbounded", self.max_items);
                usize::MAX
            }
        }
    }

    /// Compiled item filter, anchored to match whole names only.
    ///
    /// Compiled once per definition and shared across concurrent readers. A
    /// racing first compile may run twice; the computation is idempotent and
    /// one result is discarded.
    pub fn filter_pattern(&self) -> Result<&Regex, regex::Error> {
        self.filter_pattern.get_or_try_init(|| {
            if self.item_filter.trim().is_empty() {
                Regex::new("^(?s:.*)$")
            } else {
                Regex::new(&format!("^(?:{})$", self.item_filter))
            }
        })
    }
}
