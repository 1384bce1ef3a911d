//! The listing pipeline and build-value resolution.

use log::{debug, info};
use serde::Serialize;

use crate::credentials::CredentialResolver;
use crate::error::ProviderError;
use crate::source::ItemSource;

use super::definition::ParamDefinition;
use super::category::SortOrder;

/// The single value bound to a build, either user-submitted or the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedValue {
    pub name: String,
    pub value: String,
}

impl ResolvedValue {
    /// Resolve the value a build will use.
    ///
    /// An absent or empty submission falls back to the configured default; a
    /// whitespace-only submission counts as submitted and is kept as-is. A
    /// non-empty submission is taken verbatim; it is not checked against the
    /// currently listable set, matching the host's historical behavior. A
    /// possible hardening point, deliberately not taken here.
    ///
    /// Pure over the definition: no credentials, no remote calls.
    pub fn from_submission(definition: &ParamDefinition, requested: Option<&str>) -> Self {
        let value = match requested {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => definition.default_value.clone(),
        };

        Self {
            name: definition.name.clone(),
            value,
        }
    }

    /// Default value injected when a build starts without user input.
    /// `None` when the definition carries no default.
    pub fn from_default(definition: &ParamDefinition) -> Option<Self> {
        if definition.default_value.is_empty() {
            return None;
        }

        Some(Self {
            name: definition.name.clone(),
            value: definition.default_value.clone(),
        })
    }
}

/// Turns a [`ParamDefinition`] plus a live inventory listing into the set of
/// selectable values and the value a build ends up with.
pub struct InventoryProvider<'a> {
    source: &'a dyn ItemSource,
    credentials: &'a dyn CredentialResolver,
}

impl<'a> InventoryProvider<'a> {
    pub fn new(source: &'a dyn ItemSource, credentials: &'a dyn CredentialResolver) -> Self {
        Self { source, credentials }
    }

    /// List the item names offered for selection.
    ///
    /// Pipeline: resolve credentials, fetch raw names for the definition's
    /// category, keep names fully matching the item filter (source order
    /// preserved), sort lexicographically per the configured order, then cap
    /// at the effective max. Sorting happens before the cap so "first N after
    /// sort" decides which items survive.
    ///
    /// Fetch and credential failures come back as typed errors; they are never
    /// flattened into an empty list, which would make a broken server
    /// indistinguishable from an empty inventory.
    pub fn list_selectable_items(&self, definition: &ParamDefinition) -> Result<Vec<String>, ProviderError> {
        let credential = self.credentials.resolve(&definition.credentials_id)?;

        let raw = self
            .source
            .fetch(definition.item_category, &definition.server_url, &credential)?;
        debug!(
            "Fetched {} raw {} from {}",
            raw.len(),
            definition.item_category.endpoint(),
            definition.server_url
        );

        let pattern = definition.filter_pattern()?;
        let mut items: Vec<String> = raw.into_iter().filter(|item| pattern.is_match(item)).collect();

        match definition.sort_order {
            SortOrder::Asc => items.sort(),
            SortOrder::Desc => items.sort_by(|a, b| b.cmp(a)),
        }
        items.truncate(definition.effective_max_items());

        info!(
            "Parameter {} offers {} item(s) after filter/sort/cap",
            definition.name,
            items.len()
        );
        Ok(items)
    }

    /// Resolve the value a build will use. See [`ResolvedValue::from_submission`];
    /// this needs neither the item source nor the credential resolver.
    pub fn resolve_chosen_value(&self, definition: &ParamDefinition, requested: Option<&str>) -> ResolvedValue {
        ResolvedValue::from_submission(definition, requested)
    }

    /// Default value injected when a build starts without user input.
    /// `None` when the definition carries no default.
    pub fn default_parameter_value(&self, definition: &ParamDefinition) -> Option<ResolvedValue> {
        ResolvedValue::from_default(definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{Credential, CredentialResolver};
    use crate::error::{CredentialError, RemoteError};
    use crate::param::category::{ItemCategory, SortOrder};
    use crate::source::ItemSource;

    struct FixedSource {
        items: Vec<&'static str>,
    }

    impl ItemSource for FixedSource {
        fn fetch(
            &self,
            _category: ItemCategory,
            _server_url: &str,
            _credential: &Credential,
        ) -> Result<Vec<String>, RemoteError> {
            Ok(self.items.iter().map(|s| s.to_string()).collect())
        }
    }

    struct FailingSource;

    impl ItemSource for FailingSource {
        fn fetch(
            &self,
            _category: ItemCategory,
            _server_url: &str,
            _credential: &Credential,
        ) -> Result<Vec<String>, RemoteError> {
            Err(RemoteError::Network {
                url: "https://chef.example.com/environments".to_string(),
                reason: "connection refused".to_string(),
            })
        }
    }

    struct SingleCredential;

    impl CredentialResolver for SingleCredential {
        fn resolve(&self, id: &str) -> Result<Credential, CredentialError> {
            if id == "chef-ci" {
                Ok(Credential::new("builder", "s3cret"))
            } else {
                Err(CredentialError::NotFound { id: id.to_string() })
            }
        }

        fn list_ids(&self) -> Result<Vec<String>, CredentialError> {
            Ok(vec!["chef-ci".to_string()])
        }
    }

    fn definition(filter: &str, sort_order: SortOrder, max_items: &str, default_value: &str) -> ParamDefinition {
        ParamDefinition::new(
            "CHEF_ENV",
            "",
            "https://chef.example.com",
            ItemCategory::Environments,
            filter,
            sort_order,
            default_value,
            max_items,
            "chef-ci",
        )
    }

    #[test]
    fn test_blank_filter_returns_everything_sorted_asc() {
        let source = FixedSource { items: vec!["b", "a", "c"] };
        let resolver = SingleCredential;
        let provider = InventoryProvider::new(&source, &resolver);

        let items = provider
            .list_selectable_items(&definition("", SortOrder::Asc, "", ""))
            .unwrap();
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_desc_sort_is_reverse_lexicographic() {
        let source = FixedSource { items: vec!["b", "a", "c"] };
        let resolver = SingleCredential;
        let provider = InventoryProvider::new(&source, &resolver);

        let items = provider
            .list_selectable_items(&definition("", SortOrder::Desc, "", ""))
            .unwrap();
        assert_eq!(items, vec!["c", "b", "a"]);
    }

    #[test]
    fn test_filter_keeps_full_matches_only() {
        let source = FixedSource {
            items: vec!["prod-east", "prod-west", "staging", "preprod-east"],
        };
        let resolver = SingleCredential;
        let provider = InventoryProvider::new(&source, &resolver);

        let items = provider
            .list_selectable_items(&definition("prod-.*", SortOrder::Asc, "", ""))
            .unwrap();
        assert_eq!(items, vec!["prod-east", "prod-west"]);
    }

    #[test]
    fn test_cap_returns_exactly_n_items() {
        let source = FixedSource {
            items: vec!["n1", "n2", "n3", "n4", "n5"],
        };
        let resolver = SingleCredential;
        let provider = InventoryProvider::new(&source, &resolver);

        let items = provider
            .list_selectable_items(&definition("", SortOrder::Asc, "3", ""))
            .unwrap();
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_sort_happens_before_cap() {
        // "a" arrives last from the server; with sort-then-cap it must still
        // survive a cap of 2, and "c" must not.
        let source = FixedSource { items: vec!["c", "b", "a"] };
        let resolver = SingleCredential;
        let provider = InventoryProvider::new(&source, &resolver);

        let items = provider
            .list_selectable_items(&definition("", SortOrder::Asc, "2", ""))
            .unwrap();
        assert_eq!(items, vec!["a", "b"]);
    }

    #[test]
    fn test_unparsable_max_items_is_unbounded() {
        let source = FixedSource {
            items: vec!["n1", "n2", "n3"],
        };
        let resolver = SingleCredential;
        let provider = InventoryProvider::new(&source, &resolver);

        for raw in ["abc", "", "-5"] {
            let items = provider
                .list_selectable_items(&definition("", SortOrder::Asc, raw, ""))
                .unwrap();
            assert_eq!(items.len(), 3, "maxItems={:?}", raw);
        }
    }

    #[test]
    fn test_listing_is_idempotent() {
        let source = FixedSource {
            items: vec!["web-2", "web-1", "db-1"],
        };
        let resolver = SingleCredential;
        let provider = InventoryProvider::new(&source, &resolver);
        let def = definition("web-.*", SortOrder::Desc, "5", "");

        let first = provider.list_selectable_items(&def).unwrap();
        let second = provider.list_selectable_items(&def).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec!["web-2", "web-1"]);
    }

    #[test]
    fn test_unreachable_source_is_a_remote_error_not_an_empty_list() {
        let resolver = SingleCredential;
        let provider = InventoryProvider::new(&FailingSource, &resolver);

        let err = provider
            .list_selectable_items(&definition("", SortOrder::Asc, "", ""))
            .unwrap_err();
        assert!(matches!(err, ProviderError::Remote(_)));
    }

    #[test]
    fn test_unknown_credentials_id_is_a_credential_error() {
        let source = FixedSource { items: vec![] };
        let resolver = SingleCredential;
        let provider = InventoryProvider::new(&source, &resolver);

        let mut def = definition("", SortOrder::Asc, "", "");
        def.credentials_id = "missing".to_string();

        let err = provider.list_selectable_items(&def).unwrap_err();
        assert!(matches!(err, ProviderError::Credential(CredentialError::NotFound { .. })));
    }

    #[test]
    fn test_empty_request_falls_back_to_default() {
        let source = FixedSource { items: vec![] };
        let resolver = SingleCredential;
        let provider = InventoryProvider::new(&source, &resolver);
        let def = definition("", SortOrder::Asc, "", "prod-east");

        let resolved = provider.resolve_chosen_value(&def, Some(""));
        assert_eq!(resolved.value, "prod-east");
        assert_eq!(resolved.name, "CHEF_ENV");

        let resolved = provider.resolve_chosen_value(&def, None);
        assert_eq!(resolved.value, "prod-east");
    }

    #[test]
    fn test_whitespace_submission_is_kept_verbatim() {
        let source = FixedSource { items: vec![] };
        let resolver = SingleCredential;
        let provider = InventoryProvider::new(&source, &resolver);
        let def = definition("", SortOrder::Asc, "", "prod-east");

        // Only the empty string falls back; whitespace counts as submitted.
        let resolved = provider.resolve_chosen_value(&def, Some("  "));
        assert_eq!(resolved.value, "  ");
    }

    #[test]
    fn test_resolution_needs_no_collaborators() {
        let def = definition("", SortOrder::Asc, "", "prod-east");

        let resolved = ResolvedValue::from_submission(&def, None);
        assert_eq!(resolved.value, "prod-east");

        let resolved = ResolvedValue::from_submission(&def, Some("custom"));
        assert_eq!(resolved.value, "custom");

        assert_eq!(ResolvedValue::from_default(&def).unwrap().value, "prod-east");
    }

    #[test]
    fn test_submitted_value_passes_through_unvalidated() {
        let source = FixedSource { items: vec!["prod-east"] };
        let resolver = SingleCredential;
        let provider = InventoryProvider::new(&source, &resolver);
        let def = definition("", SortOrder::Asc, "", "prod-east");

        let resolved = provider.resolve_chosen_value(&def, Some("custom"));
        assert_eq!(resolved.value, "custom");
    }

    #[test]
    fn test_default_parameter_value_absent_without_default() {
        let source = FixedSource { items: vec![] };
        let resolver = SingleCredential;
        let provider = InventoryProvider::new(&source, &resolver);

        assert!(provider
            .default_parameter_value(&definition("", SortOrder::Asc, "", ""))
            .is_none());

        let value = provider
            .default_parameter_value(&definition("", SortOrder::Asc, "", "prod-east"))
            .unwrap();
        assert_eq!(value.value, "prod-east");
    }
}
