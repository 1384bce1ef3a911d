//! Fixed vocabularies for the parameter definition.
//!
//! The category and sort-order names are persisted as strings in job
//! configurations, so the serialized forms here are stable.

use serde::{Deserialize, Serialize};

/// An inventory item type fetchable from the Chef server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemCategory {
    Environments,
    Nodes,
    Roles,
    Cookbooks,
    Databags,
    Clients,
    Users,
    Groups,
    Policies,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 9] = [
        ItemCategory::Environments,
        ItemCategory::Nodes,
        ItemCategory::Roles,
        ItemCategory::Cookbooks,
        ItemCategory::Databags,
        ItemCategory::Clients,
        ItemCategory::Users,
        ItemCategory::Groups,
        ItemCategory::Policies,
    ];

    /// Human-readable name for selection UIs.
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemCategory::Environments => "Environments",
            ItemCategory::Nodes => "Nodes",
            ItemCategory::Roles => "Roles",
            ItemCategory::Cookbooks => "Cookbooks",
            ItemCategory::Databags => "Databags",
            ItemCategory::Clients => "Clients",
            ItemCategory::Users => "Users",
            ItemCategory::Groups => "Groups",
            ItemCategory::Policies => "Policies",
        }
    }

    /// Path segment of the Chef server index endpoint for this category.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ItemCategory::Environments => "environments",
            ItemCategory::Nodes => "nodes",
            ItemCategory::Roles => "roles",
            ItemCategory::Cookbooks => "cookbooks",
            ItemCategory::Databags => "data",
            ItemCategory::Clients => "clients",
            ItemCategory::Users => "users",
            ItemCategory::Groups => "groups",
            ItemCategory::Policies => "policies",
        }
    }
}

/// Direction of the lexicographic sort applied to listed items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Asc, SortOrder::Desc];

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }
}
