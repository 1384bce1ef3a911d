//! The inventory-backed build parameter.
//!
//! A [`definition::ParamDefinition`] describes what to offer (category, filter,
//! sort, cap) and [`provider::InventoryProvider`] runs the pipeline against a
//! live item source.

pub mod category;
pub mod definition;
pub mod provider;
pub mod validate;
