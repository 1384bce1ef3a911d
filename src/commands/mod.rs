pub mod categories;
pub mod check;
pub mod completions;
pub mod config;
pub mod credentials;
pub mod list;
pub mod resolve;
