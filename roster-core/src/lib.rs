//! Roster core library — domain types, repo layout, model mapping loader.
//!
//! Public API surface:
//! - [`types`] — newtypes and the [`ModelMapping`] alias
//! - [`layout`] — [`RepoLayout`] per-run configuration
//! - [`mapping`] — agent file discovery and directive folding
//! - [`error`] — [`RosterError`]

pub mod error;
pub mod layout;
pub mod mapping;
pub mod types;

pub use error::RosterError;
pub use layout::RepoLayout;
pub use types::{AgentName, ModelMapping, ModelName};
