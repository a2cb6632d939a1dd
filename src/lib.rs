/// tableplus-catalog library
///
/// Reads TablePlus' saved connections and groups, caches them per file, and
/// serves them to a launcher as a joined, searchable list.

pub mod config;
pub mod core;
pub mod error;
pub mod store;

#[cfg(test)]
pub(crate) mod test_support;

// Re-exports for convenience
pub use config::CatalogConfig;
pub use crate::core::{Catalog, Searcher};
pub use error::{CatalogError, Result};
pub use store::{Connection, ConnectionGroup, Environment, GroupedConnection};
