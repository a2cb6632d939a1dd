/// Core functionality modules
///
/// Contains the catalog itself: per-file caching, the connection/group join,
/// and fuzzy search over the result.

pub mod cache;
pub mod catalog;
pub mod join;
pub mod searcher;

pub use cache::{CacheEntry, FileStatus};
pub use catalog::{Catalog, CatalogStatus};
pub use join::join;
pub use searcher::{SearchResult, Searcher};
