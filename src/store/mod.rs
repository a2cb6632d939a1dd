/// On-disk TablePlus data
///
/// Record types, the generic plist tree, and the loader that turns a data
/// file into records.

pub mod loader;
pub mod models;
pub mod node;
pub mod parser;

pub use loader::{FileSystem, OsFileSystem};
pub use models::*;
pub use node::Node;
pub use parser::Record;
