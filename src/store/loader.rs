/// Plist file loading
///
/// Reads one TablePlus data file and maps each dictionary in its top-level
/// array to a record. Loading never fails outwardly: a missing, unreadable or
/// oddly shaped file simply yields no records.

use super::node::Node;
use super::parser::Record;
use crate::error::{CatalogError, Result};
use std::io::Cursor;
use std::path::Path;
use std::time::SystemTime;
use tracing::{debug, warn};

/// The two file operations the catalog needs
///
/// Swappable so tests can count or fake disk access.
pub trait FileSystem: Send + Sync {
    /// Last modification time of `path`
    fn modified(&self, path: &Path) -> std::io::Result<SystemTime>;

    /// Whole contents of `path`
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;
}

/// The real disk
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn modified(&self, path: &Path) -> std::io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }

    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(path)
    }
}

/// Load every record from `path`, in file order
///
/// Errors are logged and swallowed. A file that doesn't exist is not worth
/// more than a debug line.
pub fn load<T: Record>(fs: &dyn FileSystem, path: &Path) -> Vec<T> {
    match try_load(fs, path) {
        Ok(records) => records,
        Err(e) if e.is_not_found() => {
            debug!(path = %path.display(), kind = T::KIND, "No data file, treating as empty");
            Vec::new()
        }
        Err(e) => {
            warn!(path = %path.display(), kind = T::KIND, error = %e, "Failed to load data file, treating as empty");
            Vec::new()
        }
    }
}

/// Load records, reporting why when nothing could be read
///
/// Elements of the root array that are not dictionaries are skipped.
pub fn try_load<T: Record>(fs: &dyn FileSystem, path: &Path) -> Result<Vec<T>> {
    let bytes = fs.read(path)?;
    let root = Node::from(plist::Value::from_reader(Cursor::new(bytes))?);
    let kind = root.kind();

    let Node::Array(items) = root else {
        return Err(CatalogError::UnexpectedRoot(kind));
    };

    let total = items.len();
    let records: Vec<T> = items.iter().filter_map(T::from_node).collect();

    if records.len() < total {
        debug!(
            path = %path.display(),
            kind = T::KIND,
            skipped = total - records.len(),
            "Skipped non-dictionary entries"
        );
    }

    Ok(records)
}
