/// Freshness-checked cache for one data file
///
/// Each entry remembers the records it last loaded and the modification time
/// the file had at that point. A request only re-reads the file when that
/// time has moved (or the file appeared, vanished, or couldn't be probed).

use crate::error::CatalogError;
use crate::store::{loader, FileSystem, Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;
use tokio::sync::Mutex;
use tracing::{debug, trace, warn};

/// Last observed modification time of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Freshness {
    /// Missing file, or the probe failed. Never equal to a real timestamp.
    Never,
    At(SystemTime),
}

impl Freshness {
    fn last_modified(self) -> Option<DateTime<Utc>> {
        match self {
            Freshness::Never => None,
            Freshness::At(time) => Some(DateTime::<Utc>::from(time)),
        }
    }
}

/// Point-in-time view of one cache entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStatus {
    pub path: PathBuf,
    pub initialized: bool,
    pub records: usize,
    pub last_modified: Option<DateTime<Utc>>,
}

// Records and timestamp only ever change together, under the entry's lock
struct EntryState<T> {
    records: Arc<Vec<T>>,
    observed: Freshness,
    initialized: bool,
}

/// Cached records of one file
pub struct CacheEntry<T> {
    path: PathBuf,
    fs: Arc<dyn FileSystem>,
    state: Mutex<EntryState<T>>,
}

impl<T> CacheEntry<T>
where
    T: Record + Send + Sync + 'static,
{
    pub fn new(path: PathBuf, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            path,
            fs,
            state: Mutex::new(EntryState {
                records: Arc::new(Vec::new()),
                observed: Freshness::Never,
                initialized: false,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current records, reloading first if the file changed
    ///
    /// Holds the entry's lock for the whole check-and-reload, so concurrent
    /// callers wait for an in-flight reload and then get its result instead of
    /// reloading again. Returns the same `Arc` for as long as the file is
    /// unchanged.
    pub async fn get(&self) -> Arc<Vec<T>> {
        let mut state = self.state.lock().await;

        // Probe before reading so a write racing the read shows up next time
        let observed = self.probe();
        if state.initialized && state.observed == observed {
            trace!(path = %self.path.display(), "Cache hit");
            return Arc::clone(&state.records);
        }

        match self.reload().await {
            Ok(records) => {
                debug!(
                    path = %self.path.display(),
                    kind = T::KIND,
                    records = records.len(),
                    "Reloaded data file"
                );
                state.records = Arc::new(records);
                state.observed = observed;
                state.initialized = true;
            }
            Err(e) => {
                // Leave the entry as it was so the next call retries
                warn!(path = %self.path.display(), error = %e, "Reload did not finish");
            }
        }

        Arc::clone(&state.records)
    }

    /// What the entry holds right now. Never touches the disk.
    pub async fn status(&self) -> FileStatus {
        let state = self.state.lock().await;
        FileStatus {
            path: self.path.clone(),
            initialized: state.initialized,
            records: state.records.len(),
            last_modified: state.observed.last_modified(),
        }
    }

    fn probe(&self) -> Freshness {
        match self.fs.modified(&self.path) {
            Ok(time) => Freshness::At(time),
            Err(_) => Freshness::Never,
        }
    }

    // Parsing is blocking work, keep it off the async workers
    async fn reload(&self) -> Result<Vec<T>, CatalogError> {
        let fs = Arc::clone(&self.fs);
        let path = self.path.clone();
        let records =
            tokio::task::spawn_blocking(move || loader::load::<T>(fs.as_ref(), &path)).await?;
        Ok(records)
    }
}
