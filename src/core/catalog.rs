/// The connection catalog
///
/// Owns one cache entry per TablePlus data file and joins them into the list
/// a launcher shows. Reads never fail: anything that goes wrong on disk shows
/// up as missing data, never as an error.

use super::cache::{CacheEntry, FileStatus};
use super::join;
use crate::config::CatalogConfig;
use crate::error::Result;
use crate::store::{Connection, ConnectionGroup, FileSystem, GroupedConnection, OsFileSystem};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Cache state of both data files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStatus {
    pub connections: FileStatus,
    pub groups: FileStatus,
}

/// Cached, joined view over TablePlus' connections and groups
pub struct Catalog {
    config: CatalogConfig,
    connections: Arc<CacheEntry<Connection>>,
    groups: Arc<CacheEntry<ConnectionGroup>>,
}

impl Catalog {
    /// Catalog over the TablePlus data directory of the current user
    ///
    /// # Returns
    /// * `Ok(Catalog)` - Ready to query; warm-up already started if a runtime is running
    /// * `Err(CatalogError::Config)` - If the data directory can't be located
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(CatalogConfig::from_env()?))
    }

    pub fn new(config: CatalogConfig) -> Self {
        Self::with_file_system(config, Arc::new(OsFileSystem))
    }

    /// Catalog reading through a custom file system
    pub fn with_file_system(config: CatalogConfig, fs: Arc<dyn FileSystem>) -> Self {
        let catalog = Self {
            connections: Arc::new(CacheEntry::new(config.connections_path(), Arc::clone(&fs))),
            groups: Arc::new(CacheEntry::new(config.groups_path(), fs)),
            config,
        };

        if catalog.config.warm_up {
            // Fire and forget
            let _ = catalog.warm_up();
        }

        catalog
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Load both files in the background so the first real request is fast
    ///
    /// Returns `None` when called outside a Tokio runtime. The handle only
    /// exists so callers can wait for it; nothing depends on it finishing.
    pub fn warm_up(&self) -> Option<JoinHandle<()>> {
        let Ok(handle) = Handle::try_current() else {
            debug!("No async runtime, skipping catalog warm-up");
            return None;
        };

        let connections = Arc::clone(&self.connections);
        let groups = Arc::clone(&self.groups);
        let loads = handle.spawn(async move {
            tokio::join!(connections.get(), groups.get());
        });

        // Swallow panics from the loads here, they are retried on demand
        Some(handle.spawn(async move {
            if let Err(e) = loads.await {
                warn!(error = %e, "Catalog warm-up failed");
            }
        }))
    }

    /// All saved connections, in file order
    pub async fn connections(&self) -> Arc<Vec<Connection>> {
        self.connections.get().await
    }

    /// All connection groups, in file order
    pub async fn groups(&self) -> Arc<Vec<ConnectionGroup>> {
        self.groups.get().await
    }

    /// Every connection paired with its group, in connection order
    ///
    /// Doesn't look at the groups file at all when there are no connections.
    pub async fn connections_with_groups(&self) -> Vec<GroupedConnection> {
        let connections = self.connections().await;
        if connections.is_empty() {
            return Vec::new();
        }

        let groups = self.groups().await;
        join::join(&connections, &groups)
    }

    /// Find a connection by its TablePlus ID
    pub async fn find(&self, id: &str) -> Option<Connection> {
        self.connections()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Cache state of both files, without touching the disk
    pub async fn status(&self) -> CatalogStatus {
        CatalogStatus {
            connections: self.connections.status().await,
            groups: self.groups.status().await,
        }
    }
}
