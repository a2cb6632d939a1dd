/// Catalog configuration
///
/// Resolves where TablePlus keeps its data files and whether the catalog
/// should warm its caches in the background when it is created.

use crate::error::{CatalogError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable that points the catalog at a different data directory
pub const DATA_DIR_ENV: &str = "TABLEPLUS_DATA_DIR";

/// TablePlus' data directory, relative to the per-user local app-data folder
const TABLEPLUS_DATA_SUBDIR: &[&str] = &["com.tinyapp.TablePlus", "data"];

const CONNECTIONS_FILE: &str = "Connections.plist";
const GROUPS_FILE: &str = "ConnectionGroups.plist";

/// Where to find the two TablePlus files and how to start up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub data_dir: PathBuf,
    pub warm_up: bool,
}

impl CatalogConfig {
    /// Build a config from the environment
    ///
    /// Uses `TABLEPLUS_DATA_DIR` if set, otherwise the platform's local app-data
    /// directory (`%LOCALAPPDATA%` on Windows, `~/.local/share` on Linux, ...).
    ///
    /// # Returns
    /// * `Ok(CatalogConfig)` - Config with warm-up enabled
    /// * `Err(CatalogError::Config)` - If no local data directory can be found
    pub fn from_env() -> Result<Self> {
        let override_dir = env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        let data_dir = resolve_data_dir(override_dir)?;
        Ok(Self::with_data_dir(data_dir))
    }

    /// Config rooted at an explicit directory
    pub fn with_data_dir<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            warm_up: true,
        }
    }

    /// Turn the construction-time warm-up on or off
    pub fn warm_up(mut self, enabled: bool) -> Self {
        self.warm_up = enabled;
        self
    }

    pub fn connections_path(&self) -> PathBuf {
        self.data_dir.join(CONNECTIONS_FILE)
    }

    pub fn groups_path(&self) -> PathBuf {
        self.data_dir.join(GROUPS_FILE)
    }
}

// An empty override counts as unset
fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }

    let base = dirs::data_local_dir().ok_or_else(|| {
        CatalogError::Config("Could not determine local app-data directory".to_string())
    })?;

    Ok(TABLEPLUS_DATA_SUBDIR
        .iter()
        .fold(base, |path, part| path.join(part)))
}
