/// Error types for tableplus-catalog
///
/// Errors only exist inside the crate's loading helpers and at construction time.
/// The catalog's read path logs them and falls back to empty data instead.

use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O errors (missing files, permissions, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file exists but is not a readable property list
    #[error("Property list error: {0}")]
    Plist(#[from] plist::Error),

    /// The property list parsed, but its root is not an array
    #[error("Unexpected root node: expected an array, found {0}")]
    UnexpectedRoot(&'static str),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A background load panicked or was cancelled
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Convert CatalogError to a user-friendly error message
impl CatalogError {
    pub fn user_message(&self) -> String {
        match self {
            CatalogError::Io(e) => {
                format!("Could not read TablePlus data. Check permissions. Details: {}", e)
            }
            CatalogError::Plist(e) => {
                format!("TablePlus data file is damaged or unreadable. Details: {}", e)
            }
            CatalogError::UnexpectedRoot(found) => {
                format!("TablePlus data file has an unexpected layout ({})", found)
            }
            CatalogError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            CatalogError::Task(e) => {
                format!("Loading TablePlus data failed in the background. Details: {}", e)
            }
        }
    }

    /// True when the error just means the file is not there yet
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
