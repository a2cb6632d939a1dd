/// Data models for TablePlus' saved data
///
/// Field names follow the catalog's own vocabulary; the plist key each one is
/// read from lives in the record parser.

use serde::{Deserialize, Serialize};

/// URI scheme TablePlus registers for opening saved connections
pub const LAUNCH_SCHEME: &str = "tableplus";

/// Identifier of the synthetic group for connections with no (known) group
pub const UNGROUPED_ID: &str = "__EMPTY__";
pub const UNGROUPED_NAME: &str = "Ungrouped";

/// A saved database connection profile
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub id: String,
    pub name: String,
    pub driver: String, // "SQLite", "MySQL", "PostgreSQL", ...
    pub environment: String,
    pub group_id: String,
    pub host: String,
    pub port: String,
    pub database: String,
    pub user: String,
    /// Carried as-is, never interpreted and never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
    pub status_color: String,
    pub use_ssl: bool,
    pub use_private_key: bool,
    pub safe_mode_level: i32,
    pub advanced_safe_mode_level: i32,
    pub driver_version: i32,
    pub show_system_schemas: bool,
    pub lazy_load: bool,
    pub tls_mode: i32,
    pub is_over_ssh: bool,
    pub is_socket: bool,
}

impl Connection {
    /// URI that makes TablePlus open this connection
    ///
    /// TablePlus resolves everything else (host, credentials, ...) from the ID.
    pub fn launch_url(&self) -> String {
        format!("{}://?id={}", LAUNCH_SCHEME, self.id)
    }

    /// Classify the free-text environment label
    pub fn environment_kind(&self) -> Environment {
        Environment::parse(&self.environment)
    }
}

/// A named collection of connections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionGroup {
    pub id: String,
    pub name: String,
}

impl ConnectionGroup {
    /// The placeholder group for connections that don't belong anywhere
    pub fn ungrouped() -> Self {
        Self {
            id: UNGROUPED_ID.to_string(),
            name: UNGROUPED_NAME.to_string(),
        }
    }

    pub fn is_ungrouped(&self) -> bool {
        self.id == UNGROUPED_ID
    }
}

/// A connection paired with the group it resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedConnection {
    pub connection: Connection,
    pub group: ConnectionGroup,
}

/// Deployment environment a connection is labelled with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Environment {
    Local,
    Staging,
    Production,
    Other(String),
}

impl Environment {
    /// Case-insensitive parse. Anything unrecognised is kept verbatim in `Other`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "local" => Environment::Local,
            "staging" => Environment::Staging,
            "production" => Environment::Production,
            _ => Environment::Other(label.to_string()),
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Environment::Local => "local",
            Environment::Staging => "staging",
            Environment::Production => "production",
            Environment::Other(label) => label.as_str(),
        };
        write!(f, "{}", s)
    }
}
