/// Record parsing
///
/// Turns one plist dictionary into a typed record. Missing keys and
/// wrongly-typed values fall back to the field's zero value. The only way to
/// get no record at all is to hand in something that isn't a dictionary.

use super::models::{Connection, ConnectionGroup};
use super::node::Node;

/// Something that can be read out of one element of a plist array
pub trait Record: Sized {
    /// What to call these records in log lines
    const KIND: &'static str;

    /// `None` only when `node` is not a dictionary
    fn from_node(node: &Node) -> Option<Self>;
}

impl Record for Connection {
    const KIND: &'static str = "connections";

    fn from_node(node: &Node) -> Option<Self> {
        node.as_dictionary()?;

        Some(Connection {
            id: node.string_field("ID"),
            name: node.string_field("ConnectionName"),
            driver: node.string_field("Driver"),
            // TablePlus really does spell it this way
            environment: node.string_field("Enviroment"),
            group_id: node.string_field("GroupID"),
            host: node.string_field("DatabaseHost"),
            port: node.string_field("DatabasePort"),
            database: node.string_field("DatabaseName"),
            user: node.string_field("DatabaseUser"),
            password: node.string_field("DatabasePassword"),
            status_color: node.string_field("StatusColor"),
            use_ssl: node.bool_field("isUseSSL"),
            use_private_key: node.bool_field("isUsePrivateKey"),
            safe_mode_level: node.int_field("safeModeLevel"),
            advanced_safe_mode_level: node.int_field("advancedSafeModeLevel"),
            driver_version: node.int_field("driverVersion"),
            show_system_schemas: node.bool_field("isShowSystemSchema"),
            lazy_load: node.bool_field("isLazyLoading"),
            tls_mode: node.int_field("tLSMode"),
            is_over_ssh: node.bool_field("isOverSSH"),
            is_socket: node.bool_field("isSocket"),
        })
    }
}

impl Record for ConnectionGroup {
    const KIND: &'static str = "groups";

    fn from_node(node: &Node) -> Option<Self> {
        node.as_dictionary()?;

        Some(ConnectionGroup {
            id: node.string_field("ID"),
            name: node.string_field("Name"),
        })
    }
}
