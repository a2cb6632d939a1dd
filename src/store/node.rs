/// Generic property-list tree
///
/// The loader converts whatever the plist parser hands back into this small
/// tagged tree, and record parsing reads fields out of it through typed
/// accessors that never fail.

use std::collections::HashMap;

/// One node of a parsed property list
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    String(String),
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Array(Vec<Node>),
    Dictionary(HashMap<String, Node>),
    /// Dates, raw data and UIDs. Nothing in the catalog reads them.
    Other,
}

impl Node {
    /// Short name of the node's shape, for log lines and errors
    pub fn kind(&self) -> &'static str {
        match self {
            Node::String(_) => "string",
            Node::Integer(_) => "integer",
            Node::Real(_) => "real",
            Node::Boolean(_) => "boolean",
            Node::Array(_) => "array",
            Node::Dictionary(_) => "dictionary",
            Node::Other => "other",
        }
    }

    pub fn as_dictionary(&self) -> Option<&HashMap<String, Node>> {
        match self {
            Node::Dictionary(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key. Always `None` on anything but a dictionary.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_dictionary().and_then(|map| map.get(key))
    }

    /// Read a string field, defaulting to ""
    ///
    /// Numbers are written out as text so a port saved as an integer still
    /// reads as "5432".
    pub fn string_field(&self, key: &str) -> String {
        match self.get(key) {
            Some(Node::String(s)) => s.clone(),
            Some(Node::Integer(n)) => n.to_string(),
            Some(Node::Real(r)) => r.to_string(),
            _ => String::new(),
        }
    }

    /// Read a boolean flag, defaulting to false. Numbers count as true when non-zero.
    pub fn bool_field(&self, key: &str) -> bool {
        match self.get(key) {
            Some(Node::Boolean(b)) => *b,
            Some(Node::Integer(n)) => *n != 0,
            Some(Node::Real(r)) => *r != 0.0,
            _ => false,
        }
    }

    /// Read an integer setting, defaulting to 0
    ///
    /// Reals are truncated, booleans become 0/1, and values that do not fit
    /// in an `i32` fall back to 0.
    pub fn int_field(&self, key: &str) -> i32 {
        let value = match self.get(key) {
            Some(Node::Integer(n)) => *n,
            Some(Node::Real(r)) => *r as i64,
            Some(Node::Boolean(b)) => i64::from(*b),
            _ => 0,
        };
        i32::try_from(value).unwrap_or_default()
    }
}

impl From<plist::Value> for Node {
    fn from(value: plist::Value) -> Self {
        match value {
            plist::Value::String(s) => Node::String(s),
            plist::Value::Boolean(b) => Node::Boolean(b),
            plist::Value::Real(r) => Node::Real(r),
            plist::Value::Integer(i) => match i.as_signed() {
                Some(n) => Node::Integer(n),
                // Only u64 values above i64::MAX end up here
                None => i
                    .as_unsigned()
                    .map(|u| Node::Real(u as f64))
                    .unwrap_or(Node::Other),
            },
            plist::Value::Array(items) => {
                Node::Array(items.into_iter().map(Node::from).collect())
            }
            plist::Value::Dictionary(dict) => Node::Dictionary(
                dict.into_iter()
                    .map(|(key, value)| (key, Node::from(value)))
                    .collect(),
            ),
            _ => Node::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict(entries: Vec<(&str, Node)>) -> Node {
        Node::Dictionary(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_string_field() {
        let node = dict(vec![
            ("name", Node::String("Prod DB".to_string())),
            ("port", Node::Integer(5432)),
            ("flag", Node::Boolean(true)),
        ]);

        assert_eq!(node.string_field("name"), "Prod DB");
        assert_eq!(node.string_field("port"), "5432");
        assert_eq!(node.string_field("flag"), "");
        assert_eq!(node.string_field("missing"), "");
    }

    #[test]
    fn test_bool_field() {
        let node = dict(vec![
            ("yes", Node::Boolean(true)),
            ("one", Node::Integer(1)),
            ("zero", Node::Integer(0)),
            ("text", Node::String("true".to_string())),
        ]);

        assert!(node.bool_field("yes"));
        assert!(node.bool_field("one"));
        assert!(!node.bool_field("zero"));
        assert!(!node.bool_field("text"));
        assert!(!node.bool_field("missing"));
    }

    #[test]
    fn test_int_field() {
        let node = dict(vec![
            ("level", Node::Integer(3)),
            ("real", Node::Real(2.9)),
            ("flag", Node::Boolean(true)),
            ("huge", Node::Integer(i64::MAX)),
            ("text", Node::String("7".to_string())),
        ]);

        assert_eq!(node.int_field("level"), 3);
        assert_eq!(node.int_field("real"), 2);
        assert_eq!(node.int_field("flag"), 1);
        assert_eq!(node.int_field("huge"), 0);
        assert_eq!(node.int_field("text"), 0);
    }

    #[test]
    fn test_fields_on_non_dictionary() {
        let node = Node::Array(vec![Node::String("x".to_string())]);
        assert_eq!(node.get("x"), None);
        assert_eq!(node.string_field("x"), "");
        assert_eq!(node.kind(), "array");
    }

    #[test]
    fn test_from_plist_value() {
        let mut dict = plist::Dictionary::new();
        dict.insert("ID".to_string(), plist::Value::String("c1".to_string()));
        dict.insert("isUseSSL".to_string(), plist::Value::Boolean(true));
        dict.insert("safeModeLevel".to_string(), plist::Value::Integer(plist::Integer::from(2i64)));
        dict.insert("blob".to_string(), plist::Value::Data(vec![1, 2, 3]));

        let node = Node::from(plist::Value::Array(vec![plist::Value::Dictionary(dict)]));

        let Node::Array(items) = node else {
            panic!("expected an array");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].string_field("ID"), "c1");
        assert!(items[0].bool_field("isUseSSL"));
        assert_eq!(items[0].int_field("safeModeLevel"), 2);
        assert_eq!(items[0].get("blob"), Some(&Node::Other));
    }
}
