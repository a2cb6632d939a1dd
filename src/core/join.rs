/// Connection/group join
///
/// Pairs every connection with its group by ID. Connections whose group is
/// empty or unknown land in the synthetic "Ungrouped" group.

use crate::store::{Connection, ConnectionGroup, GroupedConnection, UNGROUPED_ID};
use std::collections::HashMap;

/// Map group IDs to groups. The first group with a given ID wins.
///
/// Empty IDs and the reserved Ungrouped ID are left out.
pub fn group_lookup(groups: &[ConnectionGroup]) -> HashMap<&str, &ConnectionGroup> {
    let mut lookup = HashMap::with_capacity(groups.len());
    for group in groups
        .iter()
        .filter(|g| !g.id.is_empty() && g.id != UNGROUPED_ID)
    {
        lookup.entry(group.id.as_str()).or_insert(group);
    }
    lookup
}

/// Join connections to groups, keeping connection order
pub fn join(connections: &[Connection], groups: &[ConnectionGroup]) -> Vec<GroupedConnection> {
    let lookup = group_lookup(groups);
    let ungrouped = ConnectionGroup::ungrouped();

    connections
        .iter()
        .map(|connection| {
            let group = match connection.group_id.as_str() {
                "" => None,
                id => lookup.get(id).copied(),
            };

            GroupedConnection {
                connection: connection.clone(),
                group: group.cloned().unwrap_or_else(|| ungrouped.clone()),
            }
        })
        .collect()
}
