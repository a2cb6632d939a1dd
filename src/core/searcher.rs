/// Connection searcher with fuzzy matching
///
/// Provides fuzzy search over the joined catalog for launcher queries.

use super::catalog::Catalog;
use crate::store::{Environment, GroupedConnection};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One search hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub entry: GroupedConnection,
    pub score: i64, // Fuzzy match score, higher is better
}

/// Handles connection searching with fuzzy matching
pub struct Searcher {
    catalog: Arc<Catalog>,
    matcher: SkimMatcherV2,
}

impl Searcher {
    /// Create a new searcher instance
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Search connections with fuzzy matching
    ///
    /// Matches against the connection name, group name, host, database and
    /// driver. A blank query returns the catalog as-is.
    ///
    /// # Arguments
    /// * `query` - Search query
    /// * `limit` - Maximum results to return
    ///
    /// # Returns
    /// Results sorted by score, ties kept in catalog order
    pub async fn search(&self, query: &str, limit: usize) -> Vec<SearchResult> {
        let entries = self.catalog.connections_with_groups().await;
        let query = query.trim();

        if query.is_empty() {
            return entries
                .into_iter()
                .take(limit)
                .map(|entry| SearchResult { entry, score: 0 })
                .collect();
        }

        let mut results: Vec<SearchResult> = entries
            .into_iter()
            .filter_map(|entry| {
                self.matcher
                    .fuzzy_match(&haystack(&entry), query)
                    .map(|score| SearchResult { entry, score })
            })
            .collect();

        // Stable sort, highest score first
        results.sort_by(|a, b| b.score.cmp(&a.score));

        results.truncate(limit);

        results
    }

    /// Connections labelled with the given environment
    pub async fn by_environment(&self, environment: &Environment) -> Vec<GroupedConnection> {
        self.catalog
            .connections_with_groups()
            .await
            .into_iter()
            .filter(|entry| &entry.connection.environment_kind() == environment)
            .collect()
    }
}

fn haystack(entry: &GroupedConnection) -> String {
    let connection = &entry.connection;
    [
        connection.name.as_str(),
        entry.group.name.as_str(),
        connection.host.as_str(),
        connection.database.as_str(),
        connection.driver.as_str(),
    ]
    .iter()
    .filter(|part| !part.is_empty())
    .copied()
    .collect::<Vec<_>>()
    .join(" ")
}
