use std::collections::HashSet;
use tracing::info;

use crate::schema::normalize;

/// Restricts processing to a set of table names; empty means everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OnlyFilter {
    tables: HashSet<String>,
}

impl OnlyFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new<I, S>(tables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tables: tables
                .into_iter()
                .map(Into::into)
                .map(|t: String| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        }
    }

    /// Build from the `--only` argument
    pub fn from_args(only: Option<Vec<String>>) -> Self {
        match only {
            Some(tables) => {
                let filter = Self::new(tables);
                if !filter.is_empty() {
                    let mut names: Vec<_> = filter.tables.iter().map(String::as_str).collect();
                    names.sort_unstable();
                    info!(tables = ?names, "restricting to selected tables");
                }
                filter
            }
            None => Self::all(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Whether the entry with this raw key should be processed
    pub fn allows(&self, key: &str) -> bool {
        self.is_empty() || self.tables.contains(key) || self.tables.contains(&normalize(key))
    }
}
