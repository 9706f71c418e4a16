use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::filter::OnlyFilter;
use crate::schema::{normalize, pivot_tables, EntryBody, SchemaDocument};

/// Ordered migration name -> definition string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MigrationDefinitions {
    items: Vec<(String, String)>,
}

impl MigrationDefinitions {
    /// Insert a definition; an existing name keeps its position and takes the new value
    pub fn insert(&mut self, name: String, definition: String) {
        match self.items.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = definition,
            None => self.items.push((name, definition)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, definition)| definition.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.items
            .iter()
            .map(|(name, definition)| (name.as_str(), definition.as_str()))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Serialize for MigrationDefinitions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for (name, definition) in &self.items {
            map.serialize_entry(name, definition)?;
        }
        map.end()
    }
}

/// Flatten a document into migration definitions
pub fn flatten(doc: &SchemaDocument, only: &OnlyFilter) -> MigrationDefinitions {
    let mut definitions = MigrationDefinitions::default();

    for entry in doc.entries().iter().filter(|e| only.allows(&e.key)) {
        let pivot = match entry.body {
            EntryBody::Null => pivot_tables(&entry.key),
            EntryBody::Columns(_) => None,
        };

        if let Some((first, second)) = pivot {
            debug!(key = %entry.key, "pivot table");
            definitions.insert(entry.key.clone(), format!("{} {}", first, second));
            continue;
        }

        let name = normalize(&entry.key);
        debug!(key = %entry.key, migration = %name, "flattened entry");
        definitions.insert(name, entry.definition());
    }

    definitions
}
