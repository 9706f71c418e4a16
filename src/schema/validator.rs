//! Column spec validation against the type and modifier registries
//!
//! Validation never fails: every problem found is recorded in a
//! [`ValidationErrorReport`] and the caller decides what to do with it.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;
use tracing::debug;

use super::registry::{ModifierRegistry, TypeRegistry};
use super::types::{split_segments, ColumnToken, SchemaDocument};

/// Which part of a column spec failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ColumnType,
    ColumnModifier,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::ColumnType => "columnType",
            ErrorKind::ColumnModifier => "columnModifier",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors found on one column, at most one per [`ErrorKind`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnErrors {
    pub column_type: Option<String>,
    pub column_modifier: Option<String>,
}

impl ColumnErrors {
    pub fn get(&self, kind: ErrorKind) -> Option<&str> {
        match kind {
            ErrorKind::ColumnType => self.column_type.as_deref(),
            ErrorKind::ColumnModifier => self.column_modifier.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.column_type.is_none() && self.column_modifier.is_none()
    }

    /// Recorded errors as `(kind, offending token)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (ErrorKind, &str)> {
        [ErrorKind::ColumnType, ErrorKind::ColumnModifier]
            .into_iter()
            .filter_map(move |kind| self.get(kind).map(|token| (kind, token)))
    }
}

impl Serialize for ColumnErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (kind, token) in self.iter() {
            map.serialize_entry(kind.as_str(), token)?;
        }
        map.end()
    }
}

/// Errors found in one entry, columns in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryErrors {
    columns: Vec<(String, ColumnErrors)>,
}

impl EntryErrors {
    pub fn column(&self, name: &str) -> Option<&ColumnErrors> {
        self.columns
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, errors)| errors)
    }

    pub fn columns(&self) -> &[(String, ColumnErrors)] {
        &self.columns
    }
}

impl Serialize for EntryErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, errors) in &self.columns {
            map.serialize_entry(column, errors)?;
        }
        map.end()
    }
}

/// entry key -> column -> error kind -> offending token
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrorReport {
    entries: Vec<(String, EntryErrors)>,
}

impl ValidationErrorReport {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, key: &str) -> Option<&EntryErrors> {
        self.entries
            .iter()
            .find(|(entry, _)| entry == key)
            .map(|(_, errors)| errors)
    }

    /// Look up a single recorded error
    pub fn error(&self, entry: &str, column: &str, kind: ErrorKind) -> Option<&str> {
        self.entry(entry)?.column(column)?.get(kind)
    }

    pub fn entries(&self) -> &[(String, EntryErrors)] {
        &self.entries
    }

    /// Total number of recorded errors
    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .flat_map(|(_, entry)| entry.columns.iter())
            .map(|(_, column)| column.iter().count())
            .sum()
    }

    fn push(&mut self, entry: &str, column: &str, errors: ColumnErrors) {
        let index = match self.entries.iter().position(|(key, _)| key == entry) {
            Some(index) => index,
            None => {
                self.entries.push((entry.to_string(), EntryErrors::default()));
                self.entries.len() - 1
            }
        };

        self.entries[index]
            .1
            .columns
            .push((column.to_string(), errors));
    }
}

impl Serialize for ValidationErrorReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (entry, errors) in &self.entries {
            map.serialize_entry(entry, errors)?;
        }
        map.end()
    }
}

/// Checks column specs against injected registries
#[derive(Debug, Clone, Copy)]
pub struct SchemaValidator<'a> {
    types: &'a TypeRegistry,
    modifiers: &'a ModifierRegistry,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(types: &'a TypeRegistry, modifiers: &'a ModifierRegistry) -> Self {
        Self { types, modifiers }
    }

    /// Validator over the standard registries
    pub fn standard() -> SchemaValidator<'static> {
        SchemaValidator::new(TypeRegistry::standard(), ModifierRegistry::standard())
    }

    pub fn is_valid_column_type(&self, token: &str) -> bool {
        self.types.contains(ColumnToken::parse(token).name)
    }

    pub fn is_valid_column_modifier(&self, token: &str) -> bool {
        self.modifiers.contains(ColumnToken::parse(token).name)
    }

    /// Validate a single column spec
    pub fn validate_column(&self, spec: &str) -> ColumnErrors {
        let segments = split_segments(spec);
        let mut errors = ColumnErrors::default();

        let (column_type, modifiers) = match segments.split_first() {
            Some(parts) => parts,
            None => return errors,
        };

        if !self.is_valid_column_type(column_type) {
            errors.column_type = Some(column_type.to_string());
        }

        errors.column_modifier = modifiers
            .iter()
            .find(|modifier| !self.is_valid_column_modifier(modifier))
            .map(|modifier| modifier.to_string());

        errors
    }

    /// Validate every column of every entry; `null` entries are skipped
    pub fn validate(&self, doc: &SchemaDocument) -> ValidationErrorReport {
        let mut report = ValidationErrorReport::default();

        for entry in doc.entries() {
            if entry.body.is_null() {
                continue;
            }

            for (column, spec) in entry.body.columns() {
                let errors = self.validate_column(spec);
                if errors.is_empty() {
                    continue;
                }

                debug!(entry = %entry.key, column = %column, spec = %spec, "invalid column spec");
                report.push(&entry.key, column, errors);
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::{EntryBody, SchemaEntry};

    fn doc_with(columns: &[(&str, &str)]) -> SchemaDocument {
        let columns = columns
            .iter()
            .map(|(c, s)| (c.to_string(), s.to_string()))
            .collect();
        SchemaDocument::new(vec![SchemaEntry::new("dogs", EntryBody::Columns(columns))])
    }

    #[test]
    fn test_parenthesised_type_is_valid() {
        let report = SchemaValidator::standard().validate(&doc_with(&[("hair", "string(50):index")]));
        assert!(report.is_empty());
    }

    #[test]
    fn test_call_form_modifier_is_valid() {
        let report =
            SchemaValidator::standard().validate(&doc_with(&[("ears_valid", "string:after('id')")]));
        assert!(report.is_empty());
    }

    #[test]
    fn test_invalid_type_is_reported() {
        let report = SchemaValidator::standard()
            .validate(&doc_with(&[("paws", "yesTheyHaveThemSometimes:index")]));
        assert_eq!(
            report.error("dogs", "paws", ErrorKind::ColumnType),
            Some("yesTheyHaveThemSometimes")
        );
        assert_eq!(report.error("dogs", "paws", ErrorKind::ColumnModifier), None);
    }

    #[test]
    fn test_only_first_invalid_modifier_is_reported() {
        let report = SchemaValidator::standard()
            .validate(&doc_with(&[("ears_invalid", "string:thisIsMyInvalidModifier:alsoBad")]));
        assert_eq!(
            report.error("dogs", "ears_invalid", ErrorKind::ColumnModifier),
            Some("thisIsMyInvalidModifier")
        );
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn test_unbalanced_params_do_not_hide_modifiers() {
        let report = SchemaValidator::standard().validate(&doc_with(&[
            ("a", "string(50:thisIsMyInvalidModifier"),
            ("b", "string:default('):alsoInvalid"),
        ]));
        assert_eq!(
            report.error("dogs", "a", ErrorKind::ColumnModifier),
            Some("thisIsMyInvalidModifier")
        );
        assert_eq!(report.error("dogs", "a", ErrorKind::ColumnType), None);
        assert_eq!(
            report.error("dogs", "b", ErrorKind::ColumnModifier),
            Some("alsoInvalid")
        );
    }

    #[test]
    fn test_both_kinds_on_one_column() {
        let report = SchemaValidator::standard().validate(&doc_with(&[("tail", "wag:wiggle")]));
        let errors = report.entry("dogs").and_then(|e| e.column("tail")).unwrap();
        assert_eq!(errors.column_type.as_deref(), Some("wag"));
        assert_eq!(errors.column_modifier.as_deref(), Some("wiggle"));
        assert_eq!(report.error_count(), 2);
    }

    #[test]
    fn test_null_entries_are_skipped() {
        let doc = SchemaDocument::new(vec![
            SchemaEntry::new("posts_tags_pivot", EntryBody::Null),
            SchemaEntry::new("logs", EntryBody::Null),
        ]);
        let report = SchemaValidator::standard().validate(&doc);
        assert!(report.entry("posts_tags_pivot").is_none());
        assert!(report.entry("logs").is_none());
        assert!(report.is_empty());
    }

    #[test]
    fn test_custom_registries_are_used() {
        let types = TypeRegistry::new(&["purpleRain"]);
        let modifiers = ModifierRegistry::new(&[]);
        let validator = SchemaValidator::new(&types, &modifiers);

        assert!(validator.is_valid_column_type("purpleRain(1)"));
        assert!(!validator.is_valid_column_type("string"));
        assert!(!validator.is_valid_column_modifier("unique"));
    }

    #[test]
    fn test_report_serializes_to_nested_json() {
        let report = SchemaValidator::standard().validate(&doc_with(&[
            ("paws", "yesTheyHaveThemSometimes:index"),
            ("hair", "string(50):index"),
        ]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "dogs": { "paws": { "columnType": "yesTheyHaveThemSometimes" } }
            })
        );
    }
}
