//! Entry point tying decoding, flattening and validation together

use crate::error::DecodeError;
use crate::filter::OnlyFilter;
use crate::parser;
use crate::schema::{
    self, ModifierRegistry, SchemaDocument, SchemaValidator, TypeRegistry,
    ValidationErrorReport,
};
use crate::writer::{self, MigrationDefinitions};

/// Turns a JSON schema description into migration definitions and an error report
#[derive(Debug, Clone, Copy)]
pub struct SchemaProcessor<'a> {
    validator: SchemaValidator<'a>,
}

impl SchemaProcessor<'static> {
    /// Processor over the standard type and modifier registries
    pub fn new() -> Self {
        Self {
            validator: SchemaValidator::standard(),
        }
    }
}

impl Default for SchemaProcessor<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> SchemaProcessor<'a> {
    pub fn with_registries(types: &'a TypeRegistry, modifiers: &'a ModifierRegistry) -> Self {
        Self {
            validator: SchemaValidator::new(types, modifiers),
        }
    }

    pub fn decode(&self, raw: &str) -> Result<SchemaDocument, DecodeError> {
        parser::decode(raw)
    }

    pub fn normalize(&self, key: &str) -> String {
        schema::normalize(key)
    }

    pub fn flatten(&self, doc: &SchemaDocument, only: &OnlyFilter) -> MigrationDefinitions {
        writer::flatten(doc, only)
    }

    pub fn validate(&self, doc: &SchemaDocument) -> ValidationErrorReport {
        self.validator.validate(doc)
    }

    pub fn is_valid_column_type(&self, token: &str) -> bool {
        self.validator.is_valid_column_type(token)
    }

    pub fn is_valid_column_modifier(&self, token: &str) -> bool {
        self.validator.is_valid_column_modifier(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_processor_round_trip() {
        let processor = SchemaProcessor::new();
        let doc = processor
            .decode(r#"{"users": {"email": "string:unique"}, "posts_tags_pivot": null}"#)
            .unwrap();

        assert!(processor.validate(&doc).is_empty());
        let definitions = processor.flatten(&doc, &OnlyFilter::all());
        assert_eq!(definitions.get("create_users_table"), Some("email:string:unique"));
        assert_eq!(definitions.get("posts_tags_pivot"), Some("posts tags"));
    }

    #[test]
    fn test_processor_with_custom_registries() {
        let types = TypeRegistry::new(&["geography"]);
        let modifiers = ModifierRegistry::new(&["srid"]);
        let processor = SchemaProcessor::with_registries(&types, &modifiers);

        let doc = processor
            .decode(r#"{"places": {"area": "geography:srid(4326)", "name": "string"}}"#)
            .unwrap();
        let report = processor.validate(&doc);

        assert!(processor.is_valid_column_type("geography"));
        assert!(processor.is_valid_column_modifier("srid(4326)"));
        assert!(report.entry("places").unwrap().column("area").is_none());
        assert_eq!(
            report.error("places", "name", schema::ErrorKind::ColumnType),
            Some("string")
        );
    }
}
