use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::DecodeError;
use crate::schema::{EntryBody, SchemaDocument, SchemaEntry};

/// Decode JSON text into a schema document, keeping key order
pub fn decode(raw: &str) -> Result<SchemaDocument, DecodeError> {
    let json: Value = serde_json::from_str(raw)?;

    let object = match json {
        Value::Object(object) => object,
        other => return Err(DecodeError::NotAnObject(json_kind(&other))),
    };

    let mut entries = Vec::with_capacity(object.len());

    for (key, body) in object {
        let body = match body {
            Value::Null => EntryBody::Null,
            Value::Object(columns) => {
                let mut parsed = Vec::with_capacity(columns.len());
                for (column, spec) in columns {
                    match spec {
                        Value::String(spec) => parsed.push((column, spec)),
                        other => {
                            return Err(DecodeError::InvalidColumn {
                                key,
                                column,
                                found: json_kind(&other),
                            })
                        }
                    }
                }
                EntryBody::Columns(parsed)
            }
            other => {
                return Err(DecodeError::InvalidEntry {
                    key,
                    found: json_kind(&other),
                })
            }
        };

        entries.push(SchemaEntry::new(key, body));
    }

    debug!(entries = entries.len(), "decoded schema document");
    Ok(SchemaDocument::new(entries))
}

/// Read a JSON file and decode it
pub fn decode_file(path: &Path) -> Result<SchemaDocument> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read: {:?}", path))?;

    decode(&raw).with_context(|| format!("Failed to decode: {:?}", path))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
