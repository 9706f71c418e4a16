use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::flatten::MigrationDefinitions;

/// How flattened definitions are written out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `name => definition` line per migration
    #[default]
    Text,
    /// A single JSON object in migration order
    Json,
}

/// Render definitions in the requested format
pub fn render_definitions(
    definitions: &MigrationDefinitions,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(definitions
            .iter()
            .map(|(name, definition)| format!("{} => {}\n", name, definition))
            .collect()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(definitions)
                .context("Failed to serialize definitions")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write definitions to a file, or stdout when no path is given
pub fn write_definitions(
    definitions: &MigrationDefinitions,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let rendered = render_definitions(definitions, format)?;

    match output {
        Some(path) => {
            fs::write(path, rendered).with_context(|| format!("Failed to write: {:?}", path))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MigrationDefinitions {
        let mut definitions = MigrationDefinitions::default();
        definitions.insert("create_users_table".into(), "email:string:unique".into());
        definitions.insert("posts_tags_pivot".into(), "posts tags".into());
        definitions
    }

    #[test]
    fn test_render_text() {
        let text = render_definitions(&sample(), OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "create_users_table => email:string:unique\nposts_tags_pivot => posts tags\n"
        );
    }

    #[test]
    fn test_render_json_keeps_order() {
        let json = render_definitions(&sample(), OutputFormat::Json).unwrap();
        let users = json.find("create_users_table").unwrap();
        let pivot = json.find("posts_tags_pivot").unwrap();
        assert!(users < pivot);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["posts_tags_pivot"], "posts tags");
    }

    #[test]
    fn test_write_to_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        write_definitions(&sample(), OutputFormat::Text, Some(file.path())).unwrap();
        let written = std::fs::read_to_string(file.path()).unwrap();
        assert!(written.starts_with("create_users_table => "));
    }
}
