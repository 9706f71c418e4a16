use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

use crate::filter::OnlyFilter;
use crate::parser::decode_file;
use crate::processor::SchemaProcessor;
use crate::schema::ValidationErrorReport;
use crate::ui::{Phase, Ui};
use crate::writer::{write_definitions, MigrationDefinitions, OutputFormat};

/// Options for the `make` command
#[derive(Debug, Clone)]
pub struct MakeOptions<'a> {
    pub only: OnlyFilter,
    pub format: OutputFormat,
    pub output: Option<&'a Path>,
    pub validate: bool,
}

impl Default for MakeOptions<'_> {
    fn default() -> Self {
        Self {
            only: OnlyFilter::all(),
            format: OutputFormat::Text,
            output: None,
            validate: true,
        }
    }
}

/// Decode, validate and flatten a schema file, then write the definitions.
///
/// Fails without writing anything when validation finds errors.
pub fn make_migrations<U: Ui>(
    processor: &SchemaProcessor<'_>,
    file: &Path,
    options: &MakeOptions<'_>,
    ui: &mut U,
) -> Result<MigrationDefinitions> {
    ui.set_phase(Phase::Decoding);
    let doc = decode_file(file)?;
    ui.log(format!("{} entries in {:?}", doc.len(), file));

    if options.validate {
        ui.set_phase(Phase::Validating);
        let report = processor.validate(&doc);
        ui.report_errors(&report);
        if !report.is_empty() {
            bail!(
                "{} validation error(s) in {:?}, no definitions written",
                report.error_count(),
                file
            );
        }
    }

    ui.set_phase(Phase::Flattening);
    let definitions = processor.flatten(&doc, &options.only);
    ui.log(format!("{} migration definitions", definitions.len()));
    info!(count = definitions.len(), "flattened schema");

    ui.set_phase(Phase::Writing);
    write_definitions(&definitions, options.format, options.output)?;
    if let Some(path) = options.output {
        ui.log(format!("Wrote {:?}", path));
    }

    ui.set_phase(Phase::Complete);
    Ok(definitions)
}

/// Decode and validate a schema file.
///
/// Returns the report; fails when it is not empty.
pub fn validate_file<U: Ui>(
    processor: &SchemaProcessor<'_>,
    file: &Path,
    ui: &mut U,
) -> Result<ValidationErrorReport> {
    ui.set_phase(Phase::Decoding);
    let doc = decode_file(file)?;

    ui.set_phase(Phase::Validating);
    let report = processor.validate(&doc);
    ui.report_errors(&report);

    if !report.is_empty() {
        bail!("{} validation error(s) in {:?}", report.error_count(), file);
    }

    ui.set_phase(Phase::Complete);
    Ok(report)
}
