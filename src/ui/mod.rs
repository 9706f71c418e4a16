//! User-facing console output
//!
//! Provides a simple API for telling the user what is happening:
//! - Current phase (Decoding, Validating, Flattening, Writing)
//! - Activity log lines
//! - The validation error report

mod report;

use crossterm::style::Stylize;
use std::io::{self, Write};

use crate::schema::ValidationErrorReport;

pub use report::report_lines;

/// Processing phases shown to the user
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Decoding,
    Validating,
    Flattening,
    Writing,
    Complete,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Decoding => write!(f, "Decoding schema"),
            Phase::Validating => write!(f, "Validating columns"),
            Phase::Flattening => write!(f, "Building migration definitions"),
            Phase::Writing => write!(f, "Writing definitions"),
            Phase::Complete => write!(f, "Complete"),
        }
    }
}

/// Trait for UI implementations - allows both console and silent/test modes
pub trait Ui {
    fn set_phase(&mut self, phase: Phase);
    fn log(&mut self, message: impl Into<String>);
    fn report_errors(&mut self, report: &ValidationErrorReport);
}

/// Console UI writing to stderr, so stdout stays free for definitions
pub struct ConsoleUi {
    color: bool,
}

impl ConsoleUi {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn write_line(&self, line: String) {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{}", line).ok();
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Ui for ConsoleUi {
    fn set_phase(&mut self, phase: Phase) {
        let indicator = match phase {
            Phase::Complete => "✓",
            _ => "⚙",
        };
        let line = format!("{} {}", indicator, phase);
        let line = match (self.color, phase) {
            (false, _) => line,
            (true, Phase::Complete) => line.green().bold().to_string(),
            (true, _) => line.cyan().bold().to_string(),
        };
        self.write_line(line);
    }

    fn log(&mut self, message: impl Into<String>) {
        self.write_line(format!("  {}", message.into()));
    }

    fn report_errors(&mut self, report: &ValidationErrorReport) {
        if report.is_empty() {
            let line = "  No validation errors found".to_string();
            let line = if self.color { line.green().to_string() } else { line };
            self.write_line(line);
            return;
        }

        let header = format!("  {} validation error(s):", report.error_count());
        let header = if self.color { header.red().bold().to_string() } else { header };
        self.write_line(header);

        for line in report_lines(report) {
            let line = format!("    {}", line);
            let line = if self.color { line.red().to_string() } else { line };
            self.write_line(line);
        }
    }
}

/// Silent UI implementation for testing and non-interactive use
#[derive(Default)]
pub struct SilentUi;

impl SilentUi {
    pub fn new() -> Self {
        Self
    }
}

impl Ui for SilentUi {
    fn set_phase(&mut self, _phase: Phase) {}
    fn log(&mut self, _message: impl Into<String>) {}
    fn report_errors(&mut self, _report: &ValidationErrorReport) {}
}
