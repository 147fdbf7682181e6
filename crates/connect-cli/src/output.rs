//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable) with support for
//! validation reports and progress indicators.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use connect_schemas::{ServiceSummary, ValidationError};
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::{debug, trace};

/// Verdict for one validated document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Where the document was read from (`-` for stdin)
    pub file: String,
    pub valid: bool,
    /// First structural defect, when invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ValidationError>,
    /// Services found in a valid document, when requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<ServiceSummary>>,
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format the reports of a validation run
    fn format_reports(&self, reports: &[DocumentReport]) -> Result<String>;

    /// Format a single validation error
    fn format_validation_error(&self, error: &ValidationError) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_reports(&self, reports: &[DocumentReport]) -> Result<String> {
        match self {
            OutputFormat::Human => format_reports_human(reports),
            _ => self.format(&reports),
        }
    }

    fn format_validation_error(&self, error: &ValidationError) -> Result<String> {
        match self {
            OutputFormat::Human => format_validation_error_human(error),
            _ => self.format(error),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, progress: bool) -> Self {
        Self {
            format,
            use_color,
            show_progress: progress && !quiet && io::stderr().is_terminal(),
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    #[cfg(test)]
    pub fn with_writer(format: OutputFormat, quiet: bool, writer: Box<dyn Write>) -> Self {
        Self {
            format,
            use_color: false,
            show_progress: false, // No progress bars with custom writers
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!("Outputting data: {} bytes", formatted.len());

        if self.format == OutputFormat::Human {
            self.writeln(&formatted)
        } else {
            // For machine formats, write as-is
            self.write(&formatted)
        }
    }

    /// Write the reports of a validation run.
    ///
    /// Machine formats emit the whole list; the human format prints each
    /// report as it is described by [`format_reports_human`].
    pub fn reports(&mut self, reports: &[DocumentReport]) -> Result<()> {
        let formatted = self.format.format_reports(reports)?;
        self.writeln(&formatted)
    }

    /// Create a progress bar for validating several documents
    pub fn progress_bar(&self, length: u64, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new(length);
        pb.set_style(default_progress_style());
        pb.set_message(message.to_string());
        Some(pb)
    }

    /// Write a table (for human format)
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        // Calculate column widths
        let mut widths = headers.iter().map(|h| h.len()).collect::<Vec<_>>();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.len());
                }
            }
        }

        let header_row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ");

        if self.use_color {
            self.writeln(&header_row.bold().to_string())?;
        } else {
            self.writeln(&header_row)?;
        }

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        self.writeln(&separator)?;

        for row in rows {
            let row_str = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    if i < widths.len() {
                        format!("{:width$}", cell, width = widths[i])
                    } else {
                        cell.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(" │ ");
            self.writeln(row_str.trim_end())?;
        }

        Ok(())
    }
}

/// Helper function to create a progress bar style
pub fn default_progress_style() -> ProgressStyle {
    ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-")
}

/// Format validation reports for human reading
fn format_reports_human(reports: &[DocumentReport]) -> Result<String> {
    let mut output = String::new();
    let failed = reports.iter().filter(|r| !r.valid).count();

    for report in reports {
        if report.valid {
            output.push_str(&format!("✓ {}: valid\n", report.file));
        } else {
            output.push_str(&format!("✗ {}: invalid\n", report.file));
        }

        if let Some(error) = &report.error {
            let rendered = OutputFormat::Human.format_validation_error(error)?;
            output.push_str(&indent(&rendered));
        }

        if let Some(services) = &report.services {
            if services.is_empty() {
                output.push_str("  (no services in scope)\n");
            }
            for service in services {
                output.push_str(&format!(
                    "  • {}[{}] {}: {} ({} properties)\n",
                    service.group,
                    service.index,
                    service.id,
                    service.method_title,
                    service.property_names.len()
                ));
            }
        }
    }

    output.push_str(&format!(
        "\n{} document(s) checked, {} valid, {} invalid",
        reports.len(),
        reports.len() - failed,
        failed
    ));

    Ok(output)
}

/// Format a single validation error for human reading
fn format_validation_error_human(error: &ValidationError) -> Result<String> {
    let mut output = String::new();

    output.push_str(&format!("📍 Path: {}\n", error.path));
    output.push_str(&format!("🏷  Code: {}\n", error.code));
    output.push_str(&format!("💬 Message: {}\n", error.message));
    output.push_str(&format!("   Expected: {}\n", error.violation.expected));
    output.push_str(&format!("   Actual: {}\n", error.violation.actual));

    Ok(output)
}

fn indent(text: &str) -> String {
    text.lines().map(|line| format!("  {}\n", line)).collect()
}
