//! Error code listing handler

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::OutputWriter;
use connect_schemas::ErrorCode;
use serde::Serialize;

/// One row of the code listing
#[derive(Debug, Serialize)]
struct CodeEntry {
    code: &'static str,
    description: &'static str,
}

fn code_entries() -> Vec<CodeEntry> {
    ErrorCode::ALL
        .iter()
        .map(|code| CodeEntry {
            code: code.as_str(),
            description: code.description(),
        })
        .collect()
}

/// Handle the codes command
pub fn handle_codes(output: &mut OutputWriter) -> Result<()> {
    let entries = code_entries();

    if output.format() != OutputFormat::Human {
        return output.data(&entries);
    }

    output.section("Validation error codes")?;
    output.table(
        &["CODE", "DESCRIPTION"],
        entries
            .iter()
            .map(|entry| vec![entry.code.to_string(), entry.description.to_string()])
            .collect(),
    )
}
