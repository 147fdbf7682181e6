//! Validate command handler

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::{DocumentReport, OutputWriter};
use connect_schemas::{
    summarize_services, SchemaValidator, ServiceSummary, ServicesValidator, ValidationConfig,
    ValidationResult,
};
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

/// Path argument that reads the document from stdin
const STDIN_PATH: &str = "-";

/// Handle the validate command
pub fn handle_validate(
    args: ValidateArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let timer = Timer::with_details("validate", &format!("{} document(s)", args.files.len()));

    let stdin_reads = args.files.iter().filter(|p| p.as_path() == Path::new(STDIN_PATH)).count();
    if stdin_reads > 1 {
        return Err(Error::invalid_args("stdin ('-') can only be given once"));
    }

    output.info(&format!("Validating {} document(s)", args.files.len()))?;

    let scope = resolve_scope(&args, &config.validation);
    debug!(groups = ?scope.groups, all_groups = scope.all_groups, "Resolved group scope");
    let validator = ServicesValidator::with_config(scope.clone());

    let progress = if args.files.len() > 1 {
        output.progress_bar(args.files.len() as u64, "Validating documents")
    } else {
        None
    };

    let mut reports = Vec::with_capacity(args.files.len());
    for path in &args.files {
        if let Some(pb) = &progress {
            pb.set_message(path.display().to_string());
        }

        let document = match load_document(path) {
            Ok(document) => document,
            Err(e) => {
                if let Some(pb) = &progress {
                    pb.finish_and_clear();
                }
                // Keep the verdicts already reached before giving up on the batch
                if !reports.is_empty() {
                    output.reports(&reports)?;
                }
                return Err(e);
            }
        };
        if !has_group_in_scope(&document, &scope) {
            output.warning(&format!(
                "{}: no service groups in scope, nothing to check",
                path.display()
            ))?;
        }

        let outcome = if args.detailed {
            summarize_services(&document, &scope).map(Some)
        } else {
            validator.validate(&document).map(|()| None)
        };
        let report = build_report(path, outcome);

        if let Some(pb) = &progress {
            pb.inc(1);
        }

        let stop = !report.valid && args.fail_fast;
        reports.push(report);
        if stop {
            warn!(file = %path.display(), "Stopping at first invalid document");
            break;
        }
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    output.reports(&reports)?;

    let failed = reports.iter().filter(|r| !r.valid).count();
    info!(
        checked = reports.len(),
        failed,
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Validation finished"
    );

    if failed > 0 {
        return Err(Error::ValidationFailed {
            failed,
            total: reports.len(),
        });
    }

    Ok(())
}

/// Command-line group flags replace the configured scope
fn resolve_scope(args: &ValidateArgs, configured: &ValidationConfig) -> ValidationConfig {
    if args.all_groups {
        ValidationConfig::all_groups()
    } else if !args.groups.is_empty() {
        ValidationConfig::with_groups(args.groups.iter().cloned())
    } else {
        configured.clone()
    }
}

/// Whether an object document has at least one key the scope treats as a group
fn has_group_in_scope(document: &Value, scope: &ValidationConfig) -> bool {
    match document.as_object() {
        Some(groups) => groups.keys().any(|key| scope.includes_group(key)),
        // Non-objects are rejected by validation itself
        None => true,
    }
}

fn build_report(
    path: &Path,
    outcome: ValidationResult<Option<Vec<ServiceSummary>>>,
) -> DocumentReport {
    let file = path.display().to_string();
    match outcome {
        Ok(services) => DocumentReport {
            file,
            valid: true,
            error: None,
            services,
        },
        Err(error) => {
            debug!(file = %file, code = %error.code, path = %error.path, "Document rejected");
            DocumentReport {
                file,
                valid: false,
                error: Some(error),
                services: None,
            }
        }
    }
}

/// Read and decode a services document
///
/// Files ending in `.yaml`/`.yml` are decoded as YAML, everything else
/// (including stdin) as JSON.
fn load_document(path: &Path) -> Result<Value> {
    let content = if path == Path::new(STDIN_PATH) {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        std::fs::read_to_string(path)?
    };

    decode_document(path, &content)
}

fn decode_document(path: &Path, content: &str) -> Result<Value> {
    let is_yaml = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false);

    if is_yaml {
        serde_yaml::from_str(content).map_err(|e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "YAML".to_string(),
            reason: e.to_string(),
        })
    } else {
        serde_json::from_str(content).map_err(|e| Error::InvalidFormat {
            path: path.to_path_buf(),
            expected: "JSON".to_string(),
            reason: e.to_string(),
        })
    }
}
