//! Summaries of validated service documents
//!
//! Copyright (c) 2025 Connect Services Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{SchemaValidator, ValidationContext};
use crate::validation::error::ValidationResult;
use crate::validation::{ServicesValidator, ValidationConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One service entry of a document that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    /// Group the entry was found under (e.g. "shipping")
    pub group: String,
    /// Position of the entry within its group
    pub index: usize,
    pub id: String,
    pub method_title: String,
    /// Keys of the settings schema `properties` map, in document order
    pub property_names: Vec<String>,
}

/// Validate `document` and list every entry that was checked.
///
/// Returns the validation error instead of a partial listing when the
/// document does not conform.
pub fn summarize_services(
    document: &Value,
    config: &ValidationConfig,
) -> ValidationResult<Vec<ServiceSummary>> {
    let validator = ServicesValidator::with_config(config.clone());
    validator.validate_with_context(document, &ValidationContext::new())?;

    let mut summaries = Vec::new();
    let Some(groups) = document.as_object() else {
        return Ok(summaries);
    };

    for (group, entries) in groups.iter().filter(|(key, _)| config.includes_group(key)) {
        for (index, entry) in entries.as_array().into_iter().flatten().enumerate() {
            summaries.push(ServiceSummary {
                group: group.clone(),
                index,
                id: string_field(entry, "id"),
                method_title: string_field(entry, "method_title"),
                property_names: entry
                    .pointer("/service_settings/properties")
                    .and_then(Value::as_object)
                    .map(|properties| properties.keys().cloned().collect())
                    .unwrap_or_default(),
            });
        }
    }

    Ok(summaries)
}

fn string_field(entry: &Value, field: &str) -> String {
    entry
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
