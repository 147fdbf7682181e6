//! Root document and service group checks
//!
//! Copyright (c) 2025 Connect Services Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{ValidationContext, ValidationHelpers};
use crate::validation::error::{ErrorCode, ValidationResult};
use crate::validation::service::validate_service;
use crate::validation::ValidationConfig;
use serde_json::Value;
use tracing::{debug, trace};

/// Validate the root document and every service group in scope.
///
/// Groups are walked in document order and each group's entries are checked
/// before the next group is looked at, so the reported error is always the
/// earliest defect in that walk.
pub fn validate_container(
    document: &Value,
    context: &ValidationContext,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    let groups = ValidationHelpers::expect_object(
        document,
        ErrorCode::OutermostContainerNotObject,
        "the services document",
        context,
    )?;

    for (group, value) in groups {
        if !config.includes_group(group) {
            trace!(group = %group, "Skipping unrecognized top-level key");
            continue;
        }
        validate_group(group, value, &context.child(group))?;
    }

    Ok(())
}

/// Validate one service group: it must be an array of valid service entries
pub fn validate_group(
    group: &str,
    value: &Value,
    context: &ValidationContext,
) -> ValidationResult<()> {
    let entries = ValidationHelpers::expect_array(
        value,
        ErrorCode::ServiceTypeNotArray,
        &format!("service group '{}'", group),
        context,
    )?;
    debug!(group = %group, entries = entries.len(), "Validating service group");

    for (index, entry) in entries.iter().enumerate() {
        validate_service(entry, &context.child_index(index))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_entry() -> Value {
        json!({
            "id": "usps",
            "method_description": "USPS rates",
            "method_title": "USPS",
            "service_settings": {
                "type": "object",
                "required": [],
                "properties": {"enabled": {}, "title": {}}
            }
        })
    }

    #[test]
    fn test_root_must_be_object() {
        let config = ValidationConfig::default();
        for root in [json!([]), json!(null), json!("shipping"), json!(3), json!(true)] {
            let error = validate_container(&root, &ValidationContext::new(), &config).unwrap_err();
            assert_eq!(error.code, ErrorCode::OutermostContainerNotObject);
            assert_eq!(error.path, "$");
        }
    }

    #[test]
    fn test_group_must_be_array() {
        let document = json!({"shipping": {}});
        let error = validate_container(&document, &ValidationContext::new(), &ValidationConfig::default())
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ServiceTypeNotArray);
        assert_eq!(error.path, "$.shipping");
        assert_eq!(error.violation.actual, "object");
    }

    #[test]
    fn test_unrecognized_keys_are_ignored() {
        let document = json!({"shipping": [valid_entry()], "boxes": "not an array"});
        assert!(
            validate_container(&document, &ValidationContext::new(), &ValidationConfig::default())
                .is_ok()
        );

        let error = validate_container(&document, &ValidationContext::new(), &ValidationConfig::all_groups())
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ServiceTypeNotArray);
        assert_eq!(error.path, "$.boxes");
    }

    #[test]
    fn test_empty_document_and_empty_group_pass() {
        let config = ValidationConfig::default();
        assert!(validate_container(&json!({}), &ValidationContext::new(), &config).is_ok());
        assert!(validate_container(&json!({"shipping": []}), &ValidationContext::new(), &config).is_ok());
    }

    #[test]
    fn test_groups_walked_in_document_order() {
        let document = json!({
            "taxes": [[]],
            "shipping": {}
        });
        let error = validate_container(&document, &ValidationContext::new(), &ValidationConfig::default())
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ServiceNotObject);
        assert_eq!(error.path, "$.taxes[0]");
    }

    #[test]
    fn test_first_failing_index_is_reported() {
        let document = json!({"shipping": [valid_entry(), [], 7]});
        let error = validate_container(&document, &ValidationContext::new(), &ValidationConfig::default())
            .unwrap_err();
        assert_eq!(error.path, "$.shipping[1]");
    }
}
