//! Settings schema checks
//!
//! Copyright (c) 2025 Connect Services Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{Shape, ValidationContext, ValidationHelpers};
use crate::validation::error::{ErrorCode, ValidationResult};
use crate::validation::properties::validate_properties;
use serde_json::Value;

pub const PROPERTIES: &str = "properties";

/// Mandatory settings schema fields, in evaluation order
pub const REQUIRED_SETTINGS_FIELDS: [&str; 3] = ["type", "required", PROPERTIES];

// `type` is only checked to be a string; its value is not compared to "object".
const SETTINGS_FIELD_SHAPES: [(&str, Shape); 3] = [
    ("type", Shape::String),
    ("required", Shape::Array),
    (PROPERTIES, Shape::Object),
];

/// Validate a `service_settings` schema, then its `properties` map
pub fn validate_settings_schema(
    settings: &Value,
    context: &ValidationContext,
) -> ValidationResult<()> {
    let schema = ValidationHelpers::expect_object(
        settings,
        ErrorCode::ServiceSettingsPropertyWrongType,
        "service_settings",
        context,
    )?;

    ValidationHelpers::require_fields(
        schema,
        &REQUIRED_SETTINGS_FIELDS,
        ErrorCode::ServiceSettingsMissingRequiredProperty,
        "service_settings",
        context,
    )?;

    ValidationHelpers::expect_field_shapes(
        schema,
        &SETTINGS_FIELD_SHAPES,
        ErrorCode::ServiceSettingsPropertyWrongType,
        "service_settings",
        context,
    )?;

    match schema.get(PROPERTIES) {
        Some(properties) => validate_properties(properties, &context.child(PROPERTIES)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings() -> Value {
        json!({
            "type": "object",
            "required": [],
            "properties": {
                "enabled": {"type": "boolean", "default": false},
                "title": {"type": "string", "default": "USPS"}
            }
        })
    }

    fn check(value: &Value) -> ValidationResult<()> {
        validate_settings_schema(value, &ValidationContext::new().child("service_settings"))
    }

    #[test]
    fn test_valid_settings() {
        assert!(check(&settings()).is_ok());
    }

    #[test]
    fn test_settings_must_be_object() {
        let error = check(&json!([])).unwrap_err();
        assert_eq!(error.code, ErrorCode::ServiceSettingsPropertyWrongType);
        assert_eq!(error.path, "$.service_settings");
    }

    #[test]
    fn test_each_missing_field() {
        for field in REQUIRED_SETTINGS_FIELDS {
            let mut value = settings();
            value.as_object_mut().unwrap().remove(field);
            let error = check(&value).unwrap_err();
            assert_eq!(
                error.code,
                ErrorCode::ServiceSettingsMissingRequiredProperty,
                "field {}",
                field
            );
        }
    }

    #[test]
    fn test_wrong_shapes() {
        for (field, bad) in [("type", json!(99)), ("required", json!(99)), ("properties", json!([]))] {
            let mut value = settings();
            value[field] = bad;
            let error = check(&value).unwrap_err();
            assert_eq!(error.code, ErrorCode::ServiceSettingsPropertyWrongType, "field {}", field);
            assert_eq!(error.path, format!("$.service_settings.{}", field));
        }
    }

    #[test]
    fn test_all_presence_checks_precede_type_checks() {
        let value = json!({"type": 99, "required": "nope"});
        let error = check(&value).unwrap_err();
        assert_eq!(error.code, ErrorCode::ServiceSettingsMissingRequiredProperty);
        assert_eq!(error.path, "$.service_settings.properties");
    }

    #[test]
    fn test_type_value_is_not_compared() {
        let mut value = settings();
        value["type"] = json!("array");
        assert!(check(&value).is_ok());
    }

    #[test]
    fn test_required_elements_are_not_inspected() {
        let mut value = settings();
        value["required"] = json!([1, null, "not_a_property"]);
        assert!(check(&value).is_ok());
    }
}
