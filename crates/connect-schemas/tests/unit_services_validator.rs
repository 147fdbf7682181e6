//! Unit tests for services document validation
//!
//! Every test starts from the golden USPS document and applies one mutation,
//! checking that the reported error code is the one callers branch on.

use serde_json::{json, Value};
use connect_schemas::{
    validate_services, validate_services_with_config, ErrorCode, SchemaValidator,
    ServicesValidator, ValidationConfig,
};

/// Helper to create the golden services document
fn golden_services() -> Value {
    json!({
        "shipping": [
            {
                "id": "usps",
                "method_description": "Obtains rates dynamically from the USPS API during cart/checkout.",
                "method_title": "USPS (WooCommerce Connect)",
                "service_settings": {
                    "type": "object",
                    "required": [],
                    "properties": {
                        "enabled": {
                            "type": "boolean",
                            "title": "Enable/Disable",
                            "description": "Enable this shipping method",
                            "default": false
                        },
                        "title": {
                            "type": "string",
                            "title": "Method Title",
                            "description": "This controls the title which the user sees during checkout.",
                            "default": "USPS"
                        }
                    }
                }
            }
        ]
    })
}

fn assert_code(services: &Value, expected: ErrorCode) {
    let result = validate_services(services);
    assert!(result.is_err(), "expected {} but document validated", expected);
    let error = result.unwrap_err();
    assert_eq!(error.code, expected, "unexpected error: {}", error);
}

fn remove(services: &mut Value, pointer: &str, key: &str) {
    services
        .pointer_mut(pointer)
        .and_then(Value::as_object_mut)
        .expect("pointer should reach an object")
        .remove(key)
        .expect("key should exist before removal");
}

#[cfg(test)]
mod golden_document {
    use super::*;

    #[test]
    fn test_golden_services_validate() {
        assert!(validate_services(&golden_services()).is_ok());
    }

    #[test]
    fn test_validation_is_idempotent_and_pure() {
        let services = golden_services();
        let before = services.clone();

        assert!(validate_services(&services).is_ok());
        assert!(validate_services(&services).is_ok());
        assert_eq!(services, before);
    }

    #[test]
    fn test_failed_validation_does_not_mutate() {
        let mut services = golden_services();
        services["shipping"][0]["id"] = json!(99);
        let before = services.clone();

        assert!(validate_services(&services).is_err());
        assert_eq!(services, before);
    }

    #[test]
    fn test_extra_fields_are_accepted() {
        let mut services = golden_services();
        services["shipping"][0]["form_layout"] = json!([{"type": "fieldset"}]);
        services["shipping"][0]["service_settings"]["properties"]["services"] = json!({});
        services["boxes"] = json!("forward compatible");
        assert!(validate_services(&services).is_ok());
    }
}

#[cfg(test)]
mod container {
    use super::*;

    #[test]
    fn test_requires_services_to_be_an_object() {
        assert_code(&json!([]), ErrorCode::OutermostContainerNotObject);
        assert_code(&json!(null), ErrorCode::OutermostContainerNotObject);
        assert_code(&json!("services"), ErrorCode::OutermostContainerNotObject);
    }

    #[test]
    fn test_requires_service_type_to_reference_an_array() {
        let mut services = golden_services();
        services["shipping"] = json!({});
        assert_code(&services, ErrorCode::ServiceTypeNotArray);
    }

    #[test]
    fn test_taxes_group_is_checked_too() {
        let mut services = golden_services();
        services["taxes"] = json!("none");
        assert_code(&services, ErrorCode::ServiceTypeNotArray);
    }

    #[test]
    fn test_requires_service_to_reference_an_object() {
        let mut services = golden_services();
        services["shipping"][0] = json!([]);
        assert_code(&services, ErrorCode::ServiceNotObject);
    }
}

#[cfg(test)]
mod service_entry {
    use super::*;

    #[test]
    fn test_requires_service_to_have_an_id() {
        let mut services = golden_services();
        remove(&mut services, "/shipping/0", "id");
        assert_code(&services, ErrorCode::RequiredServicePropertyMissing);
    }

    #[test]
    fn test_requires_service_id_to_be_string() {
        let mut services = golden_services();
        services["shipping"][0]["id"] = json!(99);
        assert_code(&services, ErrorCode::RequiredServicePropertyWrongType);
    }

    #[test]
    fn test_requires_service_to_have_a_method_description() {
        let mut services = golden_services();
        remove(&mut services, "/shipping/0", "method_description");
        assert_code(&services, ErrorCode::RequiredServicePropertyMissing);
    }

    #[test]
    fn test_requires_service_method_description_to_be_string() {
        let mut services = golden_services();
        services["shipping"][0]["method_description"] = json!(99);
        assert_code(&services, ErrorCode::RequiredServicePropertyWrongType);
    }

    #[test]
    fn test_requires_service_to_have_a_method_title() {
        let mut services = golden_services();
        remove(&mut services, "/shipping/0", "method_title");
        assert_code(&services, ErrorCode::RequiredServicePropertyMissing);
    }

    #[test]
    fn test_requires_service_title_to_be_string() {
        let mut services = golden_services();
        services["shipping"][0]["method_title"] = json!(99);
        assert_code(&services, ErrorCode::RequiredServicePropertyWrongType);
    }

    #[test]
    fn test_requires_service_to_have_service_settings() {
        let mut services = golden_services();
        remove(&mut services, "/shipping/0", "service_settings");
        assert_code(&services, ErrorCode::RequiredServicePropertyMissing);
    }

    #[test]
    fn test_numeric_id_is_never_coerced() {
        let mut services = golden_services();
        services["shipping"][0]["id"] = json!(1.5);
        assert_code(&services, ErrorCode::RequiredServicePropertyWrongType);
    }
}

#[cfg(test)]
mod settings_schema {
    use super::*;

    #[test]
    fn test_requires_service_settings_to_include_type() {
        let mut services = golden_services();
        remove(&mut services, "/shipping/0/service_settings", "type");
        assert_code(&services, ErrorCode::ServiceSettingsMissingRequiredProperty);
    }

    #[test]
    fn test_requires_service_settings_type_to_be_string() {
        let mut services = golden_services();
        services["shipping"][0]["service_settings"]["type"] = json!(99);
        assert_code(&services, ErrorCode::ServiceSettingsPropertyWrongType);
    }

    #[test]
    fn test_requires_service_settings_to_include_required() {
        let mut services = golden_services();
        remove(&mut services, "/shipping/0/service_settings", "required");
        assert_code(&services, ErrorCode::ServiceSettingsMissingRequiredProperty);
    }

    #[test]
    fn test_requires_service_settings_required_to_be_array() {
        let mut services = golden_services();
        services["shipping"][0]["service_settings"]["required"] = json!(99);
        assert_code(&services, ErrorCode::ServiceSettingsPropertyWrongType);
    }

    #[test]
    fn test_requires_service_settings_to_include_properties() {
        let mut services = golden_services();
        remove(&mut services, "/shipping/0/service_settings", "properties");
        assert_code(&services, ErrorCode::ServiceSettingsMissingRequiredProperty);
    }

    #[test]
    fn test_requires_service_settings_properties_to_be_object() {
        let mut services = golden_services();
        services["shipping"][0]["service_settings"]["properties"] = json!([]);
        assert_code(&services, ErrorCode::ServiceSettingsPropertyWrongType);
    }

    #[test]
    fn test_requires_service_settings_to_be_object() {
        let mut services = golden_services();
        services["shipping"][0]["service_settings"] = json!([]);
        assert_code(&services, ErrorCode::ServiceSettingsPropertyWrongType);
    }
}

#[cfg(test)]
mod properties {
    use super::*;

    #[test]
    fn test_requires_service_settings_to_include_enabled_property() {
        let mut services = golden_services();
        remove(&mut services, "/shipping/0/service_settings/properties", "enabled");
        assert_code(&services, ErrorCode::ServicePropertiesMissingRequiredProperty);
    }

    #[test]
    fn test_requires_service_settings_to_include_title_property() {
        let mut services = golden_services();
        remove(&mut services, "/shipping/0/service_settings/properties", "title");
        assert_code(&services, ErrorCode::ServicePropertiesMissingRequiredProperty);
    }
}

#[cfg(test)]
mod error_reporting {
    use super::*;

    #[test]
    fn test_error_path_points_at_offending_node() {
        let mut services = golden_services();
        remove(&mut services, "/shipping/0/service_settings/properties", "title");
        let error = validate_services(&services).unwrap_err();
        assert_eq!(error.path, "$.shipping[0].service_settings.properties.title");
        assert_eq!(error.violation.actual, "missing");
    }

    #[test]
    fn test_first_entry_wins_over_later_entries() {
        let mut services = golden_services();
        let mut second = services["shipping"][0].clone();
        second["id"] = json!(7);
        services["shipping"].as_array_mut().unwrap().push(second);
        services["shipping"][0]["service_settings"]["properties"] = json!([]);

        let error = validate_services(&services).unwrap_err();
        assert_eq!(error.code, ErrorCode::ServiceSettingsPropertyWrongType);
        assert_eq!(error.path, "$.shipping[0].service_settings.properties");
    }

    #[test]
    fn test_outer_defect_reported_before_inner_defect() {
        let mut services = golden_services();
        remove(&mut services, "/shipping/0/service_settings/properties", "enabled");
        remove(&mut services, "/shipping/0", "method_title");

        let error = validate_services(&services).unwrap_err();
        assert_eq!(error.code, ErrorCode::RequiredServicePropertyMissing);
        assert_eq!(error.path, "$.shipping[0].method_title");
    }

    #[test]
    fn test_error_serializes_with_stable_code() {
        let mut services = golden_services();
        services["shipping"] = json!({});
        let error = validate_services(&services).unwrap_err();

        let encoded = serde_json::to_value(&error).unwrap();
        assert_eq!(encoded["code"], "service_type_not_ref_array");
        assert_eq!(encoded["path"], "$.shipping");
    }

    #[test]
    fn test_validator_respects_configured_groups() {
        let mut services = golden_services();
        services["labels"] = json!({});
        assert!(validate_services(&services).is_ok());

        let validator = ServicesValidator::with_config(ValidationConfig::all_groups());
        let error = validator.validate(&services).unwrap_err();
        assert_eq!(error.code, ErrorCode::ServiceTypeNotArray);
        assert_eq!(error.path, "$.labels");

        let error = validate_services_with_config(&services, &ValidationConfig::with_groups(["labels"]))
            .unwrap_err();
        assert_eq!(error.path, "$.labels");
    }
}
