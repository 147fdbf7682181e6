//! Validation error types for service definition documents
//!
//! Copyright (c) 2025 Connect Services Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Stable, machine-comparable identifier for a structural violation.
///
/// Callers branch on these codes; the strings returned by [`ErrorCode::as_str`]
/// are shared with existing consumers and must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    #[serde(rename = "outermost_container_not_object")]
    OutermostContainerNotObject,
    #[serde(rename = "service_type_not_ref_array")]
    ServiceTypeNotArray,
    #[serde(rename = "service_not_ref_object")]
    ServiceNotObject,
    #[serde(rename = "required_service_property_missing")]
    RequiredServicePropertyMissing,
    #[serde(rename = "required_service_property_wrong_type")]
    RequiredServicePropertyWrongType,
    #[serde(rename = "service_settings_missing_required_property")]
    ServiceSettingsMissingRequiredProperty,
    #[serde(rename = "service_settings_property_wrong_type")]
    ServiceSettingsPropertyWrongType,
    #[serde(rename = "service_properties_missing_required_property")]
    ServicePropertiesMissingRequiredProperty,
}

impl ErrorCode {
    /// Every code, in taxonomy order
    pub const ALL: [ErrorCode; 8] = [
        ErrorCode::OutermostContainerNotObject,
        ErrorCode::ServiceTypeNotArray,
        ErrorCode::ServiceNotObject,
        ErrorCode::RequiredServicePropertyMissing,
        ErrorCode::RequiredServicePropertyWrongType,
        ErrorCode::ServiceSettingsMissingRequiredProperty,
        ErrorCode::ServiceSettingsPropertyWrongType,
        ErrorCode::ServicePropertiesMissingRequiredProperty,
    ];

    /// The stable wire string for this code
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OutermostContainerNotObject => "outermost_container_not_object",
            Self::ServiceTypeNotArray => "service_type_not_ref_array",
            Self::ServiceNotObject => "service_not_ref_object",
            Self::RequiredServicePropertyMissing => "required_service_property_missing",
            Self::RequiredServicePropertyWrongType => "required_service_property_wrong_type",
            Self::ServiceSettingsMissingRequiredProperty => {
                "service_settings_missing_required_property"
            }
            Self::ServiceSettingsPropertyWrongType => "service_settings_property_wrong_type",
            Self::ServicePropertiesMissingRequiredProperty => {
                "service_properties_missing_required_property"
            }
        }
    }

    /// One-line description of what triggers this code
    pub fn description(&self) -> &'static str {
        match self {
            Self::OutermostContainerNotObject => "Root document is not an object",
            Self::ServiceTypeNotArray => "A service group value is not an array",
            Self::ServiceNotObject => "A service entry is not an object",
            Self::RequiredServicePropertyMissing => {
                "id, method_description, method_title or service_settings absent on an entry"
            }
            Self::RequiredServicePropertyWrongType => {
                "id, method_description or method_title present but not a string"
            }
            Self::ServiceSettingsMissingRequiredProperty => {
                "type, required or properties absent on the settings schema"
            }
            Self::ServiceSettingsPropertyWrongType => {
                "service_settings not an object, or type/required/properties of the wrong shape"
            }
            Self::ServicePropertiesMissingRequiredProperty => {
                "enabled or title absent from the properties map"
            }
        }
    }

    /// Look up a code by its wire string
    pub fn from_code_str(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Expected vs. observed shape at the failing node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// The structural rule that was violated
    pub rule: String,
    /// What was expected
    pub expected: String,
    /// What was actually found
    pub actual: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rule '{}' violated: expected {}, but found {}",
            self.rule, self.expected, self.actual
        )
    }
}

/// The first structural defect found in a service document
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct ValidationError {
    /// Machine-matchable error code
    pub code: ErrorCode,
    /// Human-readable diagnostic
    pub message: String,
    /// JSON path of the offending node
    pub path: String,
    /// Expected vs. observed shape
    pub violation: Violation,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] at '{}': {}", self.code, self.path, self.message)
    }
}

impl ValidationError {
    /// Create a new validation error
    pub fn new<P, M>(code: ErrorCode, path: P, message: M, violation: Violation) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            code,
            path: path.into(),
            message: message.into(),
            violation,
        }
    }

    /// Create a violation for a specific rule
    pub fn create_violation<R, E, A>(rule: R, expected: E, actual: A) -> Violation
    where
        R: Into<String>,
        E: Into<String>,
        A: Into<String>,
    {
        Violation {
            rule: rule.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// The error code, as its stable wire string
    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// One error per failing document, collected by batch validation
#[derive(Debug, Error, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// List of validation errors
    pub errors: Vec<ValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multiple validation errors occurred:")?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error to the collection
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Ok if no errors were collected, Err otherwise
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.add(error);
        errors
    }
}

/// Name of the JSON kind of a value, as reported in violations
pub fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
