//! Base validation trait and shared shape-checking helpers
//!
//! Copyright (c) 2025 Connect Services Team
//! Licensed under the Apache-2.0 license

use crate::validation::error::{
    kind_of, ErrorCode, ValidationError, ValidationErrors, ValidationResult,
};
use serde_json::{Map, Value};

/// Tracks where in the document the current check is running
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    /// Current JSON path
    pub path: String,
}

impl ValidationContext {
    /// Context positioned at the document root
    pub fn new() -> Self {
        Self {
            path: "$".to_string(),
        }
    }

    /// Create a child context for an object key
    pub fn child<P: AsRef<str>>(&self, path_segment: P) -> Self {
        Self {
            path: format!("{}.{}", self.path, path_segment.as_ref()),
        }
    }

    /// Create a child context for an array index
    pub fn child_index(&self, index: usize) -> Self {
        Self {
            path: format!("{}[{}]", self.path, index),
        }
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Base trait for document validators
pub trait SchemaValidator {
    /// The type being validated
    type Input: ?Sized;

    /// Validate a complete document from its root
    fn validate(&self, input: &Self::Input) -> ValidationResult<()> {
        self.validate_with_context(input, &ValidationContext::new())
    }

    /// Validate a document positioned at `context`
    fn validate_with_context(
        &self,
        input: &Self::Input,
        context: &ValidationContext,
    ) -> ValidationResult<()>;

    /// Collect the validation error, if any, without failing
    fn collect_errors(&self, input: &Self::Input) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if let Err(error) = self.validate(input) {
            errors.add(error);
        }
        errors
    }
}

/// JSON shapes the contract distinguishes between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Object,
    Array,
    String,
}

impl Shape {
    /// Whether `value` has this shape. No coercion: `99` is never a string.
    pub fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (Shape::Object, Value::Object(_))
                | (Shape::Array, Value::Array(_))
                | (Shape::String, Value::String(_))
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Object => "object",
            Shape::Array => "array",
            Shape::String => "string",
        }
    }
}

/// Helper functions for the presence and shape checks every stage performs
pub struct ValidationHelpers;

impl ValidationHelpers {
    /// Require `value` to be an object and hand back its map
    pub fn expect_object<'a>(
        value: &'a Value,
        code: ErrorCode,
        what: &str,
        context: &ValidationContext,
    ) -> ValidationResult<&'a Map<String, Value>> {
        match value {
            Value::Object(map) => Ok(map),
            other => Err(Self::shape_error(code, what, Shape::Object, other, context)),
        }
    }

    /// Require `value` to be an array and hand back its elements
    pub fn expect_array<'a>(
        value: &'a Value,
        code: ErrorCode,
        what: &str,
        context: &ValidationContext,
    ) -> ValidationResult<&'a [Value]> {
        match value {
            Value::Array(items) => Ok(items.as_slice()),
            other => Err(Self::shape_error(code, what, Shape::Array, other, context)),
        }
    }

    /// Check that every field in `fields` is present, in order.
    ///
    /// The first absent field is reported; later ones are never looked at.
    pub fn require_fields(
        map: &Map<String, Value>,
        fields: &[&str],
        code: ErrorCode,
        owner: &str,
        context: &ValidationContext,
    ) -> ValidationResult<()> {
        match fields.iter().find(|field| !map.contains_key(**field)) {
            Some(field) => Err(ValidationError::new(
                code,
                context.child(field).path,
                format!("Required {} property '{}' is missing", owner, field),
                ValidationError::create_violation(
                    "required_field",
                    format!("{} to be present", field),
                    "missing",
                ),
            )),
            None => Ok(()),
        }
    }

    /// Check the shape of each listed field, in order.
    ///
    /// Fields are assumed present; an absent field is skipped.
    pub fn expect_field_shapes(
        map: &Map<String, Value>,
        fields: &[(&str, Shape)],
        code: ErrorCode,
        owner: &str,
        context: &ValidationContext,
    ) -> ValidationResult<()> {
        for (field, shape) in fields {
            if let Some(value) = map.get(*field) {
                if !shape.matches(value) {
                    let what = format!("{} property '{}'", owner, field);
                    return Err(Self::shape_error(
                        code,
                        &what,
                        *shape,
                        value,
                        &context.child(field),
                    ));
                }
            }
        }
        Ok(())
    }

    fn shape_error(
        code: ErrorCode,
        what: &str,
        expected: Shape,
        actual: &Value,
        context: &ValidationContext,
    ) -> ValidationError {
        ValidationError::new(
            code,
            &context.path,
            format!(
                "Expected {} to be {} {}, found {}",
                what,
                article(expected.name()),
                expected.name(),
                kind_of(actual)
            ),
            ValidationError::create_violation("value_shape", expected.name(), kind_of(actual)),
        )
    }
}

fn article(noun: &str) -> &'static str {
    match noun.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validation_context_child() {
        let context = ValidationContext::new();
        let child = context.child("shipping");
        assert_eq!(child.path, "$.shipping");

        let grandchild = child.child_index(0).child("service_settings");
        assert_eq!(grandchild.path, "$.shipping[0].service_settings");
    }

    #[test]
    fn test_shape_matches_without_coercion() {
        assert!(Shape::String.matches(&json!("usps")));
        assert!(!Shape::String.matches(&json!(99)));
        assert!(!Shape::Object.matches(&json!([])));
        assert!(Shape::Array.matches(&json!([])));
        assert!(!Shape::Array.matches(&json!({})));
    }

    #[test]
    fn test_require_fields_reports_first_missing() {
        let value = json!({"id": "usps"});
        let map = value.as_object().unwrap();
        let context = ValidationContext::new().child("entry");
        let error = ValidationHelpers::require_fields(
            map,
            &["id", "method_description", "method_title"],
            ErrorCode::RequiredServicePropertyMissing,
            "service",
            &context,
        )
        .unwrap_err();

        assert_eq!(error.code, ErrorCode::RequiredServicePropertyMissing);
        assert_eq!(error.path, "$.entry.method_description");
        assert_eq!(error.violation.actual, "missing");
    }

    #[test]
    fn test_expect_field_shapes_reports_first_mismatch() {
        let value = json!({"type": 1, "required": 2});
        let map = value.as_object().unwrap();
        let error = ValidationHelpers::expect_field_shapes(
            map,
            &[("type", Shape::String), ("required", Shape::Array)],
            ErrorCode::ServiceSettingsPropertyWrongType,
            "settings",
            &ValidationContext::new(),
        )
        .unwrap_err();

        assert_eq!(error.path, "$.type");
        assert_eq!(error.violation.expected, "string");
        assert_eq!(error.violation.actual, "number");
    }

    #[test]
    fn test_expect_object_message() {
        let error = ValidationHelpers::expect_object(
            &json!([]),
            ErrorCode::OutermostContainerNotObject,
            "the services document",
            &ValidationContext::new(),
        )
        .unwrap_err();
        assert_eq!(error.message, "Expected the services document to be an object, found array");
    }
}
