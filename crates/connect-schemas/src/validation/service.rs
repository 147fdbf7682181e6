//! Service entry checks
//!
//! Copyright (c) 2025 Connect Services Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{Shape, ValidationContext, ValidationHelpers};
use crate::validation::error::{ErrorCode, ValidationResult};
use crate::validation::settings::validate_settings_schema;
use serde_json::Value;
use tracing::trace;

pub const SERVICE_SETTINGS: &str = "service_settings";

/// Mandatory entry fields, in evaluation order
pub const REQUIRED_SERVICE_FIELDS: [&str; 4] =
    ["id", "method_description", "method_title", SERVICE_SETTINGS];

const STRING_SERVICE_FIELDS: [(&str, Shape); 3] = [
    ("id", Shape::String),
    ("method_description", Shape::String),
    ("method_title", Shape::String),
];

/// Validate one service entry, then its settings schema.
///
/// Order: object shape, presence of each field, string type of each string
/// field, then the nested settings schema.
pub fn validate_service(entry: &Value, context: &ValidationContext) -> ValidationResult<()> {
    let service = ValidationHelpers::expect_object(
        entry,
        ErrorCode::ServiceNotObject,
        "service entry",
        context,
    )?;

    ValidationHelpers::require_fields(
        service,
        &REQUIRED_SERVICE_FIELDS,
        ErrorCode::RequiredServicePropertyMissing,
        "service",
        context,
    )?;

    ValidationHelpers::expect_field_shapes(
        service,
        &STRING_SERVICE_FIELDS,
        ErrorCode::RequiredServicePropertyWrongType,
        "service",
        context,
    )?;

    trace!(path = %context.path, id = ?service.get("id"), "Service entry fields valid");

    match service.get(SERVICE_SETTINGS) {
        Some(settings) => validate_settings_schema(settings, &context.child(SERVICE_SETTINGS)),
        None => Ok(()),
    }
}
