//! Properties map checks
//!
//! Copyright (c) 2025 Connect Services Team
//! Licensed under the Apache-2.0 license

use crate::validation::base::{ValidationContext, ValidationHelpers};
use crate::validation::error::{ErrorCode, ValidationResult};
use serde_json::Value;

/// Property keys every service settings schema must expose, in evaluation order
pub const REQUIRED_PROPERTY_KEYS: [&str; 2] = ["enabled", "title"];

/// Validate the `properties` map of a settings schema.
///
/// Only key presence is checked; the schema under each key is left alone.
pub fn validate_properties(properties: &Value, context: &ValidationContext) -> ValidationResult<()> {
    let map = ValidationHelpers::expect_object(
        properties,
        ErrorCode::ServiceSettingsPropertyWrongType,
        "service_settings property 'properties'",
        context,
    )?;

    ValidationHelpers::require_fields(
        map,
        &REQUIRED_PROPERTY_KEYS,
        ErrorCode::ServicePropertiesMissingRequiredProperty,
        "settings",
        context,
    )
}
