//! Validation of remote service definition documents
//!
//! A services document is checked top-down by four stages, each run only if
//! the previous one passed:
//!
//! - **Container**: root is an object, every group in scope is an array
//! - **Service**: each entry is an object with `id`, `method_description`,
//!   `method_title` and `service_settings`
//! - **Settings schema**: `service_settings` is an object with `type`,
//!   `required` and `properties` of the right shapes
//! - **Properties**: the `properties` map exposes `enabled` and `title`
//!
//! The first violation ends the walk and is returned as a [`ValidationError`].
//!
//! Copyright (c) 2025 Connect Services Team
//! Licensed under the Apache-2.0 license

pub mod base;
pub mod container;
pub mod error;
pub mod properties;
pub mod service;
pub mod settings;
pub mod summary;

pub use base::{SchemaValidator, Shape, ValidationContext, ValidationHelpers};
pub use container::{validate_container, validate_group};
pub use error::{ErrorCode, ValidationError, ValidationErrors, ValidationResult, Violation};
pub use properties::validate_properties;
pub use service::validate_service;
pub use settings::validate_settings_schema;
pub use summary::{summarize_services, ServiceSummary};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

/// Service groups checked when no configuration is given
pub const DEFAULT_SERVICE_GROUPS: [&str; 2] = ["shipping", "taxes"];

/// Which top-level keys of a document are treated as service groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Recognized group keys; any other top-level key is ignored
    pub groups: Vec<String>,
    /// Treat every top-level key as a service group
    pub all_groups: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            groups: DEFAULT_SERVICE_GROUPS.iter().map(|g| g.to_string()).collect(),
            all_groups: false,
        }
    }
}

impl ValidationConfig {
    /// Check only the named groups
    pub fn with_groups<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            groups: groups.into_iter().map(Into::into).collect(),
            all_groups: false,
        }
    }

    /// Check every top-level key
    pub fn all_groups() -> Self {
        Self {
            groups: Vec::new(),
            all_groups: true,
        }
    }

    /// Whether the top-level key `group` is a service group under this config
    pub fn includes_group(&self, group: &str) -> bool {
        self.all_groups || self.groups.iter().any(|g| g == group)
    }
}

/// Validator for services documents
#[derive(Debug, Clone, Default)]
pub struct ServicesValidator {
    config: ValidationConfig,
}

impl ServicesValidator {
    /// Create a validator checking the default service groups
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl SchemaValidator for ServicesValidator {
    type Input = Value;

    #[instrument(level = "debug", skip(self, input), fields(path = %context.path))]
    fn validate_with_context(
        &self,
        input: &Value,
        context: &ValidationContext,
    ) -> ValidationResult<()> {
        let result = validate_container(input, context, &self.config);
        match &result {
            Ok(()) => debug!("Services document is valid"),
            Err(error) => debug!(code = %error.code, path = %error.path, "Services document rejected"),
        }
        result
    }
}

/// Validate a services document against the default group scope.
///
/// # Examples
///
/// ```rust
/// use connect_schemas::{validate_services, ErrorCode};
/// use serde_json::json;
///
/// let services = json!({
///     "shipping": [{
///         "id": "usps",
///         "method_description": "Obtains rates dynamically from the USPS API during cart/checkout.",
///         "method_title": "USPS (WooCommerce Connect)",
///         "service_settings": {
///             "type": "object",
///             "required": [],
///             "properties": { "enabled": {}, "title": {} }
///         }
///     }]
/// });
/// assert!(validate_services(&services).is_ok());
///
/// let error = validate_services(&json!({ "shipping": {} })).unwrap_err();
/// assert_eq!(error.code, ErrorCode::ServiceTypeNotArray);
/// ```
pub fn validate_services(document: &Value) -> ValidationResult<()> {
    ServicesValidator::new().validate(document)
}

/// Validate a services document with an explicit group scope
pub fn validate_services_with_config(
    document: &Value,
    config: &ValidationConfig,
) -> ValidationResult<()> {
    ServicesValidator::with_config(config.clone()).validate(document)
}

/// Configuration for validating several documents at once
#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    /// Group scope applied to every document
    pub validation: ValidationConfig,
    /// Stop at the first failing document
    pub fail_fast: bool,
    /// Maximum number of errors to collect (0 = unlimited)
    pub max_errors: usize,
}

impl BatchConfig {
    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// Validate independent documents, collecting one error per failing document.
///
/// Each document is still checked fail-fast; error paths are prefixed with
/// the document's position (`$[2].shipping[0]...`).
pub fn validate_services_batch(
    documents: &[Value],
    config: &BatchConfig,
) -> Result<(), ValidationErrors> {
    let validator = ServicesValidator::with_config(config.validation.clone());
    let mut errors = ValidationErrors::new();
    let context = ValidationContext::new();

    for (i, document) in documents.iter().enumerate() {
        match validator.validate_with_context(document, &context.child_index(i)) {
            Ok(()) => continue,
            Err(error) => {
                errors.add(error);

                if config.fail_fast {
                    break;
                }

                if config.max_errors > 0 && errors.len() >= config.max_errors {
                    break;
                }
            }
        }
    }

    errors.into_result()
}
