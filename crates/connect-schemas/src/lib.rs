//! Connect Schemas - structural validation of remote service definitions
//!
//! Shipping and tax service definitions are fetched from a remote API as a
//! JSON document and must be checked against a fixed two-level contract
//! before they are rendered into settings forms or used at checkout.
//! This crate performs that check:
//!
//! - **Fail-fast**: the first structural defect is reported and the walk stops
//! - **Stable codes**: every failure carries an [`ErrorCode`] whose string
//!   form callers can match on
//! - **Pure**: documents are borrowed, never mutated, and no state is kept
//!   between calls
//!
//! ## Quick Start
//!
//! ```rust
//! use connect_schemas::{validate_services, ErrorCode};
//! use serde_json::json;
//!
//! let services = json!({
//!     "shipping": [{
//!         "id": "usps",
//!         "method_description": "Obtains rates dynamically from the USPS API during cart/checkout.",
//!         "method_title": "USPS (WooCommerce Connect)",
//!         "service_settings": {
//!             "type": "object",
//!             "required": [],
//!             "properties": {
//!                 "enabled": { "type": "boolean" },
//!                 "title": { "type": "string" }
//!             }
//!         }
//!     }]
//! });
//!
//! match validate_services(&services) {
//!     Ok(()) => println!("Services are valid"),
//!     Err(e) => println!("Rejected with {}: {}", e.code, e.message),
//! }
//!
//! let error = validate_services(&json!([])).unwrap_err();
//! assert_eq!(error.code.as_str(), "outermost_container_not_object");
//! assert_eq!(error.code, ErrorCode::OutermostContainerNotObject);
//! ```
//!
//! Copyright (c) 2025 Connect Services Team
//! Licensed under the Apache-2.0 license

pub mod validation;

// Re-export commonly used types for convenience
pub use validation::{
    summarize_services, validate_container, validate_properties, validate_service,
    validate_services, validate_services_batch, validate_services_with_config,
    validate_settings_schema, BatchConfig, ErrorCode, SchemaValidator, ServiceSummary,
    ServicesValidator, ValidationConfig, ValidationContext, ValidationError, ValidationErrors,
    ValidationResult, Violation, DEFAULT_SERVICE_GROUPS,
};
