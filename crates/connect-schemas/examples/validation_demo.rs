//! Validation demonstration example
//!
//! Copyright (c) 2025 Connect Services Team
//! Licensed under the Apache-2.0 license

use connect_schemas::{
    summarize_services, validate_services, validate_services_batch, BatchConfig,
    ValidationConfig,
};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Connect Services Validation Demo ===\n");

    let services = json!({
        "shipping": [
            {
                "id": "usps",
                "method_description": "Obtains rates dynamically from the USPS API during cart/checkout.",
                "method_title": "USPS (WooCommerce Connect)",
                "service_settings": {
                    "type": "object",
                    "required": [],
                    "properties": {
                        "enabled": {"type": "boolean", "default": false},
                        "title": {"type": "string", "default": "USPS"}
                    }
                }
            }
        ]
    });

    println!("✅ Validating golden services document:");
    match validate_services(&services) {
        Ok(()) => println!("   Valid!"),
        Err(e) => println!("   Error: {}", e),
    }

    for summary in summarize_services(&services, &ValidationConfig::default())? {
        println!(
            "   {}[{}] {} ({}) properties: {}",
            summary.group,
            summary.index,
            summary.id,
            summary.method_title,
            summary.property_names.join(", ")
        );
    }

    let mut broken = services.clone();
    broken["shipping"][0]["id"] = json!(99);

    println!("\n❌ Validating document with a numeric id:");
    match validate_services(&broken) {
        Ok(()) => println!("   Unexpectedly valid!"),
        Err(e) => {
            println!("   Code: {}", e.code);
            println!("   Path: {}", e.path);
            println!("   {}", e.violation);
        }
    }

    println!("\n📦 Batch validation:");
    let documents = vec![services, broken, json!([])];
    if let Err(errors) = validate_services_batch(&documents, &BatchConfig::default()) {
        println!("{}", errors);
    }

    Ok(())
}
