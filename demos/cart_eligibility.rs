//! Cart eligibility example
//!
//! This example demonstrates:
//! - Building an EligibilityEngine from a YAML configuration
//! - Checking carts against promotion criteria
//! - Inspecting why a cart was rejected

use cartrule_sdk::{Criteria, EligibilityEngineBuilder, EngineConfig, Value};
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Cart Eligibility Example ===\n");

    let config = EngineConfig::from_yaml_str("max_nesting_depth: 8\ntrace_conditions: true\n")?;
    let engine = EligibilityEngineBuilder::new().with_config(config).build()?;

    // Free shipping: gold/platinum customers buying 2+ of some line, or big orders
    let criteria = Criteria::try_from(json!({
        "customer.tier": {"in": ["gold", "platinum"]},
        "lines.quantity": {"gte": 2},
        "total": {"or": {"gte": 250, "lt": 1}}
    }))?;

    let carts = [
        (
            "gold customer, large order",
            json!({
                "customer": {"tier": "gold"},
                "lines": [{"sku": "tv-1", "quantity": 1}, {"sku": "hdmi", "quantity": 3}],
                "total": 640.0
            }),
        ),
        (
            "silver customer",
            json!({
                "customer": {"tier": "silver"},
                "lines": [{"sku": "book", "quantity": 2}],
                "total": 300.0
            }),
        ),
        (
            "gold customer, small order",
            json!({
                "customer": {"tier": "gold"},
                "lines": [{"sku": "pen", "quantity": 5}],
                "total": 12.5
            }),
        ),
    ];

    for (label, cart) in carts {
        let cart = Value::from(cart);
        let report = engine.explain(&cart, &criteria);

        println!("{}: eligible = {}", label, report.eligible);
        for failed in report.failed_conditions() {
            println!("  failed {} on '{}'", failed.kind, failed.field);
        }
    }

    Ok(())
}
