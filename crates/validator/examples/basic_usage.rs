//! Basic usage example for rulekit-validator
//!
//! Run with `RUST_LOG=debug` to see registrations and resolutions.

use std::sync::Arc;

use rulekit_validator::prelude::*;
use serde_json::json;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let global = Arc::new(GlobalRegistry::new());
    global
        .register("even", |n: i64| n % 2 == 0)
        .expect("returns a single bool");

    // Refused: a rule must return exactly one bool.
    match global.register("double", |n: i64| n * 2) {
        Ok(()) => println!("✗ 'double' was accepted"),
        Err(e) => println!("✓ 'double' refused: {e}"),
    }

    let source = MapData::from_json(json!({
        "user": {"name": "ann", "password": "hunter22"},
        "confirm": "hunter22",
        "seats": 4
    }))
    .expect("an object");

    let session = Session::builder()
        .source(source)
        .global(global)
        .build()
        .expect("no session rules to refuse");

    let field = |path: &str| session.get(path).unwrap_or(NULL);
    let checks = [
        ("even", args![field("seats")]),
        ("minLen", args![field("user.name"), 5]),
        ("eqField", args![field("user.password"), "confirm"]),
        ("isEmail", args!["ann@example.com"]),
        ("nope", args![1]),
    ];

    for (name, args) in checks {
        match session.validate(name, &args) {
            Ok(true) => println!("✓ {name} holds"),
            Ok(false) => println!("✗ {name} does not hold"),
            Err(e) => println!("! {name}: {e} [{}]", e.category()),
        }
    }
}
