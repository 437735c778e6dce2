//! Session-level resolution, shadowing and field rules.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use rulekit_validator::prelude::*;
use rulekit_validator::{KeyedMap, StringMap, args};

fn signup() -> MapData {
    MapData::new(object([
        ("name", Value::from("ann")),
        ("password", Value::from("hunter22")),
        ("confirm", Value::from("hunter22")),
        ("limits", Value::from(object([("max", 1000)]))),
    ]))
}

fn session_over(source: impl DataSource + 'static, global: &Arc<GlobalRegistry>) -> Session {
    Session::builder()
        .source(source)
        .global(Arc::clone(global))
        .build()
        .unwrap()
}

// ============================================================================
// SHADOWING
// ============================================================================

#[test]
fn session_shadowing_required_is_isolated() {
    let global = Arc::new(GlobalRegistry::new());
    let mut lenient = session_over(signup(), &global);
    let strict = session_over(signup(), &global);

    lenient.register("required", |_: Value| true).unwrap();

    assert_eq!(lenient.validate("required", &args![""]), Ok(true));
    assert_eq!(strict.validate("required", &args![""]), Ok(false));
    assert!(lenient.has_validator("required"));
    assert!(!strict.has_validator("required"));
    assert!(!global.has_validator("required"));
}

#[test]
fn data_source_methods_win_over_every_tier() {
    let global = Arc::new(GlobalRegistry::new());
    global.register("checkName", |_: String| false).unwrap();

    let record = StructData::new(object([("name", "ann")]))
        .with_method("checkName", |s: String| s == "ann")
        .unwrap();
    let mut session = session_over(record, &global);
    session.register("checkName", |_: String| false).unwrap();

    assert_eq!(session.validate("checkName", &args!["ann"]), Ok(true));
    assert!(session.has_validator("checkName"));

    // Methods alone are resolvable but not counted as registered validators.
    let bare = session_over(
        StructData::new(object([("n", 1)]))
            .with_method("positive", |n: i64| n > 0)
            .unwrap(),
        &global,
    );
    assert!(bare.resolve("positive").is_some());
    assert!(!bare.has_validator("positive"));
}

#[test]
fn global_custom_rules_visible_to_later_sessions() {
    let global = Arc::new(GlobalRegistry::new());
    let session = session_over(signup(), &global);
    assert!(session.resolve("isHex").is_none());

    global
        .register("isHex", |s: String| !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap();
    assert_eq!(session.validate("isHex", &args!["c0ffee"]), Ok(true));
}

#[test]
fn validator_func_prefers_session_tier() {
    let global = Arc::new(GlobalRegistry::new());
    global.register("flag", |_: Value| false).unwrap();
    let mut session = session_over(signup(), &global);
    session.register("flag", |_: Value| true).unwrap();

    let f = session.validator_func("flag").unwrap();
    assert_eq!(f.call(&args![1]).unwrap().as_slice(), [Value::from(true)]);
    assert_eq!(
        session.validator_func("required").unwrap_err(),
        InvokeError::UnknownValidator {
            name: "required".into()
        }
    );
}

#[test]
fn unknown_name_at_call_time_is_fatal() {
    let session = session_over(signup(), &Arc::new(GlobalRegistry::new()));
    let err = session.validate("minLenght", &args!["abc", 1]).unwrap_err();
    assert_eq!(err.name(), "minLenght");
    let err: Error = err.into();
    assert_eq!(err.category(), "lookup");
    assert!(matches!(err, Error::Invoke(InvokeError::UnknownValidator { .. })));
}

// ============================================================================
// FIELD RULES
// ============================================================================

#[test]
fn eq_and_ne_field() {
    let session = session_over(signup(), &Arc::new(GlobalRegistry::new()));
    assert_eq!(session.validate("eqField", &args!["hunter22", "confirm"]), Ok(true));
    assert_eq!(session.validate("eqField", &args!["hunter2", "confirm"]), Ok(false));
    assert_eq!(session.validate("neField", &args!["ann", "password"]), Ok(true));
}

#[test]
fn absent_sibling_is_false_for_every_field_rule() {
    let session = session_over(signup(), &Arc::new(GlobalRegistry::new()));
    for rule in ["eqField", "neField", "gtField", "gteField", "ltField", "lteField"] {
        assert_eq!(
            session.validate(rule, &args!["x", "nowhere"]),
            Ok(false),
            "{rule}"
        );
    }
}

#[test]
fn ordering_rules_use_lengths_and_paths() {
    let session = session_over(signup(), &Arc::new(GlobalRegistry::new()));
    // limits.max is 1000: four digits.
    assert!(session.lt_field(&Value::from(999), "limits.max"));
    assert!(session.gte_field(&Value::from(1234), "limits.max"));
    assert!(!session.gt_field(&Value::from(9999), "limits.max"));
    assert!(session.gt_field(&Value::from("hunter222"), "password"));
    assert!(session.lte_field(&Value::from("ann"), "name"));
    // Two accented letters are four bytes, longer than "ann".
    assert!(session.gt_field(&Value::from("éé"), "name"));
}

#[test]
fn every_mapping_shape_serves_fields() {
    let strings: StringMap = [("city".to_string(), "Oslo".to_string())]
        .into_iter()
        .collect();
    let keyed: KeyedMap = [("zip", Value::from(150))].into_iter().collect();
    let source = MapData::new(object([
        ("addr", Value::from(strings)),
        ("post", Value::from(keyed)),
    ]));
    let session = session_over(source, &Arc::new(GlobalRegistry::new()));

    assert_eq!(session.get("addr.city"), Some(Value::from("Oslo")));
    assert_eq!(session.validate("eqField", &args![150, "post.zip"]), Ok(true));
    assert_eq!(session.get("addr.city.x"), None);
}
