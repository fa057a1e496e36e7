use super::*;
use crate::options::ComparisonOptions;
use pretty_assertions::assert_eq;

fn check(actual: &Value, expected: &Value) -> ComparisonResult {
    let ctx = ComparisonContext::create(ComparisonOptions::default());
    compare_primitives(actual, expected, &ctx)
}

#[test]
fn test_equal_leaves() {
    assert!(check(&Value::int(1), &Value::int(1)).is_success());
    assert!(check(&Value::text("a"), &Value::text("a")).is_success());
    assert!(check(&Value::Bool(false), &Value::Bool(false)).is_success());
    assert!(check(&Value::Null, &Value::Null).is_success());
    assert!(check(&Value::Undefined, &Value::Undefined).is_success());
    assert!(check(&Value::date(1_700_000_000_000), &Value::date(1_700_000_000_000)).is_success());
}

#[test]
fn test_nan_equals_nan() {
    assert!(check(&Value::number(f64::NAN), &Value::number(f64::NAN)).is_success());
    assert!(!check(&Value::number(f64::NAN), &Value::int(0)).is_success());
}

#[test]
fn test_undefined_is_not_null() {
    let result = check(&Value::Undefined, &Value::Null);
    let mismatch = result.first().unwrap();
    assert_eq!(mismatch.kind, MismatchKind::TypeMismatch);
    assert_eq!(mismatch.message, "expected null, received undefined");
}

#[test]
fn test_value_mismatch_message() {
    let result = check(&Value::int(2), &Value::int(1));
    let mismatch = result.first().unwrap();
    assert_eq!(mismatch.kind, MismatchKind::ValueMismatch);
    assert_eq!(mismatch.message, "expected 1, received 2");

    let result = check(&Value::text("b"), &Value::text("a"));
    assert_eq!(result.first().unwrap().message, "expected \"a\", received \"b\"");
}

#[test]
fn test_cross_type_is_type_mismatch() {
    let result = check(&Value::text("1"), &Value::int(1));
    let mismatch = result.first().unwrap();
    assert_eq!(mismatch.kind, MismatchKind::TypeMismatch);
    assert_eq!(mismatch.message, "expected number, received string");
}

#[test]
fn test_dates_by_instant() {
    assert!(!check(&Value::date(1), &Value::date(2)).is_success());
}

#[test]
fn test_patterns_by_source() {
    let a = Value::pattern_str("^a+$").unwrap();
    let b = Value::pattern_str("^a+$").unwrap();
    let c = Value::pattern_str("^b+$").unwrap();
    assert!(check(&a, &b).is_success());
    assert!(!check(&a, &c).is_success());
}

#[test]
fn test_callables_by_identity() {
    let f = Value::callable("handler");
    let g = Value::callable("handler");
    assert!(check(&f, &f.clone()).is_success());

    let result = check(&g, &f);
    let mismatch = result.first().unwrap();
    assert_eq!(mismatch.kind, MismatchKind::ValueMismatch);
    assert!(mismatch.message.starts_with("expected the same function"));
}
