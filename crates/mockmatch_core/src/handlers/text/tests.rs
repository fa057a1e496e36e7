use super::*;
use crate::compare::compare;
use crate::matchers::{ends_with, matches_str, starts_with};
use crate::options::ComparisonOptions;
use pretty_assertions::assert_eq;

fn check(actual: &Value, expected: &Value) -> ComparisonResult {
    compare(actual, expected, ComparisonOptions::default())
}

#[test]
fn test_starts_with() {
    assert!(check(&Value::text("prefix-rest"), &starts_with("prefix")).is_success());
    assert!(check(&Value::text("anything"), &starts_with("")).is_success());

    let result = check(&Value::text("rest"), &starts_with("prefix"));
    let mismatch = result.first().unwrap();
    assert_eq!(mismatch.kind, MismatchKind::MatcherFailed);
    assert_eq!(
        mismatch.message,
        "expected startsWith(\"prefix\"), received \"rest\""
    );
}

#[test]
fn test_ends_with() {
    assert!(check(&Value::text("file.rs"), &ends_with(".rs")).is_success());
    assert!(!check(&Value::text("file.rsx"), &ends_with(".rs")).is_success());
}

#[test]
fn test_matches_pattern() {
    let expected = matches_str(r"^\d{3}-\d{4}$").unwrap();
    assert!(check(&Value::text("555-1234"), &expected).is_success());
    assert!(!check(&Value::text("5551234"), &expected).is_success());
}

#[test]
fn test_non_text_is_type_mismatch() {
    for expected in [starts_with("1"), ends_with("1"), matches_str("1").unwrap()] {
        let result = check(&Value::int(1), &expected);
        let mismatch = result.first().unwrap();
        assert_eq!(mismatch.kind, MismatchKind::TypeMismatch);
        assert_eq!(mismatch.message, "expected string, received number");
    }
}
