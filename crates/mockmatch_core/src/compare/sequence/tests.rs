use crate::compare::compare;
use crate::matchers::{any_number, any_string};
use crate::options::ComparisonOptions;
use crate::result::MismatchKind;
use crate::value::Value;
use pretty_assertions::assert_eq;

fn ints(values: &[i64]) -> Value {
    Value::sequence(values.iter().copied().map(Value::int).collect())
}

#[test]
fn test_equal_sequences() {
    let result = compare(&ints(&[1, 2, 3]), &ints(&[1, 2, 3]), ComparisonOptions::default());
    assert!(result.is_success());
    assert!(compare(&ints(&[]), &ints(&[]), ComparisonOptions::default()).is_success());
}

#[test]
fn test_length_mismatch_reported_first() {
    let result = compare(&ints(&[1, 2]), &ints(&[1, 2, 3]), ComparisonOptions::default());
    let mismatch = result.first().unwrap();
    assert_eq!(mismatch.kind, MismatchKind::LengthMismatch);
    assert_eq!(mismatch.message, "expected array of length 3, received length 2");
    assert_eq!(mismatch.path_string, "");
    assert_eq!(result.mismatches().len(), 1);
}

#[test]
fn test_order_matters() {
    let result = compare(&ints(&[2, 1]), &ints(&[1, 2]), ComparisonOptions::default());
    let mismatch = result.first().unwrap();
    assert_eq!(mismatch.kind, MismatchKind::ValueMismatch);
    assert_eq!(mismatch.path_string, "[0]");
}

#[test]
fn test_first_mismatch_only_by_default() {
    let result = compare(&ints(&[9, 9, 9]), &ints(&[1, 2, 3]), ComparisonOptions::default());
    assert_eq!(result.mismatches().len(), 1);

    let options = ComparisonOptions::default().with_collect_all_mismatches(true);
    let result = compare(&ints(&[9, 2, 9]), &ints(&[1, 2, 3]), options);
    let paths: Vec<_> = result.mismatches().iter().map(|m| m.path_string.as_str()).collect();
    assert_eq!(paths, vec!["[0]", "[2]"]);
}

#[test]
fn test_matchers_at_positions() {
    let expected = Value::sequence(vec![any_string(), any_number()]);
    let actual = Value::sequence(vec![Value::text("a"), Value::int(1)]);
    assert!(compare(&actual, &expected, ComparisonOptions::default()).is_success());

    let actual = Value::sequence(vec![Value::int(1), Value::int(1)]);
    let result = compare(&actual, &expected, ComparisonOptions::default());
    let mismatch = result.first().unwrap();
    assert_eq!(mismatch.kind, MismatchKind::MatcherFailed);
    assert_eq!(mismatch.path_string, "[0]");
}

#[test]
fn test_sequence_against_record_is_type_mismatch() {
    let result = compare(
        &ints(&[]),
        &Value::record(Vec::<(&str, Value)>::new()),
        ComparisonOptions::default(),
    );
    let mismatch = result.first().unwrap();
    assert_eq!(mismatch.kind, MismatchKind::TypeMismatch);
    assert_eq!(mismatch.message, "expected object, received array");
}
