use super::*;

#[test]
fn validation_error_display_is_message() {
    let err = ValidationError::new("not a positive integer");
    assert_eq!(err.to_string(), "not a positive integer");
    assert_eq!(err.describe(), "not a positive integer");
}

#[test]
fn validation_error_describe_includes_issues() {
    let err = ValidationError::new("invalid user")
        .with_issue("name: required")
        .with_issue("age: expected number");
    assert_eq!(
        err.describe(),
        "invalid user (name: required; age: expected number)"
    );
}

#[test]
fn panic_message_from_str_payload() {
    let payload: Box<dyn Any + Send> = Box::new("boom");
    assert_eq!(panic_message(&*payload), "boom");
}

#[test]
fn panic_message_from_string_payload() {
    let payload: Box<dyn Any + Send> = Box::new(String::from("formatted boom"));
    assert_eq!(panic_message(&*payload), "formatted boom");
}

#[test]
fn panic_message_fallback() {
    let payload: Box<dyn Any + Send> = Box::new(17_u8);
    assert_eq!(panic_message(&*payload), "validator panicked");
}

#[test]
fn json_error_display() {
    let parse = serde_json::from_str::<serde_json::Value>("{").map_err(JsonError::from);
    assert!(matches!(parse, Err(JsonError::Parse(_))));
    if let Err(err) = parse {
        assert!(err.to_string().starts_with("invalid JSON: "));
    }
}
