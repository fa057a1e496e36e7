use super::*;
use crate::compare::compare;
use crate::matcher::BuiltinType;
use crate::matchers::{instance_of, instance_of_builtin};
use crate::options::ComparisonOptions;
use crate::value::Class;
use pretty_assertions::assert_eq;

fn check(actual: &Value, expected: &Value) -> ComparisonResult {
    compare(actual, expected, ComparisonOptions::default())
}

#[test]
fn test_instance_of_class_and_subclass() {
    let animal = Class::new("Animal");
    let dog = Class::extends("Dog", &animal);
    let rex = Value::instance(&dog, [("name", Value::text("rex"))]);

    assert!(check(&rex, &instance_of(&dog)).is_success());
    assert!(check(&rex, &instance_of(&animal)).is_success());

    let generic = Value::instance(&animal, Vec::<(&str, Value)>::new());
    let result = check(&generic, &instance_of(&dog));
    assert_eq!(
        result.first().unwrap().message,
        "expected instance of Dog, received Animal"
    );
}

#[test]
fn test_instance_of_rejects_plain_and_primitives() {
    let point = Class::new("Point");
    let result = check(&Value::record([("x", Value::int(1))]), &instance_of(&point));
    assert_eq!(
        result.first().unwrap().message,
        "expected instance of Point, received object"
    );
    assert!(!check(&Value::int(1), &instance_of(&point)).is_success());
}

#[test]
fn test_same_named_classes_are_distinct() {
    let first = Class::new("Point");
    let second = Class::new("Point");
    let value = Value::instance(&first, Vec::<(&str, Value)>::new());
    assert!(!check(&value, &instance_of(&second)).is_success());
}

#[test]
fn test_builtin_types() {
    assert!(check(&Value::date(0), &instance_of_builtin(BuiltinType::Date)).is_success());
    assert!(check(&Value::map([]), &instance_of_builtin(BuiltinType::Map)).is_success());
    assert!(check(&Value::sequence(vec![]), &instance_of_builtin(BuiltinType::Object)).is_success());
    assert!(!check(&Value::text("x"), &instance_of_builtin(BuiltinType::Object)).is_success());

    let result = check(&Value::int(0), &instance_of_builtin(BuiltinType::Date));
    assert_eq!(
        result.first().unwrap().message,
        "expected instance of Date, received number"
    );
}
