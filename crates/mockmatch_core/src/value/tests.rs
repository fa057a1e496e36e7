use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_value_truthy() {
    assert!(Value::Bool(true).is_truthy());
    assert!(!Value::Bool(false).is_truthy());
    assert!(Value::int(1).is_truthy());
    assert!(!Value::int(0).is_truthy());
    assert!(!Value::number(f64::NAN).is_truthy());
    assert!(!Value::text("").is_truthy());
    assert!(Value::text("x").is_truthy());
    assert!(!Value::Undefined.is_truthy());
    assert!(!Value::Null.is_truthy());
    assert!(Value::sequence(vec![]).is_truthy());
    assert!(Value::record(Vec::<(&str, Value)>::new()).is_truthy());
}

#[test]
fn test_shapes() {
    assert_eq!(Value::Undefined.shape(), Shape::Undefined);
    assert_eq!(Value::text("a").shape(), Shape::Text);
    assert_eq!(Value::sequence(vec![]).shape(), Shape::Sequence);
    assert_eq!(Value::map([]).shape(), Shape::Map);
    assert_eq!(Value::set([]).shape(), Shape::Set);
    assert_eq!(Value::date(0).shape(), Shape::Date);
    assert!(Shape::Record.is_container());
    assert!(!Shape::Date.is_container());
    assert_eq!(Value::sequence(vec![]).type_name(), "array");
}

#[test]
fn test_display_primitives() {
    assert_eq!(Value::int(42).to_string(), "42");
    assert_eq!(Value::number(1.5).to_string(), "1.5");
    assert_eq!(Value::number(f64::NAN).to_string(), "NaN");
    assert_eq!(Value::number(f64::NEG_INFINITY).to_string(), "-Infinity");
    assert_eq!(Value::text("hi").to_string(), "\"hi\"");
    assert_eq!(Value::Undefined.to_string(), "undefined");
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::callable("save").to_string(), "[Function save]");
}

#[test]
fn test_display_containers() {
    let value = Value::record([
        ("id", Value::int(1)),
        ("tags", Value::sequence(vec![Value::text("a"), Value::text("b")])),
    ]);
    assert_eq!(value.to_string(), "{ id: 1, tags: [\"a\", \"b\"] }");

    let map = Value::map([(Value::text("k"), Value::Bool(true))]);
    assert_eq!(map.to_string(), "Map { \"k\" => true }");

    let set = Value::set([Value::int(1), Value::int(2)]);
    assert_eq!(set.to_string(), "Set { 1, 2 }");

    let empty = Value::record(Vec::<(&str, Value)>::new());
    assert_eq!(empty.to_string(), "{}");
}

#[test]
fn test_display_cycle_is_finite() {
    let node = Value::record([("id", Value::int(1))]);
    assert!(node.set_field("self", node.clone()));
    assert_eq!(node.to_string(), "{ id: 1, self: [Circular] }");
}

#[test]
fn test_display_shared_non_cyclic_child_renders_twice() {
    let child = Value::sequence(vec![Value::int(1)]);
    let parent = Value::sequence(vec![child.clone(), child]);
    assert_eq!(parent.to_string(), "[[1], [1]]");
}

#[test]
fn test_set_and_map_deduplicate() {
    let set = Value::set([Value::int(1), Value::int(1), Value::number(f64::NAN), Value::number(f64::NAN)]);
    match &set {
        Value::Set(members) => assert_eq!(members.read().len(), 2),
        _ => panic!("expected set"),
    }

    let map = Value::map([
        (Value::text("a"), Value::int(1)),
        (Value::text("a"), Value::int(2)),
    ]);
    match &map {
        Value::Map(entries) => {
            let entries = entries.read();
            assert_eq!(entries.len(), 1);
            assert_eq!(entries.get(&Value::text("a")).and_then(Value::as_number), Some(2.0));
        }
        _ => panic!("expected map"),
    }
}

#[test]
fn test_same_value() {
    assert!(Value::number(f64::NAN).same_value(&Value::number(f64::NAN)));
    assert!(Value::number(0.0).same_value(&Value::number(-0.0)));
    assert!(Value::text("a").same_value(&Value::text("a")));
    assert!(!Value::Undefined.same_value(&Value::Null));

    let a = Value::sequence(vec![]);
    let b = Value::sequence(vec![]);
    assert!(a.same_value(&a.clone()));
    assert!(!a.same_value(&b));

    let f = Value::callable("f");
    assert!(f.same_value(&f.clone()));
    assert!(!f.same_value(&Value::callable("f")));
}

#[test]
fn test_identity_only_for_containers() {
    assert!(Value::int(1).identity().is_none());
    assert!(Value::text("a").identity().is_none());
    let seq = Value::sequence(vec![]);
    assert_eq!(seq.identity(), seq.clone().identity());
}

#[test]
fn test_mutators_reject_wrong_shape() {
    assert!(!Value::int(1).set_field("a", Value::Null));
    assert!(!Value::int(1).push(Value::Null));
    assert!(!Value::int(1).map_insert(Value::Null, Value::Null));
    assert!(!Value::int(1).set_insert(Value::Null));
    assert!(Value::sequence(vec![]).push(Value::Null));
}

#[test]
fn test_contains_matcher() {
    use crate::matchers::any_string;

    assert!(!Value::int(1).contains_matcher());
    assert!(any_string().contains_matcher());

    let nested = Value::record([(
        "outer",
        Value::sequence(vec![Value::int(1), Value::record([("inner", any_string())])]),
    )]);
    assert!(nested.contains_matcher());

    let literal = Value::record([("outer", Value::sequence(vec![Value::int(1)]))]);
    assert!(!literal.contains_matcher());
}

#[test]
fn test_contains_matcher_terminates_on_cycle() {
    let node = Value::record([("id", Value::int(1))]);
    node.set_field("self", node.clone());
    assert!(!node.contains_matcher());
}

#[test]
fn test_pattern_str() {
    assert!(Value::pattern_str("^a+$").is_ok());
    assert!(Value::pattern_str("(").is_err());
    let p = Value::pattern_str("a|b").unwrap_or(Value::Null);
    assert_eq!(p.to_string(), "/a|b/");
}
