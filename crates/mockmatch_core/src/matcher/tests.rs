use super::*;
use crate::matchers;
use pretty_assertions::assert_eq;

#[test]
fn test_kind_names_unique() {
    let mut names: Vec<_> = MatcherKind::ALL.iter().map(|k| k.name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), MatcherKind::ALL.len());
}

#[test]
fn test_matcher_kind_matches_variant() {
    let cases = [
        (matchers::any_string(), MatcherKind::WildcardByCategory),
        (matchers::containing(Value::int(1)), MatcherKind::ShallowContaining),
        (matchers::containing_deep(Value::int(1)), MatcherKind::DeepContaining),
        (matchers::validates(|_: &Value| true), MatcherKind::PredicateValidate),
        (matchers::or(vec![]), MatcherKind::Alternation),
        (matchers::is_one_of(vec![]), MatcherKind::Membership),
        (matchers::instance_of_builtin(BuiltinType::Map), MatcherKind::TypeInstance),
        (matchers::starts_with("a"), MatcherKind::PrefixMatch),
        (matchers::ends_with("a"), MatcherKind::SuffixMatch),
        (matchers::matches_str("a").unwrap(), MatcherKind::PatternMatch),
    ];
    for (value, kind) in cases {
        assert_eq!(value.as_matcher().map(Matcher::kind), Some(kind));
    }
}

#[test]
fn test_category_accepts() {
    assert!(Category::Text.accepts(&Value::text("")));
    assert!(!Category::Number.accepts(&Value::number(f64::NAN)));
    assert!(Category::Number.accepts(&Value::number(f64::INFINITY)));
    assert!(Category::Falsy.accepts(&Value::number(f64::NAN)));
    assert!(Category::Truthy.accepts(&Value::callable("f")));
    assert!(Category::Anything.accepts(&Value::Bool(false)));
    assert!(!Category::Callable.accepts(&Value::text("f")));
}

#[test]
fn test_type_target_admits_subclasses() {
    let base = Class::new("Base");
    let derived = Class::extends("Derived", &base);
    let value = Value::instance(&derived, Vec::<(&str, Value)>::new());

    assert!(TypeTarget::Class(base.clone()).admits(&value));
    assert!(TypeTarget::Class(derived).admits(&value));
    assert!(!TypeTarget::Class(base).admits(&Value::record(Vec::<(&str, Value)>::new())));
    assert!(TypeTarget::Builtin(BuiltinType::Object).admits(&value));
}

#[test]
fn test_predicate_label() {
    let plain = Predicate::new(|_| true);
    assert_eq!(plain.label(), "predicate");
    assert_eq!(plain.labeled("positive").label(), "positive");
}

#[test]
fn test_predicate_fallible() {
    let predicate = Predicate::fallible(|v| {
        v.as_number()
            .map(|n| n > 0.0)
            .ok_or_else(|| ValidationError::new("not a number"))
    });
    assert_eq!(predicate.test(&Value::int(1)), Ok(true));
    assert_eq!(predicate.test(&Value::int(-1)), Ok(false));
    assert!(predicate.test(&Value::Null).is_err());
}

#[test]
fn test_display() {
    assert_eq!(matchers::any_number().to_string(), "any(number)");
    assert_eq!(
        matchers::record_containing([("a", Value::int(1))]).to_string(),
        "containing({ a: 1 })"
    );
    assert_eq!(
        matchers::is_one_of(vec![Value::int(1), Value::text("b")]).to_string(),
        "isOneOf([1, \"b\"])"
    );
    assert_eq!(
        matchers::or(vec![matchers::any_string(), Value::Null]).to_string(),
        "or(any(string) | null)"
    );
    assert_eq!(
        matchers::instance_of(&Class::new("User")).to_string(),
        "instanceOf(User)"
    );
    assert_eq!(matchers::matches_str("^a$").unwrap().to_string(), "matches(/^a$/)");
}
