use super::*;
use crate::matchers::{any_number, containing, starts_with};

#[test]
fn test_registry_has_all_kinds() {
    let registry = MatcherRegistry::new();
    assert_eq!(registry.len(), 11);
    assert!(!registry.is_empty());

    for kind in registry.kinds() {
        assert_eq!(registry.get(kind).kind(), kind);
    }
}

#[test]
fn test_kinds_iterator() {
    let registry = MatcherRegistry::new();
    let kinds: Vec<_> = registry.kinds().collect();
    assert_eq!(kinds.len(), 11);
    assert!(kinds.contains(&MatcherKind::WildcardByCategory));
    assert!(kinds.contains(&MatcherKind::ShallowContaining));
    assert!(kinds.contains(&MatcherKind::DeepContaining));
    assert!(kinds.contains(&MatcherKind::SchemaValidate));
    assert!(kinds.contains(&MatcherKind::PredicateValidate));
    assert!(kinds.contains(&MatcherKind::Alternation));
    assert!(kinds.contains(&MatcherKind::Membership));
    assert!(kinds.contains(&MatcherKind::TypeInstance));
    assert!(kinds.contains(&MatcherKind::PrefixMatch));
    assert!(kinds.contains(&MatcherKind::SuffixMatch));
    assert!(kinds.contains(&MatcherKind::PatternMatch));
}

#[test]
fn test_detect() {
    assert!(MatcherRegistry::detect(&Value::int(1)).is_none());
    assert!(MatcherRegistry::detect(&Value::sequence(vec![any_number()])).is_none());

    let detected = MatcherRegistry::detect(&starts_with("ab")).map(Matcher::kind);
    assert_eq!(detected, Some(MatcherKind::PrefixMatch));

    let detected = MatcherRegistry::detect(&containing(Value::int(1))).map(Matcher::kind);
    assert_eq!(detected, Some(MatcherKind::ShallowContaining));
}

#[test]
fn test_handlers_are_zero_sized() {
    assert_eq!(std::mem::size_of::<WildcardHandler>(), 0);
    assert_eq!(std::mem::size_of::<MatchesHandler>(), 0);
    assert_eq!(std::mem::size_of::<MatcherRegistry>(), 0);
}
