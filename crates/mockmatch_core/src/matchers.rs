//! Matcher factory functions.
//!
//! Each function returns a `Value::Matcher`, so matchers can be passed
//! directly as an expectation or nested anywhere inside a literal one:
//!
//! ```text
//! use mockmatch_core::matchers::{any_string, containing};
//!
//! let expected = containing(Value::record([("id", any_string())]));
//! ```

use std::sync::Arc;

use regex::Regex;

use crate::errors::ValidationError;
use crate::matcher::{BuiltinType, Category, Matcher, Predicate, Schema, TypeTarget};
use crate::value::{Class, Value};

// Wildcards

pub fn any_of_category(category: Category) -> Value {
    Value::matcher(Matcher::Any(category))
}

pub fn any_string() -> Value {
    any_of_category(Category::Text)
}

pub fn any_number() -> Value {
    any_of_category(Category::Number)
}

pub fn any_boolean() -> Value {
    any_of_category(Category::Boolean)
}

pub fn any_record() -> Value {
    any_of_category(Category::Record)
}

pub fn any_sequence() -> Value {
    any_of_category(Category::Sequence)
}

pub fn any_map() -> Value {
    any_of_category(Category::Map)
}

pub fn any_set() -> Value {
    any_of_category(Category::Set)
}

pub fn any_callable() -> Value {
    any_of_category(Category::Callable)
}

pub fn nullish() -> Value {
    any_of_category(Category::Nullish)
}

pub fn falsy() -> Value {
    any_of_category(Category::Falsy)
}

pub fn truthy() -> Value {
    any_of_category(Category::Truthy)
}

pub fn anything() -> Value {
    any_of_category(Category::Anything)
}

// Containment

/// Shallow containment: `pattern`'s keys/elements must be present, nested
/// values compare exactly.
pub fn containing(pattern: impl Into<Value>) -> Value {
    Value::matcher(Matcher::Containing(pattern.into()))
}

/// Containment applied at every nesting level of `pattern`.
pub fn containing_deep(pattern: impl Into<Value>) -> Value {
    Value::matcher(Matcher::ContainingDeep(pattern.into()))
}

pub fn sequence_containing(elements: Vec<Value>) -> Value {
    containing(Value::sequence(elements))
}

pub fn sequence_containing_deep(elements: Vec<Value>) -> Value {
    containing_deep(Value::sequence(elements))
}

pub fn record_containing<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Value {
    containing(Value::record(fields))
}

pub fn record_containing_deep<K: Into<String>>(
    fields: impl IntoIterator<Item = (K, Value)>,
) -> Value {
    containing_deep(Value::record(fields))
}

pub fn map_containing(entries: impl IntoIterator<Item = (Value, Value)>) -> Value {
    containing(Value::map(entries))
}

pub fn set_containing(members: impl IntoIterator<Item = Value>) -> Value {
    containing(Value::set(members))
}

/// Text containing `needle` as a substring.
pub fn string_containing(needle: &str) -> Value {
    containing(Value::text(needle))
}

// Validation

pub fn validates(check: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Value {
    Value::matcher(Matcher::Predicate(Predicate::new(check)))
}

/// Like [`validates`], with a label shown in diagnostics.
pub fn validates_labeled(
    label: impl Into<String>,
    check: impl Fn(&Value) -> bool + Send + Sync + 'static,
) -> Value {
    Value::matcher(Matcher::Predicate(Predicate::new(check).labeled(label)))
}

pub fn validates_fallible(
    check: impl Fn(&Value) -> Result<bool, ValidationError> + Send + Sync + 'static,
) -> Value {
    Value::matcher(Matcher::Predicate(Predicate::fallible(check)))
}

pub fn validates_schema(schema: impl Schema + 'static) -> Value {
    Value::matcher(Matcher::Schema(Arc::new(schema)))
}

// Types

pub fn instance_of(class: &Class) -> Value {
    Value::matcher(Matcher::InstanceOf(TypeTarget::Class(class.clone())))
}

pub fn instance_of_builtin(builtin: BuiltinType) -> Value {
    Value::matcher(Matcher::InstanceOf(TypeTarget::Builtin(builtin)))
}

// Alternatives

/// Matches if the value matches any of `options`.
pub fn is_one_of(options: Vec<Value>) -> Value {
    Value::matcher(Matcher::OneOf(options))
}

/// Matches if the value matches any of `alternatives`.
pub fn or(alternatives: Vec<Value>) -> Value {
    Value::matcher(Matcher::Or(alternatives))
}

// Text

pub fn starts_with(prefix: impl Into<String>) -> Value {
    Value::matcher(Matcher::StartsWith(prefix.into()))
}

pub fn ends_with(suffix: impl Into<String>) -> Value {
    Value::matcher(Matcher::EndsWith(suffix.into()))
}

pub fn matches_pattern(regex: Regex) -> Value {
    Value::matcher(Matcher::Matches(regex))
}

/// Compile `source` and build a pattern matcher.
pub fn matches_str(source: &str) -> Result<Value, regex::Error> {
    Ok(matches_pattern(Regex::new(source)?))
}
