//! Matcher constructs.
//!
//! A `Matcher` stands in for a category of acceptable values. It is a closed
//! enum: each variant is one matcher kind carrying its payload, so dispatch
//! is an exhaustive `match` rather than a runtime tag scan. Payloads may hold
//! further matchers or plain values, nested to any depth.
//!
//! Matchers are immutable once built. Use the factory functions in
//! [`crate::matchers`] to obtain them wrapped as `Value`s.

use std::fmt;
use std::sync::Arc;

use regex::Regex;

use crate::errors::ValidationError;
use crate::value::{Class, Value};

/// Discriminator for the closed set of matcher kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MatcherKind {
    WildcardByCategory,
    ShallowContaining,
    DeepContaining,
    SchemaValidate,
    PredicateValidate,
    Alternation,
    Membership,
    TypeInstance,
    PrefixMatch,
    SuffixMatch,
    PatternMatch,
}

impl MatcherKind {
    pub const ALL: [MatcherKind; 11] = [
        MatcherKind::WildcardByCategory,
        MatcherKind::ShallowContaining,
        MatcherKind::DeepContaining,
        MatcherKind::SchemaValidate,
        MatcherKind::PredicateValidate,
        MatcherKind::Alternation,
        MatcherKind::Membership,
        MatcherKind::TypeInstance,
        MatcherKind::PrefixMatch,
        MatcherKind::SuffixMatch,
        MatcherKind::PatternMatch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MatcherKind::WildcardByCategory => "any",
            MatcherKind::ShallowContaining => "containing",
            MatcherKind::DeepContaining => "containingDeep",
            MatcherKind::SchemaValidate => "schema",
            MatcherKind::PredicateValidate => "validates",
            MatcherKind::Alternation => "or",
            MatcherKind::Membership => "isOneOf",
            MatcherKind::TypeInstance => "instanceOf",
            MatcherKind::PrefixMatch => "startsWith",
            MatcherKind::SuffixMatch => "endsWith",
            MatcherKind::PatternMatch => "matches",
        }
    }
}

/// Runtime category accepted by a wildcard matcher.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    Text,
    /// Any number except `NaN`.
    Number,
    Boolean,
    /// A record with no class.
    Record,
    Sequence,
    Map,
    Set,
    Callable,
    /// `Undefined` or `Null`.
    Nullish,
    Falsy,
    Truthy,
    /// Anything except `Undefined` and `Null`.
    Anything,
}

impl Category {
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Category::Text => matches!(value, Value::Text(_)),
            Category::Number => matches!(value, Value::Number(n) if !n.is_nan()),
            Category::Boolean => matches!(value, Value::Bool(_)),
            Category::Record => match value {
                Value::Record(record) => record.read().is_plain(),
                _ => false,
            },
            Category::Sequence => matches!(value, Value::Sequence(_)),
            Category::Map => matches!(value, Value::Map(_)),
            Category::Set => matches!(value, Value::Set(_)),
            Category::Callable => matches!(value, Value::Callable(_)),
            Category::Nullish => value.is_nullish(),
            Category::Falsy => !value.is_truthy(),
            Category::Truthy => value.is_truthy(),
            Category::Anything => !value.is_nullish(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Text => "string",
            Category::Number => "number",
            Category::Boolean => "boolean",
            Category::Record => "object",
            Category::Sequence => "array",
            Category::Map => "map",
            Category::Set => "set",
            Category::Callable => "function",
            Category::Nullish => "nullish",
            Category::Falsy => "falsy",
            Category::Truthy => "truthy",
            Category::Anything => "anything",
        }
    }
}

/// Built-in runtime types usable with `instance_of_builtin`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    Date,
    Pattern,
    Sequence,
    Map,
    Set,
    Callable,
    /// Every non-primitive value.
    Object,
}

impl BuiltinType {
    pub fn name(self) -> &'static str {
        match self {
            BuiltinType::Date => "Date",
            BuiltinType::Pattern => "RegExp",
            BuiltinType::Sequence => "Array",
            BuiltinType::Map => "Map",
            BuiltinType::Set => "Set",
            BuiltinType::Callable => "Function",
            BuiltinType::Object => "Object",
        }
    }
}

/// Type an instance-of matcher tests membership in.
#[derive(Clone, Debug)]
pub enum TypeTarget {
    /// A user class; subclasses match too.
    Class(Class),
    Builtin(BuiltinType),
}

impl TypeTarget {
    /// Whether `value` is an instance of this type.
    pub fn admits(&self, value: &Value) -> bool {
        match self {
            TypeTarget::Class(class) => match value {
                Value::Record(record) => record
                    .read()
                    .class()
                    .is_some_and(|own| own.is_subclass_of(class)),
                _ => false,
            },
            TypeTarget::Builtin(builtin) => match builtin {
                BuiltinType::Date => matches!(value, Value::Date(_)),
                BuiltinType::Pattern => matches!(value, Value::Pattern(_)),
                BuiltinType::Sequence => matches!(value, Value::Sequence(_)),
                BuiltinType::Map => matches!(value, Value::Map(_)),
                BuiltinType::Set => matches!(value, Value::Set(_)),
                BuiltinType::Callable => matches!(value, Value::Callable(_)),
                BuiltinType::Object => matches!(
                    value,
                    Value::Record(_)
                        | Value::Sequence(_)
                        | Value::Map(_)
                        | Value::Set(_)
                        | Value::Date(_)
                        | Value::Pattern(_)
                        | Value::Callable(_)
                ),
            },
        }
    }

    pub fn name(&self) -> &str {
        match self {
            TypeTarget::Class(class) => class.name(),
            TypeTarget::Builtin(builtin) => builtin.name(),
        }
    }
}

type PredicateFn = dyn Fn(&Value) -> Result<bool, ValidationError> + Send + Sync;

/// User predicate. `Err` and panics both count as failure.
#[derive(Clone)]
pub struct Predicate {
    label: Option<String>,
    check: Arc<PredicateFn>,
}

impl Predicate {
    pub fn new(check: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        Predicate {
            label: None,
            check: Arc::new(move |value: &Value| Ok(check(value))),
        }
    }

    pub fn fallible(
        check: impl Fn(&Value) -> Result<bool, ValidationError> + Send + Sync + 'static,
    ) -> Self {
        Predicate {
            label: None,
            check: Arc::new(check),
        }
    }

    #[must_use]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("predicate")
    }

    pub fn test(&self, value: &Value) -> Result<bool, ValidationError> {
        (self.check)(value)
    }
}

/// External schema with a non-panicking parse contract.
///
/// Closures `Fn(&Value) -> Result<(), ValidationError>` implement this.
pub trait Schema: Send + Sync {
    fn safe_parse(&self, value: &Value) -> Result<(), ValidationError>;

    /// Name used in diagnostics.
    fn name(&self) -> &str {
        "schema"
    }
}

impl<F> Schema for F
where
    F: Fn(&Value) -> Result<(), ValidationError> + Send + Sync,
{
    fn safe_parse(&self, value: &Value) -> Result<(), ValidationError> {
        self(value)
    }
}

/// A matcher construct: kind plus payload.
#[derive(Clone)]
pub enum Matcher {
    /// Any value of a runtime category.
    Any(Category),
    /// Top-level containment of records, sequences, maps, sets, or text.
    Containing(Value),
    /// Containment applied at every nesting level.
    ContainingDeep(Value),
    Schema(Arc<dyn Schema>),
    Predicate(Predicate),
    /// Matches if any alternative matches.
    Or(Vec<Value>),
    /// Matches if the value matches one of the listed options.
    OneOf(Vec<Value>),
    InstanceOf(TypeTarget),
    StartsWith(String),
    EndsWith(String),
    Matches(Regex),
}

impl Matcher {
    pub fn kind(&self) -> MatcherKind {
        match self {
            Matcher::Any(_) => MatcherKind::WildcardByCategory,
            Matcher::Containing(_) => MatcherKind::ShallowContaining,
            Matcher::ContainingDeep(_) => MatcherKind::DeepContaining,
            Matcher::Schema(_) => MatcherKind::SchemaValidate,
            Matcher::Predicate(_) => MatcherKind::PredicateValidate,
            Matcher::Or(_) => MatcherKind::Alternation,
            Matcher::OneOf(_) => MatcherKind::Membership,
            Matcher::InstanceOf(_) => MatcherKind::TypeInstance,
            Matcher::StartsWith(_) => MatcherKind::PrefixMatch,
            Matcher::EndsWith(_) => MatcherKind::SuffixMatch,
            Matcher::Matches(_) => MatcherKind::PatternMatch,
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Value], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Matcher::Any(category) => write!(f, "any({})", category.name()),
            Matcher::Containing(pattern) => write!(f, "containing({pattern})"),
            Matcher::ContainingDeep(pattern) => write!(f, "containingDeep({pattern})"),
            Matcher::Schema(schema) => write!(f, "validates({})", schema.name()),
            Matcher::Predicate(predicate) => write!(f, "validates({})", predicate.label()),
            Matcher::Or(options) => {
                f.write_str("or(")?;
                write_list(f, options, " | ")?;
                f.write_str(")")
            }
            Matcher::OneOf(options) => {
                f.write_str("isOneOf([")?;
                write_list(f, options, ", ")?;
                f.write_str("])")
            }
            Matcher::InstanceOf(target) => write!(f, "instanceOf({})", target.name()),
            Matcher::StartsWith(prefix) => write!(f, "startsWith({prefix:?})"),
            Matcher::EndsWith(suffix) => write!(f, "endsWith({suffix:?})"),
            Matcher::Matches(regex) => write!(f, "matches(/{}/)", regex.as_str()),
        }
    }
}

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
