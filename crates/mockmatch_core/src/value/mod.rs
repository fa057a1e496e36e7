//! Runtime values under comparison.
//!
//! # Construction
//!
//! All heap-backed variants are built through factory methods on `Value`;
//! the `Heap<T>` and `Shared<T>` constructors are private to this module.
//!
//! ```text
//! let name = Value::text("ada");
//! let tags = Value::sequence(vec![Value::text("a"), Value::text("b")]);
//! let user = Value::record([("name", name), ("tags", tags)]);
//! ```
//!
//! # Cycles
//!
//! Containers (`Sequence`, `Record`, `Map`, `Set`) are shared and mutable, so
//! a graph can refer back to itself:
//!
//! ```text
//! let node = Value::record([("id", Value::int(1))]);
//! node.set_field("self", node.clone());
//! ```
//!
//! Such graphs leak their allocation (reference cycles are never freed), which
//! is acceptable for the short-lived values an assertion builds. `Display` and
//! the comparison engine both detect the cycle by allocation identity.

mod composite;
mod heap;

use std::fmt;

use mockmatch_stack::ensure_sufficient_stack;
use regex::Regex;
use rustc_hash::FxHashSet;

pub use composite::{Callable, Class, Entries, Members, Record};
pub use heap::{Heap, Shared};

use crate::matcher::Matcher;

/// Any datum the engine can compare.
#[derive(Clone)]
pub enum Value {
    // Inline
    /// Absent marker: a missing argument or a field explicitly set to nothing.
    Undefined,
    /// Present-but-empty marker.
    Null,
    Bool(bool),
    /// Number; `NaN` is a legal value and equals itself under comparison.
    Number(f64),
    /// Instant in epoch milliseconds.
    Date(i64),

    // Immutable heap
    Text(Heap<str>),
    /// Function handle, equal only to itself.
    Callable(Heap<Callable>),
    /// Regular expression literal.
    Pattern(Heap<Regex>),
    /// Matcher construct standing in for a category of values.
    Matcher(Heap<Matcher>),

    // Shared containers
    Sequence(Shared<Vec<Value>>),
    Record(Shared<Record>),
    Map(Shared<Entries>),
    Set(Shared<Members>),
}

/// Structural shape of a value, used for exhaustive comparator dispatch and
/// for type-mismatch reporting.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    Undefined,
    Null,
    Boolean,
    Number,
    Text,
    Callable,
    Date,
    Pattern,
    Matcher,
    Sequence,
    Record,
    Map,
    Set,
}

impl Shape {
    /// Name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Shape::Undefined => "undefined",
            Shape::Null => "null",
            Shape::Boolean => "boolean",
            Shape::Number => "number",
            Shape::Text => "string",
            Shape::Callable => "function",
            Shape::Date => "date",
            Shape::Pattern => "regexp",
            Shape::Matcher => "matcher",
            Shape::Sequence => "array",
            Shape::Record => "object",
            Shape::Map => "map",
            Shape::Set => "set",
        }
    }

    /// Whether values of this shape hold nested values.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Shape::Sequence | Shape::Record | Shape::Map | Shape::Set
        )
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// Factory Methods

impl Value {
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// Number from an integer. Values beyond 2^53 lose precision, as they
    /// would in any double-based runtime.
    #[inline]
    #[expect(
        clippy::cast_precision_loss,
        reason = "numbers are doubles; precision loss above 2^53 is inherent"
    )]
    pub fn int(n: i64) -> Self {
        Value::Number(n as f64)
    }

    #[inline]
    pub fn text(s: impl AsRef<str>) -> Self {
        Value::Text(Heap::from_text(s.as_ref()))
    }

    #[inline]
    pub fn date(epoch_millis: i64) -> Self {
        Value::Date(epoch_millis)
    }

    /// A new callable handle. Each call yields a distinct identity.
    pub fn callable(name: impl Into<String>) -> Self {
        Value::Callable(Heap::new(Callable::new(name.into())))
    }

    pub fn pattern(regex: Regex) -> Self {
        Value::Pattern(Heap::new(regex))
    }

    /// Compile `source` into a pattern literal.
    pub fn pattern_str(source: &str) -> Result<Self, regex::Error> {
        Ok(Value::pattern(Regex::new(source)?))
    }

    pub fn matcher(matcher: Matcher) -> Self {
        Value::Matcher(Heap::new(matcher))
    }

    pub fn sequence(items: Vec<Value>) -> Self {
        Value::Sequence(Shared::new(items))
    }

    /// A plain record from `(key, value)` pairs. Later duplicates win.
    pub fn record<K: Into<String>>(fields: impl IntoIterator<Item = (K, Value)>) -> Self {
        let mut record = Record::new();
        for (key, value) in fields {
            record.insert(key, value);
        }
        Value::Record(Shared::new(record))
    }

    /// A record tagged as an instance of `class`.
    pub fn instance<K: Into<String>>(
        class: &Class,
        fields: impl IntoIterator<Item = (K, Value)>,
    ) -> Self {
        let mut record = Record::with_class(class.clone());
        for (key, value) in fields {
            record.insert(key, value);
        }
        Value::Record(Shared::new(record))
    }

    /// A key-value container. Later duplicate keys win.
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut map = Entries::new();
        for (key, value) in entries {
            map.insert(key, value);
        }
        Value::Map(Shared::new(map))
    }

    /// A deduplicated-value container.
    pub fn set(members: impl IntoIterator<Item = Value>) -> Self {
        let mut set = Members::new();
        for member in members {
            set.insert(member);
        }
        Value::Set(Shared::new(set))
    }
}

// Mutation (for building graphs, including cyclic ones)

impl Value {
    /// Set a record field. Returns `false` if `self` is not a record.
    pub fn set_field(&self, key: impl Into<String>, value: Value) -> bool {
        match self {
            Value::Record(record) => {
                record.write().insert(key, value);
                true
            }
            _ => false,
        }
    }

    /// Append to a sequence. Returns `false` if `self` is not a sequence.
    pub fn push(&self, value: Value) -> bool {
        match self {
            Value::Sequence(items) => {
                items.write().push(value);
                true
            }
            _ => false,
        }
    }

    /// Insert into a key-value container. Returns `false` if `self` is not one.
    pub fn map_insert(&self, key: Value, value: Value) -> bool {
        match self {
            Value::Map(entries) => {
                entries.write().insert(key, value);
                true
            }
            _ => false,
        }
    }

    /// Add to a deduplicated-value container. Returns `false` if `self` is not one.
    pub fn set_insert(&self, value: Value) -> bool {
        match self {
            Value::Set(members) => {
                members.write().insert(value);
                true
            }
            _ => false,
        }
    }
}

// Value Methods

impl Value {
    pub fn shape(&self) -> Shape {
        match self {
            Value::Undefined => Shape::Undefined,
            Value::Null => Shape::Null,
            Value::Bool(_) => Shape::Boolean,
            Value::Number(_) => Shape::Number,
            Value::Date(_) => Shape::Date,
            Value::Text(_) => Shape::Text,
            Value::Callable(_) => Shape::Callable,
            Value::Pattern(_) => Shape::Pattern,
            Value::Matcher(_) => Shape::Matcher,
            Value::Sequence(_) => Shape::Sequence,
            Value::Record(_) => Shape::Record,
            Value::Map(_) => Shape::Map,
            Value::Set(_) => Shape::Set,
        }
    }

    /// Type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        self.shape().name()
    }

    /// Allocation identity of a container, `None` for everything else.
    pub fn identity(&self) -> Option<usize> {
        match self {
            Value::Sequence(items) => Some(items.addr()),
            Value::Record(record) => Some(record.addr()),
            Value::Map(entries) => Some(entries.addr()),
            Value::Set(members) => Some(members.addr()),
            _ => None,
        }
    }

    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    /// Dynamic-language truthiness.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Text(s) => !s.is_empty(),
            _ => true,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_matcher(&self) -> Option<&Matcher> {
        match self {
            Value::Matcher(m) => Some(m),
            _ => None,
        }
    }

    /// Same-value identity used for map keys and set members: primitives by
    /// value (`NaN` equals `NaN`, `0` equals `-0`), texts by content,
    /// patterns by source, everything else by allocation.
    pub fn same_value(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => numbers_equal(*a, *b),
            (Value::Date(a), Value::Date(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => **a == **b,
            (Value::Callable(a), Value::Callable(b)) => Heap::ptr_eq(a, b),
            (Value::Pattern(a), Value::Pattern(b)) => Heap::ptr_eq(a, b),
            (Value::Matcher(a), Value::Matcher(b)) => Heap::ptr_eq(a, b),
            _ => match (self.identity(), other.identity()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }

    /// Whether a matcher construct appears anywhere inside this value.
    ///
    /// Matcher payloads are not searched; a matcher at the top counts.
    pub fn contains_matcher(&self) -> bool {
        let mut seen = FxHashSet::default();
        self.contains_matcher_inner(&mut seen)
    }

    fn contains_matcher_inner(&self, seen: &mut FxHashSet<usize>) -> bool {
        ensure_sufficient_stack(|| self.scan_for_matcher(seen))
    }

    fn scan_for_matcher(&self, seen: &mut FxHashSet<usize>) -> bool {
        if let Some(id) = self.identity() {
            if !seen.insert(id) {
                return false;
            }
        }
        match self {
            Value::Matcher(_) => true,
            Value::Sequence(items) => items.read().iter().any(|v| v.contains_matcher_inner(seen)),
            Value::Record(record) => record
                .read()
                .iter()
                .any(|(_, v)| v.contains_matcher_inner(seen)),
            Value::Map(entries) => entries
                .read()
                .iter()
                .any(|(k, v)| k.contains_matcher_inner(seen) || v.contains_matcher_inner(seen)),
            Value::Set(members) => members
                .read()
                .iter()
                .any(|v| v.contains_matcher_inner(seen)),
            _ => false,
        }
    }
}

/// Numeric equality where `NaN` equals itself.
#[inline]
#[expect(clippy::float_cmp, reason = "exact equality is the contract")]
pub(crate) fn numbers_equal(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

// Rendering

/// Nesting beyond this depth renders as an ellipsis.
const DISPLAY_DEPTH: usize = 6;

struct Renderer {
    active: FxHashSet<usize>,
}

impl Renderer {
    fn write(&mut self, value: &Value, depth: usize, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(id) = value.identity() {
            if self.active.contains(&id) {
                return f.write_str("[Circular]");
            }
            if depth >= DISPLAY_DEPTH {
                return f.write_str("…");
            }
            self.active.insert(id);
            let written = self.write_container(value, depth, f);
            self.active.remove(&id);
            return written;
        }
        match value {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write_number(*n, f),
            Value::Date(ms) => write!(f, "Date({ms})"),
            Value::Text(s) => write!(f, "{:?}", &**s),
            Value::Callable(c) => write!(f, "[Function {}]", c.name()),
            Value::Pattern(p) => write!(f, "/{}/", p.as_str()),
            Value::Matcher(m) => write!(f, "{}", &**m),
            Value::Sequence(_) | Value::Record(_) | Value::Map(_) | Value::Set(_) => Ok(()),
        }
    }

    fn write_container(
        &mut self,
        value: &Value,
        depth: usize,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let next = depth.saturating_add(1);
        match value {
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.read().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    self.write(item, next, f)?;
                }
                f.write_str("]")
            }
            Value::Record(record) => {
                let record = record.read();
                if let Some(class) = record.class() {
                    write!(f, "{} ", class.name())?;
                }
                f.write_str("{")?;
                for (i, (key, field)) in record.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, " {key}: ")?;
                    self.write(field, next, f)?;
                }
                f.write_str(if record.is_empty() { "}" } else { " }" })
            }
            Value::Map(entries) => {
                f.write_str("Map {")?;
                for (i, (key, entry)) in entries.read().iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str(" ")?;
                    self.write(key, next, f)?;
                    f.write_str(" => ")?;
                    self.write(entry, next, f)?;
                }
                f.write_str(" }")
            }
            Value::Set(members) => {
                f.write_str("Set {")?;
                for (i, member) in members.read().iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str(" ")?;
                    self.write(member, next, f)?;
                }
                f.write_str(" }")
            }
            _ => Ok(()),
        }
    }
}

fn write_number(n: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if n.is_nan() {
        f.write_str("NaN")
    } else if n.is_infinite() {
        f.write_str(if n > 0.0 { "Infinity" } else { "-Infinity" })
    } else {
        write!(f, "{n}")
    }
}

// Trait Implementations

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer {
            active: FxHashSet::default(),
        }
        .write(self, 0, f)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::int(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::text(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::text(s)
    }
}

impl From<Matcher> for Value {
    fn from(m: Matcher) -> Self {
        Value::matcher(m)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::sequence(items)
    }
}

#[cfg(test)]
mod tests;
