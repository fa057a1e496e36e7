//! Composite value payloads: records, classes, callables, keyed entries.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use super::Value;

// Class

struct ClassInfo {
    name: String,
    parent: Option<Class>,
}

/// Nominal class a record can be an instance of.
///
/// Classes compare by identity: two classes declared with the same name are
/// still distinct. A class may extend one parent class.
#[derive(Clone)]
pub struct Class(Arc<ClassInfo>);

impl Class {
    /// Declare a root class.
    pub fn new(name: impl Into<String>) -> Self {
        Class(Arc::new(ClassInfo {
            name: name.into(),
            parent: None,
        }))
    }

    /// Declare a class extending `parent`.
    pub fn extends(name: impl Into<String>, parent: &Class) -> Self {
        Class(Arc::new(ClassInfo {
            name: name.into(),
            parent: Some(parent.clone()),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn parent(&self) -> Option<&Class> {
        self.0.parent.as_ref()
    }

    /// This class followed by each ancestor, nearest first.
    pub fn lineage(&self) -> impl Iterator<Item = &Class> {
        std::iter::successors(Some(self), |class| class.parent())
    }

    /// Whether `self` is `other` or inherits from it.
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        self.lineage().any(|class| class == other)
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Class {}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({})", self.name())
    }
}

// Record

/// Keyed record: string keys to values, optionally tagged with a class.
///
/// Keys are kept sorted so rendering is deterministic; comparison never
/// depends on key order.
#[derive(Clone, Default)]
pub struct Record {
    class: Option<Class>,
    fields: BTreeMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    pub fn with_class(class: Class) -> Self {
        Record {
            class: Some(class),
            fields: BTreeMap::new(),
        }
    }

    pub fn class(&self) -> Option<&Class> {
        self.class.as_ref()
    }

    /// A record with no class.
    pub fn is_plain(&self) -> bool {
        self.class.is_none()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.fields.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.remove(key)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Keys visible to comparison.
    ///
    /// With `skip_undefined`, keys holding `Value::Undefined` are treated as
    /// absent.
    pub fn visible_keys(&self, skip_undefined: bool) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, v)| !(skip_undefined && matches!(v, Value::Undefined)))
            .map(|(k, _)| k.as_str())
            .collect()
    }
}

// Callable

/// Opaque callable handle.
///
/// The engine never invokes callables; two callables are equal only when
/// they are the same allocation.
#[derive(Clone, Debug)]
pub struct Callable {
    name: String,
}

impl Callable {
    pub(super) fn new(name: String) -> Self {
        Callable { name }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

// Keyed entries

/// Insertion-ordered key-value entries with same-value key semantics.
#[derive(Clone, Default)]
pub struct Entries(Vec<(Value, Value)>);

impl Entries {
    pub fn new() -> Self {
        Entries(Vec::new())
    }

    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0
            .iter()
            .find(|(k, _)| k.same_value(key))
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &Value) -> bool {
        self.get(key).is_some()
    }

    /// Insert or replace the entry for `key`, returning the previous value.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| k.same_value(&key)) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.0.push((key, value));
        None
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.0.iter().map(|(k, v)| (k, v))
    }
}

/// Insertion-ordered, deduplicated values with same-value semantics.
#[derive(Clone, Default)]
pub struct Members(Vec<Value>);

impl Members {
    pub fn new() -> Self {
        Members(Vec::new())
    }

    pub fn contains(&self, value: &Value) -> bool {
        self.0.iter().any(|member| member.same_value(value))
    }

    /// Add `value` unless an equal member exists. Returns whether it was added.
    pub fn insert(&mut self, value: Value) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.0.iter()
    }
}
