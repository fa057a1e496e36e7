//! Comparison outcome model.
//!
//! A `ComparisonResult` is a list of `MismatchRecord`s; it is successful
//! exactly when that list is empty. Each record carries the path, a kind
//! from a closed set, a message, and the two values that disagreed, which is
//! enough for a formatter to render a diff without re-running the comparison.

use std::fmt;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::context::PathSegment;
use crate::value::Value;

/// Closed set of disagreement categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MismatchKind {
    TypeMismatch,
    ValueMismatch,
    MissingKey,
    ExtraKey,
    LengthMismatch,
    MatcherFailed,
    CycleDetected,
    DepthExceeded,
    ContainerKeyMissing,
    ContainerElementMissing,
}

impl MismatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MismatchKind::TypeMismatch => "type-mismatch",
            MismatchKind::ValueMismatch => "value-mismatch",
            MismatchKind::MissingKey => "missing-key",
            MismatchKind::ExtraKey => "extra-key",
            MismatchKind::LengthMismatch => "length-mismatch",
            MismatchKind::MatcherFailed => "matcher-failed",
            MismatchKind::CycleDetected => "cycle-detected",
            MismatchKind::DepthExceeded => "depth-exceeded",
            MismatchKind::ContainerKeyMissing => "container-key-missing",
            MismatchKind::ContainerElementMissing => "container-element-missing",
        }
    }
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One point of disagreement.
#[derive(Clone, Debug)]
pub struct MismatchRecord {
    pub path: Vec<PathSegment>,
    /// `path` rendered as an accessor chain; empty at the root.
    pub path_string: String,
    pub kind: MismatchKind,
    pub message: String,
    pub actual: Value,
    pub expected: Value,
}

impl fmt::Display for MismatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path_string.is_empty() {
            write!(f, "at <root>: {}", self.message)
        } else {
            write!(f, "at {}: {}", self.path_string, self.message)
        }
    }
}

impl Serialize for MismatchRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut record = serializer.serialize_struct("MismatchRecord", 6)?;
        record.serialize_field("path", &self.path)?;
        record.serialize_field("pathString", &self.path_string)?;
        record.serialize_field("kind", &self.kind)?;
        record.serialize_field("message", &self.message)?;
        record.serialize_field("actual", &self.actual.to_string())?;
        record.serialize_field("expected", &self.expected.to_string())?;
        record.end()
    }
}

/// Outcome of a comparison.
#[derive(Clone, Debug, Default)]
pub struct ComparisonResult {
    mismatches: Vec<MismatchRecord>,
}

impl ComparisonResult {
    pub fn success() -> Self {
        ComparisonResult::default()
    }

    pub fn failure(mismatch: MismatchRecord) -> Self {
        ComparisonResult {
            mismatches: vec![mismatch],
        }
    }

    pub fn from_mismatches(mismatches: Vec<MismatchRecord>) -> Self {
        ComparisonResult { mismatches }
    }

    pub fn is_success(&self) -> bool {
        self.mismatches.is_empty()
    }

    pub fn mismatches(&self) -> &[MismatchRecord] {
        &self.mismatches
    }

    pub fn into_mismatches(self) -> Vec<MismatchRecord> {
        self.mismatches
    }

    pub fn first(&self) -> Option<&MismatchRecord> {
        self.mismatches.first()
    }

    /// Append `other`'s mismatches to this result.
    pub fn merge(&mut self, other: ComparisonResult) {
        self.mismatches.extend(other.mismatches);
    }

    pub fn push(&mut self, mismatch: MismatchRecord) {
        self.mismatches.push(mismatch);
    }
}

impl From<MismatchRecord> for ComparisonResult {
    fn from(mismatch: MismatchRecord) -> Self {
        ComparisonResult::failure(mismatch)
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            return f.write_str("values match");
        }
        for (i, mismatch) in self.mismatches.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{mismatch}")?;
        }
        Ok(())
    }
}

impl Serialize for ComparisonResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut result = serializer.serialize_struct("ComparisonResult", 2)?;
        result.serialize_field("success", &self.is_success())?;
        result.serialize_field("mismatches", &self.mismatches)?;
        result.end()
    }
}
