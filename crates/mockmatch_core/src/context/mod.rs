//! Traversal state threaded through one `compare` call.
//!
//! A `ComparisonContext` is immutable per branch: `push_path` and `descend`
//! return a new context with its own path, so siblings never observe each
//! other's segments. The visited sets are the exception: they live behind a
//! shared handle. The per-side sets grow monotonically across the whole call
//! tree; the pair set holds only the pairs whose comparison is still in
//! progress, so a revisited pair always means a cycle.
//!
//! Finished container pairs leave a verdict behind, keyed by pair, extent and
//! depth. A later sibling reaching the same pair reuses it, re-rooted at its
//! own path, so shared and cyclic nodes are walked once per depth rather than
//! once per route.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Serialize, Serializer};
use smallvec::SmallVec;

use crate::compare::Extent;
use crate::options::ComparisonOptions;
use crate::result::{ComparisonResult, MismatchKind, MismatchRecord};
use crate::value::Value;

/// One step from the root to a compared slot.
#[derive(Clone, Debug)]
pub enum PathSegment {
    /// Record field.
    Key(String),
    /// Sequence position.
    Index(usize),
    /// Key-value container entry.
    MapKey(Value),
    /// Some member of a deduplicated-value container.
    Element,
}

impl Serialize for PathSegment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PathSegment::Key(key) => serializer.serialize_str(key),
            PathSegment::Index(index) => serializer.serialize_u64(*index as u64),
            PathSegment::MapKey(key) => serializer.serialize_str(&format!("get({key})")),
            PathSegment::Element => serializer.serialize_str("<element>"),
        }
    }
}

/// Which input a node identity belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Actual,
    Expected,
}

/// Identifies one finished container comparison.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct VerdictKey {
    pub(crate) actual: usize,
    pub(crate) expected: usize,
    pub(crate) extent: Extent,
    pub(crate) depth: usize,
}

#[derive(Debug)]
struct Verdict {
    /// Path length of the context that produced `result`.
    root: usize,
    result: ComparisonResult,
}

/// Container identities entered so far during one `compare` call.
#[derive(Debug, Default)]
pub struct VisitedSets {
    actual: FxHashSet<usize>,
    expected: FxHashSet<usize>,
    pairs: FxHashSet<(usize, usize)>,
    verdicts: FxHashMap<VerdictKey, Verdict>,
    /// Successful verdicts in the order they were recorded.
    successes: Vec<VerdictKey>,
}

/// Per-branch traversal state.
#[derive(Clone)]
pub struct ComparisonContext {
    path: SmallVec<[PathSegment; 8]>,
    visited: Rc<RefCell<VisitedSets>>,
    depth: usize,
    options: Rc<ComparisonOptions>,
}

impl ComparisonContext {
    /// Fresh root context for one `compare` call.
    pub fn create(options: ComparisonOptions) -> Self {
        ComparisonContext {
            path: SmallVec::new(),
            visited: Rc::new(RefCell::new(VisitedSets::default())),
            depth: 0,
            options: Rc::new(options),
        }
    }

    /// Child context one segment deeper.
    #[must_use]
    pub fn push_path(&self, segment: PathSegment) -> Self {
        let mut path = self.path.clone();
        path.push(segment);
        ComparisonContext {
            path,
            visited: Rc::clone(&self.visited),
            depth: self.depth.saturating_add(1),
            options: Rc::clone(&self.options),
        }
    }

    /// Child context at the same path, one recursion deeper.
    ///
    /// Used when a matcher re-dispatches against its payload.
    #[must_use]
    pub fn descend(&self) -> Self {
        ComparisonContext {
            path: self.path.clone(),
            visited: Rc::clone(&self.visited),
            depth: self.depth.saturating_add(1),
            options: Rc::clone(&self.options),
        }
    }

    /// Record that this traversal entered `actual` against `expected`.
    ///
    /// `None` identities (non-containers) are ignored.
    pub fn mark_visited(&self, actual: Option<usize>, expected: Option<usize>) {
        let mut visited = self.visited.borrow_mut();
        if let Some(id) = actual {
            visited.actual.insert(id);
        }
        if let Some(id) = expected {
            visited.expected.insert(id);
        }
        if let (Some(a), Some(e)) = (actual, expected) {
            visited.pairs.insert((a, e));
        }
    }

    /// Whether `id` was already entered on `side` anywhere in this traversal.
    pub fn is_circular(&self, id: usize, side: Side) -> bool {
        let visited = self.visited.borrow();
        match side {
            Side::Actual => visited.actual.contains(&id),
            Side::Expected => visited.expected.contains(&id),
        }
    }

    /// Marker for [`settle`](Self::settle): how many successful verdicts
    /// exist before a pair is entered.
    pub(crate) fn checkpoint(&self) -> usize {
        self.visited.borrow().successes.len()
    }

    /// Release a finished pair and remember its verdict.
    ///
    /// A failure drops every success recorded since `checkpoint`: those were
    /// reached while this pair was still assumed equal. The per-side sets are
    /// left untouched.
    pub(crate) fn settle(
        &self,
        key: VerdictKey,
        checkpoint: usize,
        result: &ComparisonResult,
    ) {
        let visited = &mut *self.visited.borrow_mut();
        visited.pairs.remove(&(key.actual, key.expected));
        if result.is_success() {
            visited.successes.push(key);
        } else if checkpoint < visited.successes.len() {
            for stale in visited.successes.split_off(checkpoint) {
                visited.verdicts.remove(&stale);
            }
        }
        visited.verdicts.insert(
            key,
            Verdict {
                root: self.path.len(),
                result: result.clone(),
            },
        );
    }

    /// A verdict already settled for `key`, with its mismatch paths moved
    /// under this context's path.
    pub(crate) fn recall(&self, key: &VerdictKey) -> Option<ComparisonResult> {
        let visited = self.visited.borrow();
        let verdict = visited.verdicts.get(key)?;
        let mismatches = verdict
            .result
            .mismatches()
            .iter()
            .map(|mismatch| {
                let tail = mismatch.path.get(verdict.root..).unwrap_or_default();
                let path: Vec<PathSegment> = self.path.iter().chain(tail).cloned().collect();
                MismatchRecord {
                    path_string: render_path(&path),
                    path,
                    ..mismatch.clone()
                }
            })
            .collect();
        Some(ComparisonResult::from_mismatches(mismatches))
    }

    /// Whether this exact node pair is being compared further up the walk.
    pub fn is_revisit(&self, actual: usize, expected: usize) -> bool {
        self.visited.borrow().pairs.contains(&(actual, expected))
    }

    pub fn is_depth_exceeded(&self) -> bool {
        self.depth > self.options.max_depth
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    pub fn options(&self) -> &ComparisonOptions {
        &self.options
    }

    pub fn render_path(&self) -> String {
        render_path(&self.path)
    }

    /// Build a mismatch located at this context's path.
    pub fn mismatch(
        &self,
        kind: MismatchKind,
        message: impl Into<String>,
        actual: &Value,
        expected: &Value,
    ) -> MismatchRecord {
        MismatchRecord {
            path: self.path.to_vec(),
            path_string: self.render_path(),
            kind,
            message: message.into(),
            actual: actual.clone(),
            expected: expected.clone(),
        }
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Render a path the way it would be written in an accessor chain:
/// `user.tags[0]`, `settings.get("theme")`, `roles[<element>]`,
/// `headers["content-type"]`. The root is the empty string.
pub fn render_path(path: &[PathSegment]) -> String {
    let mut out = String::new();
    for segment in path {
        // Writing to a String cannot fail
        let _ = match segment {
            PathSegment::Key(key) if is_identifier(key) => {
                if out.is_empty() {
                    write!(out, "{key}")
                } else {
                    write!(out, ".{key}")
                }
            }
            PathSegment::Key(key) => write!(out, "[{key:?}]"),
            PathSegment::Index(index) => write!(out, "[{index}]"),
            PathSegment::MapKey(key) => {
                if out.is_empty() {
                    write!(out, "get({key})")
                } else {
                    write!(out, ".get({key})")
                }
            }
            PathSegment::Element => write!(out, "[<element>]"),
        };
    }
    out
}
