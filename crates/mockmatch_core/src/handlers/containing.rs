//! Shallow and deep containment handlers.
//!
//! Containment relaxes "same keys/elements" to "at least these": extra keys
//! in records and maps, extra elements in sequences and sets, and extra text
//! around a substring are all accepted. Shallow containment compares nested
//! values exactly; deep containment applies containment again at every
//! nested container.

use crate::compare::{compare_structure, compare_values, type_mismatch, Extent};
use crate::context::ComparisonContext;
use crate::matcher::{Matcher, MatcherKind};
use crate::result::{ComparisonResult, MismatchKind};
use crate::value::Value;

use super::{malformed, MatcherHandler};

pub struct ContainingHandler;

pub struct ContainingDeepHandler;

impl MatcherHandler for ContainingHandler {
    fn kind(&self) -> MatcherKind {
        MatcherKind::ShallowContaining
    }

    fn check(
        &self,
        actual: &Value,
        expected: &Value,
        ctx: &ComparisonContext,
    ) -> ComparisonResult {
        match expected.as_matcher() {
            Some(Matcher::Containing(pattern)) => contains(actual, pattern, expected, ctx, false),
            _ => malformed(self.kind(), actual, expected, ctx),
        }
    }
}

impl MatcherHandler for ContainingDeepHandler {
    fn kind(&self) -> MatcherKind {
        MatcherKind::DeepContaining
    }

    fn check(
        &self,
        actual: &Value,
        expected: &Value,
        ctx: &ComparisonContext,
    ) -> ComparisonResult {
        match expected.as_matcher() {
            Some(Matcher::ContainingDeep(pattern)) => contains(actual, pattern, expected, ctx, true),
            _ => malformed(self.kind(), actual, expected, ctx),
        }
    }
}

fn contains(
    actual: &Value,
    pattern: &Value,
    expected: &Value,
    ctx: &ComparisonContext,
    deep: bool,
) -> ComparisonResult {
    match pattern {
        Value::Text(needle) => match actual {
            Value::Text(haystack) if haystack.contains(&**needle) => ComparisonResult::success(),
            Value::Text(_) => ctx
                .mismatch(
                    MismatchKind::MatcherFailed,
                    format!("expected string containing {pattern}, received {actual}"),
                    actual,
                    expected,
                )
                .into(),
            _ => type_mismatch(actual, pattern, ctx),
        },
        _ if pattern.shape().is_container() => {
            compare_structure(actual, pattern, ctx, Extent::Subset { deep })
        }
        // Leaves and nested matchers: containment degenerates to matching.
        _ => compare_values(actual, pattern, &ctx.descend()),
    }
}
