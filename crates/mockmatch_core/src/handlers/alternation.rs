//! Alternation handlers: `or` and `is_one_of`.
//!
//! Both succeed as soon as one option matches. Options are compared one
//! recursion level deeper at the same path, and failed attempts leave no
//! trace in the result.

use crate::compare::compare_values;
use crate::context::ComparisonContext;
use crate::matcher::{Matcher, MatcherKind};
use crate::result::ComparisonResult;
use crate::value::Value;

use super::{malformed, rejected, MatcherHandler};

pub struct OrHandler;

pub struct OneOfHandler;

impl MatcherHandler for OrHandler {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Alternation
    }

    fn check(
        &self,
        actual: &Value,
        expected: &Value,
        ctx: &ComparisonContext,
    ) -> ComparisonResult {
        match expected.as_matcher() {
            Some(matcher @ Matcher::Or(alternatives)) => {
                first_match(matcher, alternatives, actual, expected, ctx)
            }
            _ => malformed(self.kind(), actual, expected, ctx),
        }
    }
}

impl MatcherHandler for OneOfHandler {
    fn kind(&self) -> MatcherKind {
        MatcherKind::Membership
    }

    fn check(
        &self,
        actual: &Value,
        expected: &Value,
        ctx: &ComparisonContext,
    ) -> ComparisonResult {
        match expected.as_matcher() {
            Some(matcher @ Matcher::OneOf(options)) => {
                first_match(matcher, options, actual, expected, ctx)
            }
            _ => malformed(self.kind(), actual, expected, ctx),
        }
    }
}

fn first_match(
    matcher: &Matcher,
    options: &[Value],
    actual: &Value,
    expected: &Value,
    ctx: &ComparisonContext,
) -> ComparisonResult {
    let option_ctx = ctx.descend();
    if options
        .iter()
        .any(|option| compare_values(actual, option, &option_ctx).is_success())
    {
        ComparisonResult::success()
    } else {
        rejected(matcher, actual, expected, ctx)
    }
}
