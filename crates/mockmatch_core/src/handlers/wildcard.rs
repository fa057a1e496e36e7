//! Wildcard-by-category handler.

use crate::context::ComparisonContext;
use crate::matcher::{Matcher, MatcherKind};
use crate::result::ComparisonResult;
use crate::value::Value;

use super::{malformed, rejected, MatcherHandler};

/// `any(category)`: accepts any value of the category.
pub struct WildcardHandler;

impl MatcherHandler for WildcardHandler {
    fn kind(&self) -> MatcherKind {
        MatcherKind::WildcardByCategory
    }

    fn check(
        &self,
        actual: &Value,
        expected: &Value,
        ctx: &ComparisonContext,
    ) -> ComparisonResult {
        let Some(matcher @ Matcher::Any(category)) = expected.as_matcher() else {
            return malformed(self.kind(), actual, expected, ctx);
        };
        if category.accepts(actual) {
            ComparisonResult::success()
        } else {
            rejected(matcher, actual, expected, ctx)
        }
    }
}
