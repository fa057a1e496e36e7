//! String-pattern handlers: prefix, suffix and regular expression.
//!
//! All three require text; any other value is a `type-mismatch`.

use crate::context::ComparisonContext;
use crate::matcher::{Matcher, MatcherKind};
use crate::result::{ComparisonResult, MismatchKind};
use crate::value::Value;

use super::{malformed, rejected, MatcherHandler};

pub struct StartsWithHandler;

pub struct EndsWithHandler;

pub struct MatchesHandler;

impl MatcherHandler for StartsWithHandler {
    fn kind(&self) -> MatcherKind {
        MatcherKind::PrefixMatch
    }

    fn check(
        &self,
        actual: &Value,
        expected: &Value,
        ctx: &ComparisonContext,
    ) -> ComparisonResult {
        match expected.as_matcher() {
            Some(matcher @ Matcher::StartsWith(prefix)) => {
                check_text(matcher, actual, expected, ctx, |s| s.starts_with(prefix.as_str()))
            }
            _ => malformed(self.kind(), actual, expected, ctx),
        }
    }
}

impl MatcherHandler for EndsWithHandler {
    fn kind(&self) -> MatcherKind {
        MatcherKind::SuffixMatch
    }

    fn check(
        &self,
        actual: &Value,
        expected: &Value,
        ctx: &ComparisonContext,
    ) -> ComparisonResult {
        match expected.as_matcher() {
            Some(matcher @ Matcher::EndsWith(suffix)) => {
                check_text(matcher, actual, expected, ctx, |s| s.ends_with(suffix.as_str()))
            }
            _ => malformed(self.kind(), actual, expected, ctx),
        }
    }
}

impl MatcherHandler for MatchesHandler {
    fn kind(&self) -> MatcherKind {
        MatcherKind::PatternMatch
    }

    fn check(
        &self,
        actual: &Value,
        expected: &Value,
        ctx: &ComparisonContext,
    ) -> ComparisonResult {
        match expected.as_matcher() {
            Some(matcher @ Matcher::Matches(regex)) => {
                check_text(matcher, actual, expected, ctx, |s| regex.is_match(s))
            }
            _ => malformed(self.kind(), actual, expected, ctx),
        }
    }
}

fn check_text(
    matcher: &Matcher,
    actual: &Value,
    expected: &Value,
    ctx: &ComparisonContext,
    accepts: impl Fn(&str) -> bool,
) -> ComparisonResult {
    let Some(text) = actual.as_str() else {
        return ctx
            .mismatch(
                MismatchKind::TypeMismatch,
                format!("expected string, received {}", actual.type_name()),
                actual,
                expected,
            )
            .into();
    };
    if accepts(text) {
        ComparisonResult::success()
    } else {
        rejected(matcher, actual, expected, ctx)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
