//! Type-membership handler.

use crate::context::ComparisonContext;
use crate::matcher::{Matcher, MatcherKind};
use crate::result::{ComparisonResult, MismatchKind};
use crate::value::Value;

use super::{malformed, MatcherHandler};

/// `instance_of(type)`: the value's class (or a superclass of it) must be the
/// target type.
pub struct InstanceOfHandler;

impl MatcherHandler for InstanceOfHandler {
    fn kind(&self) -> MatcherKind {
        MatcherKind::TypeInstance
    }

    fn check(
        &self,
        actual: &Value,
        expected: &Value,
        ctx: &ComparisonContext,
    ) -> ComparisonResult {
        let Some(Matcher::InstanceOf(target)) = expected.as_matcher() else {
            return malformed(self.kind(), actual, expected, ctx);
        };
        if target.admits(actual) {
            return ComparisonResult::success();
        }
        ctx.mismatch(
            MismatchKind::MatcherFailed,
            format!(
                "expected instance of {}, received {}",
                target.name(),
                describe_type(actual)
            ),
            actual,
            expected,
        )
        .into()
    }
}

/// Class name for instances, shape name otherwise.
fn describe_type(value: &Value) -> String {
    if let Value::Record(record) = value {
        if let Some(class) = record.read().class() {
            return class.name().to_string();
        }
    }
    value.type_name().to_string()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
