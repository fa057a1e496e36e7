//! Matcher handlers.
//!
//! One zero-sized handler per `MatcherKind`, looked up through
//! [`crate::registry::MatcherRegistry`]. A handler receives the actual value,
//! the expected matcher value, and the context, and recurses through
//! `compare_values` whenever its payload holds further expectations.

mod alternation;
mod containing;
mod instance;
mod text;
mod validate;
mod wildcard;

use crate::context::ComparisonContext;
use crate::matcher::{Matcher, MatcherKind};
use crate::result::{ComparisonResult, MismatchKind};
use crate::value::Value;

pub use alternation::{OneOfHandler, OrHandler};
pub use containing::{ContainingDeepHandler, ContainingHandler};
pub use instance::InstanceOfHandler;
pub use text::{EndsWithHandler, MatchesHandler, StartsWithHandler};
pub use validate::{PredicateHandler, SchemaHandler};
pub use wildcard::WildcardHandler;

/// Checks an actual value against one kind of matcher.
pub trait MatcherHandler: Send + Sync {
    /// The kind this handler serves.
    fn kind(&self) -> MatcherKind;

    /// Check `actual` against the matcher carried by `expected`.
    fn check(
        &self,
        actual: &Value,
        expected: &Value,
        ctx: &ComparisonContext,
    ) -> ComparisonResult;
}

/// Mismatch for a matcher value that does not carry the payload its handler
/// serves.
fn malformed(
    kind: MatcherKind,
    actual: &Value,
    expected: &Value,
    ctx: &ComparisonContext,
) -> ComparisonResult {
    ctx.mismatch(
        MismatchKind::MatcherFailed,
        format!("malformed {} matcher: {expected}", kind.name()),
        actual,
        expected,
    )
    .into()
}

/// `matcher-failed` with the usual "expected <matcher>, received <value>"
/// message.
fn rejected(
    matcher: &Matcher,
    actual: &Value,
    expected: &Value,
    ctx: &ComparisonContext,
) -> ComparisonResult {
    ctx.mismatch(
        MismatchKind::MatcherFailed,
        format!("expected {matcher}, received {actual}"),
        actual,
        expected,
    )
    .into()
}
