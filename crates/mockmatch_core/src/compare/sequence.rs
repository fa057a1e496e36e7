//! Ordered-sequence comparison.

use crate::context::{ComparisonContext, PathSegment};
use crate::result::{ComparisonResult, MismatchKind};
use crate::value::Value;

use super::{compare_values, Collector, Extent};

/// Exact comparison: equal length, then index by index.
pub(crate) fn compare_sequences(
    actual_items: &[Value],
    expected_items: &[Value],
    actual: &Value,
    expected: &Value,
    ctx: &ComparisonContext,
) -> ComparisonResult {
    if actual_items.len() != expected_items.len() {
        return ctx
            .mismatch(
                MismatchKind::LengthMismatch,
                format!(
                    "expected array of length {}, received length {}",
                    expected_items.len(),
                    actual_items.len()
                ),
                actual,
                expected,
            )
            .into();
    }

    let mut collector = Collector::new(ctx);
    for (index, (a, e)) in actual_items.iter().zip(expected_items).enumerate() {
        let child = compare_values(a, e, &ctx.push_path(PathSegment::Index(index)));
        if collector.add(child) {
            break;
        }
    }
    collector.finish()
}

/// Containment: every expected element matches some actual element.
///
/// Order-independent and non-exclusive: one actual element may satisfy
/// several expected elements.
pub(crate) fn sequence_contains(
    actual_items: &[Value],
    expected_items: &[Value],
    actual: &Value,
    expected: &Value,
    ctx: &ComparisonContext,
    deep: bool,
) -> ComparisonResult {
    let extent = Extent::Subset { deep };
    let mut collector = Collector::new(ctx);
    for wanted in expected_items {
        let wanted_here = extent.child(wanted);
        let found = actual_items.iter().enumerate().any(|(index, candidate)| {
            compare_values(
                candidate,
                &wanted_here,
                &ctx.push_path(PathSegment::Index(index)),
            )
            .is_success()
        });
        if !found {
            let missing = ctx.mismatch(
                MismatchKind::MatcherFailed,
                format!("expected array to contain {wanted}"),
                actual,
                expected,
            );
            if collector.add(missing.into()) {
                break;
            }
        }
    }
    collector.finish()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
