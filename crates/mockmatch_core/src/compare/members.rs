//! Deduplicated-value container comparison.
//!
//! Membership cannot be hashed once matchers are involved, so each expected
//! member is looked for with a pairwise recursive scan of `actual`.

use crate::context::{ComparisonContext, PathSegment};
use crate::result::{ComparisonResult, MismatchKind};
use crate::value::{Members, Value};

use super::{compare_values, Collector, Extent};

pub(crate) fn compare_sets(
    actual_members: &Members,
    expected_members: &Members,
    actual: &Value,
    expected: &Value,
    ctx: &ComparisonContext,
    extent: Extent,
) -> ComparisonResult {
    if extent == Extent::Exact && actual_members.len() != expected_members.len() {
        return ctx
            .mismatch(
                MismatchKind::LengthMismatch,
                format!(
                    "expected set of size {}, received size {}",
                    expected_members.len(),
                    actual_members.len()
                ),
                actual,
                expected,
            )
            .into();
    }

    let element_ctx = ctx.push_path(PathSegment::Element);
    let mut collector = Collector::new(ctx);
    for wanted in expected_members.iter() {
        if has_member(actual_members, wanted, &element_ctx, extent) {
            continue;
        }
        let missing = element_ctx.mismatch(
            MismatchKind::ContainerElementMissing,
            format!("expected set to contain {wanted}"),
            actual,
            wanted,
        );
        if collector.add(missing.into()) {
            break;
        }
    }
    collector.finish()
}

fn has_member(
    actual_members: &Members,
    wanted: &Value,
    element_ctx: &ComparisonContext,
    extent: Extent,
) -> bool {
    // Same-value hit needs no recursion
    if !matches!(wanted, Value::Matcher(_)) && actual_members.contains(wanted) {
        return true;
    }
    let wanted_here = extent.child(wanted);
    actual_members
        .iter()
        .any(|candidate| compare_values(candidate, &wanted_here, element_ctx).is_success())
}
