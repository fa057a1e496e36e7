//! Key-value container comparison.
//!
//! Keys are looked up with same-value semantics (primitives by value,
//! containers by identity); values are compared recursively.

use crate::context::{ComparisonContext, PathSegment};
use crate::result::{ComparisonResult, MismatchKind};
use crate::value::{Entries, Value};

use super::{compare_values, Collector, Extent};

pub(crate) fn compare_maps(
    actual_entries: &Entries,
    expected_entries: &Entries,
    actual: &Value,
    expected: &Value,
    ctx: &ComparisonContext,
    extent: Extent,
) -> ComparisonResult {
    if extent == Extent::Exact && actual_entries.len() != expected_entries.len() {
        return ctx
            .mismatch(
                MismatchKind::LengthMismatch,
                format!(
                    "expected map of size {}, received size {}",
                    expected_entries.len(),
                    actual_entries.len()
                ),
                actual,
                expected,
            )
            .into();
    }

    let mut collector = Collector::new(ctx);
    for (key, wanted) in expected_entries.iter() {
        let child_ctx = ctx.push_path(PathSegment::MapKey(key.clone()));
        let child = match actual_entries.get(key) {
            Some(found) => compare_values(found, &extent.child(wanted), &child_ctx),
            None => child_ctx
                .mismatch(
                    MismatchKind::ContainerKeyMissing,
                    format!("expected map to have key {key}"),
                    actual,
                    wanted,
                )
                .into(),
        };
        if collector.add(child) {
            break;
        }
    }
    collector.finish()
}
