//! Keyed-record comparison.

use crate::context::{ComparisonContext, PathSegment};
use crate::result::{ComparisonResult, MismatchKind};
use crate::value::{Record, Value};

use super::{compare_values, Collector, Extent};

/// Compare two records under `extent`.
///
/// Every visible expected key must be present in `actual` with a matching
/// value. Under `Extent::Exact` the class must agree when `expected` has one,
/// and every visible actual key must also appear in `expected`.
///
/// With `treat_absent_as_undefined`, a key holding `Undefined` is invisible
/// on both sides, and an expected matcher whose key is missing from `actual`
/// is tried against `Undefined` instead of reporting `missing-key`.
pub(crate) fn compare_records(
    actual_record: &Record,
    expected_record: &Record,
    actual: &Value,
    expected: &Value,
    ctx: &ComparisonContext,
    extent: Extent,
) -> ComparisonResult {
    let skip_undefined = ctx.options().treat_absent_as_undefined;

    if extent == Extent::Exact {
        if let Some(wanted) = expected_record.class() {
            if actual_record.class() != Some(wanted) {
                let received = actual_record.class().map_or("plain object", |c| c.name());
                return ctx
                    .mismatch(
                        MismatchKind::TypeMismatch,
                        format!("expected instance of {}, received {received}", wanted.name()),
                        actual,
                        expected,
                    )
                    .into();
            }
        }
    }

    let lookup = |key: &str| {
        actual_record
            .get(key)
            .filter(|v| !(skip_undefined && matches!(v, Value::Undefined)))
    };

    let expected_keys = expected_record.visible_keys(skip_undefined);
    let mut collector = Collector::new(ctx);

    for &key in &expected_keys {
        let Some(wanted) = expected_record.get(key) else {
            continue;
        };
        let child_ctx = ctx.push_path(PathSegment::Key(key.to_string()));
        let child = match lookup(key) {
            Some(found) => compare_values(found, &extent.child(wanted), &child_ctx),
            None if skip_undefined && matches!(wanted, Value::Matcher(_)) => {
                compare_values(&Value::Undefined, wanted, &child_ctx)
            }
            None => child_ctx
                .mismatch(
                    MismatchKind::MissingKey,
                    format!("expected key {key:?} is missing"),
                    &Value::Undefined,
                    wanted,
                )
                .into(),
        };
        if collector.add(child) {
            return collector.finish();
        }
    }

    if extent == Extent::Exact {
        for key in actual_record.visible_keys(skip_undefined) {
            if expected_keys.contains(&key) {
                continue;
            }
            let Some(extra) = actual_record.get(key) else {
                continue;
            };
            let child_ctx = ctx.push_path(PathSegment::Key(key.to_string()));
            let unexpected = child_ctx.mismatch(
                MismatchKind::ExtraKey,
                format!("unexpected key {key:?}"),
                extra,
                &Value::Undefined,
            );
            if collector.add(unexpected.into()) {
                break;
            }
        }
    }

    collector.finish()
}
