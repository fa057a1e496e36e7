//! The dispatcher and the structural comparators.
//!
//! `compare_values` decides, for each (actual, expected) pair, who handles
//! it:
//!
//! 1. `expected` is a matcher: the registry's handler for its kind.
//! 2. `expected` is a container with a matcher somewhere inside: the
//!    container comparator for its shape, which recurses slot by slot
//!    through `compare_values` so the buried matcher is reached.
//! 3. Otherwise a fully literal comparison: primitives directly, containers
//!    through the same comparators (identical allocations short-circuit).
//!
//! Every comparator and handler that needs a nested comparison calls back
//! into `compare_values`; matcher detection lives only here.

mod keyed;
mod members;
mod primitive;
mod record;
mod sequence;

use std::borrow::Cow;

use mockmatch_stack::ensure_sufficient_stack;

use crate::context::{ComparisonContext, VerdictKey};
use crate::matcher::Matcher;
use crate::options::{ComparisonOptions, CyclePolicy};
use crate::registry::MatcherRegistry;
use crate::result::{ComparisonResult, MismatchKind};
use crate::value::Value;

pub(crate) use keyed::compare_maps;
pub(crate) use members::compare_sets;
pub(crate) use record::compare_records;
pub(crate) use sequence::{compare_sequences, sequence_contains};

/// How much of `actual` an expected container must account for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) enum Extent {
    /// Same keys/elements, same size.
    Exact,
    /// Expected keys/elements must be present; extras in `actual` are fine.
    /// With `deep`, nested plain containers are compared as subsets too.
    Subset { deep: bool },
}

impl Extent {
    /// The expectation to use for a nested slot.
    ///
    /// Deep containment re-wraps nested plain containers as deep-containing
    /// matchers, one level at a time. Matchers, leaves, dates and patterns are
    /// never wrapped.
    pub(crate) fn child<'v>(self, expected: &'v Value) -> Cow<'v, Value> {
        match self {
            Extent::Subset { deep: true } if expected.shape().is_container() => Cow::Owned(
                Value::matcher(Matcher::ContainingDeep(expected.clone())),
            ),
            _ => Cow::Borrowed(expected),
        }
    }
}

/// Compare with full mismatch detail.
#[tracing::instrument(level = "trace", skip_all)]
pub fn compare(actual: &Value, expected: &Value, options: ComparisonOptions) -> ComparisonResult {
    let ctx = ComparisonContext::create(options);
    compare_values(actual, expected, &ctx)
}

/// Compare with default options, keeping only the verdict.
pub fn compare_boolean(actual: &Value, expected: &Value) -> bool {
    compare(actual, expected, ComparisonOptions::default()).is_success()
}

/// Recursive entry point shared by every comparator and handler.
pub fn compare_values(
    actual: &Value,
    expected: &Value,
    ctx: &ComparisonContext,
) -> ComparisonResult {
    ensure_sufficient_stack(|| dispatch(actual, expected, ctx))
}

fn dispatch(actual: &Value, expected: &Value, ctx: &ComparisonContext) -> ComparisonResult {
    if ctx.is_depth_exceeded() {
        tracing::debug!(
            depth = ctx.depth(),
            path = %ctx.render_path(),
            "maximum comparison depth exceeded"
        );
        return ctx
            .mismatch(
                MismatchKind::DepthExceeded,
                format!(
                    "maximum comparison depth of {} exceeded",
                    ctx.options().max_depth
                ),
                actual,
                expected,
            )
            .into();
    }

    if let Some(matcher) = MatcherRegistry::detect(expected) {
        tracing::trace!(kind = matcher.kind().name(), path = %ctx.render_path(), "matcher");
        return MatcherRegistry::new()
            .get(matcher.kind())
            .check(actual, expected, ctx);
    }

    if expected.shape().is_container() && expected.contains_matcher() {
        tracing::trace!(path = %ctx.render_path(), "container with nested matchers");
        return compare_structure(actual, expected, ctx, Extent::Exact);
    }

    compare_literal(actual, expected, ctx)
}

fn compare_literal(actual: &Value, expected: &Value, ctx: &ComparisonContext) -> ComparisonResult {
    if !expected.shape().is_container() {
        return primitive::compare_primitives(actual, expected, ctx);
    }
    if let (Some(a), Some(e)) = (actual.identity(), expected.identity()) {
        if a == e {
            return ComparisonResult::success();
        }
    }
    compare_structure(actual, expected, ctx, Extent::Exact)
}

/// Compare two values of the same container shape under `extent`, after the
/// cycle guard. Mismatched shapes are a type mismatch; a non-container
/// `expected` falls back to `compare_values`.
pub(crate) fn compare_structure(
    actual: &Value,
    expected: &Value,
    ctx: &ComparisonContext,
    extent: Extent,
) -> ComparisonResult {
    if !expected.shape().is_container() {
        return compare_values(actual, expected, ctx);
    }
    if actual.shape() != expected.shape() {
        return type_mismatch(actual, expected, ctx);
    }
    let entered = match enter(actual, expected, ctx, extent) {
        Ok(entered) => entered,
        Err(verdict) => return verdict,
    };
    let result = match (actual, expected) {
        (Value::Sequence(a), Value::Sequence(e)) => {
            let (a_items, e_items) = (a.read(), e.read());
            match extent {
                Extent::Exact => compare_sequences(&a_items, &e_items, actual, expected, ctx),
                Extent::Subset { deep } => {
                    sequence_contains(&a_items, &e_items, actual, expected, ctx, deep)
                }
            }
        }
        (Value::Record(a), Value::Record(e)) => {
            compare_records(&a.read(), &e.read(), actual, expected, ctx, extent)
        }
        (Value::Map(a), Value::Map(e)) => {
            compare_maps(&a.read(), &e.read(), actual, expected, ctx, extent)
        }
        (Value::Set(a), Value::Set(e)) => {
            compare_sets(&a.read(), &e.read(), actual, expected, ctx, extent)
        }
        _ => type_mismatch(actual, expected, ctx),
    };
    if let Some((key, checkpoint)) = entered {
        ctx.settle(key, checkpoint, &result);
    }
    result
}

/// Cycle guard and verdict lookup run before descending into a container
/// pair.
///
/// `Err` carries a verdict reached without descending: the pair is already
/// being compared further up the walk, or an identical comparison has
/// finished. Otherwise the pair is marked visited and its key returned with a
/// checkpoint so the caller can settle it when done.
fn enter(
    actual: &Value,
    expected: &Value,
    ctx: &ComparisonContext,
    extent: Extent,
) -> Result<Option<(VerdictKey, usize)>, ComparisonResult> {
    let (a, e) = (actual.identity(), expected.identity());
    let Some((a_id, e_id)) = a.zip(e) else {
        ctx.mark_visited(a, e);
        return Ok(None);
    };
    if ctx.is_revisit(a_id, e_id) {
        tracing::debug!(path = %ctx.render_path(), "cyclic revisit");
        return Err(match ctx.options().cycle_policy {
            CyclePolicy::AssumeEqual => ComparisonResult::success(),
            CyclePolicy::Report => ctx
                .mismatch(
                    MismatchKind::CycleDetected,
                    "circular reference revisited",
                    actual,
                    expected,
                )
                .into(),
        });
    }
    let key = VerdictKey {
        actual: a_id,
        expected: e_id,
        extent,
        depth: ctx.depth(),
    };
    if let Some(verdict) = ctx.recall(&key) {
        tracing::trace!(path = %ctx.render_path(), "settled pair");
        return Err(verdict);
    }
    let checkpoint = ctx.checkpoint();
    ctx.mark_visited(a, e);
    Ok(Some((key, checkpoint)))
}

pub(crate) fn type_mismatch(
    actual: &Value,
    expected: &Value,
    ctx: &ComparisonContext,
) -> ComparisonResult {
    ctx.mismatch(
        MismatchKind::TypeMismatch,
        format!(
            "expected {}, received {}",
            expected.type_name(),
            actual.type_name()
        ),
        actual,
        expected,
    )
    .into()
}

/// Accumulates child results, honouring `collect_all_mismatches`.
pub(crate) struct Collector<'c> {
    ctx: &'c ComparisonContext,
    result: ComparisonResult,
}

impl<'c> Collector<'c> {
    pub(crate) fn new(ctx: &'c ComparisonContext) -> Self {
        Collector {
            ctx,
            result: ComparisonResult::success(),
        }
    }

    /// Add a child result. Returns `true` when the caller should stop.
    pub(crate) fn add(&mut self, child: ComparisonResult) -> bool {
        if child.is_success() {
            return false;
        }
        self.result.merge(child);
        !self.ctx.options().collect_all_mismatches
    }

    pub(crate) fn finish(self) -> ComparisonResult {
        self.result
    }
}
