//! Leaf comparison: everything that is neither a container nor a matcher.

use crate::context::ComparisonContext;
use crate::result::{ComparisonResult, MismatchKind};
use crate::value::{numbers_equal, Heap, Value};

use super::type_mismatch;

/// Compare two leaf values.
///
/// A shape difference is a `type-mismatch`; same shape with a different
/// value is a `value-mismatch`. `NaN` equals `NaN`, `Undefined` never equals
/// `Null`, callables compare by identity, dates by instant, and patterns by
/// source text.
pub(crate) fn compare_primitives(
    actual: &Value,
    expected: &Value,
    ctx: &ComparisonContext,
) -> ComparisonResult {
    if actual.shape() != expected.shape() {
        return type_mismatch(actual, expected, ctx);
    }

    let equal = match (actual, expected) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(*a, *b),
        (Value::Date(a), Value::Date(b)) => a == b,
        (Value::Text(a), Value::Text(b)) => **a == **b,
        (Value::Pattern(a), Value::Pattern(b)) => a.as_str() == b.as_str(),
        (Value::Callable(a), Value::Callable(b)) => Heap::ptr_eq(a, b),
        (Value::Matcher(a), Value::Matcher(b)) => Heap::ptr_eq(a, b),
        _ => false,
    };
    if equal {
        return ComparisonResult::success();
    }

    let message = match (actual, expected) {
        (Value::Callable(a), Value::Callable(b)) => format!(
            "expected the same function as [Function {}], received a different [Function {}]",
            b.name(),
            a.name()
        ),
        _ => format!("expected {expected}, received {actual}"),
    };
    ctx.mismatch(MismatchKind::ValueMismatch, message, actual, expected)
        .into()
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
