//! Stack safety for deep structural comparison.
//!
//! The comparison engine recurses once per nesting level of the values it
//! walks, and once more for every matcher it unwraps. The default depth limit
//! keeps that shallow, but callers may raise `max_depth` far enough to reach
//! the native stack limit. Wrapping each recursive entry in
//! [`ensure_sufficient_stack`] grows the stack on demand instead.
//!
//! - **Native targets**: `stacker::maybe_grow`.
//! - **WASM targets**: no-op passthrough.

/// Minimum stack space to keep available (64KB red zone).
const RED_ZONE: usize = 64 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn compare_values(actual: &Value, expected: &Value, ctx: &Ctx) -> ComparisonResult {
///     ensure_sufficient_stack(|| dispatch(actual, expected, ctx))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
