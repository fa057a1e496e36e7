//! External-schema and custom-predicate handlers.
//!
//! Validators are user code. An `Err` return and a panic are both turned into
//! a `matcher-failed` mismatch carrying the reported message, and the
//! traversal carries on.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::context::ComparisonContext;
use crate::errors::{panic_message, ValidationError};
use crate::matcher::{Matcher, MatcherKind};
use crate::result::{ComparisonResult, MismatchKind};
use crate::value::Value;

use super::{malformed, rejected, MatcherHandler};

pub struct SchemaHandler;

pub struct PredicateHandler;

impl MatcherHandler for SchemaHandler {
    fn kind(&self) -> MatcherKind {
        MatcherKind::SchemaValidate
    }

    fn check(
        &self,
        actual: &Value,
        expected: &Value,
        ctx: &ComparisonContext,
    ) -> ComparisonResult {
        let Some(Matcher::Schema(schema)) = expected.as_matcher() else {
            return malformed(self.kind(), actual, expected, ctx);
        };
        let outcome = run_guarded(|| schema.safe_parse(actual));
        match outcome {
            Ok(()) => ComparisonResult::success(),
            Err(error) => ctx
                .mismatch(
                    MismatchKind::MatcherFailed,
                    format!("{} rejected {actual}: {}", schema.name(), error.describe()),
                    actual,
                    expected,
                )
                .into(),
        }
    }
}

impl MatcherHandler for PredicateHandler {
    fn kind(&self) -> MatcherKind {
        MatcherKind::PredicateValidate
    }

    fn check(
        &self,
        actual: &Value,
        expected: &Value,
        ctx: &ComparisonContext,
    ) -> ComparisonResult {
        let Some(matcher @ Matcher::Predicate(predicate)) = expected.as_matcher() else {
            return malformed(self.kind(), actual, expected, ctx);
        };
        match run_guarded(|| predicate.test(actual)) {
            Ok(true) => ComparisonResult::success(),
            Ok(false) => rejected(matcher, actual, expected, ctx),
            Err(error) => ctx
                .mismatch(
                    MismatchKind::MatcherFailed,
                    format!("{} failed on {actual}: {}", predicate.label(), error.describe()),
                    actual,
                    expected,
                )
                .into(),
        }
    }
}

/// Run a validator, converting a panic into a `ValidationError`.
fn run_guarded<T>(
    validator: impl FnOnce() -> Result<T, ValidationError>,
) -> Result<T, ValidationError> {
    match catch_unwind(AssertUnwindSafe(validator)) {
        Ok(outcome) => outcome,
        Err(payload) => {
            let message = panic_message(&*payload);
            tracing::debug!(%message, "validator panicked");
            Err(ValidationError::new(format!("validator panicked: {message}")))
        }
    }
}
