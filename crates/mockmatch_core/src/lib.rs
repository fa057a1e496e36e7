#![deny(clippy::arithmetic_side_effects)]
//! Mockmatch Core - structural comparison and matcher engine.
//!
//! This crate provides:
//! - Runtime values under comparison (`Value`, `Heap`, `Shared`, `Record`, etc.)
//! - Matcher constructs (`Matcher`) and their factory functions ([`matchers`])
//! - The matcher registry and one handler per matcher kind
//! - The recursive comparison engine (`compare`, `compare_values`)
//! - The mismatch/result model consumed by diagnostic formatters
//!
//! # Architecture
//!
//! `compare_values` is the single recursive entry point. For each pair it
//! asks the registry whether `expected` is a matcher; if so the handler for
//! that kind decides, otherwise the comparator for the value's shape does.
//! Handlers and comparators recurse back through `compare_values`, so
//! matchers compose at any depth inside literal expectations.
//!
//! Mismatches are data, never errors: every disagreement becomes a
//! `MismatchRecord` with a path from the root, and a `ComparisonResult` is
//! successful exactly when it holds none.
//!
//! # Example
//!
//! ```text
//! use mockmatch_core::matchers::{any_number, starts_with};
//!
//! let actual = Value::record([("id", Value::int(7)), ("name", Value::text("ada"))]);
//! let expected = Value::record([("id", any_number()), ("name", starts_with("a"))]);
//! assert!(compare_boolean(&actual, &expected));
//! ```

mod compare;
mod context;
mod errors;
mod handlers;
pub mod json;
mod matcher;
pub mod matchers;
mod options;
mod registry;
mod result;
mod value;

pub use compare::{compare, compare_boolean, compare_values};
pub use context::{render_path, ComparisonContext, PathSegment, Side};
pub use errors::{JsonError, ValidationError};
pub use handlers::MatcherHandler;
pub use matcher::{BuiltinType, Category, Matcher, MatcherKind, Predicate, Schema, TypeTarget};
pub use options::{ComparisonOptions, CyclePolicy, DEFAULT_MAX_DEPTH};
pub use registry::MatcherRegistry;
pub use result::{ComparisonResult, MismatchKind, MismatchRecord};
pub use value::{Callable, Class, Entries, Heap, Members, Record, Shape, Shared, Value};
