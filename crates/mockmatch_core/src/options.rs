//! Comparison options.
//!
//! Options are plain data with defaults, builder-style setters, and serde
//! support so a caller can load them from a configuration file.

use serde::{Deserialize, Serialize};

/// Default recursion limit.
pub const DEFAULT_MAX_DEPTH: usize = 50;

/// What to do when a traversal re-enters a node pair it has already entered.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CyclePolicy {
    /// Treat the revisited pair as equal and stop descending.
    #[default]
    AssumeEqual,
    /// Record a `cycle-detected` mismatch at the revisit point.
    Report,
}

/// Knobs for a single `compare` call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparisonOptions {
    /// Keep comparing siblings after the first failure.
    pub collect_all_mismatches: bool,
    /// Treat a record field holding `Undefined` as if the key were missing.
    pub treat_absent_as_undefined: bool,
    /// Deepest recursion allowed before reporting `depth-exceeded`.
    pub max_depth: usize,
    pub cycle_policy: CyclePolicy,
}

impl Default for ComparisonOptions {
    fn default() -> Self {
        ComparisonOptions {
            collect_all_mismatches: false,
            treat_absent_as_undefined: true,
            max_depth: DEFAULT_MAX_DEPTH,
            cycle_policy: CyclePolicy::AssumeEqual,
        }
    }
}

impl ComparisonOptions {
    #[must_use]
    pub fn with_collect_all_mismatches(mut self, collect: bool) -> Self {
        self.collect_all_mismatches = collect;
        self
    }

    #[must_use]
    pub fn with_treat_absent_as_undefined(mut self, treat: bool) -> Self {
        self.treat_absent_as_undefined = treat;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    #[must_use]
    pub fn with_cycle_policy(mut self, policy: CyclePolicy) -> Self {
        self.cycle_policy = policy;
        self
    }
}
