//! Command implementations.

use std::fs;
use std::path::Path;

use mockmatch_core::matchers::{containing, containing_deep};
use mockmatch_core::{compare, json, ComparisonOptions, ComparisonResult, Value};

use crate::args::{CompareArgs, ContainmentMode};
use crate::errors::CliError;

/// Verdict of a completed comparison, with its process exit code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Match,
    Mismatch,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Match => 0,
            Outcome::Mismatch => 1,
        }
    }
}

/// Read and convert one JSON document.
pub fn load_document(path: &Path) -> Result<Value, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    json::parse(&text).map_err(|source| CliError::Document {
        path: path.to_path_buf(),
        source,
    })
}

/// Options from the config file (if any), overridden by explicit flags.
pub fn resolve_options(args: &CompareArgs) -> Result<ComparisonOptions, CliError> {
    let mut options = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            serde_json::from_str(&text).map_err(|source| CliError::Config {
                path: path.clone(),
                source,
            })?
        }
        None => ComparisonOptions::default(),
    };

    if args.collect_all {
        options.collect_all_mismatches = true;
    }
    if args.strict_absent {
        options.treat_absent_as_undefined = false;
    }
    if let Some(depth) = args.max_depth {
        options.max_depth = depth;
    }
    if let Some(policy) = args.cycles {
        options.cycle_policy = policy;
    }
    Ok(options)
}

/// Load both documents and compare them.
pub fn run_compare(args: &CompareArgs) -> Result<ComparisonResult, CliError> {
    let options = resolve_options(args)?;
    let actual = load_document(&args.actual)?;
    let expected = match args.mode {
        ContainmentMode::Exact => load_document(&args.expected)?,
        ContainmentMode::Containing => containing(load_document(&args.expected)?),
        ContainmentMode::Deep => containing_deep(load_document(&args.expected)?),
    };
    tracing::debug!(
        actual = %args.actual.display(),
        expected = %args.expected.display(),
        mode = ?args.mode,
        "comparing documents"
    );
    Ok(compare(&actual, &expected, options))
}

/// Render a result for the terminal, or as JSON with `as_json`.
pub fn render(result: &ComparisonResult, as_json: bool) -> Result<String, CliError> {
    if as_json {
        return Ok(serde_json::to_string_pretty(result)?);
    }
    let count = result.mismatches().len();
    if count == 0 {
        return Ok(result.to_string());
    }
    let noun = if count == 1 { "mismatch" } else { "mismatches" };
    Ok(format!("{result}\n\n{count} {noun}"))
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
