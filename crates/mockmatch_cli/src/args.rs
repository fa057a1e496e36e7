//! Argument parsing for `mockmatch compare`.

use std::path::PathBuf;

use mockmatch_core::CyclePolicy;

use crate::errors::CliError;

/// How the expected document is applied to the actual one.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ContainmentMode {
    /// Same keys, same elements, same sizes.
    #[default]
    Exact,
    /// Wrap the expected document in `containing`.
    Containing,
    /// Wrap the expected document in `containing_deep`.
    Deep,
}

/// Parsed `compare` invocation. Flags left unset defer to the config file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompareArgs {
    pub actual: PathBuf,
    pub expected: PathBuf,
    pub mode: ContainmentMode,
    pub config: Option<PathBuf>,
    pub collect_all: bool,
    pub strict_absent: bool,
    pub max_depth: Option<usize>,
    pub cycles: Option<CyclePolicy>,
    pub json: bool,
}

/// Parse the arguments following `compare`.
///
/// Flags may appear before, between, or after the two paths.
pub fn parse_compare_args(args: &[String]) -> Result<CompareArgs, CliError> {
    let mut parsed = CompareArgs::default();
    let mut paths: Vec<PathBuf> = Vec::with_capacity(2);
    let mut mode = None;

    for arg in args {
        if arg == "--containing" || arg == "--deep" {
            let requested = if arg == "--deep" {
                ContainmentMode::Deep
            } else {
                ContainmentMode::Containing
            };
            if mode.is_some_and(|m| m != requested) {
                return Err(CliError::ConflictingModes);
            }
            mode = Some(requested);
        } else if arg == "--collect-all" {
            parsed.collect_all = true;
        } else if arg == "--strict-absent" {
            parsed.strict_absent = true;
        } else if arg == "--json" {
            parsed.json = true;
        } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
            let depth = depth.parse().map_err(|_| CliError::InvalidValue {
                option: "--max-depth",
                value: depth.to_string(),
            })?;
            parsed.max_depth = Some(depth);
        } else if let Some(policy) = arg.strip_prefix("--cycles=") {
            parsed.cycles = Some(match policy {
                "assume-equal" => CyclePolicy::AssumeEqual,
                "report" => CyclePolicy::Report,
                _ => {
                    return Err(CliError::InvalidValue {
                        option: "--cycles",
                        value: policy.to_string(),
                    })
                }
            });
        } else if let Some(config) = arg.strip_prefix("--config=") {
            parsed.config = Some(PathBuf::from(config));
        } else if arg.starts_with('-') {
            return Err(CliError::UnknownOption(arg.clone()));
        } else if paths.len() < 2 {
            paths.push(PathBuf::from(arg));
        } else {
            return Err(CliError::UnexpectedArgument(arg.clone()));
        }
    }

    let mut paths = paths.into_iter();
    parsed.actual = paths.next().ok_or(CliError::MissingArgument("actual document path"))?;
    parsed.expected = paths
        .next()
        .ok_or(CliError::MissingArgument("expected document path"))?;
    parsed.mode = mode.unwrap_or_default();
    Ok(parsed)
}
