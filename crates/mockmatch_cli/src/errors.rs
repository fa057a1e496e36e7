//! CLI error types.

use std::io;
use std::path::PathBuf;

use mockmatch_core::JsonError;
use thiserror::Error;

/// Anything that stops a command before it can report a verdict.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("unknown option `{0}`")]
    UnknownOption(String),

    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),

    #[error("invalid value `{value}` for {option}")]
    InvalidValue { option: &'static str, value: String },

    #[error("`--containing` and `--deep` are mutually exclusive")]
    ConflictingModes,

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: JsonError,
    },

    #[error("invalid options in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot render result: {0}")]
    Render(#[from] serde_json::Error),
}
