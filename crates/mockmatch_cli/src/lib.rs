//! Mockmatch CLI library.
//!
//! Argument parsing and command implementations for the `mockmatch` binary,
//! kept in a library so they can be unit tested without spawning a process.

mod args;
mod commands;
mod errors;

use std::sync::Once;

pub use args::{parse_compare_args, CompareArgs, ContainmentMode};
pub use commands::{load_document, render, resolve_options, run_compare, Outcome};
pub use errors::CliError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at startup to enable tracing output.
/// Set `RUST_LOG=mockmatch_core=debug` to see comparison decisions.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
                .with(filter)
                .init();
        }
    });
}
