//! Mockmatch CLI
//!
//! Compare two JSON documents with the mockmatch engine.

use mockmatch_cli::{init_tracing, parse_compare_args, render, run_compare, Outcome};

/// Exit code for usage, I/O and document errors.
const ERROR_EXIT_CODE: i32 = 2;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(ERROR_EXIT_CODE);
    }

    let command = &args[1];

    match command.as_str() {
        "compare" => {
            let parsed = match parse_compare_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!();
                    print_compare_usage();
                    std::process::exit(ERROR_EXIT_CODE);
                }
            };

            let result = match run_compare(&parsed) {
                Ok(result) => result,
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(ERROR_EXIT_CODE);
                }
            };

            match render(&result, parsed.json) {
                Ok(report) => println!("{report}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(ERROR_EXIT_CODE);
                }
            }

            let outcome = if result.is_success() {
                Outcome::Match
            } else {
                Outcome::Mismatch
            };
            std::process::exit(outcome.exit_code());
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("mockmatch {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(ERROR_EXIT_CODE);
        }
    }
}

fn print_usage() {
    println!("Mockmatch - structural comparison of JSON documents");
    println!();
    println!("Usage: mockmatch <command> [options]");
    println!();
    println!("Commands:");
    println!("  compare <actual.json> <expected.json>   Compare two documents");
    println!("  help                                    Show this message");
    println!("  version                                 Show version information");
    println!();
    print_compare_usage();
}

fn print_compare_usage() {
    println!("Compare options:");
    println!("  --containing        Expected keys/elements must be present; extras allowed");
    println!("  --deep              Like --containing, at every nesting level");
    println!("  --collect-all       Report every mismatch, not just the first");
    println!("  --strict-absent     A key holding undefined differs from a missing key");
    println!("  --max-depth=<n>     Recursion limit (default: 50)");
    println!("  --cycles=<policy>   assume-equal (default) or report");
    println!("  --config=<file>     Load comparison options from a JSON file");
    println!("  --json              Print the result as JSON");
    println!();
    println!("Exit status: 0 when the documents match, 1 when they differ, 2 on error.");
    println!();
    println!("Set RUST_LOG=mockmatch_core=debug to trace comparison decisions.");
}
