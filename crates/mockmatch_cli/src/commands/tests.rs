use super::*;
use mockmatch_core::{CyclePolicy, MismatchKind};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

/// Scratch directory unique to one test.
fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("mockmatch-cli-{}-{name}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(dir: &Path, file: &str, contents: &str) -> PathBuf {
    let path = dir.join(file);
    fs::write(&path, contents).unwrap();
    path
}

fn compare_args(actual: PathBuf, expected: PathBuf) -> CompareArgs {
    CompareArgs {
        actual,
        expected,
        ..CompareArgs::default()
    }
}

#[test]
fn test_exact_and_containing_modes() {
    let dir = scratch("modes");
    let actual = write(&dir, "actual.json", r#"{"id": "1", "tags": ["a", "b", "c"]}"#);
    let expected = write(&dir, "expected.json", r#"{"tags": ["b"]}"#);

    let mut args = compare_args(actual, expected);
    let result = run_compare(&args).unwrap();
    assert!(!result.is_success());

    args.mode = ContainmentMode::Containing;
    let result = run_compare(&args).unwrap();
    assert_eq!(result.first().unwrap().kind, MismatchKind::LengthMismatch);

    args.mode = ContainmentMode::Deep;
    assert!(run_compare(&args).unwrap().is_success());
}

#[test]
fn test_config_file_and_flag_overrides() {
    let dir = scratch("config");
    let config = write(
        &dir,
        "options.json",
        r#"{"collectAllMismatches": true, "maxDepth": 3, "cyclePolicy": "report"}"#,
    );
    let mut args = compare_args(PathBuf::new(), PathBuf::new());
    args.config = Some(config);

    let options = resolve_options(&args).unwrap();
    assert!(options.collect_all_mismatches);
    assert!(options.treat_absent_as_undefined);
    assert_eq!(options.max_depth, 3);
    assert_eq!(options.cycle_policy, CyclePolicy::Report);

    args.max_depth = Some(9);
    args.strict_absent = true;
    let options = resolve_options(&args).unwrap();
    assert_eq!(options.max_depth, 9);
    assert!(!options.treat_absent_as_undefined);
}

#[test]
fn test_errors_name_the_file() {
    let dir = scratch("errors");
    let broken = write(&dir, "broken.json", "{");
    let fine = write(&dir, "fine.json", "{}");

    let err = run_compare(&compare_args(broken.clone(), fine.clone())).unwrap_err();
    assert!(matches!(err, CliError::Document { .. }));
    assert!(err.to_string().contains("broken.json"));

    let missing = dir.join("missing.json");
    let err = run_compare(&compare_args(missing, fine)).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));

    let mut args = compare_args(broken.clone(), broken.clone());
    args.config = Some(broken);
    assert!(matches!(resolve_options(&args), Err(CliError::Config { .. })));
}

#[test]
fn test_render() {
    assert_eq!(render(&ComparisonResult::success(), false).unwrap(), "values match");

    let dir = scratch("render");
    let actual = write(&dir, "a.json", r#"{"n": 1}"#);
    let expected = write(&dir, "b.json", r#"{"n": 2}"#);
    let result = run_compare(&compare_args(actual, expected)).unwrap();

    assert_eq!(
        render(&result, false).unwrap(),
        "at n: expected 2, received 1\n\n1 mismatch"
    );
    let json: serde_json::Value = serde_json::from_str(&render(&result, true).unwrap()).unwrap();
    assert_eq!(json["success"], serde_json::json!(false));
    assert_eq!(json["mismatches"][0]["kind"], serde_json::json!("value-mismatch"));
}

#[test]
fn test_outcome_exit_codes() {
    assert_eq!(Outcome::Match.exit_code(), 0);
    assert_eq!(Outcome::Mismatch.exit_code(), 1);
}
