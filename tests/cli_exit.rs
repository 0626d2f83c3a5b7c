// tests/cli_exit.rs - Exit code tests
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_scopecheck"))
        .args(args)
        .current_dir(dir.path())
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to execute scopecheck")
}

fn many_files(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("src/f{i}.rs")).collect()
}

#[test]
fn test_exit_0_approved() {
    let d = tempfile::tempdir().unwrap();
    let out = run(&d, &["src/app.css", "src/theme.css", "--", "Fix button styling"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("LOCAL"));
    assert!(stdout.contains("No warnings detected"));
}

#[test]
fn test_exit_0_extensive() {
    let d = tempfile::tempdir().unwrap();
    let files = many_files(10);
    let mut args: Vec<&str> = files.iter().map(String::as_str).collect();
    args.extend(["--", "Refactor"]);
    let out = run(&d, &args);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("EXTENSIVE"));
}

#[test]
fn test_exit_1_violation() {
    let d = tempfile::tempdir().unwrap();
    let files = many_files(11);
    let mut args: Vec<&str> = files.iter().map(String::as_str).collect();
    args.extend(["--", "Fix", "CSS"]);
    let out = run(&d, &args);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("SCOPE VIOLATION"));
    assert!(stderr.contains("Break this change into smaller, focused tasks"));
}

#[test]
fn test_exit_2_no_description() {
    let d = tempfile::tempdir().unwrap();
    let out = run(&d, &["src/a.css"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_exit_2_blank_description_after_separator() {
    let d = tempfile::tempdir().unwrap();
    let out = run(&d, &["src/a.css", "src/b.css", "--", ""]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("No description provided"));
}

#[test]
fn test_exit_2_bad_config() {
    let d = tempfile::tempdir().unwrap();
    std::fs::write(d.path().join("scopecheck.toml"), "[scope]\nlocal_limit = 9\n").unwrap();
    let out = run(&d, &["src/a.css", "--", "Fix"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn test_config_file_lowers_ceiling() {
    let d = tempfile::tempdir().unwrap();
    std::fs::write(
        d.path().join("scopecheck.toml"),
        "[scope]\nlocal_limit = 1\nmoderate_limit = 2\nscope_ceiling = 2\n",
    )
    .unwrap();
    let out = run(&d, &["a.rs", "b.rs", "c.rs", "--", "Refactor"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_json_output() {
    let d = tempfile::tempdir().unwrap();
    let out = run(
        &d,
        &["--json", "src/button.css", "Dockerfile", "--", "Fix CSS button alignment"],
    );
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("stdout is not JSON");
    assert_eq!(value["approved"], true);
    assert_eq!(value["tier"], "LOCAL");
    assert_eq!(value["anti_patterns"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_json_violation_output() {
    let d = tempfile::tempdir().unwrap();
    let files = many_files(12);
    let mut args: Vec<&str> = vec!["--json"];
    args.extend(files.iter().map(String::as_str));
    args.extend(["--", "Refactor"]);
    let out = run(&d, &args);
    assert_eq!(out.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("stdout is not JSON");
    assert_eq!(value["approved"], false);
    assert_eq!(value["error"]["file_count"], 12);
}

#[test]
fn test_print_schema() {
    let d = tempfile::tempdir().unwrap();
    let out = run(&d, &["--print-schema"]);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("stdout is not JSON");
    assert_eq!(value["name"], "analyze_integration_scope");
}
