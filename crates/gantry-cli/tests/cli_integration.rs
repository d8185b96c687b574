//! Integration tests for the gantry host binary.
//!
//! Each test spawns the real binary in a scratch directory that plays the
//! role of the application tree, with `app/boot.js` as the bootstrap
//! namespace. Assertions go through the process boundary only: exit status,
//! stdout, stderr.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Helper: a clean scratch directory for one test.
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("gantry-cli-{}", name));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("create scratch dir failed");
    dir
}

/// Helper: write the bootstrap namespace source into a scratch directory.
fn write_boot(dir: &Path, source: &str) {
    let path = dir.join("app/boot.js");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, source).expect("write boot.js failed");
}

/// Helper: run the gantry binary with `dir` as its working directory.
fn run_gantry(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_gantry"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("failed to spawn gantry")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ────────────────────────────────────────────────────────────────────────────
// Success paths
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_successful_boot_is_silent() {
    let dir = scratch_dir("silent");
    write_boot(&dir, "function bootstrap(args) {}\n");

    let output = run_gantry(&dir, &[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "", "host printed on its own");
    assert_eq!(stderr(&output), "", "host warned on its own");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_args_reach_the_entry_function_verbatim() {
    let dir = scratch_dir("args");
    write_boot(
        &dir,
        "function bootstrap(args) { print(JSON.stringify(args)); }\n",
    );

    let output = run_gantry(&dir, &["--config", "prod.yaml"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "[\"--config\",\"prod.yaml\"]\n");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_help_flag_is_forwarded_not_intercepted() {
    let dir = scratch_dir("help");
    write_boot(
        &dir,
        "function bootstrap(args) { print(JSON.stringify(args)); }\n",
    );

    let output = run_gantry(&dir, &["--help"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "[\"--help\"]\n", "host ate a flag");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_empty_and_spaced_args_survive_the_boundary() {
    let dir = scratch_dir("odd-args");
    write_boot(
        &dir,
        "function bootstrap(args) { print(JSON.stringify(args)); }\n",
    );

    let output = run_gantry(&dir, &["", "a b", "-"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "[\"\",\"a b\",\"-\"]\n");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_no_args_invokes_with_empty_sequence() {
    let dir = scratch_dir("no-args");
    write_boot(
        &dir,
        "function bootstrap(args) { print('count=' + args.length); }\n",
    );

    let output = run_gantry(&dir, &[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "count=0\n");

    let _ = fs::remove_dir_all(&dir);
}

// ────────────────────────────────────────────────────────────────────────────
// Failure paths
// ────────────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_namespace_fails_loud_and_clean() {
    let dir = scratch_dir("no-namespace");
    // No app/boot.js at all.

    let output = run_gantry(&dir, &["anything"]);

    assert!(!output.status.success(), "boot succeeded with nothing to load");
    assert_eq!(stdout(&output), "", "failure leaked onto stdout");
    let diag = stderr(&output);
    assert!(diag.contains("app.boot"), "diagnostic does not name the namespace: {}", diag);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_missing_entry_symbol_fails_loud() {
    let dir = scratch_dir("no-symbol");
    write_boot(&dir, "function somethingElse(args) {}\n");

    let output = run_gantry(&dir, &[]);

    assert!(!output.status.success());
    let diag = stderr(&output);
    assert!(
        diag.contains("'bootstrap' not found"),
        "diagnostic does not name the symbol: {}",
        diag
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_broken_namespace_source_fails_loud() {
    let dir = scratch_dir("broken-source");
    write_boot(&dir, "function bootstrap( {\n");

    let output = run_gantry(&dir, &[]);

    assert!(!output.status.success());
    let diag = stderr(&output);
    assert!(
        diag.contains("cannot load namespace 'app.boot'"),
        "diagnostic does not name the load step: {}",
        diag
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_entry_failure_propagates_to_stderr_and_exit_code() {
    let dir = scratch_dir("entry-throw");
    write_boot(
        &dir,
        "function bootstrap(args) { throw new Error('refused: ' + args[0]); }\n",
    );

    let output = run_gantry(&dir, &["bad-flag"]);

    assert_eq!(output.status.code(), Some(1));
    let diag = stderr(&output);
    assert!(
        diag.contains("refused: bad-flag"),
        "application's own message lost: {}",
        diag
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_output_before_the_failure_is_kept() {
    let dir = scratch_dir("partial-output");
    write_boot(
        &dir,
        "function bootstrap(args) { print('starting'); throw new Error('halted'); }\n",
    );

    let output = run_gantry(&dir, &[]);

    assert!(!output.status.success());
    assert_eq!(stdout(&output), "starting\n", "pre-failure output lost");
    assert!(stderr(&output).contains("halted"));

    let _ = fs::remove_dir_all(&dir);
}
