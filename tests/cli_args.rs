//! Integration tests for the ghmeta binary
//!
//! Runs the compiled CLI against a mock GitHub API.

use std::process::Command;

use httpmock::prelude::*;
use tempfile::TempDir;

/// Helper to run the CLI with given args and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_ghmeta"))
        .args(args)
        .env_remove("GHMETA_CACHE_DIR")
        .env_remove("GHMETA_API_URL")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute ghmeta")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("stars"), "Help should list the stars command");
    assert!(stdout.contains("version"), "Help should list the version command");
}

#[test]
fn test_invalid_repo_is_usage_error() {
    let output = run_cli(&["stars", "no-slash-here"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("owner/repo"), "stderr was: {}", stderr);
}

#[test]
fn test_stars_prints_badge() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/org/repo");
        then.status(200)
            .body(r#"{"full_name": "org/repo", "stargazers_count": 4200}"#);
    });

    let output = run_cli(&[
        "stars",
        "org/repo",
        "--no-cache",
        "--api-url",
        &server.base_url(),
    ]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "4,200 GitHub stars\n");
}

#[test]
fn test_version_uses_cache_on_second_run() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/repos/org/repo/releases/latest");
        then.status(200).body(r#"{"tag_name": "v26.02.2"}"#);
    });
    let cache = TempDir::new().unwrap();
    let cache_dir = cache.path().to_string_lossy().to_string();
    let base_url = server.base_url();
    let args = [
        "version",
        "org/repo",
        "--cache-dir",
        cache_dir.as_str(),
        "--api-url",
        base_url.as_str(),
    ];

    let first = run_cli(&args);
    let second = run_cli(&args);

    assert_eq!(String::from_utf8_lossy(&first.stdout), "26.02.2\n");
    assert_eq!(String::from_utf8_lossy(&second.stdout), "26.02.2\n");
    mock.assert_calls(1);
}

#[test]
fn test_unreachable_api_prints_nothing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/repos/org/repo");
        then.status(500);
    });

    let output = run_cli(&[
        "stars",
        "org/repo",
        "--no-cache",
        "--api-url",
        &server.base_url(),
    ]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_stale_fallback_logs_only_at_debug() {
    let server = MockServer::start();
    let mut ok = server.mock(|when, then| {
        when.method(GET).path("/repos/org/repo");
        then.status(200).body(r#"{"stargazers_count": 4200}"#);
    });
    let cache = TempDir::new().unwrap();
    let cache_dir = cache.path().to_string_lossy().to_string();
    let base_url = server.base_url();
    // ttl 0 so every later run refetches and falls back
    let args = [
        "--ttl",
        "0",
        "--cache-dir",
        cache_dir.as_str(),
        "--api-url",
        base_url.as_str(),
        "stars",
        "org/repo",
    ];

    assert_eq!(String::from_utf8_lossy(&run_cli(&args).stdout), "4,200 GitHub stars\n");

    ok.delete();
    server.mock(|when, then| {
        when.method(GET).path("/repos/org/repo");
        then.status(500);
    });

    let quiet = Command::new(env!("CARGO_BIN_EXE_ghmeta"))
        .args(args)
        .env("RUST_LOG", "ghmeta=info")
        .output()
        .expect("Failed to execute ghmeta");
    assert_eq!(String::from_utf8_lossy(&quiet.stdout), "4,200 GitHub stars\n");
    let stderr = String::from_utf8_lossy(&quiet.stderr);
    assert!(!stderr.contains("last known value"), "stderr was: {}", stderr);

    let mut debug_args = vec!["--debug"];
    debug_args.extend_from_slice(&args);
    let verbose = run_cli(&debug_args);
    assert_eq!(String::from_utf8_lossy(&verbose.stdout), "4,200 GitHub stars\n");
    let stderr = String::from_utf8_lossy(&verbose.stderr);
    assert!(stderr.contains("last known value"), "stderr was: {}", stderr);
    assert!(stderr.contains("org/repo"), "stderr was: {}", stderr);
}
