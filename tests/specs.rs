//! Behavioral specifications for the skillgate CLI.
//!
//! These tests are black-box: they invoke the CLI binary and verify
//! stdout, stderr, and exit codes.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

#[path = "specs/prelude.rs"]
mod prelude;

use prelude::*;
use predicates::str::contains;

// =============================================================================
// COMMAND SPECS
// =============================================================================

/// > skillgate (bare invocation) shows help
#[test]
fn bare_invocation_shows_help() {
    Project::empty()
        .cmd()
        .assert()
        .success()
        .stdout(contains("Usage:"));
}

/// > Exit code 0 when invoked with --version
#[test]
fn version_exits_successfully() {
    skillgate_cmd().arg("--version").assert().success();
}

// =============================================================================
// TEST COMMAND
// =============================================================================

/// > A matching prompt reports the leftmost match and exits 0
#[test]
fn test_reports_match() {
    Project::empty()
        .cmd()
        .args(["test", "How to fix E0382 error"])
        .assert()
        .success()
        .stdout("match: 'E0382' at 11..16\n");
}

/// > A non-matching prompt exits 1
#[test]
fn test_reports_no_match() {
    Project::empty()
        .cmd()
        .args(["test", "what time is the meeting tomorrow"])
        .assert()
        .code(1)
        .stdout("no match\n");
}

/// > JSON output carries matched, span and text
#[test]
fn test_json_output() {
    let output = Project::empty()
        .cmd()
        .args(["test", "-o", "json", "type mismatch how to fix"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "matched": true,
            "span": { "start": 0, "end": 4 },
            "text": "type",
        })
    );
}

/// > Without a prompt argument, the prompt is read from stdin
#[test]
fn test_reads_stdin() {
    Project::empty()
        .cmd()
        .args(["test", "-o", "json"])
        .write_stdin("cargo build error\n")
        .assert()
        .success()
        .stdout(contains(r#""text":"cargo""#));
}

// =============================================================================
// HOOK COMMAND
// =============================================================================

/// > hook reads the host payload and prints the match result
#[test]
fn hook_prints_result_for_payload() {
    Project::empty()
        .cmd()
        .arg("hook")
        .write_stdin(r#"{"session_id":"s1","hook_event_name":"UserPromptSubmit","prompt":"explain this code"}"#)
        .assert()
        .success()
        .stdout(contains(r#""matched":true"#).and(contains(r#""text":"explain""#)));
}

/// > hook lets unrelated prompts pass through with exit 0
#[test]
fn hook_passes_unrelated_prompt() {
    Project::empty()
        .cmd()
        .arg("hook")
        .write_stdin(r#"{"prompt":"what to eat for dinner"}"#)
        .assert()
        .success()
        .stdout(contains(r#""matched":false"#));
}

/// > hook --exit-code exits 1 on no match
#[test]
fn hook_exit_code_flag() {
    Project::empty()
        .cmd()
        .args(["hook", "--exit-code"])
        .write_stdin(r#"{"prompt":"what to eat for dinner"}"#)
        .assert()
        .code(1);
}

/// > A malformed payload is an argument error (exit 2)
#[test]
fn hook_rejects_malformed_payload() {
    Project::empty()
        .cmd()
        .arg("hook")
        .write_stdin("not json")
        .assert()
        .code(2)
        .stderr(contains("invalid hook payload"));
}

// =============================================================================
// CASES COMMAND
// =============================================================================

/// > The shipped case table passes against the built-in rule
#[test]
fn cases_fixture_passes() {
    Project::empty()
        .cmd()
        .args(["cases", "--no-color"])
        .arg(fixture("cases.toml"))
        .assert()
        .success()
        .stdout(contains("Passed: 19/19").and(contains("Failed: 0/19")));
}

/// > Failing cases are listed and the command exits 1
#[test]
fn cases_failures_exit_one() {
    Project::empty()
        .cmd()
        .args(["cases", "--no-color"])
        .arg(fixture("failing-cases.toml"))
        .assert()
        .code(1)
        .stdout(
            contains("FAIL: 'what to eat for dinner' -> no match (should match 'dinner')")
                .and(contains("FAIL: 'explain this code' -> matched 'explain' (should NOT match)"))
                .and(contains("Failed: 2/3")),
        );
}

/// > NO_COLOR disables color even when --color is not given
#[test]
fn cases_respect_no_color() {
    Project::empty()
        .cmd()
        .env("NO_COLOR", "1")
        .arg("cases")
        .arg(fixture("cases.toml"))
        .assert()
        .success()
        .stdout(contains("\x1b[").not());
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// > -C selects a skillgate.toml rule
#[test]
fn explicit_toml_config_replaces_builtin() {
    Project::empty()
        .cmd()
        .arg("-C")
        .arg(fixture("narrow/skillgate.toml"))
        .args(["test", "how to use tokio"])
        .assert()
        .code(1);
}

/// > skillgate.toml is discovered from the working directory
#[test]
fn discovers_toml_config() {
    let project = Project::empty();
    project.file(
        "skillgate.toml",
        "version = 1\n[rule]\npattern = \"dinner\"\n",
    );
    project.file("sub/dir/.keep", "");

    project
        .cmd()
        .current_dir(project.path().join("sub/dir"))
        .args(["test", "what to eat for dinner"])
        .assert()
        .success()
        .stdout(contains("'dinner'"));
}

/// > A hooks file supplies the matcher for the configured event
#[test]
fn hooks_file_config() {
    let project = Project::empty();
    project.file(
        "hooks/hooks.json",
        r#"{"hooks":{"UserPromptSubmit":[{"matcher":"dinner|lunch"}],"Stop":[{"matcher":"bye"}]}}"#,
    );

    project
        .cmd()
        .args(["test", "lunch or dinner"])
        .assert()
        .success()
        .stdout(contains("'lunch'"));

    project
        .cmd()
        .args(["--event", "Stop", "test", "lunch or dinner"])
        .assert()
        .code(1);
}

/// > The shipped hooks file behaves like the built-in rule
#[test]
fn shipped_hooks_file_passes_cases() {
    Project::empty()
        .cmd()
        .arg("-C")
        .arg(repo_root().join("hooks/hooks.json"))
        .args(["cases", "--no-color"])
        .arg(fixture("cases.toml"))
        .assert()
        .success();
}

/// > An invalid pattern is fatal at startup and names the pattern
#[test]
fn invalid_pattern_is_fatal() {
    Project::empty()
        .cmd()
        .arg("-C")
        .arg(fixture("invalid/skillgate.toml"))
        .args(["test", "cargo build error"])
        .assert()
        .code(2)
        .stderr(contains("skillgate: config error").and(contains("E0[0-9")));
}

/// > A missing explicit config is a config error
#[test]
fn missing_config_is_error() {
    Project::empty()
        .cmd()
        .args(["-C", "nope.toml", "show"])
        .assert()
        .code(2)
        .stderr(contains("config file not found"));
}

// =============================================================================
// SHOW COMMAND
// =============================================================================

/// > show lists the resolved rule
#[test]
fn show_lists_alternatives() {
    Project::empty()
        .cmd()
        .arg("show")
        .assert()
        .success()
        .stdout(
            contains("source: built-in rule")
                .and(contains("(regex matcher)"))
                .and(contains("pattern  E0\\d{3}"))
                .and(contains("literal  rust (ignore case)")),
        );
}

/// > show -o json reproduces the shipped hooks file
#[test]
fn show_json_matches_shipped_hooks_file() {
    let output = Project::empty()
        .cmd()
        .args(["show", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let generated: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let shipped: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(repo_root().join("hooks/hooks.json")).unwrap(),
    )
    .unwrap();
    similar_asserts::assert_eq!(generated, shipped);
}
