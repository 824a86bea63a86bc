//! Basic CLI E2E tests.
//!
//! Each test drives the binary against its own state file so tests can run
//! in parallel.

use std::path::PathBuf;
use std::process::Command;

fn state_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("laya-cli-test-{name}-{}.json", std::process::id()))
}

fn run_cli(state: &PathBuf, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_laya-cli"))
        .arg("--state")
        .arg(state)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn cleanup(state: &PathBuf) {
    let _ = std::fs::remove_file(state);
}

#[test]
fn nav_list_shows_every_screen() {
    let state = state_path("nav-list");
    let (stdout, _, code) = run_cli(&state, &["nav", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("01: Splash"));
    assert!(stdout.contains("16: Home Dashboard"));
    assert!(stdout.contains("24: Memory Detail"));
    cleanup(&state);
}

#[test]
fn flow_status_starts_on_splash() {
    let state = state_path("flow-status");
    let (stdout, _, code) = run_cli(&state, &["flow", "status"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("status JSON");
    assert_eq!(json["screen"], "splash");
    assert_eq!(json["role"], "primary");
    cleanup(&state);
}

#[test]
fn nav_jump_renders_the_target() {
    let state = state_path("nav-jump");
    let (stdout, _, code) = run_cli(&state, &["nav", "jump", "paywall"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("view JSON");
    assert_eq!(json["screen_id"], "paywall");
    assert_eq!(json["title"], "Unlock Your Harmony Plan");
    cleanup(&state);
}

#[test]
fn unknown_jump_renders_blank_and_succeeds() {
    let state = state_path("nav-blank");
    let (stdout, _, code) = run_cli(&state, &["nav", "jump", "quiz9"]);
    assert_eq!(code, 0, "blank jump must not be an error");
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("view JSON");
    assert_eq!(json["screen_id"], "");
    cleanup(&state);
}

#[test]
fn state_persists_across_invocations() {
    let state = state_path("persist");
    let _ = run_cli(&state, &["nav", "jump", "identity"]);
    let (stdout, _, code) = run_cli(&state, &["flow", "identity", "partner"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("view JSON");
    assert_eq!(json["screen_id"], "relationship");

    let (stdout, _, _) = run_cli(&state, &["flow", "status"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("status JSON");
    assert_eq!(json["answers"]["slots"]["identity"], "partner");
    cleanup(&state);
}

#[test]
fn invalid_choice_fails_without_moving() {
    let state = state_path("invalid-choice");
    let _ = run_cli(&state, &["nav", "jump", "identity"]);
    let (_, stderr, code) = run_cli(&state, &["flow", "identity", "sibling"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));

    let (stdout, _, _) = run_cli(&state, &["flow", "status"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("status JSON");
    assert_eq!(json["screen"], "identity");
    cleanup(&state);
}

#[test]
fn flow_walk_reports_both_branches() {
    let state = state_path("walk");
    let (stdout, _, code) = run_cli(&state, &["flow", "walk"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("walk JSON");
    assert_eq!(json["steps"], 16);
    assert_eq!(json["role"], "primary");

    let (stdout, _, code) = run_cli(&state, &["flow", "walk", "--share"]);
    assert_eq!(code, 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("walk JSON");
    assert_eq!(json["steps"], 18);
    assert_eq!(json["role"], "partner");
    cleanup(&state);
}

#[test]
fn home_commands_require_the_home_screen() {
    let state = state_path("home-guard");
    let (_, stderr, code) = run_cli(&state, &["home", "mood", "4"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("not on the home screen"));

    let _ = run_cli(&state, &["nav", "jump", "home"]);
    let (stdout, _, code) = run_cli(&state, &["home", "mood", "4"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("mood logged: 4"));
    cleanup(&state);
}

#[test]
fn gift_claim_decrements_once() {
    let state = state_path("gift-claim");
    let _ = run_cli(&state, &["nav", "jump", "home"]);
    let (stdout, _, code) = run_cli(&state, &["gift", "claim", "1"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Coupon claimed!"));

    let (stdout, _, _) = run_cli(&state, &["gift", "claim", "1"]);
    assert!(stdout.contains("Already claimed."));

    let (stdout, _, _) = run_cli(&state, &["gift", "list"]);
    assert!(stdout.contains("9 left [claimed]"));
    cleanup(&state);
}

#[test]
fn daily_answer_gates_on_text() {
    let state = state_path("daily");
    let _ = run_cli(&state, &["nav", "jump", "home"]);
    let (_, _, code) = run_cli(&state, &["home", "share"]);
    assert_ne!(code, 0, "sharing an empty answer must fail");

    let _ = run_cli(&state, &["home", "daily", "He made chai without being asked"]);
    let (stdout, _, code) = run_cli(&state, &["home", "share"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Answer shared!"));
    cleanup(&state);
}

#[test]
fn memory_add_reports_calendar_placement() {
    let state = state_path("memory-add");
    let _ = run_cli(&state, &["nav", "jump", "memories-add-form"]);
    let (stdout, _, code) = run_cli(
        &state,
        &["memory", "add", "Roka Ceremony", "--special", "--annual"],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("Memory saved! Added to calendar!"));
    cleanup(&state);
}
