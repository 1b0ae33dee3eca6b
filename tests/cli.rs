use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::PathBuf;

/// Helper to get a temporary home directory
fn temp_home_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// Helper to get config file path in the temp dir
fn config_file_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join(".vietnam-dashboards").join("config.json")
}

const BINARY_NAME: &str = "vietnam-dashboards";

/// Binary command running against an isolated `$HOME`.
fn command(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.env("HOME", home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Command-line arguments"))
        .stdout(contains("render"))
        .stdout(contains("set-default"));
}

#[test]
/// List should show every dashboard with its tabs.
fn list_shows_dashboards_and_tabs() {
    let home = temp_home_dir();
    command(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("trade-vulnerability (default)"))
        .stdout(contains("ifi-exposure"))
        .stdout(contains("Loan Terms"))
        .stdout(contains("peace-impact"));
}

#[test]
/// Rendering a tab prints its blocks and nothing from the other tabs.
fn render_prints_selected_tab() {
    let home = temp_home_dir();
    command(&home)
        .args(["render", "trade-vulnerability", "--tab", "sectors"])
        .assert()
        .success()
        .stdout(contains("Vietnam-US Trade Vulnerability Dashboard"))
        .stdout(contains("Analysis of potential US tariff impacts"))
        .stdout(contains("Sector Vulnerability Analysis"))
        .stdout(contains("Very High"))
        .stdout(contains("$34.2B"))
        .stdout(contains("Jobs Impact by Tariff Scenario").not());
}

#[test]
/// Without --tab the first tab is rendered.
fn render_defaults_to_first_tab() {
    let home = temp_home_dir();
    command(&home)
        .args(["render", "peace-impact"])
        .assert()
        .success()
        .stdout(contains("Economic Indicators: Before vs. After Peace Deal"));
}

#[test]
/// Startup events are echoed before the rendered text.
fn render_echoes_startup_events() {
    let home = temp_home_dir();
    command(&home)
        .args(["render", "trade-war"])
        .assert()
        .success()
        .stdout(contains("No config file found"));
}

#[test]
/// Oversized buffers are clamped instead of allocating the full request.
fn render_clamps_oversized_buffer() {
    let home = temp_home_dir();
    let output = command(&home)
        .args(["render", "trade-war"])
        .args(["--width", "65535", "--height", "65535"])
        .assert()
        .success()
        .stdout(contains("Position in the US-China Trade War"))
        .get_output()
        .stdout
        .clone();
    assert!(String::from_utf8_lossy(&output).lines().count() < 300);
}

#[test]
/// Unknown dashboard names are rejected with the valid names listed.
fn render_rejects_unknown_dashboard() {
    let home = temp_home_dir();
    command(&home)
        .args(["render", "atlantis"])
        .assert()
        .failure()
        .stderr(contains("Unknown dashboard 'atlantis'"))
        .stderr(contains("european-rearmament"));
}

#[test]
/// Unknown tab names are rejected with the dashboard's tabs listed.
fn render_rejects_unknown_tab() {
    let home = temp_home_dir();
    command(&home)
        .args(["render", "trade-war", "--tab", "sectors"])
        .assert()
        .failure()
        .stderr(contains("Valid tabs: overview, trade, risks"));
}

#[test]
/// set-default should persist the choice and list should pick it up.
fn set_default_writes_config() {
    let home = temp_home_dir();
    let config_path = config_file_path(&home);
    assert!(!config_path.exists());

    command(&home)
        .args(["set-default", "ifi-exposure"])
        .assert()
        .success()
        .stdout(contains("Default dashboard set to ifi-exposure"));

    let saved = fs::read_to_string(&config_path).unwrap();
    assert!(saved.contains("\"default_dashboard\": \"ifi-exposure\""));

    command(&home)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("ifi-exposure (default)"));

    command(&home)
        .args(["set-default", "ifi-exposure"])
        .assert()
        .success()
        .stdout(contains("ifi-exposure is already the default dashboard"));
}

#[test]
/// A broken config file is reported but does not stop rendering.
fn invalid_config_falls_back_to_defaults() {
    let home = temp_home_dir();
    let config_path = config_file_path(&home);
    fs::create_dir_all(config_path.parent().unwrap()).unwrap();
    fs::write(&config_path, "{ definitely not json").unwrap();

    command(&home)
        .args(["render", "european-rearmament", "--tab", "investment"])
        .assert()
        .success()
        .stdout(contains("Ignoring config"))
        .stdout(contains("Strategic Recommendations"));
}
