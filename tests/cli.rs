use assert_cmd::Command;
use predicates::str::contains;
use std::time::Duration;

const BINARY_NAME: &str = "gateway-admin";

#[test]
/// Help command should display usage information.
fn cli_help_displays_usage() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(contains("Usage"))
        .stdout(contains("start"));
}

#[test]
/// The start subcommand should document its flags.
fn start_help_lists_flags() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--help"]);
    cmd.assert()
        .success()
        .stdout(contains("--gateway-url"))
        .stdout(contains("--page-size"))
        .stdout(contains("--headless"));
}

#[test]
/// A gateway URL without an HTTP scheme should be rejected before any
/// terminal or network setup happens.
fn invalid_gateway_url_is_rejected() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--gateway-url", "localhost:4000"]);
    cmd.assert()
        .failure()
        .stdout(contains("Invalid gateway URL"));
}

#[test]
/// Unknown subcommands should fail with a clap error.
fn unknown_subcommand_fails() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.arg("frobnicate");
    cmd.assert()
        .failure()
        .stderr(contains("unrecognized subcommand"));
}

#[test]
#[ignore] // This test requires a live gateway instance.
/// Headless mode should announce the session and start syncing.
fn headless_mode_announces_session() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).unwrap();
    cmd.args(["start", "--headless"]);
    cmd.timeout(Duration::from_secs(5));
    cmd.assert()
        .interrupted()
        .stdout(contains("Starting headless mode"));
}
