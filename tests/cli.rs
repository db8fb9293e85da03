use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn help_prints_usage_and_succeeds() {
    let mut cmd = cargo_bin_cmd!("coffee-timer");
    cmd.arg("--help")
        .assert()
        .success()
        .stderr(predicate::str::contains("DURATION formats"))
        .stderr(predicate::str::contains("--once"));
}

#[test]
fn missing_duration_fails_with_usage() {
    let mut cmd = cargo_bin_cmd!("coffee-timer");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unknown_option_fails_with_usage() {
    let mut cmd = cargo_bin_cmd!("coffee-timer");
    cmd.args(["--loud", "5m"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--loud"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn message_flag_requires_a_value() {
    let mut cmd = cargo_bin_cmd!("coffee-timer");
    cmd.args(["5m", "--message"]).assert().code(1);
}

#[test]
fn message_starting_with_a_dash_is_accepted() {
    let mut cmd = cargo_bin_cmd!("coffee-timer");
    cmd.args(["--once", "-m", "-- break --", "1s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-- break --"));
}

#[test]
fn repeated_flags_are_accepted() {
    let mut cmd = cargo_bin_cmd!("coffee-timer");
    cmd.args(["-o", "-o", "-m", "alpha", "-m", "omega", "1s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("omega").and(predicate::str::contains("alpha").not()));
}

#[test]
fn invalid_duration_names_the_input() {
    for input in ["abc", "0s", "99:99"] {
        let mut cmd = cargo_bin_cmd!("coffee-timer");
        cmd.arg(input)
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(format!(
                "invalid duration '{input}'"
            )));
    }
}

#[test]
fn once_runs_single_cycle_and_exits() {
    let mut cmd = cargo_bin_cmd!("coffee-timer");
    cmd.args(["--once", "-m", "Refill!", "1s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Starting coffee timer: 1s (1 seconds)").count(1))
        .stdout(predicate::str::contains("00:01 remaining"))
        .stdout(predicate::str::contains("Refill!").count(1))
        .stdout(predicate::str::contains("\x07\x07\x07"))
        .stdout(predicate::str::contains("Cancelled").not());
}

#[cfg(unix)]
#[test]
fn interrupt_cancels_without_alert() {
    use std::process::{Command, Stdio};
    use std::thread;
    use std::time::Duration;

    let child = Command::new(env!("CARGO_BIN_EXE_coffee-timer"))
        .arg("10m")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn coffee-timer");

    thread::sleep(Duration::from_millis(500));
    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("run kill");
    assert!(status.success());

    let output = child.wait_with_output().expect("wait for coffee-timer");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "exit status: {:?}", output.status);
    assert!(stdout.contains("Starting coffee timer: 10m (600 seconds)"));
    assert!(stdout.contains("Cancelled. Bye!"));
    assert!(!stdout.contains("Time for coffee!"));
    assert!(!stdout.contains('\x07'));
}
