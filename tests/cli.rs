use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_easy_decision_bot");

#[test]
fn version_flag_prints_version_and_exits() {
    let output = Command::new(BIN).arg("-version").output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "v0.0.1\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn version_wins_over_other_flags() {
    let output = Command::new(BIN)
        .args(["-verbose", "-token", "not-a-real-token", "--version"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "v0.0.1\n");
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let output = Command::new(BIN).arg("-bogus").output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
