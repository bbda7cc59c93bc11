use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const ENABLED_WITHOUT_INSTALL: &str = r#"
systemd:
  units:
    - name: a.service
      enable: true
      contents: "[Service]\nExecStart=/bin/true"
"#;

const BROKEN_UNIT: &str = r#"
systemd:
  units:
    - name: broken.service
      contents: "[Service\nExecStart=/bin/true"
"#;

fn unitforge(workdir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("unitforge"));
    cmd.current_dir(workdir.path())
        .env_remove("UNITFORGE_LOG")
        .env_remove("UNITFORGE_LOG_CONSOLE");
    cmd
}

#[test]
fn transpile_writes_json_to_stdout_and_warnings_to_stderr() {
    let dir = TempDir::new().expect("temp dir");
    unitforge(&dir)
        .arg("transpile")
        .write_stdin(ENABLED_WITHOUT_INSTALL)
        .assert()
        .success()
        .stdout(
            "{\"ignition\":{\"version\":\"2.1.0\"},\"systemd\":{\"units\":[{\"name\":\"a.service\",\"enable\":true,\"contents\":\"[Service]\\nExecStart=/bin/true\"}]}}\n",
        )
        .stderr(predicate::str::contains(
            "warning: systemd unit \"a.service\" has no [Install] section",
        ));
}

#[test]
fn strict_mode_fails_on_warnings_without_output() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("machine.json");
    unitforge(&dir)
        .args(["transpile", "--strict", "--out-file"])
        .arg(&out)
        .write_stdin(ENABLED_WITHOUT_INSTALL)
        .assert()
        .failure();
    assert!(!out.exists());
}

#[test]
fn parse_errors_fail_the_run() {
    let dir = TempDir::new().expect("temp dir");
    let input = dir.path().join("config.yaml");
    fs::write(&input, BROKEN_UNIT).expect("write config");
    unitforge(&dir)
        .args(["transpile", "--in-file"])
        .arg(&input)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "error: systemd unit \"broken.service\" could not be parsed",
        ));
}

#[test]
fn out_file_receives_pretty_json() {
    let dir = TempDir::new().expect("temp dir");
    let out = dir.path().join("machine.json");
    unitforge(&dir)
        .args(["transpile", "--pretty", "--platform", "ec2", "--out-file"])
        .arg(&out)
        .write_stdin("systemd:\n  units:\n    - name: b.service\n      mask: true\n")
        .assert()
        .success();
    let written = fs::read_to_string(&out).expect("read output");
    assert!(written.starts_with("{\n  \"ignition\""));
    assert!(written.contains("\"mask\": true"));
}

#[test]
fn check_prints_json_report() {
    let dir = TempDir::new().expect("temp dir");
    unitforge(&dir)
        .args(["check", "--format", "json"])
        .write_stdin(ENABLED_WITHOUT_INSTALL)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"warning\""))
        .stdout(predicate::str::contains(
            "\"location\": \"systemd.units.0\"",
        ));
}

#[test]
fn malformed_yaml_is_a_hard_error() {
    let dir = TempDir::new().expect("temp dir");
    unitforge(&dir)
        .arg("check")
        .write_stdin("systemd: [unclosed\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to decode config"));
}

#[test]
fn unknown_platform_is_rejected_by_clap() {
    let dir = TempDir::new().expect("temp dir");
    unitforge(&dir)
        .args(["transpile", "--platform", "mainframe"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'mainframe'"));
}
