use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

const SESSION: &str = include_str!("fixtures/worked_example_session.json");

#[test]
fn forecast_prints_report_and_writes_yaml() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("session.json");
    input.write_str(SESSION).unwrap();
    let output = temp.child("forecast.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.arg("forecast")
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Forecast Report"))
        .stdout(predicate::str::contains("Expected effort: 828.40 h"))
        .stdout(predicate::str::contains("Duration: 11 weeks"))
        .stdout(predicate::str::contains("#3 Data migration"))
        .stdout(predicate::str::contains("Forecast report written to"));

    let yaml = fs::read_to_string(output.path()).unwrap();
    assert!(yaml.contains("total_expected_hours"));
    assert!(yaml.contains("duration_weeks: 11"));
}

#[test]
fn forecast_applies_constants_override() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("session.json");
    input.write_str(SESSION).unwrap();
    let constants = temp.child("constants.yaml");
    constants.write_str("expected_case_position: 0.5\n").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.arg("forecast")
        .arg("-i")
        .arg(input.path())
        .arg("-c")
        .arg(constants.path());

    // Midpoints of the ten items sum to 893.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Expected effort: 893.00 h"));
}

#[test]
fn forecast_fails_for_missing_session() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.arg("forecast")
        .arg("-i")
        .arg(temp.path().join("absent.json"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to forecast session"));
}

#[test]
fn forecast_rejects_newer_session_version() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("session.json");
    input
        .write_str(&SESSION.replacen("\"version\": 1", "\"version\": 2", 1))
        .unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.arg("forecast").arg("-i").arg(input.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported session version 2"));
}

#[test]
fn staffing_reports_short_buffer() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("session.json");
    input.write_str(SESSION).unwrap();
    let output = temp.child("staffing.yaml");

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.arg("staffing")
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(output.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Staffing Report"))
        .stdout(predicate::str::contains("Staffed: 882.00 h, cost 100980.00"))
        .stdout(predicate::str::contains("Coordination overhead: 26.00 h"))
        .stdout(predicate::str::contains("(short)"))
        .stdout(predicate::str::contains("Staffing report written to"));

    let yaml = fs::read_to_string(output.path()).unwrap();
    assert!(yaml.contains("buffer_status"));
}

#[test]
fn forecast_reports_unwritable_output_readably() {
    let temp = assert_fs::TempDir::new().unwrap();
    let input = temp.child("session.json");
    input.write_str(SESSION).unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.arg("forecast")
        .arg("-i")
        .arg(input.path())
        .arg("-o")
        .arg(temp.path().join("missing-dir").join("forecast.yaml"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Failed to write forecast report"))
        .stderr(predicate::str::contains("Os {").not());
}
