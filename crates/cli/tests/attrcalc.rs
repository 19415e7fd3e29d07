use std::fs;
use std::process::Command;

fn attrcalc() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_attrcalc"));
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn writes_report_and_log_and_exits_successfully() {
    let dir = tempfile::tempdir().expect("temp dir");
    let report = dir.path().join("report.csv");
    let log = dir.path().join("run.log");

    let output = attrcalc()
        .current_dir(dir.path())
        .arg("--quiet")
        .arg("--report")
        .arg(&report)
        .arg("--log-file")
        .arg(&log)
        .output()
        .expect("run attrcalc");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("scenarios: 5 passed, 1 failed, 1 errored"));
    assert!(stdout.contains("consistency stacking: expected 36.00, actual 36.00 (Pass)"));

    let report = fs::read_to_string(&report).expect("report");
    assert_eq!(report.lines().count(), 8);
    assert!(report.starts_with("description,input,expected behavior"));

    let log = fs::read_to_string(&log).expect("log");
    assert!(log.contains("scenario raised an error"));
    assert!(log.contains("consistency check finished"));
}

#[test]
fn missing_csv_is_a_message_not_a_failure() {
    let dir = tempfile::tempdir().expect("temp dir");

    let output = attrcalc()
        .current_dir(dir.path())
        .args(["--quiet", "--csv", "no-such-file.csv", "--show"])
        .output()
        .expect("run attrcalc");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("CSV file not found: no-such-file.csv"));
    assert!(dir.path().join("test_report.csv").exists());
    assert!(dir.path().join("test_report.log").exists());
}

#[test]
fn shows_loaded_characters() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join("roster.csv"),
        "name,level,base_attack,base_defense,max_health,attack_bonus\nKnight,10,12,8,120,15\n",
    )
    .expect("write roster");

    let output = attrcalc()
        .current_dir(dir.path())
        .args(["--quiet", "--csv", "roster.csv", "--show"])
        .output()
        .expect("run attrcalc");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("loaded 1 characters from roster.csv (0 rows skipped)"));
    // No growth columns: attack 12 × 1.15
    assert!(stdout.contains("Knight level 10 attack 13.80 defense 8.00 health 120.00"));
}
