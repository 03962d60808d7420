use std::process::Command;

fn tychos(config_root: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tychos"));
    cmd.arg("--config").arg(config_root).env("RUST_LOG", "warn");
    cmd
}

#[test]
fn convert_epoch() {
    let dir = tempfile::tempdir().unwrap();
    let output = tychos(dir.path())
        .args(["convert", "--date", "2000-06-21", "--time", "12:00:00"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("julian day:  2451717"), "{stdout}");
    assert!(stdout.contains("pos:         0"), "{stdout}");
    assert!(dir.path().join("config.ron").exists());
}

#[test]
fn convert_rejects_reform_gap() {
    let dir = tempfile::tempdir().unwrap();
    let output = tychos(dir.path())
        .args(["convert", "--date", "1582-10-10"])
        .output()
        .unwrap();
    assert!(!output.status.success());
}

#[test]
fn position_reports_missing_body_inline() {
    let dir = tempfile::tempdir().unwrap();
    let output = tychos(dir.path())
        .args(["position", "--date", "2024-03-20", "--body", "Mars", "--body", "Vulcan"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().any(|l| l.starts_with("Mars") && l.contains(" AU")), "{stdout}");
    assert!(stdout.contains("Vulcan        not available"), "{stdout}");
}

#[test]
fn ephemerides_writes_text_export() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let output = tychos(dir.path())
        .args([
            "ephemerides", "--start", "2024-01-01", "--end", "2024-01-25", "--step", "1",
            "--unit", "days", "--body", "Mars", "--body", "Sun",
        ])
        .arg("--out")
        .arg(&out)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let report =
        std::fs::read_to_string(out.join("Ephemerides_2024-01-01_to_2024-01-25.txt")).unwrap();
    let data_rows = report.lines().filter(|l| l.starts_with("2024-01-")).count();
    assert_eq!(data_rows, 50);
}

#[test]
fn ephemerides_over_ceiling_fails_before_running() {
    let dir = tempfile::tempdir().unwrap();
    let output = tychos(dir.path())
        .args([
            "--max-rows", "10", "ephemerides", "--start", "2024-01-01", "--end", "2024-01-25",
            "--body", "Mars",
        ])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("25 steps x 1 bodies = 25 rows exceeds the limit of 10"), "{stderr}");
}

#[test]
fn config_root_that_is_a_file_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("config-file");
    std::fs::write(&file, "").unwrap();
    let output = tychos(&file)
        .args(["convert", "--pos", "0"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("error: platform I/O error"), "{stderr}");
}

#[test]
fn convert_rejects_single_digit_fields() {
    let dir = tempfile::tempdir().unwrap();
    for (date, time) in [("2024-1-5", "00:00:00"), ("2024-01-05", "7:05:09")] {
        let output = tychos(dir.path())
            .args(["convert", "--date", date, "--time", time])
            .output()
            .unwrap();
        assert!(!output.status.success(), "{date} {time}");
    }
}
