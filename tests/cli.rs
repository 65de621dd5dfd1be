//! End-to-end tests for the `ua-compat` binary.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn ua_compat() -> Command {
    cargo_bin_cmd!("ua-compat")
}

fn log_line(ua: &str) -> String {
    format!(
        r#"192.0.2.10 - - [19/Oct/2020:10:00:00 +0000] "GET /app.js HTTP/1.1" 200 1043 "https://example.com/" "{}""#,
        ua
    )
}

const CHROME_90: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.212 Safari/537.36";
const CHROME_85: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/85.0.4183.121 Safari/537.36";
const IOS_WEBVIEW: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 14_2 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Mobile/15E148";
const GOOGLEBOT: &str = "Mozilla/5.0 (compatible; Googlebot/2.1; +http://www.google.com/bot.html)";

#[test]
fn help_exits_0_with_description() {
    ua_compat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("equivalent browser engines"));
}

#[test]
fn parse_writes_csv_rows() {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("access.log");
    let lines = [
        log_line(CHROME_90),
        log_line(IOS_WEBVIEW),
        log_line(GOOGLEBOT),
        log_line("-"),
        log_line("(no product)"),
        "this is not a log line".to_owned(),
    ];
    fs::write(&log, lines.join("\n")).unwrap();

    let output = ua_compat()
        .arg("parse")
        .arg("--input")
        .arg(&log)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Failed to parse user agent: (no product)",
        ))
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let rows: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        rows,
        vec![
            format!("Chrome,90,Chrome,90,\"{}\"", CHROME_90),
            format!("Mobile,15E148,Safari,14,\"{}\"", IOS_WEBVIEW),
        ]
    );
}

#[test]
fn parse_reads_stdin() {
    ua_compat()
        .arg("parse")
        .write_stdin(log_line("curl/7.68.0"))
        .assert()
        .success()
        .stdout("curl,7,,,curl/7.68.0\n");
}

#[test]
fn parse_applies_configured_aliases() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("ua-compat.yml");
    fs::write(&config, "aliases:\n  curl: cURL\nthreads: 2\n").unwrap();

    ua_compat()
        .arg("parse")
        .arg("--config")
        .arg(&config)
        .write_stdin(log_line("curl/7.68.0"))
        .assert()
        .success()
        .stdout("cURL,7,,,curl/7.68.0\n");
}

#[test]
fn parse_rejects_bad_config() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("ua-compat.yml");
    fs::write(&config, "unknown_key: 1\n").unwrap();

    ua_compat()
        .arg("parse")
        .arg("--config")
        .arg(&config)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load config"));
}

#[test]
fn analyze_reports_match_percentage() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("rows.csv");
    let mut rows = Vec::new();
    for _ in 0..8 {
        rows.push(format!("Chrome,90,Chrome,90,\"{}\"", CHROME_90));
    }
    for _ in 0..2 {
        rows.push(format!("Chrome,85,Chrome,85,\"{}\"", CHROME_85));
    }
    // Skipped: no engine.
    rows.push("curl,7,,,curl/7.68.0".to_owned());
    fs::write(&csv, rows.join("\n")).unwrap();

    ua_compat()
        .arg("analyze")
        .arg(&csv)
        .arg("chrome>=90,firefox>=88")
        .assert()
        .success()
        .stdout(predicate::str::contains("11 rows, 10 valid (90.9%), 1 skipped"))
        .stdout(predicate::str::contains("80.00% of rows match query"));
}

#[test]
fn analyze_empty_csv() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("empty.csv");
    fs::write(&csv, "").unwrap();

    ua_compat()
        .arg("analyze")
        .arg(&csv)
        .arg("chrome>=90")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CSV file is empty"));
}

#[test]
fn analyze_rejects_bad_query() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("rows.csv");
    fs::write(&csv, format!("Chrome,90,Chrome,90,\"{}\"\n", CHROME_90)).unwrap();

    ua_compat()
        .arg("analyze")
        .arg(&csv)
        .arg("chrome>=90,safari~14")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unable to parse query \"safari~14\""));
}
