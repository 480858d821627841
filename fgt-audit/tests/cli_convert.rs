use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::tempdir;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn path_as_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 path")
}

fn fgt_audit() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("fgt-audit"))
}

#[test]
fn convert_prints_text_tables() {
    fgt_audit()
        .env("NO_COLOR", "1")
        .arg("convert")
        .arg(fixture("fixtures/fortigate-basic.conf"))
        .assert()
        .success()
        .stdout(predicate::str::contains("WebServer | 10.0.0.0"))
        .stdout(predicate::str::contains("SvcGroup | Unknown | N/A"))
        .stdout(predicate::str::contains(
            "10 | Allow-Web | port1 | wan1 | WebServer | Google-Gmail | Internet Service | accept | enable",
        ));
}

#[test]
fn convert_json_matches_scenarios() {
    let output = fgt_audit()
        .arg("convert")
        .arg(fixture("fixtures/fortigate-basic.conf"))
        .arg("--format")
        .arg("json")
        .output()
        .expect("convert output");
    assert!(output.status.success(), "convert should succeed");

    let report: Value = serde_json::from_slice(&output.stdout).expect("json parse");
    assert_eq!(report["address"]["header"], serde_json::json!(["name", "ip"]));
    assert_eq!(report["address"]["rows"][1], serde_json::json!(["WebServer", "10.0.0.0"]));
    assert_eq!(
        report["group"]["rows"][0],
        serde_json::json!(["SvcGroup", "WebServer", "10.0.0.0"])
    );
    assert_eq!(
        report["group"]["rows"][1],
        serde_json::json!(["SvcGroup", "Unknown", "N/A"])
    );
    assert_eq!(report["policy"]["rows"][0][5], "Google-Gmail");
    assert_eq!(report["policy"]["rows"][0][6], "Internet Service");
    assert_eq!(report["policy"]["rows"].as_array().map(Vec::len), Some(4));
}

#[test]
fn convert_writes_csv_directory() {
    let dir = tempdir().expect("tempdir");
    let out = dir.path().join("report");

    fgt_audit()
        .arg("convert")
        .arg(fixture("fixtures/fortigate-basic.conf"))
        .arg("--format")
        .arg("csv")
        .arg("--output")
        .arg(path_as_str(&out))
        .assert()
        .success();

    let address = fs::read_to_string(out.join("address.csv")).expect("address.csv");
    assert!(address.starts_with("name,ip\nnone,0.0.0.0\nWebServer,10.0.0.0\n"));
    let policy = fs::read_to_string(out.join("policy.csv")).expect("policy.csv");
    assert!(policy.contains("20,LAN-to-DB,\"internal,dmz\",port3,all,\"DB-Host,Servers\",\"HTTPS,SSH,MYSQL\",accept,\n"));
    assert!(out.join("group.csv").exists());
}

#[test]
fn convert_csv_without_output_fails() {
    fgt_audit()
        .arg("convert")
        .arg(fixture("fixtures/fortigate-basic.conf"))
        .arg("--format")
        .arg("csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires --output"));
}

#[test]
fn convert_is_deterministic() {
    let dir = tempdir().expect("tempdir");
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");

    for out in [&first, &second] {
        fgt_audit()
            .arg("convert")
            .arg(fixture("fixtures/fortigate-basic.conf"))
            .arg("--format")
            .arg("json")
            .arg("-o")
            .arg(path_as_str(out))
            .assert()
            .success();
    }

    let first = fs::read(&first).expect("read first");
    let second = fs::read(&second).expect("read second");
    assert_eq!(first, second);
}

#[test]
fn convert_summary_reports_counts() {
    fgt_audit()
        .env("NO_COLOR", "1")
        .arg("convert")
        .arg(fixture("fixtures/fortigate-basic.conf"))
        .arg("--summary")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "addresses=4 groups=2 memberships=4 unresolved_members=1 policies=4 internet_service_policies=1",
        ));
}

#[test]
fn convert_uses_custom_labels() {
    let dir = tempdir().expect("tempdir");
    let labels = dir.path().join("labels.toml");
    fs::write(
        &labels,
        r#"
internet_service = "ISDB"
[headers]
address = ["名稱", "IP"]
group = ["群組名稱", "成員", "IP"]
policy = ["ID", "名稱", "來源介面", "目的介面", "來源地址", "目的地址", "服務", "動作", "狀態"]
"#,
    )
    .expect("write labels");

    let output = fgt_audit()
        .arg("convert")
        .arg(fixture("fixtures/fortigate-basic.conf"))
        .arg("--format")
        .arg("json")
        .arg("--labels")
        .arg(path_as_str(&labels))
        .output()
        .expect("convert output");
    assert!(output.status.success(), "convert should succeed");

    let report: Value = serde_json::from_slice(&output.stdout).expect("json parse");
    assert_eq!(report["address"]["header"][0], "名稱");
    assert_eq!(report["policy"]["rows"][0][6], "ISDB");
}

#[test]
fn convert_falls_back_when_labels_are_invalid() {
    let dir = tempdir().expect("tempdir");
    let labels = dir.path().join("labels.toml");
    fs::write(&labels, "internet_service = [broken").expect("write labels");

    fgt_audit()
        .arg("convert")
        .arg(fixture("fixtures/fortigate-basic.conf"))
        .arg("--format")
        .arg("json")
        .arg("--labels")
        .arg(path_as_str(&labels))
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Internet Service\""))
        .stderr(predicate::str::contains("using embedded labels"));
}

#[test]
fn convert_first_match_changes_resolution() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("dup.conf");
    fs::write(
        &input,
        "config firewall address\n\
         edit \"h\"\nset subnet 10.0.0.1 255.255.255.255\nnext\n\
         edit \"h\"\nset subnet 10.0.0.2 255.255.255.255\nnext\n\
         end\n\
         config firewall addrgrp\nedit \"g\"\nset member \"h\"\nnext\nend\n",
    )
    .expect("write input");

    let run = |first_match: bool| {
        let mut cmd = fgt_audit();
        cmd.arg("convert").arg(path_as_str(&input)).arg("--format").arg("json");
        if first_match {
            cmd.arg("--first-match");
        }
        let output = cmd.output().expect("convert output");
        assert!(output.status.success(), "convert should succeed");
        let report: Value = serde_json::from_slice(&output.stdout).expect("json parse");
        report["group"]["rows"][0][2].clone()
    };

    assert_eq!(run(false), "10.0.0.2");
    assert_eq!(run(true), "10.0.0.1");
}

#[test]
fn convert_fails_on_missing_input() {
    let dir = tempdir().expect("tempdir");
    fgt_audit()
        .arg("convert")
        .arg(path_as_str(&dir.path().join("absent.conf")))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn convert_refuses_to_overwrite_input() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("fgt.conf");
    fs::write(&input, "config firewall policy\nedit 1\nnext\nend\n").expect("write input");

    fgt_audit()
        .arg("convert")
        .arg(path_as_str(&input))
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg(path_as_str(&input))
        .assert()
        .failure()
        .stderr(predicate::str::contains("refusing to overwrite source file"));

    let untouched = fs::read_to_string(&input).expect("read input");
    assert!(untouched.starts_with("config firewall policy"));
}

#[test]
fn convert_reports_unwritable_output() {
    let dir = tempdir().expect("tempdir");
    let blocker = dir.path().join("not-a-dir");
    fs::write(&blocker, "file").expect("write blocker");

    fgt_audit()
        .arg("convert")
        .arg(fixture("fixtures/fortigate-basic.conf"))
        .arg("--format")
        .arg("json")
        .arg("--output")
        .arg(path_as_str(&blocker.join("report.json")))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write"));
}
