use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

#[test]
fn sections_lists_line_counts() {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fgt-audit"));
    cmd.arg("sections")
        .arg(fixture("fixtures/fortigate-basic.conf"))
        .assert()
        .success()
        .stdout(predicate::str::contains("section=\"config firewall address\" lines=18"))
        .stdout(predicate::str::contains("section=\"config firewall addrgrp\" lines=9"));
}

#[test]
fn sections_json_reflects_nested_mode() {
    let run = |nested: bool| {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fgt-audit"));
        cmd.arg("sections")
            .arg(fixture("fixtures/fortigate-nested.conf"))
            .arg("--format")
            .arg("json");
        if nested {
            cmd.arg("--nested-blocks");
        }
        let output = cmd.output().expect("sections output");
        assert!(output.status.success(), "sections should succeed");
        let counts: Value = serde_json::from_slice(&output.stdout).expect("json parse");
        counts["config firewall policy"].as_u64().expect("policy count")
    };

    assert_eq!(run(false), 10);
    assert_eq!(run(true), 14);
}
