//! CLI tests for `orderkey decode`: JSON contract, stdin input, aliases and
//! policy flags.

use std::io::Write;
use std::process::{Command, Stdio};

use assert_cmd::cargo;

const DSX_FULL: &str = "DSX-2-Z-S0-9010-L9005-B-N-01000-VM-ES-B0";

fn orderkey_cmd() -> Command {
    Command::new(cargo::cargo_bin!("orderkey"))
}

fn run_json(args: &[&str]) -> (std::process::Output, serde_json::Value) {
    let output = orderkey_cmd()
        .args(args)
        .args(["--output", "json"])
        .output()
        .expect("run orderkey");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json = serde_json::from_str(&stdout).expect("valid json");
    (output, json)
}

fn run_with_stdin(args: &[&str], stdin_body: &str) -> std::process::Output {
    let mut child = orderkey_cmd()
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn orderkey command");

    {
        let stdin = child.stdin.as_mut().expect("stdin handle");
        stdin
            .write_all(stdin_body.as_bytes())
            .expect("write stdin body");
    }

    child.wait_with_output().expect("wait for output")
}

#[test]
fn decode_json_has_component_contract() {
    let (output, json) = run_json(&["decode", "DSX2ZS09010L9005BN01000VMESB0"]);
    assert!(output.status.success());
    assert_eq!(json["formatted_code"], DSX_FULL);
    assert_eq!(json["productType"], "DSX - Schlitzdurchlass");
    assert_eq!(json["hasStandardValues"], false);

    let components = json["components"].as_array().expect("components array");
    assert_eq!(components.len(), 12);
    assert_eq!(components[0]["index"], "01");
    assert_eq!(components[0]["name"], "Typ");
    assert_eq!(components[0]["value"], "DSX");
    assert_eq!(components[0]["description"], "Schlitzdurchlass DSX");
    assert_eq!(components[0]["isStandard"], false);
    assert_eq!(components[11]["index"], "12");
    assert_eq!(components[4]["description"], "RAL 9010 (weiß)");
}

#[test]
fn short_code_marks_standard_values() {
    let (output, json) = run_json(&["decode", "DSX-2-Z"]);
    assert!(output.status.success());
    assert_eq!(json["hasStandardValues"], true);
    assert_eq!(
        json["formatted_code"],
        "DSX-2-Z-S0-9005-L9005-B-N-01000-VM-E0-B0"
    );
    let components = json["components"].as_array().unwrap();
    assert_eq!(components[2]["isStandard"], false);
    assert_eq!(components[3]["isStandard"], true);
}

#[test]
fn decode_reads_code_from_stdin() {
    let output = run_with_stdin(&["decode", "-", "--output", "json"], "ew-21-2-s0\n");
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid json from stdin decode");
    assert_eq!(json["productType"], "EW - Eckwinkel");
    assert_eq!(json["components"][1]["value"], "21");
}

#[test]
fn decode_alias_is_available() {
    let output = orderkey_cmd()
        .args(["d", "--help"])
        .output()
        .expect("run decode alias help");
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn malformed_flag_changes_decoded_values() {
    let (_, skip) = run_json(&["decode", "DSXXZS09010"]);
    assert_eq!(skip["components"][1]["value"], "2");
    assert_eq!(skip["components"][1]["isStandard"], true);

    let (_, accept) = run_json(&["decode", "DSXXZS09010", "--malformed", "accept"]);
    assert_eq!(accept["components"][1]["value"], "X");
    assert_eq!(accept["components"][1]["isStandard"], false);

    let ids: Vec<_> = accept["diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["id"].as_str().unwrap().to_string())
        .collect();
    assert!(ids.contains(&"OK2002".to_string()), "ids={ids:?}");
}

#[test]
fn incomplete_reject_fails_short_codes() {
    let (output, json) = run_json(&["decode", "DSX-2-Z", "--incomplete", "reject"]);
    assert!(!output.status.success());
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "incomplete_code");
    assert_eq!(json["code"], "OK1004");
    assert!(
        json["message"]
            .as_str()
            .is_some_and(|m| m.contains("Rahmenprofil")),
        "unexpected message: {}",
        json["message"]
    );
}

#[test]
fn pretty_output_lists_fields() {
    let output = orderkey_cmd()
        .args(["decode", DSX_FULL, "--output", "pretty"])
        .output()
        .expect("run decode");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(DSX_FULL), "stdout={stdout}");
    assert!(stdout.contains("Lamellenstellung"), "stdout={stdout}");
    assert!(stdout.contains("Mit Endstück (Paar)"), "stdout={stdout}");
}

#[test]
fn pretty_output_renders_malformed_warning() {
    let output = orderkey_cmd()
        .args(["decode", "DSX2ZS0ABCD", "--output", "pretty"])
        .output()
        .expect("run decode");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("OK2002"), "stderr={stderr}");
}
