//! CLI tests for `orderkey compare`.

use std::process::Command;

use assert_cmd::cargo;

fn orderkey_cmd() -> Command {
    Command::new(cargo::cargo_bin!("orderkey"))
}

fn compare_json(a: &str, b: &str) -> serde_json::Value {
    let output = orderkey_cmd()
        .args(["compare", a, b, "--output", "json"])
        .output()
        .expect("run compare command");
    assert!(
        output.status.success(),
        "stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn identical_codes_report_formatted_code() {
    let json = compare_json("DSX-2-Z-S0-9010-L9005-B-N-01000-VM-ES-B0", "dsx2zs09010l9005bn01000vmesb0");
    assert_eq!(json["identical"], true);
    assert_eq!(
        json["formatted_code"],
        "DSX-2-Z-S0-9010-L9005-B-N-01000-VM-ES-B0"
    );
    assert!(json.get("differences").is_none());
}

#[test]
fn differing_codes_list_german_texts() {
    let json = compare_json(
        "DSX-2-Z-S0-9010-L9005-B-N-01000-VM-ES-B0",
        "DSX-2-Z-S0-9005-L9005-B-N-01000-VM-ES-B0",
    );
    assert_eq!(json["identical"], false);
    assert_eq!(
        json["differences"],
        serde_json::json!(["Position 10: '1' vs '0'", "Position 11: '0' vs '5'"])
    );
    assert_eq!(json["details"][0]["kind"], "position");
    assert_eq!(
        json["formatted_code2"],
        "DSX-2-Z-S0-9005-L9005-B-N-01000-VM-ES-B0"
    );
}

#[test]
fn undecodable_side_is_null() {
    let json = compare_json("EW212", "XYZ999");
    assert_eq!(json["identical"], false);
    assert!(json["formatted_code1"].is_string());
    assert!(json["formatted_code2"].is_null());
    assert_eq!(
        json["differences"][0],
        "Unterschiedliche Produkttypen: EW vs XYZ"
    );
}

#[test]
fn cmp_alias_works() {
    let output = orderkey_cmd()
        .args(["cmp", "ASK", "ASK", "--output", "json"])
        .output()
        .expect("run cmp alias");
    assert!(output.status.success());
}

#[test]
fn pretty_compare_prints_differences() {
    let output = orderkey_cmd()
        .args(["compare", "DSX2Z", "DSX2ZS0", "--output", "pretty"])
        .output()
        .expect("run compare command");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Unterschiedliche Längen: 5 vs 7 Zeichen"),
        "stdout={stdout}"
    );
    assert!(stdout.contains("Position 6: '(fehlt)' vs 'S'"), "stdout={stdout}");
}
