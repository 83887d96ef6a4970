//! Integration tests for the `list` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_list_empty() {
    let env = TestEnv::new();
    assert_eq!(env.list(&[]).trim(), "No reservations.");
}

#[test]
fn test_grouped_in_catalog_order() {
    let env = TestEnv::new();
    env.add("C", "08:00", "09:00", "Kato");
    env.add("A", "11:00", "12:00", "Sato");
    env.add("A", "09:00", "10:00", "Ito");

    let output = env.list(&[]);
    let headers: Vec<&str> = output
        .lines()
        .filter(|l| !l.is_empty() && !l.starts_with(' '))
        .collect();
    assert_eq!(headers, ["会議室A", "会議室C"]);

    // Within a room, sorted by start time
    let ito = output.find("Ito").unwrap();
    let sato = output.find("Sato").unwrap();
    assert!(ito < sato);
}

#[test]
fn test_room_filter() {
    let env = TestEnv::new();
    env.add("A", "09:00", "10:00", "Sato");
    env.add("B", "09:00", "10:00", "Ito");

    let output = env.list(&["--room", "B", "--format", "table"]);
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("ID\tROOM"));
    assert!(lines[1].contains("Ito"));
}

#[test]
fn test_json_format() {
    let env = TestEnv::new();
    let id = env.add("A", "09:00", "10:00", "Sato");

    let output = env.list(&["--format", "json"]);
    let json: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], id);
    assert_eq!(json[0]["room"], "A");
    assert_eq!(json[0]["reserverName"], "Sato");
}

#[test]
fn test_default_format_from_config() {
    let env = TestEnv::new();
    env.write_project_config("output_format: csv\n");
    env.add("A", "09:00", "10:00", "Sato");

    let output = env.list(&[]);
    assert!(output.starts_with("会議室,利用開始日時"));
}

#[test]
fn test_unknown_room_filter() {
    let env = TestEnv::new();
    env.command()
        .args(["list", "--room", "Q"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unknown room"));
}
