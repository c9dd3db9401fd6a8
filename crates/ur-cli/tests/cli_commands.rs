//! Integration tests for the `ur` CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const AT: &str = "2024-03-09T12:00:00+09:00";

fn uranai() -> Command {
    Command::cargo_bin("uranai").unwrap()
}

fn read_json(args: &[&str]) -> serde_json::Value {
    let out = uranai()
        .arg("read")
        .args(args)
        .args(["--at", AT, "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    serde_json::from_slice(&out.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// list / spreads / card
// ---------------------------------------------------------------------------

#[test]
fn list_shows_every_system() {
    uranai()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("tarot"))
        .stdout(predicate::str::contains("易経"))
        .stdout(predicate::str::contains("12 systems"));
}

#[test]
fn spreads_table() {
    uranai()
        .arg("spreads")
        .assert()
        .success()
        .stdout(predicate::str::contains("celtic-cross"))
        .stdout(predicate::str::contains("ケルト十字"));
}

#[test]
fn spreads_json_has_five_entries() {
    let out = uranai().args(["spreads", "--format", "json"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let spreads = json.as_array().unwrap();
    assert_eq!(spreads.len(), 5);
    let counts: Vec<u64> = spreads.iter().map(|s| s["cardCount"].as_u64().unwrap()).collect();
    assert_eq!(counts, [1, 3, 10, 7, 5]);
}

#[test]
fn card_preview() {
    uranai()
        .args(["card", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("愚者"));
}

#[test]
fn card_out_of_range() {
    uranai()
        .args(["card", "999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
    uranai()
        .args(["card", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

// ---------------------------------------------------------------------------
// read
// ---------------------------------------------------------------------------

#[test]
fn read_tarot_text() {
    uranai()
        .args(["read", "tarot", "--name", "山田花子", "--birth-date", "1990-05-15", "--at", AT])
        .assert()
        .success()
        .stdout(predicate::str::contains("タロット"))
        .stdout(predicate::str::contains("スリーカード"))
        .stdout(predicate::str::contains("seed:"));
}

#[test]
fn read_is_reproducible() {
    let args = ["tarot", "--name", "山田花子", "--birth-date", "1990-05-15"];
    assert_eq!(read_json(&args), read_json(&args));
}

#[test]
fn read_with_explicit_seed() {
    let json = read_json(&["runes", "--seed", "42"]);
    assert_eq!(json["kind"], "runes");
    assert_eq!(json["reading"]["seed"], 42);
}

#[test]
fn read_with_spread_and_cards() {
    let json = read_json(&["tarot", "--spread", "celtic-cross", "--cards", "0,1,2"]);
    let positions = json["reading"]["positions"].as_array().unwrap();
    assert_eq!(positions.len(), 10);
    assert_eq!(positions[0]["card"]["id"], 0);
    assert_eq!(positions[2]["card"]["id"], 2);
}

#[test]
fn read_every_kind() {
    for kind in [
        "tarot", "iching", "runes", "kabbalah", "astrology", "chakra", "fengshui", "aura-soma",
        "akashic", "mayan", "celtic", "numerology",
    ] {
        let json = read_json(&[kind, "--name", "x"]);
        assert_eq!(json["kind"], kind);
        assert!(json["reading"]["seed"].is_u64(), "{kind}");
    }
}

#[test]
fn unknown_kind_suggests() {
    uranai()
        .args(["read", "tarto"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean"))
        .stderr(predicate::str::contains("tarot"));
}

#[test]
fn unknown_spread_fails() {
    uranai()
        .args(["read", "tarot", "--spread", "pyramid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown spread"));
}

#[test]
fn unknown_format_fails() {
    uranai()
        .args(["read", "tarot", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

#[test]
fn config_file_and_flag_override() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("uranai.toml");
    fs::write(&path, "seed-override = 7\ndetail = \"brief\"\n").unwrap();
    let path = path.to_str().unwrap();

    let json = read_json(&["iching", "--config", path]);
    assert_eq!(json["reading"]["seed"], 7);

    let json = read_json(&["iching", "--config", path, "--seed", "9"]);
    assert_eq!(json["reading"]["seed"], 9);
}

#[test]
fn invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "seed-override = \"many\"\n").unwrap();
    uranai()
        .args(["read", "tarot", "--config", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn environment_file_and_three_layers() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("env.json");
    fs::write(&path, r#"{"lunar": {"phase": 0.5}}"#).unwrap();

    let json = read_json(&[
        "tarot",
        "--name",
        "花子",
        "--env",
        path.to_str().unwrap(),
        "--three-layer",
    ]);
    let layers = &json["interpretation"];
    assert!(layers["modern"].as_str().unwrap().contains("満月"));
    assert!(layers["practical"].as_str().unwrap().starts_with("花子さんへ"));
    assert_eq!(layers["meta"]["environmentalConfidence"], 0.6);
    assert_eq!(layers["meta"]["interpretationConfidence"], 1.0);
    assert_eq!(layers["meta"]["divinationKind"], "tarot");
    assert_eq!(json["reading"]["kind"], "tarot");
}

#[test]
fn three_layer_text_sections() {
    uranai()
        .args(["read", "celtic", "--three-layer", "--tone", "direct", "--at", AT])
        .assert()
        .success()
        .stdout(predicate::str::contains("古典"))
        .stdout(predicate::str::contains("現代"))
        .stdout(predicate::str::contains("実践"));
}

#[test]
fn bad_environment_json_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("env.json");
    fs::write(&path, "{ not json").unwrap();
    uranai()
        .args(["read", "tarot", "--env", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid environment data"));
}

#[test]
fn env_and_synth_env_conflict() {
    uranai()
        .args(["read", "tarot", "--env", "x.json", "--synth-env"])
        .assert()
        .failure();
}

#[test]
fn synthesized_environment_is_used() {
    let json = read_json(&["chakra", "--synth-env", "--three-layer"]);
    assert_eq!(json["interpretation"]["meta"]["environmentalConfidence"], 0.7);
}
