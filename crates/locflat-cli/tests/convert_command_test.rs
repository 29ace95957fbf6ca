//! Integration tests for the locflat binary
//!
//! Each test runs the binary inside its own temporary working directory so the
//! default `export.geojson` / `locations.json` locations can be exercised.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const SAMPLE: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "type": "Feature",
            "properties": {"name": "Van der Sterr 1024"},
            "geometry": {"type": "Point", "coordinates": [4.37, 52.01]}
        },
        {
            "type": "Feature",
            "properties": {"amenity": "bench"},
            "geometry": {"type": "Point", "coordinates": [4.38, 52.02]}
        }
    ]
}"#;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_locflat"))
        .args(args)
        .current_dir(dir)
        .env_remove("LOCFLAT_INPUT")
        .env_remove("LOCFLAT_OUTPUT")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute locflat")
}

#[test]
fn test_default_paths_without_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("export.geojson"), SAMPLE).unwrap();

    let output = run(dir.path(), &[]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Converted 1 features (1 skipped)"));
    assert!(stdout.contains("Output written to locations.json"));

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("locations.json")).unwrap())
            .unwrap();
    assert_eq!(
        written,
        serde_json::json!([{
            "id": "VAN_DER_STERR_1024",
            "name": "Van der Sterr 1024",
            "building": "Van der Sterr 1024",
            "lat": 52.01,
            "lon": 4.37
        }])
    );
}

#[test]
fn test_json_output_is_valid() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("campus.geojson"), SAMPLE).unwrap();

    let output = run(
        dir.path(),
        &["convert", "--input", "campus.geojson", "--output", "out.json", "--json"],
    );
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout))
            .expect("Output should be valid JSON");
    assert_eq!(parsed["status"], "success");
    assert_eq!(parsed["data"]["converted"], 1);
    assert_eq!(parsed["data"]["skipped"], 1);
    assert_eq!(parsed["data"]["total"], 2);
    assert!(dir.path().join("out.json").exists());
}

#[test]
fn test_missing_features_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("export.geojson"), r#"{"type": "FeatureCollection"}"#).unwrap();

    let output = run(dir.path(), &["convert"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("'features'"));
    assert!(!dir.path().join("locations.json").exists());
}

#[test]
fn test_missing_input_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(dir.path(), &["convert"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Could not open input"));
}

#[test]
fn test_malformed_input_exits_with_one() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("export.geojson"), "not json").unwrap();

    let output = run(dir.path(), &["convert", "--json"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.lines().count(), 1, "stderr: {}", stderr);

    let parsed: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
    assert_eq!(parsed["status"], "error");
    assert!(parsed["message"].as_str().unwrap().contains("Failed to parse"));
}

#[test]
fn test_empty_features_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("export.geojson"), r#"{"features": []}"#).unwrap();

    let output = run(dir.path(), &["convert"]);
    assert!(output.status.success());
    assert_eq!(fs::read_to_string(dir.path().join("locations.json")).unwrap(), "[]\n");
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("export.geojson"), SAMPLE).unwrap();

    let output = run(dir.path(), &["convert", "--dry-run", "--json"]);
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    assert_eq!(parsed["data"]["dry_run"], true);
    assert_eq!(parsed["data"]["planned_actions"][0]["action_type"], "create_file");
    assert_eq!(parsed["data"]["preview"][0]["id"], "VAN_DER_STERR_1024");
    assert!(!dir.path().join("locations.json").exists());
}

#[test]
fn test_config_file_and_env_precedence() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("locflat.toml"),
        "input = \"from-file.geojson\"\noutput = \"from-file.json\"\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_locflat"))
        .args(["config", "--json"])
        .current_dir(dir.path())
        .env_remove("LOCFLAT_INPUT")
        .env("LOCFLAT_OUTPUT", "from-env.json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();
    let entries = parsed["data"]["entries"].as_array().unwrap();
    assert_eq!(entries[0]["key"], "input");
    assert_eq!(entries[0]["value"], "from-file.geojson");
    assert_eq!(entries[0]["source"], "File");
    assert_eq!(entries[1]["key"], "output");
    assert_eq!(entries[1]["value"], "from-env.json");
    assert_eq!(entries[1]["source"], "Environment");
}

#[test]
fn test_explicit_missing_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    let output = run(dir.path(), &["--config", "nope.toml", "config"]);
    assert_eq!(output.status.code(), Some(1));
}
