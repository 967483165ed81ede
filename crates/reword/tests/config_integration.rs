//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` to assert actual config values, not just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    for var in ["REWORD_PROVIDER", "REWORD_OFFLINE", "REWORD_SEED", "REWORD_API_URL"] {
        cmd.env_remove(var);
    }
    cmd
}

/// Run `info --json` from a directory and parse the `config` section.
fn config_json(dir: &Path) -> Value {
    config_json_with(cmd(), dir)
}

fn config_json_with(mut cmd: Command, dir: &Path) -> Value {
    let output = cmd
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: Value = serde_json::from_slice(&output.stdout).expect("invalid JSON output");
    json["config"].clone()
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = config_json(tmp.path());

    assert_eq!(config["log_level"], "info");
    assert_eq!(config["provider"], "datamuse");
    assert_eq!(config["offline"], false);
    assert_eq!(config["max_input_bytes"], 5 * 1024 * 1024);
    assert!(config["config_file"].is_null(), "no config file should be reported");
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".reword.toml"), "provider = \"thesaurus\"\n").unwrap();

    let config = config_json(tmp.path());

    assert_eq!(config["provider"], "thesaurus");
    assert!(config["api_url"].as_str().unwrap().contains("bighugelabs"));
    let reported = config["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".reword.toml"), "should report dotfile: {reported}");
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join("reword.toml"), "seed = 7\n").unwrap();

    let config = config_json(&sub_dir);

    assert_eq!(config["seed"], 7);
    assert!(config["config_file"].as_str().is_some(), "should find parent config");
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".reword.toml"), "offline = false\n").unwrap();
    fs::write(tmp.path().join("reword.toml"), "offline = true\n").unwrap();

    let config = config_json(tmp.path());
    assert_eq!(config["offline"], true, "regular file should override dotfile");
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn parses_yaml_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".reword.yaml"),
        "fetch_phrases: true\nrequest_timeout_secs: 3\n",
    )
    .unwrap();

    let config = config_json(tmp.path());
    assert_eq!(config["fetch_phrases"], true);
    assert_eq!(config["request_timeout_secs"], 3);
}

#[test]
fn parses_json_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".reword.json"),
        r#"{"api_url": "http://localhost:9000/{word}", "api_key": "k"}"#,
    )
    .unwrap();

    let config = config_json(tmp.path());
    assert_eq!(config["api_url"], "http://localhost:9000/{word}");
    assert_eq!(config["api_key_set"], true);
}

#[test]
fn cache_settings_are_reported() {
    let tmp = TempDir::new().unwrap();
    let cache = tmp.path().join("words");
    fs::write(
        tmp.path().join(".reword.toml"),
        format!("cache_dir = {:?}\nno_cache = true\n", cache.to_str().unwrap()),
    )
    .unwrap();

    let config = config_json(tmp.path());
    assert_eq!(config["cache_dir"], cache.to_str().unwrap());
    assert_eq!(config["no_cache"], true);
}

#[test]
fn disabled_input_limit_is_omitted() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".reword.toml"),
        "max_input_bytes = 10\ndisable_input_limit = true\n",
    )
    .unwrap();

    let config = config_json(tmp.path());
    assert!(config["max_input_bytes"].is_null());
}

// =============================================================================
// Config Precedence
// =============================================================================

#[test]
fn closer_config_takes_precedence() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("project");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join(".reword.toml"), r#"log_level = "error""#).unwrap();
    fs::write(sub_dir.join(".reword.toml"), r#"log_level = "debug""#).unwrap();

    let config = config_json(&sub_dir);
    assert_eq!(config["log_level"], "debug", "closer config should win");
}

#[test]
fn later_extension_overrides_earlier_in_same_directory() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".reword.toml"), "seed = 1\n").unwrap();
    fs::write(tmp.path().join(".reword.yaml"), "seed: 2\n").unwrap();

    let config = config_json(tmp.path());
    assert_eq!(config["seed"], 2, "YAML merges after TOML");
}

#[test]
fn explicit_config_overrides_discovered() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".reword.toml"), "provider = \"thesaurus\"\n").unwrap();
    let explicit = tmp.path().join("override.toml");
    fs::write(&explicit, "provider = \"datamuse\"\n").unwrap();

    let mut command = cmd();
    command.args(["--config", explicit.to_str().unwrap()]);
    let config = config_json_with(command, tmp.path());

    assert_eq!(config["provider"], "datamuse", "--config should override discovered config");
    let reported = config["config_file"].as_str().unwrap();
    assert!(reported.ends_with("override.toml"), "--config path should be reported: {reported}");
}

#[test]
fn environment_overrides_files() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".reword.toml"), "offline = false\nseed = 1\n").unwrap();

    let mut command = cmd();
    command.env("REWORD_OFFLINE", "true").env("REWORD_SEED", "42");
    let config = config_json_with(command, tmp.path());

    assert_eq!(config["offline"], true);
    assert_eq!(config["seed"], 42);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_toml_config_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".reword.toml"), "this is not valid toml [[[").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn unknown_provider_shows_error() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".reword.toml"), "provider = \"wordnet\"\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("provider").or(predicate::str::contains("wordnet")));
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".reword.toml"),
        "seed = 5\nunknown_field = \"should be ignored\"\n",
    )
    .unwrap();

    let config = config_json(tmp.path());
    assert_eq!(config["seed"], 5);
}

// =============================================================================
// Boundary Marker Tests
// =============================================================================

#[test]
fn git_boundary_stops_config_search() {
    let tmp = TempDir::new().unwrap();
    let parent = tmp.path().join("parent");
    let repo = parent.join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::write(parent.join(".reword.toml"), "offline = true\n").unwrap();
    fs::create_dir(repo.join(".git")).unwrap();

    let config = config_json(&src);

    assert_eq!(config["offline"], false, "boundary stops search");
    assert!(config["config_file"].is_null());
}

#[test]
fn config_in_same_dir_as_git_is_found() {
    let tmp = TempDir::new().unwrap();
    let repo = tmp.path().join("repo");
    let src = repo.join("src");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(repo.join(".git")).unwrap();
    fs::write(repo.join(".reword.toml"), "offline = true\n").unwrap();

    let config = config_json(&src);
    assert_eq!(config["offline"], true, "config next to .git should be found");
}
