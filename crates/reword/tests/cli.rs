//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess. None of them touch
//! the network: lookups run offline against a dictionary file or a cache
//! directory prepared by the test.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// A command that runs inside `dir` with its word cache under `dir/cache`.
fn offline_cmd(dir: &Path) -> Command {
    let mut cmd = cmd();
    cmd.current_dir(dir)
        .env("REWORD_CACHE_DIR", dir.join("cache"))
        .env("REWORD_OFFLINE", "true")
        .env_remove("RUST_LOG");
    cmd
}

const DICTIONARY: &str = r#"{
  "quick": { "adjective": [{ "word": "fast", "probability": 1.0 }] },
  "jump": { "verb": [{ "word": "leap", "probability": 1.0 }] },
  "go": {
    "verb": [{ "word": "leave", "probability": 1.0 }],
    "antonyms": { "verb": ["stop"] }
  }
}"#;

fn write_dictionary(dir: &Path) -> String {
    let path = dir.join("dictionary.json");
    fs::write(&path, DICTIONARY).unwrap();
    path.to_str().unwrap().to_string()
}

/// Put a word record where the file cache will find it.
fn cache_record(dir: &Path, lemma: &str, json: &str) {
    let path = dir.join("cache").join("v1");
    fs::create_dir_all(&path).unwrap();
    fs::write(path.join(format!("{lemma}.json")), json).unwrap();
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("paraphrase"))
        .stdout(predicate::str::contains("REWORD_CACHE_DIR"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Paraphrase Command
// =============================================================================

#[test]
fn paraphrase_uses_prior_dictionary() {
    let tmp = TempDir::new().unwrap();
    let dictionary = write_dictionary(tmp.path());

    offline_cmd(tmp.path())
        .args(["paraphrase", "The quick fox jumps.", "--dictionary", &dictionary])
        .assert()
        .success()
        .stdout(predicate::str::diff("The fast fox leaps.\n"));
}

#[test]
fn paraphrase_negated_verb_takes_antonym() {
    let tmp = TempDir::new().unwrap();
    let dictionary = write_dictionary(tmp.path());

    offline_cmd(tmp.path())
        .args(["paraphrase", "They didn't go.", "-d", &dictionary])
        .assert()
        .success()
        .stdout(predicate::str::diff("They stopped.\n"));
}

#[test]
fn paraphrase_reads_stdin() {
    let tmp = TempDir::new().unwrap();
    let dictionary = write_dictionary(tmp.path());

    offline_cmd(tmp.path())
        .args(["paraphrase", "--dictionary", &dictionary])
        .write_stdin("THE QUICK FOX\n")
        .assert()
        .success()
        .stdout(predicate::str::diff("THE FAST FOX\n"));
}

#[test]
fn paraphrase_reads_file() {
    let tmp = TempDir::new().unwrap();
    let dictionary = write_dictionary(tmp.path());
    let input = tmp.path().join("input.txt");
    fs::write(&input, "Quick foxes jump.").unwrap();

    offline_cmd(tmp.path())
        .args(["paraphrase", "--file", input.to_str().unwrap()])
        .args(["--dictionary", &dictionary])
        .assert()
        .success()
        .stdout(predicate::str::diff("Fast foxes leap.\n"));
}

#[test]
fn paraphrase_without_data_returns_input() {
    let tmp = TempDir::new().unwrap();

    offline_cmd(tmp.path())
        .args(["paraphrase", "The quick  fox jumps."])
        .assert()
        .success()
        .stdout(predicate::str::diff("The quick fox jumps.\n"));
}

#[test]
fn paraphrase_uses_word_cache_and_saves_dictionary() {
    let tmp = TempDir::new().unwrap();
    cache_record(
        tmp.path(),
        "fox",
        r#"{ "noun": [{ "word": "hound", "probability": 1.0 }] }"#,
    );
    let saved = tmp.path().join("saved.json");

    offline_cmd(tmp.path())
        .args(["paraphrase", "The foxes ran."])
        .args(["--dictionary", saved.to_str().unwrap(), "--save-dictionary"])
        .assert()
        .success()
        .stdout(predicate::str::diff("The hounds ran.\n"));

    let saved = fs::read_to_string(&saved).unwrap();
    let json: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(json["fox"]["noun"][0]["word"], "hound");
}

#[test]
fn paraphrase_no_cache_ignores_word_cache() {
    let tmp = TempDir::new().unwrap();
    cache_record(
        tmp.path(),
        "fox",
        r#"{ "noun": [{ "word": "hound", "probability": 1.0 }] }"#,
    );

    offline_cmd(tmp.path())
        .args(["paraphrase", "The fox ran.", "--no-cache"])
        .assert()
        .success()
        .stdout(predicate::str::diff("The fox ran.\n"));
}

#[test]
fn paraphrase_json_output() {
    let tmp = TempDir::new().unwrap();
    let dictionary = write_dictionary(tmp.path());

    let output = offline_cmd(tmp.path())
        .args(["--json", "paraphrase", "The quick fox jumps.", "-d", &dictionary])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["text"], "The fast fox leaps.");
    assert_eq!(json["dictionary_size"], 3);
}

#[test]
fn paraphrase_seed_is_reproducible() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("dictionary.json");
    fs::write(
        &path,
        r#"{ "quick": { "adjective": [
            { "word": "fast", "probability": 0.25 },
            { "word": "rapid", "probability": 0.25 },
            { "word": "swift", "probability": 0.25 },
            { "word": "speedy", "probability": 0.25 }
        ] } }"#,
    )
    .unwrap();
    let run = || {
        let output = offline_cmd(tmp.path())
            .args(["paraphrase", "quick quick quick quick", "--seed", "99"])
            .args(["-d", path.to_str().unwrap()])
            .output()
            .unwrap();
        String::from_utf8(output.stdout).unwrap()
    };
    assert_eq!(run(), run());
}

#[test]
fn paraphrase_invalid_dictionary_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("broken.json");
    fs::write(&path, "not json").unwrap();

    offline_cmd(tmp.path())
        .args(["paraphrase", "hello", "-d", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid dictionary"));
}

#[test]
fn paraphrase_save_requires_dictionary() {
    cmd()
        .args(["paraphrase", "hello", "--save-dictionary"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--dictionary"));
}

#[test]
fn paraphrase_input_limit_from_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".reword.toml"), "max_input_bytes = 5\n").unwrap();

    offline_cmd(tmp.path())
        .args(["paraphrase", "The quick fox jumps."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Tag Command
// =============================================================================

#[test]
fn tag_prints_categories() {
    cmd()
        .args(["--color", "never", "tag", "The quick fox jumps."])
        .assert()
        .success()
        .stdout(predicate::str::contains("adjective"))
        .stdout(predicate::str::contains("noun"))
        .stdout(predicate::str::contains("(present)"));
}

#[test]
fn tag_json_lists_every_word() {
    let output = cmd()
        .args(["--json", "tag", "They didn't go."])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tags = json.as_array().unwrap();
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0]["category"], "other");
    assert_eq!(tags[1]["category"], "verb");
    assert_eq!(tags[1]["base"], "go");
    assert_eq!(tags[1]["tense"], "past");
    assert_eq!(tags[1]["is_negative"], true);
}

// =============================================================================
// Lookup Command
// =============================================================================

#[test]
fn lookup_reads_word_cache() {
    let tmp = TempDir::new().unwrap();
    cache_record(
        tmp.path(),
        "quick",
        r#"{ "adjective": [
            { "word": "fast", "probability": 0.75 },
            { "word": "rapid", "probability": 0.25 }
        ] }"#,
    );

    offline_cmd(tmp.path())
        .args(["--color", "never", "lookup", "Quick"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fast (0.75)"))
        .stdout(predicate::str::contains("rapid (0.25)"));
}

#[test]
fn lookup_json_prints_record() {
    let tmp = TempDir::new().unwrap();
    cache_record(
        tmp.path(),
        "go",
        r#"{
            "verb": [{ "word": "leave", "probability": 1.0 }],
            "antonyms": { "verb": ["stop"] }
        }"#,
    );

    let output = offline_cmd(tmp.path())
        .args(["--json", "lookup", "go"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["antonyms"]["verb"][0], "stop");
}

#[test]
fn lookup_unknown_word_fails_offline() {
    let tmp = TempDir::new().unwrap();

    offline_cmd(tmp.path())
        .args(["lookup", "zyzzyva"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no synonyms found"));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().arg("info").arg("--json").assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"]["provider"].is_string());
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn verbose_flags_accepted() {
    cmd().args(["-v", "info"]).assert().success();
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_choices_accepted() {
    for choice in ["auto", "always", "never"] {
        cmd().args(["--color", choice, "info"]).assert().success();
    }
}

#[test]
fn log_file_is_written() {
    let tmp = TempDir::new().unwrap();
    let log = tmp.path().join("logs").join("reword.jsonl");

    cmd()
        .env("REWORD_LOG_PATH", &log)
        .env_remove("RUST_LOG")
        .args(["-v", "tag", "hello"])
        .assert()
        .success();
    assert!(log.is_file());
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}
