//! Integration tests for the `bigo` binary.

use assert_cmd::Command;
use indoc::indoc;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::fs;
use tempfile::{tempdir, TempDir};

const NESTED: &str = indoc! {"
    function pairs(xs) {
        let count = 0;
        for (let i = 0; i < xs.length; i++) {
            for (let j = 0; j < xs.length; j++) {
                if (xs[i] === xs[j]) count++;
            }
        }
        return count;
    }
"};

const LINEAR: &str = indoc! {"
    function total(xs) {
        let sum = 0;
        for (let i = 0; i < xs.length; i++) {
            sum += xs[i];
        }
        return sum;
    }
"};

const PYTHON: &str = indoc! {"
    def total(xs):
        return sum(xs)
"};

fn bigo_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bigo").unwrap();
    cmd.current_dir(dir.path()).env_remove("RUST_LOG").env_remove("BIGO_SEED");
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_analyze_file_as_json() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("pairs.js"), NESTED).unwrap();

    let report = json_stdout(
        bigo_cmd(&dir).args(["analyze", "pairs.js", "--no-jitter", "-f", "json"]),
    );

    let snippet = &report["snippets"][0];
    assert_eq!(snippet["source"], "pairs.js");
    assert_eq!(snippet["status"], "analyzed");
    assert_eq!(snippet["prediction"]["class"], "O(n²)");
    assert_eq!(snippet["prediction"]["confidence"], 0.92);
    assert_eq!(snippet["prediction"]["rule"], "double_nested_loops");
    assert_eq!(snippet["prediction"]["features"]["max_loop_nesting"], 2);
    assert_eq!(snippet["explanation"]["dominant"]["kind"], "double_nesting");
    assert_eq!(report["summary"]["analyzed"], 1);
    assert_eq!(report["summary"]["by_class"]["O(n²)"], 1);
}

#[test]
fn test_analyze_reads_stdin() {
    let dir = tempdir().unwrap();
    let report = json_stdout(
        bigo_cmd(&dir)
            .args(["analyze", "-", "--no-jitter", "--format", "json"])
            .write_stdin(LINEAR),
    );
    assert_eq!(report["snippets"][0]["source"], "<stdin>");
    assert_eq!(report["snippets"][0]["prediction"]["class"], "O(n)");
}

#[test]
fn test_directory_is_walked_in_sorted_order() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/vendor")).unwrap();
    fs::write(dir.path().join("src/b.js"), NESTED).unwrap();
    fs::write(dir.path().join("src/a.js"), LINEAR).unwrap();
    fs::write(dir.path().join("src/notes.txt"), LINEAR).unwrap();
    fs::write(dir.path().join("src/vendor/lib.js"), LINEAR).unwrap();
    fs::write(
        dir.path().join(".bigo.toml"),
        "[discovery]\nignore = [\"**/vendor/**\"]\n",
    )
    .unwrap();

    let report = json_stdout(bigo_cmd(&dir).args(["analyze", "src", "--no-jitter", "-f", "json"]));
    let sources: Vec<&str> = report["snippets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["source"].as_str().unwrap())
        .collect();
    assert_eq!(sources.len(), 2);
    assert!(sources[0].ends_with("a.js"));
    assert!(sources[1].ends_with("b.js"));
}

#[test]
fn test_foreign_language_is_rejected_without_failing() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("total.js"), PYTHON).unwrap();

    let report = json_stdout(bigo_cmd(&dir).args(["analyze", "total.js", "-f", "json"]));
    assert_eq!(report["snippets"][0]["status"], "rejected");
    assert!(report["snippets"][0]["reason"]
        .as_str()
        .unwrap()
        .contains("Python"));
    assert_eq!(report["summary"]["rejected"], 1);
}

#[test]
fn test_skip_validation_classifies_anyway() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("total.js"), PYTHON).unwrap();

    let report = json_stdout(bigo_cmd(&dir).args([
        "analyze",
        "total.js",
        "--skip-validation",
        "--no-jitter",
        "-f",
        "json",
    ]));
    assert_eq!(report["snippets"][0]["status"], "analyzed");
}

#[test]
fn test_missing_file_fails() {
    let dir = tempdir().unwrap();
    bigo_cmd(&dir)
        .args(["analyze", "missing.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.js"));
}

#[test]
fn test_seed_makes_confidence_reproducible() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("pairs.js"), NESTED).unwrap();

    let run = || {
        json_stdout(bigo_cmd(&dir).args(["analyze", "pairs.js", "--seed", "17", "-f", "json"]))
    };
    let first = run();
    let second = run();
    assert_eq!(
        first["snippets"][0]["prediction"]["confidence"],
        second["snippets"][0]["prediction"]["confidence"]
    );
}

#[test]
fn test_no_jitter_overrides_seed_from_environment() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("pairs.js"), NESTED).unwrap();

    let report = json_stdout(
        bigo_cmd(&dir)
            .env("BIGO_SEED", "5")
            .args(["analyze", "pairs.js", "--no-jitter", "-f", "json"]),
    );
    assert_eq!(report["snippets"][0]["prediction"]["confidence"], 0.92);
}

#[test]
fn test_config_default_format_applies() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("total.js"), LINEAR).unwrap();
    fs::write(
        dir.path().join(".bigo.toml"),
        "[classifier]\njitter = false\n\n[output]\ndefault_format = \"json\"\n",
    )
    .unwrap();

    let report = json_stdout(bigo_cmd(&dir).args(["analyze", "total.js"]));
    assert_eq!(report["snippets"][0]["prediction"]["confidence"], 0.83);
}

#[test]
fn test_explicit_invalid_config_fails() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("total.js"), LINEAR).unwrap();
    fs::write(
        dir.path().join("custom.toml"),
        "[validation]\nmin_script_patterns = 0\n",
    )
    .unwrap();

    bigo_cmd(&dir)
        .args(["analyze", "total.js", "-c", "custom.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_script_patterns"));
}

#[test]
fn test_terminal_and_markdown_output() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("total.js"), LINEAR).unwrap();

    bigo_cmd(&dir)
        .args(["analyze", "total.js", "--no-jitter"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BIGO ANALYSIS REPORT"))
        .stdout(predicate::str::contains("83% confidence"));

    bigo_cmd(&dir)
        .args(["analyze", "total.js", "--no-jitter", "-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| O(n) | 1 |"));
}

#[test]
fn test_report_written_to_file() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("total.js"), LINEAR).unwrap();

    bigo_cmd(&dir)
        .args(["analyze", "total.js", "--no-jitter", "-f", "json", "-o", "out.json"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let report: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("out.json")).unwrap()).unwrap();
    assert_eq!(report["summary"]["analyzed"], 1);
}

#[test]
fn test_features_command_prints_vector() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("pairs.js"), NESTED).unwrap();

    let dump = json_stdout(bigo_cmd(&dir).args(["features", "pairs.js", "-f", "json"]));
    assert_eq!(dump["vector"].as_array().unwrap().len(), 20);
    assert_eq!(dump["features"]["for_loops"], 2);
    assert_eq!(dump["vector"][1], 2);
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempdir().unwrap();

    bigo_cmd(&dir).arg("init").assert().success();
    assert!(dir.path().join(".bigo.toml").exists());

    bigo_cmd(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    bigo_cmd(&dir).args(["init", "--force"]).assert().success();
}
