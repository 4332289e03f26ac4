//! Integration tests for the `keli-show` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the render and
//! shape subcommands through the actual binary, including stdin/stdout piping,
//! file I/O, NDJSON input and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

/// Helper: path to the values.ndjson fixture.
fn values_ndjson_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/values.ndjson")
}

fn keli_show() -> Command {
    Command::cargo_bin("keli-show").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Render subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn render_stdin_to_stdout() {
    keli_show()
        .arg("render")
        .write_stdin(r#"{"__tag":"Some","__carry":{"value":5}}"#)
        .assert()
        .success()
        .stdout("Some.value(5)\n");
}

#[test]
fn render_record_from_stdin() {
    keli_show()
        .arg("render")
        .write_stdin(r#"{"a":1,"b":"hi"}"#)
        .assert()
        .success()
        .stdout("object.a(1) b(\"hi\")\n");
}

#[test]
fn render_file_to_stdout() {
    keli_show()
        .args(["render", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(
            "object.name(\"Alice\") status(Active.since(2019)) manager(None) scores([95,87,92])\n",
        );
}

#[test]
fn render_file_to_file() {
    let output_path = std::env::temp_dir().join("keli-show-test-render-output.txt");
    let _ = std::fs::remove_file(&output_path);

    keli_show()
        .args(["render", "-i", sample_json_path(), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout("");

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    assert!(
        content.starts_with("object.name(\"Alice\")"),
        "unexpected output: {content}"
    );
    assert!(content.ends_with('\n'));

    let _ = std::fs::remove_file(&output_path);
}

#[test]
fn render_escape_flag() {
    keli_show()
        .args(["render", "--escape"])
        .write_stdin(r#"["say \"hi\""]"#)
        .assert()
        .success()
        .stdout("[\"say \\\"hi\\\"\"]\n");
}

#[test]
fn render_without_escape_is_verbatim() {
    keli_show()
        .arg("render")
        .write_stdin(r#"["say \"hi\""]"#)
        .assert()
        .success()
        .stdout("[\"say \"hi\"\"]\n");
}

#[test]
fn render_ndjson_file() {
    keli_show()
        .args(["render", "--ndjson", "-i", values_ndjson_path()])
        .assert()
        .success()
        .stdout("Some.value(5)\nNone\nPoint.x(1) y(2)\n[1,\"two\",object.a(1) b(\"hi\")]\n");
}

#[test]
fn render_ndjson_error_names_line() {
    keli_show()
        .args(["render", "--ndjson"])
        .write_stdin("1\n{\"__tag\":true}\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to render NDJSON values"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn render_invalid_json_fails() {
    keli_show()
        .arg("render")
        .write_stdin("this is not valid json {{{")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to render JSON value"));
}

#[test]
fn render_invalid_carry_fails() {
    keli_show()
        .arg("render")
        .write_stdin(r#"{"__tag":"Some","__carry":[1]}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid carry"));
}

#[test]
fn render_missing_file_fails() {
    keli_show()
        .args(["render", "-i", "/nonexistent/keli-show-input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Shape subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn shape_of_each_kind() {
    for (input, shape) in [
        ("42", "primitive"),
        ("null", "primitive"),
        (r#""s""#, "text"),
        ("[1,2]", "sequence"),
        (r#"{"__tag":"None"}"#, "variant"),
        (r#"{"__tag":""}"#, "record"),
        (r#"{"a":1}"#, "record"),
    ] {
        keli_show()
            .arg("shape")
            .write_stdin(input)
            .assert()
            .success()
            .stdout(format!("{shape}\n"));
    }
}

#[test]
fn shape_from_file() {
    keli_show()
        .args(["shape", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("record\n");
}

#[test]
fn shape_invalid_tag_fails() {
    keli_show()
        .arg("shape")
        .write_stdin(r#"{"__tag":5}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid variant tag"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Usage
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_subcommand_shows_usage() {
    keli_show()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn logging_stays_off_stdout() {
    keli_show()
        .arg("render")
        .env("RUST_LOG", "debug")
        .write_stdin("[1]")
        .assert()
        .success()
        .stdout("[1]\n");
}
