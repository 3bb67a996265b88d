//! CLI integration tests.
//!
//! These tests invoke the `rdf2vocab` binary via `std::process::Command`
//! against the fixture vocabulary and verify output correctness.

use std::io::Write;
use std::path::PathBuf;
use std::process::Command;

/// Path to the built binary (set by cargo test).
fn binary_path() -> PathBuf {
    // `cargo test` places the test binary next to the main binary
    let mut path = std::env::current_exe()
        .expect("current_exe")
        .parent()
        .expect("parent")
        .parent()
        .expect("grandparent")
        .to_path_buf();
    path.push("rdf2vocab");
    path
}

/// Path to the fixture vocabulary.
fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("example.ttl")
}

#[test]
fn default_target_prints_rust_to_stdout() {
    let output = Command::new(binary_path())
        .args([fixture_path().to_str().unwrap(), "-q"])
        .output()
        .expect("failed to execute binary");

    assert!(
        output.status.success(),
        "rdf2vocab failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("invalid UTF-8");
    assert!(stdout.contains("pub const NAMESPACE: &str = \"http://example.org/ex#\";"));
    assert!(stdout.contains("pub const PERSON: &str = \"http://example.org/ex#Person\";"));
    assert!(stdout.contains("pub const FIRST_NAME: &str = \"http://example.org/ex#firstName\";"));

    // Canonical order is case-insensitive: firstName, knows, Person.
    let first = stdout.find("FIRST_NAME").expect("FIRST_NAME");
    let knows = stdout.find("KNOWS").expect("KNOWS");
    let person = stdout.find("pub const PERSON").expect("PERSON");
    assert!(first < knows && knows < person, "constants out of order");
}

#[test]
fn header_uses_vocabulary_metadata() {
    let output = Command::new(binary_path())
        .args([fixture_path().to_str().unwrap(), "-q"])
        .output()
        .expect("failed to execute binary");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("invalid UTF-8");
    assert!(stdout.contains("//! Example Vocabulary."));
    assert!(stdout.contains("//! See: <http://example.org/docs>"));
    // The preferred "en" label documents the term.
    assert!(stdout.contains("/// A person, alive, dead, undead, or fictional."));
}

#[test]
fn quiet_suppresses_stderr() {
    let output = Command::new(binary_path())
        .args([fixture_path().to_str().unwrap(), "-q"])
        .output()
        .expect("failed to execute binary");

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("invalid UTF-8");
    assert!(
        stderr.is_empty(),
        "Quiet mode should produce no stderr output, got: {stderr}"
    );
}

#[test]
fn summary_goes_to_stderr_by_default() {
    let output = Command::new(binary_path())
        .args([fixture_path().to_str().unwrap()])
        .output()
        .expect("failed to execute binary");

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("invalid UTF-8");
    assert!(
        stderr.contains("Generated 3 constants"),
        "missing summary: {stderr}"
    );
}

#[test]
fn javascript_target_writes_named_module() {
    let dir = tempfile::tempdir().expect("tempdir");
    let out_path = dir.path().join("Example.js");
    let output = Command::new(binary_path())
        .args([
            fixture_path().to_str().unwrap(),
            "-t",
            "javascript",
            "-o",
            out_path.to_str().unwrap(),
            "-q",
        ])
        .output()
        .expect("failed to execute binary");
    assert!(
        output.status.success(),
        "rdf2vocab failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let generated = std::fs::read_to_string(&out_path).expect("output file");
    // The module is named after the output file stem.
    assert!(generated.contains("const Example = {"));
    assert!(generated.contains("export default Example;"));
    assert!(generated.contains("    PERSON: NAMESPACE + 'Person'"));
}

#[test]
fn python_target_renders_class() {
    let output = Command::new(binary_path())
        .args([fixture_path().to_str().unwrap(), "-t", "py", "-n", "Example", "-q"])
        .output()
        .expect("failed to execute binary");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("invalid UTF-8");
    // The explicit vocabulary name doubles as the class name.
    assert!(stdout.contains("class Example:"));
    assert!(stdout.contains("    Namespace Example."));
    assert!(stdout.contains("    PERSON = NAMESPACE + \"Person\""));
}

#[test]
fn string_block_enabled_by_flag() {
    let output = Command::new(binary_path())
        .args([
            fixture_path().to_str().unwrap(),
            "--string-suffix",
            "_STRING",
            "-q",
        ])
        .output()
        .expect("failed to execute binary");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("invalid UTF-8");
    assert!(
        stdout.contains("pub const Person_STRING: &str = \"Person\";"),
        "missing string constant: {stdout}"
    );
}

#[test]
fn missing_prefix_fails_before_emission() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bare.ttl");
    let mut file = std::fs::File::create(&path).expect("create");
    writeln!(
        file,
        "<http://example.org/ex#Person> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> \
         <http://www.w3.org/2000/01/rdf-schema#Class> ."
    )
    .expect("write");

    let output = Command::new(binary_path())
        .args([path.to_str().unwrap()])
        .output()
        .expect("failed to execute binary");

    assert!(!output.status.success(), "run must fail without a prefix");
    let stderr = String::from_utf8(output.stderr).expect("invalid UTF-8");
    assert!(
        stderr.contains("could not detect prefix"),
        "unexpected error output: {stderr}"
    );
}

#[test]
fn explicit_prefix_narrows_the_term_set() {
    let output = Command::new(binary_path())
        .args([
            fixture_path().to_str().unwrap(),
            "-p",
            "http://example.org/ex#P",
            "-q",
        ])
        .output()
        .expect("failed to execute binary");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("invalid UTF-8");
    // Only ex:Person matches the narrowed prefix; its local name is "erson".
    assert!(stdout.contains("pub const ERSON: &str = \"http://example.org/ex#Person\";"));
    assert!(!stdout.contains("KNOWS"));
}

#[test]
fn unknown_target_is_rejected() {
    let output = Command::new(binary_path())
        .args([fixture_path().to_str().unwrap(), "-t", "cobol"])
        .output()
        .expect("failed to execute binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).expect("invalid UTF-8");
    assert!(stderr.contains("unknown target"));
}

#[test]
fn reruns_are_byte_identical() {
    let run = || {
        Command::new(binary_path())
            .args([fixture_path().to_str().unwrap(), "-q"])
            .output()
            .expect("failed to execute binary")
            .stdout
    };
    assert_eq!(run(), run());
}
