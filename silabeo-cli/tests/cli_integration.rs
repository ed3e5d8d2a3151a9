//! Integration tests for the silabeo CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn silabeo() -> Command {
    Command::cargo_bin("silabeo").unwrap()
}

#[test]
fn test_process_inline_text() {
    silabeo()
        .args(["process", "-t", "Hola, ¿cómo estás?"])
        .assert()
        .success()
        .stdout("ho·la, ¿có·mo es·tás?\n");
}

#[test]
fn test_process_fixture_file() {
    silabeo()
        .args(["process", "-i", &fixture_path("spanish-sample.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("ho·la, ¿có·mo es·tás?"))
        .stdout(predicate::str::contains("pe·rro co·me en la ca·lle."));
}

#[test]
fn test_process_stdin() {
    silabeo()
        .arg("process")
        .write_stdin("casa tren hablar aire caos")
        .assert()
        .success()
        .stdout("ca·sa tren ha·blar ai·re ca·os\n");
}

#[test]
fn test_empty_stdin() {
    silabeo()
        .arg("process")
        .write_stdin("")
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn test_custom_separator_and_case() {
    silabeo()
        .args(["process", "-t", "Buenos Días", "-s", "-", "--preserve-case"])
        .assert()
        .success()
        .stdout("Bue-nos Días\n");
}

#[test]
fn test_rejects_letter_separator() {
    silabeo()
        .args(["process", "-t", "casa", "-s", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_json_output() {
    silabeo()
        .args(["process", "-t", "aire puro", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\": \"<text>\""))
        .stdout(predicate::str::contains("\"syllables\""))
        .stdout(predicate::str::contains("\"syllable_count\": 4"));
}

#[test]
fn test_markdown_output() {
    silabeo()
        .args(["process", "-i", &fixture_path("spanish-sample.txt"), "-f", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## tests/fixtures/spanish-sample.txt"))
        .stdout(predicate::str::contains("1. **Hola** ho·la"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total words: 9, syllables: 15*"));
}

#[test]
fn test_multiple_files_in_order() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "primero").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "segundo").unwrap();
    let pattern = temp_dir.path().join("*.txt");

    silabeo()
        .args(["process", "-q", "-i", pattern.to_str().unwrap()])
        .assert()
        .success()
        .stdout("pri·me·ro\nse·gun·do\n");
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("salida.txt");

    silabeo()
        .args(["process", "-t", "libro", "-o", output_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output_path).unwrap(), "li·bro\n");
}

#[test]
fn test_missing_file() {
    silabeo()
        .args(["process", "-i", "does/not/exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("silabeo.toml");
    fs::write(
        &config_path,
        "[syllabification]\nseparator = \"/\"\n\n[output]\ndefault_format = \"text\"\n",
    )
    .unwrap();

    silabeo()
        .args(["process", "-t", "guitarra", "-c", config_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("gui/ta/rra\n");
}

#[test]
fn test_flag_turns_off_preserve_case_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("silabeo.toml");
    fs::write(&config_path, "[syllabification]\npreserve_case = true\n").unwrap();
    let config_arg = config_path.to_str().unwrap();

    silabeo()
        .args(["process", "-t", "Buenos Días", "-c", config_arg])
        .assert()
        .success()
        .stdout("Bue·nos Días\n");

    silabeo()
        .args(["process", "-t", "Buenos Días", "-c", config_arg, "--no-preserve-case"])
        .assert()
        .success()
        .stdout("bue·nos días\n");
}

#[test]
fn test_list_formats() {
    silabeo()
        .args(["list", "formats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_generate_config() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("silabeo.toml");

    silabeo()
        .args(["generate-config", "-o", output_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Configuration template generated successfully",
        ));

    let content = fs::read_to_string(&output_path).unwrap();
    assert!(content.contains("[syllabification]"));
    assert!(content.contains("[output]"));
}

#[test]
fn test_generate_config_stdout() {
    silabeo()
        .arg("generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[syllabification]"))
        .stdout(predicate::str::contains("preserve_case = false"));
}
