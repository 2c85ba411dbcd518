use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

const BIN: &str = env!("CARGO_BIN_EXE_outfit-html");
const OUTPUT_FILE: &str = "generated-outfit.html";

fn run_with_stdin(dir: &TempDir, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(BIN)
        .args(args)
        .current_dir(dir.path())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn renders_file_argument() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("response.json");
    fs::write(
        &input,
        r#"{"description": "A & B", "products": [{"title": "shirt", "link": "http://x"}]}"#,
    )
    .unwrap();

    let output = Command::new(BIN)
        .arg(&input)
        .current_dir(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let html = fs::read_to_string(dir.path().join(OUTPUT_FILE)).unwrap();
    assert!(html.contains("A &amp; B"));
    assert!(html.contains("<h3>shirt</h3>"));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(OUTPUT_FILE));
    assert_eq!(lines[1], format!("   브라우저에서 열기: open {}", OUTPUT_FILE));
}

#[test]
fn renders_stdin() {
    let dir = TempDir::new().unwrap();
    let output = run_with_stdin(&dir, &[], "{}");
    assert!(output.status.success());

    let html = fs::read_to_string(dir.path().join(OUTPUT_FILE)).unwrap();
    assert!(html.contains("이미지가 없습니다."));
    assert!(html.contains("상품이 없습니다."));
}

#[test]
fn overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(OUTPUT_FILE), "stale").unwrap();

    let output = run_with_stdin(&dir, &[], r#"{"searchQuery": "fresh"}"#);
    assert!(output.status.success());

    let html = fs::read_to_string(dir.path().join(OUTPUT_FILE)).unwrap();
    assert!(!html.contains("stale"));
    assert!(html.contains("fresh"));
}

#[test]
fn missing_input_file_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(BIN)
        .arg("missing.json")
        .current_dir(dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.json"));
    assert!(!dir.path().join(OUTPUT_FILE).exists());
}

#[test]
fn invalid_json_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let output = run_with_stdin(&dir, &[], "{not json");

    assert!(!output.status.success());
    assert!(!dir.path().join(OUTPUT_FILE).exists());
}

#[test]
fn malformed_product_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let output = run_with_stdin(&dir, &[], r#"{"products": ["just a string"]}"#);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Product #0"));
    assert!(!dir.path().join(OUTPUT_FILE).exists());
}

#[test]
fn output_and_quiet_flags() {
    let dir = TempDir::new().unwrap();
    let output = run_with_stdin(&dir, &["--output", "custom.html", "--quiet"], "{}");

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(dir.path().join("custom.html").exists());
    assert!(!dir.path().join(OUTPUT_FILE).exists());
}
