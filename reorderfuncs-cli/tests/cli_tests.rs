//! End-to-end tests for the reorderfuncs binary

use assert_cmd::Command;
use std::fs;
use std::path::Path;

const UNSORTED: &str = "package main\n\nimport \"testing\"\n\nfunc Test_b(t *testing.T) {\n}\n\nfunc Test_a(t *testing.T) {\n}\n";
const SORTED: &str = "package main\n\nimport \"testing\"\n\nfunc Test_a(t *testing.T) {\n}\n\nfunc Test_b(t *testing.T) {\n}\n";

fn reorderfuncs() -> Command {
    Command::new(env!("CARGO_BIN_EXE_reorderfuncs"))
}

fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

#[test]
fn test_no_arguments_is_usage_error() {
    let assert = reorderfuncs().assert().code(2);
    assert!(stderr_of(&assert).contains("Usage"));
}

#[test]
fn test_too_many_arguments_is_usage_error() {
    reorderfuncs().args(["a.go", "b.go", "c.go"]).assert().code(2);
}

#[test]
fn test_rewrites_input_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sample_test.go");
    write(&input, UNSORTED);

    reorderfuncs().arg(&input).assert().success();

    assert_eq!(fs::read_to_string(&input).unwrap(), SORTED);
}

#[test]
fn test_writes_separate_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sample_test.go");
    let output = dir.path().join("sorted_test.go");
    write(&input, UNSORTED);

    reorderfuncs().arg(&input).arg(&output).assert().success();

    assert_eq!(fs::read_to_string(&input).unwrap(), UNSORTED);
    assert_eq!(fs::read_to_string(&output).unwrap(), SORTED);
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing_test.go");

    let assert = reorderfuncs().arg(&input).assert().code(1);

    let stderr = stderr_of(&assert);
    assert!(stderr.contains("error:"), "stderr: {}", stderr);
    assert!(stderr.contains("failed to read input file"), "stderr: {}", stderr);
}

#[test]
fn test_syntax_error_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken_test.go");
    let broken = "package main\n\nfunc Test_b( {\n\nfunc Test_a() {}\n";
    write(&input, broken);

    let assert = reorderfuncs().arg(&input).assert().code(1);

    assert!(stderr_of(&assert).contains("failed to parse Go file"));
    assert_eq!(fs::read_to_string(&input).unwrap(), broken);
}

#[test]
fn test_prefix_flag_selects_benchmarks() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bench_test.go");
    write(
        &input,
        "package main\n\nfunc BenchmarkZ(b *testing.B) {\n}\n\nfunc BenchmarkA(b *testing.B) {\n}\n",
    );

    reorderfuncs()
        .arg(&input)
        .args(["--prefix", "Benchmark"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&input).unwrap(),
        "package main\n\nfunc BenchmarkA(b *testing.B) {\n}\n\nfunc BenchmarkZ(b *testing.B) {\n}\n"
    );
}

#[test]
fn test_invalid_prefix_flag_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sample_test.go");
    write(&input, UNSORTED);

    let assert = reorderfuncs().arg(&input).args(["--prefix", ""]).assert().code(1);

    assert!(stderr_of(&assert).contains("invalid --prefix"));
    assert_eq!(fs::read_to_string(&input).unwrap(), UNSORTED);
}

#[test]
fn test_discovers_config_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("fuzz_test.go");
    write(
        &dir.path().join(".reorderfuncsrc.json"),
        r#"{"prefix": "Fuzz"}"#,
    );
    write(
        &input,
        "package main\n\nfunc FuzzZ(f *testing.F) {\n}\n\nfunc FuzzA(f *testing.F) {\n}\n",
    );

    reorderfuncs().arg(&input).assert().success();

    let output = fs::read_to_string(&input).unwrap();
    assert!(output.find("FuzzA").unwrap() < output.find("FuzzZ").unwrap());
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sample_test.go");
    let config = dir.path().join("custom.json");
    write(&input, UNSORTED);
    write(&config, r#"{"unknown": 1}"#);

    let assert = reorderfuncs()
        .arg(&input)
        .arg("--config")
        .arg(&config)
        .assert()
        .code(1);

    assert!(stderr_of(&assert).contains("failed to load configuration"));
    assert_eq!(fs::read_to_string(&input).unwrap(), UNSORTED);
}

#[test]
fn test_version_flag() {
    reorderfuncs().arg("--version").assert().success();
}
