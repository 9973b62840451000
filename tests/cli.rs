// tests/cli.rs
//! Integration tests for the spansort binary.

use std::fs;
use std::process::Command;

use tempfile::TempDir;

fn spansort(args: &[&str]) -> std::process::Output {
    let mut cargo_args = vec!["run", "--quiet", "--bin", "spansort", "--"];
    cargo_args.extend_from_slice(args);
    Command::new("cargo")
        .args(&cargo_args)
        .output()
        .expect("failed to run spansort")
}

#[test]
fn help_works() {
    let output = spansort(&["--help"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Sort imports"));
    assert!(stdout.contains("--check"));
    assert!(stdout.contains("--stdout"));
}

#[test]
fn sorts_a_file_in_place() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("app.ts");
    fs::write(&file, "import {longer, a} from \"pkg\";\n").unwrap();

    let output = spansort(&[file.to_str().unwrap()]);
    assert!(output.status.success(), "status: {:?}", output.status);

    let sorted = fs::read_to_string(&file).unwrap();
    assert_eq!(sorted, "import {a, longer} from \"pkg\";\n");
}

#[test]
fn check_mode_reports_unsorted_files() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("app.ts");
    let unsorted = "import {longer, a} from \"pkg\";\n";
    fs::write(&file, unsorted).unwrap();

    let output = spansort(&["--check", file.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("app.ts"));

    // Check mode never modifies the file
    assert_eq!(fs::read_to_string(&file).unwrap(), unsorted);
}

#[test]
fn check_mode_passes_sorted_files() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("app.ts");
    fs::write(&file, "import {a, longer} from \"pkg\";\n").unwrap();

    let output = spansort(&["--check", file.to_str().unwrap()]);
    assert!(output.status.success(), "status: {:?}", output.status);
}

#[test]
fn stdout_mode_leaves_the_file_alone() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("app.jsx");
    let unsorted = "const x = <X longName=\"v\" a=\"1\" />;\n";
    fs::write(&file, unsorted).unwrap();

    let output = spansort(&["--stdout", file.to_str().unwrap()]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "const x = <X a=\"1\" longName=\"v\" />;\n");
    assert_eq!(fs::read_to_string(&file).unwrap(), unsorted);
}

#[test]
fn directory_expansion_sorts_every_registered_file() {
    let dir = TempDir::new().unwrap();
    let ts = dir.path().join("a.ts");
    let js = dir.path().join("sub").join("b.js");
    let css = dir.path().join("styles.css");
    fs::create_dir_all(js.parent().unwrap()).unwrap();
    fs::write(&ts, "import {bb, a} from \"pkg\";\n").unwrap();
    fs::write(&js, "import {cc, d} from \"pkg\";\n").unwrap();
    fs::write(&css, "not script {}\n").unwrap();

    let output = spansort(&[dir.path().to_str().unwrap()]);
    assert!(output.status.success(), "status: {:?}", output.status);

    assert_eq!(
        fs::read_to_string(&ts).unwrap(),
        "import {a, bb} from \"pkg\";\n"
    );
    assert_eq!(
        fs::read_to_string(&js).unwrap(),
        "import {d, cc} from \"pkg\";\n"
    );
    // Unregistered kinds are untouched
    assert_eq!(fs::read_to_string(&css).unwrap(), "not script {}\n");
}

#[test]
fn parse_errors_exit_with_code_two() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("bad.ts");
    fs::write(&file, "const s = \"oops;\n").unwrap();

    let output = spansort(&[file.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unterminated string"), "stderr: {}", stderr);
}

#[test]
fn missing_files_fail() {
    let dir = TempDir::new().unwrap();
    let output = spansort(&[dir.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no sortable files"));
}
