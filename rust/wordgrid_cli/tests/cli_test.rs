//! End-to-end tests for the `wordgrid` binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn wordgrid(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wordgrid"))
        .args(args)
        .env("RUST_LOG", "error")
        .env_remove("WORDGRID_CONFIG")
        .env_remove("WORDGRID_WINDOW_SIZE")
        .env_remove("WORDGRID_MAX_WORD_LENGTH")
        .env_remove("WORDGRID_WORKERS")
        .output()
        .expect("failed to run wordgrid")
}

fn path_str(path: &Path) -> &str {
    path.to_str().unwrap()
}

// s c a t
// x o x d
// x w x o
// x x x g
const GRID_FILE: &str = "scat\nxoxd\nxwxo\nxxxg\n";

#[test]
fn search_prints_found_words() {
    let dir = tempfile::tempdir().unwrap();
    let grid = dir.path().join("grid.txt");
    let words = dir.path().join("words.txt");
    fs::write(&grid, GRID_FILE).unwrap();
    fs::write(&words, "cat\ncow\ntac\ndog\ncat\nsox\n").unwrap();

    let variants: [&[&str]; 3] = [
        &[],
        &["--multiprocess", "--workers", "2", "--window-size", "1"],
        &["--trie", "--workers", "2", "--window-size", "3"],
    ];
    for extra in variants {
        let mut args = vec![
            "search",
            "--grid",
            path_str(&grid),
            "--words",
            path_str(&words),
        ];
        args.extend_from_slice(extra);
        let output = wordgrid(&args);
        assert!(output.status.success(), "{:?}", output);
        let stdout = String::from_utf8(output.stdout).unwrap();
        assert_eq!(
            stdout.lines().collect::<Vec<_>>(),
            vec!["found cat", "found cow", "found dog", "found cat"],
            "args {extra:?}"
        );
    }
}

#[test]
fn search_rejects_non_square_grid() {
    let dir = tempfile::tempdir().unwrap();
    let grid = dir.path().join("grid.txt");
    let words = dir.path().join("words.txt");
    fs::write(&grid, "cat dog\n").unwrap();
    fs::write(&words, "cat\n").unwrap();

    let output = wordgrid(&["search", "--grid", path_str(&grid), "--words", path_str(&words)]);
    assert!(!output.status.success());

    let output = wordgrid(&[
        "search",
        "--grid",
        path_str(&grid),
        "--words",
        path_str(&words),
        "--axis-length",
        "2",
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid grid size"), "{stderr}");
}

#[test]
fn generated_fixture_checks_clean() {
    let dir = tempfile::tempdir().unwrap();
    let grid = dir.path().join("grid.txt");
    let fixture = dir.path().join("words.json");

    let output = wordgrid(&["generate", "grid", path_str(&grid), "40", "--seed", "11"]);
    assert!(output.status.success(), "{:?}", output);
    let output = wordgrid(&[
        "generate",
        "words",
        path_str(&fixture),
        "25",
        path_str(&grid),
        "--json",
        "--seed",
        "12",
    ]);
    assert!(output.status.success(), "{:?}", output);

    let variants: [&[&str]; 2] = [
        &[],
        &["--trie", "--max-word-length", "40", "--window-size", "7"],
    ];
    for extra in variants {
        let mut args = vec![
            "check",
            "--grid",
            path_str(&grid),
            "--fixture",
            path_str(&fixture),
        ];
        args.extend_from_slice(extra);
        let output = wordgrid(&args);
        assert!(output.status.success(), "{:?}", output);
    }
}

#[test]
fn check_reports_disagreement() {
    let dir = tempfile::tempdir().unwrap();
    let grid = dir.path().join("grid.txt");
    let fixture = dir.path().join("words.json");
    fs::write(&grid, GRID_FILE).unwrap();
    fs::write(&fixture, r#"{"cat": true, "tac": true}"#).unwrap();

    let output = wordgrid(&["check", "--grid", path_str(&grid), "--fixture", path_str(&fixture)]);
    assert!(!output.status.success());
}

#[test]
fn config_file_selects_trie() {
    let dir = tempfile::tempdir().unwrap();
    let grid = dir.path().join("grid.txt");
    let words = dir.path().join("words.txt");
    let config = dir.path().join("options.json");
    fs::write(&grid, GRID_FILE).unwrap();
    fs::write(&words, "scat\nxxxg\nscatx\n").unwrap();
    fs::write(&config, r#"{"use_trie": true, "window_size": 2, "workers": 2}"#).unwrap();

    let output = wordgrid(&[
        "search",
        "--grid",
        path_str(&grid),
        "--words",
        path_str(&words),
        "--config",
        path_str(&config),
    ]);
    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["found scat", "found xxxg"]);
}
