//! Drives the `ultimate` binary against a temporary data directory.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn ultimate(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ultimate"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env("RUST_LOG", "warn")
        .env_remove("DATA_DIR")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_new_play_show_history() {
    let dir = TempDir::new().unwrap();

    let created = ultimate(dir.path(), &["new", "g1"]);
    assert!(created.status.success());
    assert!(stdout(&created).contains("Active Corner: any"));

    let played = ultimate(dir.path(), &["play", "g1", "X", "center", "top-left"]);
    assert!(played.status.success());
    let board = stdout(&played);
    assert!(board.contains("Turn: O"));
    assert!(board.contains("Active Corner: top-left"));

    let shown = ultimate(dir.path(), &["show", "g1"]);
    assert_eq!(stdout(&shown), board);

    let history = ultimate(dir.path(), &["history", "g1"]);
    let text = stdout(&history);
    assert!(text.contains("X -> center/top-left"));
    assert!(text.contains("Outcome: In progress"));
}

#[test]
fn test_illegal_move_fails() {
    let dir = TempDir::new().unwrap();
    assert!(ultimate(dir.path(), &["new", "g1"]).status.success());

    let output = ultimate(dir.path(), &["play", "g1", "O", "center", "center"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not O's turn"), "stderr: {stderr}");
}

#[test]
fn test_list_games() {
    let dir = TempDir::new().unwrap();
    for id in ["beta", "alpha"] {
        assert!(ultimate(dir.path(), &["new", id]).status.success());
    }
    let listed = ultimate(dir.path(), &["list"]);
    assert_eq!(stdout(&listed), "alpha\nbeta\n");
}

#[test]
fn test_schema_names_move_fields() {
    let dir = TempDir::new().unwrap();
    let output = ultimate(dir.path(), &["schema"]);
    assert!(output.status.success());
    let schema: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let properties = &schema["properties"];
    for field in ["player", "corner", "cell"] {
        assert!(properties.get(field).is_some(), "missing {field}");
    }
}

#[test]
fn test_show_missing_game_fails() {
    let dir = TempDir::new().unwrap();
    let output = ultimate(dir.path(), &["show", "ghost"]);
    assert!(!output.status.success());
}

#[test]
fn test_data_dir_from_dotenv_file() {
    let dir = TempDir::new().unwrap();
    let games_root = dir.path().join("from-env");
    std::fs::write(
        dir.path().join(".env"),
        format!("DATA_DIR={}\n", games_root.display()),
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_ultimate"))
        .args(["new", "envgame"])
        .current_dir(dir.path())
        .env("RUST_LOG", "warn")
        .env_remove("DATA_DIR")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(games_root.join("games").join("envgame.json").exists());
}
