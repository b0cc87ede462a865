use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

/// A `trellis` command isolated from the user's own config directory.
fn trellis(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trellis").unwrap();
    cmd.env("XDG_CONFIG_HOME", home.path())
        .env("HOME", home.path())
        .env_remove("TRELLIS_CONFIG")
        .env_remove("TRELLIS_DEBUG_LOG");
    cmd
}

mod config_tests {
    use super::*;

    #[test]
    fn test_config_prints_defaults() {
        let home = tempdir().unwrap();
        trellis(&home)
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("board_title = \"My Board\""))
            .stdout(predicate::str::contains("card_placeholder = \"New card\""))
            .stdout(predicate::str::contains("list_placeholder = \"New list\""))
            .stdout(predicate::str::contains("id_strategy = \"sequential\""))
            .stdout(predicate::str::contains("history_limit = 100"));
    }

    #[test]
    fn test_config_reads_file_flag() {
        let home = tempdir().unwrap();
        let file = home.path().join("board.toml");
        fs::write(
            &file,
            r#"
board_title = "Release"
id_strategy = "uuid"

[[lists]]
title = "Backlog"
cards = ["Write notes"]
"#,
        )
        .unwrap();

        trellis(&home)
            .args(["--config", file.to_str().unwrap(), "config"])
            .assert()
            .success()
            .stdout(predicate::str::contains("board_title = \"Release\""))
            .stdout(predicate::str::contains("id_strategy = \"uuid\""))
            .stdout(predicate::str::contains("title = \"Backlog\""))
            .stdout(predicate::str::contains("card_placeholder = \"New card\""));
    }

    #[test]
    fn test_config_reads_env_var() {
        let home = tempdir().unwrap();
        let file = home.path().join("env.toml");
        fs::write(&file, "card_placeholder = \"Todo\"\n").unwrap();

        trellis(&home)
            .env("TRELLIS_CONFIG", &file)
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("card_placeholder = \"Todo\""));
    }

    #[test]
    fn test_config_reads_platform_location() {
        let home = tempdir().unwrap();
        let dir = home.path().join("trellis");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.toml"), "history_limit = 7\n").unwrap();

        trellis(&home)
            .arg("config")
            .assert()
            .success()
            .stdout(predicate::str::contains("history_limit = 7"));
    }

    #[test]
    fn test_empty_flag_clears_lists() {
        let home = tempdir().unwrap();
        trellis(&home)
            .args(["--empty", "config"])
            .assert()
            .success()
            .stdout(predicate::str::contains("lists = []"));
    }

    #[test]
    fn test_malformed_config_fails() {
        let home = tempdir().unwrap();
        let file = home.path().join("bad.toml");
        fs::write(&file, "board_title = [unclosed\n").unwrap();

        trellis(&home)
            .args(["--config", file.to_str().unwrap(), "config"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Config error"));
    }

    #[test]
    fn test_missing_config_file_fails() {
        let home = tempdir().unwrap();
        let file = home.path().join("nope.toml");

        trellis(&home)
            .args(["--config", file.to_str().unwrap(), "config"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("IO error"));
    }
}

mod surface_tests {
    use super::*;

    #[test]
    fn test_help() {
        let home = tempdir().unwrap();
        trellis(&home)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("A terminal kanban board"))
            .stdout(predicate::str::contains("--config"))
            .stdout(predicate::str::contains("--empty"));
    }

    #[test]
    fn test_version() {
        let home = tempdir().unwrap();
        trellis(&home)
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_completions_bash() {
        let home = tempdir().unwrap();
        trellis(&home)
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("trellis"));
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        let home = tempdir().unwrap();
        trellis(&home).arg("frobnicate").assert().failure();
    }
}
