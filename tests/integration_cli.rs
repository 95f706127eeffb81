// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing and the `gitscm` binary.

use clap::Parser;
use gitscm::cli::{Cli, Command};
use gitscm::config::types::ClientKind;
use std::path::{Path, PathBuf};
use std::process::{Command as Process, Output};

fn gitscm(dir: &Path, args: &[&str]) -> Output {
    Process::new(env!("CARGO_BIN_EXE_gitscm"))
        .args(args)
        .current_dir(dir)
        .env_remove("GITSCM_CLIENT__KIND")
        .output()
        .expect("failed to run gitscm")
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_no_command() {
    let cli = Cli::try_parse_from(["gitscm"]).unwrap();
    assert!(cli.command.is_none());
}

#[test]
fn cli_repeated_inis_and_sets() {
    let cli = Cli::try_parse_from([
        "gitscm",
        "-i",
        "base.toml",
        "--ini",
        "ci.toml",
        "-s",
        "client.timeout_secs=10",
        "--set",
        "repositories.app.branch=dev",
        "options",
    ])
    .unwrap();

    assert_eq!(
        cli.global.inis,
        [PathBuf::from("base.toml"), PathBuf::from("ci.toml")]
    );
    assert_eq!(
        cli.global.options,
        ["client.timeout_secs=10", "repositories.app.branch=dev"]
    );
}

#[test]
fn cli_clone_with_path_and_url() {
    let cli = Cli::try_parse_from([
        "gitscm",
        "--client",
        "standard",
        "clone",
        "--path",
        "/work/app",
        "--url",
        "https://example.com/app.git",
    ])
    .unwrap();

    assert_eq!(cli.global.client, Some(ClientKind::Standard));
    let Some(Command::Clone(args)) = cli.command else {
        panic!("expected clone command");
    };
    assert!(args.name.is_none());
    assert_eq!(args.path, Some(PathBuf::from("/work/app")));
    assert_eq!(args.url.as_deref(), Some("https://example.com/app.git"));
}

#[test]
fn cli_tag_requires_tag_name() {
    assert!(Cli::try_parse_from(["gitscm", "tag"]).is_err());
}

#[test]
fn cli_unknown_command() {
    assert!(Cli::try_parse_from(["gitscm", "pull"]).is_err());
}

// =============================================================================
// Binary
// =============================================================================

#[test]
fn binary_prints_version() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = gitscm(temp.path(), &["--no-default-inis", "version"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        env!("CARGO_PKG_VERSION")
    );
}

#[test]
fn binary_prints_options_from_default_file() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::write(
        temp.path().join("gitscm.toml"),
        "[client]\nkind = \"embedded\"\ntimeout_secs = 15\n",
    )
    .expect("write config");

    let output = gitscm(temp.path(), &["--timeout", "20", "options"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let line = |key: &str| {
        stdout
            .lines()
            .find(|l| l.starts_with(key))
            .map(|l| l.split_once(" = ").map_or("", |(_, v)| v).trim().to_string())
    };
    assert_eq!(line("client.kind").as_deref(), Some("embedded"));
    assert_eq!(line("client.timeout_secs").as_deref(), Some("20"));
}

#[test]
fn binary_lists_inis() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let extra = temp.path().join("extra.toml");
    std::fs::write(&extra, "[client]\nkind = \"embedded\"\n").expect("write config");

    let output = gitscm(
        temp.path(),
        &["--no-default-inis", "-i", &extra.display().to_string(), "inis"],
    );
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), format!("1. [file] {}", extra.display()));
}

#[test]
fn binary_fails_for_unknown_repository() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let output = gitscm(
        temp.path(),
        &["--no-default-inis", "--client", "embedded", "validate", "missing"],
    );
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("repository 'missing' is not configured"),
        "stderr: {stderr}"
    );
}

#[test]
fn binary_rejects_invalid_config() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    std::fs::write(temp.path().join("gitscm.toml"), "[client]\nkind = \"svn\"\n")
        .expect("write config");

    let output = gitscm(temp.path(), &["options"]);
    assert_eq!(output.status.code(), Some(1));
}
