// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::parse_assignment;
use super::types::{ClientKind, StderrJoinSetting};
use super::{Config, ConfigLoader};
use crate::error::{ConfigError, GitError};
use crate::git::StderrJoin;
use crate::logging::LogLevel;
use std::path::PathBuf;
use std::time::Duration;

const SAMPLE: &str = r#"
[global]
output_log_level = 4
log_file = "gitscm.log"

[client]
kind = "embedded"
git_executable = "/usr/bin/git"
embedded_tool = "lilgit"
install_dir = "/opt/gitscm"
timeout_secs = 30
stderr_join = "newline"

[repositories.app]
remote_url = "https://example.com/app.git"
local_path = "/work/app"
branch = "release"

[repositories.docs]
local_path = "/work/docs"
"#;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert!(config.global.log_file.is_none());
    assert_eq!(config.client.kind, ClientKind::Standard);
    assert_eq!(config.client.embedded_tool, "lilgit.exe");
    assert!(config.client.timeout().is_none());
    assert_eq!(config.client.stderr_join, StderrJoinSetting::Native);
    assert!(config.repositories.is_empty());
}

#[test]
fn test_config_parse() {
    let config = Config::parse(SAMPLE).expect("valid config");
    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.client.kind, ClientKind::Embedded);
    assert_eq!(config.client.embedded_tool, "lilgit");
    assert_eq!(config.client.install_dir, Some(PathBuf::from("/opt/gitscm")));
    assert_eq!(config.client.timeout(), Some(Duration::from_secs(30)));
    assert_eq!(config.client.stderr_join, StderrJoinSetting::Newline);
    assert_eq!(config.repositories.len(), 2);
}

#[test]
fn test_repository_lookup() {
    let config = Config::parse(SAMPLE).expect("valid config");

    let app = config.repository("app").expect("app is configured");
    assert_eq!(app.remote_url(), Some("https://example.com/app.git"));
    assert_eq!(app.local_path(), PathBuf::from("/work/app"));
    assert_eq!(app.branch(), Some("release"));
    assert!(app.tag().is_none());

    let docs = config.repository("docs").expect("docs is configured");
    assert!(docs.remote_url().is_none());

    let err = config.repository("missing").unwrap_err();
    assert!(matches!(
        err.as_git(),
        Some(GitError::RepositoryNotConfigured { name }) if name == "missing"
    ));
}

#[test]
fn test_client_kind_parse() {
    assert_eq!("Embedded".parse::<ClientKind>().ok(), Some(ClientKind::Embedded));
    assert_eq!("standard".parse::<ClientKind>().ok(), Some(ClientKind::Standard));
    let err = "svn".parse::<ClientKind>().unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'kind' in section '[client]': expected 'standard' or 'embedded', got 'svn'"
    );
}

#[test]
fn test_stderr_join_setting_resolve() {
    assert_eq!(
        StderrJoinSetting::Native.resolve(StderrJoin::Space),
        StderrJoin::Space
    );
    assert_eq!(
        StderrJoinSetting::Native.resolve(StderrJoin::Newline),
        StderrJoin::Newline
    );
    assert_eq!(
        StderrJoinSetting::Space.resolve(StderrJoin::Newline),
        StderrJoin::Space
    );
    assert_eq!(
        StderrJoinSetting::Newline.resolve(StderrJoin::Space),
        StderrJoin::Newline
    );
}

#[test]
fn test_validate_missing_local_path() {
    let config = Config::parse(
        r#"
[client]
kind = "embedded"

[repositories.app]
remote_url = "https://example.com/app.git"
"#,
    )
    .expect("parses");
    let err = config.validate().unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'local_path' in section '[repositories.app]'"
    );
}

#[test]
fn test_validate_empty_git_executable() {
    let config = Config::parse(
        r#"
[client]
kind = "standard"
git_executable = ""
"#,
    )
    .expect("parses");
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { key, .. }) if key == "git_executable"
    ));
}

#[test]
fn test_validate_configured_git_executable() {
    let config = Config::parse(
        r#"
[client]
git_executable = "/usr/local/bin/git"
"#,
    )
    .expect("parses");
    assert!(config.validate().is_ok());
    assert_eq!(
        config.client.resolve_git_executable().ok(),
        Some(PathBuf::from("/usr/local/bin/git"))
    );
}

#[test]
fn test_validate_empty_embedded_tool() {
    let config = Config::parse(
        r#"
[client]
kind = "embedded"
embedded_tool = " "
"#,
    )
    .expect("parses");
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { key, .. }) if key == "embedded_tool"
    ));
}

#[test]
fn test_deny_unknown_fields() {
    assert!(Config::parse("[client]\nflavour = \"git\"\n").is_err());
    assert!(Config::parse("[paths]\nprefix = \"/tmp\"\n").is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    assert!(Config::parse("[global]\noutput_log_level = 9\n").is_err());
}

#[test]
fn test_format_options() {
    let config = Config::parse(SAMPLE).expect("valid config");
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    client.embedded_tool         = lilgit
    client.git_executable        = /usr/bin/git
    client.install_dir           = /opt/gitscm
    client.kind                  = embedded
    client.stderr_join           = newline
    client.timeout_secs          = 30
    global.file_log_level        = 5
    global.log_file              = gitscm.log
    global.output_log_level      = 4
    repositories.app.branch      = release
    repositories.app.local_path  = /work/app
    repositories.app.remote_url  = https://example.com/app.git
    repositories.docs.local_path = /work/docs
    ");
}

#[test]
fn test_config_loader_tracks_files() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let present = temp.path().join("present.toml");
    std::fs::write(&present, "[client]\ntimeout_secs = 5\n").expect("write config");
    let absent = temp.path().join("absent.toml");

    let loader = ConfigLoader::new()
        .add_toml_file(&present)
        .add_toml_file_optional(&absent)
        .add_toml_str("");
    let files = loader.loaded_files();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0], ("file".to_string(), present.clone()));
    assert_eq!(files[1].0, "string");

    let config = loader.build().expect("builds");
    assert_eq!(config.client.timeout_secs, 5);
}

#[test]
fn test_config_loader_missing_required_file() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let result = ConfigLoader::new()
        .add_toml_file(temp.path().join("missing.toml"))
        .build();
    assert!(result.is_err());
}

#[test]
fn test_config_loader_set_overrides_file() {
    let config = ConfigLoader::new()
        .add_toml_str(SAMPLE)
        .set_assignment("client.kind=standard")
        .and_then(|loader| loader.set_assignment("repositories.app.tag=v2.0"))
        .and_then(ConfigLoader::build)
        .expect("builds");
    assert_eq!(config.client.kind, ClientKind::Standard);
    assert_eq!(config.repositories["app"].tag.as_deref(), Some("v2.0"));
}

#[test]
fn test_parse_assignment() {
    assert_eq!(
        parse_assignment("client.timeout_secs=30").ok(),
        Some(("client.timeout_secs", "30"))
    );
    assert_eq!(
        parse_assignment(" client.embedded_tool =a=b").ok(),
        Some(("client.embedded_tool", "a=b"))
    );
    let err = parse_assignment("client.kind").unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'set' in section '[cli]': expected KEY=VALUE: 'client.kind'"
    );
    assert!(parse_assignment("=value").is_err());
}
