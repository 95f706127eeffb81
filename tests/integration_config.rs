// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML configurations.

use gitscm::config::types::{ClientKind, StderrJoinSetting};
use gitscm::config::{Config, ConfigLoader};
use gitscm::core::agent::LocalAgent;
use gitscm::git::ScmProvider;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

// =============================================================================
// Loading from TOML strings
// =============================================================================

#[test]
fn config_parse_empty() {
    let config = Config::parse("").unwrap();
    insta::assert_yaml_snapshot!(config, @r"
    global:
      output_log_level: 3
      file_log_level: 5
      log_file: ~
    client:
      kind: standard
      git_executable: ~
      embedded_tool: lilgit.exe
      install_dir: ~
      timeout_secs: 0
      stderr_join: native
    ");
}

#[test]
fn config_parse_repositories() {
    let toml = r#"
[repositories.app]
remote_url = "https://example.com/app.git"
local_path = "/work/app"
tag = "v1.0"

[repositories.tools]
local_path = "/work/tools"
branch = "develop"
"#;
    let config = Config::parse(toml).unwrap();
    insta::assert_yaml_snapshot!(config.repositories, @r#"
    app:
      remote_url: "https://example.com/app.git"
      local_path: /work/app
      branch: ~
      tag: v1.0
    tools:
      remote_url: ~
      local_path: /work/tools
      branch: develop
      tag: ~
    "#);
}

#[test]
fn config_parse_rejects_unknown_stderr_join() {
    assert!(Config::parse("[client]\nstderr_join = \"tab\"\n").is_err());
}

// =============================================================================
// Layering
// =============================================================================

#[test]
fn config_layers_file_then_set() {
    let temp = tempfile::tempdir().unwrap();
    let base = temp.path().join("base.toml");
    let local = temp.path().join("local.toml");
    std::fs::write(&base, "[client]\nkind = \"embedded\"\ntimeout_secs = 5\n").unwrap();
    std::fs::write(&local, "[client]\nstderr_join = \"space\"\n").unwrap();

    let config = ConfigLoader::new()
        .add_toml_file(&base)
        .add_toml_file_optional(&local)
        .set("client.timeout_secs", 60)
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.client.kind, ClientKind::Embedded);
    assert_eq!(config.client.stderr_join, StderrJoinSetting::Space);
    assert_eq!(config.client.timeout_secs, 60);
}

#[test]
fn config_env_overrides_file() {
    // SAFETY: the variable name is unique to this test
    unsafe {
        std::env::set_var("GITSCMTEST_CLIENT__TIMEOUT_SECS", "45");
    }

    let config = ConfigLoader::new()
        .add_toml_str("[client]\ntimeout_secs = 5\n")
        .with_env_prefix("GITSCMTEST")
        .build()
        .unwrap();

    // SAFETY: same as above
    unsafe {
        std::env::remove_var("GITSCMTEST_CLIENT__TIMEOUT_SECS");
    }

    assert_eq!(config.client.timeout_secs, 45);
}

// =============================================================================
// Provider construction
// =============================================================================

#[test]
fn provider_from_embedded_config() {
    let config = Config::parse(
        r#"
[client]
kind = "embedded"

[repositories.app]
remote_url = "https://example.com/app.git"
local_path = "/work/app"
"#,
    )
    .unwrap();

    let provider = ScmProvider::from_config(
        &config,
        Arc::new(LocalAgent::new()),
        CancellationToken::new(),
    )
    .unwrap();

    let names: Vec<&str> = provider.repositories().map(|(name, _)| name).collect();
    assert_eq!(names, ["app"]);
    assert_eq!(
        provider.repository("app").unwrap().remote_url(),
        Some("https://example.com/app.git")
    );
}

#[test]
fn provider_rejects_repository_without_local_path() {
    let config = Config::parse(
        r#"
[client]
kind = "embedded"

[repositories.app]
remote_url = "https://example.com/app.git"
"#,
    )
    .unwrap();

    let err = ScmProvider::from_config(
        &config,
        Arc::new(LocalAgent::new()),
        CancellationToken::new(),
    )
    .unwrap_err();
    assert_eq!(
        err.to_string(),
        "config error: missing required config key 'local_path' in section '[repositories.app]'"
    );
}
