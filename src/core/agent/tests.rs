// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Agent, CommandArg, CommandRequest, LocalAgent};
use crate::error::ProcessError;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

#[test]
fn test_command_line_quotes_values() {
    let request = CommandRequest::new("lilgit.exe", "/work/app")
        .arg("gettag")
        .arg(CommandArg::quoted("https://example.com/app.git"))
        .arg(CommandArg::quoted("v1.2"))
        .arg(CommandArg::quoted("refs/heads/release"));

    insta::assert_snapshot!(
        request.arguments_line(),
        @r#"gettag "https://example.com/app.git" "v1.2" "refs/heads/release""#
    );
    assert_eq!(
        request.arg_values().collect::<Vec<_>>(),
        ["gettag", "https://example.com/app.git", "v1.2", "refs/heads/release"]
    );
}

#[test]
fn test_quoted_value_escapes_quotes() {
    let arg = CommandArg::quoted(r#"say "hi" now"#);
    insta::assert_snapshot!(arg.render(), @r#""say \"hi\" now""#);
    assert_eq!(arg.value(), r#"say "hi" now"#);
}

#[test]
fn test_command_line_includes_program() {
    let request = CommandRequest::new("git", "/work/app").args(["clean", "-dfq"]);
    insta::assert_snapshot!(request.command_line(), @"git clean -dfq");
    assert_eq!(request.working_dir(), PathBuf::from("/work/app"));
    assert!(request.timeout().is_none());
}

#[tokio::test]
async fn test_local_agent_reports_install_dir_override() {
    let agent = LocalAgent::new().with_install_dir(Some(PathBuf::from("/opt/gitscm")));
    let dispatch = agent.remote_dispatch().expect("local agent supports dispatch");
    let dir = dispatch.install_dir().await.expect("install dir");
    assert_eq!(dir, PathBuf::from("/opt/gitscm").display().to_string());
}

#[tokio::test]
async fn test_local_agent_reports_exe_dir() {
    let agent = LocalAgent::new();
    let dir = agent
        .remote_dispatch()
        .expect("local agent supports dispatch")
        .install_dir()
        .await
        .expect("install dir");
    let exe = std::env::current_exe().expect("current exe");
    assert_eq!(
        dir,
        exe.parent().expect("exe parent").display().to_string()
    );
}

#[test]
fn test_local_agent_combine_path() {
    let agent = LocalAgent::default();
    assert_eq!(agent.name(), "local");
    let combined = agent.combine_path("/opt/gitscm", "lilgit.exe");
    assert_eq!(
        combined,
        PathBuf::from("/opt/gitscm/lilgit.exe").display().to_string()
    );
}

#[tokio::test]
async fn test_local_agent_missing_working_dir() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let request = CommandRequest::new("git", temp.path().join("missing")).arg("status");
    let err = LocalAgent::new()
        .execute(request, &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err.as_process(),
        Some(ProcessError::WorkingDirNotFound { .. })
    ));
}

#[cfg(not(windows))]
#[tokio::test]
async fn test_local_agent_returns_non_zero_exit() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let request = CommandRequest::new("/bin/sh", temp.path())
        .arg("-c")
        .arg(CommandArg::quoted("echo 'fatal: repository not found' >&2; exit 128"));
    let result = LocalAgent::new()
        .execute(request, &CancellationToken::new())
        .await
        .expect("non-zero exit is a result");
    assert_eq!(result.exit_code(), 128);
    assert_eq!(result.stderr_lines(), ["fatal: repository not found"]);
}
