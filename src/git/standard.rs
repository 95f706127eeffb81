// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client driving the standard git CLI.
//!
//! ```text
//! enum_branches      ls-remote --heads origin
//! update_local_repo  fetch origin [<branch>] --quiet
//!                    reset --hard <tag | FETCH_HEAD> --quiet
//!                    clean -dfq
//! apply_tag          tag -f <tag>
//!                    push <url | origin> --tags --quiet
//! get_last_commit    log -1 --pretty=format:%H
//! clone_repo         clone <url> .
//! validate           log -n 1              (no remote url)
//!                    ls-remote --heads origin
//! ```
//!
//! Every invocation is checked: a non-zero exit fails the operation with the
//! stderr lines joined by a space (by default).

use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, info};

use super::client::{GitInvoker, SourceControlClient, StderrJoin, describe, require_remote_url};
use super::types::{Commit, RepositoryRef, non_empty};
use crate::core::agent::CommandArg;
use crate::core::process::ProcessResult;
use crate::error::{GitError, ScmError, ScmResult};

/// Reset target when no tag is requested: whatever the preceding fetch brought in.
pub const FETCH_HEAD: &str = "FETCH_HEAD";

const REMOTE_NAME: &str = "origin";

/// Client for a locally reachable `git` executable.
#[derive(Debug, Clone)]
pub struct StandardGitClient {
    invoker: GitInvoker,
    git_exe: String,
    stderr_join: StderrJoin,
}

impl StandardGitClient {
    pub fn new(invoker: GitInvoker, git_exe: impl Into<String>) -> Self {
        Self {
            invoker,
            git_exe: git_exe.into(),
            stderr_join: StderrJoin::Space,
        }
    }

    #[must_use]
    pub const fn with_stderr_join(mut self, join: StderrJoin) -> Self {
        self.stderr_join = join;
        self
    }

    #[must_use]
    pub fn git_exe(&self) -> &str {
        &self.git_exe
    }

    /// Runs a git command and fails on a non-zero exit.
    async fn run(
        &self,
        repo: &RepositoryRef,
        command: &str,
        args: Vec<CommandArg>,
    ) -> ScmResult<ProcessResult> {
        let text = describe(command, &args);
        let result = self.invoke(repo, command, args).await?;
        self.stderr_join.check(&text, result)
    }
}

/// Extracts branch names from `ls-remote --heads` output.
///
/// Best effort: lines without `refs/heads/` are skipped, everything after it
/// is taken as the name, even when empty.
///
/// # Errors
///
/// Returns an error if the branch pattern fails to compile.
pub fn parse_branches(lines: &[String]) -> ScmResult<Vec<String>> {
    let regex = Regex::new(r"refs/heads/(?P<branch>.*)$")
        .map_err(|err| ScmError::Other(format!("invalid branch pattern: {err}").into()))?;

    Ok(lines
        .iter()
        .filter_map(|line| regex.captures(line))
        .filter_map(|caps| caps.name("branch"))
        .map(|m| m.as_str().to_string())
        .collect())
}

#[async_trait]
impl SourceControlClient for StandardGitClient {
    fn invoker(&self) -> &GitInvoker {
        &self.invoker
    }

    async fn executable_path(&self) -> ScmResult<String> {
        Ok(self.git_exe.clone())
    }

    async fn enum_branches(&self, repo: &RepositoryRef) -> ScmResult<Vec<String>> {
        let result = self
            .run(repo, "ls-remote", vec!["--heads".into(), REMOTE_NAME.into()])
            .await?;
        parse_branches(result.stdout_lines())
    }

    async fn update_local_repo(
        &self,
        repo: &RepositoryRef,
        branch: Option<&str>,
        tag: Option<&str>,
    ) -> ScmResult<()> {
        let branch = non_empty(branch);
        let target = non_empty(tag).map_or_else(
            || CommandArg::plain(FETCH_HEAD),
            CommandArg::quoted,
        );
        info!(
            path = %repo.local_path().display(),
            branch = branch.unwrap_or(""),
            target = target.value(),
            "updating working copy"
        );

        let mut fetch = vec![CommandArg::plain(REMOTE_NAME)];
        if let Some(branch) = branch {
            fetch.push(CommandArg::quoted(branch));
        }
        fetch.push("--quiet".into());
        self.run(repo, "fetch", fetch).await?;

        self.run(repo, "reset", vec!["--hard".into(), target, "--quiet".into()])
            .await?;

        self.run(repo, "clean", vec!["-dfq".into()]).await?;
        Ok(())
    }

    async fn apply_tag(&self, repo: &RepositoryRef, tag: &str) -> ScmResult<()> {
        info!(path = %repo.local_path().display(), tag, "applying tag");

        self.run(repo, "tag", vec!["-f".into(), CommandArg::quoted(tag)])
            .await?;

        let remote = repo
            .remote_url()
            .map_or_else(|| CommandArg::plain(REMOTE_NAME), CommandArg::quoted);
        self.run(repo, "push", vec![remote, "--tags".into(), "--quiet".into()])
            .await?;
        Ok(())
    }

    async fn get_last_commit(
        &self,
        repo: &RepositoryRef,
        branch: Option<&str>,
    ) -> ScmResult<Commit> {
        if let Some(branch) = non_empty(branch) {
            debug!(branch, "last commit reported for the current checkout");
        }
        let args: Vec<CommandArg> = vec!["-1".into(), "--pretty=format:%H".into()];
        let text = describe("log", &args);
        let result = self.run(repo, "log", args).await?;

        Commit::new(result.stdout_lines().concat()).ok_or_else(|| {
            GitError::CommandFailed {
                command: text,
                message: "git reported no commit".to_string(),
            }
            .into()
        })
    }

    async fn clone_repo(&self, repo: &RepositoryRef) -> ScmResult<()> {
        let url = require_remote_url(repo, "clone")?;
        info!(url, path = %repo.local_path().display(), "cloning");

        self.run(repo, "clone", vec![CommandArg::quoted(url), ".".into()])
            .await?;
        Ok(())
    }

    async fn validate_connection(&self, repo: Option<&RepositoryRef>) -> ScmResult<()> {
        let Some(repo) = repo else {
            return Ok(());
        };

        if repo.remote_url().is_none() {
            self.run(repo, "log", vec!["-n".into(), "1".into()]).await?;
        } else {
            self.run(repo, "ls-remote", vec!["--heads".into(), REMOTE_NAME.into()])
                .await?;
        }
        Ok(())
    }
}
