// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Client driving the embedded git tool shipped next to the installation.
//!
//! The tool lives on the agent, so its location is asked of the agent on every
//! call: `install_dir()` runs remotely and the file name is joined with the
//! agent's own path rules.

use async_trait::async_trait;
use tracing::info;

use super::client::{GitInvoker, SourceControlClient, StderrJoin, describe, require_remote_url};
use super::types::{Commit, RepositoryRef, non_empty};
use crate::core::agent::CommandArg;
use crate::core::process::ProcessResult;
use crate::error::{GitError, ScmResult};

/// File name of the embedded tool inside the install directory.
pub const EMBEDDED_TOOL_NAME: &str = "lilgit.exe";

/// Branch used when none is requested.
pub const DEFAULT_BRANCH: &str = "master";

/// Tagger identity passed to the tool; it takes no caller-supplied tagger.
pub const TAGGER: &str = "BuildMaster";

/// Message attached to every tag the tool creates.
pub const TAG_MESSAGE: &str = "Tagged by BuildMaster";

/// Client for the embedded tool, resolved through the agent's remote dispatch.
#[derive(Debug, Clone)]
pub struct EmbeddedGitClient {
    invoker: GitInvoker,
    tool_name: String,
    stderr_join: StderrJoin,
}

impl EmbeddedGitClient {
    pub fn new(invoker: GitInvoker) -> Self {
        Self {
            invoker,
            tool_name: EMBEDDED_TOOL_NAME.to_string(),
            stderr_join: StderrJoin::Newline,
        }
    }

    #[must_use]
    pub fn with_tool_name(mut self, name: impl Into<String>) -> Self {
        self.tool_name = name.into();
        self
    }

    #[must_use]
    pub const fn with_stderr_join(mut self, join: StderrJoin) -> Self {
        self.stderr_join = join;
        self
    }

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

/// Remote url argument; an unset url is passed as `""` for the tool to
/// resolve against the working copy.
fn url_arg(repo: &RepositoryRef) -> CommandArg {
    CommandArg::quoted(repo.remote_url().unwrap_or(""))
}

fn refspec(branch: Option<&str>) -> String {
    format!("refs/heads/{}", non_empty(branch).unwrap_or(DEFAULT_BRANCH))
}

#[async_trait]
impl SourceControlClient for EmbeddedGitClient {
    fn invoker(&self) -> &GitInvoker {
        &self.invoker
    }

    async fn executable_path(&self) -> ScmResult<String> {
        let agent = self.invoker.agent();
        let dispatch = agent
            .remote_dispatch()
            .ok_or_else(|| GitError::CapabilityUnavailable {
                agent: agent.name().to_string(),
                reason: "embedded git tool is not supported on this agent".to_string(),
            })?;

        let dir = dispatch.install_dir().await?;
        Ok(agent.combine_path(&dir, &self.tool_name))
    }

    async fn enum_branches(&self, repo: &RepositoryRef) -> ScmResult<Vec<String>> {
        let result = self.run(repo, "branches", vec![url_arg(repo)]).await?;
        Ok(result.into_stdout_lines())
    }

    async fn update_local_repo(
        &self,
        repo: &RepositoryRef,
        branch: Option<&str>,
        tag: Option<&str>,
    ) -> ScmResult<()> {
        let refspec = refspec(branch);
        info!(
            path = %repo.local_path().display(),
            refspec = %refspec,
            tag = non_empty(tag).unwrap_or(""),
            "updating working copy"
        );

        match non_empty(tag) {
            None => {
                self.run(
                    repo,
                    "get",
                    vec![url_arg(repo), CommandArg::quoted(refspec)],
                )
                .await?;
            }
            Some(tag) => {
                self.run(
                    repo,
                    "gettag",
                    vec![
                        url_arg(repo),
                        CommandArg::quoted(tag),
                        CommandArg::quoted(refspec),
                    ],
                )
                .await?;
            }
        }
        Ok(())
    }

    async fn apply_tag(&self, repo: &RepositoryRef, tag: &str) -> ScmResult<()> {
        info!(path = %repo.local_path().display(), tag, "applying tag");

        self.run(
            repo,
            "tag",
            vec![
                url_arg(repo),
                CommandArg::quoted(tag),
                CommandArg::plain(TAGGER),
                CommandArg::quoted(TAG_MESSAGE),
            ],
        )
        .await?;
        Ok(())
    }

    async fn get_last_commit(
        &self,
        repo: &RepositoryRef,
        _branch: Option<&str>,
    ) -> ScmResult<Commit> {
        let result = self.run(repo, "lastcommit", Vec::new()).await?;
        Commit::new(result.stdout_lines().concat()).ok_or_else(|| {
            GitError::CommandFailed {
                command: "lastcommit".to_string(),
                message: "embedded tool reported no commit".to_string(),
            }
            .into()
        })
    }

    async fn clone_repo(&self, repo: &RepositoryRef) -> ScmResult<()> {
        let url = require_remote_url(repo, "clone")?;
        info!(url, path = %repo.local_path().display(), "cloning");

        self.run(repo, "clone", vec![CommandArg::quoted(url)])
            .await?;
        Ok(())
    }

    async fn validate_connection(&self, repo: Option<&RepositoryRef>) -> ScmResult<()> {
        if let Some(repo) = repo {
            self.run(repo, "lastcommit", Vec::new()).await?;
        }
        Ok(())
    }
}
