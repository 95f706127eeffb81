// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source control client contract and the shared invoke primitive.
//!
//! ```text
//! SourceControlClient::invoke(repo, verb, args)
//!        |
//!        v
//!   executable_path()      (variant: configured path / agent lookup)
//!        |
//!        v
//!   GitInvoker::invoke --> CommandRequest { exe, verb + args, cwd = local_path }
//!        |                  timeout, cancellation token
//!        v
//!   dyn Agent::execute --> ProcessResult (never an error on non-zero exit)
//! ```

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::types::{Commit, RepositoryRef};
use crate::core::agent::{Agent, CommandArg, CommandRequest};
use crate::core::process::ProcessResult;
use crate::error::{GitError, ScmError, ScmResult};

/// Platform line separator used by [`StderrJoin::Newline`].
pub const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// How stderr lines are joined into a failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StderrJoin {
    /// Single space between lines.
    Space,
    /// Platform line separator between lines.
    Newline,
}

impl StderrJoin {
    #[must_use]
    pub fn join(self, lines: &[String]) -> String {
        match self {
            Self::Space => lines.join(" "),
            Self::Newline => lines.join(LINE_SEPARATOR),
        }
    }

    /// Turns a finished process into `Ok` on exit code 0, otherwise into
    /// `GitError::CommandFailed` carrying the joined stderr.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` for any non-zero exit code.
    pub fn check(self, command: &str, result: ProcessResult) -> ScmResult<ProcessResult> {
        if result.success() {
            return Ok(result);
        }
        debug!(
            command,
            exit_code = result.exit_code(),
            "backend command failed"
        );
        Err(GitError::CommandFailed {
            command: command.to_string(),
            message: self.join(result.stderr_lines()),
        }
        .into())
    }
}

/// Runs backend commands on an agent with the working directory set to the
/// repository's local path.
///
/// Holds no per-repository state; one invoker serves any number of
/// repositories.
#[derive(Debug, Clone)]
pub struct GitInvoker {
    agent: Arc<dyn Agent>,
    timeout: Option<Duration>,
    token: CancellationToken,
}

impl GitInvoker {
    pub fn new(agent: Arc<dyn Agent>) -> Self {
        Self {
            agent,
            timeout: None,
            token: CancellationToken::new(),
        }
    }

    /// Deadline applied to every invocation. `None` waits indefinitely.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Token that aborts running and future invocations when cancelled.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.token = token;
        self
    }

    #[must_use]
    pub fn agent(&self) -> &dyn Agent {
        self.agent.as_ref()
    }

    /// Runs `exe command args...` in `repo.local_path()`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the agent could not run the command; a
    /// non-zero exit code is returned as a normal [`ProcessResult`].
    pub async fn invoke(
        &self,
        exe: &str,
        repo: &RepositoryRef,
        command: &str,
        args: Vec<CommandArg>,
    ) -> ScmResult<ProcessResult> {
        let request = CommandRequest::new(exe, repo.local_path())
            .arg(command)
            .args(args)
            .with_timeout(self.timeout);

        debug!(
            agent = self.agent.name(),
            cwd = %repo.local_path().display(),
            cmd = %request.arguments_line(),
            "invoke"
        );

        self.agent.execute(request, &self.token).await
    }
}

/// Text of a command for error messages: verb followed by rendered arguments.
#[must_use]
pub fn describe(command: &str, args: &[CommandArg]) -> String {
    std::iter::once(command.to_string())
        .chain(args.iter().map(CommandArg::render))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Repository operations shared by every backend.
///
/// `branch` and `tag` parameters treat `Some("")` the same as `None`.
#[async_trait]
pub trait SourceControlClient: Debug + Send + Sync {
    /// The invoker this client runs commands through.
    fn invoker(&self) -> &GitInvoker;

    /// Location of the backend executable, as seen by the agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable cannot be located on the agent.
    async fn executable_path(&self) -> ScmResult<String>;

    /// Resolves the executable and runs `command args...` against `repo`.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable cannot be resolved or the agent
    /// cannot run the command. Never fails because of the exit code.
    async fn invoke(
        &self,
        repo: &RepositoryRef,
        command: &str,
        args: Vec<CommandArg>,
    ) -> ScmResult<ProcessResult> {
        let exe = self.executable_path().await?;
        self.invoker().invoke(&exe, repo, command, args).await
    }

    /// Lists the remote branch names.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` if the backend fails.
    async fn enum_branches(&self, repo: &RepositoryRef) -> ScmResult<Vec<String>>;

    /// Makes the working copy match the remote `branch` (default branch when
    /// unset), at `tag` when one is given, otherwise at the branch tip.
    ///
    /// The steps are not transactional; a failure can leave the working copy
    /// partially updated.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` from the first step that fails.
    async fn update_local_repo(
        &self,
        repo: &RepositoryRef,
        branch: Option<&str>,
        tag: Option<&str>,
    ) -> ScmResult<()>;

    /// Creates or replaces `tag` and publishes it to the remote.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` if tagging or publishing fails.
    async fn apply_tag(&self, repo: &RepositoryRef, tag: &str) -> ScmResult<()>;

    /// Commit at the tip of the current checkout.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` if the backend fails or reports nothing.
    async fn get_last_commit(&self, repo: &RepositoryRef, branch: Option<&str>)
    -> ScmResult<Commit>;

    /// Populates the (empty, existing) local path from the remote.
    ///
    /// # Errors
    ///
    /// Returns `GitError::MissingRemoteUrl` without a remote url, or
    /// `GitError::CommandFailed` if the clone fails.
    async fn clone_repo(&self, repo: &RepositoryRef) -> ScmResult<()>;

    /// Read-only connectivity and credential check. `None` means there is
    /// nothing to validate and succeeds without running anything.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommandFailed` if the backend cannot read the repository.
    async fn validate_connection(&self, repo: Option<&RepositoryRef>) -> ScmResult<()>;
}

/// Error for operations that need `repo.remote_url()`.
pub(crate) fn require_remote_url<'a>(
    repo: &'a RepositoryRef,
    operation: &'static str,
) -> ScmResult<&'a str> {
    repo.remote_url().ok_or_else(|| {
        ScmError::from(GitError::MissingRemoteUrl {
            operation,
            path: repo.local_path().display().to_string(),
        })
    })
}
