// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Builds a client from configuration and owns the named repositories.

use std::collections::BTreeMap;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::client::{GitInvoker, SourceControlClient, StderrJoin};
use super::embedded::EmbeddedGitClient;
use super::standard::StandardGitClient;
use super::types::RepositoryRef;
use crate::config::Config;
use crate::config::types::{ClientConfig, ClientKind};
use crate::core::agent::Agent;
use crate::error::{GitError, ScmResult};

/// Creates the client selected by `config.kind`.
///
/// # Errors
///
/// Returns a configuration error if the standard client is selected and no git
/// executable is configured or found on `PATH`.
pub fn build_client(
    config: &ClientConfig,
    agent: Arc<dyn Agent>,
    token: CancellationToken,
) -> ScmResult<Box<dyn SourceControlClient>> {
    let invoker = GitInvoker::new(agent)
        .with_timeout(config.timeout())
        .with_cancellation(token);

    let client: Box<dyn SourceControlClient> = match config.kind {
        ClientKind::Standard => {
            let git = config.resolve_git_executable()?;
            debug!(git = %git.display(), "using standard git client");
            Box::new(
                StandardGitClient::new(invoker, git.display().to_string())
                    .with_stderr_join(config.stderr_join.resolve(StderrJoin::Space)),
            )
        }
        ClientKind::Embedded => {
            debug!(tool = %config.embedded_tool, "using embedded git client");
            Box::new(
                EmbeddedGitClient::new(invoker)
                    .with_tool_name(config.embedded_tool.clone())
                    .with_stderr_join(config.stderr_join.resolve(StderrJoin::Newline)),
            )
        }
    };
    Ok(client)
}

/// A configured client together with its named repositories.
#[derive(Debug)]
pub struct ScmProvider {
    client: Box<dyn SourceControlClient>,
    repositories: BTreeMap<String, RepositoryRef>,
}

impl ScmProvider {
    pub fn new(
        client: Box<dyn SourceControlClient>,
        repositories: BTreeMap<String, RepositoryRef>,
    ) -> Self {
        Self {
            client,
            repositories,
        }
    }

    /// Validates `config` and builds the client it selects.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if validation fails.
    pub fn from_config(
        config: &Config,
        agent: Arc<dyn Agent>,
        token: CancellationToken,
    ) -> ScmResult<Self> {
        config.validate()?;
        let client = build_client(&config.client, agent, token)?;
        let repositories = config
            .repositories
            .iter()
            .map(|(name, repo)| (name.clone(), repo.to_ref()))
            .collect();
        Ok(Self::new(client, repositories))
    }

    #[must_use]
    pub fn client(&self) -> &dyn SourceControlClient {
        self.client.as_ref()
    }

    /// Configured repository by name.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotConfigured` for an unknown name.
    pub fn repository(&self, name: &str) -> ScmResult<&RepositoryRef> {
        self.repositories.get(name).ok_or_else(|| {
            GitError::RepositoryNotConfigured {
                name: name.to_string(),
            }
            .into()
        })
    }

    pub fn repositories(&self) -> impl Iterator<Item = (&str, &RepositoryRef)> {
        self.repositories
            .iter()
            .map(|(name, repo)| (name.as_str(), repo))
    }

    /// Validates every configured repository, stopping at the first failure.
    /// Succeeds without running anything when no repository is configured.
    ///
    /// # Errors
    ///
    /// Returns the first repository's failure.
    pub async fn validate_connection(&self) -> ScmResult<()> {
        for (name, repo) in &self.repositories {
            info!(repository = %name, "validating connection");
            self.client.validate_connection(Some(repo)).await?;
        }
        Ok(())
    }
}
