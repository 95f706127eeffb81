// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Agent that runs commands on this machine.

use async_trait::async_trait;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

use super::{Agent, CommandRequest, RemoteDispatch};
use crate::core::process::{ProcessBuilder, ProcessFlags, ProcessResult};
use crate::error::{ScmError, ScmResult};

/// Runs requests as local child processes.
///
/// Git prompts are disabled (`GIT_TERMINAL_PROMPT=0`, `GCM_INTERACTIVE=never`)
/// so a missing credential fails the command instead of blocking it.
#[derive(Debug, Clone)]
pub struct LocalAgent {
    name: String,
    install_dir: Option<PathBuf>,
}

impl LocalAgent {
    #[must_use]
    pub fn new() -> Self {
        Self {
            name: "local".to_string(),
            install_dir: None,
        }
    }

    /// Reports `dir` as the install directory instead of the executable's own.
    #[must_use]
    pub fn with_install_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.install_dir = dir;
        self
    }
}

impl Default for LocalAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Agent for LocalAgent {
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(
        &self,
        request: CommandRequest,
        token: &CancellationToken,
    ) -> ScmResult<ProcessResult> {
        let output = ProcessBuilder::new(request.program())
            .args(request.arg_values())
            .cwd(request.working_dir())
            .env("GIT_TERMINAL_PROMPT", "0")
            .env("GCM_INTERACTIVE", "never")
            .flags(ProcessFlags::FORWARD_TO_LOG)
            .timeout(request.timeout())
            .run_with_cancellation(token.clone())
            .await?;
        Ok(output)
    }

    fn remote_dispatch(&self) -> Option<&dyn RemoteDispatch> {
        Some(self)
    }
}

#[async_trait]
impl RemoteDispatch for LocalAgent {
    async fn install_dir(&self) -> ScmResult<String> {
        if let Some(dir) = &self.install_dir {
            return Ok(dir.display().to_string());
        }
        let exe = std::env::current_exe()?;
        exe.parent()
            .map(|dir| dir.display().to_string())
            .ok_or_else(|| {
                ScmError::Other(
                    format!("executable has no parent directory: {}", exe.display()).into(),
                )
            })
    }
}
