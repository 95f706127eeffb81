// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Execution agents.
//!
//! ```text
//! CommandRequest { program, args, cwd, timeout }
//!        |
//!        v
//!   dyn Agent ----------------------------.
//!   .execute(request, token)              |
//!   .remote_dispatch() --> RemoteDispatch |
//!   .combine_path()        .install_dir() |
//!        |                                |
//!        v                                |
//!   LocalAgent --> ProcessBuilder         |
//!   (other agents: ssh, build farm, ...) -'
//! ```
//!
//! An agent is where a command runs. The controller never assumes it is the
//! local machine: path composition and install-dir lookup go through the agent.

mod local;
mod request;
#[cfg(test)]
mod tests;

pub use local::LocalAgent;
pub use request::{CommandArg, CommandRequest};

use async_trait::async_trait;
use std::fmt::Debug;
use tokio_util::sync::CancellationToken;

use crate::core::process::ProcessResult;
use crate::error::ScmResult;

/// Runs commands in a working directory, possibly on another machine.
#[async_trait]
pub trait Agent: Debug + Send + Sync {
    /// Name used in logs and capability errors.
    fn name(&self) -> &str;

    /// Runs the request to completion.
    ///
    /// A non-zero exit code is a normal result, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if the command could not be run at all,
    /// timed out, or was cancelled.
    async fn execute(
        &self,
        request: CommandRequest,
        token: &CancellationToken,
    ) -> ScmResult<ProcessResult>;

    /// Functions evaluated on the agent itself, if the agent supports them.
    fn remote_dispatch(&self) -> Option<&dyn RemoteDispatch> {
        None
    }

    /// Joins a directory and a file name using the agent's path rules.
    fn combine_path(&self, dir: &str, file: &str) -> String {
        std::path::Path::new(dir).join(file).display().to_string()
    }
}

/// Functions that must be evaluated on the agent rather than the controller.
#[async_trait]
pub trait RemoteDispatch: Send + Sync {
    /// Directory the running tool is installed in, as seen by the agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the agent cannot determine its install location.
    async fn install_dir(&self) -> ScmResult<String>;
}
