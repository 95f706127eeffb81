// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Source control clients.
//!
//! ```text
//!              ScmProvider
//!            (config + repos)
//!                   |
//!                   v
//!      ,-------------------------,
//!      | dyn SourceControlClient |
//!      |   enum_branches         |
//!      |   update_local_repo     |
//!      |   apply_tag             |
//!      |   get_last_commit       |
//!      |   clone_repo            |
//!      |   validate_connection   |
//!      '---+-----------------+---'
//!          |                 |
//!          v                 v
//!  StandardGitClient   EmbeddedGitClient
//!  (git CLI, local)    (lilgit, install dir
//!                       asked of the agent)
//!          \                 /
//!           v               v
//!       GitInvoker --> dyn Agent --> ProcessResult
//! ```
//!
//! **`StandardGitClient`** speaks git's own subcommands and joins stderr with
//! spaces. **`EmbeddedGitClient`** speaks the embedded tool's grammar and joins
//! stderr with newlines.

pub mod client;
pub mod embedded;
pub mod provider;
pub mod standard;
pub mod types;

#[cfg(test)]
mod testing;

pub use client::{GitInvoker, SourceControlClient, StderrJoin};
pub use embedded::{EMBEDDED_TOOL_NAME, EmbeddedGitClient};
pub use provider::{ScmProvider, build_client};
pub use standard::StandardGitClient;
pub use types::{Commit, RepositoryRef};
