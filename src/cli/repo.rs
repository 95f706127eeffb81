// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository command arguments.

use clap::Args;
use std::path::PathBuf;

/// Selects the repository a command operates on.
///
/// A NAME loads `[repositories.NAME]`; `--path` and `--url` override its
/// fields, or describe an unconfigured repository on their own.
#[derive(Debug, Clone, Default, Args)]
pub struct RepoArgs {
    /// Configured repository name.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Local working copy path.
    #[arg(short = 'p', long = "path", value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Remote repository url.
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url: Option<String>,
}

impl RepoArgs {
    /// True when no repository was named or described.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.path.is_none() && self.url.is_none()
    }
}

#[derive(Debug, Clone, Args)]
pub struct BranchesArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Prints the branches as a JSON array.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Branch to update to (defaults to the configured branch).
    #[arg(short = 'b', long = "branch", value_name = "BRANCH")]
    pub branch: Option<String>,

    /// Tag to check out (defaults to the configured tag).
    #[arg(short = 't', long = "tag", value_name = "TAG")]
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Args)]
pub struct TagArgs {
    /// Tag to create or replace.
    #[arg(value_name = "TAG")]
    pub tag: String,

    #[command(flatten)]
    pub repo: RepoArgs,
}

#[derive(Debug, Clone, Args)]
pub struct LastCommitArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Branch the commit is reported for (defaults to the configured branch).
    #[arg(short = 'b', long = "branch", value_name = "BRANCH")]
    pub branch: Option<String>,

    /// Prints the commit as a JSON object.
    #[arg(long)]
    pub json: bool,
}
