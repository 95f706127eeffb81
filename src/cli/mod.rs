// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gitscm using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitscm [global options] <command>
//! version | options | inis
//! branches    [NAME]
//! update      [NAME] [--branch B] [--tag T]
//! tag         TAG [NAME]
//! last-commit [NAME]
//! clone       [NAME]
//! validate    [NAME]
//! ```

pub mod global;
pub mod repo;


use crate::cli::global::GlobalOptions;
use crate::cli::repo::{BranchesArgs, LastCommitArgs, RepoArgs, TagArgs, UpdateArgs};
use clap::{Parser, Subcommand};

/// Git source control client
///
/// Drives git, or the embedded git tool, against configured repositories.
#[derive(Debug, Parser)]
#[command(
    name = "gitscm",
    author,
    version,
    about = "Git source control client",
    long_about = "gitscm Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs repository operations through the standard git CLI or the\n\
                  embedded git tool. Repositories are named in the configuration\n\
                  under [repositories.NAME], or given directly with --path/--url.",
    after_help = "CONFIGURATION:\n\n\
                  gitscm loads the files given with --ini, then gitscm.toml from the\n\
                  current directory when present, then GITSCM_SECTION__KEY environment\n\
                  variables, then --set overrides. Use --no-default-inis to skip\n\
                  gitscm.toml."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the configuration files used.
    Inis,

    /// Lists the remote branches.
    Branches(BranchesArgs),

    /// Updates the working copy to a branch or tag.
    Update(UpdateArgs),

    /// Tags the current checkout and publishes the tag.
    Tag(TagArgs),

    /// Prints the commit at the tip of the current checkout.
    #[command(name = "last-commit")]
    LastCommit(LastCommitArgs),

    /// Clones the remote into the (empty) local path.
    Clone(RepoArgs),

    /// Checks connectivity and credentials, for one or every repository.
    Validate(RepoArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
