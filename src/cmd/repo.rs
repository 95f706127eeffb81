// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository commands.

use anyhow::{Context as _, bail};
use tracing::info;

use crate::cli::repo::{BranchesArgs, LastCommitArgs, RepoArgs, TagArgs, UpdateArgs};
use crate::config::Config;
use crate::error::Result;
use crate::git::{RepositoryRef, ScmProvider};

/// Builds the repository reference a command targets.
///
/// With a NAME the configured entry is used and `--path`/`--url` override its
/// fields; without one, `--path` (or the current directory) and `--url`
/// describe the repository directly.
///
/// # Errors
///
/// Returns an error if NAME is not configured or the current directory cannot
/// be determined.
pub fn resolve_repository(args: &RepoArgs, config: &Config) -> Result<RepositoryRef> {
    let repo = match &args.name {
        Some(name) => config.repository(name)?,
        None => {
            let path = match &args.path {
                Some(path) => path.clone(),
                None => std::env::current_dir().context("failed to read current directory")?,
            };
            RepositoryRef::builder().local_path(path).build()
        }
    };

    let repo = match &args.path {
        Some(path) => repo.with_local_path(path),
        None => repo,
    };
    Ok(repo.with_remote_url(args.url.clone()))
}

/// Lists remote branches, one per line or as JSON.
///
/// # Errors
///
/// Returns an error if the repository cannot be resolved or listing fails.
pub async fn run_branches_command(
    args: &BranchesArgs,
    config: &Config,
    provider: &ScmProvider,
) -> Result<()> {
    let repo = resolve_repository(&args.repo, config)?;
    let branches = provider
        .client()
        .enum_branches(&repo)
        .await
        .with_context(|| format!("failed to list branches of {}", repo.local_path().display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&branches)?);
    } else {
        for branch in branches {
            println!("{branch}");
        }
    }
    Ok(())
}

/// Updates the working copy; flags override the configured branch and tag.
///
/// # Errors
///
/// Returns an error if the repository cannot be resolved or any step fails.
pub async fn run_update_command(
    args: &UpdateArgs,
    config: &Config,
    provider: &ScmProvider,
) -> Result<()> {
    let repo = resolve_repository(&args.repo, config)?;
    let branch = args.branch.as_deref().or_else(|| repo.branch());
    let tag = args.tag.as_deref().or_else(|| repo.tag());

    provider
        .client()
        .update_local_repo(&repo, branch, tag)
        .await
        .with_context(|| format!("failed to update {}", repo.local_path().display()))?;

    info!(path = %repo.local_path().display(), "working copy updated");
    Ok(())
}

/// Tags the current checkout and publishes the tag.
///
/// # Errors
///
/// Returns an error if the tag is empty, the repository cannot be resolved, or
/// tagging fails.
pub async fn run_tag_command(args: &TagArgs, config: &Config, provider: &ScmProvider) -> Result<()> {
    if args.tag.trim().is_empty() {
        bail!("tag name must not be empty");
    }
    let repo = resolve_repository(&args.repo, config)?;

    provider
        .client()
        .apply_tag(&repo, &args.tag)
        .await
        .with_context(|| format!("failed to apply tag '{}'", args.tag))?;

    info!(tag = %args.tag, "tag applied");
    Ok(())
}

/// Prints the last commit identifier.
///
/// # Errors
///
/// Returns an error if the repository cannot be resolved or the query fails.
pub async fn run_last_commit_command(
    args: &LastCommitArgs,
    config: &Config,
    provider: &ScmProvider,
) -> Result<()> {
    let repo = resolve_repository(&args.repo, config)?;
    let branch = args.branch.as_deref().or_else(|| repo.branch());

    let commit = provider
        .client()
        .get_last_commit(&repo, branch)
        .await
        .with_context(|| format!("failed to read last commit of {}", repo.local_path().display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&commit)?);
    } else {
        println!("{commit}");
    }
    Ok(())
}

/// Clones into the local path, creating the directory if needed.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the clone fails.
pub async fn run_clone_command(args: &RepoArgs, config: &Config, provider: &ScmProvider) -> Result<()> {
    let repo = resolve_repository(args, config)?;
    std::fs::create_dir_all(repo.local_path())
        .with_context(|| format!("failed to create {}", repo.local_path().display()))?;

    provider
        .client()
        .clone_repo(&repo)
        .await
        .with_context(|| format!("failed to clone into {}", repo.local_path().display()))?;

    info!(path = %repo.local_path().display(), "clone complete");
    Ok(())
}

/// Validates one repository, or every configured one when none is given.
///
/// # Errors
///
/// Returns the first validation failure.
pub async fn run_validate_command(
    args: &RepoArgs,
    config: &Config,
    provider: &ScmProvider,
) -> Result<()> {
    if args.is_empty() {
        provider
            .validate_connection()
            .await
            .context("connection validation failed")?;
    } else {
        let repo = resolve_repository(args, config)?;
        provider
            .client()
            .validate_connection(Some(&repo))
            .await
            .with_context(|| {
                format!("connection validation failed for {}", repo.local_path().display())
            })?;
    }

    println!("ok");
    Ok(())
}
