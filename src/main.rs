// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Options | Inis | Branches | Update | Tag | LastCommit | Clone | Validate
//!                          Ctrl-C --> CancellationToken
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context as _;
use tokio_util::sync::CancellationToken;
use tracing::warn;

use gitscm::cli::global::GlobalOptions;
use gitscm::cli::{self, Command};
use gitscm::cmd::config::{run_inis_command, run_options_command};
use gitscm::cmd::repo::{
    run_branches_command, run_clone_command, run_last_commit_command, run_tag_command,
    run_update_command, run_validate_command,
};
use gitscm::config::Config;
use gitscm::core::agent::LocalAgent;
use gitscm::git::ScmProvider;
use gitscm::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => Some(config),
        Err(e) => {
            // `version` and `inis` still work with a broken configuration.
            if matches!(cli.command, Some(Command::Version | Command::Inis)) {
                None
            } else {
                eprintln!("Error: {e:#}");
                return ExitCode::FAILURE;
            }
        }
    };

    let log_config = build_log_config(config.as_ref());
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match config {
        Some(config) => dispatch_command(&cli, &config).await,
        None => dispatch_without_config(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(config: Option<&Config>) -> LogConfig {
    let global = config.map(|c| c.global.clone()).unwrap_or_default();

    LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(global.file_log_level)
        .maybe_with_log_file(global.log_file.map(|p| p.display().to_string()))
        .build()
}

fn load_config(global: &GlobalOptions) -> gitscm::error::Result<Config> {
    global.config_loader()?.build()
}

/// Cancels running backend commands on Ctrl-C.
fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let child = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, cancelling running commands");
            child.cancel();
        }
    });
    token
}

fn build_provider(config: &Config, token: CancellationToken) -> gitscm::error::Result<ScmProvider> {
    let agent = LocalAgent::new().with_install_dir(config.client.install_dir.clone());
    ScmProvider::from_config(config, Arc::new(agent), token)
        .context("failed to set up source control client")
}

fn dispatch_without_config(cli: &cli::Cli) -> gitscm::error::Result<()> {
    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Inis) => {
            let loader = cli.global.config_loader()?;
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        _ => Err(anyhow::anyhow!("configuration could not be loaded")),
    }
}

async fn dispatch_command(cli: &cli::Cli, config: &Config) -> gitscm::error::Result<()> {
    match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            let loader = cli.global.config_loader()?;
            run_inis_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Branches(args)) => {
            let provider = build_provider(config, cancel_on_ctrl_c())?;
            run_branches_command(args, config, &provider).await
        }
        Some(Command::Update(args)) => {
            let provider = build_provider(config, cancel_on_ctrl_c())?;
            run_update_command(args, config, &provider).await
        }
        Some(Command::Tag(args)) => {
            let provider = build_provider(config, cancel_on_ctrl_c())?;
            run_tag_command(args, config, &provider).await
        }
        Some(Command::LastCommit(args)) => {
            let provider = build_provider(config, cancel_on_ctrl_c())?;
            run_last_commit_command(args, config, &provider).await
        }
        Some(Command::Clone(args)) => {
            let provider = build_provider(config, cancel_on_ctrl_c())?;
            run_clone_command(args, config, &provider).await
        }
        Some(Command::Validate(args)) => {
            let provider = build_provider(config, cancel_on_ctrl_c())?;
            run_validate_command(args, config, &provider).await
        }
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(anyhow::anyhow!("No command specified"))
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}
