// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --ini FILE        ← Additional config files (can repeat)
//! --log-level N     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (defaults to --log-level)
//! --client KIND     ← client.kind override
//! --git PATH        ← client.git_executable override
//! --timeout SECS    ← client.timeout_secs override
//! --set KEY=VAL     ← Direct config override
//!
//! Precedence: CLI flags > --set > env > gitscm.toml > --ini > defaults
//! ```

use clap::Args;
use std::path::PathBuf;

use crate::config::{ConfigLoader, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use crate::config::types::ClientKind;
use crate::error::Result;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(short = 'i', long = "ini", value_name = "FILE", action = clap::ArgAction::Append)]
    pub inis: Vec<PathBuf>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub log_level: Option<u8>,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=5)
    )]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Sets an option, such as 'client.timeout_secs=30'.
    /// Can be specified multiple times.
    #[arg(short = 's', long = "set", value_name = "OPTION", action = clap::ArgAction::Append)]
    pub options: Vec<String>,

    /// Backend to use: standard or embedded.
    #[arg(long = "client", value_name = "KIND")]
    pub client: Option<ClientKind>,

    /// Path to the git executable.
    #[arg(long = "git", value_name = "PATH")]
    pub git: Option<PathBuf>,

    /// Deadline per backend command in seconds (0 = none).
    #[arg(long = "timeout", value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Disables auto loading of gitscm.toml, only uses --ini.
    #[arg(long = "no-default-inis")]
    pub no_default_inis: bool,
}

impl GlobalOptions {
    /// Converts command-line options to `key=value` configuration overrides,
    /// `--set` entries first so dedicated flags win.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let mut overrides = self.options.clone();

        if let Some(level) = self.log_level {
            overrides.push(format!("global.output_log_level={level}"));
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            overrides.push(format!("global.file_log_level={level}"));
        }

        if let Some(ref path) = self.log_file {
            overrides.push(format!("global.log_file={}", path.display()));
        }

        if let Some(kind) = self.client {
            overrides.push(format!("client.kind={kind}"));
        }

        if let Some(ref git) = self.git {
            overrides.push(format!("client.git_executable={}", git.display()));
        }

        if let Some(secs) = self.timeout {
            overrides.push(format!("client.timeout_secs={secs}"));
        }

        overrides
    }

    /// Loader for every configuration source these options name.
    ///
    /// # Errors
    ///
    /// Returns an error if an override is not of the form `KEY=VALUE`.
    pub fn config_loader(&self) -> Result<ConfigLoader> {
        let mut loader = ConfigLoader::new();
        for ini_path in &self.inis {
            loader = loader.add_toml_file(ini_path);
        }
        if !self.no_default_inis {
            loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
        }
        loader = loader.with_env_prefix(ENV_PREFIX);

        for assignment in self.to_config_overrides() {
            loader = loader.set_assignment(&assignment)?;
        }
        Ok(loader)
    }
}
