// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! Config
//!   global         log levels, log file
//!   client         kind, executables, install dir, timeout, stderr join
//!   repositories   name -> RepositoryConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::core::process::ProcessBuilder;
use crate::error::ConfigError;
use crate::git::{EMBEDDED_TOOL_NAME, RepositoryRef, StderrJoin};
use crate::logging::LogLevel;

/// Which backend drives the repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientKind {
    /// The standard git CLI, run locally.
    #[default]
    Standard,
    /// The embedded tool, located through the agent.
    Embedded,
}

impl std::fmt::Display for ClientKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Embedded => write!(f, "embedded"),
        }
    }
}

impl std::str::FromStr for ClientKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "embedded" => Ok(Self::Embedded),
            _ => Err(ConfigError::InvalidValue {
                section: "client".to_string(),
                key: "kind".to_string(),
                message: format!("expected 'standard' or 'embedded', got '{s}'"),
            }),
        }
    }
}

/// How stderr lines are joined into failure messages.
///
/// `Native` keeps each client's own separator (space for standard, newline
/// for embedded).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StderrJoinSetting {
    #[default]
    Native,
    Space,
    Newline,
}

impl StderrJoinSetting {
    /// Join policy to use, given the client's own default.
    #[must_use]
    pub const fn resolve(self, native: StderrJoin) -> StderrJoin {
        match self {
            Self::Native => native,
            Self::Space => StderrJoin::Space,
            Self::Newline => StderrJoin::Newline,
        }
    }
}

impl std::fmt::Display for StderrJoinSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Space => write!(f, "space"),
            Self::Newline => write!(f, "newline"),
        }
    }
}

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Log file; no file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Backend selection and execution settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub kind: ClientKind,
    /// Path to git; looked up on `PATH` when unset.
    pub git_executable: Option<PathBuf>,
    /// File name of the embedded tool inside the install directory.
    pub embedded_tool: String,
    /// Install directory reported by the local agent instead of the exe dir.
    pub install_dir: Option<PathBuf>,
    /// Deadline per backend command in seconds, 0 for none.
    pub timeout_secs: u64,
    pub stderr_join: StderrJoinSetting,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            kind: ClientKind::Standard,
            git_executable: None,
            embedded_tool: EMBEDDED_TOOL_NAME.to_string(),
            install_dir: None,
            timeout_secs: 0,
            stderr_join: StderrJoinSetting::Native,
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        match self.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }

    /// Configured git executable, or the one found on `PATH`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` when neither is available, or
    /// `ConfigError::InvalidValue` when the configured path is empty.
    pub fn resolve_git_executable(&self) -> std::result::Result<PathBuf, ConfigError> {
        match &self.git_executable {
            Some(path) if path.as_os_str().is_empty() => Err(ConfigError::InvalidValue {
                section: "client".to_string(),
                key: "git_executable".to_string(),
                message: "path must not be empty".to_string(),
            }),
            Some(path) => Ok(path.clone()),
            None => ProcessBuilder::find("git").ok_or_else(|| ConfigError::MissingKey {
                section: "client".to_string(),
                key: "git_executable".to_string(),
            }),
        }
    }
}

/// One `[repositories.NAME]` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RepositoryConfig {
    pub remote_url: Option<String>,
    pub local_path: PathBuf,
    pub branch: Option<String>,
    pub tag: Option<String>,
}

impl RepositoryConfig {
    #[must_use]
    pub fn to_ref(&self) -> RepositoryRef {
        RepositoryRef::builder()
            .local_path(self.local_path.clone())
            .maybe_remote_url(self.remote_url.clone())
            .maybe_branch(self.branch.clone())
            .maybe_tag(self.tag.clone())
            .build()
    }
}
