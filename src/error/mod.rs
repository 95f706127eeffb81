// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            ScmError (~24 bytes)
//!                   |
//!   +------+-------+-------+------+
//!   |      |       |       |      |
//!   v      v       v       v      v
//!  Git  Process  Config   Io    Other
//!  Box    Box     Box     Box  Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Git      CapabilityUnavailable, CommandFailed, MissingRemoteUrl
//!   Process  WorkingDirNotFound, SpawnFailed, Timeout, Cancelled
//!   Config   ParseError, MissingKey, InvalidValue
//! ```
//!
//! Library code returns [`ScmResult`]; the CLI and config layers use the
//! `anyhow`-backed [`Result`] alias and attach context.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ScmError`].
pub type ScmResult<T> = std::result::Result<T, ScmError>;

/// Top-level library error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum ScmError {
    /// Source control operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

impl ScmError {
    /// Returns the git error, if this is one.
    #[must_use]
    pub fn as_git(&self) -> Option<&GitError> {
        match self {
            Self::Git(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the process error, if this is one.
    #[must_use]
    pub fn as_process(&self) -> Option<&ProcessError> {
        match self {
            Self::Process(err) => Some(err),
            _ => None,
        }
    }
}

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ScmError {
                fn from(err: $error) -> Self {
                    ScmError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    ProcessError => Process,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Source control operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The client cannot operate on the current execution agent.
    #[error("{reason} (agent: {agent})")]
    CapabilityUnavailable { agent: String, reason: String },

    /// The backend process exited non-zero. The message is the backend's own
    /// stderr text, joined according to the client's join policy.
    #[error("{message}")]
    CommandFailed { command: String, message: String },

    /// The operation needs a remote URL but the repository has none.
    #[error("{operation} requires a remote url (local path: {path})")]
    MissingRemoteUrl {
        operation: &'static str,
        path: String,
    },

    /// No repository with this name is configured.
    #[error("repository '{name}' is not configured")]
    RepositoryNotConfigured { name: String },
}

impl GitError {
    /// Returns the backend message for a failed command.
    #[must_use]
    pub fn command_message(&self) -> Option<&str> {
        match self {
            Self::CommandFailed { message, .. } => Some(message),
            _ => None,
        }
    }
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Working directory does not exist.
    #[error("working directory does not exist: {path}")]
    WorkingDirNotFound { path: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process timed out.
    #[error("process '{command}' timed out after {timeout_secs} seconds")]
    Timeout { command: String, timeout_secs: u64 },

    /// Process was cancelled before it completed.
    #[error("process '{command}' was cancelled")]
    Cancelled { command: String },

    /// Failed to read process output.
    #[error("failed to read output from process '{command}': {message}")]
    OutputError { command: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
