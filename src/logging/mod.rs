// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tracing setup for the `gitscm` binary.
//!
//! ```text
//! init_logging(&LogConfig)
//!        |
//!        v
//!    registry
//!    |       |
//!    v       v
//! stderr    log file (optional)
//! GITSCM_LOG or "warn,gitscm=<level>"
//!           "<level>", no ANSI
//!        |
//!        v
//!    LogGuard (flushes the file writer on drop)
//!
//! LogLevel:  0=OFF  1=ERROR  2=WARN  3=INFO  4=DEBUG  5=TRACE
//! ```
//!
//! Backend command lines are logged at DEBUG, their output lines at TRACE.
//! Mutating repository operations (update, tag, clone) log at INFO.

use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::Path;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{ConfigError, Result};

/// Environment variable holding a full filter directive for console output.
/// It takes precedence over the configured console level.
pub const LOG_ENV_VAR: &str = "GITSCM_LOG";

/// Verbosity on the 0-5 scale used by `--log-level` and `[global]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LogLevel(u8);

impl Default for LogLevel {
    fn default() -> Self {
        Self::INFO
    }
}

impl LogLevel {
    pub const OFF: Self = Self(0);
    pub const ERROR: Self = Self(1);
    pub const WARN: Self = Self(2);
    pub const INFO: Self = Self(3);
    pub const DEBUG: Self = Self(4);
    pub const TRACE: Self = Self(5);

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` above 5.
    pub fn new(level: u8) -> std::result::Result<Self, ConfigError> {
        if level <= Self::TRACE.0 {
            Ok(Self(level))
        } else {
            Err(ConfigError::InvalidValue {
                section: "global".to_string(),
                key: "log_level".to_string(),
                message: format!("log level must be 0-5, got {level}"),
            })
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// `EnvFilter` level name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self.0 {
            0 => "off",
            1 => "error",
            2 => "warn",
            3 => "info",
            4 => "debug",
            _ => "trace",
        }
    }

    /// Console directive: this crate at `self`, everything else no louder
    /// than WARN.
    #[must_use]
    pub fn console_directive(self) -> String {
        if self <= Self::WARN {
            self.name().to_string()
        } else {
            format!("warn,gitscm={}", self.name())
        }
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = ConfigError;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

/// Logging settings, filled from `[global]` and the CLI.
#[derive(Debug, Clone, Builder)]
pub struct LogConfig {
    #[builder(setters(name = with_console_level), default = LogLevel::INFO)]
    console_level: LogLevel,
    #[builder(setters(name = with_file_level), default = LogLevel::TRACE)]
    file_level: LogLevel,
    #[builder(setters(name = with_log_file))]
    log_file: Option<String>,
    /// Colored console output; on when stderr is a terminal.
    #[builder(setters(name = with_ansi), default = std::io::stderr().is_terminal())]
    ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LogConfig {
    #[must_use]
    pub const fn console_level(&self) -> LogLevel {
        self.console_level
    }

    #[must_use]
    pub const fn file_level(&self) -> LogLevel {
        self.file_level
    }

    #[must_use]
    pub fn log_file(&self) -> Option<&str> {
        self.log_file.as_deref()
    }

    #[must_use]
    pub const fn ansi(&self) -> bool {
        self.ansi
    }

    /// Console filter: `GITSCM_LOG` when set and valid, otherwise derived
    /// from the console level.
    #[must_use]
    pub fn console_filter(&self) -> EnvFilter {
        EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(self.console_level.console_directive()))
    }
}

/// Keeps the file writer alive; pending lines are flushed on drop.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Installs the global subscriber.
///
/// Console output goes to stderr so branch lists and commit ids on stdout
/// can be piped. The log file is truncated on every run.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or a subscriber is
/// already installed.
///
/// ```no_run
/// use gitscm::logging::{LogConfig, LogLevel, init_logging};
///
/// # fn main() -> anyhow::Result<()> {
/// let config = LogConfig::builder()
///     .with_console_level(LogLevel::WARN)
///     .with_log_file("gitscm.log".to_string())
///     .build();
/// let _guard = init_logging(&config)?;
/// tracing::info!("written to gitscm.log only");
/// # Ok(())
/// # }
/// ```
pub fn init_logging(config: &LogConfig) -> Result<LogGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(config.ansi())
        .with_filter(config.console_filter());

    let (file_layer, file_guard) = match config.log_file() {
        Some(path) => {
            let (writer, guard) = open_log_file(Path::new(path))?;
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(EnvFilter::new(config.file_level().name()));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

/// Creates the log file (and its directory) behind a background writer.
fn open_log_file(path: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    Ok(tracing_appender::non_blocking(file))
}

#[cfg(test)]
mod tests;
