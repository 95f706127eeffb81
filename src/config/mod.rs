// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for gitscm.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. --ini files
//! 3. gitscm.toml (cwd, optional)
//! 4. GITSCM_* env vars
//! 5. --set overrides
//! 6. dedicated CLI flags (--client, --git, --timeout, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! GITSCM_CLIENT__KIND=embedded            → client.kind = "embedded"
//! GITSCM_CLIENT__TIMEOUT_SECS=30          → client.timeout_secs = 30
//! GITSCM_GLOBAL__OUTPUT_LOG_LEVEL=4       → global.output_log_level = 4
//! ```
//!
//! # Repositories
//!
//! ```toml
//! [repositories.app]
//! remote_url = "https://example.com/app.git"
//! local_path = "/work/app"
//! branch = "main"
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, GitError, Result, ScmResult};
use crate::git::RepositoryRef;

pub use loader::ConfigLoader;
use types::{ClientConfig, ClientKind, GlobalConfig, RepositoryConfig};

/// File picked up from the current directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "gitscm.toml";

/// Prefix for configuration environment variables.
pub const ENV_PREFIX: &str = "GITSCM";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Backend selection.
    pub client: ClientConfig,
    /// Named repositories.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub repositories: BTreeMap<String, RepositoryConfig>,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use gitscm::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("ci/gitscm.toml")
    ///     .add_toml_file_optional("gitscm.toml")
    ///     .with_env_prefix("GITSCM")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks settings that deserialization alone cannot.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` for a repository without `local_path`,
    /// and `ConfigError::InvalidValue` for an empty embedded tool name or an
    /// empty git executable path.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (name, repo) in &self.repositories {
            if repo.local_path.as_os_str().is_empty() {
                return Err(ConfigError::MissingKey {
                    section: format!("repositories.{name}"),
                    key: "local_path".to_string(),
                });
            }
        }

        match self.client.kind {
            ClientKind::Embedded if self.client.embedded_tool.trim().is_empty() => {
                Err(ConfigError::InvalidValue {
                    section: "client".to_string(),
                    key: "embedded_tool".to_string(),
                    message: "tool name must not be empty".to_string(),
                })
            }
            ClientKind::Standard => self.client.resolve_git_executable().map(|_| ()),
            ClientKind::Embedded => Ok(()),
        }
    }

    /// Repository reference for a configured name.
    ///
    /// # Errors
    ///
    /// Returns `GitError::RepositoryNotConfigured` for an unknown name.
    pub fn repository(&self, name: &str) -> ScmResult<RepositoryRef> {
        self.repositories
            .get(name)
            .map(RepositoryConfig::to_ref)
            .ok_or_else(|| {
                GitError::RepositoryNotConfigured {
                    name: name.to_string(),
                }
                .into()
            })
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_client_options(&mut options);
        self.format_repository_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.get().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.get().to_string(),
        );
        options.insert("global.log_file".into(), fmt_path(self.global.log_file.as_ref()));
    }

    fn format_client_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("client.kind".into(), self.client.kind.to_string());
        options.insert(
            "client.git_executable".into(),
            fmt_path(self.client.git_executable.as_ref()),
        );
        options.insert(
            "client.embedded_tool".into(),
            self.client.embedded_tool.clone(),
        );
        options.insert(
            "client.install_dir".into(),
            fmt_path(self.client.install_dir.as_ref()),
        );
        options.insert(
            "client.timeout_secs".into(),
            self.client.timeout_secs.to_string(),
        );
        options.insert(
            "client.stderr_join".into(),
            self.client.stderr_join.to_string(),
        );
    }

    fn format_repository_options(&self, options: &mut BTreeMap<String, String>) {
        for (name, repo) in &self.repositories {
            let prefix = format!("repositories.{name}");
            options.insert(
                format!("{prefix}.local_path"),
                repo.local_path.display().to_string(),
            );
            for (key, value) in [
                ("remote_url", &repo.remote_url),
                ("branch", &repo.branch),
                ("tag", &repo.tag),
            ] {
                if let Some(value) = value {
                    options.insert(format!("{prefix}.{key}"), value.clone());
                }
            }
        }
    }
}

fn fmt_path(path: Option<&PathBuf>) -> String {
    path.map_or_else(String::new, |p| p.display().to_string())
}
