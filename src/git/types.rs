// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Value types passed to and returned from the clients.

use bon::Builder;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// One repository to operate on.
///
/// `remote_url` may be unset, meaning "use the remote already configured in the
/// working copy". `local_path` is the working directory for every command.
///
/// ```
/// use gitscm::git::RepositoryRef;
///
/// let repo = RepositoryRef::builder()
///     .local_path("/work/app")
///     .remote_url("https://example.com/app.git")
///     .build();
/// assert_eq!(repo.remote_url(), Some("https://example.com/app.git"));
/// assert!(repo.branch().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct RepositoryRef {
    #[builder(into)]
    local_path: PathBuf,
    #[builder(into)]
    remote_url: Option<String>,
    #[builder(into)]
    branch: Option<String>,
    #[builder(into)]
    tag: Option<String>,
}

impl RepositoryRef {
    /// Remote url, treating an empty string as unset.
    #[must_use]
    pub fn remote_url(&self) -> Option<&str> {
        non_empty(self.remote_url.as_deref())
    }

    #[must_use]
    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    #[must_use]
    pub fn branch(&self) -> Option<&str> {
        non_empty(self.branch.as_deref())
    }

    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        non_empty(self.tag.as_deref())
    }

    /// Copy with the remote url replaced (or kept when `url` is `None`).
    #[must_use]
    pub fn with_remote_url(mut self, url: Option<String>) -> Self {
        if url.is_some() {
            self.remote_url = url;
        }
        self
    }

    /// Copy with the local path replaced.
    #[must_use]
    pub fn with_local_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.local_path = path.into();
        self
    }
}

/// Treats `Some("")` the same as `None`.
#[must_use]
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Opaque commit identifier reported by a backend.
///
/// No length or format is assumed; only emptiness is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commit {
    id: String,
}

impl Commit {
    /// Wraps a trimmed identifier. Returns `None` when it is empty.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self {
                id: trimmed.to_string(),
            })
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
