// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Description of one child process: program, argv, working directory,
//! extra environment and deadline.
//!
//! ```text
//! ProcessBuilder::new(program)         find(name) --> PATH lookup, memoized
//!   .arg/.args  .cwd  .env  .timeout  .name  .flags
//! ProcessFlags: FORWARD_TO_LOG
//! ```

use bitflags::bitflags;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::Duration;

/// Memoized `PATH` lookups; `git` is resolved once per run.
static RESOLVED: OnceLock<Mutex<BTreeMap<String, PathBuf>>> = OnceLock::new();

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ProcessFlags: u32 {
        /// Echo every captured line to tracing at TRACE.
        const FORWARD_TO_LOG = 0x01;
    }
}

/// A process to spawn.
///
/// Stdin is closed and both output streams are captured. The exit code is
/// reported as data in [`super::ProcessResult`]; it is never an error.
#[derive(Debug)]
pub struct ProcessBuilder {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    env: BTreeMap<String, String>,
    flags: ProcessFlags,
    name: Option<String>,
    timeout: Option<Duration>,
}

impl ProcessBuilder {
    /// `program` may be a path or a bare name left for the OS to resolve.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            env: BTreeMap::new(),
            flags: ProcessFlags::empty(),
            name: None,
            timeout: None,
        }
    }

    /// Absolute path of `program` on `PATH`, or `None`.
    #[must_use]
    pub fn find(program: &str) -> Option<PathBuf> {
        let resolved = RESOLVED.get_or_init(Mutex::default);
        let mut resolved = resolved.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(path) = resolved.get(program) {
            return Some(path.clone());
        }
        let path = which::which(program).ok()?;
        resolved.insert(program.to_string(), path.clone());
        Some(path)
    }

    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_string_lossy().into_owned());
        self
    }

    #[must_use]
    pub fn args<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        args.into_iter().fold(self, |builder, arg| builder.arg(arg))
    }

    /// Directory the child starts in; it must exist when the process runs.
    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Variable set on top of the inherited environment.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub const fn flags(mut self, flags: ProcessFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Name used in log fields instead of the program's file stem.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Bound on the whole run, output draining included. `None` waits
    /// indefinitely.
    #[must_use]
    pub const fn timeout(mut self, duration: Option<Duration>) -> Self {
        self.timeout = duration;
        self
    }

    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    pub(super) fn args_slice(&self) -> &[String] {
        &self.args
    }

    pub(super) const fn working_dir(&self) -> Option<&PathBuf> {
        self.cwd.as_ref()
    }

    pub(super) const fn environment(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    pub(super) const fn process_flags(&self) -> ProcessFlags {
        self.flags
    }

    pub(super) fn name_override(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub(super) const fn timeout_duration(&self) -> Option<Duration> {
        self.timeout
    }
}
