// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Completed process snapshot.

use serde::Serialize;

/// Exit code plus line-split output of a finished process.
///
/// Exit code 0 is the only success signal; stdout content says nothing about
/// whether the process succeeded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessResult {
    exit_code: i32,
    stdout_lines: Vec<String>,
    stderr_lines: Vec<String>,
}

impl ProcessResult {
    #[must_use]
    pub const fn new(exit_code: i32, stdout_lines: Vec<String>, stderr_lines: Vec<String>) -> Self {
        Self {
            exit_code,
            stdout_lines,
            stderr_lines,
        }
    }

    /// Successful result with the given stdout lines.
    pub fn ok<I, S>(stdout: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(0, stdout.into_iter().map(Into::into).collect(), Vec::new())
    }

    /// Failed result with the given exit code and stderr lines.
    pub fn failed<I, S>(exit_code: i32, stderr: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            exit_code,
            Vec::new(),
            stderr.into_iter().map(Into::into).collect(),
        )
    }

    /// Returns the process exit code (0 = success).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[must_use]
    pub fn stdout_lines(&self) -> &[String] {
        &self.stdout_lines
    }

    #[must_use]
    pub fn stderr_lines(&self) -> &[String] {
        &self.stderr_lines
    }

    /// Returns true if the process exited successfully (code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Consumes the result, returning the stdout lines.
    #[must_use]
    pub fn into_stdout_lines(self) -> Vec<String> {
        self.stdout_lines
    }
}
