// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command requests sent to an agent.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// One argument of a backend command.
///
/// Values that carry user data (urls, branch and tag names) are `Quoted` so the
/// rendered command line keeps embedded whitespace intact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandArg {
    /// Fixed token of the command grammar, rendered as-is.
    Plain(String),
    /// User-supplied value, rendered in double quotes.
    Quoted(String),
}

impl CommandArg {
    pub fn plain(value: impl Into<String>) -> Self {
        Self::Plain(value.into())
    }

    pub fn quoted(value: impl Into<String>) -> Self {
        Self::Quoted(value.into())
    }

    /// Raw value, as passed in argv.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Plain(value) | Self::Quoted(value) => value,
        }
    }

    /// Command-line rendering of this argument.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Plain(value) => value.clone(),
            Self::Quoted(value) => format!("\"{}\"", value.replace('"', "\\\"")),
        }
    }
}

impl From<&str> for CommandArg {
    fn from(value: &str) -> Self {
        Self::plain(value)
    }
}

/// A command to run on an agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRequest {
    program: String,
    args: Vec<CommandArg>,
    working_dir: PathBuf,
    timeout: Option<Duration>,
}

impl CommandRequest {
    pub fn new(program: impl Into<String>, working_dir: impl AsRef<Path>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.as_ref().to_path_buf(),
            timeout: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<CommandArg>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, A>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<CommandArg>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub fn args_slice(&self) -> &[CommandArg] {
        &self.args
    }

    #[must_use]
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Raw argument values, as passed in argv.
    pub fn arg_values(&self) -> impl Iterator<Item = &str> {
        self.args.iter().map(CommandArg::value)
    }

    /// The arguments alone, rendered with quoting (verb first).
    #[must_use]
    pub fn arguments_line(&self) -> String {
        self.args
            .iter()
            .map(CommandArg::render)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Program followed by the rendered arguments.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            let _ = write!(line, " {}", arg.render());
        }
        line
    }
}
