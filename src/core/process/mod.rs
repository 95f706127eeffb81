// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .env() .timeout() .flags()
//!   .run() / .run_with_cancellation(token)
//!       --> tokio::process::Command
//!           read stdout/stderr line by line (lossy UTF-8)
//!           deadline / cancellation (draining included) --> kill
//!       --> ProcessResult { exit_code, stdout_lines, stderr_lines }
//! ```

pub mod builder;
mod io;
mod result;
mod runner;

pub use builder::{ProcessBuilder, ProcessFlags};
pub use result::ProcessResult;
