// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process execution and agents.
//!
//! ```text
//!           core
//!            |
//!      +-----+-----+
//!      |           |
//!      v           v
//!    agent      process
//!      |           |
//!  Agent trait  Builder
//!  LocalAgent   ProcessResult
//!  CommandRequest
//! ```

pub mod agent;
pub mod process;
