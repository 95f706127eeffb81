// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config: options, inis
//!   repo:   branches, update, tag, last-commit, clone, validate
//! ```

pub mod config;
pub mod repo;
