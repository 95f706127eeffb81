// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted agent for client tests.
//!
//! Returns queued results in order (an empty success once the queue is
//! drained) and records every request it receives.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

use crate::core::agent::{Agent, CommandRequest, RemoteDispatch};
use crate::core::process::ProcessResult;
use crate::error::{ProcessError, ScmResult};

#[derive(Debug, Clone)]
pub(crate) struct FakeAgent {
    inner: Arc<Mutex<FakeAgentInner>>,
    install_dir: Option<String>,
}

#[derive(Debug, Default)]
struct FakeAgentInner {
    responses: VecDeque<ProcessResult>,
    requests: Vec<CommandRequest>,
    install_dir_calls: usize,
}

impl FakeAgent {
    /// Agent with remote dispatch, reporting `/opt/gitscm` as install dir.
    pub(crate) fn new() -> Self {
        Self {
            inner: Arc::default(),
            install_dir: Some("/opt/gitscm".to_string()),
        }
    }

    /// Agent that cannot evaluate functions remotely.
    pub(crate) fn without_dispatch() -> Self {
        Self {
            install_dir: None,
            ..Self::new()
        }
    }

    pub(crate) fn respond(&self, result: ProcessResult) -> &Self {
        self.lock().responses.push_back(result);
        self
    }

    pub(crate) fn requests(&self) -> Vec<CommandRequest> {
        self.lock().requests.clone()
    }

    /// Rendered argument lines of every request, in order.
    pub(crate) fn lines(&self) -> Vec<String> {
        self.lock()
            .requests
            .iter()
            .map(CommandRequest::arguments_line)
            .collect()
    }

    pub(crate) fn install_dir_calls(&self) -> usize {
        self.lock().install_dir_calls
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeAgentInner> {
        self.inner.lock().expect("fake agent lock poisoned")
    }
}

#[async_trait]
impl Agent for FakeAgent {
    fn name(&self) -> &str {
        "fake"
    }

    async fn execute(
        &self,
        request: CommandRequest,
        token: &CancellationToken,
    ) -> ScmResult<ProcessResult> {
        if token.is_cancelled() {
            return Err(ProcessError::Cancelled {
                command: request.command_line(),
            }
            .into());
        }
        let mut inner = self.lock();
        inner.requests.push(request);
        Ok(inner
            .responses
            .pop_front()
            .unwrap_or_else(|| ProcessResult::ok(Vec::<String>::new())))
    }

    fn remote_dispatch(&self) -> Option<&dyn RemoteDispatch> {
        self.install_dir.as_ref().map(|_| self as &dyn RemoteDispatch)
    }

    fn combine_path(&self, dir: &str, file: &str) -> String {
        format!("{dir}/{file}")
    }
}

#[async_trait]
impl RemoteDispatch for FakeAgent {
    async fn install_dir(&self) -> ScmResult<String> {
        self.lock().install_dir_calls += 1;
        Ok(self.install_dir.clone().unwrap_or_default())
    }
}
