// gitscm: Git source control client
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output capture for a running child.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks --> Vec<String> each (lossy UTF-8)
//!   (wait + drain both readers) | deadline | cancel
//!   --> ProcessResult { exit_code, stdout_lines, stderr_lines }
//! ```
//!
//! The deadline covers draining too: a grandchild that inherited the pipes
//! cannot keep the call alive past it.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{trace, warn};

use super::builder::{ProcessBuilder, ProcessFlags};
use super::result::ProcessResult;
use crate::error::ProcessError;

type Reader = JoinHandle<Vec<String>>;

enum WaitOutcome {
    Finished(std::process::ExitStatus, Vec<String>, Vec<String>),
    TimedOut(Duration),
    Cancelled,
}

fn spawn_reader<R>(
    reader: Option<R>,
    process_name: &str,
    stream_name: &'static str,
    forward: bool,
) -> Option<Reader>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    reader.map(|reader| {
        let name = process_name.to_string();
        tokio::spawn(async move { read_lines(reader, &name, stream_name, forward).await })
    })
}

/// Strips the line terminator (`\n` or `\r\n`) and decodes lossily, so a
/// byte sequence that is not UTF-8 costs one replacement character, never
/// the rest of the stream.
pub(super) fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

async fn read_lines<R>(reader: R, process_name: &str, stream_name: &str, forward: bool) -> Vec<String>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut raw = Vec::new();
    let mut collected = Vec::new();
    loop {
        raw.clear();
        match reader.read_until(b'\n', &mut raw).await {
            Ok(0) => break,
            Ok(_) => {
                let line = decode_line(&raw);
                if forward {
                    trace!(process = %process_name, stream = %stream_name, line = %line, "output");
                }
                collected.push(line);
            }
            Err(e) => {
                warn!(
                    process = %process_name,
                    stream = %stream_name,
                    error = %e,
                    "error reading stream"
                );
                break;
            }
        }
    }
    collected
}

async fn join_reader(reader: Option<&mut Reader>) -> Vec<String> {
    match reader {
        Some(reader) => reader.await.unwrap_or_default(),
        None => Vec::new(),
    }
}

async fn deadline(timeout: Option<Duration>) {
    match timeout {
        Some(duration) => tokio::time::sleep(duration).await,
        None => std::future::pending().await,
    }
}

impl ProcessBuilder {
    /// Waits for the child and both output streams, bounded by the deadline
    /// and the token. On either, the child is killed and the readers aborted.
    pub(super) async fn run_child(
        &self,
        name: &str,
        cmd_line: &str,
        child: &mut Child,
        token: CancellationToken,
    ) -> Result<ProcessResult, ProcessError> {
        let forward = self.process_flags().contains(ProcessFlags::FORWARD_TO_LOG);
        let mut stdout_reader = spawn_reader(child.stdout.take(), name, "stdout", forward);
        let mut stderr_reader = spawn_reader(child.stderr.take(), name, "stderr", forward);

        let timeout = self.timeout_duration();
        let outcome = tokio::select! {
            finished = async {
                let status = child.wait().await;
                let stdout = join_reader(stdout_reader.as_mut()).await;
                let stderr = join_reader(stderr_reader.as_mut()).await;
                (status, stdout, stderr)
            } => {
                let (status, stdout, stderr) = finished;
                let status = status.map_err(|e| ProcessError::OutputError {
                    command: cmd_line.to_string(),
                    message: e.to_string(),
                })?;
                WaitOutcome::Finished(status, stdout, stderr)
            }
            () = deadline(timeout) => WaitOutcome::TimedOut(timeout.unwrap_or_default()),
            () = token.cancelled() => WaitOutcome::Cancelled,
        };

        let (status, stdout_lines, stderr_lines) = match outcome {
            WaitOutcome::Finished(status, stdout, stderr) => (status, stdout, stderr),
            WaitOutcome::TimedOut(duration) => {
                warn!(process = %name, timeout = ?duration, "process timed out");
                stop(child, [stdout_reader, stderr_reader]).await;
                return Err(ProcessError::Timeout {
                    command: cmd_line.to_string(),
                    timeout_secs: duration.as_secs(),
                });
            }
            WaitOutcome::Cancelled => {
                warn!(process = %name, "cancellation requested, terminating process");
                stop(child, [stdout_reader, stderr_reader]).await;
                return Err(ProcessError::Cancelled {
                    command: cmd_line.to_string(),
                });
            }
        };

        Ok(ProcessResult::new(
            status.code().unwrap_or(-1),
            stdout_lines,
            stderr_lines,
        ))
    }
}

/// Kills the child (a no-op once it has exited) and drops the readers.
async fn stop(child: &mut Child, readers: [Option<Reader>; 2]) {
    child.kill().await.ok();
    for reader in readers.into_iter().flatten() {
        reader.abort();
    }
}
