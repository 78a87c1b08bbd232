// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Raised by [`crate::CommandRunner::execute`] on any non-success outcome.
#[derive(Debug, Error)]
pub enum CommandFailure {
    #[error("command `{command}` exited with code {code}\nstdout: {stdout}\nstderr: {stderr}")]
    NonZeroExit {
        command: String,
        code: i32,
        stdout: String,
        stderr: String,
    },
    #[error("command `{command}` was terminated by a signal")]
    Signaled { command: String },
    #[error("command `{command}` timed out after {timeout_secs}s")]
    TimedOut { command: String, timeout_secs: u64 },
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
