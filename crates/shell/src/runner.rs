// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::CommandFailure;
use std::collections::HashMap;
use std::path::Path;
use tokio::process::Command;

/// Captured output of a successful command run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs a single command through the host shell, capturing both streams.
///
/// Per §4.6, this layer applies no timeout of its own — callers that need
/// one (e.g. `ArtifactInstaller`) build it in at their own boundary.
pub struct CommandRunner;

impl CommandRunner {
    /// Executes `command` via `sh -c` (the platform shell) with `env` merged
    /// into the inherited environment and `cwd` as the working directory.
    ///
    /// A non-zero exit raises [`CommandFailure::NonZeroExit`] carrying the
    /// exit code and both captured streams (decoded UTF-8 with lossy
    /// replacement). A missing executable or any other spawn failure raises
    /// [`CommandFailure::Spawn`].
    pub async fn execute(
        command: &str,
        env: &HashMap<String, String>,
        cwd: &Path,
    ) -> Result<CommandOutput, CommandFailure> {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command).current_dir(cwd).envs(env);

        let output = cmd.output().await.map_err(|source| CommandFailure::Spawn {
            command: command.to_string(),
            source,
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        match output.status.code() {
            Some(0) => Ok(CommandOutput { stdout, stderr }),
            Some(code) => Err(CommandFailure::NonZeroExit {
                command: command.to_string(),
                code,
                stdout,
                stderr,
            }),
            None => Err(CommandFailure::Signaled {
                command: command.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
