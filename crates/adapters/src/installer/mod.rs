// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ArtifactInstaller: execute the per-artifact install script for a run.

use std::path::Path;
use thiserror::Error;
use tf_core::{unescape_install_script, Artifact};
use tf_shell::{CommandFailure, CommandRunner};

#[derive(Debug, Error)]
pub enum ArtifactInstallError {
    #[error("failed to write install script for {artifact}: {source}")]
    WriteScript {
        artifact: String,
        #[source]
        source: std::io::Error,
    },
    #[error("install script for {artifact} failed: {source}")]
    ScriptFailed {
        artifact: String,
        #[source]
        source: CommandFailure,
    },
}

/// Installs each [`Artifact`] in order (§4.5).
///
/// Aggregate exit semantics: the overall result is the last artifact's
/// outcome — any failure marks the whole install as failed, but every
/// artifact in the list is still attempted.
pub struct ArtifactInstaller;

impl ArtifactInstaller {
    /// Runs every artifact's install script, in order, against `hostname`.
    /// `temp_dir` is the scratch directory the script is written to and
    /// removed from regardless of outcome. Returns `Ok(())` only if every
    /// artifact installed successfully; otherwise the *last* error
    /// encountered is returned after all artifacts have been attempted.
    pub async fn install_all(artifacts: &[Artifact], hostname: &str, temp_dir: &Path) -> Result<(), ArtifactInstallError> {
        let mut last_result = Ok(());

        for artifact in artifacts {
            last_result = Self::install_one(artifact, hostname, temp_dir).await;
        }

        last_result
    }

    async fn install_one(artifact: &Artifact, hostname: &str, temp_dir: &Path) -> Result<(), ArtifactInstallError> {
        let script_path = temp_dir.join("artifact_install_script.py");
        let decoded = unescape_install_script(&artifact.definition.install_script);

        let write_result = tokio::fs::write(&script_path, &decoded)
            .await
            .map_err(|source| ArtifactInstallError::WriteScript {
                artifact: artifact.definition.name.clone(),
                source,
            });

        let run_result = match write_result {
            Ok(()) => {
                let command = format!(
                    "python {} --build {} --hostname {} --timeout 60",
                    script_path.display(),
                    artifact.build_id,
                    hostname,
                );
                CommandRunner::execute(&command, &Default::default(), temp_dir)
                    .await
                    .map(|_| ())
                    .map_err(|source| ArtifactInstallError::ScriptFailed {
                        artifact: artifact.definition.name.clone(),
                        source,
                    })
            }
            Err(e) => Err(e),
        };

        let _ = tokio::fs::remove_file(&script_path).await;
        run_result
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
