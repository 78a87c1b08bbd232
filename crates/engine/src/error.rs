// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Aggregated error type for the job lifecycle (§7).

use thiserror::Error;
use tf_adapters::{ArchiveError, ArtifactInstallError, RepoSyncError};
use tf_client::FarmApiError;
use tf_diff::DiffError;
use tf_jobspec::SpecError;
use tf_shell::CommandFailure;

/// Any failure that can abandon a job mid-flight. `AgentLoop` catches this
/// at the job boundary and never lets it propagate past one iteration
/// (§7 Propagation policy, §10.4).
#[derive(Debug, Error)]
pub enum ExecutorError {
    #[error("farm api error: {0}")]
    FarmApi(#[from] FarmApiError),
    #[error("repo sync failed: {0}")]
    RepoSync(#[from] RepoSyncError),
    #[error("job spec error: {0}")]
    Spec(#[from] SpecError),
    #[error("artifact install failed: {0}")]
    ArtifactInstall(#[from] ArtifactInstallError),
    #[error("command failed: {0}")]
    Command(#[from] CommandFailure),
    #[error("diff engine error: {0}")]
    Diff(#[from] DiffError),
    #[error("workspace io error: {0}")]
    Workspace(#[source] std::io::Error),
}

/// Archive failures are logged, never propagated (§4.2, §4.9 ARCHIVED,
/// §7 ArchiveError) — callers fold an `ArchiveError` into a `tracing::warn!`
/// rather than this enum.
pub(crate) fn log_archive_failure(context: &str, error: ArchiveError) {
    tracing::warn!(context, error = %error, "workspace archive failed; continuing");
}
