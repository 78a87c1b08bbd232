// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! WorkspaceMgr: create, clean, and archive the per-job working directory
//! (§4.2).

use crate::error::log_archive_failure;
use std::path::Path;
use tf_adapters::Archiver;

pub struct WorkspaceMgr;

impl WorkspaceMgr {
    /// If `work_dir` exists, removes it recursively, then recreates it
    /// empty. Removal failures are logged but not fatal (the recreate step
    /// below will surface a real problem); recreation failures are fatal,
    /// matching §4.2's asymmetric severity.
    pub fn cleanup_work_dir(work_dir: &Path) -> std::io::Result<()> {
        if work_dir.exists() {
            if let Err(error) = std::fs::remove_dir_all(work_dir) {
                tracing::warn!(work_dir = %work_dir.display(), %error, "failed to remove work dir; recreating over it");
            }
        }
        std::fs::create_dir_all(work_dir)
    }

    /// Archives `work_dir`'s contents to `archive_path`. Archiving failures
    /// are logged and swallowed: the caller receives `None` and must skip
    /// the archive upload, without failing the job (§4.2, §4.9 ARCHIVED).
    pub async fn archive_work_dir<A: Archiver>(archiver: &A, work_dir: &Path, archive_path: &Path) -> Option<()> {
        match archiver.archive(work_dir, archive_path).await {
            Ok(()) => Some(()),
            Err(error) => {
                log_archive_failure("archive_work_dir", error);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
