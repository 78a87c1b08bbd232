// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake repo sync for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{RepoSyncError, RepoSyncer};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tf_core::Repository;

/// Fake repo sync adapter. Each `sync()` call creates the destination
/// directory on disk (so engine code that lists its contents doesn't need
/// a separate fixture) and records the repository synced.
#[derive(Clone, Default)]
pub struct FakeRepoSync {
    inner: Arc<Mutex<FakeRepoSyncState>>,
}

#[derive(Default)]
struct FakeRepoSyncState {
    calls: Vec<String>,
    fail_for: HashMap<String, String>,
}

impl FakeRepoSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.inner.lock().calls.clone()
    }

    /// Make the next `sync()` for `repo_name` fail with `message`.
    pub fn fail_next(&self, repo_name: &str, message: &str) {
        self.inner.lock().fail_for.insert(repo_name.to_string(), message.to_string());
    }
}

#[async_trait]
impl RepoSyncer for FakeRepoSync {
    async fn sync(&self, repository: &Repository, repos_root: &Path) -> Result<PathBuf, RepoSyncError> {
        self.inner.lock().calls.push(repository.name.clone());

        if let Some(message) = self.inner.lock().fail_for.remove(&repository.name) {
            return Err(RepoSyncError::Git {
                name: repository.name.clone(),
                message,
            });
        }

        let dest = repos_root.join(&repository.name);
        std::fs::create_dir_all(&dest).map_err(|source| RepoSyncError::PrepareDir {
            name: repository.name.clone(),
            source,
        })?;
        Ok(dest)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
