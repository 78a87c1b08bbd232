// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{credentialed_url, redacted_host, RepoSyncError, RepoSyncer};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tf_core::Repository;

/// Clones or pulls via `git2` (libgit2 bindings), grounded on the original's
/// `clone_repository` (`git.Repo.clone_from` / `origin.pull()`).
#[derive(Clone, Default)]
pub struct Git2RepoSync;

impl Git2RepoSync {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RepoSyncer for Git2RepoSync {
    async fn sync(&self, repository: &Repository, repos_root: &Path) -> Result<PathBuf, RepoSyncError> {
        let local_dir = repos_root.join(&repository.name);
        let repository = repository.clone();
        let local_dir_clone = local_dir.clone();

        tokio::task::spawn_blocking(move || sync_blocking(&repository, &local_dir_clone))
            .await
            .map_err(|join_err| RepoSyncError::Git {
                name: "<join>".to_string(),
                message: join_err.to_string(),
            })??;

        Ok(local_dir)
    }
}

fn sync_blocking(repository: &Repository, local_dir: &Path) -> Result<(), RepoSyncError> {
    let url = credentialed_url(repository);
    let git_dir = local_dir.join(".git");

    if git_dir.exists() {
        tracing::info!(repository = %repository.name, host = %redacted_host(repository), "pulling latest changes");
        pull(&url, local_dir).map_err(|e| RepoSyncError::Git {
            name: repository.name.clone(),
            message: e.message().to_string(),
        })
    } else {
        std::fs::create_dir_all(local_dir).map_err(|source| RepoSyncError::PrepareDir {
            name: repository.name.clone(),
            source,
        })?;
        tracing::info!(repository = %repository.name, host = %redacted_host(repository), "cloning new repository");
        git2::Repository::clone(&url, local_dir).map(|_| ()).map_err(|e| RepoSyncError::Git {
            name: repository.name.clone(),
            message: e.message().to_string(),
        })
    }
}

fn pull(url: &str, local_dir: &Path) -> Result<(), git2::Error> {
    let repo = git2::Repository::open(local_dir)?;
    let mut remote = repo.find_remote("origin")?;
    remote.disconnect().ok();
    // Reassign the credentialed URL each run; tokens can be rotated server-side.
    repo.remote_set_url("origin", url)?;
    let mut remote = repo.find_remote("origin")?;
    remote.fetch(&["+refs/heads/*:refs/remotes/origin/*"], None, None)?;

    let head = repo.head()?;
    let branch = head.shorthand().unwrap_or("main").to_string();
    let fetch_head = repo.find_reference("FETCH_HEAD")?;
    let fetch_commit = repo.reference_to_annotated_commit(&fetch_head)?;
    let analysis = repo.merge_analysis(&[&fetch_commit])?;

    if analysis.0.is_up_to_date() {
        return Ok(());
    }
    if analysis.0.is_fast_forward() {
        let refname = format!("refs/heads/{branch}");
        let mut reference = repo.find_reference(&refname)?;
        reference.set_target(fetch_commit.id(), "fast-forward")?;
        repo.set_head(&refname)?;
        repo.checkout_head(Some(git2::build::CheckoutBuilder::default().force()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "git2_impl_tests.rs"]
mod tests;
