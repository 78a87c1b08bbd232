// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TestExecutor / BenchExecutor: drive a single job through its lifecycle
//! (§4.9, §4.10).

mod bench_executor;
mod test_executor;

pub use bench_executor::BenchExecutor;
pub use test_executor::TestExecutor;

use crate::error::ExecutorError;
use crate::workspace::WorkspaceMgr;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tf_adapters::{Archiver, RepoSyncer};
use tf_client::FarmApi;
use tf_core::{MagicVars, Repository};

/// Everything shared by `TestExecutor` and `BenchExecutor`: the adapters,
/// `MagicVars`, and host-identifying strings every stage needs.
pub struct JobContext<F, R, A>
where
    F: FarmApi,
    R: RepoSyncer,
    A: Archiver,
{
    pub farm: Arc<F>,
    pub repo_sync: Arc<R>,
    pub archiver: Arc<A>,
    pub vars: MagicVars,
    pub hostname: String,
    /// Env var name the local repository checkout is prepended to before
    /// each step (§9 PYTHONPATH legacy note). Defaults to `PYTHONPATH`.
    pub pythonpath_var: String,
}

/// Clean `$__TF_WORK_DIR__`, then sync `repository` into
/// `$__TF_TESTS_REPOS_DIR__/{name}` (§4.9 ACQUIRED → CLEANED → CLONED).
async fn clean_and_clone<F, R, A>(ctx: &JobContext<F, R, A>, repository: &Repository) -> Result<std::path::PathBuf, ExecutorError>
where
    F: FarmApi,
    R: RepoSyncer,
    A: Archiver,
{
    WorkspaceMgr::cleanup_work_dir(ctx.vars.work_dir()).map_err(ExecutorError::Workspace)?;
    let local_repo = ctx.repo_sync.sync(repository, ctx.vars.tests_repos_dir()).await?;
    Ok(local_repo)
}

/// Builds the env map each step runs with: the local repository checkout
/// prepended to the configured PYTHONPATH-style variable, ahead of whatever
/// was already on it in the agent's own environment (§4.9 Steps, §9).
fn build_step_env(pythonpath_var: &str, local_repo: &Path) -> HashMap<String, String> {
    let mut parts = vec![local_repo.to_path_buf()];
    if let Ok(existing) = std::env::var(pythonpath_var) {
        parts.extend(std::env::split_paths(&existing));
    }
    let joined = std::env::join_paths(parts).unwrap_or_default();

    let mut env = HashMap::new();
    env.insert(pythonpath_var.to_string(), joined.to_string_lossy().into_owned());
    env
}

/// Reads a file as UTF-8 with lossy replacement, the way `execution_output`
/// and `atomic_results` are read (§4.9 COMPLETED).
async fn read_text_lossy(path: &Path) -> std::io::Result<String> {
    let bytes = tokio::fs::read(path).await?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
