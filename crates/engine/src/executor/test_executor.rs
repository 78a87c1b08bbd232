// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TestExecutor: drives a single `TestResult` through ACQUIRED → CLEANED →
//! CLONED → SPEC_LOADED → (ARTIFACTS_INSTALLED)? → steps → DIFF_CHECKED →
//! ARCHIVED → COMPLETED (§4.9).

use super::{build_step_env, clean_and_clone, read_text_lossy, JobContext};
use crate::error::ExecutorError;
use crate::workspace::WorkspaceMgr;
use std::path::PathBuf;
use tf_adapters::{Archiver, ArtifactInstaller, RepoSyncer};
use tf_client::{CompleteTestRequest, FarmApi, HostLifecycle};
use tf_core::{DiffStatus, HostStatus, RunId, RunStatus, TestResult};
use tf_shell::CommandRunner;

pub struct TestExecutor;

impl TestExecutor {
    /// Runs `result` to completion. Only the artifact-install-failure branch
    /// and the full happy path ever call `complete-test`; any other stage
    /// failure (clone, spec load, a step's command) propagates uncaught so
    /// the caller abandons the job without reporting it (§4.9, §7, grounded
    /// on the original `test_farm_windows_service.py`'s outer try/except,
    /// which never calls `complete_test` on a generic exception).
    pub async fn execute<F, R, A>(
        ctx: &JobContext<F, R, A>,
        host: &HostLifecycle<F>,
        result: TestResult,
        current_run_id: &mut Option<RunId>,
    ) -> Result<(), ExecutorError>
    where
        F: FarmApi,
        R: RepoSyncer,
        A: Archiver,
    {
        let local_repo = clean_and_clone(ctx, &result.repository).await?;
        let spec_dir = local_repo.join(&result.test.path);
        let test_case = tf_jobspec::load_test_case(&spec_dir.join("test.testfarm"))?;

        if *current_run_id != Some(result.run.id) {
            host.set_status(HostStatus::InstallingArtifacts).await?;
            match ArtifactInstaller::install_all(&result.run.artifacts, &ctx.hostname, ctx.vars.temp_dir()).await {
                Ok(()) => {
                    *current_run_id = Some(result.run.id);
                    WorkspaceMgr::cleanup_work_dir(ctx.vars.work_dir()).map_err(ExecutorError::Workspace)?;
                }
                Err(install_err) => {
                    host.set_status(HostStatus::FailedToInstallArtifacts).await?;
                    let execution_output = read_text_lossy(&spec_dir.join(ctx.vars.expand(&test_case.output)))
                        .await
                        .map_err(ExecutorError::Workspace)?;
                    ctx.farm
                        .complete_test(CompleteTestRequest {
                            test_result_id: result.id,
                            status: RunStatus::Failed.as_str().to_string(),
                            execution_output,
                            atomic_results: String::new(),
                        })
                        .await?;
                    WorkspaceMgr::cleanup_work_dir(ctx.vars.work_dir()).map_err(ExecutorError::Workspace)?;
                    return Err(ExecutorError::ArtifactInstall(install_err));
                }
            }
        }

        host.set_status(HostStatus::RunningTest).await?;

        let env = build_step_env(&ctx.pythonpath_var, &local_repo);
        for step in test_case.pre_steps.iter().chain(std::iter::once(&test_case.command)).chain(test_case.post_steps.iter()) {
            CommandRunner::execute(&ctx.vars.expand(step), &env, &spec_dir).await?;
        }

        let mut test_passed = true;
        for diff in &test_case.diffs {
            let diff_name = PathBuf::from(&diff.gold)
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| diff.gold.clone());

            let gold_path = spec_dir.join(&diff.gold);
            if !gold_path.is_file() {
                test_passed = false;
                ctx.farm.upload_diff(result.id, &diff_name, DiffStatus::NoGoldFile.as_str(), None).await?;
                continue;
            }

            let new_path = PathBuf::from(ctx.vars.expand(&diff.new));
            if !new_path.is_file() {
                test_passed = false;
                ctx.farm.upload_diff(result.id, &diff_name, DiffStatus::NoNewFile.as_str(), None).await?;
                continue;
            }

            let report_path = ctx.vars.work_dir().join(format!("{diff_name}.html"));
            let identical = tf_diff::DiffEngine::diff_to_report(&gold_path, &new_path, &report_path)?;
            if identical {
                ctx.farm.upload_diff(result.id, &diff_name, DiffStatus::Passed.as_str(), None).await?;
            } else {
                test_passed = false;
                ctx.farm.upload_diff(result.id, &diff_name, DiffStatus::Failed.as_str(), Some(&report_path)).await?;
            }
        }

        let archive_path = ctx.vars.temp_dir().join("result_temp_archive.7z");
        if WorkspaceMgr::archive_work_dir(&*ctx.archiver, ctx.vars.work_dir(), &archive_path).await.is_some() {
            if let Err(error) = ctx.farm.upload_temp_dir_archive(result.id, Some(&archive_path)).await {
                tracing::warn!(%error, "failed to upload work dir archive; continuing");
            }
        }

        let execution_output = read_text_lossy(&spec_dir.join(ctx.vars.expand(&test_case.output)))
            .await
            .map_err(ExecutorError::Workspace)?;
        let atomic_results = match &test_case.atomic_results {
            Some(relative) => {
                let path = spec_dir.join(ctx.vars.expand(relative));
                if path.is_file() {
                    read_text_lossy(&path).await.map_err(ExecutorError::Workspace)?
                } else {
                    String::new()
                }
            }
            None => String::new(),
        };

        let status = if test_passed { RunStatus::Passed } else { RunStatus::Failed };
        ctx.farm
            .complete_test(CompleteTestRequest {
                test_result_id: result.id,
                status: status.as_str().to_string(),
                execution_output,
                atomic_results,
            })
            .await?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "test_executor_tests.rs"]
mod tests;
