// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! BenchExecutor: drives a single `BenchmarkResult` through ACQUIRED →
//! CLEANED → CLONED → SPEC_LOADED → (ARTIFACTS_INSTALLED)? →
//! pre_bench_steps → N × (pre_iter_steps, command, post_iter_steps) →
//! post_bench_steps → COMPLETED (§4.10).

use super::{build_step_env, clean_and_clone, read_text_lossy, JobContext};
use crate::error::ExecutorError;
use crate::workspace::WorkspaceMgr;
use std::collections::HashMap;
use std::path::Path;
use tf_adapters::{Archiver, ArtifactInstaller, RepoSyncer};
use tf_client::{CompleteBenchmarkRequest, FarmApi, HostLifecycle};
use tf_core::{BenchmarkResult, HostStatus, MagicVars, RunId, RunStatus};
use tf_shell::CommandRunner;

pub struct BenchExecutor;

impl BenchExecutor {
    /// Up through artifact install this mirrors [`super::TestExecutor`]'s
    /// stricter propagation (a clone, spec-load, or install failure
    /// abandons the job uncaught). Within the step phase, though, §4.10
    /// states a step failure "aborts the remaining iterations and the job
    /// is marked failed" rather than being abandoned, so failures there are
    /// caught locally and reported via `complete-benchmark(status="failed")`
    /// instead of propagating. Diff checking and workspace archiving are not
    /// performed for benchmarks (§4.10).
    pub async fn execute<F, R, A>(
        ctx: &JobContext<F, R, A>,
        host: &HostLifecycle<F>,
        result: BenchmarkResult,
        current_run_id: &mut Option<RunId>,
    ) -> Result<(), ExecutorError>
    where
        F: FarmApi,
        R: RepoSyncer,
        A: Archiver,
    {
        let local_repo = clean_and_clone(ctx, &result.repository).await?;
        let spec_dir = local_repo.join(&result.benchmark.path);
        let bench_case = tf_jobspec::load_benchmark_case(&spec_dir.join("benchmark.testfarm"))?;

        if *current_run_id != Some(result.run.id) {
            host.set_status(HostStatus::InstallingArtifacts).await?;
            match ArtifactInstaller::install_all(&result.run.artifacts, &ctx.hostname, ctx.vars.temp_dir()).await {
                Ok(()) => {
                    *current_run_id = Some(result.run.id);
                    WorkspaceMgr::cleanup_work_dir(ctx.vars.work_dir()).map_err(ExecutorError::Workspace)?;
                }
                Err(install_err) => {
                    host.set_status(HostStatus::FailedToInstallArtifacts).await?;
                    let execution_output = read_text_lossy(&spec_dir.join(ctx.vars.expand(&bench_case.output)))
                        .await
                        .map_err(ExecutorError::Workspace)?;
                    ctx.farm
                        .complete_benchmark(CompleteBenchmarkRequest {
                            benchmark_result_id: result.id,
                            status: RunStatus::Failed.as_str().to_string(),
                            execution_output,
                        })
                        .await?;
                    WorkspaceMgr::cleanup_work_dir(ctx.vars.work_dir()).map_err(ExecutorError::Workspace)?;
                    return Err(ExecutorError::ArtifactInstall(install_err));
                }
            }
        }

        host.set_status(HostStatus::RunningBenchmark).await?;

        let env = build_step_env(&ctx.pythonpath_var, &local_repo);
        let step_result: Result<(), ExecutorError> = async {
            run_steps(&bench_case.pre_bench_steps, &ctx.vars, &env, &spec_dir).await?;
            for iteration in 1..=bench_case.iterations {
                let iter_vars = ctx.vars.with_bench_iter(iteration);
                run_steps(&bench_case.pre_iter_steps, &iter_vars, &env, &spec_dir).await?;
                CommandRunner::execute(&iter_vars.expand(&bench_case.command), &env, &spec_dir).await?;
                run_steps(&bench_case.post_iter_steps, &iter_vars, &env, &spec_dir).await?;
            }
            run_steps(&bench_case.post_bench_steps, &ctx.vars, &env, &spec_dir).await?;
            Ok(())
        }
        .await;

        let status = match &step_result {
            Ok(()) => RunStatus::Passed,
            Err(error) => {
                tracing::warn!(%error, "benchmark step failed; aborting remaining iterations");
                RunStatus::Failed
            }
        };

        let execution_output = read_text_lossy(&spec_dir.join(ctx.vars.expand(&bench_case.output)))
            .await
            .map_err(ExecutorError::Workspace)?;

        ctx.farm
            .complete_benchmark(CompleteBenchmarkRequest {
                benchmark_result_id: result.id,
                status: status.as_str().to_string(),
                execution_output,
            })
            .await?;

        if status == RunStatus::Passed {
            let results_path = spec_dir.join(ctx.vars.expand(&bench_case.results));
            let results_text = read_text_lossy(&results_path).await.map_err(ExecutorError::Workspace)?;
            let results_value = serde_json::from_str(&results_text).unwrap_or_else(|_| serde_json::Value::String(results_text.clone()));
            ctx.farm.upload_benchmark_results(result.id, results_value).await?;
        }

        Ok(())
    }
}

async fn run_steps(steps: &[String], vars: &MagicVars, env: &HashMap<String, String>, cwd: &Path) -> Result<(), ExecutorError> {
    for step in steps {
        CommandRunner::execute(&vars.expand(step), env, cwd).await?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "bench_executor_tests.rs"]
mod tests;
