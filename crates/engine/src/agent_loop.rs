// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! AgentLoop: the single cooperative loop that registers the host, polls for
//! work, and dispatches it to `TestExecutor` / `BenchExecutor` (§4.12).

use crate::executor::{BenchExecutor, JobContext, TestExecutor};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tf_adapters::{Archiver, RepoSyncer};
use tf_client::{FarmApi, HostLifecycle};
use tf_core::{HostStatus, JobKind, RunId, SystemInfo};
use tokio::sync::Notify;

/// How long the loop sleeps between `get-next-job` polls when there is no
/// work (§4.12, §5 Suspension points).
const POLL_INTERVAL: Duration = Duration::from_secs(60);

/// A cooperative stop flag the loop only observes between jobs, never mid-job
/// (§5 Cancellation). Cloning shares the same underlying flag.
#[derive(Clone, Default)]
pub struct StopSignal {
    flag: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests a stop. Safe to call from a signal handler task.
    pub fn signal(&self) {
        self.flag.store(true, Ordering::SeqCst);
        self.notify.notify_waiters();
    }

    pub fn is_set(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Sleeps for `duration`, waking early if a stop is signalled.
    async fn wait_idle(&self, duration: Duration) {
        tokio::select! {
            _ = tokio::time::sleep(duration) => {}
            _ = self.notify.notified() => {}
        }
    }
}

pub struct AgentLoop<F, R, A>
where
    F: FarmApi,
    R: RepoSyncer,
    A: Archiver,
{
    ctx: JobContext<F, R, A>,
    host: HostLifecycle<F>,
    grid_name: String,
    stop: StopSignal,
}

impl<F, R, A> AgentLoop<F, R, A>
where
    F: FarmApi,
    R: RepoSyncer,
    A: Archiver,
{
    pub fn new(ctx: JobContext<F, R, A>, client: Arc<F>, grid_name: impl Into<String>, stop: StopSignal) -> Self {
        let grid_name = grid_name.into();
        Self {
            host: HostLifecycle::new(client, grid_name.clone()),
            ctx,
            grid_name,
            stop,
        }
    }

    /// Runs until `stop` is signalled. Registration failure terminates
    /// immediately; no other error ever escapes this loop (§4.12, §7).
    pub async fn run(mut self, info: &SystemInfo) -> Result<(), tf_client::FarmApiError> {
        self.host.register(info).await?;
        self.set_status_best_effort(HostStatus::WaitingForTests).await;

        // Shared across both executors — the original keeps one
        // `current_test_run_id` variable for test and bench alike.
        // TODO: give each job kind its own tracked run id instead of sharing one.
        let mut current_run_id: Option<RunId> = None;

        while !self.stop.is_set() {
            let job = match self.ctx.farm.get_next_job(&self.grid_name).await {
                Ok(Some(job)) => job,
                Ok(None) => {
                    self.stop.wait_idle(POLL_INTERVAL).await;
                    continue;
                }
                Err(error) => {
                    tracing::warn!(%error, "get-next-job failed; will retry");
                    self.stop.wait_idle(POLL_INTERVAL).await;
                    continue;
                }
            };

            self.dispatch(job, &mut current_run_id).await;
            self.set_status_best_effort(HostStatus::WaitingForTests).await;
        }

        self.set_status_best_effort(HostStatus::Offline).await;
        self.host.deregister().await?;
        Ok(())
    }

    async fn dispatch(&self, job: tf_core::Job, current_run_id: &mut Option<RunId>) {
        match job.kind {
            JobKind::Test => {
                let result = match self.ctx.farm.get_scheduled_test(job.result_id).await {
                    Ok(result) => result,
                    Err(error) => {
                        tracing::warn!(%error, result_id = job.result_id.get(), "no matching TestResult for job; skipping");
                        return;
                    }
                };
                if let Err(error) = TestExecutor::execute(&self.ctx, &self.host, result, current_run_id).await {
                    tracing::error!(%error, "test job abandoned");
                }
            }
            JobKind::Bench => {
                let result = match self.ctx.farm.get_scheduled_benchmark(job.result_id).await {
                    Ok(result) => result,
                    Err(error) => {
                        tracing::warn!(%error, result_id = job.result_id.get(), "no matching BenchmarkResult for job; skipping");
                        return;
                    }
                };
                if let Err(error) = BenchExecutor::execute(&self.ctx, &self.host, result, current_run_id).await {
                    tracing::error!(%error, "benchmark job abandoned");
                }
            }
        }
    }

    async fn set_status_best_effort(&self, status: HostStatus) {
        if let Err(error) = self.host.set_status(status).await {
            tracing::warn!(%error, status = status.as_str(), "failed to update host status");
        }
    }
}

#[cfg(test)]
#[path = "agent_loop_tests.rs"]
mod tests;
