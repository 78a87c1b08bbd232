// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake Farm API client for testing `tf-engine` without a real server.
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::error::FarmApiError;
use crate::http::{CompleteBenchmarkRequest, CompleteTestRequest, FarmApi};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::path::Path;
use std::sync::Arc;
use tf_core::{Artifact, ArtifactId, BenchmarkResult, Host, HostId, Job, ResultId, SystemInfo, TestResult};

/// One call made against a [`FakeFarmClient`], recorded in invocation order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    RegisterHost { grid_name: String },
    UnregisterHost { host_id: HostId },
    UpdateHostStatus { host_id: HostId, status: String },
    GetNextJob { grid_name: String },
    GetScheduledTest { result_id: ResultId },
    GetScheduledBenchmark { result_id: ResultId },
    GetArtifact { artifact_id: ArtifactId },
    CompleteTest(CompleteTestRequest),
    CompleteBenchmark(CompleteBenchmarkRequest),
    UploadDiff { test_result_id: ResultId, name: String, status: String, had_report: bool },
    UploadTempDirArchive { test_result_id: ResultId, had_archive: bool },
    UploadBenchmarkResults { benchmark_result_id: ResultId, results: serde_json::Value },
}

#[derive(Default)]
struct FakeFarmClientState {
    calls: Vec<RecordedCall>,
    host: Option<Host>,
    next_jobs: VecDeque<Option<Job>>,
    scheduled_tests: VecDeque<TestResult>,
    scheduled_benchmarks: VecDeque<BenchmarkResult>,
    artifacts: VecDeque<Artifact>,
    fail_endpoint: Option<&'static str>,
}

/// In-memory stand-in for [`FarmApi`], matching the recorded-calls + queued-
/// response pattern used by `tf-adapters`'s `FakeRepoSync`/`FakeArchiver`.
#[derive(Clone, Default)]
pub struct FakeFarmClient {
    inner: Arc<Mutex<FakeFarmClientState>>,
}

impl FakeFarmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.inner.lock().calls.clone()
    }

    /// Seed the `Host` returned by `register_host`.
    pub fn set_registered_host(&self, host: Host) {
        self.inner.lock().host = Some(host);
    }

    /// Queue the next job `get_next_job` should return (`None` for "no work").
    pub fn push_next_job(&self, job: Option<Job>) {
        self.inner.lock().next_jobs.push_back(job);
    }

    pub fn push_scheduled_test(&self, result: TestResult) {
        self.inner.lock().scheduled_tests.push_back(result);
    }

    pub fn push_scheduled_benchmark(&self, result: BenchmarkResult) {
        self.inner.lock().scheduled_benchmarks.push_back(result);
    }

    pub fn push_artifact(&self, artifact: Artifact) {
        self.inner.lock().artifacts.push_back(artifact);
    }

    /// Make the named endpoint fail, once, with a `FarmApiError::Status`.
    pub fn fail_next_call_to(&self, endpoint: &'static str) {
        self.inner.lock().fail_endpoint = Some(endpoint);
    }

    fn maybe_fail(&self, endpoint: &'static str) -> Result<(), FarmApiError> {
        let mut state = self.inner.lock();
        if state.fail_endpoint == Some(endpoint) {
            state.fail_endpoint = None;
            return Err(FarmApiError::Status { endpoint, status: 500, reason: "fake failure".to_string() });
        }
        Ok(())
    }
}

#[async_trait]
impl FarmApi for FakeFarmClient {
    async fn register_host(&self, grid_name: &str, _info: &SystemInfo) -> Result<Host, FarmApiError> {
        self.maybe_fail("register-host")?;
        self.inner.lock().calls.push(RecordedCall::RegisterHost { grid_name: grid_name.to_string() });
        self.inner
            .lock()
            .host
            .clone()
            .ok_or(FarmApiError::Status { endpoint: "register-host", status: 0, reason: "no host seeded".to_string() })
    }

    async fn unregister_host(&self, host_id: HostId) -> Result<(), FarmApiError> {
        self.maybe_fail("unregister-host")?;
        self.inner.lock().calls.push(RecordedCall::UnregisterHost { host_id });
        Ok(())
    }

    async fn update_host_status(&self, host_id: HostId, status: &str) -> Result<(), FarmApiError> {
        self.maybe_fail("update-host-status")?;
        self.inner
            .lock()
            .calls
            .push(RecordedCall::UpdateHostStatus { host_id, status: status.to_string() });
        Ok(())
    }

    async fn get_next_job(&self, grid_name: &str) -> Result<Option<Job>, FarmApiError> {
        self.maybe_fail("get-next-job")?;
        let mut state = self.inner.lock();
        state.calls.push(RecordedCall::GetNextJob { grid_name: grid_name.to_string() });
        Ok(state.next_jobs.pop_front().flatten())
    }

    async fn get_scheduled_test(&self, result_id: ResultId) -> Result<TestResult, FarmApiError> {
        self.maybe_fail("get-scheduled-test")?;
        let mut state = self.inner.lock();
        state.calls.push(RecordedCall::GetScheduledTest { result_id });
        state
            .scheduled_tests
            .pop_front()
            .ok_or(FarmApiError::Status { endpoint: "get-scheduled-test", status: 0, reason: "none queued".to_string() })
    }

    async fn get_scheduled_benchmark(&self, result_id: ResultId) -> Result<BenchmarkResult, FarmApiError> {
        self.maybe_fail("get-scheduled-benchmark")?;
        let mut state = self.inner.lock();
        state.calls.push(RecordedCall::GetScheduledBenchmark { result_id });
        state.scheduled_benchmarks.pop_front().ok_or(FarmApiError::Status {
            endpoint: "get-scheduled-benchmark",
            status: 0,
            reason: "none queued".to_string(),
        })
    }

    async fn get_artifact(&self, artifact_id: ArtifactId) -> Result<Artifact, FarmApiError> {
        self.maybe_fail("artifact")?;
        let mut state = self.inner.lock();
        state.calls.push(RecordedCall::GetArtifact { artifact_id });
        state
            .artifacts
            .pop_front()
            .ok_or(FarmApiError::Status { endpoint: "artifact", status: 0, reason: "none queued".to_string() })
    }

    async fn complete_test(&self, request: CompleteTestRequest) -> Result<(), FarmApiError> {
        self.maybe_fail("complete-test")?;
        self.inner.lock().calls.push(RecordedCall::CompleteTest(request));
        Ok(())
    }

    async fn complete_benchmark(&self, request: CompleteBenchmarkRequest) -> Result<(), FarmApiError> {
        self.maybe_fail("complete-benchmark")?;
        self.inner.lock().calls.push(RecordedCall::CompleteBenchmark(request));
        Ok(())
    }

    async fn upload_diff(
        &self,
        test_result_id: ResultId,
        name: &str,
        status: &str,
        report_path: Option<&Path>,
    ) -> Result<(), FarmApiError> {
        self.maybe_fail("upload-diff")?;
        self.inner.lock().calls.push(RecordedCall::UploadDiff {
            test_result_id,
            name: name.to_string(),
            status: status.to_string(),
            had_report: report_path.map(|p| p.exists()).unwrap_or(false),
        });
        Ok(())
    }

    async fn upload_temp_dir_archive(&self, test_result_id: ResultId, archive_path: Option<&Path>) -> Result<(), FarmApiError> {
        self.maybe_fail("upload-temp-dir-archive")?;
        self.inner.lock().calls.push(RecordedCall::UploadTempDirArchive {
            test_result_id,
            had_archive: archive_path.map(|p| p.exists()).unwrap_or(false),
        });
        Ok(())
    }

    async fn upload_benchmark_results(&self, benchmark_result_id: ResultId, results: serde_json::Value) -> Result<(), FarmApiError> {
        self.maybe_fail("upload-benchmark-results")?;
        self.inner
            .lock()
            .calls
            .push(RecordedCall::UploadBenchmarkResults { benchmark_result_id, results });
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
