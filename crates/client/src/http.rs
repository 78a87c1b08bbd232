// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::FarmApiError;
use async_trait::async_trait;
use serde::Serialize;
use std::path::Path;
use std::time::Duration;
use tf_core::{Artifact, ArtifactId, BenchmarkResult, Host, HostId, Job, ResultId, SystemInfo, TestResult};

/// Body for `complete-test` (§6).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompleteTestRequest {
    #[serde(rename = "TestResultId")]
    pub test_result_id: ResultId,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "ExecutionOutput")]
    pub execution_output: String,
    /// Content of `test_case.atomic_results`, or empty if the test case
    /// didn't define one (§4.9 COMPLETED, §9 arity unification).
    #[serde(rename = "AtomicResults")]
    pub atomic_results: String,
}

/// Body for `complete-benchmark` (§6).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompleteBenchmarkRequest {
    #[serde(rename = "BenchmarkResultId")]
    pub benchmark_result_id: ResultId,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "ExecutionOutput")]
    pub execution_output: String,
}

#[derive(Serialize)]
struct RegisterHostRequest<'a> {
    #[serde(rename = "GridName")]
    grid_name: &'a str,
    #[serde(rename = "Hostname")]
    hostname: &'a str,
    #[serde(rename = "RAM")]
    ram: u64,
    #[serde(rename = "Cores")]
    cores: u32,
    #[serde(rename = "Type")]
    host_type: &'a str,
}

#[derive(Serialize)]
struct UpdateHostStatusRequest {
    #[serde(rename = "Id")]
    id: HostId,
    #[serde(rename = "Status")]
    status: String,
}

/// Typed RPC surface over the Farm API's HTTP/JSON and multipart endpoints.
#[async_trait]
pub trait FarmApi: Send + Sync + 'static {
    async fn register_host(&self, grid_name: &str, info: &SystemInfo) -> Result<Host, FarmApiError>;
    async fn unregister_host(&self, host_id: HostId) -> Result<(), FarmApiError>;
    async fn update_host_status(&self, host_id: HostId, status: &str) -> Result<(), FarmApiError>;
    async fn get_next_job(&self, grid_name: &str) -> Result<Option<Job>, FarmApiError>;
    async fn get_scheduled_test(&self, result_id: ResultId) -> Result<TestResult, FarmApiError>;
    async fn get_scheduled_benchmark(&self, result_id: ResultId) -> Result<BenchmarkResult, FarmApiError>;
    async fn get_artifact(&self, artifact_id: ArtifactId) -> Result<Artifact, FarmApiError>;
    async fn complete_test(&self, request: CompleteTestRequest) -> Result<(), FarmApiError>;
    async fn complete_benchmark(&self, request: CompleteBenchmarkRequest) -> Result<(), FarmApiError>;
    async fn upload_diff(
        &self,
        test_result_id: ResultId,
        name: &str,
        status: &str,
        report_path: Option<&Path>,
    ) -> Result<(), FarmApiError>;
    async fn upload_temp_dir_archive(&self, test_result_id: ResultId, archive_path: Option<&Path>) -> Result<(), FarmApiError>;
    async fn upload_benchmark_results(&self, benchmark_result_id: ResultId, results: serde_json::Value) -> Result<(), FarmApiError>;
}

/// `reqwest`-backed implementation of [`FarmApi`].
pub struct FarmClient {
    http: reqwest::Client,
    base_url: String,
}

impl FarmClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn check_status(response: reqwest::Response, endpoint: &'static str) -> Result<reqwest::Response, FarmApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status().as_u16();
            let reason = response.status().canonical_reason().unwrap_or("unknown").to_string();
            tracing::warn!(endpoint, status, reason = %reason, "farm api returned non-2xx");
            Err(FarmApiError::Status { endpoint, status, reason })
        }
    }
}

#[async_trait]
impl FarmApi for FarmClient {
    async fn register_host(&self, grid_name: &str, info: &SystemInfo) -> Result<Host, FarmApiError> {
        const EP: &str = "register-host";
        let body = RegisterHostRequest {
            grid_name,
            hostname: &info.hostname,
            ram: info.ram_gib,
            cores: info.cores,
            host_type: info.host_type,
        };
        let response = self
            .http
            .post(self.url(EP))
            .json(&body)
            .send()
            .await
            .map_err(|source| FarmApiError::Transport { endpoint: EP, source })?;
        let response = Self::check_status(response, EP).await?;
        response.json().await.map_err(|source| FarmApiError::Decode { endpoint: EP, source })
    }

    async fn unregister_host(&self, host_id: HostId) -> Result<(), FarmApiError> {
        const EP: &str = "unregister-host";
        let response = self
            .http
            .get(self.url(EP))
            .query(&[("Id", host_id.get())])
            .send()
            .await
            .map_err(|source| FarmApiError::Transport { endpoint: EP, source })?;
        Self::check_status(response, EP).await?;
        Ok(())
    }

    async fn update_host_status(&self, host_id: HostId, status: &str) -> Result<(), FarmApiError> {
        const EP: &str = "update-host-status";
        let body = UpdateHostStatusRequest { id: host_id, status: status.to_string() };
        let response = self
            .http
            .post(self.url(EP))
            .json(&body)
            .send()
            .await
            .map_err(|source| FarmApiError::Transport { endpoint: EP, source })?;
        Self::check_status(response, EP).await?;
        Ok(())
    }

    async fn get_next_job(&self, grid_name: &str) -> Result<Option<Job>, FarmApiError> {
        const EP: &str = "get-next-job";
        let response = self
            .http
            .get(self.url(EP))
            .query(&[("GridName", grid_name)])
            .send()
            .await
            .map_err(|source| FarmApiError::Transport { endpoint: EP, source })?;
        let response = Self::check_status(response, EP).await?;
        let bytes = response.bytes().await.map_err(|source| FarmApiError::Decode { endpoint: EP, source })?;
        if bytes.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|_| FarmApiError::Status { endpoint: EP, status: 0, reason: "malformed job body".to_string() })
    }

    async fn get_scheduled_test(&self, result_id: ResultId) -> Result<TestResult, FarmApiError> {
        const EP: &str = "get-scheduled-test";
        let response = self
            .http
            .get(self.url(EP))
            .query(&[("TestResultId", result_id.get())])
            .send()
            .await
            .map_err(|source| FarmApiError::Transport { endpoint: EP, source })?;
        let response = Self::check_status(response, EP).await?;
        response.json().await.map_err(|source| FarmApiError::Decode { endpoint: EP, source })
    }

    async fn get_scheduled_benchmark(&self, result_id: ResultId) -> Result<BenchmarkResult, FarmApiError> {
        const EP: &str = "get-scheduled-benchmark";
        let response = self
            .http
            .get(self.url(EP))
            .query(&[("BenchmarkResultId", result_id.get())])
            .send()
            .await
            .map_err(|source| FarmApiError::Transport { endpoint: EP, source })?;
        let response = Self::check_status(response, EP).await?;
        response.json().await.map_err(|source| FarmApiError::Decode { endpoint: EP, source })
    }

    async fn get_artifact(&self, artifact_id: ArtifactId) -> Result<Artifact, FarmApiError> {
        const EP: &str = "artifact";
        let response = self
            .http
            .get(self.url(EP))
            .query(&[("id", artifact_id.get())])
            .send()
            .await
            .map_err(|source| FarmApiError::Transport { endpoint: EP, source })?;
        let response = Self::check_status(response, EP).await?;
        response.json().await.map_err(|source| FarmApiError::Decode { endpoint: EP, source })
    }

    async fn complete_test(&self, request: CompleteTestRequest) -> Result<(), FarmApiError> {
        const EP: &str = "complete-test";
        let response = self
            .http
            .post(self.url(EP))
            .json(&request)
            .send()
            .await
            .map_err(|source| FarmApiError::Transport { endpoint: EP, source })?;
        Self::check_status(response, EP).await?;
        Ok(())
    }

    async fn complete_benchmark(&self, request: CompleteBenchmarkRequest) -> Result<(), FarmApiError> {
        const EP: &str = "complete-benchmark";
        let response = self
            .http
            .post(self.url(EP))
            .json(&request)
            .send()
            .await
            .map_err(|source| FarmApiError::Transport { endpoint: EP, source })?;
        Self::check_status(response, EP).await?;
        Ok(())
    }

    async fn upload_diff(
        &self,
        test_result_id: ResultId,
        name: &str,
        status: &str,
        report_path: Option<&Path>,
    ) -> Result<(), FarmApiError> {
        const EP: &str = "upload-diff";
        let mut form = reqwest::multipart::Form::new()
            .text("TestResultId", test_result_id.get().to_string())
            .text("Name", name.to_string())
            .text("Status", status.to_string());

        if let Some(path) = report_path {
            if path.exists() {
                let bytes = tokio::fs::read(path).await.map_err(|source| FarmApiError::ReadUpload {
                    path: path.display().to_string(),
                    source,
                })?;
                let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
                form = form.part("report", reqwest::multipart::Part::bytes(bytes).file_name(file_name));
            }
        }

        let response = self
            .http
            .post(self.url(EP))
            .multipart(form)
            .send()
            .await
            .map_err(|source| FarmApiError::Transport { endpoint: EP, source })?;
        Self::check_status(response, EP).await?;
        Ok(())
    }

    async fn upload_temp_dir_archive(&self, test_result_id: ResultId, archive_path: Option<&Path>) -> Result<(), FarmApiError> {
        const EP: &str = "upload-temp-dir-archive";
        let mut form = reqwest::multipart::Form::new().text("TestResultId", test_result_id.get().to_string());

        if let Some(path) = archive_path {
            if path.exists() {
                let bytes = tokio::fs::read(path).await.map_err(|source| FarmApiError::ReadUpload {
                    path: path.display().to_string(),
                    source,
                })?;
                let file_name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
                form = form.part("archive", reqwest::multipart::Part::bytes(bytes).file_name(file_name));
            }
        }

        let response = self
            .http
            .post(self.url(EP))
            .multipart(form)
            .send()
            .await
            .map_err(|source| FarmApiError::Transport { endpoint: EP, source })?;
        Self::check_status(response, EP).await?;
        Ok(())
    }

    async fn upload_benchmark_results(&self, benchmark_result_id: ResultId, results: serde_json::Value) -> Result<(), FarmApiError> {
        const EP: &str = "upload-benchmark-results";
        let body = serde_json::json!({
            "BenchmarkResultId": benchmark_result_id,
            "Results": results,
        });
        let response = self
            .http
            .post(self.url(EP))
            .json(&body)
            .send()
            .await
            .map_err(|source| FarmApiError::Transport { endpoint: EP, source })?;
        Self::check_status(response, EP).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
