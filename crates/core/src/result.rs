// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TestResult / BenchmarkResult: the server-side record the agent fills in.

use crate::definition::JobDefinition;
use crate::repository::Repository;
use crate::run::Run;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a test or benchmark result record.
    pub struct ResultId;
}

/// A scheduled test, fully resolved via `get-scheduled-test`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    #[serde(rename = "Id")]
    pub id: ResultId,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "ExecutionStartTimestamp")]
    pub execution_start: Option<DateTime<Utc>>,
    #[serde(rename = "ExecutionEndTimestamp")]
    pub execution_end: Option<DateTime<Utc>>,
    #[serde(rename = "ExecutionOutput")]
    pub execution_output: Option<String>,
    #[serde(rename = "TestRun")]
    pub run: Run,
    #[serde(rename = "Test")]
    pub test: JobDefinition,
    #[serde(rename = "Repository")]
    pub repository: Repository,
}

/// A scheduled benchmark, fully resolved via `get-scheduled-benchmark`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    #[serde(rename = "Id")]
    pub id: ResultId,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "ExecutionStartTimestamp")]
    pub execution_start: Option<DateTime<Utc>>,
    #[serde(rename = "ExecutionEndTimestamp")]
    pub execution_end: Option<DateTime<Utc>>,
    #[serde(rename = "ExecutionOutput")]
    pub execution_output: Option<String>,
    #[serde(rename = "BenchmarkRun")]
    pub run: Run,
    #[serde(rename = "Benchmark")]
    pub benchmark: JobDefinition,
    #[serde(rename = "Repository")]
    pub repository: Repository,
}

/// Outcome of a single diff check, reported to the server via `upload-diff`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffStatus {
    Passed,
    Failed,
    NoGoldFile,
    NoNewFile,
}

impl DiffStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffStatus::Passed => "passed",
            DiffStatus::Failed => "failed",
            DiffStatus::NoGoldFile => "no gold file",
            DiffStatus::NoNewFile => "no new file",
        }
    }

    /// A failing diff always fails the owning test (§4.9 DIFF_CHECKED).
    pub fn fails_test(&self) -> bool {
        !matches!(self, DiffStatus::Passed)
    }
}

impl std::fmt::Display for DiffStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Overall test/benchmark completion status reported via `complete-test` /
/// `complete-benchmark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Passed,
    Failed,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Passed => "passed",
            RunStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
