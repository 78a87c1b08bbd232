// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job: a single scheduled unit returned by `get-next-job`.

use crate::result::ResultId;
use crate::run::RunId;
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a scheduled job.
    pub struct JobId;
}

/// Discriminates which executor (§4.9/§4.10) should handle a [`Job`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobKind {
    Test,
    Bench,
}

/// The lightweight unit handed back by `get-next-job`. It identifies *which*
/// result record (`result_id`) to fetch in full via `get-scheduled-test` /
/// `get-scheduled-benchmark` before any work begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    #[serde(rename = "Id")]
    pub id: JobId,
    #[serde(rename = "Type")]
    pub kind: JobKind,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "GridName")]
    pub grid_name: String,
    #[serde(rename = "RunId")]
    pub run_id: RunId,
    #[serde(rename = "ResultId")]
    pub result_id: ResultId,
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
