// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Grid and Run: the grouping that shares an installed artifact set.

use crate::artifact::Artifact;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a test or benchmark run.
    pub struct RunId;
}

/// The logical bucket this agent belongs to. Externally owned; the agent
/// only ever references it by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub name: String,
}

/// A grouping of jobs sharing the same installed artifact set.
///
/// Generic over the artifact-bearing shape shared by `TestRun` and
/// `BenchmarkRun` on the wire — both carry the same fields under the same
/// names, so one struct covers both (the `kind` discriminant in [`Job`]
/// tells the executor which job description format to expect, not this
/// type).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    #[serde(rename = "Id")]
    pub id: RunId,
    #[serde(rename = "RepositoryName")]
    pub repository_name: String,
    #[serde(rename = "SuiteName")]
    pub suite_name: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "GridName")]
    pub grid_name: String,
    #[serde(rename = "CreationTimestamp")]
    pub created: DateTime<Utc>,
    #[serde(rename = "Artifacts", default)]
    pub artifacts: Vec<Artifact>,
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
