// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test / benchmark definitions: the repository-relative pointer to a
//! `.testfarm` job description, nested inside a [`crate::result::TestResult`]
//! or [`crate::result::BenchmarkResult`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a test or benchmark definition.
    pub struct DefinitionId;
}

/// Shared shape for both `Test` and `Benchmark` definitions on the wire —
/// mirrors the original's `Test` dataclass (`id`, `repository_name`,
/// `suite_name`, `path`, `name`, `owner`, `creation_timestamp`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDefinition {
    #[serde(rename = "Id")]
    pub id: DefinitionId,
    #[serde(rename = "RepositoryName")]
    pub repository_name: String,
    #[serde(rename = "SuiteName")]
    pub suite_name: String,
    /// Directory, relative to the repository root, containing the
    /// `test.testfarm` / `benchmark.testfarm` description file.
    #[serde(rename = "Path")]
    pub path: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Owner")]
    pub owner: String,
    #[serde(rename = "CreationTimestamp")]
    pub created: DateTime<Utc>,
}

#[cfg(test)]
#[path = "definition_tests.rs"]
mod tests;
