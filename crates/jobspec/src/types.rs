// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! On-disk job description shapes, mirroring the original `TestCase` /
//! `BenchmarkCase` dataclasses.

use serde::{Deserialize, Serialize};

/// A gold/new file pair to diff, plus the encoding to read both as.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffPair {
    /// Path to the known-good file, relative to the test directory.
    pub gold: String,
    /// Path to the freshly produced file. May contain magic variables.
    pub new: String,
    pub encoding: String,
}

fn default_type() -> String {
    "native".to_string()
}

/// `test.testfarm`: a single test's description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub description: String,
    pub owner: String,
    #[serde(default = "default_type")]
    pub r#type: String,
    pub command: String,
    pub output: String,
    #[serde(default)]
    pub pre_steps: Vec<String>,
    #[serde(default)]
    pub post_steps: Vec<String>,
    #[serde(default)]
    pub diffs: Vec<DiffPair>,
    /// Path to a file whose content is uploaded alongside `complete-test` as
    /// `AtomicResults` (§4.9 COMPLETED). Absent in most test cases.
    #[serde(default)]
    pub atomic_results: Option<String>,
}

/// `benchmark.testfarm`: a single benchmark's description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkCase {
    pub name: String,
    pub description: String,
    pub owner: String,
    pub iterations: u32,
    pub command: String,
    pub results: String,
    pub output: String,
    #[serde(default)]
    pub pre_bench_steps: Vec<String>,
    #[serde(default)]
    pub post_bench_steps: Vec<String>,
    #[serde(default)]
    pub pre_iter_steps: Vec<String>,
    #[serde(default)]
    pub post_iter_steps: Vec<String>,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
