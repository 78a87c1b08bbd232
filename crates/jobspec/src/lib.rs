// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tf-jobspec: parses `test.testfarm` / `benchmark.testfarm` job descriptions.

mod error;
mod types;

pub use error::SpecError;
pub use types::{BenchmarkCase, DiffPair, TestCase};

use std::path::Path;

/// Reads and parses `test.testfarm` at `path` into a [`TestCase`].
///
/// Unknown JSON fields are ignored; missing optional step lists default to
/// empty (§4.8). A missing file or malformed JSON fails the job.
pub fn load_test_case(path: &Path) -> Result<TestCase, SpecError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SpecError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SpecError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and parses `benchmark.testfarm` at `path` into a [`BenchmarkCase`].
pub fn load_benchmark_case(path: &Path) -> Result<BenchmarkCase, SpecError> {
    let raw = std::fs::read_to_string(path).map_err(|source| SpecError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| SpecError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
