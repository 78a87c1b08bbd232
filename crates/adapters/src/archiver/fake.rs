// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake archiver for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{ArchiveError, Archiver};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Fake archiver. Writes a marker file in place of a real archive, and can
/// be told to fail so callers can exercise the "archive failure is
/// non-fatal" path (§4.2).
#[derive(Clone, Default)]
pub struct FakeArchiver {
    inner: Arc<Mutex<FakeArchiverState>>,
}

#[derive(Default)]
struct FakeArchiverState {
    calls: Vec<(PathBuf, PathBuf)>,
    should_fail: bool,
}

impl FakeArchiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.inner.lock().should_fail = fail;
    }

    pub fn calls(&self) -> Vec<(PathBuf, PathBuf)> {
        self.inner.lock().calls.clone()
    }
}

#[async_trait]
impl Archiver for FakeArchiver {
    async fn archive(&self, src_dir: &Path, archive_path: &Path) -> Result<(), ArchiveError> {
        self.inner.lock().calls.push((src_dir.to_path_buf(), archive_path.to_path_buf()));

        if self.inner.lock().should_fail {
            return Err(ArchiveError::NonZeroExit {
                code: Some(2),
                stderr: "fake archive failure".to_string(),
            });
        }

        std::fs::write(archive_path, b"fake-7z-archive").map_err(ArchiveError::Spawn)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
