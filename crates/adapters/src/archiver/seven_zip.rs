// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::{ArchiveError, Archiver};
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

/// Shells out to the `7z` CLI (`7z a <archive> .`, run with `src_dir` as the
/// working directory so archive members are relative to its root).
#[derive(Clone, Default)]
pub struct SevenZipArchiver;

impl SevenZipArchiver {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Archiver for SevenZipArchiver {
    async fn archive(&self, src_dir: &Path, archive_path: &Path) -> Result<(), ArchiveError> {
        let output = Command::new("7z")
            .arg("a")
            .arg(archive_path)
            .arg(".")
            .current_dir(src_dir)
            .output()
            .await
            .map_err(ArchiveError::Spawn)?;

        if output.status.success() {
            Ok(())
        } else {
            Err(ArchiveError::NonZeroExit {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            })
        }
    }
}
