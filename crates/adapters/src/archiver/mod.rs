// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! WorkspaceArchiver: produce a 7-zip archive of a directory's contents.

mod seven_zip;

pub use seven_zip::SevenZipArchiver;

#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeArchiver;

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("failed to spawn 7z: {0}")]
    Spawn(std::io::Error),
    #[error("7z exited with code {code:?}: {stderr}")]
    NonZeroExit { code: Option<i32>, stderr: String },
}

/// Archives a directory's contents, with paths relative to its root (§4.2).
///
/// The 7-zip format itself is treated as an external collaborator: no Rust
/// crate in this workspace's dependency set encodes it, so implementations
/// shell out to an installed `7z` binary.
#[async_trait]
pub trait Archiver: Send + Sync + 'static {
    async fn archive(&self, src_dir: &Path, archive_path: &Path) -> Result<(), ArchiveError>;
}
