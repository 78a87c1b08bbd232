// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tf-adapters: technology-specific adapters behind traits, each with a
//! production and a fake (test-support) implementation.

pub mod archiver;
pub mod installer;
pub mod repo_sync;

pub use archiver::{Archiver, ArchiveError, SevenZipArchiver};
pub use installer::{ArtifactInstallError, ArtifactInstaller};
pub use repo_sync::{Git2RepoSync, RepoSyncError, RepoSyncer};

#[cfg(any(test, feature = "test-support"))]
pub use archiver::FakeArchiver;
#[cfg(any(test, feature = "test-support"))]
pub use repo_sync::FakeRepoSync;
