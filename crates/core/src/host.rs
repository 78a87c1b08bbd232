// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host identity as registered with the Farm API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a registered host.
    pub struct HostId;
}

/// This agent's registration record, as returned by `register-host`.
///
/// Field names mirror the Farm API's PascalCase wire contract; `ram` is
/// `None` when the host did not report memory (mirrors the Python
/// `Optional[int]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Host {
    #[serde(rename = "Id")]
    pub id: HostId,
    #[serde(rename = "GridId")]
    pub grid_id: i64,
    #[serde(rename = "Type")]
    pub host_type: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Hostname")]
    pub hostname: String,
    #[serde(rename = "Cores")]
    pub cores: u32,
    #[serde(rename = "RAM")]
    pub ram: Option<u64>,
    #[serde(rename = "CreationTimestamp")]
    pub created: DateTime<Utc>,
    #[serde(rename = "LastUpdateTimestamp")]
    pub updated: DateTime<Utc>,
}

/// The fixed host-status vocabulary used by the core (§4.11).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStatus {
    WaitingForTests,
    InstallingArtifacts,
    RunningTest,
    RunningBenchmark,
    FailedToInstallArtifacts,
    Offline,
}

impl HostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            HostStatus::WaitingForTests => "Waiting for tests...",
            HostStatus::InstallingArtifacts => "Installing artifacts...",
            HostStatus::RunningTest => "Running test...",
            HostStatus::RunningBenchmark => "Running benchmark...",
            HostStatus::FailedToInstallArtifacts => "Failed to install artifacts",
            HostStatus::Offline => "Offline",
        }
    }
}

impl std::fmt::Display for HostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// System info collected at registration time: hostname, physical core
/// count, and RAM rounded to the nearest GiB. Grounded on the original
/// `get_system_info()` (`psutil.cpu_count(logical=False)`,
/// `round(ram_bytes / 2**30)`).
#[derive(Debug, Clone, Serialize)]
pub struct SystemInfo {
    #[serde(rename = "Hostname")]
    pub hostname: String,
    #[serde(rename = "RAM")]
    pub ram_gib: u64,
    #[serde(rename = "Cores")]
    pub cores: u32,
    #[serde(rename = "Type")]
    pub host_type: &'static str,
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
