// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Host registration/status/deregistration bookkeeping around a [`FarmApi`]
//! implementor, used by the agent loop (§4.11, §4.12).

use crate::error::FarmApiError;
use crate::http::FarmApi;
use std::sync::Arc;
use tf_core::{Host, HostId, HostStatus, SystemInfo};

/// Tracks this agent's current [`Host`] registration and mediates every
/// status transition through a single place, so the agent loop never has to
/// reach into a raw `FarmApi` client directly for host bookkeeping.
pub struct HostLifecycle<C: FarmApi> {
    client: Arc<C>,
    grid_name: String,
    host: Option<Host>,
}

impl<C: FarmApi> HostLifecycle<C> {
    pub fn new(client: Arc<C>, grid_name: impl Into<String>) -> Self {
        Self { client, grid_name: grid_name.into(), host: None }
    }

    /// Register this agent with the Farm API, replacing any prior
    /// registration held in memory.
    pub async fn register(&mut self, info: &SystemInfo) -> Result<HostId, FarmApiError> {
        let host = self.client.register_host(&self.grid_name, info).await?;
        let id = host.id;
        self.host = Some(host);
        Ok(id)
    }

    pub fn host_id(&self) -> Option<HostId> {
        self.host.as_ref().map(|h| h.id)
    }

    /// Push a status transition to the Farm API for the currently
    /// registered host. A no-op, returning `Ok(())`, if not registered.
    pub async fn set_status(&self, status: HostStatus) -> Result<(), FarmApiError> {
        let Some(id) = self.host_id() else { return Ok(()) };
        self.client.update_host_status(id, status.as_str()).await
    }

    /// Deregister this agent, e.g. on a graceful stop signal (§4.12).
    pub async fn deregister(&mut self) -> Result<(), FarmApiError> {
        let Some(id) = self.host_id() else { return Ok(()) };
        self.client.unregister_host(id).await?;
        self.host = None;
        Ok(())
    }
}

#[cfg(test)]
#[path = "host_lifecycle_tests.rs"]
mod tests;
