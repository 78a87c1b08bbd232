// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Raised on any non-2xx response, or a transport-level failure, from the
/// Farm API (§4.3, §7).
#[derive(Debug, Error)]
pub enum FarmApiError {
    #[error("{endpoint}: request failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint}: non-2xx response: status {status}, reason: {reason}")]
    Status {
        endpoint: &'static str,
        status: u16,
        reason: String,
    },
    #[error("{endpoint}: failed to decode response body: {source}")]
    Decode {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read upload file {path}: {source}")]
    ReadUpload {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
