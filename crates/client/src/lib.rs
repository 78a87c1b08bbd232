// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! tf-client: typed bindings over the Farm API (HTTP/JSON + multipart).

mod error;
mod host_lifecycle;
mod http;

#[cfg(any(test, feature = "test-support"))]
mod fake;

pub use error::FarmApiError;
pub use host_lifecycle::HostLifecycle;
pub use http::{CompleteBenchmarkRequest, CompleteTestRequest, FarmApi, FarmClient};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeFarmClient, RecordedCall};
