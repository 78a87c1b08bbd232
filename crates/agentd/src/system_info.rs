// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collects the system info sent with `register-host` (§4.11, §10.6).
//!
//! Grounded on the original `get_system_info()`: physical core count via
//! `psutil.cpu_count(logical=False)`, RAM rounded to the nearest GiB via
//! `round(ram_bytes / 2**30)`.

use sysinfo::System;
use tf_core::SystemInfo;

const BYTES_PER_GIB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Collects `hostname`, physical core count, and RAM rounded to the nearest
/// GiB for this machine.
pub fn collect() -> SystemInfo {
    let mut sys = System::new_all();
    sys.refresh_all();

    let hostname = System::host_name().unwrap_or_else(|| "unknown".to_string());
    let cores = System::physical_core_count().unwrap_or(1) as u32;
    let ram_gib = (sys.total_memory() as f64 / BYTES_PER_GIB).round() as u64;

    SystemInfo { hostname, ram_gib, cores, host_type: "tests" }
}
