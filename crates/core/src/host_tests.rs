use super::*;
use yare::parameterized;

#[parameterized(
    waiting = { HostStatus::WaitingForTests, "Waiting for tests..." },
    installing = { HostStatus::InstallingArtifacts, "Installing artifacts..." },
    running_test = { HostStatus::RunningTest, "Running test..." },
    running_bench = { HostStatus::RunningBenchmark, "Running benchmark..." },
    failed_install = { HostStatus::FailedToInstallArtifacts, "Failed to install artifacts" },
    offline = { HostStatus::Offline, "Offline" },
)]
fn host_status_matches_fixed_vocabulary(status: HostStatus, expected: &str) {
    assert_eq!(status.to_string(), expected);
}

#[test]
fn host_deserializes_pascal_case_wire_format() {
    let json = r#"{
        "Id": 7,
        "GridId": 1,
        "Type": "tests",
        "Status": "Waiting for tests...",
        "Hostname": "runner-01",
        "Cores": 8,
        "RAM": 32,
        "CreationTimestamp": "2026-01-01T00:00:00Z",
        "LastUpdateTimestamp": "2026-01-01T00:00:00Z"
    }"#;
    let host: Host = serde_json::from_str(json).expect("deserialize");
    assert_eq!(host.id, HostId::new(7));
    assert_eq!(host.hostname, "runner-01");
    assert_eq!(host.ram, Some(32));
}

#[test]
fn host_ram_may_be_absent() {
    let json = r#"{
        "Id": 1, "GridId": 1, "Type": "tests", "Status": "Offline",
        "Hostname": "h", "Cores": 4, "RAM": null,
        "CreationTimestamp": "2026-01-01T00:00:00Z",
        "LastUpdateTimestamp": "2026-01-01T00:00:00Z"
    }"#;
    let host: Host = serde_json::from_str(json).expect("deserialize");
    assert_eq!(host.ram, None);
}
