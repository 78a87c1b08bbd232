use super::*;

#[test]
fn run_deserializes_with_empty_artifacts_by_default() {
    let json = r#"{
        "Id": 1, "RepositoryName": "widgets", "SuiteName": "unit",
        "Name": "nightly", "GridName": "linux-x64",
        "CreationTimestamp": "2026-01-01T00:00:00Z"
    }"#;
    let run: Run = serde_json::from_str(json).expect("deserialize");
    assert!(run.artifacts.is_empty());
    assert_eq!(run.grid_name, "linux-x64");
}
