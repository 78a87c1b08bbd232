use super::*;

#[test]
fn test_case_defaults_type_and_empty_lists() {
    let json = r#"{
        "name": "widget_basic", "description": "basic widget test",
        "owner": "alice", "command": "run.sh", "output": "out.txt"
    }"#;
    let case: TestCase = serde_json::from_str(json).expect("deserialize");
    assert_eq!(case.r#type, "native");
    assert!(case.pre_steps.is_empty());
    assert!(case.post_steps.is_empty());
    assert!(case.diffs.is_empty());
}

#[test]
fn test_case_parses_diffs() {
    let json = r#"{
        "name": "widget_basic", "description": "d", "owner": "alice",
        "command": "run.sh", "output": "out.txt",
        "diffs": [{"gold": "gold/out.txt", "new": "$__TF_WORK_DIR__/out.txt", "encoding": "utf-8"}]
    }"#;
    let case: TestCase = serde_json::from_str(json).expect("deserialize");
    assert_eq!(case.diffs.len(), 1);
    assert_eq!(case.diffs[0].gold, "gold/out.txt");
}

#[test]
fn test_case_ignores_unknown_fields() {
    let json = r#"{
        "name": "n", "description": "d", "owner": "o",
        "command": "c", "output": "out", "future_field": 123
    }"#;
    let case: TestCase = serde_json::from_str(json).expect("deserialize");
    assert_eq!(case.name, "n");
}

#[test]
fn benchmark_case_defaults_step_lists() {
    let json = r#"{
        "name": "bench1", "description": "d", "owner": "alice",
        "iterations": 5, "command": "run.sh", "results": "results.json",
        "output": "out.txt"
    }"#;
    let case: BenchmarkCase = serde_json::from_str(json).expect("deserialize");
    assert_eq!(case.iterations, 5);
    assert!(case.pre_bench_steps.is_empty());
    assert!(case.post_iter_steps.is_empty());
}
