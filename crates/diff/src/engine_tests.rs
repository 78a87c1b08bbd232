use super::*;
use std::path::Path;

fn write_fixture(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn identical_files_yield_zero_length_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let gold = write_fixture(dir.path(), "gold.txt", "line1\nline2\nline3\n");
    let new = write_fixture(dir.path(), "new.txt", "line1\nline2\nline3\n");
    let report = dir.path().join("report.html");

    let identical = DiffEngine::diff_to_report(&gold, &new, &report).expect("diff");
    assert!(identical);
    let meta = std::fs::metadata(&report).expect("metadata");
    assert_eq!(meta.len(), 0);
}

#[test]
fn differing_files_yield_non_empty_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let gold = write_fixture(dir.path(), "gold.txt", "line1\nline2\n");
    let new = write_fixture(dir.path(), "new.txt", "line1\nchanged\n");
    let report = dir.path().join("report.html");

    let identical = DiffEngine::diff_to_report(&gold, &new, &report).expect("diff");
    assert!(!identical);
    let content = std::fs::read_to_string(&report).expect("read report");
    assert!(!content.is_empty());
    assert!(content.contains("removed"));
    assert!(content.contains("added"));
}

#[test]
fn report_is_invalid_utf8_tolerant() {
    let dir = tempfile::tempdir().expect("tempdir");
    let gold_path = dir.path().join("gold.bin");
    let new_path = dir.path().join("new.bin");
    std::fs::write(&gold_path, [b'a', 0xff, b'b', b'\n']).expect("write");
    std::fs::write(&new_path, [b'a', b'b', b'\n']).expect("write");
    let report = dir.path().join("report.html");

    let result = DiffEngine::diff_to_report(&gold_path, &new_path, &report);
    assert!(result.is_ok());
}

#[test]
fn run_of_exactly_nine_context_lines_not_compacted() {
    let old: String = (0..9).map(|n| format!("ctx{n}\n")).collect::<String>() + "gold\n";
    let new: String = (0..9).map(|n| format!("ctx{n}\n")).collect::<String>() + "new\n";
    let lines = compute_diff_lines(&old, &new);
    let context_run = lines.iter().filter(|l| l.kind == DiffLineKind::Context).count();
    assert_eq!(context_run, 9);
}

#[test]
fn run_of_exactly_ten_context_lines_is_compacted_in_report() {
    let old: String = (0..10).map(|n| format!("ctx{n}\n")).collect::<String>() + "gold\n";
    let new: String = (0..10).map(|n| format!("ctx{n}\n")).collect::<String>() + "new\n";
    let dir = tempfile::tempdir().expect("tempdir");
    let gold = write_fixture(dir.path(), "gold.txt", &old);
    let new_file = write_fixture(dir.path(), "new.txt", &new);
    let report = dir.path().join("report.html");
    DiffEngine::diff_to_report(&gold, &new_file, &report).expect("diff");
    let content = std::fs::read_to_string(&report).expect("read");
    assert!(content.contains("more identical lines"));
}
