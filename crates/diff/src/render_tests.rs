use super::*;
use crate::engine::compute_diff_lines;

#[test]
fn report_contains_both_views() {
    let lines = compute_diff_lines("a\nb\n", "a\nc\n");
    let html = render_report(&lines);
    assert!(html.contains("id=\"side-by-side\""));
    assert!(html.contains("id=\"unified\""));
}

#[test]
fn size_cap_emits_limit_row() {
    let old: String = (0..MAX_DIFF_LINES + 10).map(|n| format!("l{n}\n")).collect();
    let new: String = (0..MAX_DIFF_LINES + 10).map(|n| format!("l{n}x\n")).collect();
    let lines = compute_diff_lines(&old, &new);
    let html = render_report(&lines);
    assert!(html.contains("diff content is limited to 5000"));
}

#[test]
fn under_cap_has_no_limit_row() {
    let old: String = (0..4999).map(|n| format!("l{n}\n")).collect();
    let new: String = (0..4999).map(|n| format!("l{n}x\n")).collect();
    let lines = compute_diff_lines(&old, &new);
    let html = render_report(&lines);
    assert!(!html.contains("diff content is limited to 5000"));
}

#[test]
fn escapes_html_special_characters() {
    let lines = compute_diff_lines("plain\n", "<script>alert(1)</script>\n");
    let html = render_report(&lines);
    assert!(!html.contains("<script>alert"));
    assert!(html.contains("&lt;script&gt;"));
}
