// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::engine::{DiffLine, DiffLineKind, CONTEXT_COMPACT_EDGE, CONTEXT_COMPACT_THRESHOLD, MAX_DIFF_LINES};
use std::fmt::Write as _;

/// Renders the two-view (side-by-side + unified) HTML diff report.
pub(crate) fn render_report(lines: &[DiffLine]) -> String {
    let capped: Vec<&DiffLine> = lines.iter().take(MAX_DIFF_LINES).collect();
    let truncated = lines.len() > MAX_DIFF_LINES;

    let mut html = String::new();
    html.push_str(HEAD);
    html.push_str("<div id=\"side-by-side\" class=\"view\">\n<table>\n");
    render_side_by_side(&capped, truncated, &mut html);
    html.push_str("</table>\n</div>\n");
    html.push_str("<div id=\"unified\" class=\"view\" style=\"display:none\">\n<pre>\n");
    render_unified(&capped, truncated, &mut html);
    html.push_str("</pre>\n</div>\n");
    html.push_str(TAIL);
    html
}

fn render_side_by_side(lines: &[&DiffLine], truncated: bool, out: &mut String) {
    let mut i = 0;
    while i < lines.len() {
        match lines[i].kind {
            DiffLineKind::Context => {
                let run_start = i;
                while i < lines.len() && lines[i].kind == DiffLineKind::Context {
                    i += 1;
                }
                let run = &lines[run_start..i];
                if run.len() >= CONTEXT_COMPACT_THRESHOLD {
                    for line in &run[..CONTEXT_COMPACT_EDGE] {
                        write_context_row(line, out);
                    }
                    let elided = run.len() - 2 * CONTEXT_COMPACT_EDGE;
                    let _ = writeln!(
                        out,
                        "<tr class=\"elision\"><td colspan=\"2\">... {} more identical lines ...</td></tr>",
                        elided
                    );
                    for line in &run[run.len() - CONTEXT_COMPACT_EDGE..] {
                        write_context_row(line, out);
                    }
                } else {
                    for line in run {
                        write_context_row(line, out);
                    }
                }
            }
            DiffLineKind::Removed => {
                let _ = writeln!(
                    out,
                    "<tr><td class=\"removed\">- {}</td><td></td></tr>",
                    escape(&lines[i].text)
                );
                i += 1;
            }
            DiffLineKind::Added => {
                let _ = writeln!(
                    out,
                    "<tr><td></td><td class=\"added\">+ {}</td></tr>",
                    escape(&lines[i].text)
                );
                i += 1;
            }
            DiffLineKind::HunkHeader => {
                let _ = writeln!(
                    out,
                    "<tr class=\"hunk\"><td colspan=\"2\">{}</td></tr>",
                    escape(&lines[i].text)
                );
                i += 1;
            }
        }
    }
    if truncated {
        out.push_str("<tr class=\"limit\"><td colspan=\"2\">... diff content is limited to 5000 ...</td></tr>\n");
    }
}

fn write_context_row(line: &DiffLine, out: &mut String) {
    let text = escape(&line.text);
    let _ = writeln!(
        out,
        "<tr><td class=\"context\">{text}</td><td class=\"context\">{text}</td>"
    );
}

fn render_unified(lines: &[&DiffLine], truncated: bool, out: &mut String) {
    let mut i = 0;
    while i < lines.len() {
        match lines[i].kind {
            DiffLineKind::Context => {
                let run_start = i;
                while i < lines.len() && lines[i].kind == DiffLineKind::Context {
                    i += 1;
                }
                let run = &lines[run_start..i];
                if run.len() >= CONTEXT_COMPACT_THRESHOLD {
                    for line in &run[..CONTEXT_COMPACT_EDGE] {
                        let _ = writeln!(out, "<span class=\"context\">{}</span>", escape(&line.text));
                    }
                    let elided = run.len() - 2 * CONTEXT_COMPACT_EDGE;
                    let _ = writeln!(out, "<span class=\"elision\">... {} more identical lines ...</span>", elided);
                    for line in &run[run.len() - CONTEXT_COMPACT_EDGE..] {
                        let _ = writeln!(out, "<span class=\"context\">{}</span>", escape(&line.text));
                    }
                } else {
                    for line in run {
                        let _ = writeln!(out, "<span class=\"context\">{}</span>", escape(&line.text));
                    }
                }
            }
            DiffLineKind::Removed => {
                let _ = writeln!(out, "<span class=\"removed\">- {}</span>", escape(&lines[i].text));
                i += 1;
            }
            DiffLineKind::Added => {
                let _ = writeln!(out, "<span class=\"added\">+ {}</span>", escape(&lines[i].text));
                i += 1;
            }
            DiffLineKind::HunkHeader => {
                let _ = writeln!(out, "<span class=\"hunk\">{}</span>", escape(&lines[i].text));
                i += 1;
            }
        }
    }
    if truncated {
        out.push_str("<span class=\"limit\">... diff content is limited to 5000 ...</span>\n");
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

const HEAD: &str = "<!doctype html>\n<html><head><meta charset=\"utf-8\">\n\
<style>th,td{white-space:pre;font-family:monospace}.removed{background:#fdd}.added{background:#dfd}.context{color:#666}.elision{color:#999;font-style:italic}.hunk{color:#06c}</style>\n\
<script>function showView(id){document.querySelectorAll('.view').forEach(v=>v.style.display='none');document.getElementById(id).style.display='block';}</script>\n\
</head><body>\n<button onclick=\"showView('side-by-side')\">Side by side</button>\n\
<button onclick=\"showView('unified')\">Unified</button>\n";

const TAIL: &str = "</body></html>\n";

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
