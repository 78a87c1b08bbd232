// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::DiffError;
use crate::render;
use similar::{ChangeTag, TextDiff};
use std::path::Path;

/// Lines consumed beyond this cap are not processed; a limit row terminates
/// the report instead (§4.7 Size cap).
pub const MAX_DIFF_LINES: usize = 5000;

/// Runs of this many or more consecutive identical lines are compacted to
/// their first 5 and last 5 lines, with an elision row in between.
pub const CONTEXT_COMPACT_THRESHOLD: usize = 10;
pub const CONTEXT_COMPACT_EDGE: usize = 5;

/// Unified-diff context radius (§4.7: "10 lines of context"), matching the
/// original's `difflib.unified_diff(..., n=10)`. Changes farther apart than
/// twice this radius land in separate hunks with unchanged lines between
/// them dropped entirely, not merely compacted.
const CONTEXT_RADIUS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DiffLineKind {
    Context,
    Removed,
    Added,
    /// A `@@ -a,b +c,d @@` hunk separator. The original strips only the
    /// `---`/`+++` file header lines from `difflib`'s output and leaves
    /// these in place, where they fall through to its line classifier's
    /// else branch and render as plain rows (§4.7). Kept as its own kind
    /// rather than folded into `Context` so the renderer's run-compaction
    /// never merges two hunks' edge context across a boundary.
    HunkHeader,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiffLine {
    pub kind: DiffLineKind,
    pub text: String,
}

/// Computes an HTML diff report comparing a known-good file against a freshly
/// produced one.
pub struct DiffEngine;

impl DiffEngine {
    /// Reads `gold_path` and `new_path` as text (UTF-8 with lossy replacement
    /// on decode errors, matching §4.7's "read as text with replacement"
    /// contract regardless of the nominal `encoding` field), computes the
    /// line-level diff, and writes an HTML report to `report_path`.
    ///
    /// If the two files are identical, `report_path` is created but left
    /// zero-length (§4.7 empty-diff contract) and `Ok(true)` is returned.
    /// Otherwise the report is populated and `Ok(false)` is returned.
    pub fn diff_to_report(gold_path: &Path, new_path: &Path, report_path: &Path) -> Result<bool, DiffError> {
        let gold_text = read_lossy(gold_path)?;
        let new_text = read_lossy(new_path)?;

        let lines = compute_diff_lines(&gold_text, &new_text);
        let is_identical = lines.iter().all(|l| l.kind == DiffLineKind::Context);

        if is_identical {
            std::fs::write(report_path, b"").map_err(|source| DiffError::Write {
                path: report_path.to_path_buf(),
                source,
            })?;
            return Ok(true);
        }

        let html = render::render_report(&lines);
        std::fs::write(report_path, html).map_err(|source| DiffError::Write {
            path: report_path.to_path_buf(),
            source,
        })?;
        Ok(false)
    }
}

fn read_lossy(path: &Path) -> Result<String, DiffError> {
    let bytes = std::fs::read(path).map_err(|source| DiffError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

pub(crate) fn compute_diff_lines(old: &str, new: &str) -> Vec<DiffLine> {
    let diff = TextDiff::from_lines(old, new);
    let mut unified = diff.unified_diff();
    unified.context_radius(CONTEXT_RADIUS);

    let mut lines = Vec::new();
    for (i, hunk) in unified.iter_hunks().enumerate() {
        if i > 0 {
            lines.push(DiffLine {
                kind: DiffLineKind::HunkHeader,
                text: hunk.header().to_string(),
            });
        }
        for change in hunk.iter_changes() {
            let kind = match change.tag() {
                ChangeTag::Equal => DiffLineKind::Context,
                ChangeTag::Delete => DiffLineKind::Removed,
                ChangeTag::Insert => DiffLineKind::Added,
            };
            lines.push(DiffLine {
                kind,
                text: change.value().trim_end_matches(['\n', '\r']).to_string(),
            });
        }
    }
    lines
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
