// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Artifact definitions and specific artifact builds installed by a run.

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for an artifact definition.
    pub struct ArtifactDefinitionId;
}

crate::define_id! {
    /// Unique identifier for a specific artifact build.
    pub struct ArtifactId;
}

/// A named, versioned install recipe.
///
/// `install_script` here is the *raw* server string, still carrying literal
/// backslash escapes (`\n`, `\t`, ...); `ArtifactInstaller` is responsible
/// for unescaping it before writing it to disk (§4.5, §9, §10.6).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactDefinition {
    #[serde(rename = "Id")]
    pub id: ArtifactDefinitionId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "InstallScript")]
    pub install_script: String,
    #[serde(rename = "Tags", default)]
    pub tags: Vec<String>,
}

/// A specific build of an [`ArtifactDefinition`] that a run has pinned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(rename = "Id")]
    pub id: ArtifactId,
    #[serde(rename = "ArtifactDefinition")]
    pub definition: ArtifactDefinition,
    #[serde(rename = "BuildId")]
    pub build_id: i64,
    #[serde(rename = "BuildName")]
    pub build_name: String,
    #[serde(rename = "Repository")]
    pub repository: String,
    #[serde(rename = "Branch")]
    pub branch: String,
    #[serde(rename = "Revision")]
    pub revision: String,
    #[serde(rename = "WorkItemUrl")]
    pub work_item_url: Option<String>,
    #[serde(rename = "BuildPageUrl")]
    pub build_page_url: Option<String>,
    #[serde(rename = "Tags", default)]
    pub tags: Vec<String>,
}

/// Unescape literal backslash sequences (`\n`, `\t`, `\r`, `\\`, `\"`, `\0`)
/// in a script string pulled from a JSON field, mirroring Python's
/// `str.encode('utf-8').decode('unicode_escape')` used by the original
/// `ArtifactDefinition.from_dict`. Unrecognized escapes are left verbatim
/// (backslash and following character both kept), matching `unicode_escape`'s
/// permissive behavior for non-escape sequences it doesn't special-case here.
pub fn unescape_install_script(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                out.push('\n');
                chars.next();
            }
            Some('t') => {
                out.push('\t');
                chars.next();
            }
            Some('r') => {
                out.push('\r');
                chars.next();
            }
            Some('0') => {
                out.push('\0');
                chars.next();
            }
            Some('\\') => {
                out.push('\\');
                chars.next();
            }
            Some('"') => {
                out.push('"');
                chars.next();
            }
            Some('\'') => {
                out.push('\'');
                chars.next();
            }
            _ => out.push('\\'),
        }
    }
    out
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
