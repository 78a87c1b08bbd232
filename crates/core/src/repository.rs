// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Repository: a source of test/benchmark definitions.
//!
//! `token` is sensitive and intentionally excluded from `Debug` output so a
//! stray `{:?}` in a log line can never leak it.

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a repository record.
    pub struct RepositoryId;
}

#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    #[serde(rename = "Id")]
    pub id: RepositoryId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Url")]
    pub url: String,
    #[serde(rename = "User")]
    pub user: String,
    #[serde(rename = "Token")]
    pub token: String,
    #[serde(rename = "IsActive")]
    pub is_active: bool,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("url", &self.url)
            .field("user", &self.user)
            .field("token", &"<redacted>")
            .field("is_active", &self.is_active)
            .finish()
    }
}

#[cfg(test)]
#[path = "repository_tests.rs"]
mod tests;
