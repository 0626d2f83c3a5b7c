// src/scope/types.rs
//! Inputs and outputs of a scope evaluation.

use super::tier::ScopeTier;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A proposed change: the files it touches and what it claims to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRequest {
    files: Vec<String>,
    description: String,
}

impl ChangeRequest {
    pub fn new<I, S>(files: I, description: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            description: description.into(),
        }
    }

    /// Files as given, duplicates included.
    #[must_use]
    pub fn files(&self) -> &[String] {
        &self.files
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Files with duplicates removed, first occurrence wins.
    #[must_use]
    pub fn distinct_files(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.files
            .iter()
            .map(String::as_str)
            .filter(|f| seen.insert(*f))
            .collect()
    }

    #[must_use]
    pub fn file_count(&self) -> usize {
        self.distinct_files().len()
    }
}

/// Outcome of an approved evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub approved: bool,
    pub tier: ScopeTier,
    pub file_count: usize,
    pub requires_confirmation: bool,
    /// Tier warning first, then anti-pattern messages in detection order.
    pub warnings: Vec<String>,
    pub anti_patterns: Vec<String>,
    pub recommendation: Option<String>,
}

impl Verdict {
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
