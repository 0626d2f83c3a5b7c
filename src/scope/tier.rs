// src/scope/tier.rs
//! Blast-radius classification by distinct file count.

use crate::config::ScopeConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a change, ordered by ascending file count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScopeTier {
    Local,
    Moderate,
    Extensive,
    Systemic,
}

impl ScopeTier {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Local => "LOCAL",
            Self::Moderate => "MODERATE",
            Self::Extensive => "EXTENSIVE",
            Self::Systemic => "SYSTEMIC",
        }
    }

    /// Advisory attached to an approved change of this tier, if any.
    #[must_use]
    pub fn warning(self, config: &ScopeConfig) -> Option<String> {
        match self {
            Self::Local | Self::Systemic => None,
            Self::Moderate => Some("Moderate scope - approved with caution".to_string()),
            Self::Extensive => Some(format!(
                "Extensive scope - approaching limit (max {} files)",
                config.scope_ceiling
            )),
        }
    }

    /// The caller must obtain explicit confirmation before proceeding.
    #[must_use]
    pub fn requires_confirmation(self) -> bool {
        matches!(self, Self::Extensive)
    }

    #[must_use]
    pub fn is_blocked(self) -> bool {
        matches!(self, Self::Systemic)
    }
}

impl fmt::Display for ScopeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a deduplicated file count. Each tier is closed on its lower bound.
#[must_use]
pub fn classify(file_count: usize, config: &ScopeConfig) -> ScopeTier {
    if file_count > config.scope_ceiling {
        ScopeTier::Systemic
    } else if file_count > config.moderate_limit {
        ScopeTier::Extensive
    } else if file_count > config.local_limit {
        ScopeTier::Moderate
    } else {
        ScopeTier::Local
    }
}
