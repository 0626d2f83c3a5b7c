// src/reporting/plain.rs
//! Uncolored summaries for embedding in tool responses.

use crate::error::ScopeViolation;
use crate::scope::Verdict;
use std::fmt::Write;

#[must_use]
pub fn verdict_summary(verdict: &Verdict) -> String {
    let mut out = String::from("Scope analysis complete:\n");
    let _ = writeln!(out, "  - Approved: {}", verdict.approved);
    let _ = writeln!(out, "  - Scope Level: {}", verdict.tier);
    let _ = writeln!(out, "  - File Count: {}", verdict.file_count);
    if verdict.requires_confirmation {
        out.push_str("  - Confirmation required\n");
    }
    if verdict.has_warnings() {
        out.push_str("  - Warnings:\n");
        for w in &verdict.warnings {
            let _ = writeln!(out, "    {w}");
        }
    }
    if let Some(rec) = &verdict.recommendation {
        let _ = writeln!(out, "  - Recommendation: {rec}");
    }
    out
}

#[must_use]
pub fn violation_summary(violation: &ScopeViolation) -> String {
    format!("SCOPE VIOLATION BLOCKED\n\n{violation}")
}
