// src/reporting/json.rs
//! Machine-readable output.

use crate::error::ScopeViolation;
use crate::scope::Verdict;
use serde_json::{json, Value};

#[must_use]
pub fn verdict_value(verdict: &Verdict) -> Value {
    // Verdict holds only strings, bools and integers.
    serde_json::to_value(verdict).unwrap_or(Value::Null)
}

#[must_use]
pub fn violation_value(violation: &ScopeViolation) -> Value {
    json!({
        "type": "ScopeViolation",
        "file_count": violation.file_count,
        "max_allowed": violation.ceiling,
        "recommendation": violation.recommendation,
        "message": violation.to_string(),
    })
}

/// Top-level document for a blocked change.
#[must_use]
pub fn blocked_document(violation: &ScopeViolation) -> Value {
    json!({
        "approved": false,
        "error": violation_value(violation),
    })
}
