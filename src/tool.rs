// src/tool.rs
//! Tool-call adapter for agent runtimes.
//!
//! Wraps the evaluator behind a JSON argument bundle and returns a
//! `content`-style result. No I/O and no decisions of its own.

use crate::config::ScopeConfig;
use crate::reporting::json as report_json;
use crate::reporting::plain;
use crate::scope::{ChangeRequest, ScopeEvaluator};
use anyhow::{Context, Result};
use serde_json::{json, Value};

pub const TOOL_NAME: &str = "analyze_integration_scope";

const TOOL_DESCRIPTION: &str = "Analyse if proposed changes respect scope limits. \
Detects anti-patterns like infrastructure files modified for UI issues.";

/// Name, description and input schema of the tool.
#[must_use]
pub fn tool_definition(config: &ScopeConfig) -> Value {
    json!({
        "name": TOOL_NAME,
        "description": format!("{TOOL_DESCRIPTION} Max {} files.", config.scope_ceiling),
        "input_schema": {
            "type": "object",
            "properties": {
                "files": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Paths the change will modify"
                },
                "description": {
                    "type": "string",
                    "description": "What the change is meant to do"
                }
            },
            "required": ["files", "description"]
        }
    })
}

/// Runs a scope analysis from a tool-call argument bundle.
///
/// A blocked change is a normal result with `is_error: true`.
///
/// # Errors
/// Returns error if `files` or `description` is missing or mistyped.
pub async fn analyze_scope(args: &Value, config: &ScopeConfig) -> Result<Value> {
    let request = parse_args(args)?;
    let evaluator = ScopeEvaluator::new(config.clone());

    match evaluator.evaluate(&request) {
        Ok(verdict) => Ok(json!({
            "content": [{ "type": "text", "text": plain::verdict_summary(&verdict) }],
            "result": report_json::verdict_value(&verdict),
        })),
        Err(violation) => Ok(json!({
            "content": [{ "type": "text", "text": plain::violation_summary(&violation) }],
            "is_error": true,
            "error": report_json::violation_value(&violation),
        })),
    }
}

fn parse_args(args: &Value) -> Result<ChangeRequest> {
    let files = args
        .get("files")
        .and_then(Value::as_array)
        .context("Missing 'files' argument")?
        .iter()
        .map(|f| f.as_str().map(str::to_string).context("'files' must contain strings"))
        .collect::<Result<Vec<String>>>()?;
    let description = args
        .get("description")
        .and_then(Value::as_str)
        .context("Missing 'description' argument")?;
    Ok(ChangeRequest::new(files, description))
}
