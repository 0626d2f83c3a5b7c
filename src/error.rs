// src/error.rs
use thiserror::Error;

/// Raised when a change touches more distinct files than the scope ceiling allows.
///
/// This is the only failure an evaluation can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Scope limit exceeded: {file_count} files requested (max: {ceiling})\nRecommendation: {recommendation}\nFiles: {}", preview_list(.preview, .file_count))]
pub struct ScopeViolation {
    pub file_count: usize,
    pub ceiling: usize,
    pub recommendation: String,
    /// First few distinct files, for the rendered message.
    pub preview: Vec<String>,
}

/// Recommendation attached to every ceiling breach.
pub const SPLIT_RECOMMENDATION: &str = "Break this change into smaller, focused tasks";

/// Number of files shown in a violation message.
pub const PREVIEW_LEN: usize = 5;

impl ScopeViolation {
    #[must_use]
    pub fn new(files: &[&str], ceiling: usize) -> Self {
        Self {
            file_count: files.len(),
            ceiling,
            recommendation: SPLIT_RECOMMENDATION.to_string(),
            preview: files.iter().take(PREVIEW_LEN).map(|f| (*f).to_string()).collect(),
        }
    }
}

fn preview_list(preview: &[String], total: &usize) -> String {
    let ellipsis = if *total > preview.len() { "..." } else { "" };
    format!("{}{ellipsis}", preview.join(", "))
}
