// src/scope/patterns.rs
//! Anti-pattern detectors.
//!
//! Each detector is a pure predicate over the distinct file set and the
//! description. They run in registry order and never block a change.

use crate::config::ScopeConfig;
use std::collections::BTreeSet;

/// Known suspicious correlations between files and description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntiPattern {
    InfraForUi,
    ModuleSpread,
    Overengineering,
}

impl AntiPattern {
    #[must_use]
    pub fn recommendation(self) -> &'static str {
        match self {
            Self::InfraForUi => {
                "Keep infrastructure changes separate from UI fixes; split them into a separate task"
            }
            Self::ModuleSpread => "Split into focused changes per module",
            Self::Overengineering => "Use the simplest solution that works",
        }
    }
}

/// A detector that fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub pattern: AntiPattern,
    pub message: String,
}

type Detector = fn(&[&str], &str, &ScopeConfig) -> Option<Finding>;

/// Detectors in reporting order.
pub const DETECTORS: &[Detector] = &[
    detect_infra_for_ui,
    detect_module_spread,
    detect_overengineering,
];

/// Runs every detector and collects the ones that fire.
#[must_use]
pub fn detect_all(files: &[&str], description: &str, config: &ScopeConfig) -> Vec<Finding> {
    DETECTORS
        .iter()
        .filter_map(|detect| detect(files, description, config))
        .collect()
}

/// Infrastructure files touched by a change described as a UI issue.
#[must_use]
pub fn detect_infra_for_ui(files: &[&str], description: &str, config: &ScopeConfig) -> Option<Finding> {
    let desc = description.to_lowercase();
    if !contains_any(&desc, &config.ui_keywords) {
        return None;
    }
    let infra: Vec<&str> = files
        .iter()
        .copied()
        .filter(|f| config.infra_markers.iter().any(|m| !m.is_empty() && f.contains(m.as_str())))
        .collect();
    if infra.is_empty() {
        return None;
    }
    Some(Finding {
        pattern: AntiPattern::InfraForUi,
        message: format!(
            "Infrastructure files modified for UI issue! (files: {})",
            infra.join(", ")
        ),
    })
}

/// Too many distinct top-level directories in one change.
#[must_use]
pub fn detect_module_spread(files: &[&str], _description: &str, config: &ScopeConfig) -> Option<Finding> {
    let modules = top_level_modules(files);
    if modules.len() <= config.module_spread_limit {
        return None;
    }
    let names: Vec<&str> = modules.into_iter().collect();
    Some(Finding {
        pattern: AntiPattern::ModuleSpread,
        message: format!(
            "Changes span {} unrelated modules: {}",
            names.len(),
            names.join(", ")
        ),
    })
}

/// A "simple fix" that reaches for factories, managers and friends.
///
/// Best-effort keyword heuristic: the complexity vocabulary may match either
/// the description or a file path.
#[must_use]
pub fn detect_overengineering(files: &[&str], description: &str, config: &ScopeConfig) -> Option<Finding> {
    let desc = description.to_lowercase();
    if !contains_any(&desc, &config.simple_fix_keywords) {
        return None;
    }
    let lowered: Vec<String> = files.iter().map(|f| f.to_lowercase()).collect();
    let hits: Vec<&str> = config
        .complexity_keywords
        .iter()
        .map(String::as_str)
        .filter(|kw| !kw.is_empty())
        .filter(|kw| {
            let kw = kw.to_lowercase();
            desc.contains(&kw) || lowered.iter().any(|f| f.contains(&kw))
        })
        .collect();
    if hits.is_empty() {
        return None;
    }
    Some(Finding {
        pattern: AntiPattern::Overengineering,
        message: format!("Complex abstractions ({}) for simple fix", hits.join(", ")),
    })
}

/// First path component of every file that sits inside a directory.
#[must_use]
pub fn top_level_modules<'a>(files: &[&'a str]) -> BTreeSet<&'a str> {
    files
        .iter()
        .filter_map(|&f| {
            let mut parts = f
                .trim_start_matches("./")
                .split(|c: char| c == '/' || c == '\\')
                .filter(|p| !p.is_empty());
            let first = parts.next()?;
            parts.next().map(|_| first)
        })
        .collect()
}

fn contains_any(haystack_lower: &str, needles: &[String]) -> bool {
    needles
        .iter()
        .any(|n| !n.is_empty() && haystack_lower.contains(&n.to_lowercase()))
}
