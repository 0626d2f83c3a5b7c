use serde::{Deserialize, Serialize};

/// Thresholds and vocabularies used by the scope evaluator.
///
/// Every field has a default, so a partial `[scope]` table only overrides
/// what it names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeConfig {
    /// Path substrings that mark a file as infrastructure.
    #[serde(default = "default_infra_markers")]
    pub infra_markers: Vec<String>,
    /// Description substrings that mark a change as a UI/styling issue.
    #[serde(default = "default_ui_keywords")]
    pub ui_keywords: Vec<String>,
    /// Description substrings that mark a change as a small fix.
    #[serde(default = "default_simple_fix_keywords")]
    pub simple_fix_keywords: Vec<String>,
    /// Names that suggest heavyweight abstractions.
    #[serde(default = "default_complexity_keywords")]
    pub complexity_keywords: Vec<String>,
    /// More distinct top-level directories than this is flagged.
    #[serde(default = "default_module_spread_limit")]
    pub module_spread_limit: usize,
    /// Highest file count still classified LOCAL.
    #[serde(default = "default_local_limit")]
    pub local_limit: usize,
    /// Highest file count still classified MODERATE.
    #[serde(default = "default_moderate_limit")]
    pub moderate_limit: usize,
    /// Absolute ceiling. Anything above is blocked.
    #[serde(default = "default_scope_ceiling")]
    pub scope_ceiling: usize,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            infra_markers: default_infra_markers(),
            ui_keywords: default_ui_keywords(),
            simple_fix_keywords: default_simple_fix_keywords(),
            complexity_keywords: default_complexity_keywords(),
            module_spread_limit: default_module_spread_limit(),
            local_limit: default_local_limit(),
            moderate_limit: default_moderate_limit(),
            scope_ceiling: default_scope_ceiling(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_infra_markers() -> Vec<String> {
    strings(&[
        "Dockerfile",
        "docker-compose.yml",
        "docker-compose.yaml",
        "nginx.conf",
        ".k8s/",
        "kubernetes/",
        "terraform/",
        ".tf",
        ".github/workflows/",
        "Jenkinsfile",
        ".circleci/",
    ])
}

fn default_ui_keywords() -> Vec<String> {
    strings(&["ui", "css", "style", "button", "layout"])
}

fn default_simple_fix_keywords() -> Vec<String> {
    strings(&["fix", "bug", "typo", "minor"])
}

fn default_complexity_keywords() -> Vec<String> {
    strings(&["factory", "manager", "handler", "builder", "strategy", "adapter"])
}

const fn default_module_spread_limit() -> usize { 3 }
const fn default_local_limit() -> usize { 3 }
const fn default_moderate_limit() -> usize { 5 }
const fn default_scope_ceiling() -> usize { 10 }

/// On-disk layout of `scopecheck.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScopeCheckToml {
    #[serde(default)]
    pub scope: ScopeConfig,
}
