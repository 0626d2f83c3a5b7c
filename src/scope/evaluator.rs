// src/scope/evaluator.rs
use super::patterns;
use super::tier;
use super::types::{ChangeRequest, Verdict};
use crate::config::ScopeConfig;
use crate::error::ScopeViolation;

/// Stateless evaluator bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct ScopeEvaluator {
    config: ScopeConfig,
}

impl ScopeEvaluator {
    #[must_use]
    pub fn new(config: ScopeConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &ScopeConfig {
        &self.config
    }

    /// Classifies a change and collects its warnings.
    ///
    /// # Errors
    /// Returns [`ScopeViolation`] when the distinct file count exceeds the ceiling.
    pub fn evaluate(&self, request: &ChangeRequest) -> Result<Verdict, ScopeViolation> {
        let files = request.distinct_files();
        let tier = tier::classify(files.len(), &self.config);
        if tier.is_blocked() {
            return Err(ScopeViolation::new(&files, self.config.scope_ceiling));
        }

        let findings = patterns::detect_all(&files, request.description(), &self.config);
        let anti_patterns: Vec<String> = findings.iter().map(|f| f.message.clone()).collect();

        let mut warnings: Vec<String> = tier.warning(&self.config).into_iter().collect();
        warnings.extend(anti_patterns.iter().cloned());

        Ok(Verdict {
            approved: true,
            tier,
            file_count: files.len(),
            requires_confirmation: tier.requires_confirmation(),
            warnings,
            anti_patterns,
            recommendation: findings
                .first()
                .map(|f| f.pattern.recommendation().to_string()),
        })
    }
}

/// Evaluates `(files, description)` against `config`.
///
/// # Errors
/// Returns [`ScopeViolation`] when the distinct file count exceeds the ceiling.
pub fn evaluate<S: AsRef<str>>(
    files: &[S],
    description: &str,
    config: &ScopeConfig,
) -> Result<Verdict, ScopeViolation> {
    let request = ChangeRequest::new(files.iter().map(|f| f.as_ref().to_string()), description);
    ScopeEvaluator::new(config.clone()).evaluate(&request)
}
