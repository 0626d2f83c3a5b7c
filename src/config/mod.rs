// src/config/mod.rs
//! Scope thresholds and keyword vocabularies, loaded once at startup.

pub mod io;
pub mod types;

pub use self::types::{ScopeCheckToml, ScopeConfig};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "scopecheck.toml";

/// Where the active configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    File(PathBuf),
}

impl ScopeConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `scopecheck.toml` from `dir`, falling back to defaults if absent.
    ///
    /// # Errors
    /// Returns error if the file is unreadable, malformed or fails validation.
    pub fn load_from_dir(dir: &Path) -> Result<(Self, ConfigSource)> {
        Self::load_file(&dir.join(CONFIG_FILE), false)
    }

    /// Loads an explicitly named config file, which must exist.
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable, malformed or invalid.
    pub fn load_explicit(path: &Path) -> Result<(Self, ConfigSource)> {
        Self::load_file(path, true)
    }

    fn load_file(path: &Path, required: bool) -> Result<(Self, ConfigSource)> {
        let Some(config) = io::read_config_file(path)? else {
            if required {
                bail!("config file not found: {}", path.display());
            }
            return Ok((Self::default(), ConfigSource::Defaults));
        };
        config
            .validate()
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    /// Validates tier thresholds.
    ///
    /// # Errors
    /// Returns error unless `local_limit < moderate_limit <= scope_ceiling`.
    pub fn validate(&self) -> Result<()> {
        if self.local_limit >= self.moderate_limit {
            bail!(
                "local_limit ({}) must be below moderate_limit ({})",
                self.local_limit,
                self.moderate_limit
            );
        }
        if self.moderate_limit > self.scope_ceiling {
            bail!(
                "moderate_limit ({}) must not exceed scope_ceiling ({})",
                self.moderate_limit,
                self.scope_ceiling
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(ScopeConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_limits_rejected() {
        let mut c = ScopeConfig::default();
        c.local_limit = 5;
        c.moderate_limit = 4;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_moderate_above_ceiling_rejected() {
        let mut c = ScopeConfig::default();
        c.scope_ceiling = 4;
        assert!(c.validate().is_err());
    }

    #[test]
    fn test_partial_table_keeps_defaults() {
        let c = io::parse_toml("[scope]\nscope_ceiling = 20\n").unwrap();
        assert_eq!(c.scope_ceiling, 20);
        assert_eq!(c.module_spread_limit, 3);
        assert!(c.ui_keywords.contains(&"css".to_string()));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut c = ScopeConfig::default();
        c.ui_keywords = vec!["theme".into()];
        let text = io::to_toml(&c).unwrap();
        assert_eq!(io::parse_toml(&text).unwrap(), c);
    }
}
