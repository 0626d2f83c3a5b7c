// src/config/io.rs
use super::types::ScopeCheckToml;
use super::ScopeConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parses the contents of a `scopecheck.toml`.
///
/// # Errors
/// Returns error if the TOML is malformed or has wrongly typed keys.
pub fn parse_toml(content: &str) -> Result<ScopeConfig> {
    let parsed: ScopeCheckToml = toml::from_str(content).context("invalid scopecheck.toml")?;
    Ok(parsed.scope)
}

/// Reads a config file. A missing file yields `None`.
///
/// # Errors
/// Returns error if the file exists but cannot be read or parsed.
pub fn read_config_file(path: &Path) -> Result<Option<ScopeConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = parse_toml(&content).with_context(|| format!("in {}", path.display()))?;
    Ok(Some(config))
}

/// Serializes a config under its `[scope]` table.
///
/// # Errors
/// Returns error if serialization fails.
pub fn to_toml(config: &ScopeConfig) -> Result<String> {
    let wrapper = ScopeCheckToml { scope: config.clone() };
    toml::to_string_pretty(&wrapper).context("failed to serialize config")
}
