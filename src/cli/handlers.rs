// src/cli/handlers.rs
use super::args::Cli;
use crate::config::{ConfigSource, ScopeConfig};
use crate::exit::ScopeExit;
use crate::reporting::{self, json};
use crate::scope::{ChangeRequest, ScopeEvaluator};
use crate::tool;
use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

fn get_working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

/// Loads the explicit config file, or `scopecheck.toml` from the working directory.
///
/// # Errors
/// Returns error if the config cannot be read, parsed or validated.
pub fn load_config(explicit: Option<&Path>) -> Result<(ScopeConfig, ConfigSource)> {
    match explicit {
        Some(path) => ScopeConfig::load_explicit(path),
        None => ScopeConfig::load_from_dir(&get_working_dir()),
    }
}

/// Splits raw positionals into files and description.
///
/// Without a `--` separator the last positional is the description.
///
/// # Errors
/// Returns error if no files or no description remain.
pub fn request_from_args(files: &[String], description: &[String]) -> Result<ChangeRequest> {
    let mut files = files.to_vec();
    let separated = !description.is_empty();
    let mut description = description.join(" ");
    if !separated && files.len() > 1 {
        description = files.pop().unwrap_or_default();
    }
    if files.is_empty() {
        bail!("No files specified\nUsage: scopecheck <file1> <file2> ... -- \"description\"");
    }
    if description.trim().is_empty() {
        bail!("No description provided\nUsage: scopecheck <file1> <file2> ... -- \"description\"");
    }
    Ok(ChangeRequest::new(files, description))
}

/// Handles a scope check.
///
/// # Errors
/// Returns error on usage or configuration problems. A blocked change is
/// not an error; it maps to [`ScopeExit::Violation`].
pub fn handle_check(cli: &Cli) -> Result<ScopeExit> {
    let (config, source) = load_config(cli.config.as_deref())?;
    if cli.verbose {
        match &source {
            ConfigSource::Defaults => reporting::print_diagnostic("using default configuration"),
            ConfigSource::File(p) => {
                reporting::print_diagnostic(&format!("loaded {}", p.display()));
            }
        }
    }

    if cli.print_schema {
        println!("{}", serde_json::to_string_pretty(&tool::tool_definition(&config))?);
        return Ok(ScopeExit::Approved);
    }

    let request = request_from_args(&cli.files, &cli.description)?;
    if cli.verbose {
        reporting::print_diagnostic(&format!(
            "{} paths given, {} distinct",
            request.files().len(),
            request.file_count()
        ));
    }

    let evaluator = ScopeEvaluator::new(config);
    match evaluator.evaluate(&request) {
        Ok(verdict) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&json::verdict_value(&verdict))?);
            } else {
                reporting::print_verdict(&verdict, evaluator.config());
            }
            Ok(ScopeExit::Approved)
        }
        Err(violation) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&json::blocked_document(&violation))?);
            } else {
                reporting::print_violation(&violation);
            }
            Ok(ScopeExit::Violation)
        }
    }
}
