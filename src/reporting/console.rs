// src/reporting/console.rs
//! Colored terminal output for verdicts and violations.

use crate::config::ScopeConfig;
use crate::error::ScopeViolation;
use crate::scope::{ScopeTier, Verdict};
use colored::Colorize;

const RULE_WIDTH: usize = 80;

/// Prints an approved verdict to stdout.
pub fn print_verdict(verdict: &Verdict, config: &ScopeConfig) {
    println!();
    println!("{}", "=".repeat(RULE_WIDTH).blue());
    println!("{}", "SCOPE ANALYSIS".bold());
    println!("{}", "=".repeat(RULE_WIDTH).blue());
    println!("Status: {}", "APPROVED".green().bold());
    println!("Scope Level: {}", tier_colored(verdict.tier));
    println!("File Count: {}/{}", verdict.file_count, config.scope_ceiling);

    if verdict.requires_confirmation {
        println!();
        println!(
            "{}",
            "[CONFIRM] Extensive change: explicit confirmation required before proceeding"
                .yellow()
                .bold()
        );
    }

    if verdict.has_warnings() {
        println!();
        println!("{}", "WARNINGS:".yellow().bold());
        for w in &verdict.warnings {
            println!("  {} {w}", "-".yellow());
        }
    } else {
        println!();
        println!("{}", "No warnings detected".green());
    }

    if !verdict.anti_patterns.is_empty() {
        println!();
        println!("{}", "ANTI-PATTERNS:".red().bold());
        for p in &verdict.anti_patterns {
            println!("  {} {p}", "!".red());
        }
    }

    if let Some(rec) = &verdict.recommendation {
        println!();
        println!("{} {rec}", "Recommendation:".cyan());
    }
    println!("{}", "=".repeat(RULE_WIDTH).blue());
    println!();
}

/// Prints a blocked change to stderr.
pub fn print_violation(violation: &ScopeViolation) {
    eprintln!();
    eprintln!("{}", "=".repeat(RULE_WIDTH).red());
    eprintln!("{}", "SCOPE VIOLATION - BLOCKED".red().bold());
    eprintln!("{}", "=".repeat(RULE_WIDTH).red());
    eprintln!();
    eprintln!("{violation}");
    eprintln!();
    eprintln!("File count: {}", violation.file_count);
    eprintln!("Max allowed: {}", violation.ceiling);
    eprintln!("{}", "=".repeat(RULE_WIDTH).red());
    eprintln!();
}

/// Dimmed diagnostic line on stderr, shown with `--verbose`.
pub fn print_diagnostic(msg: &str) {
    eprintln!("{} {}", "scopecheck:".dimmed(), msg.dimmed());
}

fn tier_colored(tier: ScopeTier) -> colored::ColoredString {
    match tier {
        ScopeTier::Local => tier.label().green(),
        ScopeTier::Moderate => tier.label().yellow(),
        ScopeTier::Extensive => tier.label().yellow().bold(),
        ScopeTier::Systemic => tier.label().red().bold(),
    }
}
