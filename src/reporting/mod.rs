// src/reporting/mod.rs
//! Rendering of verdicts: terminal, JSON and plain text.

pub mod console;
pub mod json;
pub mod plain;

pub use console::{print_diagnostic, print_verdict, print_violation};
