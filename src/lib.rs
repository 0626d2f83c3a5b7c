pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod reporting;
pub mod scope;
pub mod tool;
