use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "scopecheck",
    version,
    about = "Scope guardian for AI-assisted changes",
    after_help = "Example:\n  scopecheck src/a.css src/b.css -- \"Fix button styling\""
)]
pub struct Cli {
    /// Files the change will modify
    #[arg(value_name = "FILE")]
    pub files: Vec<String>,
    /// Change description, everything after `--`
    #[arg(last = true, value_name = "DESCRIPTION")]
    pub description: Vec<String>,
    /// Emit JSON instead of the terminal report
    #[arg(long)]
    pub json: bool,
    /// Config file (default: ./scopecheck.toml if present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Print diagnostics to stderr
    #[arg(long, short)]
    pub verbose: bool,
    /// Print the tool-call definition as JSON and exit
    #[arg(long)]
    pub print_schema: bool,
}
