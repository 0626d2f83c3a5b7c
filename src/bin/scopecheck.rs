// src/bin/scopecheck.rs
use clap::Parser;
use scopecheck_core::cli::{self, Cli};
use scopecheck_core::exit::ScopeExit;

fn main() -> ScopeExit {
    let cli = Cli::parse();
    ScopeExit::from(cli::handle_check(&cli))
}
