// src/exit.rs
//! Standardized process exit codes for `scopecheck`.
//!
//! Provides a stable contract for scripts, hooks and CI gates.

use colored::Colorize;
use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ScopeExit {
    /// Change approved (LOCAL, MODERATE or EXTENSIVE).
    Approved = 0,
    /// Change blocked: distinct file count exceeds the scope ceiling.
    Violation = 1,
    /// Bad usage or unreadable configuration.
    InvalidInput = 2,
}

impl ScopeExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for ScopeExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl From<anyhow::Result<ScopeExit>> for ScopeExit {
    fn from(res: anyhow::Result<ScopeExit>) -> Self {
        match res {
            Ok(code) => code,
            Err(e) => {
                eprintln!("{} {e:#}", "Error:".red());
                Self::InvalidInput
            }
        }
    }
}
