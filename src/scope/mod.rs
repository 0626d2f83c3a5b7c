// src/scope/mod.rs
//! Scope-policy evaluation.
//!
//! Classifies a change's blast radius by distinct file count, surfaces
//! anti-pattern warnings, and blocks anything above the scope ceiling.

pub mod evaluator;
pub mod patterns;
pub mod tier;
pub mod types;

pub use evaluator::{evaluate, ScopeEvaluator};
pub use patterns::{AntiPattern, Finding};
pub use tier::{classify, ScopeTier};
pub use types::{ChangeRequest, Verdict};
