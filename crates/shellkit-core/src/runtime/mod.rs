//! Package-manager resolution and subprocess orchestration
//!
//! This module provides:
//! - Tool path resolution (override variable, search path, fallback)
//! - A process runner that streams child output and reports the outcome

pub mod resolve;
pub mod runner;

pub use resolve::{Resolution, ResolverEnv, ToolPath, ToolResolver};
pub use runner::{CommandSpec, ProcessRunner, RunOutcome, RunStatus};
