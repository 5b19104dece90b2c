//! Shellkit Core - Shared library for the Electron project CLIs
//!
//! This library provides the functionality behind `shellkit-create` (scaffold a
//! project and install its dependencies) and `shellkit-launch` (pick a project
//! and run one of its npm scripts).
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Tool path resolution and the process runner
//! - **Layer 2: Collaborators** - Project scaffolding, project discovery, `ProductConfig`
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use shellkit_core::config::npm_tool;
//! use shellkit_core::report::ConsoleReporter;
//! use shellkit_core::runtime::{CommandSpec, ProcessRunner, ResolverEnv, ToolResolver};
//!
//! let reporter = ConsoleReporter;
//! let tool = npm_tool();
//! let env = ResolverEnv::from_process(&tool);
//! let npm = ToolResolver::new(tool).resolve(&env, &reporter);
//!
//! let outcome = ProcessRunner::new(&reporter)
//!     .run(&npm, project_dir, &CommandSpec::new(["install"]))
//!     .await;
//! ```

pub mod config;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod product;
pub mod report;
pub mod runtime;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{npm_tool, ToolConfig};
pub use error::{LaunchError, ScaffoldError};
pub use launcher::LaunchCommand;
pub use product::{ElectronProduct, ProductConfig};
pub use report::{ConsoleReporter, Reporter};
pub use runtime::{
    CommandSpec, ProcessRunner, ResolverEnv, RunOutcome, RunStatus, ToolPath, ToolResolver,
};
pub use scaffold::{Database, ProjectSpec};

#[cfg(feature = "tui")]
pub use tui::{run_create, run_launch};
