//! Configuration for the external package-manager tool

pub mod tool;

pub use tool::{npm_tool, ToolConfig};
