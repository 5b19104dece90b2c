//! Product configuration shared by the CLI binaries
//!
//! This trait defines what the create and launch front-ends need to know
//! about the kind of project they handle.

use crate::config::{npm_tool, ToolConfig};
use crate::launcher::LaunchCommand;
use std::path::Path;

/// Configuration trait for a scaffolded project type
///
/// Each product defines:
/// - Product identity (name, display name)
/// - The package-manager tool it runs
/// - Launch commands offered in the launcher menu
/// - Post-setup instructions
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Package-manager tool used for install and launch
    fn tool(&self) -> ToolConfig;

    /// Commands offered when launching a project
    fn launch_commands(&self) -> &'static [LaunchCommand] {
        &LaunchCommand::ALL
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path) -> Vec<String>;
}

/// Electron desktop-shell projects managed with npm
#[derive(Debug, Clone, Copy, Default)]
pub struct ElectronProduct;

impl ProductConfig for ElectronProduct {
    fn name(&self) -> &'static str {
        "electron"
    }

    fn display_name(&self) -> &'static str {
        "Electron"
    }

    fn tool(&self) -> ToolConfig {
        npm_tool()
    }

    fn next_steps(&self, dir: &Path) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to directory if not current
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", dir.display()));
        }

        // Step 2: start the app
        steps.push(format!("{} start", self.tool().name));

        steps
    }
}
