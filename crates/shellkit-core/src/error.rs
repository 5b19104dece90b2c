//! Error types for scaffolding and launching

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while validating or writing a new project
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("The project name cannot be empty")]
    EmptyName,

    #[error("Invalid project name '{0}': use a plain directory name")]
    InvalidName(String),

    #[error("A project named '{name}' already exists at {}", .path.display())]
    ProjectExists { name: String, path: PathBuf },

    #[error("Unknown database '{0}' (expected sqlite, mysql, mssql or none)")]
    UnknownDatabase(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize package.json: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Errors raised while picking a project or command to launch
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("No projects found in {}", .0.display())]
    NoProjects(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid input '{0}': enter a number")]
    NotANumber(String),

    #[error("Invalid selection {choice}: choose between 1 and {max}")]
    OutOfRange { choice: usize, max: usize },

    #[error("Unknown command '{0}' (expected start, dev or build)")]
    UnknownCommand(String),
}
