//! Project scaffolding
//!
//! This module provides:
//! - Database selection and the `package.json` it produces
//! - Static Electron boilerplate (main, preload, page, styles)
//! - Project name validation and file writing
//! - Dependency installation through the package manager

pub mod database;
pub mod manifest;
pub mod templates;
pub mod writer;

use crate::report::Reporter;
use crate::runtime::{CommandSpec, ProcessRunner, RunOutcome, ToolPath};
use std::path::Path;

pub use database::Database;
pub use manifest::PackageManifest;
pub use writer::{validate_project_name, write_project, ProjectSpec};

/// Run `<tool> install` inside `project_dir`
pub async fn install_dependencies(
    tool: &ToolPath,
    project_dir: &Path,
    reporter: &dyn Reporter,
) -> RunOutcome {
    reporter.info("Installing dependencies...");
    let outcome = ProcessRunner::new(reporter)
        .run(tool, project_dir, &CommandSpec::new(["install"]))
        .await;
    if outcome.success() {
        reporter.success("Dependencies installed");
    }
    outcome
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::report::{RecordingReporter, ReportEvent};

    #[tokio::test]
    async fn test_install_passes_install_argument() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = RecordingReporter::new();

        let outcome = install_dependencies(&ToolPath::new("echo"), dir.path(), &reporter).await;

        assert!(outcome.success());
        assert_eq!(reporter.lines(), vec!["install"]);
        assert_eq!(
            reporter.events().last(),
            Some(&ReportEvent::Success("Dependencies installed".to_string()))
        );
    }

    #[tokio::test]
    async fn test_failed_install_reports_no_success() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = RecordingReporter::new();

        let outcome = install_dependencies(&ToolPath::new("false"), dir.path(), &reporter).await;

        assert!(!outcome.success());
        assert!(!reporter
            .events()
            .iter()
            .any(|e| matches!(e, ReportEvent::Success(_))));
    }
}
