//! Project discovery and launch commands

use crate::error::LaunchError;
use crate::report::Reporter;
use crate::runtime::{CommandSpec, ProcessRunner, RunOutcome, ToolPath};
use std::fmt;
use std::future::Future;
use std::path::Path;
use std::str::FromStr;

/// npm scripts a project can be launched with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchCommand {
    Start,
    Dev,
    Build,
}

impl LaunchCommand {
    /// Menu order used by the interactive prompt
    pub const ALL: [LaunchCommand; 3] = [LaunchCommand::Start, LaunchCommand::Dev, LaunchCommand::Build];

    pub fn spec(&self) -> CommandSpec {
        match self {
            LaunchCommand::Start => CommandSpec::new(["start"]),
            LaunchCommand::Dev => CommandSpec::new(["run", "dev"]),
            LaunchCommand::Build => CommandSpec::new(["run", "build"]),
        }
    }
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spec())
    }
}

impl FromStr for LaunchCommand {
    type Err = LaunchError;

    /// Accepts `start`, `dev`, `run dev`, `build`, `run build` or a 1-based menu index
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        match normalized.as_str() {
            "start" => Ok(LaunchCommand::Start),
            "dev" | "run dev" => Ok(LaunchCommand::Dev),
            "build" | "run build" => Ok(LaunchCommand::Build),
            other if other.chars().all(|c| c.is_ascii_digit()) && !other.is_empty() => {
                select_by_index(&Self::ALL, other).copied()
            }
            _ => Err(LaunchError::UnknownCommand(s.to_string())),
        }
    }
}

/// Names of the project directories directly under `base`, sorted.
///
/// Hidden directories are skipped.
pub fn list_projects(base: &Path) -> Result<Vec<String>, LaunchError> {
    let read_err = |source| LaunchError::ReadDir {
        path: base.to_path_buf(),
        source,
    };

    let mut projects = Vec::new();
    for entry in std::fs::read_dir(base).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        projects.push(name);
    }

    if projects.is_empty() {
        return Err(LaunchError::NoProjects(base.to_path_buf()));
    }

    projects.sort();
    Ok(projects)
}

/// Pick an item from a menu by its 1-based number
pub fn select_by_index<'a, T>(items: &'a [T], input: &str) -> Result<&'a T, LaunchError> {
    let input = input.trim();
    let choice: usize = input
        .parse()
        .map_err(|_| LaunchError::NotANumber(input.to_string()))?;

    if choice == 0 || choice > items.len() {
        return Err(LaunchError::OutOfRange {
            choice,
            max: items.len(),
        });
    }
    Ok(&items[choice - 1])
}

/// Run `command` for the project in `project_dir`, stopping early if `cancel` completes
pub async fn launch<F>(
    tool: &ToolPath,
    project_dir: &Path,
    command: &CommandSpec,
    reporter: &dyn Reporter,
    cancel: F,
) -> RunOutcome
where
    F: Future<Output = ()>,
{
    reporter.info(&format!("Starting project in {}", project_dir.display()));
    ProcessRunner::new(reporter)
        .run_until(tool, project_dir, command, cancel)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_projects_sorted_dirs_only() {
        let base = tempfile::tempdir().unwrap();
        std::fs::create_dir(base.path().join("zeta")).unwrap();
        std::fs::create_dir(base.path().join("alpha")).unwrap();
        std::fs::create_dir(base.path().join(".git")).unwrap();
        std::fs::write(base.path().join("notes.txt"), "").unwrap();

        assert_eq!(list_projects(base.path()).unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_list_projects_empty() {
        let base = tempfile::tempdir().unwrap();
        assert!(matches!(
            list_projects(base.path()),
            Err(LaunchError::NoProjects(_))
        ));
    }

    #[test]
    fn test_list_projects_missing_dir() {
        let base = tempfile::tempdir().unwrap();
        assert!(matches!(
            list_projects(&base.path().join("missing")),
            Err(LaunchError::ReadDir { .. })
        ));
    }

    #[test]
    fn test_select_by_index() {
        let items = ["a", "b", "c"];
        assert_eq!(select_by_index(&items, " 2 ").unwrap(), &"b");
        assert!(matches!(
            select_by_index(&items, "0"),
            Err(LaunchError::OutOfRange { choice: 0, max: 3 })
        ));
        assert!(matches!(
            select_by_index(&items, "4"),
            Err(LaunchError::OutOfRange { .. })
        ));
        assert!(matches!(
            select_by_index(&items, "two"),
            Err(LaunchError::NotANumber(_))
        ));
    }

    #[test]
    fn test_launch_command_specs() {
        assert_eq!(LaunchCommand::Start.spec().args(), ["start"]);
        assert_eq!(LaunchCommand::Dev.spec().args(), ["run", "dev"]);
        assert_eq!(LaunchCommand::Build.to_string(), "run build");
    }

    #[test]
    fn test_launch_command_parse() {
        assert_eq!("start".parse::<LaunchCommand>().unwrap(), LaunchCommand::Start);
        assert_eq!("run  dev".parse::<LaunchCommand>().unwrap(), LaunchCommand::Dev);
        assert_eq!("Build".parse::<LaunchCommand>().unwrap(), LaunchCommand::Build);
        assert_eq!("2".parse::<LaunchCommand>().unwrap(), LaunchCommand::Dev);
        assert!(matches!(
            "9".parse::<LaunchCommand>(),
            Err(LaunchError::OutOfRange { .. })
        ));
        assert!(matches!(
            "deploy".parse::<LaunchCommand>(),
            Err(LaunchError::UnknownCommand(_))
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_launch_runs_command_in_project_dir() {
        let base = tempfile::tempdir().unwrap();
        let project = base.path().join("demo");
        std::fs::create_dir(&project).unwrap();
        let reporter = crate::report::RecordingReporter::new();

        let outcome = launch(
            &ToolPath::new("echo"),
            &project,
            &LaunchCommand::Dev.spec(),
            &reporter,
            std::future::pending(),
        )
        .await;

        assert!(outcome.success());
        assert_eq!(reporter.lines(), vec!["run dev"]);
    }
}
