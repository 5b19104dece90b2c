//! Charm-style CLI prompts using cliclack

use crate::launcher::{self, LaunchCommand};
use crate::product::ProductConfig;
use crate::report::{ConsoleReporter, Reporter};
use crate::runtime::{ResolverEnv, RunOutcome, ToolPath, ToolResolver};
use crate::scaffold::{self, Database, ProjectSpec};
use anyhow::{Context, Result};
use std::future::Future;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Arguments for the create flow
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name (prompted for when absent)
    pub name: Option<String>,

    /// Database driver to include (prompted for when absent)
    pub database: Option<Database>,

    /// Directory the project folder is created in (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Author written to package.json
    pub author: Option<String>,

    /// Write the files but do not run the package manager
    pub skip_install: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Arguments for the launch flow
#[derive(Debug, Clone, Default)]
pub struct LaunchArgs {
    /// Directory holding the projects (defaults to the current directory)
    pub base_dir: Option<PathBuf>,

    /// Project to launch, by name or menu number
    pub project: Option<String>,

    /// Command to run (start, dev, build or menu number)
    pub command: Option<String>,

    /// Launch the base directory itself instead of picking a project.
    /// Runs `start` unless `command` is given.
    pub here: bool,
}

/// Run the create flow with interactive prompts.
///
/// Returns whether dependency installation succeeded (or was skipped).
pub async fn run_create<C: ProductConfig>(config: &C, args: CreateArgs) -> Result<bool> {
    debug!(product = config.name(), "create flow started");
    cliclack::intro(format!("Create a new {} project", config.display_name()))?;

    // Step 1: Resolve the base directory
    let base = base_directory(args.directory.as_deref())?;

    // Step 2: Project name
    let (name, project_dir) = select_name(&base, args.name.as_deref())?;

    // Step 3: Database
    let database = select_database(args.database, args.yes)?;

    // Step 4: Write files
    let spec = ProjectSpec::new(&name, database).with_author(args.author.unwrap_or_default());
    let spinner = cliclack::spinner();
    spinner.start(format!("Creating project '{}'...", name));
    let written = match scaffold::write_project(&project_dir, &spec).await {
        Ok(written) => written,
        Err(e) => {
            spinner.stop("Failed to create project");
            return Err(e.into());
        }
    };
    spinner.stop(format!(
        "Created {} files in {}",
        written.len(),
        project_dir.display()
    ));

    // Step 5: Install dependencies
    let installed = if args.skip_install {
        cliclack::log::info("Skipping dependency installation")?;
        true
    } else {
        let reporter = ConsoleReporter;
        let tool = resolve_tool(config, &reporter);
        scaffold::install_dependencies(&tool, &project_dir, &reporter)
            .await
            .success()
    };

    if installed {
        cliclack::log::success(format!("Project '{}' created successfully", name))?;
    } else {
        cliclack::log::error("There was a problem installing the project's dependencies")?;
    }

    // Step 6: Show next steps
    print_next_steps(config, &project_dir)?;

    Ok(installed)
}

/// Run the launch flow with interactive prompts, killing the child when `cancel` completes
pub async fn run_launch<C, F>(config: &C, args: LaunchArgs, cancel: F) -> Result<RunOutcome>
where
    C: ProductConfig,
    F: Future<Output = ()>,
{
    debug!(product = config.name(), "launch flow started");
    cliclack::intro(format!("Launch a {} project", config.display_name()))?;

    let base = base_directory(args.base_dir.as_deref())?;

    let (project_dir, command) = if args.here {
        cliclack::log::info(format!("Using project in {}", base.display()))?;
        let command = here_command(config, args.command.as_deref())?;
        (base, command)
    } else {
        let project = select_project(&base, args.project.as_deref())?;
        let command = select_command(config, args.command.as_deref())?;
        (base.join(project), command)
    };

    let reporter = ConsoleReporter;
    let tool = resolve_tool(config, &reporter);
    let outcome = launcher::launch(&tool, &project_dir, &command.spec(), &reporter, cancel).await;

    if outcome.success() {
        cliclack::outro(format!("'{}' finished", command))?;
    } else {
        cliclack::outro_cancel(format!("'{}' did not finish successfully", command))?;
    }

    Ok(outcome)
}

fn resolve_tool<C: ProductConfig>(config: &C, reporter: &dyn Reporter) -> ToolPath {
    let tool = config.tool();
    let env = ResolverEnv::from_process(&tool);
    ToolResolver::new(tool).resolve(&env, reporter)
}

fn base_directory(dir: Option<&Path>) -> Result<PathBuf> {
    let current_dir = std::env::current_dir().context("Failed to read the current directory")?;

    let path = match dir {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => current_dir.join(dir),
        None => current_dir,
    };

    if !path.is_dir() {
        anyhow::bail!("Directory does not exist: {}", path.display());
    }

    Ok(path)
}

fn select_name(base: &Path, specified: Option<&str>) -> Result<(String, PathBuf)> {
    // Use --name flag if provided
    if let Some(name) = specified {
        let (name, path) = scaffold::validate_project_name(base, name)?;
        cliclack::log::info(format!("Project name: {}", name))?;
        return Ok((name, path));
    }

    loop {
        let input: String = cliclack::input("Project name")
            .placeholder("my-electron-app")
            .interact()?;

        match scaffold::validate_project_name(base, &input) {
            Ok(selected) => return Ok(selected),
            Err(e) => cliclack::log::error(e.to_string())?,
        }
    }
}

fn select_database(specified: Option<Database>, yes: bool) -> Result<Database> {
    if let Some(database) = specified {
        cliclack::log::info(format!("Database: {}", database))?;
        return Ok(database);
    }

    // Non-interactive mode creates a simple project
    if yes {
        return Ok(Database::None);
    }

    let mut select = cliclack::select("Select the database to include");
    for database in Database::ALL {
        select = select.item(database, database.display_name(), database.dependency().unwrap_or(""));
    }
    let database: Database = select.initial_value(Database::None).interact()?;

    cliclack::log::success(format!("Included: {}", database))?;
    Ok(database)
}

fn select_project(base: &Path, specified: Option<&str>) -> Result<String> {
    let projects = launcher::list_projects(base)?;

    // Use --project flag if provided, by name first, then by menu number
    if let Some(project) = specified {
        if projects.iter().any(|p| p == project) {
            return Ok(project.to_string());
        }
        return Ok(launcher::select_by_index(&projects, project)?.clone());
    }

    let mut select = cliclack::select("Select the project to launch");
    for project in &projects {
        select = select.item(project.clone(), project, "");
    }
    let project: String = select.interact()?;

    Ok(project)
}

fn select_command<C: ProductConfig>(config: &C, specified: Option<&str>) -> Result<LaunchCommand> {
    let commands = config.launch_commands();

    if let Some(command) = specified {
        let command: LaunchCommand = command.parse()?;
        if !commands.contains(&command) {
            anyhow::bail!("Command '{}' is not available for this project", command);
        }
        return Ok(command);
    }

    let mut select = cliclack::select("Select the command to run");
    for command in commands {
        select = select.item(*command, command.to_string(), "");
    }
    let command: LaunchCommand = select.interact()?;

    Ok(command)
}

/// Command for the project in the base directory: `start` unless one was specified
fn here_command<C: ProductConfig>(config: &C, specified: Option<&str>) -> Result<LaunchCommand> {
    match specified {
        Some(_) => select_command(config, specified),
        None => Ok(LaunchCommand::Start),
    }
}

fn print_next_steps<C: ProductConfig>(config: &C, project_dir: &Path) -> Result<()> {
    let steps = config.next_steps(project_dir);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ElectronProduct;

    #[test]
    fn test_here_defaults_to_start() {
        assert_eq!(here_command(&ElectronProduct, None).unwrap(), LaunchCommand::Start);
    }

    #[test]
    fn test_here_honours_specified_command() {
        assert_eq!(
            here_command(&ElectronProduct, Some("build")).unwrap(),
            LaunchCommand::Build
        );
        assert_eq!(
            here_command(&ElectronProduct, Some("run dev")).unwrap(),
            LaunchCommand::Dev
        );
    }

    #[test]
    fn test_here_rejects_unknown_command() {
        assert!(here_command(&ElectronProduct, Some("deploy")).is_err());
    }
}
