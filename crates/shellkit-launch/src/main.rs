//! shellkit-launch - Pick a scaffolded project and run one of its npm scripts

use anyhow::Result;
use clap::Parser;
use shellkit_core::logging::{init_logging, LogLevel};
use shellkit_core::tui::LaunchArgs;
use shellkit_core::{ElectronProduct, RunOutcome, RunStatus};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code used when the child is cancelled with Ctrl+C
const INTERRUPTED: u8 = 130;

#[derive(Parser, Debug)]
#[command(name = "shellkit-launch")]
#[command(about = "CLI for launching scaffolded Electron projects")]
#[command(version)]
pub struct Args {
    /// Directory holding the projects (defaults to the current directory)
    #[arg(short, long = "base-dir")]
    pub base_dir: Option<PathBuf>,

    /// Project to launch, by name or menu number
    #[arg(short, long)]
    pub project: Option<String>,

    /// Command to run: start, dev or build
    #[arg(short, long)]
    pub command: Option<String>,

    /// Launch the project in the base directory itself (runs `start` unless --command is given)
    #[arg(long, conflicts_with = "project")]
    pub here: bool,

    /// Log verbosity (overrides SHELLKIT_LOG)
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevel>,
}

impl From<Args> for LaunchArgs {
    fn from(args: Args) -> Self {
        LaunchArgs {
            base_dir: args.base_dir,
            project: args.project,
            command: args.command,
            here: args.here,
        }
    }
}

/// Resolves on the first Ctrl+C; never resolves if the handler cannot be installed
async fn interrupted() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

/// Process exit status for a finished launch: the child's own code when it
/// fits, 130 after Ctrl+C, 1 for every other failure
fn exit_status(outcome: &RunOutcome) -> u8 {
    match outcome.status() {
        RunStatus::Killed => INTERRUPTED,
        _ if outcome.success() => 0,
        _ => match outcome.exit_code().and_then(|c| u8::try_from(c).ok()) {
            Some(code) if code != 0 => code,
            _ => 1,
        },
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    let args = Args::parse();
    init_logging(args.log_level)?;

    let result = shellkit_core::run_launch(&ElectronProduct, args.into(), interrupted()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    Ok(ExitCode::from(exit_status(&result?)))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use shellkit_core::report::RecordingReporter;
    use shellkit_core::{CommandSpec, ProcessRunner, ToolPath};
    use std::time::Duration;

    async fn run_sh(body: &str) -> RunOutcome {
        let reporter = RecordingReporter::new();
        ProcessRunner::new(&reporter)
            .run(
                &ToolPath::new("/bin/sh"),
                &std::env::temp_dir(),
                &CommandSpec::new(["-c", body]),
            )
            .await
    }

    #[tokio::test]
    async fn test_success_exits_zero() {
        assert_eq!(exit_status(&run_sh("exit 0").await), 0);
    }

    #[tokio::test]
    async fn test_child_exit_code_is_passed_through() {
        assert_eq!(exit_status(&run_sh("exit 3").await), 3);
    }

    #[tokio::test]
    async fn test_signalled_child_exits_one() {
        // Killed by a signal, so there is no exit code to pass through
        let outcome = run_sh("kill -TERM $$").await;
        assert_eq!(outcome.status(), RunStatus::Terminated);
        assert_eq!(exit_status(&outcome), 1);
    }

    #[tokio::test]
    async fn test_missing_executable_exits_one() {
        let reporter = RecordingReporter::new();
        let outcome = ProcessRunner::new(&reporter)
            .run(
                &ToolPath::new("/nonexistent/shellkit-npm"),
                &std::env::temp_dir(),
                &CommandSpec::new(["start"]),
            )
            .await;

        assert_eq!(outcome.status(), RunStatus::SpawnFailed);
        assert_eq!(exit_status(&outcome), 1);
    }

    #[tokio::test]
    async fn test_cancelled_run_exits_interrupted() {
        let reporter = RecordingReporter::new();
        let outcome = ProcessRunner::new(&reporter)
            .run_until(
                &ToolPath::new("/bin/sh"),
                &std::env::temp_dir(),
                &CommandSpec::new(["-c", "exec sleep 30"]),
                tokio::time::sleep(Duration::from_millis(200)),
            )
            .await;

        assert_eq!(outcome.status(), RunStatus::Killed);
        assert_eq!(exit_status(&outcome), 130);
    }
}
