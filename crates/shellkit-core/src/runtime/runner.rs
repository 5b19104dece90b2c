//! Subprocess orchestration for package-manager commands
//!
//! A run spawns one child with piped stdout and stderr. Stdout is forwarded
//! line by line to the reporter as it arrives. Stderr is drained on its own
//! task so neither pipe can fill up and stall the child, but it is only shown
//! once stdout has closed: every stdout line appears before the stderr block.
//!
//! Failures never escape as errors. Spawn failures, non-zero exits and
//! cancellation all come back as a [`RunOutcome`].

use crate::report::Reporter;
use crate::runtime::resolve::ToolPath;
use std::fmt;
use std::future::Future;
use std::io;
use std::path::Path;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::{Child, ChildStderr, ChildStdout, Command};
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, trace};

/// How long to wait for leftover stderr after a cancelled child is killed
const STDERR_GRACE: Duration = Duration::from_millis(500);

/// Ordered argument tokens for one tool invocation (e.g. `install`, `run build`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandSpec {
    args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.args.join(" "))
    }
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The child exited with a code
    Exited,
    /// The child ended without an exit code (killed by a signal, or the wait failed)
    Terminated,
    /// The child could not be started
    SpawnFailed,
    /// The run was cancelled and the child killed
    Killed,
}

/// Result of one subprocess execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    success: bool,
    exit_code: Option<i32>,
    diagnostic: String,
    status: RunStatus,
}

impl RunOutcome {
    fn exited(code: i32, diagnostic: String) -> Self {
        Self {
            success: code == 0,
            exit_code: Some(code),
            diagnostic,
            status: RunStatus::Exited,
        }
    }

    fn terminated(diagnostic: String) -> Self {
        Self {
            success: false,
            exit_code: None,
            diagnostic,
            status: RunStatus::Terminated,
        }
    }

    fn spawn_failed() -> Self {
        Self {
            success: false,
            exit_code: None,
            diagnostic: String::new(),
            status: RunStatus::SpawnFailed,
        }
    }

    fn killed(diagnostic: String) -> Self {
        Self {
            success: false,
            exit_code: None,
            diagnostic,
            status: RunStatus::Killed,
        }
    }

    /// True iff the child was spawned and exited with code 0
    pub fn success(&self) -> bool {
        self.success
    }

    /// Exit code, absent when the child never started or ended without one
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_code
    }

    /// Everything the child wrote to stderr (empty if nothing)
    pub fn diagnostic(&self) -> &str {
        &self.diagnostic
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }
}

/// Runs package-manager commands, reporting progress to a [`Reporter`]
pub struct ProcessRunner<'a> {
    reporter: &'a dyn Reporter,
}

enum Phase<T> {
    Done(T),
    Cancelled,
}

impl<'a> ProcessRunner<'a> {
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        Self { reporter }
    }

    /// Run `tool args` in `working_dir` until the child exits
    pub async fn run(&self, tool: &ToolPath, working_dir: &Path, args: &CommandSpec) -> RunOutcome {
        self.run_until(tool, working_dir, args, std::future::pending())
            .await
    }

    /// Like [`run`](Self::run), but kills the child when `cancel` completes first
    pub async fn run_until<F>(
        &self,
        tool: &ToolPath,
        working_dir: &Path,
        args: &CommandSpec,
        cancel: F,
    ) -> RunOutcome
    where
        F: Future<Output = ()>,
    {
        debug!(
            tool = %tool,
            dir = %working_dir.display(),
            command = %args,
            "spawning"
        );

        let spawned = Command::new(tool.as_os_str())
            .args(args.args())
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                self.reporter
                    .error(&format!("Failed to run '{} {}': {}", tool, args, e));
                return RunOutcome::spawn_failed();
            }
        };

        let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
            self.reporter
                .error(&format!("Failed to capture output of '{} {}'", tool, args));
            let _ = child.kill().await;
            return RunOutcome::spawn_failed();
        };

        let mut stderr_task = tokio::spawn(drain(stderr));
        tokio::pin!(cancel);

        let streams = async {
            self.forward_lines(stdout).await;
            (&mut stderr_task).await
        };
        let captured = tokio::select! {
            captured = streams => Phase::Done(captured),
            _ = &mut cancel => Phase::Cancelled,
        };
        let captured = match captured {
            Phase::Done(captured) => captured,
            Phase::Cancelled => return self.terminate(child, stderr_task, args).await,
        };

        let diagnostic = match captured {
            Ok(Ok(bytes)) => String::from_utf8_lossy(&bytes).into_owned(),
            Ok(Err(e)) => {
                self.reporter.error(&format!("Error reading stderr: {}", e));
                String::new()
            }
            Err(e) => {
                self.reporter.error(&format!("Error reading stderr: {}", e));
                String::new()
            }
        };
        if !diagnostic.is_empty() {
            self.reporter
                .diagnostic(diagnostic.trim_end_matches(['\n', '\r']));
        }

        let waited = tokio::select! {
            status = child.wait() => Phase::Done(status),
            _ = &mut cancel => Phase::Cancelled,
        };
        match waited {
            Phase::Done(Ok(status)) => self.finish(status, diagnostic, args),
            Phase::Done(Err(e)) => {
                self.reporter
                    .error(&format!("Failed to wait for '{} {}': {}", tool, args, e));
                RunOutcome::terminated(diagnostic)
            }
            Phase::Cancelled => {
                if let Err(e) = child.kill().await {
                    self.reporter
                        .error(&format!("Failed to terminate process: {}", e));
                }
                self.reporter.warning(&format!("'{}' was cancelled", args));
                RunOutcome::killed(diagnostic)
            }
        }
    }

    async fn forward_lines(&self, stdout: ChildStdout) {
        let mut lines = BufReader::new(stdout).split(b'\n');
        loop {
            match lines.next_segment().await {
                Ok(Some(segment)) => {
                    let line = String::from_utf8_lossy(&segment);
                    self.reporter.line(line.trim_end_matches('\r'));
                }
                Ok(None) => break,
                Err(e) => {
                    self.reporter.error(&format!("Error reading stdout: {}", e));
                    break;
                }
            }
        }
        trace!("stdout closed");
    }

    fn finish(&self, status: ExitStatus, diagnostic: String, args: &CommandSpec) -> RunOutcome {
        debug!(?status, "child exited");
        match status.code() {
            Some(0) => RunOutcome::exited(0, diagnostic),
            Some(code) => {
                self.reporter
                    .error(&format!("'{}' failed with exit code {}", args, code));
                RunOutcome::exited(code, diagnostic)
            }
            None => {
                self.reporter
                    .error(&format!("'{}' was terminated without an exit code", args));
                RunOutcome::terminated(diagnostic)
            }
        }
    }

    async fn terminate(
        &self,
        mut child: Child,
        mut stderr_task: JoinHandle<io::Result<Vec<u8>>>,
        args: &CommandSpec,
    ) -> RunOutcome {
        if let Err(e) = child.kill().await {
            self.reporter
                .error(&format!("Failed to terminate process: {}", e));
        }

        // Grandchildren may still hold the pipe open
        let diagnostic = match timeout(STDERR_GRACE, &mut stderr_task).await {
            Ok(Ok(Ok(bytes))) => String::from_utf8_lossy(&bytes).into_owned(),
            Ok(_) => String::new(),
            Err(_) => {
                stderr_task.abort();
                String::new()
            }
        };

        self.reporter.warning(&format!("'{}' was cancelled", args));
        RunOutcome::killed(diagnostic)
    }
}

async fn drain(mut stderr: ChildStderr) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    stderr.read_to_end(&mut buf).await?;
    Ok(buf)
}
