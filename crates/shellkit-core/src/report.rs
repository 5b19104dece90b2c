//! Display sinks for user-facing output
//!
//! Everything the resolver and runner show to the user goes through a
//! [`Reporter`]. The console implementation styles messages with `colored`;
//! [`RecordingReporter`] keeps them in memory in the order they arrived.

use colored::Colorize;
use std::fmt::Display;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Sink for user-facing output
pub trait Reporter: Send + Sync {
    /// One line of child standard output
    fn line(&self, line: &str);

    /// Captured standard error of a child, shown as one block
    fn diagnostic(&self, text: &str);

    fn info(&self, message: &str);

    fn warning(&self, message: &str);

    fn error(&self, message: &str);

    fn success(&self, message: &str);
}

/// Reporter that writes to the terminal
///
/// Write failures such as a closed pipe are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

fn emit(mut out: impl Write, text: impl Display) {
    let _ = writeln!(out, "{}", text);
}

impl Reporter for ConsoleReporter {
    fn line(&self, line: &str) {
        emit(io::stdout().lock(), line);
    }

    fn diagnostic(&self, text: &str) {
        emit(io::stderr().lock(), text.yellow());
    }

    fn info(&self, message: &str) {
        emit(io::stdout().lock(), message.cyan());
    }

    fn warning(&self, message: &str) {
        emit(
            io::stderr().lock(),
            format_args!("{} {}", "Warning:".yellow().bold(), message.yellow()),
        );
    }

    fn error(&self, message: &str) {
        emit(
            io::stderr().lock(),
            format_args!("{} {}", "Error:".red().bold(), message.red()),
        );
    }

    fn success(&self, message: &str) {
        emit(io::stdout().lock(), message.green());
    }
}

/// A single event captured by [`RecordingReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    Line(String),
    Diagnostic(String),
    Info(String),
    Warning(String),
    Error(String),
    Success(String),
}

/// Reporter that records events instead of printing them
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events recorded so far, oldest first
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded stdout lines
    pub fn lines(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::Line(l) => Some(l),
                _ => None,
            })
            .collect()
    }

    /// Recorded warnings
    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::Warning(w) => Some(w),
                _ => None,
            })
            .collect()
    }

    /// Recorded errors
    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                ReportEvent::Error(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ReportEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl Reporter for RecordingReporter {
    fn line(&self, line: &str) {
        self.push(ReportEvent::Line(line.to_string()));
    }

    fn diagnostic(&self, text: &str) {
        self.push(ReportEvent::Diagnostic(text.to_string()));
    }

    fn info(&self, message: &str) {
        self.push(ReportEvent::Info(message.to_string()));
    }

    fn warning(&self, message: &str) {
        self.push(ReportEvent::Warning(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.push(ReportEvent::Error(message.to_string()));
    }

    fn success(&self, message: &str) {
        self.push(ReportEvent::Success(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_emit_ignores_broken_pipe() {
        emit(ClosedPipe, "lost line");
        emit(ClosedPipe, "lost warning".yellow());
    }

    #[test]
    fn test_emit_writes_one_line() {
        let mut out = Vec::new();
        emit(&mut out, "hello");
        assert_eq!(out, b"hello\n");
    }

    #[test]
    fn test_recording_reporter_keeps_order() {
        let reporter = RecordingReporter::new();
        reporter.line("first");
        reporter.warning("careful");
        reporter.line("second");

        assert_eq!(
            reporter.events(),
            vec![
                ReportEvent::Line("first".to_string()),
                ReportEvent::Warning("careful".to_string()),
                ReportEvent::Line("second".to_string()),
            ]
        );
        assert_eq!(reporter.lines(), vec!["first", "second"]);
        assert_eq!(reporter.warnings(), vec!["careful"]);
        assert!(reporter.errors().is_empty());
    }
}
