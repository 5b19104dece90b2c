//! Package-manager executable resolution
//!
//! Resolution order:
//! 1. the tool's override variable, taken verbatim when set and non-empty
//! 2. the first search path directory holding the platform executable
//! 3. the bare fallback command, with a warning
//!
//! Resolution never fails. A tool that is not installed only surfaces once
//! the runner tries to spawn it.

use crate::config::ToolConfig;
use crate::report::Reporter;
use std::env::JoinPathsError;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// How to invoke the package-manager tool: an absolute path or a bare command
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ToolPath(OsString);

impl ToolPath {
    pub fn new(value: impl Into<OsString>) -> Self {
        Self(value.into())
    }

    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }
}

impl AsRef<OsStr> for ToolPath {
    fn as_ref(&self) -> &OsStr {
        &self.0
    }
}

impl fmt::Display for ToolPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

/// Where a [`ToolPath`] came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Taken from the override variable
    Override,
    /// Found in this search path directory
    SearchPath(PathBuf),
    /// Nothing found; the bare command is left to the OS
    Fallback,
}

/// Environment inputs for resolution, captured once so resolution stays a
/// pure function of its inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolverEnv {
    /// Value of the tool's override variable
    pub override_value: Option<OsString>,
    /// Value of the executable search path (`PATH`)
    pub search_path: Option<OsString>,
}

impl ResolverEnv {
    /// Read the override variable and `PATH` from the process environment
    pub fn from_process(config: &ToolConfig) -> Self {
        Self {
            override_value: std::env::var_os(config.override_env),
            search_path: std::env::var_os("PATH"),
        }
    }

    pub fn with_override(mut self, value: impl Into<OsString>) -> Self {
        self.override_value = Some(value.into());
        self
    }

    /// Build the search path from directories, joined with the platform separator.
    ///
    /// Fails when a directory contains the separator itself.
    pub fn with_search_dirs<I, P>(mut self, dirs: I) -> Result<Self, JoinPathsError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<OsStr>,
    {
        self.search_path = Some(std::env::join_paths(dirs)?);
        Ok(self)
    }
}

/// Locates the package-manager executable
#[derive(Debug, Clone)]
pub struct ToolResolver {
    config: ToolConfig,
}

impl ToolResolver {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Work out the tool path without reporting anything
    pub fn locate(&self, env: &ResolverEnv) -> (ToolPath, Resolution) {
        if let Some(value) = env.override_value.as_ref().filter(|v| !v.is_empty()) {
            debug!(
                variable = self.config.override_env,
                path = %value.to_string_lossy(),
                "tool path pinned by override"
            );
            return (ToolPath::new(value.clone()), Resolution::Override);
        }

        if let Some(search_path) = &env.search_path {
            for dir in std::env::split_paths(search_path) {
                // An empty entry would resolve relative to the working directory
                if dir.as_os_str().is_empty() {
                    continue;
                }
                let candidate = dir.join(self.config.executable);
                if candidate.is_file() {
                    debug!(path = %candidate.display(), "tool found on search path");
                    return (
                        ToolPath::new(candidate.into_os_string()),
                        Resolution::SearchPath(dir),
                    );
                }
            }
        }

        debug!(fallback = self.config.fallback, "tool not found");
        (ToolPath::new(self.config.fallback), Resolution::Fallback)
    }

    /// Resolve the tool path, warning once through `reporter` on fallback
    pub fn resolve(&self, env: &ResolverEnv, reporter: &dyn Reporter) -> ToolPath {
        let (path, resolution) = self.locate(env);
        if resolution == Resolution::Fallback {
            reporter.warning(&format!(
                "'{}' was not found via {} or the system PATH. Using '{}' as the command; \
                 make sure it is installed and available globally.",
                self.config.display_name, self.config.override_env, self.config.fallback
            ));
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RecordingReporter;
    use std::fs;

    fn test_config() -> ToolConfig {
        ToolConfig {
            name: "npm",
            display_name: "npm",
            override_env: "NPM_PATH",
            executable: "npm.cmd",
            fallback: "npm",
        }
    }

    #[test]
    fn test_override_is_returned_verbatim() {
        let resolver = ToolResolver::new(test_config());
        let env = ResolverEnv::default().with_override("/usr/local/bin/npm");
        let reporter = RecordingReporter::new();

        let path = resolver.resolve(&env, &reporter);

        assert_eq!(path.as_os_str(), "/usr/local/bin/npm");
        assert!(reporter.events().is_empty());
    }

    #[test]
    fn test_override_wins_over_search_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("npm.cmd"), "").unwrap();

        let resolver = ToolResolver::new(test_config());
        let env = ResolverEnv::default()
            .with_override("does/not/exist")
            .with_search_dirs([dir.path()])
            .unwrap();

        let (path, resolution) = resolver.locate(&env);
        assert_eq!(path.as_os_str(), "does/not/exist");
        assert_eq!(resolution, Resolution::Override);
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let resolver = ToolResolver::new(test_config());
        let env = ResolverEnv::default().with_override("");
        let reporter = RecordingReporter::new();

        let path = resolver.resolve(&env, &reporter);

        assert_eq!(path.as_os_str(), "npm");
        assert_eq!(reporter.warnings().len(), 1);
    }

    #[test]
    fn test_first_matching_directory_wins() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        let c = tempfile::tempdir().unwrap();
        fs::write(b.path().join("npm.cmd"), "").unwrap();
        fs::write(c.path().join("npm.cmd"), "").unwrap();

        let resolver = ToolResolver::new(test_config());
        let env = ResolverEnv::default()
            .with_search_dirs([a.path(), b.path(), c.path()])
            .unwrap();
        let reporter = RecordingReporter::new();

        let path = resolver.resolve(&env, &reporter);

        assert_eq!(path.as_os_str(), b.path().join("npm.cmd").as_os_str());
        assert!(reporter.warnings().is_empty());
    }

    #[test]
    fn test_directory_with_same_name_is_not_a_match() {
        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        fs::create_dir(a.path().join("npm.cmd")).unwrap();
        fs::write(b.path().join("npm.cmd"), "").unwrap();

        let resolver = ToolResolver::new(test_config());
        let env = ResolverEnv::default()
            .with_search_dirs([a.path(), b.path()])
            .unwrap();

        let (path, resolution) = resolver.locate(&env);
        assert_eq!(path.as_os_str(), b.path().join("npm.cmd").as_os_str());
        assert_eq!(resolution, Resolution::SearchPath(b.path().to_path_buf()));
    }

    #[test]
    fn test_fallback_warns_exactly_once() {
        let empty = tempfile::tempdir().unwrap();
        let resolver = ToolResolver::new(test_config());
        let env = ResolverEnv::default()
            .with_search_dirs([empty.path()])
            .unwrap();
        let reporter = RecordingReporter::new();

        let path = resolver.resolve(&env, &reporter);

        assert_eq!(path.as_os_str(), "npm");
        assert_eq!(reporter.warnings().len(), 1);
        assert!(reporter.warnings()[0].contains("NPM_PATH"));
    }

    #[test]
    fn test_missing_search_path_falls_back() {
        let resolver = ToolResolver::new(test_config());
        let (path, resolution) = resolver.locate(&ResolverEnv::default());
        assert_eq!(path.as_os_str(), "npm");
        assert_eq!(resolution, Resolution::Fallback);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("npm.cmd"), "").unwrap();

        let resolver = ToolResolver::new(test_config());
        let env = ResolverEnv::default()
            .with_search_dirs([dir.path()])
            .unwrap();

        assert_eq!(resolver.locate(&env), resolver.locate(&env));
    }

    #[cfg(unix)]
    #[test]
    fn test_search_dir_containing_separator_is_rejected() {
        let env = ResolverEnv::default().with_search_dirs(["/usr/bin", "/opt/a:b"]);
        assert!(env.is_err());
    }

    #[test]
    fn test_search_dirs_accept_paths_and_strings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("npm.cmd"), "").unwrap();

        let from_paths = ResolverEnv::default()
            .with_search_dirs([dir.path()])
            .unwrap();
        let from_strings = ResolverEnv::default()
            .with_search_dirs([dir.path().to_string_lossy().into_owned()])
            .unwrap();

        assert_eq!(from_paths, from_strings);
    }

    #[test]
    fn test_tool_path_display() {
        assert_eq!(ToolPath::new("npm").to_string(), "npm");
    }
}
