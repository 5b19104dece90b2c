//! Package-manager tool configuration

/// Configuration for an external package-manager tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Name of the tool (e.g., "npm")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// Environment variable that pins the tool path when set
    pub override_env: &'static str,
    /// File name looked up in each search path directory
    pub executable: &'static str,
    /// Bare command used when the tool cannot be located
    pub fallback: &'static str,
}

/// Executable name of the npm wrapper for the current platform
#[cfg(windows)]
const NPM_EXECUTABLE: &str = "npm.cmd";
#[cfg(not(windows))]
const NPM_EXECUTABLE: &str = "npm";

/// Pre-configured npm tool
pub fn npm_tool() -> ToolConfig {
    ToolConfig {
        name: "npm",
        display_name: "npm",
        override_env: "NPM_PATH",
        executable: NPM_EXECUTABLE,
        fallback: "npm",
    }
}
