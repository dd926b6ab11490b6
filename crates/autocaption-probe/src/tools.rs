//! External tool detection.

use crate::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Information about an external tool.
#[derive(Debug, Clone)]
pub struct ToolInfo {
    /// Name of the tool.
    pub name: String,
    /// Whether the tool is available.
    pub available: bool,
    /// Version string if available.
    pub version: Option<String>,
    /// Path to the tool executable.
    pub path: Option<PathBuf>,
}

/// Check if a tool is available using a custom version argument.
///
/// ```no_run
/// use autocaption_probe::check_tool_with_arg;
///
/// let info = check_tool_with_arg("ffprobe", "-version");
/// if info.available {
///     println!("ffprobe version: {:?}", info.version);
/// }
/// ```
pub fn check_tool_with_arg(name: &str, version_arg: &str) -> ToolInfo {
    check_program(name, Path::new(name), version_arg)
}

fn check_program(name: &str, program: &Path, version_arg: &str) -> ToolInfo {
    let result = Command::new(program).arg(version_arg).output();

    match result {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout)
                .lines()
                .next()
                .map(|s| s.to_string());

            ToolInfo {
                name: name.to_string(),
                available: true,
                version,
                path: which::which(program).ok(),
            }
        }
        _ => missing(name),
    }
}

fn missing(name: &str) -> ToolInfo {
    ToolInfo {
        name: name.to_string(),
        available: false,
        version: None,
        path: None,
    }
}

/// Check the tools metadata extraction relies on, looked up on PATH.
pub fn check_tools() -> Vec<ToolInfo> {
    check_tools_with(None)
}

/// Like [`check_tools`], trying a configured ffprobe before PATH.
pub fn check_tools_with(ffprobe_path: Option<&Path>) -> Vec<ToolInfo> {
    let ffprobe = match get_tool_path("ffprobe", ffprobe_path) {
        Ok(program) => check_program("ffprobe", &program, "-version"),
        Err(_) => missing("ffprobe"),
    };
    vec![ffprobe]
}

/// Get the path to a tool, preferring a configured path over PATH lookup.
///
/// # Errors
///
/// Returns an error if the tool is not found.
pub fn get_tool_path(name: &str, config_path: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = config_path {
        if path.exists() {
            return Ok(path.to_path_buf());
        }
        tracing::warn!("Configured {} not found at {:?}, searching PATH", name, path);
    }

    which::which(name).map_err(|_| Error::tool_not_found(name))
}
