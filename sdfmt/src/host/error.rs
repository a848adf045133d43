// SPDX-License-Identifier: MIT

use core::fmt;
use std::io;

/// Failure of a `diskutil` invocation.
#[derive(Debug)]
pub enum ToolError {
    /// The utility is not installed or not in PATH.
    NotFound { tool: String },
    /// The process could not be spawned.
    Launch { command: String, source: io::Error },
    /// The process exited with a non-zero status (`None` when killed by a signal).
    Failed {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
    /// The process succeeded but its output cannot be read.
    Unparseable { command: String, reason: String },
}

impl fmt::Display for ToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolError::NotFound { tool } => {
                write!(f, "Missing dependency: `{tool}` is not installed or not in PATH.")
            }
            ToolError::Launch { command, source } => {
                write!(f, "Failed to run `{command}`: {source}")
            }
            ToolError::Failed {
                command,
                code,
                stderr,
            } => {
                match code {
                    Some(code) => {
                        write!(f, "Command `{command}` returned non-zero exit status {code}")?
                    }
                    None => write!(f, "Command `{command}` was terminated by a signal")?,
                }
                if !stderr.trim().is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }
                Ok(())
            }
            ToolError::Unparseable { command, reason } => {
                write!(f, "Unexpected output from `{command}`: {reason}")
            }
        }
    }
}

impl std::error::Error for ToolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ToolError::Launch { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type ToolResult<T = ()> = Result<T, ToolError>;
