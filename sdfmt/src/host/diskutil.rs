// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use crate::drives::FileSystem;
use crate::host::cmd_builder::{EraseCommandBuilder, display_command, info_args, list_args};
use crate::host::{DiskTool, ToolError, ToolResult};

/// Runs the host `diskutil` (or a stand-in given by path).
#[derive(Debug, Clone)]
pub struct Diskutil {
    name: String,
    program: PathBuf,
}

impl Diskutil {
    /// Resolves `tool` through PATH, or as a path when it contains a separator.
    pub fn locate(tool: &str) -> ToolResult<Self> {
        let program = which::which(tool).map_err(|_| ToolError::NotFound {
            tool: tool.to_string(),
        })?;
        crate::log_verbose!("Using disk tool: {}", program.display());
        Ok(Self {
            name: tool.to_string(),
            program,
        })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    fn command_line(&self, args: &[String]) -> String {
        display_command(&self.name, args)
    }

    fn capture(&self, args: &[String]) -> ToolResult<String> {
        let command = self.command_line(args);
        crate::log_verbose!("Running: {command}");

        let output = Command::new(&self.program)
            .args(args)
            .output()
            .map_err(|source| ToolError::Launch {
                command: command.clone(),
                source,
            })?;

        check_status(&command, &output)?;

        String::from_utf8(output.stdout).map_err(|e| ToolError::Unparseable {
            command,
            reason: e.to_string(),
        })
    }
}

fn check_status(command: &str, output: &Output) -> ToolResult {
    if output.status.success() {
        return Ok(());
    }
    Err(ToolError::Failed {
        command: command.to_string(),
        code: output.status.code(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

impl DiskTool for Diskutil {
    fn name(&self) -> &str {
        &self.name
    }

    fn list(&self) -> ToolResult<String> {
        self.capture(&list_args())
    }

    fn info(&self, identifier: &str) -> ToolResult<String> {
        self.capture(&info_args(identifier))
    }

    fn erase(&self, fs: FileSystem, volume_name: &str, identifier: &str) -> ToolResult {
        let args = fs.build_erase_command(volume_name, identifier);
        let command = self.command_line(&args);
        crate::log_verbose!("Running: {command}");

        // Inherit stdio so diskutil's own progress output reaches the terminal
        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .map_err(|source| ToolError::Launch {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ToolError::Failed {
                command,
                code: status.code(),
                stderr: String::new(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_missing_tool() {
        let err = Diskutil::locate("sdfmt-no-such-diskutil").unwrap_err();
        assert!(matches!(
            err,
            ToolError::NotFound { ref tool } if tool == "sdfmt-no-such-diskutil"
        ));
    }

    #[test]
    fn test_command_line_uses_given_name() {
        let tool = Diskutil {
            name: "diskutil".into(),
            program: PathBuf::from("/usr/sbin/diskutil"),
        };
        let args = FileSystem::ExFat.build_erase_command("UNTITLED", "/dev/disk4");
        assert_eq!(
            tool.command_line(&args),
            "diskutil eraseDisk exFAT UNTITLED /dev/disk4"
        );
    }
}
