// SPDX-License-Identifier: MIT

use crate::drives::FileSystem;

pub mod cmd_builder;
mod diskutil;
mod error;

#[macro_use]
mod macros;

#[cfg(test)]
pub(crate) mod fake;

pub use diskutil::Diskutil;
pub use error::*;

/// The three `diskutil` subcommands this program depends on.
pub trait DiskTool {
    /// Name shown in command lines and messages.
    fn name(&self) -> &str;

    /// Raw stdout of `diskutil list`.
    fn list(&self) -> ToolResult<String>;

    /// Raw stdout of `diskutil info <identifier>`.
    fn info(&self, identifier: &str) -> ToolResult<String>;

    /// `diskutil eraseDisk <fs> <volume_name> <identifier>`.
    fn erase(&self, fs: FileSystem, volume_name: &str, identifier: &str) -> ToolResult;
}
