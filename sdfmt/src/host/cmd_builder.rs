// SPDX-License-Identifier: MIT

use crate::drives::FileSystem;

pub fn list_args() -> Vec<String> {
    crate::args!["list"]
}

pub fn info_args(identifier: &str) -> Vec<String> {
    crate::args!["info", identifier]
}

/// Renders a command line for display, single-quoting arguments that would
/// otherwise split or vanish in a shell.
pub fn display_command(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .map(quote_arg)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_arg(arg: &str) -> String {
    let plain = !arg.is_empty()
        && !arg
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '\'' | '"' | '\\' | '$' | '`'));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

pub trait EraseCommandBuilder {
    /// Volume name `diskutil` accepts for this file system without complaint.
    fn default_volume_name(&self) -> &'static str;

    /// Builds the `eraseDisk` arguments: file system, volume name, then device.
    fn build_erase_command(&self, volume_name: &str, device: &str) -> Vec<String>;
}

impl EraseCommandBuilder for FileSystem {
    fn default_volume_name(&self) -> &'static str {
        match self {
            // FAT32 labels are short, upper-case and restricted in charset
            FileSystem::Fat32 => "NO_NAME",
            FileSystem::ExFat | FileSystem::JournaledHfsPlus => "UNTITLED",
        }
    }

    fn build_erase_command(&self, volume_name: &str, device: &str) -> Vec<String> {
        crate::args!["eraseDisk", self.label(), volume_name, device]
    }
}
