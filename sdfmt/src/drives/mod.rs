// SPDX-License-Identifier: MIT

pub mod drive;
pub mod filesystem;
pub mod parser;

pub use drive::*;
pub use filesystem::*;

use crate::host::{DiskTool, ToolError, ToolResult};
use crate::utils::progress::scanning_spinner;

/// Current volume name of `identifier`, or [`NO_VOLUME_NAME`].
///
/// A non-zero `diskutil info` counts as "no volume name": substring header
/// detection can hand over identifiers `diskutil` does not know.
pub fn resolve_volume_name<T: DiskTool + ?Sized>(
    tool: &T,
    identifier: &str,
) -> ToolResult<String> {
    match tool.info(identifier) {
        Ok(info) => Ok(parser::parse_volume_name(&info)),
        Err(err @ ToolError::Failed { .. }) => {
            crate::log_verbose!("No volume name for '{identifier}': {err}");
            Ok(NO_VOLUME_NAME.to_string())
        }
        Err(err) => Err(err),
    }
}

/// Lists attached drives, querying `diskutil info` once per drive.
pub fn enumerate_drives<T: DiskTool + ?Sized>(tool: &T) -> ToolResult<Vec<DriveRecord>> {
    let pb = scanning_spinner("Scanning drives");
    let listing = match tool.list() {
        Ok(listing) => listing,
        Err(err) => {
            pb.finish_and_clear();
            return Err(err);
        }
    };

    let drives = parser::parse_drive_list(&listing, |identifier| {
        pb.set_message(format!("Reading {identifier}"));
        let name = resolve_volume_name(tool, identifier);
        pb.inc(1);
        name
    });

    pb.finish_and_clear();
    let drives = drives?;
    crate::log_verbose!("Found {} drive(s)", drives.len());
    Ok(drives)
}
