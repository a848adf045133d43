// SPDX-License-Identifier: MIT

//! Line-pattern readers for `diskutil`'s human-readable output.
//!
//! This is a compatibility shim, not a protocol: detection is by substring, so
//! a locale or release that rewords the listing will change what is found.

use crate::drives::drive::{DriveRecord, NO_VOLUME_NAME};

/// Header lines look like `/dev/disk4 (external, physical):`.
pub fn is_drive_header(line: &str) -> bool {
    line.contains("external") || line.contains("internal")
}

pub fn is_partition_line(line: &str) -> bool {
    line.contains("0:")
}

/// Splits a `diskutil list` output into drives.
///
/// `resolve_volume` is called once per header, in order, with the drive
/// identifier; the first error aborts the scan.
pub fn parse_drive_list<F, E>(output: &str, mut resolve_volume: F) -> Result<Vec<DriveRecord>, E>
where
    F: FnMut(&str) -> Result<String, E>,
{
    let mut drives = Vec::new();
    let mut current: Option<DriveRecord> = None;

    for line in output.lines() {
        if is_drive_header(line) {
            if let Some(done) = current.take() {
                drives.push(done);
            }
            let identifier = line.split_whitespace().next().unwrap_or_default();
            let volume_name = resolve_volume(identifier)?;
            current = Some(DriveRecord::new(identifier, line, volume_name));
        } else if is_partition_line(line) {
            if let Some(drive) = current.as_mut() {
                drive.partitions.push(line.trim().to_string());
            }
        }
    }

    drives.extend(current);
    Ok(drives)
}

/// Extracts the volume name from `diskutil info` output.
///
/// Only the text between the first and second colon is kept, so a name that
/// itself contains `:` comes back truncated.
pub fn parse_volume_name(info: &str) -> String {
    info.lines()
        .find(|line| line.contains("Volume Name:"))
        .map(|line| line.split(':').nth(1).unwrap_or_default().trim().to_string())
        .unwrap_or_else(|| NO_VOLUME_NAME.to_string())
}
