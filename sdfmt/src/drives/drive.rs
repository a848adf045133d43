// SPDX-License-Identifier: MIT

use std::io::{self, Write};

/// Reported when `diskutil info` has no `Volume Name:` line.
pub const NO_VOLUME_NAME: &str = "Not Mounted or No Volume Name";

/// One disk from `diskutil list`, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriveRecord {
    /// Device token, e.g. `/dev/disk4`.
    pub identifier: String,
    /// Header line, verbatim.
    pub description: String,
    pub volume_name: String,
    /// Partition lines in listing order, trimmed.
    pub partitions: Vec<String>,
}

impl DriveRecord {
    pub fn new(identifier: &str, description: &str, volume_name: String) -> Self {
        Self {
            identifier: identifier.to_string(),
            description: description.to_string(),
            volume_name,
            partitions: Vec::new(),
        }
    }
}

impl core::fmt::Display for DriveRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - Volume Name: {}", self.description, self.volume_name)?;
        for part in &self.partitions {
            write!(f, "\n   {part}")?;
        }
        Ok(())
    }
}

/// Writes the 1-based drive menu.
pub fn write_listing<W: Write>(out: &mut W, drives: &[DriveRecord]) -> io::Result<()> {
    writeln!(out, "Available drives:")?;
    for (i, drive) in drives.iter().enumerate() {
        writeln!(out, "{}. {drive}", i + 1)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_layout() {
        let mut first = DriveRecord::new(
            "/dev/disk4",
            "/dev/disk4 (external, physical):",
            "SDCARD".into(),
        );
        first.partitions.push("0: FDisk_partition_scheme *31.9 GB disk4".into());
        let second = DriveRecord::new(
            "/dev/disk5",
            "/dev/disk5 (external, physical):",
            NO_VOLUME_NAME.into(),
        );

        let mut out = Vec::new();
        write_listing(&mut out, &[first, second]).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Available drives:\n\
             1. /dev/disk4 (external, physical): - Volume Name: SDCARD\n   \
             0: FDisk_partition_scheme *31.9 GB disk4\n\
             2. /dev/disk5 (external, physical): - Volume Name: Not Mounted or No Volume Name\n"
        );
    }
}
