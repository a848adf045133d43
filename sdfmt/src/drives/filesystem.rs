// SPDX-License-Identifier: MIT

/// Target file systems offered by the format menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSystem {
    ExFat,
    Fat32,
    /// Journaled, case-preserving HFS+ ("Mac OS Extended (Journaled)").
    JournaledHfsPlus,
}

impl FileSystem {
    /// Menu order; entry `i` is selected by typing `i + 1`.
    pub const ALL: [FileSystem; 3] = [
        FileSystem::ExFat,
        FileSystem::Fat32,
        FileSystem::JournaledHfsPlus,
    ];

    /// Maps a menu answer (`"1"`, `"2"` or `"3"`) to a file system.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(FileSystem::ExFat),
            "2" => Some(FileSystem::Fat32),
            "3" => Some(FileSystem::JournaledHfsPlus),
            _ => None,
        }
    }

    /// Personality name understood by `diskutil eraseDisk`.
    pub fn label(&self) -> &'static str {
        match self {
            FileSystem::ExFat => "exFAT",
            FileSystem::Fat32 => "MS-DOS FAT32",
            FileSystem::JournaledHfsPlus => "JHFS+",
        }
    }

    pub fn menu_label(&self) -> &'static str {
        match self {
            FileSystem::ExFat => "exFAT",
            FileSystem::Fat32 => "FAT32",
            FileSystem::JournaledHfsPlus => "MacOS Extended Journaled",
        }
    }
}

impl core::fmt::Display for FileSystem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.label())
    }
}
