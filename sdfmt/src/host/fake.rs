// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;

use crate::drives::FileSystem;
use crate::host::{DiskTool, ToolError, ToolResult};

/// In-memory `diskutil` that records every erase request.
#[derive(Default)]
pub struct FakeTool {
    pub listing: String,
    pub infos: HashMap<String, String>,
    pub erase_exit_code: Option<i32>,
    pub erased: RefCell<Vec<(FileSystem, String, String)>>,
    pub info_calls: RefCell<Vec<String>>,
    pub list_exit_code: Option<i32>,
    pub unknown_info_code: Option<i32>,
    pub info_unreachable: bool,
}

impl FakeTool {
    pub fn with_listing(listing: &str) -> Self {
        Self {
            listing: listing.to_string(),
            ..Default::default()
        }
    }

    pub fn with_info(mut self, identifier: &str, info: &str) -> Self {
        self.infos.insert(identifier.to_string(), info.to_string());
        self
    }

    /// `info` on an identifier without canned output exits with `code`.
    pub fn failing_unknown_info(mut self, code: i32) -> Self {
        self.unknown_info_code = Some(code);
        self
    }

    pub fn unreachable_info(mut self) -> Self {
        self.info_unreachable = true;
        self
    }

    pub fn failing_erase(mut self, code: i32) -> Self {
        self.erase_exit_code = Some(code);
        self
    }
}

impl DiskTool for FakeTool {
    fn name(&self) -> &str {
        "diskutil"
    }

    fn list(&self) -> ToolResult<String> {
        if let Some(code) = self.list_exit_code {
            return Err(ToolError::Failed {
                command: "diskutil list".into(),
                code: Some(code),
                stderr: String::new(),
            });
        }
        Ok(self.listing.clone())
    }

    fn info(&self, identifier: &str) -> ToolResult<String> {
        self.info_calls.borrow_mut().push(identifier.to_string());
        let command = format!("diskutil info {identifier}");
        if self.info_unreachable {
            return Err(ToolError::Launch {
                command,
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        match (self.infos.get(identifier), self.unknown_info_code) {
            (Some(info), _) => Ok(info.clone()),
            (None, Some(code)) => Err(ToolError::Failed {
                command,
                code: Some(code),
                stderr: format!("Could not find disk: {identifier}"),
            }),
            (None, None) => Ok(String::new()),
        }
    }

    fn erase(&self, fs: FileSystem, volume_name: &str, identifier: &str) -> ToolResult {
        self.erased
            .borrow_mut()
            .push((fs, volume_name.to_string(), identifier.to_string()));
        match self.erase_exit_code {
            Some(code) => Err(ToolError::Failed {
                command: format!("diskutil eraseDisk {fs} {volume_name} {identifier}"),
                code: Some(code),
                stderr: "Error: -69877: Couldn't open device".into(),
            }),
            None => Ok(()),
        }
    }
}
