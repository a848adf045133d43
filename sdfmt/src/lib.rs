// SPDX-License-Identifier: MIT

//! Interactive disk formatter driving macOS `diskutil`.
//!
//! The flow is linear: [`drives::enumerate_drives`] reads `diskutil list`
//! (and `diskutil info` per drive), [`flow::run`] asks which drive and file
//! system to use, and a confirmed request ends in `diskutil eraseDisk`.

pub mod drives;
pub mod flow;
pub mod host;
pub mod utils;
