// SPDX-License-Identifier: MIT

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::utils::{LogLevel, log_level};

/// Spinner shown on stderr while `diskutil` is being queried.
///
/// Only drawn at the normal level: verbose logs go to stdout and would tear it.
pub fn scanning_spinner(message: &str) -> ProgressBar {
    if log_level() != LogLevel::Normal {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} ({pos})") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
