// SPDX-License-Identifier: MIT

use core::fmt;
use std::io::{self, BufRead, Write};

use crate::drives::{DriveRecord, FileSystem, enumerate_drives, write_listing};
use crate::host::cmd_builder::{EraseCommandBuilder, display_command};
use crate::host::{DiskTool, ToolError};

pub const DRIVE_PROMPT: &str = "Select the drive to format (e.g., 1, 2, ...): ";
pub const FS_PROMPT: &str = "Enter your choice (1, 2, or 3): ";

/// Prompt/answer channel. Answers come back with the line terminator removed.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, line: impl fmt::Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// An exhausted input reads as an empty answer.
    pub fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        let len = answer.trim_end_matches(['\n', '\r']).len();
        answer.truncate(len);
        Ok(answer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidChoice,
    InvalidFileSystem,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::InvalidChoice => write!(f, "Invalid choice."),
            Rejection::InvalidFileSystem => write!(f, "Invalid file system choice."),
        }
    }
}

/// How one interactive run ended.
#[derive(Debug)]
pub enum Outcome {
    NoDrives,
    Rejected(Rejection),
    Cancelled,
    DryRun {
        command: String,
    },
    Formatted {
        file_system: FileSystem,
        volume_name: &'static str,
    },
    FormatFailed {
        error: ToolError,
    },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NoDrives => write!(f, "No drives found."),
            Outcome::Rejected(rejection) => write!(f, "{rejection}"),
            Outcome::Cancelled => write!(f, "Formatting cancelled."),
            Outcome::DryRun { command } => write!(f, "Dry run, would run: {command}"),
            Outcome::Formatted {
                file_system,
                volume_name,
            } => write!(
                f,
                "Drive formatted to {file_system} with volume name {volume_name} successfully."
            ),
            Outcome::FormatFailed { error } => write!(f, "Error during formatting: {error}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    /// Print the erase command instead of running it.
    pub dry_run: bool,
}

/// A validated erase request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErasePlan {
    pub identifier: String,
    pub file_system: FileSystem,
    pub volume_name: &'static str,
}

impl ErasePlan {
    pub fn new(identifier: &str, file_system: FileSystem) -> Self {
        Self {
            identifier: identifier.to_string(),
            file_system,
            volume_name: file_system.default_volume_name(),
        }
    }

    pub fn args(&self) -> Vec<String> {
        self.file_system.build_erase_command(self.volume_name, &self.identifier)
    }
}

/// Converts a 1-based answer into an index into `count` drives.
pub fn parse_drive_choice(answer: &str, count: usize) -> Result<usize, Rejection> {
    match answer.trim().parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(Rejection::InvalidChoice),
    }
}

pub fn parse_file_system_choice(answer: &str) -> Result<FileSystem, Rejection> {
    FileSystem::from_choice(answer).ok_or(Rejection::InvalidFileSystem)
}

pub fn is_confirmed(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("yes")
}

/// Stops the pipeline early, either on I/O failure or with a final outcome.
enum Halt {
    Io(io::Error),
    Done(Outcome),
}

impl From<io::Error> for Halt {
    fn from(e: io::Error) -> Self {
        Halt::Io(e)
    }
}

impl From<Rejection> for Halt {
    fn from(r: Rejection) -> Self {
        Halt::Done(Outcome::Rejected(r))
    }
}

/// Prints the drive listing without prompting; returns the number of drives.
pub fn list<T, R, W>(tool: &T, console: &mut Console<R, W>) -> anyhow::Result<usize>
where
    T: DiskTool + ?Sized,
    R: BufRead,
    W: Write,
{
    let drives = enumerate_drives(tool)?;
    if drives.is_empty() {
        console.say(Outcome::NoDrives)?;
    } else {
        write_listing(console.output(), &drives)?;
    }
    Ok(drives.len())
}

/// Enumerates drives, then runs the interactive pipeline on them.
pub fn run<T, R, W>(
    tool: &T,
    console: &mut Console<R, W>,
    options: &FormatOptions,
) -> anyhow::Result<Outcome>
where
    T: DiskTool + ?Sized,
    R: BufRead,
    W: Write,
{
    let drives = enumerate_drives(tool)?;
    Ok(run_with_drives(tool, &drives, console, options)?)
}

pub fn run_with_drives<T, R, W>(
    tool: &T,
    drives: &[DriveRecord],
    console: &mut Console<R, W>,
    options: &FormatOptions,
) -> io::Result<Outcome>
where
    T: DiskTool + ?Sized,
    R: BufRead,
    W: Write,
{
    let plan = match select(drives, console) {
        Ok(plan) => plan,
        Err(Halt::Done(outcome)) => return Ok(outcome),
        Err(Halt::Io(e)) => return Err(e),
    };

    if options.dry_run {
        let command = display_command(tool.name(), &plan.args());
        return Ok(Outcome::DryRun { command });
    }

    crate::log_info!(
        "Erasing {} as {} ({})",
        plan.identifier,
        plan.file_system,
        plan.volume_name
    );
    Ok(execute(tool, &plan))
}

fn select<R: BufRead, W: Write>(
    drives: &[DriveRecord],
    console: &mut Console<R, W>,
) -> Result<ErasePlan, Halt> {
    if drives.is_empty() {
        return Err(Halt::Done(Outcome::NoDrives));
    }
    write_listing(console.output(), drives)?;

    let answer = console.ask(DRIVE_PROMPT)?;
    let drive = &drives[parse_drive_choice(&answer, drives.len())?];

    console.say("Choose file system format:")?;
    for (i, fs) in FileSystem::ALL.iter().enumerate() {
        console.say(format_args!("{}. {}", i + 1, fs.menu_label()))?;
    }
    let answer = console.ask(FS_PROMPT)?;
    let file_system = parse_file_system_choice(&answer)?;

    let answer = console.ask(&format!(
        "Are you sure you want to format {} to {}? This will erase all data on the drive. \
         Type 'yes' to confirm: ",
        drive.identifier, file_system
    ))?;
    if !is_confirmed(&answer) {
        return Err(Halt::Done(Outcome::Cancelled));
    }

    Ok(ErasePlan::new(&drive.identifier, file_system))
}

/// Runs the erase; a failure is reported, not propagated.
pub fn execute<T: DiskTool + ?Sized>(tool: &T, plan: &ErasePlan) -> Outcome {
    match tool.erase(plan.file_system, plan.volume_name, &plan.identifier) {
        Ok(()) => Outcome::Formatted {
            file_system: plan.file_system,
            volume_name: plan.volume_name,
        },
        Err(error) => Outcome::FormatFailed { error },
    }
}
