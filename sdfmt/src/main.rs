// SPDX-License-Identifier: MIT

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io;

use sdfmt::flow::{self, Console, FormatOptions, Outcome};
use sdfmt::host::Diskutil;
use sdfmt::utils::{LogLevel, set_log_level};

#[derive(Parser)]
#[command(name = "sdfmt", version, about = "Interactive disk formatter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Disk utility to run
    #[arg(long, global = true, default_value = "diskutil")]
    tool: String,

    /// Log every diskutil invocation
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only print prompts and results
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick a drive and erase it (default)
    Format {
        /// Print the erase command instead of running it
        #[arg(long)]
        dry_run: bool,
    },
    /// Print attached drives and exit
    List,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    set_log_level(match (cli.quiet, cli.verbose) {
        (true, _) => LogLevel::Quiet,
        (_, true) => LogLevel::Verbose,
        _ => LogLevel::Normal,
    });

    let tool = Diskutil::locate(&cli.tool)?;
    let mut console = Console::new(io::stdin().lock(), io::stdout());

    match cli.command.unwrap_or(Commands::Format { dry_run: false }) {
        Commands::List => {
            flow::list(&tool, &mut console)?;
        }
        Commands::Format { dry_run } => {
            if dry_run {
                sdfmt::log_normal!("Dry run mode: no disk will be erased.");
            }
            let outcome = flow::run(&tool, &mut console, &FormatOptions { dry_run })?;
            report(&outcome);
        }
    }

    Ok(())
}

fn report(outcome: &Outcome) {
    let message = outcome.to_string();
    let message = match outcome {
        Outcome::Formatted { .. } => message.green(),
        Outcome::Cancelled | Outcome::DryRun { .. } | Outcome::NoDrives => message.yellow(),
        Outcome::Rejected(_) | Outcome::FormatFailed { .. } => message.red(),
    };
    println!("{message}");
}
