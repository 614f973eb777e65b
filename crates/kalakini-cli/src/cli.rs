// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line surface. Positional arguments only.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "kalakini",
    version,
    about = "KalaKini Booth: photo filters and three-shot photo strips"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sepia tone with a slight contrast boost
    Vintage { input: PathBuf, output: PathBuf },
    /// Boost brightness and saturation
    Bright { input: PathBuf, output: PathBuf },
    /// Soft blur with a small brightness lift
    Smooth { input: PathBuf, output: PathBuf },
    /// Stack three photos into a 600x1800 booth strip
    Strip {
        photo1: PathBuf,
        photo2: PathBuf,
        photo3: PathBuf,
        /// Output file, or a directory to receive a timestamped PNG
        output: PathBuf,
        /// none, vintage, bright or smooth
        #[arg(default_value = "none")]
        filter_type: String,
    },
}

/// Usage block printed when too few arguments are given.
pub fn usage() -> String {
    [
        "Usage:",
        "  kalakini vintage <input> <output>",
        "  kalakini bright <input> <output>",
        "  kalakini smooth <input> <output>",
        "  kalakini strip <photo1> <photo2> <photo3> <output> [filter_type]",
    ]
    .join("\n")
}

/// Whether `name` should be handed to clap: a subcommand or a help/version request.
pub fn is_dispatchable(name: &str) -> bool {
    matches!(name, "help" | "-h" | "--help" | "-V" | "--version")
        || Cli::command().find_subcommand(name).is_some()
}

/// Drop arguments past the last positional the named subcommand accepts.
///
/// Surplus trailing arguments are ignored rather than rejected.
pub fn trim_surplus(args: &[OsString]) -> Vec<OsString> {
    let keep = args
        .get(1)
        .and_then(|name| {
            Cli::command()
                .find_subcommand(name)
                .map(|sub| 2 + sub.get_positionals().count())
        })
        .unwrap_or(args.len());
    args.iter().take(keep).cloned().collect()
}
