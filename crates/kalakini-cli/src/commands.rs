// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command execution. Every failure is caught here, logged, and turned into a
// failed `Report`; nothing propagates to the process exit status.

use std::fmt;
use std::path::{Path, PathBuf};

use kalakini_core::FilterKind;
use kalakini_imaging::{StripGenerator, apply_filter_file};
use tracing::{error, info, warn};

use crate::cli::Command;

/// Outcome of one command: whether it worked plus the line shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub success: bool,
    pub message: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Run a parsed command.
pub fn execute(command: Command) -> Report {
    match command {
        Command::Vintage { input, output } => run_filter(FilterKind::Vintage, &input, &output),
        Command::Bright { input, output } => run_filter(FilterKind::Bright, &input, &output),
        Command::Smooth { input, output } => run_filter(FilterKind::Smooth, &input, &output),
        Command::Strip {
            photo1,
            photo2,
            photo3,
            output,
            filter_type,
        } => run_strip([photo1, photo2, photo3], &output, &filter_type),
    }
}

fn run_filter(kind: FilterKind, input: &Path, output: &Path) -> Report {
    match apply_filter_file(kind, input, output) {
        Ok(()) => Report {
            success: true,
            message: format!("{} filter applied: {}", kind.label(), output.display()),
        },
        Err(err) => {
            error!(filter = %kind, kind = err.kind(), error = %err, "filter failed");
            Report {
                success: false,
                message: format!("Error applying {kind} filter: {err}"),
            }
        }
    }
}

fn run_strip(photos: [PathBuf; 3], output: &Path, filter_type: &str) -> Report {
    let (kind, recognised) = FilterKind::parse_lenient(filter_type);
    if !recognised {
        warn!(filter_type, "unknown filter type, composing strip without a filter");
    }

    match StripGenerator::default().generate(&photos, output, kind) {
        Ok(written) => {
            info!(filter = %kind, "strip done");
            Report {
                success: true,
                message: format!("Photo strip generated: {}", written.display()),
            }
        }
        Err(err) => {
            error!(kind = err.kind(), error = %err, "strip generation failed");
            Report {
                success: false,
                message: format!("Error generating strip: {err}"),
            }
        }
    }
}
