// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// KalaKini Booth: photo filters and three-shot photo strips.
//
// Entry point. Initialises logging, checks the argument count, and dispatches
// to the requested operation. Operation failures are reported on stdout and
// never change the exit status.

mod cli;
mod commands;

use std::ffi::OsString;
use std::process::ExitCode;

use clap::Parser;

use cli::Cli;

/// What the process prints on stdout and the status it exits with.
#[derive(Debug, PartialEq, Eq)]
struct Outcome {
    status: u8,
    message: String,
}

impl Outcome {
    fn success(message: impl Into<String>) -> Self {
        Self {
            status: 0,
            message: message.into(),
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(std::env::args_os().collect()) {
        Ok(outcome) => {
            println!("{}", outcome.message);
            ExitCode::from(outcome.status)
        }
        Err(err) => err.exit(),
    }
}

/// Dispatch one invocation. Clap errors (help, version, missing positionals)
/// are returned for clap to print and exit on.
fn run(args: Vec<OsString>) -> Result<Outcome, clap::Error> {
    if args.len() < 3 {
        return Ok(Outcome {
            status: 1,
            message: cli::usage(),
        });
    }

    let name = args[1].to_string_lossy();
    if !cli::is_dispatchable(&name) {
        return Ok(Outcome::success(format!("Unknown command: {name}")));
    }

    let parsed = Cli::try_parse_from(cli::trim_surplus(&args))?;

    tracing::debug!(command = ?parsed.command, "dispatching");
    let report = commands::execute(parsed.command);
    tracing::debug!(success = report.success, "command finished");

    Ok(Outcome::success(report.to_string()))
}

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};

    use super::*;

    fn argv(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    #[test]
    fn too_few_arguments_print_usage_and_fail() {
        for args in [&["kalakini"][..], &["kalakini", "vintage"][..]] {
            let outcome = run(argv(args)).unwrap();
            assert_eq!(outcome.status, 1);
            assert_eq!(outcome.message, cli::usage());
        }
    }

    #[test]
    fn unknown_command_succeeds() {
        let outcome = run(argv(&["kalakini", "x", "y"])).unwrap();
        assert_eq!(outcome, Outcome::success("Unknown command: x"));

        let outcome = run(argv(&["kalakini", "--foo", "bar"])).unwrap();
        assert_eq!(outcome, Outcome::success("Unknown command: --foo"));
    }

    #[test]
    fn failed_operation_still_exits_zero() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.jpg");
        let out = dir.path().join("out.jpg");
        let outcome = run(vec![
            "kalakini".into(),
            "vintage".into(),
            missing.into_os_string(),
            out.into_os_string(),
        ])
        .unwrap();
        assert_eq!(outcome.status, 0);
        assert!(
            outcome.message.starts_with("Error applying vintage filter"),
            "{}",
            outcome.message
        );
    }

    #[test]
    fn surplus_arguments_do_not_block_the_command() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        RgbImage::from_pixel(32, 24, Rgb([200, 150, 90]))
            .save(&input)
            .unwrap();
        let output = dir.path().join("out.png");

        let outcome = run(vec![
            "kalakini".into(),
            "bright".into(),
            input.into_os_string(),
            output.clone().into_os_string(),
            "extra".into(),
            "more".into(),
        ])
        .unwrap();
        assert_eq!(outcome.status, 0);
        assert!(outcome.message.starts_with("Bright filter applied"), "{}", outcome.message);
        assert!(output.exists());
    }

    #[test]
    fn missing_positional_is_a_clap_error() {
        let err = run(argv(&["kalakini", "strip", "a", "b"])).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
