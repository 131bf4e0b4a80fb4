//! Command-line arguments.

use crate::errors::{CluedoError, Result};

pub const USAGE: &str = "\
Mansion Mystery - a terminal murder mystery

Usage: cluedo [options]

Options:
  --seed <N>     Lay out the same mansion and mystery every time
  --version, -v  Show version information
  --help, -h     Show this help message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play { seed: Option<u64> },
    Version,
    Help,
}

/// Parse arguments, excluding the program name.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command> {
    let mut seed = None;
    let mut iter = args.iter().map(AsRef::as_ref);

    while let Some(arg) = iter.next() {
        match arg {
            "--version" | "-v" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--seed" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CluedoError::InvalidArgument("--seed needs a value".into()))?;
                let parsed = value.parse::<u64>().map_err(|_| {
                    CluedoError::InvalidArgument(format!("--seed expects a number, got '{value}'"))
                })?;
                seed = Some(parsed);
            }
            other => {
                return Err(CluedoError::InvalidArgument(format!(
                    "unknown option '{other}'"
                )))
            }
        }
    }

    Ok(Command::Play { seed })
}
