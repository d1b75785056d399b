//! Interactive shell: one view command per line against a loaded store.
//!
//! A failing line prints its error and the session carries on.

use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::debug;

use crate::{cli::ShellLine, dataset::DatasetStore, error::StatsError, Result};

use super::dispatch_view;

/// Lines run and lines that failed during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellSummary {
    pub commands: usize,
    pub errors: usize,
}

/// Read commands from `input` until EOF, `quit` or `exit`.
///
/// Blank lines and lines starting with `#` are skipped. With `prompt` set a
/// prompt is printed before each line.
pub fn run_shell<R: BufRead>(
    store: &DatasetStore,
    mut input: R,
    prompt: bool,
) -> Result<ShellSummary> {
    let mut summary = ShellSummary::default();
    let mut line = String::new();

    loop {
        if prompt {
            print!("nfl> ");
            io::stdout().flush()?;
        }

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if matches!(trimmed, "quit" | "exit") {
            break;
        }

        summary.commands += 1;
        if !run_line(store, trimmed) {
            summary.errors += 1;
        }
    }

    debug!(commands = summary.commands, errors = summary.errors, "shell closed");
    Ok(summary)
}

/// Run one line, reporting any failure. Returns `false` if the line failed.
pub fn run_line(store: &DatasetStore, line: &str) -> bool {
    let Some(words) = shlex::split(line) else {
        eprintln!("Error [input]: unbalanced quotes in '{}'", line);
        return false;
    };

    match ShellLine::try_parse_from(words) {
        Ok(parsed) => match dispatch_view(store, parsed.command) {
            Ok(()) => true,
            Err(e) => {
                eprintln!("{}", error_message(&e));
                false
            }
        },
        Err(e) => {
            // Help and usage requests are not failures.
            let failed = e.use_stderr();
            let _ = e.print();
            !failed
        }
    }
}

/// `Error [kind]: message`, as printed for a failed line.
pub fn error_message(error: &StatsError) -> String {
    format!("Error [{}]: {}", error.kind(), error)
}
