//! Terminal output formatting for the swatch CLI.
//!
//! Provides Cargo-style status output with right-aligned coloured verbs.
//! All status output goes to stderr; stdout is reserved for results.

use std::io::{self, IsTerminal, Write};

use serde::Serialize;

use crate::error::{Result, SwatchError};
use crate::types::Colour;

/// ANSI escape codes.
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Prints Cargo-style status lines to stderr with optional ANSI colours.
/// Colour is enabled when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// A printer that never emits escape codes.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Print a status line with a green bold verb.
    /// e.g. "     Sampled #FF0000 at 100,50"
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan bold verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    /// Print a warning line with a yellow bold verb.
    pub fn warning(&self, verb: &str, message: &str) {
        self.print_line(YELLOW, verb, message);
    }

    /// Format a string as dim/grey.
    pub fn dim(&self, text: &str) -> String {
        if self.color {
            format!("{DIM}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    /// Hex code preceded by a truecolour chip when colour is on.
    pub fn colour(&self, colour: Colour) -> String {
        if self.color {
            format!(
                "\x1b[48;2;{};{};{}m  {RESET} {}",
                colour.r, colour.g, colour.b, colour
            )
        } else {
            colour.to_string()
        }
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        if self.color {
            let _ = writeln!(
                stderr,
                "{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}"
            );
        } else {
            let _ = writeln!(stderr, "{verb:>VERB_WIDTH$} {message}");
        }
    }
}

/// Write a result to stdout, as pretty JSON or as the plain lines given.
pub fn emit<T: Serialize>(value: &T, json: bool, plain: &[String]) -> Result<()> {
    let mut stdout = io::stdout().lock();
    if json {
        let text = serde_json::to_string_pretty(value).map_err(|e| SwatchError::Parse {
            message: format!("Failed to encode JSON: {}", e),
            help: None,
        })?;
        writeln!(stdout, "{}", text)?;
    } else {
        for line in plain {
            writeln!(stdout, "{}", line)?;
        }
    }
    Ok(())
}
