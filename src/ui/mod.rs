//! User interface module - console output.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Printing to stdout/stderr

pub mod formatter;

use crate::cli::Report;

/// Print an error message in red on stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", formatter::format_error(message));
}

/// Print the result of a command on stdout.
pub fn display_report(report: &Report) {
    for line in formatter::format_report(report) {
        println!("{}", line);
    }
}
