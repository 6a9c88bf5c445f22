//! Pure formatting functions for UI output.
//!
//! Everything here builds strings; printing happens in the parent module.

use console::style;

use crate::cli::{IncrementOutcome, Report};
use crate::domain::VersionTag;

/// Error line, red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

/// Success line with green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Status line with yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Describe an increment: the tag change and whether it was written.
pub fn format_increment(outcome: &IncrementOutcome) -> Vec<String> {
    let change = format!(
        "{} {} → {}",
        outcome.increment,
        style(outcome.previous).red(),
        style(outcome.next).green()
    );

    if outcome.created {
        vec![format_success(&format!("Created tag {}", change))]
    } else {
        vec![
            format_status(&format!("Dry run: would create tag {}", change)),
            format_status("No tag was created"),
        ]
    }
}

/// One tag per line, in the order given.
pub fn format_tags(tags: &[VersionTag]) -> Vec<String> {
    tags.iter().map(ToString::to_string).collect()
}

/// Lines printed to stdout for a command report.
pub fn format_report(report: &Report) -> Vec<String> {
    match report {
        Report::Increment(outcome) => format_increment(outcome),
        Report::Tags(tags) => format_tags(tags),
        Report::Latest(tag) => vec![tag.to_string()],
    }
}
