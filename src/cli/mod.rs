//! Command dispatch: maps a parsed [Cli] onto the repository workflows.

pub mod args;
pub mod orchestration;

pub use args::{Cli, Command};
pub use orchestration::{plan_increment, run_increment, IncrementOutcome};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::domain::VersionTag;
use crate::git::{TagRepository, TagStyle};

/// What a command produced, for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Increment(IncrementOutcome),
    Tags(Vec<VersionTag>),
    Latest(VersionTag),
}

/// Run the selected command against a repository
pub fn run<R: TagRepository + ?Sized>(repo: &mut R, cli: &Cli) -> Result<Report> {
    match cli.command.increment() {
        Some(increment) if cli.dry_run => plan_increment(repo, increment).map(Report::Increment),
        Some(increment) => run_increment(repo, increment).map(Report::Increment),
        None => match cli.command {
            Command::List => repo
                .list_tags()
                .context("failed to list tags")
                .map(Report::Tags),
            _ => repo
                .latest()
                .context("failed to get latest tag")
                .map(Report::Latest),
        },
    }
}

/// Repository path: command line first, then configuration
pub fn repository_path(cli: &Cli, config: &Config) -> std::path::PathBuf {
    cli.repo
        .clone()
        .unwrap_or_else(|| config.repository.path.clone())
}

/// Tag style: `--message` implies annotated; `--annotated` uses the
/// configured message; otherwise the configuration decides
pub fn tag_style(cli: &Cli, config: &Config) -> TagStyle {
    match (&cli.message, cli.annotated) {
        (Some(message), _) => TagStyle::Annotated {
            message: message.clone(),
        },
        (None, true) => TagStyle::Annotated {
            message: config.tag.message.clone(),
        },
        (None, false) => config.tag.style(),
    }
}
