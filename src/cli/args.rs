use crate::domain::Increment;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "git-vtag",
    version,
    about = "Increment semantic version tags in a git repository"
)]
pub struct Cli {
    #[arg(
        short = 'C',
        long,
        global = true,
        help = "Path of the git repository (defaults to config, then the current directory)"
    )]
    pub repo: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Custom configuration file path")]
    pub config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Preview the next tag without creating it"
    )]
    pub dry_run: bool,

    #[arg(long, global = true, help = "Create an annotated tag")]
    pub annotated: bool,

    #[arg(
        short,
        long,
        global = true,
        help = "Annotated tag message; {tag} is replaced by the tag name"
    )]
    pub message: Option<String>,

    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Create the next major version tag (vX+1.0.0)
    Major,
    /// Create the next minor version tag (vX.Y+1.0)
    Minor,
    /// Create the next patch version tag (vX.Y.Z+1)
    Patch,
    /// List all version tags
    List,
    /// Print the latest version tag
    Latest,
}

impl Command {
    /// Increment selected by this command, if it creates a tag
    pub fn increment(self) -> Option<Increment> {
        match self {
            Command::Major => Some(Increment::Major),
            Command::Minor => Some(Increment::Minor),
            Command::Patch => Some(Increment::Patch),
            Command::List | Command::Latest => None,
        }
    }
}
