//! Increment workflow orchestration
//!
//! Keeps the tag bumping logic apart from argument parsing so it can run
//! against any [TagRepository], including the in-memory one in tests.

use anyhow::{Context, Result};

use crate::domain::{Increment, VersionTag};
use crate::git::TagRepository;

/// Result of an increment workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementOutcome {
    /// Transition that was applied
    pub increment: Increment,

    /// Latest tag before the increment
    pub previous: VersionTag,

    /// Tag produced by the increment
    pub next: VersionTag,

    /// Whether `next` was written to the repository
    pub created: bool,
}

/// Compute the next tag without writing anything
pub fn plan_increment<R: TagRepository + ?Sized>(
    repo: &R,
    increment: Increment,
) -> Result<IncrementOutcome> {
    let previous = repo.latest().context("failed to get latest tag")?;
    let next = increment
        .apply(&previous)
        .with_context(|| format!("failed to compute {} increment", increment))?;

    tracing::debug!(%increment, %previous, %next, "planned increment");
    Ok(IncrementOutcome {
        increment,
        previous,
        next,
        created: false,
    })
}

/// Main increment workflow
///
/// 1. Get the latest tag
/// 2. Apply the increment
/// 3. Create the resulting tag at HEAD
///
/// Nothing is created if any step fails.
pub fn run_increment<R: TagRepository + ?Sized>(
    repo: &mut R,
    increment: Increment,
) -> Result<IncrementOutcome> {
    let planned = plan_increment(repo, increment)?;

    repo.create(&planned.next)
        .with_context(|| format!("failed to create tag {}", planned.next))?;

    Ok(IncrementOutcome {
        created: true,
        ..planned
    })
}
