//! Tag storage abstraction layer
//!
//! This module provides a trait-based abstraction over where version tags
//! live, so the increment workflow does not depend on a storage backend.
//!
//! # Overview
//!
//! The primary abstraction is the [TagRepository] trait. The concrete
//! implementations include:
//!
//! - [repository::GitTagRepository]: A real implementation using the `git2` crate
//! - [memory::MemoryTagRepository]: An in-memory implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use git_vtag::git::{MemoryTagRepository, TagRepository};
//! # fn example() -> git_vtag::Result<()> {
//! let mut repo = MemoryTagRepository::with_head("abc123");
//! repo.add_reference("v1.2.3", "abc123");
//!
//! let next = repo.latest()?.increment_minor()?;
//! repo.create(&next)?;
//! assert_eq!(repo.latest()?.to_string(), "v1.3.0");
//! # Ok(())
//! # }
//! ```

pub mod memory;
pub mod repository;

pub use memory::MemoryTagRepository;
pub use repository::{GitTagRepository, TagStyle};

use crate::domain::VersionTag;
use crate::error::{Result, VtagError};

/// Storage port for version tags
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// backend errors to the matching [crate::error::VtagError] variants: name
/// collisions to `TagExists`, unresolvable HEAD to `Head`.
pub trait TagRepository {
    /// Get every version tag in the store
    ///
    /// References whose names do not parse as a [VersionTag] are skipped.
    /// The result is sorted ascending by [VersionTag]'s ordering.
    fn list_tags(&self) -> Result<Vec<VersionTag>>;

    /// Get the greatest version tag in the store
    ///
    /// # Returns
    /// * `Ok(VersionTag)` - Maximum of [TagRepository::list_tags]
    /// * `Err(VtagError::EmptyHistory)` - If the store has no version tags
    fn latest(&self) -> Result<VersionTag> {
        latest_of(self.list_tags()?)
    }

    /// Create a tag named `tag.to_string()` at the current head revision
    ///
    /// # Returns
    /// * `Ok(())` - Success
    /// * `Err` - If the tag already exists, HEAD cannot be resolved, or the
    ///   backend fails. The store is left unchanged on error.
    fn create(&mut self, tag: &VersionTag) -> Result<()>;
}

/// Parse reference names into sorted version tags, dropping anything that
/// isn't a version tag
pub fn parse_references<I, S>(names: I) -> Vec<VersionTag>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tags: Vec<VersionTag> = names
        .into_iter()
        .filter_map(|name| {
            let name = name.as_ref();
            match VersionTag::parse(name) {
                Ok(tag) => Some(tag),
                Err(_) => {
                    tracing::trace!(reference = name, "skipping non-version tag");
                    None
                }
            }
        })
        .collect();

    tags.sort();
    tags
}

/// Maximum of a tag collection
pub fn latest_of<I>(tags: I) -> Result<VersionTag>
where
    I: IntoIterator<Item = VersionTag>,
{
    tags.into_iter().max().ok_or(VtagError::EmptyHistory)
}
