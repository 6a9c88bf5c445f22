//! Domain logic - pure version tag rules independent of git operations

pub mod version;

pub use version::{Increment, VersionTag};
