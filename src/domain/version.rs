use crate::error::{Result, VtagError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Anchored pattern for the canonical `v<major>.<minor>.<patch>` form
const VERSION_TAG_PATTERN: &str = r"^v([0-9]+)\.([0-9]+)\.([0-9]+)$";

fn version_tag_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(VERSION_TAG_PATTERN).expect("version tag pattern is valid"))
}

/// A three-component version tag such as `v1.2.3`.
///
/// Ordering is the lexicographic order of the canonical text, not numeric
/// semver precedence: `v0.10.0` sorts before `v0.2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionTag {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionTag {
    /// Create a new version tag
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        VersionTag {
            major,
            minor,
            patch,
        }
    }

    /// Parse a tag name of the exact form `v<int>.<int>.<int>`.
    ///
    /// Leading zeros are accepted (`v01.2.3` is `v1.2.3`). Whitespace, missing
    /// or extra components, and suffixes such as `-rc1` are rejected.
    pub fn parse(text: &str) -> Result<Self> {
        let captures = version_tag_regex()
            .captures(text)
            .ok_or_else(|| VtagError::parse(text))?;

        let component = |index: usize| -> Result<u64> {
            captures[index]
                .parse::<u64>()
                .map_err(|_| VtagError::parse(text))
        };

        Ok(VersionTag {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }

    /// Bump major, resetting minor and patch to zero
    pub fn increment_major(&self) -> Result<Self> {
        Ok(VersionTag {
            major: self.bumped(self.major, "major")?,
            minor: 0,
            patch: 0,
        })
    }

    /// Bump minor, keeping major and resetting patch to zero
    pub fn increment_minor(&self) -> Result<Self> {
        Ok(VersionTag {
            major: self.major,
            minor: self.bumped(self.minor, "minor")?,
            patch: 0,
        })
    }

    /// Bump patch, keeping major and minor
    pub fn increment_patch(&self) -> Result<Self> {
        Ok(VersionTag {
            major: self.major,
            minor: self.minor,
            patch: self.bumped(self.patch, "patch")?,
        })
    }

    fn bumped(&self, value: u64, component: &'static str) -> Result<u64> {
        value.checked_add(1).ok_or_else(|| VtagError::Overflow {
            tag: self.to_string(),
            component,
        })
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for VersionTag {
    type Err = VtagError;

    fn from_str(s: &str) -> Result<Self> {
        VersionTag::parse(s)
    }
}

impl Ord for VersionTag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string().cmp(&other.to_string())
    }
}

impl PartialOrd for VersionTag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Which component an increment bumps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Increment {
    Major,
    Minor,
    Patch,
}

impl Increment {
    /// Apply this transition to a tag
    pub fn apply(self, tag: &VersionTag) -> Result<VersionTag> {
        match self {
            Increment::Major => tag.increment_major(),
            Increment::Minor => tag.increment_minor(),
            Increment::Patch => tag.increment_patch(),
        }
    }
}

impl fmt::Display for Increment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Increment::Major => "major",
            Increment::Minor => "minor",
            Increment::Patch => "patch",
        };
        f.write_str(name)
    }
}
