use crate::domain::VersionTag;
use crate::error::{Result, VtagError};
use crate::git::{parse_references, TagRepository};
use std::collections::BTreeMap;

/// In-memory tag store for testing without actual git operations
///
/// Holds arbitrary reference names, version-shaped or not, so callers can
/// observe exactly what was created.
#[derive(Debug, Clone, Default)]
pub struct MemoryTagRepository {
    references: BTreeMap<String, String>,
    head: Option<String>,
}

impl MemoryTagRepository {
    /// Create an empty store with no head revision
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store whose head points at `revision`
    pub fn with_head(revision: impl Into<String>) -> Self {
        MemoryTagRepository {
            references: BTreeMap::new(),
            head: Some(revision.into()),
        }
    }

    /// Create a store holding the given version tags, all at `revision`,
    /// which is also the head
    pub fn from_tags<I>(revision: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = VersionTag>,
    {
        let revision = revision.into();
        let mut repo = Self::with_head(revision.clone());
        for tag in tags {
            repo.add_reference(tag.to_string(), revision.clone());
        }
        repo
    }

    /// Add a reference pointing to a revision
    pub fn add_reference(&mut self, name: impl Into<String>, revision: impl Into<String>) {
        self.references.insert(name.into(), revision.into());
    }

    /// Move the head to a revision
    pub fn set_head(&mut self, revision: impl Into<String>) {
        self.head = Some(revision.into());
    }

    /// All reference names, in name order
    pub fn reference_names(&self) -> Vec<String> {
        self.references.keys().cloned().collect()
    }

    /// Revision a reference points at, if it exists
    pub fn target_of(&self, name: &str) -> Option<&str> {
        self.references.get(name).map(String::as_str)
    }
}

impl TagRepository for MemoryTagRepository {
    fn list_tags(&self) -> Result<Vec<VersionTag>> {
        Ok(parse_references(self.references.keys()))
    }

    fn create(&mut self, tag: &VersionTag) -> Result<()> {
        let name = tag.to_string();
        if self.references.contains_key(&name) {
            return Err(VtagError::TagExists(name));
        }

        let head = self
            .head
            .clone()
            .ok_or_else(|| VtagError::head("memory repository has no head revision"))?;

        self.references.insert(name, head);
        Ok(())
    }
}
