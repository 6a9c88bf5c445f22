use crate::domain::VersionTag;
use crate::error::{Result, VtagError};
use crate::git::{parse_references, TagRepository};
use git2::{Commit, ErrorCode, Repository as Git2Repo};
use std::path::Path;

/// Placeholder replaced by the tag name in annotated tag messages
pub const TAG_PLACEHOLDER: &str = "{tag}";

/// How new tags are written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagStyle {
    /// Plain reference to the commit
    #[default]
    Lightweight,
    /// Tag object with tagger signature and message; `{tag}` in the message
    /// is replaced by the tag name
    Annotated { message: String },
}

impl TagStyle {
    /// Render the annotation message for a tag, if any
    pub fn message_for(&self, tag: &VersionTag) -> Option<String> {
        match self {
            TagStyle::Lightweight => None,
            TagStyle::Annotated { message } => {
                Some(message.replace(TAG_PLACEHOLDER, &tag.to_string()))
            }
        }
    }
}

/// Wrapper around git2::Repository implementing the tag port
pub struct GitTagRepository {
    repo: Git2Repo,
    style: TagStyle,
}

impl GitTagRepository {
    /// Open the repository at exactly `path`
    ///
    /// Parent directories are not searched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::open(path).map_err(|source| VtagError::Open {
            path: path.display().to_string(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "opened git repository");
        Ok(GitTagRepository::from_git2(repo))
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        GitTagRepository {
            repo,
            style: TagStyle::default(),
        }
    }

    /// Set how new tags are written
    pub fn with_style(mut self, style: TagStyle) -> Self {
        self.style = style;
        self
    }

    /// Current tag style
    pub fn style(&self) -> &TagStyle {
        &self.style
    }

    fn head_commit(&self) -> Result<Commit<'_>> {
        let head = self
            .repo
            .head()
            .map_err(|e| VtagError::head(e.message().to_string()))?;

        head.peel_to_commit()
            .map_err(|e| VtagError::head(format!("HEAD does not point to a commit: {}", e)))
    }

    fn tag_exists(&self, name: &str) -> Result<bool> {
        match self.repo.find_reference(&format!("refs/tags/{}", name)) {
            Ok(_) => Ok(true),
            Err(e) if e.code() == ErrorCode::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

impl TagRepository for GitTagRepository {
    fn list_tags(&self) -> Result<Vec<VersionTag>> {
        let names = self.repo.tag_names(None)?;
        let tags = parse_references(names.iter().flatten());

        tracing::debug!(
            references = names.len(),
            version_tags = tags.len(),
            "listed tags"
        );
        Ok(tags)
    }

    fn create(&mut self, tag: &VersionTag) -> Result<()> {
        let name = tag.to_string();
        if self.tag_exists(&name)? {
            return Err(VtagError::TagExists(name));
        }

        let head = self.head_commit()?;
        let result = match self.style.message_for(tag) {
            None => self.repo.tag_lightweight(&name, head.as_object(), false),
            Some(message) => {
                let tagger = self.repo.signature()?;
                self.repo
                    .tag(&name, head.as_object(), &tagger, &message, false)
            }
        };

        match result {
            Ok(_) => {
                tracing::info!(tag = %name, commit = %head.id(), "created tag");
                Ok(())
            }
            Err(e) if e.code() == ErrorCode::Exists => Err(VtagError::TagExists(name)),
            Err(e) => Err(e.into()),
        }
    }
}
