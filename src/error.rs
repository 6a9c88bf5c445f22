use thiserror::Error;

/// Unified error type for git-vtag operations
#[derive(Error, Debug)]
pub enum VtagError {
    #[error("Invalid version tag '{0}': expected v<major>.<minor>.<patch>")]
    Parse(String),

    #[error("No version tags found in repository")]
    EmptyHistory,

    #[error("Cannot increment {component} of {tag}: component would overflow")]
    Overflow { tag: String, component: &'static str },

    #[error("Failed to open git repository at '{path}'")]
    Open {
        path: String,
        #[source]
        source: git2::Error,
    },

    #[error("Cannot resolve HEAD revision: {0}")]
    Head(String),

    #[error("Tag '{0}' already exists")]
    TagExists(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-vtag
pub type Result<T> = std::result::Result<T, VtagError>;

impl VtagError {
    /// Create a parse error for the rejected text
    pub fn parse(text: impl Into<String>) -> Self {
        VtagError::Parse(text.into())
    }

    /// Create a HEAD resolution error with context
    pub fn head(msg: impl Into<String>) -> Self {
        VtagError::Head(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VtagError::Config(msg.into())
    }

    /// Whether the error is a tag name collision
    pub fn is_tag_exists(&self) -> bool {
        matches!(self, VtagError::TagExists(_))
    }
}
