use thiserror::Error;

/// Unified error type for git-tools operations
#[derive(Error, Debug)]
pub enum GitToolsError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Cannot resolve HEAD: {0}")]
    Head(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Branch error: {0}")]
    Branch(String),

    #[error("Repository has no semver tags")]
    NoSemverTags,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Hook error: {0}")]
    Hook(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-tools
pub type Result<T> = std::result::Result<T, GitToolsError>;

impl GitToolsError {
    /// Create a HEAD resolution error with context
    pub fn head(msg: impl Into<String>) -> Self {
        GitToolsError::Head(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        GitToolsError::Tag(msg.into())
    }

    /// Create a branch error with context
    pub fn branch(msg: impl Into<String>) -> Self {
        GitToolsError::Branch(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitToolsError::Config(msg.into())
    }

    /// Create a hook error with context
    pub fn hook(msg: impl Into<String>) -> Self {
        GitToolsError::Hook(msg.into())
    }

    /// True for the expected "nothing released yet" outcome.
    ///
    /// Callers treat this as a baseline rather than a fault.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GitToolsError::NoSemverTags)
    }
}
