use thiserror::Error;

/// Unified error type for git-flow operations
#[derive(Error, Debug)]
pub enum GitFlowError {
    #[error("No version found for placeholder: {0}")]
    MissingPlaceholder(String),

    #[error("Invalid semver version: {0}")]
    InvalidSemver(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-flow
pub type Result<T> = std::result::Result<T, GitFlowError>;

impl GitFlowError {
    /// Create a missing placeholder error for the given key
    pub fn missing_placeholder(placeholder: impl Into<String>) -> Self {
        GitFlowError::MissingPlaceholder(placeholder.into())
    }

    /// Create an invalid semver error for the given input
    pub fn invalid_semver(version: impl Into<String>) -> Self {
        GitFlowError::InvalidSemver(version.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        GitFlowError::Tag(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitFlowError::Config(msg.into())
    }
}
