//! Tag existence abstraction layer
//!
//! Version resolution needs exactly one fact from source control: whether a tag
//! already exists. That question is modelled by the [TagExistenceChecker] trait so
//! the resolution algorithm stays pure and testable without a repository.
//!
//! # Implementations
//!
//! - [NoTagChecker]: Reference stub that reports every tag as absent
//! - [repository::Git2TagChecker]: Looks tags up in a real repository using the `git2` crate
//! - [mock::MockTagChecker]: In-memory tag set for tests
//!
//! # Usage
//!
//! ```rust
//! # use git_flow::git::{NoTagChecker, TagExistenceChecker};
//! # async fn example() -> git_flow::Result<()> {
//! let checker = NoTagChecker;
//! assert!(!checker.tag_exists("v2.0.0").await?);
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockTagChecker;
pub use repository::Git2TagChecker;

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Asynchronous predicate answering whether a tag already exists
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` so concurrent resolutions can share one checker.
///
/// ## Error Handling
///
/// Implementations must not fail for well-formed tag names that simply do not exist;
/// they return `Ok(false)`. Backend failures are returned as errors and are not retried
/// by callers. Timeouts, if any, belong to the implementation.
#[async_trait]
pub trait TagExistenceChecker: Send + Sync {
    /// Check if a tag with the given name exists
    ///
    /// # Arguments
    /// * `tag_name` - Full tag name (e.g., "v2.0.0", "v2.0.0-feature.auth")
    ///
    /// # Returns
    /// * `Ok(true)` - The tag exists
    /// * `Ok(false)` - The tag does not exist
    /// * `Err` - If the backend could not be queried
    async fn tag_exists(&self, tag_name: &str) -> Result<bool>;
}

/// Checker that never finds a tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTagChecker;

#[async_trait]
impl TagExistenceChecker for NoTagChecker {
    async fn tag_exists(&self, _tag_name: &str) -> Result<bool> {
        Ok(false)
    }
}

#[async_trait]
impl<T: TagExistenceChecker + ?Sized> TagExistenceChecker for Box<T> {
    async fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        (**self).tag_exists(tag_name).await
    }
}

#[async_trait]
impl<T: TagExistenceChecker + ?Sized> TagExistenceChecker for Arc<T> {
    async fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        (**self).tag_exists(tag_name).await
    }
}
