use crate::error::{GitFlowError, Result};
use crate::git::TagExistenceChecker;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Mutex;

/// Mock tag checker for testing without actual git operations
pub struct MockTagChecker {
    tags: HashSet<String>,
    failure: Option<String>,
    queried: Mutex<Vec<String>>,
}

impl MockTagChecker {
    /// Create a new mock with no tags
    pub fn new() -> Self {
        MockTagChecker {
            tags: HashSet::new(),
            failure: None,
            queried: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock where the given tags exist
    pub fn with_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut checker = Self::new();
        for tag in tags {
            checker.add_tag(tag);
        }
        checker
    }

    /// Create a mock whose every query fails with the given message
    pub fn failing(msg: impl Into<String>) -> Self {
        MockTagChecker {
            failure: Some(msg.into()),
            ..Self::new()
        }
    }

    /// Mark a tag as existing
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.insert(name.into());
    }

    /// Tag names queried so far, in call order
    pub fn queried(&self) -> Vec<String> {
        self.queried
            .lock()
            .map(|queried| queried.clone())
            .unwrap_or_default()
    }
}

impl Default for MockTagChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagExistenceChecker for MockTagChecker {
    async fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        if let Ok(mut queried) = self.queried.lock() {
            queried.push(tag_name.to_string());
        }

        if let Some(msg) = &self.failure {
            return Err(GitFlowError::tag(msg.clone()));
        }

        Ok(self.tags.contains(tag_name))
    }
}
