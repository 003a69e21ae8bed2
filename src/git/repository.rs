use crate::error::{GitFlowError, Result};
use crate::git::TagExistenceChecker;
use async_trait::async_trait;
use git2::{ErrorCode, Repository as Git2Repo};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Tag checker backed by a git repository on disk
///
/// libgit2 calls are blocking, so every lookup runs on the tokio blocking pool.
#[derive(Debug, Clone)]
pub struct Git2TagChecker {
    git_dir: PathBuf,
}

impl Git2TagChecker {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2TagChecker {
            git_dir: repo.path().to_path_buf(),
        })
    }

    /// Path of the repository's git directory
    pub fn git_dir(&self) -> &Path {
        &self.git_dir
    }

    fn lookup(git_dir: &Path, tag_name: &str) -> Result<bool> {
        let repo = Git2Repo::open(git_dir)?;
        let reference_name = format!("refs/tags/{}", tag_name);

        let found = match repo.find_reference(&reference_name) {
            Ok(_) => Ok(true),
            // A name git cannot store as a ref can never exist as a tag
            Err(e) if matches!(e.code(), ErrorCode::NotFound | ErrorCode::InvalidSpec) => {
                Ok(false)
            }
            Err(e) => Err(GitFlowError::tag(format!(
                "Cannot look up tag '{}': {}",
                tag_name, e
            ))),
        };
        found
    }
}

#[async_trait]
impl TagExistenceChecker for Git2TagChecker {
    async fn tag_exists(&self, tag_name: &str) -> Result<bool> {
        let git_dir = self.git_dir.clone();
        let name = tag_name.to_string();

        let exists = tokio::task::spawn_blocking(move || Self::lookup(&git_dir, &name))
            .await
            .map_err(|e| GitFlowError::tag(format!("Tag lookup task failed: {}", e)))??;

        debug!(tag = tag_name, exists, "queried repository for tag");
        Ok(exists)
    }
}
