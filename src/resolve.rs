//! Version resolution
//!
//! Turns a manifest placeholder into the final version for the current branch,
//! appending a `.build.N` suffix only when the candidate version is already tagged.

use crate::domain::{
    build_version, extract_version_parts, BranchContext, BranchType, Tag, VersionParts,
};
use crate::error::{GitFlowError, Result};
use crate::git::{NoTagChecker, TagExistenceChecker};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, info};

/// Input for a single version resolution
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolutionInput {
    /// Version placeholder from the manifest (e.g., "0.0.0-DEFAULT")
    pub placeholder: String,

    /// Current branch name
    pub branch: String,

    /// Map of placeholders to resolved versions
    pub versions_by_placeholder: HashMap<String, String>,

    /// CI run number used for the build suffix
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_number: Option<u64>,
}

impl ResolutionInput {
    pub fn new(
        placeholder: impl Into<String>,
        branch: impl Into<String>,
        versions_by_placeholder: HashMap<String, String>,
    ) -> Self {
        ResolutionInput {
            placeholder: placeholder.into(),
            branch: branch.into(),
            versions_by_placeholder,
            run_number: None,
        }
    }

    pub fn with_run_number(mut self, run_number: u64) -> Self {
        self.run_number = Some(run_number);
        self
    }

    /// Build number used whenever a suffix is required; absent counts as zero
    fn build_number(&self) -> u64 {
        self.run_number.unwrap_or(0)
    }
}

/// Outcome of a version resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedVersion {
    /// Original placeholder from the manifest
    pub placeholder: String,

    /// Version after placeholder lookup
    pub resolved_version: String,

    /// Final version after all transformations
    pub version: String,

    /// Whether the final version is a pre-release
    pub is_pre_release: bool,

    /// Build number, present only if a build suffix was appended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build_number: Option<u64>,

    pub branch_type: BranchType,
}

fn with_build_suffix(version: &str, build_number: u64) -> String {
    format!("{}.build.{}", version, build_number)
}

/// Resolves placeholders against branch state and existing tags
pub struct VersionResolver<C> {
    checker: C,
}

impl VersionResolver<NoTagChecker> {
    /// Resolver whose tag lookups always report no existing tag
    pub fn without_tags() -> Self {
        VersionResolver::new(NoTagChecker)
    }
}

impl<C: TagExistenceChecker> VersionResolver<C> {
    pub fn new(checker: C) -> Self {
        VersionResolver { checker }
    }

    pub fn checker(&self) -> &C {
        &self.checker
    }

    /// Resolve the final version for the given input.
    ///
    /// # Returns
    /// * `Ok(ResolvedVersion)` - The composed version
    /// * `Err(GitFlowError::MissingPlaceholder)` - If the placeholder is not mapped
    /// * `Err(GitFlowError::InvalidSemver)` - If the mapped version is malformed
    /// * `Err` - Any failure of the tag checker, unchanged
    ///
    /// # Example
    /// ```
    /// # use git_flow::resolve::{ResolutionInput, VersionResolver};
    /// # use std::collections::HashMap;
    /// # async fn example() -> git_flow::Result<()> {
    /// let versions = HashMap::from([("0.0.0-DEFAULT".to_string(), "2.0.0".to_string())]);
    /// let input = ResolutionInput::new("0.0.0-DEFAULT", "feature/auth", versions);
    ///
    /// let resolved = VersionResolver::without_tags().resolve(&input).await?;
    /// assert_eq!(resolved.version, "2.0.0-feature.auth");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn resolve(&self, input: &ResolutionInput) -> Result<ResolvedVersion> {
        let resolved_version = input
            .versions_by_placeholder
            .get(&input.placeholder)
            .filter(|version| !version.is_empty())
            .ok_or_else(|| GitFlowError::missing_placeholder(&input.placeholder))?;

        let branch = BranchContext::new(input.branch.as_str());
        debug!(
            placeholder = %input.placeholder,
            branch = %branch.name,
            branch_type = %branch.branch_type,
            resolved_version = %resolved_version,
            "resolving version"
        );

        let parts = extract_version_parts(resolved_version)?;

        let (version, is_pre_release, build_number) = match branch.branch_type {
            BranchType::Mainline => {
                self.resolve_mainline(input, resolved_version, &parts, &branch)
                    .await?
            }
            BranchType::Development => self.resolve_development(input, &parts, &branch).await?,
        };

        info!(
            placeholder = %input.placeholder,
            version = %version,
            build_number = ?build_number,
            "resolved version"
        );

        Ok(ResolvedVersion {
            placeholder: input.placeholder.clone(),
            resolved_version: resolved_version.clone(),
            version,
            is_pre_release,
            build_number,
            branch_type: branch.branch_type,
        })
    }

    async fn candidate_is_tagged(&self, version: &str) -> Result<bool> {
        let tag = Tag::for_version(version);
        let exists = self.checker.tag_exists(tag.as_str()).await?;
        debug!(tag = %tag, exists, "checked candidate tag");
        Ok(exists)
    }

    async fn resolve_mainline(
        &self,
        input: &ResolutionInput,
        resolved_version: &str,
        parts: &VersionParts,
        branch: &BranchContext,
    ) -> Result<(String, bool, Option<u64>)> {
        if !self.candidate_is_tagged(resolved_version).await? {
            return Ok((resolved_version.to_string(), parts.is_pre_release(), None));
        }

        let build_number = input.build_number();
        let version = if parts.is_pre_release() {
            with_build_suffix(resolved_version, build_number)
        } else {
            let with_branch = format!("{}-{}", resolved_version, branch.sanitized());
            with_build_suffix(&with_branch, build_number)
        };

        Ok((version, true, Some(build_number)))
    }

    async fn resolve_development(
        &self,
        input: &ResolutionInput,
        parts: &VersionParts,
        branch: &BranchContext,
    ) -> Result<(String, bool, Option<u64>)> {
        // Branch goes in front of any existing pre-release identifiers
        let mut prerelease = Vec::with_capacity(parts.prerelease.len() + 1);
        prerelease.push(branch.sanitized());
        prerelease.extend(parts.prerelease.iter().cloned());
        let version_with_branch = build_version(&parts.base, &prerelease);

        if !self.candidate_is_tagged(&version_with_branch).await? {
            return Ok((version_with_branch, true, None));
        }

        let build_number = input.build_number();
        Ok((
            with_build_suffix(&version_with_branch, build_number),
            true,
            Some(build_number),
        ))
    }
}

/// Resolve a version with tag lookups that always report no existing tag
pub async fn resolve_version(input: &ResolutionInput) -> Result<ResolvedVersion> {
    VersionResolver::without_tags().resolve(input).await
}
