//! Semantic version decomposition and recomposition
//!
//! Versions are parsed with the `semver` crate. Only `major.minor.patch` with optional
//! dash-introduced pre-release identifiers is accepted; build metadata is rejected so that
//! [`build_version`] always reproduces the input of [`extract_version_parts`].

use crate::error::{GitFlowError, Result};

/// A version split into its base triplet and pre-release identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionParts {
    /// Base version, e.g. "2.0.0"
    pub base: String,
    /// Pre-release identifiers in order, e.g. ["beta", "0"]; empty for a stable version
    pub prerelease: Vec<String>,
}

impl VersionParts {
    /// Returns true if any pre-release identifier is present
    pub fn is_pre_release(&self) -> bool {
        !self.prerelease.is_empty()
    }
}

fn parse(version: &str) -> Result<semver::Version> {
    let parsed =
        semver::Version::parse(version).map_err(|_| GitFlowError::invalid_semver(version))?;

    if !parsed.build.is_empty() {
        return Err(GitFlowError::invalid_semver(version));
    }

    Ok(parsed)
}

/// Extracts the base version and pre-release identifiers from a semver string.
///
/// # Returns
/// * `Ok(VersionParts)` - Base triplet and ordered identifiers
/// * `Err(GitFlowError::InvalidSemver)` - If the input is not a valid semantic version
///
/// # Example
/// ```
/// use git_flow::domain::version::extract_version_parts;
///
/// let parts = extract_version_parts("2.0.0-beta.0").unwrap();
/// assert_eq!(parts.base, "2.0.0");
/// assert_eq!(parts.prerelease, vec!["beta", "0"]);
/// ```
pub fn extract_version_parts(version: &str) -> Result<VersionParts> {
    let parsed = parse(version)?;

    let prerelease = if parsed.pre.is_empty() {
        Vec::new()
    } else {
        parsed.pre.as_str().split('.').map(str::to_string).collect()
    };

    Ok(VersionParts {
        base: format!("{}.{}.{}", parsed.major, parsed.minor, parsed.patch),
        prerelease,
    })
}

/// Builds a version string from a base and pre-release identifiers.
///
/// Returns `base` unchanged when there are no identifiers.
pub fn build_version<S: AsRef<str>>(base: &str, prerelease: &[S]) -> String {
    if prerelease.is_empty() {
        return base.to_string();
    }

    let joined: Vec<&str> = prerelease.iter().map(AsRef::as_ref).collect();
    format!("{}-{}", base, joined.join("."))
}

/// Returns true if the version carries pre-release identifiers.
///
/// Unparseable input yields `false` instead of an error.
pub fn is_pre_release(version: &str) -> bool {
    parse(version)
        .map(|parsed| !parsed.pre.is_empty())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_pre_release_stable() {
        assert!(!is_pre_release("2.0.0"));
        assert!(!is_pre_release("1.8.5"));
    }

    #[test]
    fn test_is_pre_release_prerelease() {
        assert!(is_pre_release("2.0.0-beta.0"));
        assert!(is_pre_release("2.0.0-alpha.1"));
        assert!(is_pre_release("2.0.0-main.build.123"));
    }

    #[test]
    fn test_is_pre_release_invalid_is_false() {
        assert!(!is_pre_release("not-a-version"));
        assert!(!is_pre_release("1.2"));
        assert!(!is_pre_release(""));
    }

    #[test]
    fn test_extract_prerelease() {
        let parts = extract_version_parts("2.0.0-beta.0").unwrap();
        assert_eq!(parts.base, "2.0.0");
        assert_eq!(parts.prerelease, vec!["beta", "0"]);
        assert!(parts.is_pre_release());
    }

    #[test]
    fn test_extract_stable() {
        let parts = extract_version_parts("2.0.0").unwrap();
        assert_eq!(parts.base, "2.0.0");
        assert!(parts.prerelease.is_empty());
        assert!(!parts.is_pre_release());
    }

    #[test]
    fn test_extract_complex_prerelease() {
        let parts = extract_version_parts("2.0.0-feature.auth.beta.0").unwrap();
        assert_eq!(parts.base, "2.0.0");
        assert_eq!(parts.prerelease, vec!["feature", "auth", "beta", "0"]);
    }

    #[test]
    fn test_extract_hyphenated_identifier() {
        let parts = extract_version_parts("1.0.0-team.new-thing").unwrap();
        assert_eq!(parts.prerelease, vec!["team", "new-thing"]);
    }

    #[test]
    fn test_extract_invalid() {
        for input in ["", "1.2", "v1.2.3.4", "abc", "1.2.3-", "01.2.3", "1.2.3+build.5"] {
            match extract_version_parts(input) {
                Err(GitFlowError::InvalidSemver(v)) => assert_eq!(v, input),
                other => panic!("expected InvalidSemver for {:?}, got {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_build_version() {
        assert_eq!(build_version("2.0.0", &["beta", "0"]), "2.0.0-beta.0");
        assert_eq!(build_version("2.0.0", &["feature", "auth"]), "2.0.0-feature.auth");
        assert_eq!(
            build_version("2.0.0", &["feature", "auth", "beta", "0"]),
            "2.0.0-feature.auth.beta.0"
        );
    }

    #[test]
    fn test_build_version_empty_prerelease() {
        let empty: [&str; 0] = [];
        assert_eq!(build_version("2.0.0", &empty), "2.0.0");
    }

    #[test]
    fn test_round_trip() {
        for input in ["2.0.0", "2.0.0-beta.0", "10.20.30-rc.1.x-y", "0.0.0-DEFAULT"] {
            let parts = extract_version_parts(input).unwrap();
            assert_eq!(build_version(&parts.base, &parts.prerelease), input);
        }
    }
}
