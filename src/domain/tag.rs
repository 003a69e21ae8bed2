/// Prefix every version tag carries
pub const TAG_PREFIX: &str = "v";

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Candidate tag for a version (e.g., "2.0.0" -> "v2.0.0")
    pub fn for_version(version: &str) -> Self {
        Tag {
            name: format!("{}{}", TAG_PREFIX, version),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_for_version() {
        assert_eq!(Tag::for_version("2.0.0").as_str(), "v2.0.0");
        assert_eq!(
            Tag::for_version("2.0.0-feature.auth").to_string(),
            "v2.0.0-feature.auth"
        );
    }
}
