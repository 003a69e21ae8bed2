use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Classification of a branch for version resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchType {
    /// Release line without a path separator (e.g. "main", "v1.8")
    Mainline,
    /// Work branch with at least one path separator (e.g. "feature/auth")
    Development,
}

impl fmt::Display for BranchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BranchType::Mainline => write!(f, "mainline"),
            BranchType::Development => write!(f, "development"),
        }
    }
}

/// Returns true if the branch is a mainline branch.
///
/// Mainline branches do not contain a forward slash.
pub fn is_mainline_branch(branch: &str) -> bool {
    !branch.contains('/')
}

/// Classifies a branch as mainline or development.
pub fn get_branch_type(branch: &str) -> BranchType {
    if is_mainline_branch(branch) {
        BranchType::Mainline
    } else {
        BranchType::Development
    }
}

fn unsafe_chars() -> &'static Regex {
    static UNSAFE: OnceLock<Regex> = OnceLock::new();
    UNSAFE.get_or_init(|| Regex::new(r"[^A-Za-z0-9.-]").expect("valid sanitization pattern"))
}

/// Sanitizes a branch name for use as a pre-release identifier segment.
///
/// Slashes become dots, then every character outside `[A-Za-z0-9.-]` becomes a dot.
///
/// # Example
/// ```
/// use git_flow::domain::branch::sanitize_branch_name;
///
/// assert_eq!(sanitize_branch_name("team/feature/auth"), "team.feature.auth");
/// assert_eq!(sanitize_branch_name("feature@test"), "feature.test");
/// ```
pub fn sanitize_branch_name(branch: &str) -> String {
    let dotted = branch.replace('/', ".");
    unsafe_chars().replace_all(&dotted, ".").into_owned()
}

/// Represents a git branch with its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchContext {
    pub name: String,
    pub branch_type: BranchType,
}

impl BranchContext {
    /// Create a new branch context
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let branch_type = get_branch_type(&name);

        BranchContext { name, branch_type }
    }

    /// Branch name as a version-safe token
    pub fn sanitized(&self) -> String {
        sanitize_branch_name(&self.name)
    }
}
