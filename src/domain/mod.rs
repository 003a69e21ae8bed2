//! Domain logic - pure version rules independent of git operations

pub mod branch;
pub mod tag;
pub mod version;

pub use branch::{
    get_branch_type, is_mainline_branch, sanitize_branch_name, BranchContext, BranchType,
};
pub use tag::{Tag, TAG_PREFIX};
pub use version::{build_version, extract_version_parts, is_pre_release, VersionParts};
