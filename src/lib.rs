pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod resolve;

pub use error::{GitFlowError, Result};
pub use resolve::{resolve_version, ResolutionInput, ResolvedVersion, VersionResolver};
