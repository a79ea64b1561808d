pub mod config;
pub mod domain;
pub mod error;
pub mod version;

pub use domain::{VersionSegment, VersionString};
pub use error::{Result, VersionerError};
pub use version::{bump, bump_with_config, major, minor, patch};
