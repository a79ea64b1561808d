//! One-shot helpers: parse a version string, bump it, render it.
//!
//! ```
//! assert_eq!(versioner::minor("v1.2.3-beta"), "v1.3.0");
//! ```

use crate::config::Config;
use crate::domain::{VersionSegment, VersionString};

/// Bumps `version` along `segment` and returns the rendered result.
///
/// Suffix and build metadata are dropped, as with [`VersionString::bump`].
pub fn bump(version: &str, segment: VersionSegment) -> String {
    VersionString::new(version).bump(segment).to_string()
}

/// Bumps `version` using the segment and suffix handling from `config`.
///
/// # Example
/// ```
/// use versioner::config::Config;
///
/// let config = Config::from_toml_str("[bump]\nsegment = \"major\"\npreserve_suffix = true\n").unwrap();
/// assert_eq!(versioner::bump_with_config("v1.2.3-beta+7", &config), "v2.0.0-beta");
/// ```
pub fn bump_with_config(version: &str, config: &Config) -> String {
    let mut version = VersionString::new(version);
    config
        .apply(&mut version)
        .bump(config.bump.segment)
        .to_string()
}

pub fn major(version: &str) -> String {
    bump(version, VersionSegment::Major)
}

pub fn minor(version: &str) -> String {
    bump(version, VersionSegment::Minor)
}

pub fn patch(version: &str) -> String {
    bump(version, VersionSegment::Patch)
}
