//! Free-form version strings
//!
//! A [`VersionString`] splits text such as `"v2.10.3-beta+build.7"` into a
//! prefix, a numeric triplet, a pre-release suffix and build metadata. The
//! numbers can then be bumped and the whole thing rendered back to text with
//! the original prefix kept in place.

use crate::domain::VersionSegment;
use regex::Regex;
use std::convert::Infallible;
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;
use std::sync::LazyLock;

/// Everything before the first digit
static PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^0-9]*").expect("Invalid regex"));

/// First run of digits and dots, skipping anything else in front of it
static NUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^0-9.]*([0-9.]+)").expect("Invalid regex"));

/// A version identifier decomposed into prefix, numbers, suffix and build
///
/// Construction never fails: text without any digits simply yields `0.0.0`
/// with the whole input kept as the prefix.
///
/// # Examples
/// ```
/// use versioner::{VersionSegment, VersionString};
///
/// let mut version = VersionString::new("v1.2.3-beta+build.7");
/// assert_eq!(version.prefix(), "v");
/// assert_eq!(version.suffix(), Some("beta"));
///
/// version.bump(VersionSegment::Minor);
/// assert_eq!(version.to_string(), "v1.3.0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionString {
    original: String,
    prefix: String,
    major: u64,
    minor: u64,
    patch: u64,
    suffix: Option<String>,
    build: Option<String>,
    preserve_suffix: bool,
}

impl VersionString {
    /// Decompose a raw version string
    ///
    /// The prefix is taken from the untouched input. Build metadata is split
    /// off at the first `+`, then the suffix at the first `-`, and the numbers
    /// come from the first digit/dot run of what remains.
    pub fn new(version: impl Into<String>) -> Self {
        let original = version.into();

        let prefix = PREFIX_REGEX
            .find(&original)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        let (version_part, build) = split_facet(&original, '+');
        let (numeric_part, suffix) = split_facet(version_part, '-');
        let [major, minor, patch] = parse_numbers(numeric_part);

        log::debug!(
            "Parsed '{}' as prefix={:?} numbers={}.{}.{} suffix={:?} build={:?}",
            original,
            prefix,
            major,
            minor,
            patch,
            suffix,
            build
        );

        VersionString {
            original,
            prefix,
            major,
            minor,
            patch,
            suffix,
            build,
            preserve_suffix: false,
        }
    }

    /// Bump the major version of `version` and render the result
    pub fn increment_major(version: &str) -> String {
        VersionString::new(version)
            .bump(VersionSegment::Major)
            .to_string()
    }

    /// Bump the minor version of `version` and render the result
    pub fn increment_minor(version: &str) -> String {
        VersionString::new(version)
            .bump(VersionSegment::Minor)
            .to_string()
    }

    /// Bump the patch version of `version` and render the result
    pub fn increment_patch(version: &str) -> String {
        VersionString::new(version)
            .bump(VersionSegment::Patch)
            .to_string()
    }

    /// Increment one segment in place
    ///
    /// Build metadata is always dropped and the suffix is dropped unless
    /// [`preserve_suffix`](Self::preserve_suffix) was called:
    /// - **Major**: major += 1, minor = 0, patch = 0
    /// - **Minor**: minor += 1, patch = 0
    /// - **Patch**: patch += 1
    pub fn bump(&mut self, segment: VersionSegment) -> &mut Self {
        self.clear_extensions();

        match segment {
            VersionSegment::Major => {
                self.major = self.major.saturating_add(1);
                self.minor = 0;
                self.patch = 0;
            }
            VersionSegment::Minor => {
                self.minor = self.minor.saturating_add(1);
                self.patch = 0;
            }
            VersionSegment::Patch => {
                self.patch = self.patch.saturating_add(1);
            }
        }

        log::debug!("Bumped {} of '{}' to '{}'", segment, self.original, self);
        self
    }

    /// Alias of [`bump`](Self::bump)
    pub fn increment(&mut self, segment: VersionSegment) -> &mut Self {
        self.bump(segment)
    }

    /// Keep the pre-release suffix across later bumps
    pub fn preserve_suffix(&mut self) -> &mut Self {
        self.preserve_suffix = true;
        self
    }

    /// The input this value was parsed from, verbatim
    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    pub fn preserves_suffix(&self) -> bool {
        self.preserve_suffix
    }

    fn clear_extensions(&mut self) {
        if !self.preserve_suffix {
            self.suffix = None;
        }
        self.build = None;
    }
}

/// Split `s` at the first `sep`, returning the head and the optional tail
fn split_facet(s: &str, sep: char) -> (&str, Option<String>) {
    match s.split_once(sep) {
        Some((head, tail)) => (head, Some(tail.to_string())),
        None => (s, None),
    }
}

fn parse_numbers(numeric_part: &str) -> [u64; 3] {
    let mut numbers = [0; 3];

    let Some(run) = NUMERIC_REGEX
        .captures(numeric_part)
        .and_then(|caps| caps.get(1))
    else {
        return numbers;
    };

    for (slot, segment) in numbers.iter_mut().zip(run.as_str().split('.')) {
        *slot = parse_segment(segment);
    }
    numbers
}

/// Segments hold only ASCII digits, so the only failures are an empty
/// segment (0) and overflow (saturate).
fn parse_segment(segment: &str) -> u64 {
    match segment.parse::<u64>() {
        Ok(n) => n,
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => u64::MAX,
        Err(_) => 0,
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = format!("{}{}.{}.{}", self.prefix, self.major, self.minor, self.patch);

        rendered.push('-');
        if let Some(suffix) = &self.suffix {
            rendered.push_str(suffix);
        }
        let mut rendered = rendered.trim_matches('-').to_string();

        rendered.push('+');
        if let Some(build) = &self.build {
            rendered.push_str(build);
        }

        f.write_str(rendered.trim_matches(|c: char| matches!(c, '.' | '-' | '+')))
    }
}

impl FromStr for VersionString {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(VersionString::new(s))
    }
}

impl From<&str> for VersionString {
    fn from(version: &str) -> Self {
        VersionString::new(version)
    }
}

impl From<String> for VersionString {
    fn from(version: String) -> Self {
        VersionString::new(version)
    }
}
