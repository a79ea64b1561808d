use crate::error::{VersionerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Axis along which a version is bumped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VersionSegment {
    Major,
    Minor,
    #[default]
    Patch,
}

impl FromStr for VersionSegment {
    type Err = VersionerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "major" => Ok(VersionSegment::Major),
            "minor" => Ok(VersionSegment::Minor),
            "patch" => Ok(VersionSegment::Patch),
            _ => Err(VersionerError::segment(s)),
        }
    }
}

impl fmt::Display for VersionSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionSegment::Major => write!(f, "major"),
            VersionSegment::Minor => write!(f, "minor"),
            VersionSegment::Patch => write!(f, "patch"),
        }
    }
}
